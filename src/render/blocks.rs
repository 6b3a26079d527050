use crate::indent;
use crate::libs::colored;
use crate::render::padding;
use crate::render::pick_color;
use crate::render::HighlightOptions;
use crate::render::NestingColors;

const MARKER: &str = "│ ";

/// The "blocks" style: lines are colored by how many blocks are open
/// around them, not by their raw indentation, and carry one `│ ` margin
/// glyph per indent level. Ragged indentation thus lands back on the
/// color of the block it actually closes into.
pub fn render_blocks(code: &str, opts: &HighlightOptions) -> String {
    let unit = match opts.indent_unit {
        Some(x) => x,
        None => indent::detect_indent_unit(code),
    };

    let mut result = Vec::new();
    let mut stack: Vec<usize> = vec![0];

    for line in code.split('\n') {
        if line.trim().is_empty() {
            result.push(String::new());
            continue;
        }

        let level = indent::indent_level(line, unit, opts.tab_columns);
        update_stack(&mut stack, level);

        let color = stack_color(stack.len(), opts.nesting_colors);
        let marker = MARKER.repeat(level);
        let content = line.trim_start();

        let used = marker.chars().count() + content.chars().count();
        let fill = padding(used, opts.width);

        let formatted = format!(
            "{}{}{}{}{}{}",
            color,
            colored::WHITE,
            marker,
            content,
            fill,
            colored::RESET
        );
        result.push(formatted);
    }

    result.join("\n")
}

/// Open and close blocks against the incoming indent level. The bottom
/// sentinel 0 is never popped, so the stack stays non-empty and strictly
/// increasing.
fn update_stack(stack: &mut Vec<usize>, level: usize) {
    let top = match stack.last() {
        Some(x) => *x,
        None => 0,
    };
    if level > top {
        stack.push(level);
    } else if level < top {
        // dropping several levels at once closes several blocks
        while let Some(top) = stack.last() {
            if *top > level {
                stack.pop();
            } else {
                break;
            }
        }
    }
}

// The original tool computed the palette slot as `len(stack) - 1 % 6`,
// where the modulo binds to the 1, so the slot is just `len(stack) - 1`
// with no wraparound. Legacy keeps that arithmetic (the lookup itself
// still reduces the slot so depth 7+ wraps instead of failing); Cycled
// applies the modulo to the whole expression.
fn stack_color(stack_len: usize, mode: NestingColors) -> &'static str {
    let slot = match mode {
        NestingColors::Legacy => stack_len - 1 % colored::PALETTE.len(),
        NestingColors::Cycled => (stack_len - 1) % colored::PALETTE.len(),
    };
    pick_color(slot)
}

#[cfg(test)]
mod tests {
    use super::render_blocks;
    use super::stack_color;
    use super::update_stack;
    use crate::libs::colored::{PALETTE, RESET};
    use crate::render::{HighlightOptions, NestingColors};

    #[test]
    fn test_stack_walk() {
        let mut stack = vec![0];
        let mut seen = Vec::new();
        for level in [0, 1, 2, 1, 0] {
            update_stack(&mut stack, level);
            seen.push(stack.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0],
                vec![0, 1],
                vec![0, 1, 2],
                vec![0, 1],
                vec![0],
            ]
        );
    }

    #[test]
    fn test_stack_multi_pop() {
        let mut stack = vec![0, 1, 2, 3];
        update_stack(&mut stack, 0);
        assert_eq!(stack, vec![0]);
    }

    #[test]
    fn test_stack_keeps_sentinel() {
        let mut stack = vec![0];
        update_stack(&mut stack, 0);
        assert_eq!(stack, vec![0]);
    }

    #[test]
    fn test_stack_ragged_drop() {
        // closing from depth 2 to an unseen depth 1 pops without pushing
        let mut stack = vec![0, 2];
        update_stack(&mut stack, 1);
        assert_eq!(stack, vec![0]);
    }

    #[test]
    fn test_colors_follow_stack_depth() {
        let code = "a:\n    b:\n        c()\n    d()";
        let out = render_blocks(code, &HighlightOptions::default());
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains(PALETTE[0]));
        assert!(lines[1].contains(PALETTE[1]));
        assert!(lines[2].contains(PALETTE[2]));
        // back out one block: colored like line b again
        assert!(lines[3].contains(PALETTE[1]));
        for line in &lines {
            assert!(line.ends_with(RESET));
        }
    }

    #[test]
    fn test_markers_use_raw_depth() {
        let code = "a:\n    b:\n        c()";
        let out = render_blocks(code, &HighlightOptions::default());
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[0].matches('│').count(), 0);
        assert_eq!(lines[1].matches('│').count(), 1);
        assert_eq!(lines[2].matches('│').count(), 2);
    }

    #[test]
    fn test_blank_lines_skip_stack() {
        let code = "a:\n    b()\n\n    c()";
        let out = render_blocks(code, &HighlightOptions::default());
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[2], "");
        // c() is still inside the same block as b()
        assert!(lines[3].contains(PALETTE[1]));
    }

    #[test]
    fn test_legacy_matches_cycled_until_palette_end() {
        for stack_len in 1..=6 {
            assert_eq!(
                stack_color(stack_len, NestingColors::Legacy),
                stack_color(stack_len, NestingColors::Cycled),
            );
        }
    }

    #[test]
    fn test_deep_nesting_does_not_panic() {
        let mut code = String::new();
        for depth in 0..10 {
            code.push_str(&" ".repeat(depth * 4));
            code.push_str("if x:\n");
        }
        let opts = HighlightOptions {
            indent_unit: Some(4),
            ..HighlightOptions::default()
        };
        let out = render_blocks(&code, &opts);
        assert_eq!(out.split('\n').count(), 11);
        // the seventh nesting level wraps back to the first color
        let lines: Vec<&str> = out.split('\n').collect();
        assert!(lines[6].contains(PALETTE[0]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_blocks("", &HighlightOptions::default()), "");
    }
}
