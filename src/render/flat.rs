use crate::indent;
use crate::libs::colored;
use crate::render::padding;
use crate::render::pick_color;
use crate::render::HighlightOptions;

/// The "indent" style: each line gets the background color of its raw
/// indentation level, an optional right-aligned line number, and is
/// padded out to the configured width. Blank lines stay blank.
pub fn render_flat(code: &str, opts: &HighlightOptions) -> String {
    let unit = match opts.indent_unit {
        Some(x) => x,
        None => indent::detect_indent_unit(code),
    };

    let lines: Vec<&str> = code.split('\n').collect();
    let num_width = lines.len().to_string().len();

    let mut result = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            result.push(String::new());
            continue;
        }

        let level = indent::indent_level(line, unit, opts.tab_columns);
        let color = pick_color(level);

        let prefix = if opts.show_line_numbers {
            format!("{:>width$}) ", i + 1, width = num_width)
        } else {
            String::new()
        };

        let content = line.trim_end();
        let used = prefix.chars().count() + content.chars().count();
        let fill = padding(used, opts.width);

        let formatted = format!(
            "{}{}{}{}{}{}",
            prefix,
            color,
            colored::WHITE,
            content,
            fill,
            colored::RESET
        );
        result.push(formatted);
    }

    result.join("\n")
}
