mod blocks;
mod flat;

pub use self::blocks::render_blocks;
pub use self::flat::render_flat;

use std::str::FromStr;

use crate::libs::colored;

/// Display columns a decorated line is padded out to.
pub const DEFAULT_WIDTH: usize = 80;

/// Which renderer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Color by the open-block stack depth, with `│ ` nesting markers.
    Blocks,
    /// Color by each line's raw indentation level.
    Indent,
}

impl Default for Style {
    fn default() -> Self {
        Style::Blocks
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blocks" => Ok(Style::Blocks),
            "indent" => Ok(Style::Indent),
            _ => Err(format!("unknown style: {} (expected blocks or indent)", s)),
        }
    }
}

/// How the blocks renderer maps stack depth to a palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestingColors {
    /// The original tool's arithmetic: `len(stack) - (1 mod 6)`, i.e. no
    /// wraparound below depth 7. Kept as the default for identical output.
    Legacy,
    /// Cycle through the palette: `(len(stack) - 1) mod 6`.
    Cycled,
}

/// Rendering configuration shared by both styles.
#[derive(Debug, Clone)]
pub struct HighlightOptions {
    /// Prefix each non-blank line with its number (indent style only).
    pub show_line_numbers: bool,
    /// Spaces per indent level; `None` auto-detects from the text.
    pub indent_unit: Option<usize>,
    /// Columns a leading tab counts for; 0 ignores tabs.
    pub tab_columns: usize,
    /// Palette arithmetic for the blocks style.
    pub nesting_colors: NestingColors,
    /// Total display columns each decorated line fills.
    pub width: usize,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        HighlightOptions {
            show_line_numbers: true,
            indent_unit: None,
            tab_columns: 0,
            nesting_colors: NestingColors::Legacy,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Background color for a nesting level; the palette cycles.
pub fn pick_color(level: usize) -> &'static str {
    colored::PALETTE[level % colored::PALETTE.len()]
}

/// Spaces to fill `used` columns out to `width`. Lines already wider
/// than `width` get no padding rather than an underflow.
pub fn padding(used: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(used))
}

#[cfg(test)]
mod tests {
    use super::padding;
    use super::pick_color;
    use super::Style;
    use crate::libs::colored::PALETTE;

    #[test]
    fn test_pick_color_cycles() {
        assert_eq!(pick_color(0), PALETTE[0]);
        assert_eq!(pick_color(5), PALETTE[5]);
        assert_eq!(pick_color(6), PALETTE[0]);
        assert_eq!(pick_color(13), PALETTE[1]);
    }

    #[test]
    fn test_padding_clamps() {
        assert_eq!(padding(78, 80), "  ");
        assert_eq!(padding(80, 80), "");
        // content wider than the target width must not underflow
        assert_eq!(padding(120, 80), "");
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("blocks".parse(), Ok(Style::Blocks));
        assert_eq!("indent".parse(), Ok(Style::Indent));
        assert!("rainbow".parse::<Style>().is_err());
    }
}
