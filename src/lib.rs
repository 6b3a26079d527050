//! Blockview colors each line of a code snippet by how deeply it is
//! nested, to help beginners see how indentation forms blocks.
//!
//! It only looks at leading whitespace: there is no parsing, no syntax
//! awareness, and no promise for languages that do not indent like
//! Python does.
//!
//! Here is how to use blockview as a library:
//!
//! **Add blockview into Cargo.toml**
//!
//! ```no-run
//! [dependencies]
//! blockview = "0.1.0"
//! ```
//!
//! **Use blockview functions**
//!
//! ```no-run
//! fn main() {
//!     let code = "if x:\n    y()";
//!
//!     // one string of ANSI-decorated lines, colored by indent level
//!     let out = blockview::highlight_by_indent(code, true);
//!     assert_eq!(out.split('\n').count(), 2);
//!
//!     // or colored by open-block depth, with │ nesting markers
//!     let out = blockview::highlight_by_blocks(code);
//!     assert!(out.ends_with("\x1b[0m"));
//!
//!     // or print directly
//!     blockview::highlight(code, blockview::Style::Blocks, false);
//! }
//! ```
#[macro_use]
extern crate lazy_static;

mod ctime;

#[macro_use]
mod tlog;

pub mod demo;
mod indent;
mod libs;
mod render;

pub use indent::detect_indent_unit;
pub use render::HighlightOptions;
pub use render::NestingColors;
pub use render::Style;

/// Render `code` colored by raw indentation level, one decorated line
/// per input line.
pub fn highlight_by_indent(code: &str, show_line_numbers: bool) -> String {
    let opts = HighlightOptions {
        show_line_numbers,
        ..HighlightOptions::default()
    };
    render::render_flat(code, &opts)
}

/// Like [`highlight_by_indent`] with full control over unit detection,
/// tab handling and width.
pub fn highlight_by_indent_with_options(code: &str, opts: &HighlightOptions) -> String {
    render::render_flat(code, opts)
}

/// Render `code` colored by open-block stack depth, with `│ ` markers
/// showing the nesting.
pub fn highlight_by_blocks(code: &str) -> String {
    render::render_blocks(code, &HighlightOptions::default())
}

/// Like [`highlight_by_blocks`] with full control over the options,
/// including the legacy vs. cycled palette arithmetic.
pub fn highlight_by_blocks_with_options(code: &str, opts: &HighlightOptions) -> String {
    render::render_blocks(code, opts)
}

/// Highlight `code` in the given style and print it to stdout.
pub fn highlight(code: &str, style: Style, show_line_numbers: bool) {
    let opts = HighlightOptions {
        show_line_numbers,
        ..HighlightOptions::default()
    };
    let output = match style {
        Style::Indent => render::render_flat(code, &opts),
        Style::Blocks => render::render_blocks(code, &opts),
    };
    println!("{}", output);
}
