use regex::Regex;

/// Indent unit to assume when the text gives no hint.
pub const DEFAULT_INDENT_UNIT: usize = 4;

lazy_static! {
    // first line that starts with at least one space; group 1 is the run
    static ref RE_LEADING_SPACES: Regex = Regex::new(r"(?m)^( +)").expect("bad regex");
}

/// Detect how many space characters make up one indent level.
///
/// The first line that starts with a space decides: its run of contiguous
/// leading spaces is the unit. Lines starting with a tab (or not indented
/// at all) are skipped; tabs are never an indent signal here. Falls back
/// to [`DEFAULT_INDENT_UNIT`] when nothing in the text is indented.
pub fn detect_indent_unit(code: &str) -> usize {
    if let Some(caps) = RE_LEADING_SPACES.captures(code) {
        if let Some(x) = caps.get(1) {
            let spaces = x.as_str().len();
            if spaces > 0 {
                return spaces;
            }
        }
    }
    DEFAULT_INDENT_UNIT
}

/// Indentation depth of a single line: leading columns divided by the
/// unit, truncating. Blank and whitespace-only lines are depth 0.
///
/// A space is one column. A tab counts `tab_columns` columns (0 keeps
/// the spaces-only behavior, so mixed tab/space input under-counts).
/// Ragged indentation truncates to the lower level, e.g. 5 spaces at
/// unit 4 is depth 1.
pub fn indent_level(line: &str, unit: usize, tab_columns: usize) -> usize {
    if unit == 0 || line.trim().is_empty() {
        return 0;
    }
    let mut columns = 0;
    for c in line.chars() {
        match c {
            ' ' => columns += 1,
            '\t' => columns += tab_columns,
            _ => break,
        }
    }
    columns / unit
}
