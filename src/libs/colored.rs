// ANSI escape sequences, written straight to stdout.
// full list - https://misc.flogisoft.com/bash/tip_colors_and_formatting
pub const RESET: &str = "\x1B[0m";
pub const WHITE: &str = "\x1B[97m";

// 256-color backgrounds, one per nesting level, dark enough for white text
pub const GREEN_BG: &str = "\x1B[48;5;22m";
pub const TAN_BG: &str = "\x1B[48;5;58m";
pub const BROWN_BG: &str = "\x1B[48;5;94m";
pub const PURPLE_BG: &str = "\x1B[48;5;54m";
pub const BLUE_BG: &str = "\x1B[48;5;24m";
pub const RED_BG: &str = "\x1B[48;5;88m";

/// Level colors in cycling order.
pub const PALETTE: [&str; 6] = [GREEN_BG, TAN_BG, BROWN_BG, PURPLE_BG, BLUE_BG, RED_BG];
