/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Profit color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_profit(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Wrap `text` in the profit color of `value`
pub fn colorize_profit(value: f64, text: &str) -> String {
    format!("{}{}{}", color_for_profit(value), text, RESET)
}
