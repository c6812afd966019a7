//! Formatting utilities used for CLI and report outputs.
//!
//! Money and distance follow the pt-BR convention the app was built for:
//! `.` groups thousands, `,` separates decimals.

use crate::core::calculator::start_of_week;
use chrono::{Datelike, NaiveDate};

/// `1234.5` → `1.234,50`
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(f) => format!("{sign}{grouped},{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `1234.5` → `R$ 1.234,50`, `-10` → `-R$ 10,00`
pub fn format_currency(value: f64, symbol: &str) -> String {
    let amount = format_decimal(value, 2);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-{symbol} {abs}"),
        None => format!("{symbol} {amount}"),
    }
}

/// `12.5` → `12,5 km`, `12.0` → `12 km`
pub fn format_distance(value: f64, unit: &str) -> String {
    let rendered = format_decimal(value, 1);
    let trimmed = rendered.strip_suffix(",0").unwrap_or(&rendered);
    format!("{trimmed} {unit}")
}

/// `2.0` → `R$ 2,00/km`
pub fn format_value_per_km(value: f64, symbol: &str, unit: &str) -> String {
    format!("{}/{}", format_currency(value, symbol), unit)
}

/// Ratio to percent: `0.125` → `12.5%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn format_hours(value: f64) -> String {
    format!("{:.1}h", value)
}

pub fn format_rides(count: u64) -> String {
    if count == 1 {
        "1 ride".to_string()
    } else {
        format!("{count} rides")
    }
}

/// Human date relative to `today`:
/// `Today`, the weekday name within the current week (Sunday-based),
/// `d Month` within the current year, `d Month yyyy` otherwise.
pub fn format_smart_date(date: &NaiveDate, today: &NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }

    let week_start = start_of_week(*today);
    if *date >= week_start && (*date - week_start).num_days() < 7 {
        return date.format("%A").to_string();
    }

    if date.year() == today.year() {
        return date.format("%-d %B").to_string();
    }

    date.format("%-d %B %Y").to_string()
}
