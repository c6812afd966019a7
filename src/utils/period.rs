//! Period expressions shared by `list`, `report` and `export`.

use crate::errors::{AppError, AppResult};
use crate::utils::date::last_day_of_month;
use chrono::NaiveDate;

/// Inclusive date bounds of a period
pub type DateBounds = (NaiveDate, NaiveDate);

/// Parse a period expression.
///
/// Supported:
/// - `all`                  → no bounds (`None`)
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> AppResult<Option<DateBounds>> {
    let p = p.trim();

    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let bounds = match p.split_once(':') {
        Some((start_raw, end_raw)) => {
            let start = start_raw.trim();
            let end = end_raw.trim();

            if start.len() != end.len() {
                return Err(invalid(p, "start and end must have same format"));
            }

            let (from, _) = single_bounds(start).ok_or_else(|| invalid(p, "invalid start"))?;
            let (_, to) = single_bounds(end).ok_or_else(|| invalid(p, "invalid end"))?;
            (from, to)
        }
        None => single_bounds(p).ok_or_else(|| invalid(p, "unsupported format"))?,
    };

    if bounds.0 > bounds.1 {
        return Err(invalid(p, "start is after end"));
    }

    Ok(Some(bounds))
}

pub fn contains(bounds: &Option<DateBounds>, date: &NaiveDate) -> bool {
    match bounds {
        None => true,
        Some((from, to)) => date >= from && date <= to,
    }
}

fn single_bounds(s: &str) -> Option<DateBounds> {
    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let (ys, ms) = s.split_once('-')?;
            let y: i32 = ys.parse().ok()?;
            let m: u32 = ms.parse().ok()?;
            Some((NaiveDate::from_ymd_opt(y, m, 1)?, last_day_of_month(y, m)?))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

fn invalid(p: &str, reason: &str) -> AppError {
    AppError::InvalidPeriod(format!("'{p}': {reason}"))
}
