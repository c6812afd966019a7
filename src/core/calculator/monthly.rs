use super::period::{PeriodStats, period_stats};
use crate::models::WorkSessionEntry;
use crate::utils::date::same_month;
use chrono::NaiveDate;

/// Statistics for the calendar month (and year) containing `now`.
///
/// Entries from any other month, including the same month of another year,
/// are ignored.
pub fn monthly_stats(entries: &[WorkSessionEntry], now: NaiveDate) -> PeriodStats {
    period_stats(entries.iter().filter(|e| same_month(&e.date, &now)))
}
