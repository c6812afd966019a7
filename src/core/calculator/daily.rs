use crate::models::WorkSessionEntry;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyStats {
    pub earnings: f64,
    pub expenses: f64,
    pub distance: f64,
    pub earnings_per_distance: f64,
    pub net_profit: f64,
}

/// Figures for the entry logged on `date`, or `None` if that day is empty.
///
/// `earnings_per_distance` is the value stored on the entry at creation.
pub fn daily_stats(entries: &[WorkSessionEntry], date: NaiveDate) -> Option<DailyStats> {
    entries.iter().find(|e| e.date == date).map(|e| DailyStats {
        earnings: e.earnings,
        expenses: e.expenses,
        distance: e.distance,
        earnings_per_distance: e.earnings_per_distance,
        net_profit: e.net_profit(),
    })
}
