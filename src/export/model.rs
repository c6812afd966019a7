use crate::models::WorkSessionEntry;
use crate::utils::date::format_iso;
use serde::Serialize;

/// Flat row used by CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: String,
    pub date: String,
    pub earnings: f64,
    pub expenses: f64,
    pub net_profit: f64,
    pub distance: f64,
    pub hours_worked: f64,
    pub earnings_per_distance: f64,
    pub rides_uber: u64,
    pub rides_ninety_nine: u64,
    pub rides_in_driver: u64,
    pub rides_total: u64,
}

impl From<&WorkSessionEntry> for EntryExport {
    fn from(e: &WorkSessionEntry) -> Self {
        Self {
            id: e.id.to_string(),
            date: format_iso(&e.date),
            earnings: e.earnings,
            expenses: e.expenses,
            net_profit: e.net_profit(),
            distance: e.distance,
            hours_worked: e.hours_worked,
            earnings_per_distance: e.earnings_per_distance,
            rides_uber: e.rides_by_platform.uber,
            rides_ninety_nine: e.rides_by_platform.ninety_nine,
            rides_in_driver: e.rides_by_platform.in_driver,
            rides_total: e.total_rides(),
        }
    }
}
