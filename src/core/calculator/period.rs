use super::ratio;
use crate::models::{RideCounts, WorkSessionEntry};
use chrono::NaiveDate;

/// Aggregate figures over a set of entries.
///
/// An empty set yields all zeros, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodStats {
    pub days_worked: usize,
    pub total_earnings: f64,
    pub total_expenses: f64,
    pub total_distance: f64,
    pub total_hours: f64,
    pub net_profit: f64,
    pub rides_by_platform: RideCounts,
    pub total_rides: u64,
    pub avg_earnings_per_distance: f64,
    pub avg_earnings_per_ride: f64,
    pub earnings_per_hour: f64,
    pub profit_per_distance: f64,
}

/// Aggregate every entry yielded by `entries`; filtering is up to the caller.
pub fn period_stats<'a, I>(entries: I) -> PeriodStats
where
    I: IntoIterator<Item = &'a WorkSessionEntry>,
{
    let mut stats = PeriodStats::default();

    for e in entries {
        stats.days_worked += 1;
        stats.total_earnings += e.earnings;
        stats.total_expenses += e.expenses;
        stats.total_distance += e.distance;
        stats.total_hours += e.hours_worked;
        stats.rides_by_platform += e.rides_by_platform;
    }

    stats.net_profit = stats.total_earnings - stats.total_expenses;
    stats.total_rides = stats.rides_by_platform.total();
    stats.avg_earnings_per_distance = ratio(stats.total_earnings, stats.total_distance);
    stats.avg_earnings_per_ride = ratio(stats.total_earnings, stats.total_rides as f64);
    stats.earnings_per_hour = ratio(stats.total_earnings, stats.total_hours);
    stats.profit_per_distance = ratio(stats.net_profit, stats.total_distance);

    stats
}

/// Aggregate entries dated within `from..=to`.
pub fn stats_in_range(entries: &[WorkSessionEntry], from: NaiveDate, to: NaiveDate) -> PeriodStats {
    period_stats(entries.iter().filter(|e| e.date >= from && e.date <= to))
}
