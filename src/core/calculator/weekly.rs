use crate::models::{RideCounts, WorkSessionEntry};
use chrono::{Datelike, Duration, NaiveDate};

/// Weekly view: ride counts only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyStats {
    pub week_start: NaiveDate,
    pub rides_by_platform: RideCounts,
}

impl WeeklyStats {
    pub fn total_rides(&self) -> u64 {
        self.rides_by_platform.total()
    }
}

/// Most recent Sunday on or before `now`.
pub fn start_of_week(now: NaiveDate) -> NaiveDate {
    let back = now.weekday().num_days_from_sunday() as i64;
    now - Duration::days(back)
}

/// Ride counts per platform for entries dated on or after the start of the
/// week containing `now`. There is no upper bound: entries dated after
/// `now` are counted too.
pub fn weekly_stats(entries: &[WorkSessionEntry], now: NaiveDate) -> WeeklyStats {
    let start = start_of_week(now);

    let rides_by_platform = entries
        .iter()
        .filter(|e| e.date >= start)
        .fold(RideCounts::default(), |acc, e| acc + e.rides_by_platform);

    WeeklyStats {
        week_start: start,
        rides_by_platform,
    }
}
