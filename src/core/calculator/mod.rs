//! Metrics engine: pure aggregation over a set of work-session entries.
//!
//! Nothing here is cached or stateful; every function recomputes from the
//! entries it is given.

pub mod daily;
pub mod grouping;
pub mod monthly;
pub mod period;
pub mod weekly;

pub use daily::{DailyStats, daily_stats};
pub use grouping::{Granularity, PeriodSummary, period_key, summarize_by_period};
pub use monthly::monthly_stats;
pub use period::{PeriodStats, period_stats, stats_in_range};
pub use weekly::{WeeklyStats, start_of_week, weekly_stats};

/// `numerator / denominator`, or 0 when the denominator is 0.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
