//! Grouping of entries into day / week / month / year buckets.

use super::period::{PeriodStats, period_stats};
use crate::models::WorkSessionEntry;
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub key: String,
    /// Earliest date that falls in the bucket; used for ordering
    pub start: NaiveDate,
    pub stats: PeriodStats,
}

/// Bucket label for `date`.
///
/// Weeks are counted inside the month: days 1-7 are `W1`, 8-14 `W2`, and
/// so on up to `W5`.
pub fn period_key(date: &NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => date.format("%Y-%m-%d").to_string(),
        Granularity::Week => {
            let week_of_month = date.day().div_ceil(7);
            format!("{}-W{}", date.format("%Y-%m"), week_of_month)
        }
        Granularity::Month => date.format("%Y-%m").to_string(),
        Granularity::Year => date.format("%Y").to_string(),
    }
}

/// One `PeriodSummary` per non-empty bucket, newest bucket first.
pub fn summarize_by_period(
    entries: &[WorkSessionEntry],
    granularity: Granularity,
) -> Vec<PeriodSummary> {
    let mut buckets: BTreeMap<String, (NaiveDate, Vec<&WorkSessionEntry>)> = BTreeMap::new();

    for e in entries {
        let bucket = buckets
            .entry(period_key(&e.date, granularity))
            .or_insert_with(|| (e.date, Vec::new()));
        bucket.0 = bucket.0.min(e.date);
        bucket.1.push(e);
    }

    let mut out: Vec<PeriodSummary> = buckets
        .into_iter()
        .map(|(key, (start, members))| PeriodSummary {
            key,
            start,
            stats: period_stats(members),
        })
        .collect();

    out.sort_by(|a, b| b.start.cmp(&a.start));
    out
}
