use super::{entry_id::EntryId, platform::RideCounts};
use crate::core::calculator::ratio;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged work day.
///
/// Serialized with camelCase keys and `date` as `YYYY-MM-DD`; this is the
/// exact shape stored in the persistence slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSessionEntry {
    pub id: EntryId,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub earnings: f64,
    pub expenses: f64,
    pub distance: f64,
    #[serde(default)]
    pub hours_worked: f64,
    #[serde(default)]
    pub rides_by_platform: RideCounts,
    /// Stored redundantly at creation time
    #[serde(default)]
    pub earnings_per_distance: f64,
}

impl WorkSessionEntry {
    /// Build a new entry with a fresh id and the derived earnings/km.
    pub fn new(
        date: NaiveDate,
        earnings: f64,
        expenses: f64,
        distance: f64,
        hours_worked: f64,
        rides_by_platform: RideCounts,
    ) -> Self {
        Self {
            id: EntryId::generate(),
            date,
            earnings,
            expenses,
            distance,
            hours_worked,
            rides_by_platform,
            earnings_per_distance: ratio(earnings, distance),
        }
    }

    pub fn net_profit(&self) -> f64 {
        self.earnings - self.expenses
    }

    pub fn total_rides(&self) -> u64 {
        self.rides_by_platform.total()
    }

    /// Check the non-negative contract on every numeric field.
    ///
    /// The repository trusts its inputs; callers building entries from
    /// user input run this first.
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in self.amounts() {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::InvalidAmount { field, value });
            }
        }
        Ok(())
    }

    /// First NaN or infinite amount; JSON has no representation for those.
    pub fn non_finite_amount(&self) -> Option<AppError> {
        self.amounts()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(field, value)| AppError::InvalidAmount { field, value })
    }

    fn amounts(&self) -> [(&'static str, f64); 5] {
        [
            ("earnings", self.earnings),
            ("expenses", self.expenses),
            ("distance", self.distance),
            ("hours", self.hours_worked),
            ("earnings per distance", self.earnings_per_distance),
        ]
    }
}

/// `NaiveDate` <-> `"YYYY-MM-DD"`.
///
/// Reading also accepts timestamp-shaped dates
/// (`2024-03-01T00:00:00.000Z`); the calendar date is taken as written.
pub(crate) mod iso_date {
    use crate::utils::date::{format_iso, parse_stored_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_iso(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_stored_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date '{raw}'")))
    }
}
