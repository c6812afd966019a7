use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Ride-hailing platforms a driver can log rides for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Platform {
    Uber,
    NinetyNine,
    InDriver,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Uber, Platform::NinetyNine, Platform::InDriver];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Uber => "Uber",
            Platform::NinetyNine => "99",
            Platform::InDriver => "inDriver",
        }
    }
}

/// Ride counts for every platform. Missing keys in stored data read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RideCounts {
    pub uber: u64,
    pub ninety_nine: u64,
    pub in_driver: u64,
}

impl RideCounts {
    pub fn new(uber: u64, ninety_nine: u64, in_driver: u64) -> Self {
        Self {
            uber,
            ninety_nine,
            in_driver,
        }
    }

    pub fn get(&self, platform: Platform) -> u64 {
        match platform {
            Platform::Uber => self.uber,
            Platform::NinetyNine => self.ninety_nine,
            Platform::InDriver => self.in_driver,
        }
    }

    pub fn set(&mut self, platform: Platform, count: u64) {
        match platform {
            Platform::Uber => self.uber = count,
            Platform::NinetyNine => self.ninety_nine = count,
            Platform::InDriver => self.in_driver = count,
        }
    }

    pub fn total(&self) -> u64 {
        self.uber + self.ninety_nine + self.in_driver
    }

    /// (platform, count) pairs in `Platform::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Platform, u64)> + '_ {
        Platform::ALL.iter().map(move |p| (*p, self.get(*p)))
    }
}

impl Add for RideCounts {
    type Output = RideCounts;

    fn add(self, rhs: RideCounts) -> RideCounts {
        RideCounts {
            uber: self.uber + rhs.uber,
            ninety_nine: self.ninety_nine + rhs.ninety_nine,
            in_driver: self.in_driver + rhs.in_driver,
        }
    }
}

impl AddAssign for RideCounts {
    fn add_assign(&mut self, rhs: RideCounts) {
        *self = *self + rhs;
    }
}
