use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One footprint measurement in a session's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintRecord {
    pub date: NaiveDate,
    /// Estimated footprint, non-negative
    pub footprint: f64,
}

/// Achievement table, evaluated in order. Names are unlocked at most once
/// per session when cumulative points reach the threshold.
pub const ACHIEVEMENT_THRESHOLDS: &[(&str, u64)] = &[
    ("Beginner", 100),
    ("Intermediate", 500),
    ("Expert", 1000),
    ("Master", 5000),
];

/// Reference footprint (tons CO2/year). Calculations landing below it earn
/// points proportional to the distance under the baseline.
pub const BASELINE_FOOTPRINT: f64 = 15.0;
