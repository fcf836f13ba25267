use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar granularity a history can be bucketed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Daily,
        Granularity::Weekly,
        Granularity::Monthly,
        Granularity::Yearly,
    ];
}

/// Summed footprint for one calendar bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintBucket {
    /// First calendar day of the bucket
    pub bucket_start: NaiveDate,
    pub total_footprint: f64,
}

/// All four bucket tables for one history, recomputed together on every
/// request. Empty tables mean the rendering collaborator skips that chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub daily: Vec<FootprintBucket>,
    pub weekly: Vec<FootprintBucket>,
    pub monthly: Vec<FootprintBucket>,
    pub yearly: Vec<FootprintBucket>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
            && self.weekly.is_empty()
            && self.monthly.is_empty()
            && self.yearly.is_empty()
    }
}
