//! Calendar-bucketed aggregation over a session's footprint history.
//!
//! Every request is a full recompute over the record list; histories are
//! session-lifetime-bounded.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::aggregation::aggregation_model::{ChartSeries, FootprintBucket, Granularity};
use crate::progress::progress_model::FootprintRecord;

pub struct AggregationEngine;

impl AggregationEngine {
    /// Partition records by calendar bucket and sum footprints per bucket.
    /// Buckets with no records are omitted; output is ascending by bucket
    /// start. An empty history yields an empty table.
    pub fn aggregate(records: &[FootprintRecord], granularity: Granularity) -> Vec<FootprintBucket> {
        let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for record in records {
            let start = Self::bucket_start(record.date, granularity);
            *totals.entry(start).or_insert(0.0) += record.footprint;
        }

        totals
            .into_iter()
            .map(|(bucket_start, total_footprint)| FootprintBucket {
                bucket_start,
                total_footprint,
            })
            .collect()
    }

    /// All four granularities from the same history, for the rendering
    /// collaborator.
    pub fn aggregate_all(records: &[FootprintRecord]) -> ChartSeries {
        ChartSeries {
            daily: Self::aggregate(records, Granularity::Daily),
            weekly: Self::aggregate(records, Granularity::Weekly),
            monthly: Self::aggregate(records, Granularity::Monthly),
            yearly: Self::aggregate(records, Granularity::Yearly),
        }
    }

    /// First calendar day of the bucket containing `date`: the day itself,
    /// the ISO week's Monday, the first of the month, or January 1st.
    pub fn bucket_start(date: NaiveDate, granularity: Granularity) -> NaiveDate {
        match granularity {
            Granularity::Daily => date,
            Granularity::Weekly => {
                date - Duration::days(date.weekday().num_days_from_monday() as i64)
            }
            Granularity::Monthly => date.with_day(1).unwrap_or(date),
            Granularity::Yearly => {
                NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
            }
        }
    }
}
