pub mod aggregation_model;
pub mod aggregation_service;

pub use aggregation_model::{ChartSeries, FootprintBucket, Granularity};
pub use aggregation_service::AggregationEngine;
