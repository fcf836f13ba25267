//! Carbon footprint tracker engine.
//!
//! Session-scoped, single-threaded core behind a carbon-footprint
//! calculator UI: estimates footprints from consumption figures (fixed
//! formula or fitted regression model), keeps per-session history, derives
//! calendar-bucketed chart tables, and runs the points/achievements
//! progress system. Rendering, persistence and model training belong to
//! the host application.

pub mod aggregation;
pub mod errors;
pub mod estimator;
pub mod footprint;
pub mod progress;
pub mod recommendations;
pub mod session;

pub use aggregation::{AggregationEngine, ChartSeries, FootprintBucket, Granularity};
pub use errors::{Error, Result};
pub use estimator::{FootprintEstimator, LinearFormula, RegressionModel};
pub use footprint::{CalculationOutcome, DietType, FootprintService, GaugeReading, UsageInput};
pub use progress::{FootprintRecord, ProgressTracker};
pub use recommendations::RecommendationEngine;
pub use session::{SessionContext, SessionRegistry};
