pub mod progress_model;
pub mod progress_service;

pub use progress_model::{FootprintRecord, ACHIEVEMENT_THRESHOLDS, BASELINE_FOOTPRINT};
pub use progress_service::ProgressTracker;
