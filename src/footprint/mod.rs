pub mod footprint_model;
pub mod footprint_service;

pub use footprint_model::{CalculationOutcome, DietType, GaugeBand, GaugeReading, UsageInput};
pub use footprint_service::FootprintService;
