pub mod session_model;

pub use session_model::{CalculationRecord, SessionContext, SessionRegistry};
