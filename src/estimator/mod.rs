pub mod estimator_traits;
pub mod linear_formula;
pub mod model_store;
pub mod regression_model;

pub use estimator_traits::FootprintEstimator;
pub use linear_formula::LinearFormula;
pub use regression_model::RegressionModel;
