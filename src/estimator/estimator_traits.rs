use crate::errors::Result;
use crate::footprint::footprint_model::UsageInput;

/// The footprint-estimator capability. Both the fixed linear formula and
/// the fitted regression model implement it, so services stay generic over
/// the strategy.
pub trait FootprintEstimator {
    /// Estimate the CO2 footprint for one set of consumption figures.
    /// Fails only on malformed (negative) input.
    fn estimate(&self, input: &UsageInput) -> Result<f64>;
}
