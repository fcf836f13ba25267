use crate::errors::Result;
use crate::estimator::estimator_traits::FootprintEstimator;
use crate::footprint::footprint_model::UsageInput;

/// Empirical emission factors, kg CO2 per unit of consumption.
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.233;
pub const GAS_KG_PER_LITRE: f64 = 2.31;
pub const DRIVING_KG_PER_MILE: f64 = 0.411;
pub const WASTE_KG_PER_KG: f64 = 0.91;

/// Fixed weighted-sum footprint formula (kg CO2).
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearFormula;

impl LinearFormula {
    pub fn new() -> Self {
        LinearFormula
    }
}

impl FootprintEstimator for LinearFormula {
    fn estimate(&self, input: &UsageInput) -> Result<f64> {
        input.validate()?;
        Ok(input.electricity * ELECTRICITY_KG_PER_KWH
            + input.gas * GAS_KG_PER_LITRE
            + input.miles * DRIVING_KG_PER_MILE
            + input.waste * WASTE_KG_PER_KG)
    }
}
