use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Diet category, ordered from lowest to highest typical footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType {
    Vegan,
    Vegetarian,
    Pescatarian,
    Regular,
}

impl DietType {
    /// Fixed ordinal encoding used as the model's diet feature.
    pub fn encoded(&self) -> u8 {
        match self {
            DietType::Vegan => 0,
            DietType::Vegetarian => 1,
            DietType::Pescatarian => 2,
            DietType::Regular => 3,
        }
    }
}

/// Consumption figures for a single calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageInput {
    /// Electricity usage (kWh)
    pub electricity: f64,
    /// Gas consumption (litres)
    pub gas: f64,
    /// Transport distance driven (miles)
    pub miles: f64,
    /// Waste generated (kg)
    pub waste: f64,
    /// Diet category; treated as `Regular` when omitted
    pub diet: Option<DietType>,
}

impl UsageInput {
    /// Reject negative figures before they reach any estimator.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("electricity", self.electricity),
            ("gas", self.gas),
            ("miles", self.miles),
            ("waste", self.waste),
        ];
        for (name, value) in fields {
            if value < 0.0 {
                return Err(ValidationError::InvalidInput(format!(
                    "{} must be non-negative, got {}",
                    name, value
                ))
                .into());
            }
        }
        Ok(())
    }

    pub fn diet_encoded(&self) -> u8 {
        self.diet.unwrap_or(DietType::Regular).encoded()
    }
}

/// Band of the footprint gauge a value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GaugeBand {
    Low,
    Moderate,
    High,
}

/// Gauge reading handed to the rendering collaborator (tons CO2/year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeReading {
    pub value: f64,
    pub max_value: f64,
}

impl GaugeReading {
    pub const DEFAULT_MAX: f64 = 20.0;

    pub fn new(value: f64) -> Self {
        Self {
            value,
            max_value: Self::DEFAULT_MAX,
        }
    }

    /// Band boundaries sit at one third and two thirds of the range.
    pub fn band(&self) -> GaugeBand {
        if self.value < self.max_value / 3.0 {
            GaugeBand::Low
        } else if self.value < 2.0 * self.max_value / 3.0 {
            GaugeBand::Moderate
        } else {
            GaugeBand::High
        }
    }
}

/// Everything a caller needs to render the result of one calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationOutcome {
    /// Estimated footprint in the active estimator's scale
    pub footprint: f64,
    /// Points awarded by this calculation
    pub points_earned: u64,
    /// Cumulative session points after the award
    pub total_points: u64,
    /// Achievements newly unlocked by this calculation
    pub unlocked_achievements: Vec<String>,
    pub gauge: GaugeReading,
    pub recommendations: Vec<String>,
}
