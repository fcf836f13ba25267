//! Threshold-driven advisory text for a calculation request.

use crate::footprint::footprint_model::UsageInput;

/// Rule thresholds over the raw consumption figures.
const ELECTRICITY_THRESHOLD_KWH: f64 = 400.0;
const TRANSPORT_THRESHOLD_MILES: f64 = 150.0;
const WASTE_THRESHOLD_KG: f64 = 15.0;
/// Diet encodings above this value (Pescatarian, Regular) trigger the
/// reduce-meat advisory.
const DIET_THRESHOLD: u8 = 1;

pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Evaluate every rule independently and return all advisories that
    /// apply. Empty when nothing is over threshold.
    pub fn recommend(input: &UsageInput) -> Vec<String> {
        let mut recommendations = Vec::new();

        if input.electricity > ELECTRICITY_THRESHOLD_KWH {
            recommendations
                .push("Consider using energy-efficient appliances and LED bulbs".to_string());
        }
        if input.miles > TRANSPORT_THRESHOLD_MILES {
            recommendations
                .push("Try carpooling or using public transport more often".to_string());
        }
        if input.waste > WASTE_THRESHOLD_KG {
            recommendations
                .push("Implement recycling and composting to reduce waste".to_string());
        }
        if input.diet_encoded() > DIET_THRESHOLD {
            recommendations.push(
                "Consider reducing meat consumption for a lower carbon footprint".to_string(),
            );
        }

        recommendations
    }
}
