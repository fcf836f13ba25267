//! Linear regression over the fixed-order feature vector
//! `[electricity, transport, waste, diet_encoded]`.
//!
//! The model is a plain weight vector plus intercept, fitted by ordinary
//! least squares via the normal equations. Output is an annualized
//! footprint in tons CO2.

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, Result};
use crate::estimator::estimator_traits::FootprintEstimator;
use crate::footprint::footprint_model::UsageInput;

const FEATURES: usize = 4;
// FEATURES + intercept column
const TERMS: usize = 5;

/// Coefficients of the synthetic target the default model is fitted on
/// (tons CO2/year per feature unit).
const DEFAULT_TARGET_WEIGHTS: [f64; FEATURES] = [0.006, 0.015, 0.1, 1.2];
const DEFAULT_TARGET_INTERCEPT: f64 = 0.5;

/// Fitted linear predictor. Serialized as the optional on-disk model
/// artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionModel {
    pub weights: [f64; FEATURES],
    pub intercept: f64,
}

impl RegressionModel {
    /// Feature vector for a calculation request, in the model's fixed
    /// column order. A missing diet encodes as `Regular`.
    pub fn feature_vector(input: &UsageInput) -> [f64; FEATURES] {
        [
            input.electricity,
            input.miles,
            input.waste,
            input.diet_encoded() as f64,
        ]
    }

    pub fn predict(&self, features: &[f64; FEATURES]) -> f64 {
        self.weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }

    /// Ordinary-least-squares fit: accumulate the normal equations over the
    /// intercept-augmented rows and solve the resulting 5x5 system.
    pub fn fit(rows: &[[f64; FEATURES]], targets: &[f64]) -> Result<Self> {
        if rows.len() != targets.len() {
            return Err(ModelError::Fit(format!(
                "{} rows but {} targets",
                rows.len(),
                targets.len()
            ))
            .into());
        }
        if rows.len() < TERMS {
            return Err(ModelError::Fit(format!(
                "need at least {} rows, got {}",
                TERMS,
                rows.len()
            ))
            .into());
        }

        let mut normal = [[0.0f64; TERMS]; TERMS];
        let mut rhs = [0.0f64; TERMS];
        for (row, &y) in rows.iter().zip(targets.iter()) {
            let augmented = [row[0], row[1], row[2], row[3], 1.0];
            for i in 0..TERMS {
                for j in 0..TERMS {
                    normal[i][j] += augmented[i] * augmented[j];
                }
                rhs[i] += augmented[i] * y;
            }
        }

        let solution = solve(&mut normal, &mut rhs)?;
        Ok(Self {
            weights: [solution[0], solution[1], solution[2], solution[3]],
            intercept: solution[4],
        })
    }

    /// Default model, fitted on a deterministic grid spanning realistic
    /// input ranges with an exactly-linear tons-scale target. Used whenever
    /// no valid model artifact is available.
    pub fn fit_default() -> Self {
        let mut rows = Vec::new();
        let mut targets = Vec::new();
        for &electricity in &[0.0, 200.0, 400.0, 600.0, 800.0] {
            for &transport in &[0.0, 75.0, 150.0, 225.0] {
                for &waste in &[0.0, 10.0, 20.0] {
                    for diet in 0..4u8 {
                        let row = [electricity, transport, waste, diet as f64];
                        rows.push(row);
                        targets.push(synthetic_target(&row));
                    }
                }
            }
        }

        // The target is exactly linear in the features; its coefficients
        // are the exact solution.
        Self::fit(&rows, &targets).unwrap_or(Self {
            weights: DEFAULT_TARGET_WEIGHTS,
            intercept: DEFAULT_TARGET_INTERCEPT,
        })
    }
}

impl FootprintEstimator for RegressionModel {
    fn estimate(&self, input: &UsageInput) -> Result<f64> {
        input.validate()?;
        Ok(self.predict(&Self::feature_vector(input)))
    }
}

fn synthetic_target(row: &[f64; FEATURES]) -> f64 {
    DEFAULT_TARGET_WEIGHTS
        .iter()
        .zip(row.iter())
        .map(|(w, x)| w * x)
        .sum::<f64>()
        + DEFAULT_TARGET_INTERCEPT
}

/// Gaussian elimination with partial pivoting over the normal equations.
fn solve(matrix: &mut [[f64; TERMS]; TERMS], rhs: &mut [f64; TERMS]) -> Result<[f64; TERMS]> {
    const PIVOT_EPSILON: f64 = 1e-9;

    for col in 0..TERMS {
        let mut pivot_row = col;
        for row in (col + 1)..TERMS {
            if matrix[row][col].abs() > matrix[pivot_row][col].abs() {
                pivot_row = row;
            }
        }
        if matrix[pivot_row][col].abs() < PIVOT_EPSILON {
            return Err(ModelError::Fit("design matrix is singular".to_string()).into());
        }
        matrix.swap(col, pivot_row);
        rhs.swap(col, pivot_row);

        for row in (col + 1)..TERMS {
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..TERMS {
                matrix[row][k] -= factor * matrix[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut solution = [0.0f64; TERMS];
    for col in (0..TERMS).rev() {
        let mut value = rhs[col];
        for k in (col + 1)..TERMS {
            value -= matrix[col][k] * solution[k];
        }
        solution[col] = value / matrix[col][col];
    }
    Ok(solution)
}
