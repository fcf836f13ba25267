//! Loading of the optional on-disk model artifact.
//!
//! A missing or unreadable artifact is never surfaced to the caller:
//! `load_or_default` substitutes the process-wide default model instead.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use lazy_static::lazy_static;
use log::{info, warn};

use crate::errors::{Error, ModelError, Result};
use crate::estimator::regression_model::RegressionModel;

/// Conventional artifact location, relative to the host's working directory.
pub const DEFAULT_MODEL_PATH: &str = "carbon_model.json";

lazy_static! {
    /// Fallback predictor, fitted once per process.
    pub static ref DEFAULT_MODEL: RegressionModel = RegressionModel::fit_default();
}

/// Load a model artifact, distinguishing absence from corruption.
pub fn load_model(path: &Path) -> Result<RegressionModel> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ModelError::NotFound(path.display().to_string())
        } else {
            ModelError::Io(e)
        }
    })?;
    let model: RegressionModel =
        serde_json::from_str(&contents).map_err(ModelError::Deserialize)?;
    info!("loaded model artifact from '{}'", path.display());
    Ok(model)
}

/// Load a model artifact or fall back to the default model. Absence is a
/// normal first-run state; anything else is logged as a warning. Neither
/// is an error for the caller.
pub fn load_or_default(path: &Path) -> RegressionModel {
    match load_model(path) {
        Ok(model) => model,
        Err(Error::Model(ModelError::NotFound(_))) => {
            info!(
                "no model artifact at '{}', using default model",
                path.display()
            );
            DEFAULT_MODEL.clone()
        }
        Err(e) => {
            warn!(
                "model artifact at '{}' is unreadable ({}), using default model",
                path.display(),
                e
            );
            DEFAULT_MODEL.clone()
        }
    }
}

/// Persist a fitted model as a JSON artifact.
pub fn save_model(path: &Path, model: &RegressionModel) -> Result<()> {
    let contents = serde_json::to_string_pretty(model).map_err(ModelError::Deserialize)?;
    fs::write(path, contents).map_err(ModelError::Io)?;
    info!("saved model artifact to '{}'", path.display());
    Ok(())
}
