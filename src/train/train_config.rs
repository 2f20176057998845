use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};
use crate::util::json::{load_json, save_json};

/// Configuration for one training run.
///
/// # Fields
/// - `set_weights_to_zero`     — start from all-zero weights instead of
///                               uniform random values in [-0.5, 0.5)
/// - `max_epochs`              — epoch budget; training stops here even
///                               without convergence
/// - `learning_rate`           — alpha, in (0, 1]
/// - `theta`                   — activation threshold
/// - `weight_change_threshold` — a delta is applied only when its magnitude
///                               exceeds this value
/// - `output_weights_path`     — where the trained weights are written
/// - `seed`                    — fixes the random initialization when set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSettings {
    pub set_weights_to_zero: bool,
    pub max_epochs: usize,
    pub learning_rate: f64,
    pub theta: f64,
    pub weight_change_threshold: f64,
    pub output_weights_path: PathBuf,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TrainingSettings {
    /// Creates settings with zero-initialized weights and no seed.
    pub fn new(
        max_epochs: usize,
        learning_rate: f64,
        theta: f64,
        weight_change_threshold: f64,
        output_weights_path: impl Into<PathBuf>,
    ) -> Self {
        TrainingSettings {
            set_weights_to_zero: true,
            max_epochs,
            learning_rate,
            theta,
            weight_change_threshold,
            output_weights_path: output_weights_path.into(),
            seed: None,
        }
    }

    /// Checks the ranges the training rule relies on.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(PerceptronError::Settings(format!(
                "learning rate must be in (0, 1], got {}", self.learning_rate
            )));
        }
        if self.max_epochs == 0 {
            return Err(PerceptronError::Settings("max epochs must be at least 1".into()));
        }
        if !self.theta.is_finite() {
            return Err(PerceptronError::Settings(format!("theta must be finite, got {}", self.theta)));
        }
        if !self.weight_change_threshold.is_finite() || self.weight_change_threshold < 0.0 {
            return Err(PerceptronError::Settings(format!(
                "weight change threshold must be a finite value >= 0, got {}",
                self.weight_change_threshold
            )));
        }
        Ok(())
    }

    /// Serializes the settings to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_json(self, path.as_ref())
    }

    /// Deserializes settings from a JSON file written by `save_json`.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TrainingSettings> {
        load_json(path.as_ref())
    }
}
