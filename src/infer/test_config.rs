use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::model::Model;
use crate::util::json::load_json;

/// Configuration for one testing run.
///
/// `theta` overrides the threshold stored in the weight file; with neither
/// present the threshold is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestingSettings {
    pub weights_path: PathBuf,
    pub dataset_path: PathBuf,
    pub results_path: PathBuf,
    #[serde(default)]
    pub theta: Option<f64>,
}

impl TestingSettings {
    pub fn new(
        weights_path: impl Into<PathBuf>,
        dataset_path: impl Into<PathBuf>,
        results_path: impl Into<PathBuf>,
    ) -> Self {
        TestingSettings {
            weights_path: weights_path.into(),
            dataset_path: dataset_path.into(),
            results_path: results_path.into(),
            theta: None,
        }
    }

    /// Threshold to classify with: the override, else the one stored with
    /// the model, else 0.
    pub fn resolve_theta(&self, model: &Model) -> f64 {
        self.theta.or(model.theta).unwrap_or(0.0)
    }

    /// Reads settings from a JSON file; `theta` may be omitted.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TestingSettings> {
        load_json(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theta_is_optional_in_json() {
        let json = r#"{
            "weights_path": "w.txt",
            "dataset_path": "test.txt",
            "results_path": "results.txt"
        }"#;
        let s: TestingSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.theta, None);
        assert_eq!(s.results_path, PathBuf::from("results.txt"));
    }

    #[test]
    fn override_beats_stored_theta() {
        let mut model = Model::zeros(2, 1);
        let mut s = TestingSettings::new("w.txt", "d.txt", "r.txt");
        assert_eq!(s.resolve_theta(&model), 0.0);

        model.theta = Some(0.3);
        assert_eq!(s.resolve_theta(&model), 0.3);

        s.theta = Some(-1.0);
        assert_eq!(s.resolve_theta(&model), -1.0);
    }

    #[test]
    fn loads_from_a_json_file() {
        let path = std::env::temp_dir()
            .join(format!("ferrite-perceptron-testing-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"weights_path": "w.txt", "dataset_path": "d.txt", "results_path": "r.txt", "theta": 0.5}"#,
        ).unwrap();
        let s = TestingSettings::load_json(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(s.weights_path, PathBuf::from("w.txt"));
        assert_eq!(s.theta, Some(0.5));
    }
}
