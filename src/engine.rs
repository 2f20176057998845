//! File-level entry points: dataset file in, weight file out for training;
//! weight and dataset files in, report file out for testing.

use std::path::Path;

use tracing::{info, warn};

use crate::data::catalogue::ClassCatalogue;
use crate::data::loader::load_dataset;
use crate::error::{PerceptronError, Result};
use crate::infer::classify::{classify, count_correct, Classification};
use crate::infer::report::write_report;
use crate::infer::test_config::TestingSettings;
use crate::network::weight_store::{read_weights, write_weights};
use crate::train::loop_fn::train_network;
use crate::train::train_config::TrainingSettings;
use crate::train::trainer::TrainOutcome;

/// A finished training run and the result of saving its weights.
///
/// Saving can fail independently of training; the trained model is kept
/// either way so the caller can retry or report.
#[derive(Debug)]
pub struct TrainRun {
    pub outcome: TrainOutcome,
    pub persisted: std::result::Result<(), PerceptronError>,
}

/// Loads the dataset at `dataset_path`, trains a model on it, and writes the
/// weights to `settings.output_weights_path`.
///
/// Dataset errors abort the run. A failed save is reported in
/// `TrainRun::persisted`.
pub fn train<P: AsRef<Path>>(dataset_path: P, settings: &TrainingSettings) -> Result<TrainRun> {
    let dataset = load_dataset(dataset_path)?;
    let outcome = train_network(&dataset, settings);

    let persisted = write_weights(&outcome.model, &settings.output_weights_path);
    if let Err(e) = &persisted {
        warn!(error = %e, "trained weights were not saved");
    }
    Ok(TrainRun { outcome, persisted })
}

/// Reads the trained weights and testing dataset named in `settings`,
/// classifies every sample, and writes the report to `settings.results_path`.
///
/// Without a `catalogue`, one is derived from the testing dataset's own
/// labels and targets.
pub fn test(settings: &TestingSettings, catalogue: Option<&ClassCatalogue>) -> Result<Vec<Classification>> {
    let model = read_weights(&settings.weights_path)?;
    let dataset = load_dataset(&settings.dataset_path)?;

    let derived;
    let catalogue = match catalogue {
        Some(c) => c,
        None => {
            derived = ClassCatalogue::from_dataset(&dataset);
            &derived
        }
    };

    let theta = settings.resolve_theta(&model);
    let results = classify(&model, &dataset, theta, catalogue)?;
    info!(
        samples = results.len(),
        recognized = count_correct(&results),
        theta,
        "classified testing dataset"
    );

    write_report(&results, &settings.results_path)?;
    Ok(results)
}
