use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::activation::bipolar::bipolar;
use crate::data::sample::Dataset;
use crate::network::model::Model;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainingSettings;

/// How a training run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainStatus {
    /// A full epoch passed without any gated change.
    Converged,
    /// The epoch budget ran out first.
    EpochLimit,
    /// The caller stopped training between epochs.
    Stopped,
}

/// Result of a training run: the trained model and how many epochs it took.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    pub model: Model,
    pub epochs_run: usize,
    pub status: TrainStatus,
}

impl TrainOutcome {
    pub fn converged(&self) -> bool {
        self.status == TrainStatus::Converged
    }
}

/// Step-wise perceptron trainer.
///
/// Owns the model for the duration of training and advances one epoch per
/// `step_epoch` call, so callers can inspect or abandon a run between epochs.
pub struct Trainer<'a> {
    dataset: &'a Dataset,
    settings: &'a TrainingSettings,
    model: Model,
    epochs_run: usize,
    converged: bool,
}

impl<'a> Trainer<'a> {
    /// Sizes a fresh model from `dataset` and initializes it per `settings`.
    pub fn new(dataset: &'a Dataset, settings: &'a TrainingSettings) -> Trainer<'a> {
        let (inputs, outputs) = (dataset.num_inputs(), dataset.num_outputs());
        let mut model = if settings.set_weights_to_zero {
            Model::zeros(inputs, outputs)
        } else {
            let mut rng = match settings.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Model::random(inputs, outputs, &mut rng)
        };
        model.theta = Some(settings.theta);
        Trainer { dataset, settings, model, epochs_run: 0, converged: false }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn epochs_run(&self) -> usize {
        self.epochs_run
    }

    pub fn is_converged(&self) -> bool {
        self.converged
    }

    /// Converged, or the epoch budget is spent.
    pub fn is_finished(&self) -> bool {
        self.converged || self.epochs_run >= self.settings.max_epochs
    }

    /// Runs one full pass over the dataset, updating the model in place.
    ///
    /// Returns `None` once training is finished.
    pub fn step_epoch(&mut self) -> Option<EpochStats> {
        if self.is_finished() {
            return None;
        }
        let t_start = Instant::now();

        let dataset = self.dataset;
        let alpha = self.settings.learning_rate;
        let theta = self.settings.theta;
        let gate = self.settings.weight_change_threshold;

        let mut stats = EpochStats {
            epoch: self.epochs_run + 1,
            max_epochs: self.settings.max_epochs,
            misclassified_units: 0,
            weight_updates: 0,
            bias_updates: 0,
            elapsed_ms: 0,
        };

        for sample in dataset.samples() {
            for o in 0..self.model.num_outputs() {
                let y_out = bipolar(self.model.net_input(&sample.pixels, o), theta);
                if y_out == sample.target[o] {
                    continue;
                }
                stats.misclassified_units += 1;

                let t = sample.target[o] as f64;
                for (row, &x) in self.model.weights.data.iter_mut().zip(sample.pixels.iter()) {
                    let delta = alpha * t * x as f64;
                    if delta.abs() > gate {
                        row[o] += delta;
                        stats.weight_updates += 1;
                    }
                }
                let delta = alpha * t;
                if delta.abs() > gate {
                    self.model.bias[o] += delta;
                    stats.bias_updates += 1;
                }
            }
        }

        self.epochs_run += 1;
        self.converged = !stats.changed();
        stats.elapsed_ms = t_start.elapsed().as_millis() as u64;

        debug!(
            epoch = stats.epoch,
            misclassified = stats.misclassified_units,
            weight_updates = stats.weight_updates,
            bias_updates = stats.bias_updates,
            "epoch finished"
        );
        Some(stats)
    }

    /// Ends the run, classifying how it stopped.
    pub fn finish(self) -> TrainOutcome {
        let status = if self.converged {
            TrainStatus::Converged
        } else if self.epochs_run >= self.settings.max_epochs {
            TrainStatus::EpochLimit
        } else {
            TrainStatus::Stopped
        };
        TrainOutcome { model: self.model, epochs_run: self.epochs_run, status }
    }
}
