use std::ops::ControlFlow;

use tracing::{info, warn};

use crate::data::sample::Dataset;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainingSettings;
use crate::train::trainer::{TrainOutcome, TrainStatus, Trainer};

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains a fresh model on `dataset` until it converges or `max_epochs` is
/// reached.
///
/// `on_epoch` is called after every completed epoch with that epoch's stats.
/// Returning `ControlFlow::Break(())` stops training before the next epoch
/// starts; the outcome is then `TrainStatus::Stopped` unless that last epoch
/// already converged.
///
/// Running out of epochs is not an error: the outcome carries
/// `TrainStatus::EpochLimit` and the caller decides how to report it.
pub fn train_loop<F>(dataset: &Dataset, settings: &TrainingSettings, mut on_epoch: F) -> TrainOutcome
where
    F: FnMut(&EpochStats) -> ControlFlow<()>,
{
    let mut trainer = Trainer::new(dataset, settings);

    while let Some(stats) = trainer.step_epoch() {
        if on_epoch(&stats).is_break() {
            break;
        }
    }

    let outcome = trainer.finish();
    match outcome.status {
        TrainStatus::Converged => info!(epochs = outcome.epochs_run, "training converged"),
        TrainStatus::EpochLimit => warn!(
            max_epochs = settings.max_epochs,
            "training reached the epoch limit before converging"
        ),
        TrainStatus::Stopped => info!(epochs = outcome.epochs_run, "training stopped by caller"),
    }
    outcome
}

/// `train_loop` without an epoch callback.
pub fn train_network(dataset: &Dataset, settings: &TrainingSettings) -> TrainOutcome {
    train_loop(dataset, settings, |_| ControlFlow::Continue(()))
}
