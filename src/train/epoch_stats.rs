use serde::{Serialize, Deserialize};

/// Per-epoch training statistics produced by `Trainer::step_epoch`.
///
/// `train_loop` hands one `EpochStats` value to its callback at the end of
/// every completed epoch; the callback may use it to report progress or to
/// stop training early.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Epoch budget for this run.
    pub max_epochs: usize,
    /// (sample, output unit) pairs whose output differed from the target.
    pub misclassified_units: usize,
    /// Weight deltas that passed the change gate and were applied.
    pub weight_updates: usize,
    /// Bias deltas that passed the change gate and were applied.
    pub bias_updates: usize,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

impl EpochStats {
    /// Whether any delta passed the gate during this epoch. An epoch without
    /// changes means training has converged.
    pub fn changed(&self) -> bool {
        self.weight_updates > 0 || self.bias_updates > 0
    }
}
