pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::{Trainer, TrainOutcome, TrainStatus};
pub use epoch_stats::EpochStats;
pub use train_config::TrainingSettings;
pub use loop_fn::{train_loop, train_network};
