pub mod math;
pub mod activation;
pub mod data;
pub mod network;
pub mod train;
pub mod infer;
pub mod engine;
pub mod error;
pub mod logging;

mod util;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::bipolar::bipolar;
pub use data::{Sample, Dataset, ClassCatalogue, CatalogueEntry, load_dataset, parse_dataset};
pub use network::{Model, read_weights, write_weights};
pub use train::{Trainer, TrainOutcome, TrainStatus, EpochStats, TrainingSettings, train_loop, train_network};
pub use infer::{classify, Classification, TestingSettings};
pub use engine::TrainRun;
pub use error::{PerceptronError, Result};
