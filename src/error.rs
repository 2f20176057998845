use std::path::PathBuf;

use thiserror::Error;

/// Every failure the perceptron core can report.
///
/// Non-convergence is deliberately absent: running out of epochs is reported
/// through `TrainStatus::EpochLimit`, not as an error.
#[derive(Error, Debug)]
pub enum PerceptronError {
    /// `line` is 1-based; 0 marks a dataset built in memory with no source line.
    #[error("dataset line {line}: {message}")]
    DatasetFormat { line: usize, message: String },

    #[error("weight file line {line}: {message}")]
    WeightFileFormat { line: usize, message: String },

    #[error(
        "shape mismatch: model is {expected_inputs}x{expected_outputs}, \
         dataset is {actual_inputs}x{actual_outputs}"
    )]
    ShapeMismatch {
        expected_inputs: usize,
        expected_outputs: usize,
        actual_inputs: usize,
        actual_outputs: usize,
    },

    #[error("could not write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;

impl PerceptronError {
    pub(crate) fn dataset(line: usize, message: String) -> Self {
        PerceptronError::DatasetFormat { line, message }
    }

    pub(crate) fn weight_file(line: usize, message: String) -> Self {
        PerceptronError::WeightFileFormat { line, message }
    }
}
