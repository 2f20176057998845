use serde::Serialize;

use crate::data::catalogue::ClassCatalogue;
use crate::data::sample::Dataset;
use crate::error::Result;
use crate::network::model::Model;

/// Network output for one testing sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// 0-based position of the sample in the dataset.
    pub index: usize,
    /// Bipolar output of every unit.
    pub output: Vec<i32>,
    /// Catalogue label whose vector equals `output`; `None` when unrecognized.
    pub matched: Option<char>,
    /// Label the dataset gives for this sample.
    pub expected: char,
}

impl Classification {
    pub fn is_correct(&self) -> bool {
        self.matched == Some(self.expected)
    }
}

/// Runs the forward pass over every sample of `dataset` with fixed weights.
///
/// Fails with `ShapeMismatch` unless the dataset has exactly the model's
/// input and output counts. The model is only read.
pub fn classify(
    model: &Model,
    dataset: &Dataset,
    theta: f64,
    catalogue: &ClassCatalogue,
) -> Result<Vec<Classification>> {
    model.check_shape(dataset)?;

    Ok(dataset.samples()
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let output = model.forward(&sample.pixels, theta);
            let matched = catalogue.lookup(&output);
            Classification { index, output, matched, expected: sample.label }
        })
        .collect())
}

/// Number of samples recognized as their own label.
pub fn count_correct(classifications: &[Classification]) -> usize {
    classifications.iter().filter(|c| c.is_correct()).count()
}
