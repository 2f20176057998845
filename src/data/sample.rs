use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};

/// One training or testing example.
///
/// `pixels` is the row-major flattening of the character grid, `target` the
/// bipolar class vector. `label` only feeds reports and catalogues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub pixels: Vec<i32>,
    pub target: Vec<i32>,
    pub label: char,
}

impl Sample {
    pub fn new(pixels: Vec<i32>, target: Vec<i32>, label: char) -> Sample {
        Sample { pixels, target, label }
    }
}

/// An ordered, non-empty collection of samples that all share one grid and
/// target shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    rows: usize,
    columns: usize,
    num_inputs: usize,
    output_dims: usize,
    samples: Vec<Sample>,
}

impl Dataset {
    /// Builds a dataset whose shape is taken from the first sample.
    ///
    /// `rows * columns` must equal the first sample's pixel count and every
    /// later sample must agree with the first one, otherwise the result is a
    /// `ShapeMismatch`. An empty list is a `DatasetFormat` error at line 0.
    pub fn from_samples(rows: usize, columns: usize, samples: Vec<Sample>) -> Result<Dataset> {
        let first = samples.first()
            .ok_or_else(|| PerceptronError::dataset(0, "dataset contains no samples".into()))?;
        let num_inputs = first.pixels.len();
        let output_dims = first.target.len();

        if rows.checked_mul(columns) != Some(num_inputs) {
            return Err(PerceptronError::ShapeMismatch {
                expected_inputs: rows.saturating_mul(columns),
                expected_outputs: output_dims,
                actual_inputs: num_inputs,
                actual_outputs: output_dims,
            });
        }

        for sample in &samples[1..] {
            if sample.pixels.len() != num_inputs || sample.target.len() != output_dims {
                return Err(PerceptronError::ShapeMismatch {
                    expected_inputs: num_inputs,
                    expected_outputs: output_dims,
                    actual_inputs: sample.pixels.len(),
                    actual_outputs: sample.target.len(),
                });
            }
        }

        Ok(Dataset { rows, columns, num_inputs, output_dims, samples })
    }

    pub fn rows(&self) -> usize { self.rows }

    pub fn columns(&self) -> usize { self.columns }

    /// Number of input nodes a model needs for this dataset.
    pub fn num_inputs(&self) -> usize { self.num_inputs }

    /// Number of output units a model needs for this dataset.
    pub fn num_outputs(&self) -> usize { self.output_dims }

    pub fn samples(&self) -> &[Sample] { &self.samples }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_comes_from_first_sample() {
        let ds = Dataset::from_samples(2, 3, vec![
            Sample::new(vec![1, 0, 1, 0, 1, 0], vec![1, -1], 'A'),
            Sample::new(vec![0, 1, 0, 1, 0, 1], vec![-1, 1], 'B'),
        ]).unwrap();
        assert_eq!(ds.num_inputs(), 6);
        assert_eq!(ds.num_outputs(), 2);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn disagreeing_sample_is_a_shape_mismatch() {
        let err = Dataset::from_samples(1, 2, vec![
            Sample::new(vec![1, 1], vec![1], 'A'),
            Sample::new(vec![1, 1], vec![1, -1], 'B'),
        ]).unwrap_err();
        assert!(matches!(err, PerceptronError::ShapeMismatch { actual_outputs: 2, .. }));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = Dataset::from_samples(1, 1, Vec::new()).unwrap_err();
        assert!(matches!(err, PerceptronError::DatasetFormat { line: 0, .. }));
    }

    #[test]
    fn grid_must_match_pixel_count() {
        let err = Dataset::from_samples(2, 2, vec![Sample::new(vec![1, 1, 1], vec![1], 'A')])
            .unwrap_err();
        assert!(matches!(
            err,
            PerceptronError::ShapeMismatch { expected_inputs: 4, actual_inputs: 3, .. }
        ));
    }

    #[test]
    fn overflowing_grid_is_a_shape_mismatch() {
        let err = Dataset::from_samples(usize::MAX, 2, vec![Sample::new(vec![1], vec![1], 'A')])
            .unwrap_err();
        assert!(matches!(
            err,
            PerceptronError::ShapeMismatch { expected_inputs: usize::MAX, actual_inputs: 1, .. }
        ));
    }
}
