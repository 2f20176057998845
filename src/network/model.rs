use rand::Rng;

use crate::activation::bipolar::bipolar;
use crate::data::sample::Dataset;
use crate::error::{PerceptronError, Result};
use crate::math::matrix::Matrix;

/// Single-layer perceptron: one weight per (input node, output unit) pair
/// plus one bias per output unit.
///
/// `theta` is the activation threshold the model was trained with, when
/// known. It travels with the weight file so testing can reuse it.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub weights: Matrix,
    pub bias: Vec<f64>,
    pub theta: Option<f64>,
}

impl Model {
    /// All weights and biases exactly zero.
    pub fn zeros(num_inputs: usize, num_outputs: usize) -> Model {
        Model {
            weights: Matrix::zeros(num_inputs, num_outputs),
            bias: vec![0.0; num_outputs],
            theta: None,
        }
    }

    /// Weights and biases drawn uniformly from [-0.5, 0.5).
    ///
    /// The bias vector and the weight matrix are filled by separate draws into
    /// separate buffers.
    pub fn random<R: Rng + ?Sized>(num_inputs: usize, num_outputs: usize, rng: &mut R) -> Model {
        let bias = (0..num_outputs).map(|_| rng.gen_range(-0.5..0.5)).collect();
        let weights = Matrix::random_uniform(num_inputs, num_outputs, rng);
        Model { weights, bias, theta: None }
    }

    /// Assembles a model from parsed parts, checking that the bias length
    /// matches the number of weight columns.
    pub fn from_parts(weights: Matrix, bias: Vec<f64>, theta: Option<f64>) -> Result<Model> {
        if weights.cols != bias.len() {
            return Err(PerceptronError::ShapeMismatch {
                expected_inputs: weights.rows,
                expected_outputs: weights.cols,
                actual_inputs: weights.rows,
                actual_outputs: bias.len(),
            });
        }
        Ok(Model { weights, bias, theta })
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.rows
    }

    pub fn num_outputs(&self) -> usize {
        self.bias.len()
    }

    /// `y_in` for output unit `output`: its bias plus the weighted pixel sum.
    pub fn net_input(&self, pixels: &[i32], output: usize) -> f64 {
        pixels.iter()
            .zip(self.weights.data.iter())
            .fold(self.bias[output], |acc, (&x, row)| acc + x as f64 * row[output])
    }

    /// Bipolar output of every unit for one sample.
    pub fn forward(&self, pixels: &[i32], theta: f64) -> Vec<i32> {
        (0..self.num_outputs())
            .map(|o| bipolar(self.net_input(pixels, o), theta))
            .collect()
    }

    /// Fails unless `dataset` has exactly this model's input and output counts.
    pub fn check_shape(&self, dataset: &Dataset) -> Result<()> {
        if dataset.num_inputs() != self.num_inputs() || dataset.num_outputs() != self.num_outputs() {
            return Err(PerceptronError::ShapeMismatch {
                expected_inputs: self.num_inputs(),
                expected_outputs: self.num_outputs(),
                actual_inputs: dataset.num_inputs(),
                actual_outputs: dataset.num_outputs(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::Sample;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn net_input_adds_bias_to_weighted_sum() {
        let model = Model::from_parts(
            Matrix::from_data(vec![vec![0.5, 1.0], vec![-0.25, 2.0], vec![1.0, 0.0]]),
            vec![0.1, -1.0],
            None,
        ).unwrap();
        let pixels = [1, -1, 1];
        assert!((model.net_input(&pixels, 0) - (0.1 + 0.5 + 0.25 + 1.0)).abs() < 1e-12);
        assert!((model.net_input(&pixels, 1) - (-1.0 + 1.0 - 2.0)).abs() < 1e-12);
        assert_eq!(model.forward(&pixels, 0.0), vec![1, -1]);
    }

    #[test]
    fn random_model_draws_bias_and_weights_separately() {
        let mut rng = StdRng::seed_from_u64(42);
        let model = Model::random(9, 3, &mut rng);
        assert_eq!((model.weights.rows, model.weights.cols), (9, 3));
        assert_eq!(model.bias.len(), 3);
        assert!(model.bias.iter().all(|b| (-0.5..0.5).contains(b)));
        // Independent draws: the bias must not simply mirror the first row.
        assert_ne!(model.bias, model.weights.data[0]);
    }

    #[test]
    fn mismatched_bias_is_rejected() {
        assert!(Model::from_parts(Matrix::zeros(4, 2), vec![0.0; 3], None).is_err());
    }

    #[test]
    fn shape_check_compares_both_dimensions() {
        let ds = Dataset::from_samples(2, 2, vec![Sample::new(vec![1, 1, 1, 1], vec![1], 'A')]).unwrap();
        assert!(Model::zeros(4, 1).check_shape(&ds).is_ok());
        assert!(matches!(
            Model::zeros(4, 2).check_shape(&ds),
            Err(PerceptronError::ShapeMismatch { expected_outputs: 2, actual_outputs: 1, .. })
        ));
        assert!(Model::zeros(6, 1).check_shape(&ds).is_err());
    }
}
