use rand::Rng;

/// Dense row-major matrix. For a perceptron model, row `i` holds the weights
/// leaving input node `i` and column `o` the weights entering output unit `o`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Fills every cell independently from the uniform range [-0.5, 0.5).
    pub fn random_uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-0.5..0.5);
            }
        }

        res
    }

    /// Builds a matrix from row vectors. An empty `data` gives a 0x0 matrix.
    ///
    /// # Panics
    /// Panics if the rows do not all have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows are of different lengths"
        );
        Matrix {
            rows: data.len(),
            cols,
            data
        }
    }
}
