//! Flat text persistence for trained models.
//!
//! ```text
//! <numInputNodes>      // Number of input nodes
//! <numOutputNodes>     // Number of output nodes
//! <theta>              // optional, threshold used for training
//!
//! <numInputNodes rows of numOutputNodes weights>
//!
//! <numOutputNodes bias values>
//! ```
//!
//! Values are written with six fractional digits, so a reload reproduces the
//! model to that precision rather than bit for bit.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{PerceptronError, Result};
use crate::math::matrix::Matrix;
use crate::network::model::Model;
use crate::util::lines::LineCursor;

/// Reads the weight file at `path`.
pub fn read_weights<P: AsRef<Path>>(path: P) -> Result<Model> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PerceptronError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_text(&text)
}

/// Writes `model` to `path`, replacing any existing file.
///
/// A failure leaves `model` untouched; whether it is fatal is up to the caller.
pub fn write_weights<P: AsRef<Path>>(model: &Model, path: P) -> Result<()> {
    let path = path.as_ref();
    let persistence = |source| PerceptronError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(persistence)?;
    let mut writer = std::io::BufWriter::new(file);
    writer.write_all(to_text(model).as_bytes()).map_err(persistence)?;
    writer.flush().map_err(persistence)?;

    info!(
        path = %path.display(),
        inputs = model.num_inputs(),
        outputs = model.num_outputs(),
        "saved trained weights"
    );
    Ok(())
}

/// Renders `model` in the weight file layout.
pub fn to_text(model: &Model) -> String {
    let mut out = format!(
        "{}\t\t// Number of input nodes\n{}\t\t// Number of output nodes\n",
        model.num_inputs(),
        model.num_outputs(),
    );
    if let Some(theta) = model.theta {
        out.push_str(&format!("{theta:.6}\t\t// Theta threshold used for training\n"));
    }
    out.push('\n');

    for row in &model.weights.data {
        out.push_str(&join_fixed(row));
        out.push('\n');
    }
    out.push('\n');

    out.push_str(&join_fixed(&model.bias));
    out.push('\n');
    out
}

/// Parses weight file text already held in memory.
pub fn from_text(text: &str) -> Result<Model> {
    let mut cursor = LineCursor::new(text, PerceptronError::weight_file);

    let num_inputs = count(&mut cursor, "number of input nodes")?;
    let num_outputs = count(&mut cursor, "number of output nodes")?;
    if num_inputs.checked_mul(num_outputs).is_none() {
        return Err(cursor.error(
            cursor.line(),
            format!("{num_inputs}x{num_outputs} weight matrix is too large"),
        ));
    }

    let theta = if cursor.at_blank_or_end() {
        None
    } else {
        Some(finite(&mut cursor, 1, "theta threshold")?[0])
    };

    cursor.expect_separator("weight matrix")?;
    let mut rows = Vec::new();
    for i in 1..=num_inputs {
        rows.push(finite(&mut cursor, num_outputs, &format!("weight row {i}"))?);
    }

    cursor.expect_separator("bias vector")?;
    let bias = finite(&mut cursor, num_outputs, "bias vector")?;

    Model::from_parts(Matrix::from_data(rows), bias, theta)
}

fn count(cursor: &mut LineCursor<'_>, what: &str) -> Result<usize> {
    let value: usize = cursor.parse_scalar(what)?;
    if value == 0 {
        return Err(cursor.error(cursor.line(), format!("{what} must be at least 1")));
    }
    Ok(value)
}

fn finite(cursor: &mut LineCursor<'_>, len: usize, what: &str) -> Result<Vec<f64>> {
    let values: Vec<f64> = cursor.parse_row(len, what)?;
    if values.iter().any(|v| !v.is_finite()) {
        return Err(cursor.error(cursor.line(), format!("{what}: values must be finite")));
    }
    Ok(values)
}

fn join_fixed(values: &[f64]) -> String {
    values.iter()
        .map(|v| format!("{v:.6}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_model() -> Model {
        Model::from_parts(
            Matrix::from_data(vec![vec![0.5, -0.25], vec![1.0 / 3.0, 0.0], vec![-2.0, 4.125]]),
            vec![0.75, -0.5],
            Some(0.2),
        ).unwrap()
    }

    fn line_of(err: PerceptronError) -> usize {
        match err {
            PerceptronError::WeightFileFormat { line, .. } => line,
            other => panic!("expected a weight file format error, got {other:?}"),
        }
    }

    #[test]
    fn text_layout_uses_six_decimals() {
        let text = to_text(&sample_model());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "3\t\t// Number of input nodes");
        assert_eq!(lines[1], "2\t\t// Number of output nodes");
        assert_eq!(lines[2], "0.200000\t\t// Theta threshold used for training");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "0.500000 -0.250000");
        assert_eq!(lines[5], "0.333333 0.000000");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "0.750000 -0.500000");
    }

    #[test]
    fn theta_line_is_optional() {
        let mut model = sample_model();
        model.theta = None;
        let back = from_text(&to_text(&model)).unwrap();
        assert_eq!(back.theta, None);
        assert_eq!(back.num_inputs(), 3);
    }

    #[test]
    fn short_weight_row_reports_its_line() {
        let text = "2\n2\n\n0.1 0.2\n0.3\n\n0.0 0.0\n";
        assert_eq!(line_of(from_text(text).unwrap_err()), 5);
    }

    #[test]
    fn non_numeric_bias_is_an_error() {
        let text = "1\n2\n\n0.1 0.2\n\n0.0 abc\n";
        assert_eq!(line_of(from_text(text).unwrap_err()), 6);
    }

    #[test]
    fn missing_bias_line_is_an_error() {
        let text = "1\n1\n\n0.5\n";
        assert!(matches!(from_text(text), Err(PerceptronError::WeightFileFormat { .. })));
    }

    #[test]
    fn overflowing_matrix_is_rejected_at_its_header() {
        let text = format!("{}\n2\n\n0.5 0.5\n", usize::MAX);
        assert_eq!(line_of(from_text(&text).unwrap_err()), 2);
    }

    #[test]
    fn oversized_counts_fail_where_data_runs_out() {
        let text = "1000000000000000000\n1\n\n0.5\n";
        assert_eq!(line_of(from_text(text).unwrap_err()), 5);
        let text = "1\n1000000000000000000\n\n0.5\n";
        assert_eq!(line_of(from_text(text).unwrap_err()), 4);
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let text = "1\n1\n\nNaN\n\n0.0\n";
        assert_eq!(line_of(from_text(text).unwrap_err()), 4);
    }

    #[test]
    fn write_then_read_through_a_file() {
        let path = std::env::temp_dir()
            .join(format!("ferrite-perceptron-weights-{}.txt", std::process::id()));
        write_weights(&sample_model(), &path).unwrap();
        let back = read_weights(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(back.bias, vec![0.75, -0.5]);
        assert!((back.weights.data[1][0] - 0.333333).abs() < 1e-12);
    }

    #[test]
    fn unwritable_destination_is_a_persistence_error() {
        let err = write_weights(&sample_model(), "/definitely/not/a/dir/w.txt").unwrap_err();
        assert!(matches!(err, PerceptronError::Persistence { .. }));
    }

    proptest! {
        #[test]
        fn reload_matches_to_six_decimals(
            rows in proptest::collection::vec(proptest::collection::vec(-1.0e3..1.0e3f64, 3), 1..12),
            bias in proptest::collection::vec(-1.0e3..1.0e3f64, 3),
            theta in proptest::option::of(-10.0..10.0f64),
        ) {
            let model = Model::from_parts(Matrix::from_data(rows), bias, theta).unwrap();
            let back = from_text(&to_text(&model)).unwrap();

            prop_assert_eq!(back.num_inputs(), model.num_inputs());
            prop_assert_eq!(back.num_outputs(), model.num_outputs());
            let close = |a: f64, b: f64| (a - b).abs() <= 5.0e-7 + 1.0e-9 * a.abs();
            for (r, s) in model.weights.data.iter().zip(back.weights.data.iter()) {
                for (a, b) in r.iter().zip(s.iter()) {
                    prop_assert!(close(*a, *b), "{} vs {}", a, b);
                }
            }
            for (a, b) in model.bias.iter().zip(back.bias.iter()) {
                prop_assert!(close(*a, *b), "{} vs {}", a, b);
            }
            prop_assert_eq!(back.theta.is_some(), model.theta.is_some());
            if let (Some(a), Some(b)) = (model.theta, back.theta) {
                prop_assert!(close(a, b));
            }
        }
    }
}
