//! Parser for the character-bitmap dataset format.
//!
//! ```text
//! <rows>
//! <columns>
//! <outputDimensions>
//! <numSamples>
//!
//! <rows lines of <columns> integers>
//!
//! <outputDimensions integers>
//! <label character>
//! ... one block per sample, each preceded by a blank line ...
//! ```
//!
//! Text after `//` on a numeric line is treated as an annotation.

use std::path::Path;

use tracing::debug;

use crate::data::sample::{Dataset, Sample};
use crate::error::{PerceptronError, Result};
use crate::util::lines::LineCursor;

const MAX_PREALLOC: usize = 4096;

/// Reads and parses the dataset file at `path`.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PerceptronError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&text)?;
    debug!(
        path = %path.display(),
        samples = dataset.len(),
        inputs = dataset.num_inputs(),
        outputs = dataset.num_outputs(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parses dataset text already held in memory.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut cursor = LineCursor::new(text, PerceptronError::dataset);

    let rows = positive(&mut cursor, "rows")?;
    let columns = positive(&mut cursor, "columns")?;
    let pixel_count = rows.checked_mul(columns).ok_or_else(|| {
        cursor.error(cursor.line(), format!("grid {rows}x{columns} is too large"))
    })?;
    let output_dims = positive(&mut cursor, "output dimensions")?;
    let num_samples = positive(&mut cursor, "sample count")?;

    // Counts are untrusted until the blocks behind them are read.
    let mut samples = Vec::new();
    for n in 1..=num_samples {
        samples.push(parse_sample(&mut cursor, n, rows, columns, pixel_count, output_dims)?);
    }

    Dataset::from_samples(rows, columns, samples)
}

fn positive(cursor: &mut LineCursor<'_>, what: &str) -> Result<usize> {
    let value: usize = cursor.parse_scalar(what)?;
    if value == 0 {
        return Err(cursor.error(cursor.line(), format!("{what} must be at least 1")));
    }
    Ok(value)
}

fn parse_sample(
    cursor: &mut LineCursor<'_>,
    n: usize,
    rows: usize,
    columns: usize,
    pixel_count: usize,
    output_dims: usize,
) -> Result<Sample> {
    cursor.expect_separator(&format!("pixel grid of sample {n}"))?;

    let mut pixels = Vec::with_capacity(pixel_count.min(MAX_PREALLOC));
    for r in 1..=rows {
        let row: Vec<i32> = cursor.parse_row(columns, &format!("sample {n} pixel row {r}"))?;
        pixels.extend(row);
    }

    cursor.expect_separator(&format!("target vector of sample {n}"))?;

    let target: Vec<i32> = cursor.parse_row(output_dims, &format!("sample {n} target vector"))?;
    if let Some(bad) = target.iter().find(|&&t| t != 1 && t != -1) {
        return Err(cursor.error(
            cursor.line(),
            format!("sample {n} target vector: {bad} is not bipolar (expected 1 or -1)"),
        ));
    }

    let (line_no, line) = cursor.expect_line(&format!("label of sample {n}"))?;
    let label = line.trim().chars().next()
        .ok_or_else(|| cursor.error(line_no, format!("sample {n} label line is empty")))?;

    Ok(Sample::new(pixels, target, label))
}
