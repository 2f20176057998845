use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{PerceptronError, Result};
use crate::infer::classify::{count_correct, Classification};

/// Renders the human-readable testing report.
///
/// One line per sample, then a blank line and a recognition summary:
///
/// ```text
/// Sample #1 (label A) was classified as: [1, -1, -1] -> A
/// Sample #2 (label B) was classified as: [1, 1, -1] -> unrecognized
///
/// Recognized 1 of 2 samples
/// ```
pub fn render_report(classifications: &[Classification]) -> String {
    let mut out = String::new();
    for c in classifications {
        let vector = c.output.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let verdict = c.matched.map_or_else(|| "unrecognized".to_string(), |l| l.to_string());
        out.push_str(&format!(
            "Sample #{} (label {}) was classified as: [{}] -> {}\n",
            c.index + 1, c.expected, vector, verdict
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "Recognized {} of {} samples\n",
        count_correct(classifications),
        classifications.len()
    ));
    out
}

/// Writes the report to `path`, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(classifications: &[Classification], path: P) -> Result<()> {
    let path = path.as_ref();
    let persistence = |source| PerceptronError::Persistence {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(persistence)?;
    let mut writer = std::io::BufWriter::new(file);
    writer.write_all(render_report(classifications).as_bytes()).map_err(persistence)?;
    writer.flush().map_err(persistence)?;

    info!(path = %path.display(), samples = classifications.len(), "saved testing results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_sample_then_summary() {
        let results = vec![
            Classification { index: 0, output: vec![1, -1, -1], matched: Some('A'), expected: 'A' },
            Classification { index: 1, output: vec![1, 1, -1], matched: None, expected: 'B' },
        ];
        let text = render_report(&results);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Sample #1 (label A) was classified as: [1, -1, -1] -> A");
        assert_eq!(lines[1], "Sample #2 (label B) was classified as: [1, 1, -1] -> unrecognized");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Recognized 1 of 2 samples");
    }
}
