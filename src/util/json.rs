use std::io::Write;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{PerceptronError, Result};

/// Serializes `value` to a pretty-printed JSON file.
pub(crate) fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let persistence = |source| PerceptronError::Persistence {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(persistence)?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| persistence(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writer.flush().map_err(persistence)
}

/// Deserializes a JSON file. Malformed content is reported as a settings error.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = std::fs::File::open(path).map_err(|source| PerceptronError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| PerceptronError::Settings(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn failed_final_flush_is_reported() {
        // Writes to /dev/full fail with ENOSPC once the buffer is flushed.
        let err = save_json(&vec![1, 2, 3], Path::new("/dev/full")).unwrap_err();
        assert!(matches!(err, PerceptronError::Persistence { .. }));
    }

    #[test]
    fn unparsable_file_is_a_settings_error() {
        let path = std::env::temp_dir()
            .join(format!("ferrite-perceptron-json-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_json::<Vec<i32>>(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, PerceptronError::Settings(_)));
    }
}
