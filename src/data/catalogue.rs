use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::data::sample::Dataset;
use crate::error::Result;
use crate::util::json::load_json;

/// One known class: its label and the bipolar vector that encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub label: char,
    pub vector: Vec<i32>,
}

/// Finite mapping from class labels to their bipolar output vectors.
///
/// Classification vectors are matched by exact equality only; a vector that
/// equals no entry is unrecognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassCatalogue {
    entries: Vec<CatalogueEntry>,
}

impl ClassCatalogue {
    pub fn new(entries: Vec<CatalogueEntry>) -> ClassCatalogue {
        ClassCatalogue { entries }
    }

    /// Collects the first target vector seen for each label, in dataset order.
    pub fn from_dataset(dataset: &Dataset) -> ClassCatalogue {
        let mut entries: Vec<CatalogueEntry> = Vec::new();
        for sample in dataset.samples() {
            if !entries.iter().any(|e| e.label == sample.label) {
                entries.push(CatalogueEntry {
                    label: sample.label,
                    vector: sample.target.clone(),
                });
            }
        }
        ClassCatalogue { entries }
    }

    /// Loads a catalogue from a JSON array of `{"label": .., "vector": [..]}`.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ClassCatalogue> {
        load_json(path.as_ref())
    }

    /// Label whose vector equals `output` exactly.
    pub fn lookup(&self, output: &[i32]) -> Option<char> {
        self.entries.iter()
            .find(|e| e.vector == output)
            .map(|e| e.label)
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::Sample;

    fn abc() -> ClassCatalogue {
        ClassCatalogue::new(vec![
            CatalogueEntry { label: 'A', vector: vec![1, -1, -1] },
            CatalogueEntry { label: 'B', vector: vec![-1, 1, -1] },
            CatalogueEntry { label: 'C', vector: vec![-1, -1, 1] },
        ])
    }

    #[test]
    fn lookup_is_exact() {
        let cat = abc();
        assert_eq!(cat.lookup(&[-1, 1, -1]), Some('B'));
        // Close to A but not equal: no nearest-class fallback.
        assert_eq!(cat.lookup(&[1, -1, 0]), None);
        assert_eq!(cat.lookup(&[1, 1, -1]), None);
    }

    #[test]
    fn derived_catalogue_keeps_first_vector_per_label() {
        let ds = Dataset::from_samples(1, 2, vec![
            Sample::new(vec![1, -1], vec![1, -1], 'A'),
            Sample::new(vec![-1, 1], vec![-1, 1], 'B'),
            Sample::new(vec![1, 1], vec![1, -1], 'A'),
        ]).unwrap();
        let cat = ClassCatalogue::from_dataset(&ds);
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.lookup(&[1, -1]), Some('A'));
    }

    #[test]
    fn json_form_is_a_plain_array() {
        let json = serde_json::to_string(&abc()).unwrap();
        assert!(json.starts_with("[{\"label\":\"A\""));
        let back: ClassCatalogue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, abc());
    }
}
