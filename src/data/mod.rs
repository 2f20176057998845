pub mod sample;
pub mod loader;
pub mod catalogue;

pub use sample::{Sample, Dataset};
pub use loader::{load_dataset, parse_dataset};
pub use catalogue::{ClassCatalogue, CatalogueEntry};
