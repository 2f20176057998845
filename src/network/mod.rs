pub mod model;
pub mod weight_store;

pub use model::Model;
pub use weight_store::{read_weights, write_weights};
