pub mod bipolar;

pub use bipolar::bipolar;
