pub mod classify;
pub mod report;
pub mod test_config;

pub use classify::{classify, count_correct, Classification};
pub use report::{render_report, write_report};
pub use test_config::TestingSettings;
