pub mod loader;
pub mod report;

pub use loader::{load_file, load_records, LoadSummary, Record};
pub use report::PathReport;
