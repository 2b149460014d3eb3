//! Scan report and history export.

mod report;

pub use report::*;
