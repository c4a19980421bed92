//! Display Helpers
//!
//! Small text utilities used when presenting listings and uploads.

pub mod file_size;
pub mod filter;

pub use file_size::format_file_size;
pub use filter::{filter_rows, row_matches};
