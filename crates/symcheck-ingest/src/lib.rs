#![deny(unsafe_code)]

pub mod csv_table;
pub mod error;
pub mod json;

pub use csv_table::load_prevalence_csv;
pub use error::{IngestError, Result};
pub use json::{load_condition_links, load_prevalence_json};
