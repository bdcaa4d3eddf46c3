#![deny(unsafe_code)]

pub mod analyze;
pub mod error;
pub mod prioritize;
pub mod session;

pub use analyze::{SUGGESTION_LIMIT, Validated, analyze, ontology_pairs, validate_symptoms};
pub use error::SessionError;
pub use prioritize::{Prioritized, prioritize};
pub use session::Session;
