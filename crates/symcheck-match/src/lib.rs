#![deny(unsafe_code)]

pub mod resolver;
pub mod score;
pub mod vocabulary;

pub use resolver::{DEFAULT_MATCH_THRESHOLD, find_closest_matches};
pub use score::{lcs_length, round2, similarity};
pub use vocabulary::VocabularyIndex;
