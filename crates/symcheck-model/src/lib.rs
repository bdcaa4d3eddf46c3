pub mod analysis;
pub mod error;
pub mod record;
pub mod table;

pub use analysis::{AnalysisResult, ConditionScore, MatchCandidate};
pub use error::{ModelError, Result};
pub use record::SymptomRecord;
pub use table::{ConditionLinks, PrevalenceTable};
