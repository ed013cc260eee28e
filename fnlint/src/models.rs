// src/models.rs
pub mod class;
pub mod outcome;
pub mod policy;

pub use class::CharacterClass;
pub use outcome::{LintOutcome, LintSummary};
pub use policy::ReplacementPolicy;
