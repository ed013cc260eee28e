// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::core::config::{CONFIG_FILE_NAME, Config, load_config, save_config};
pub use crate::core::linter::{lint_all, lint_one, rewrite};
pub use crate::core::vault::{FsVault, NoteFile, Vault};
pub use crate::models::{CharacterClass, LintOutcome, LintSummary, ReplacementPolicy};
