// src/core/linter.rs
mod rename;
mod rewrite;

pub use rename::{lint_all, lint_one};
pub use rewrite::rewrite;
