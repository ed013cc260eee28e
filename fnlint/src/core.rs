// src/core.rs
pub mod config;
pub mod linter;
pub mod vault;
