// tests/integration_tests/common.rs
use anyhow::Result;
use fnlint::{CharacterClass, Config, ReplacementPolicy};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_note(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, "# A note\nSome contents.")?;
    Ok(path)
}

pub fn setup_test_vault() -> Result<TempDir> {
    let vault = TempDir::new()?;

    create_note(vault.path(), "Clean Note.md")?;
    create_note(vault.path(), "My [Note].md")?;
    create_note(vault.path(), "Project#1.md")?;
    create_note(vault.path(), "nested/A: B | C.md")?;

    Ok(vault)
}

pub fn config_with(entries: &[(CharacterClass, ReplacementPolicy)]) -> Config {
    let mut config = Config::default();
    for &(class, policy) in entries {
        config.set(class, policy);
    }
    config
}
