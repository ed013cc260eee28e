// tests/integration_tests/edge_cases_test.rs
use super::common::{config_with, create_note};
use anyhow::Result;
use fnlint::{CharacterClass, FsVault, LintOutcome, NoteFile, ReplacementPolicy, Vault as _, lint_one};
use tempfile::TempDir;

#[test]
fn test_fully_stripped_name_is_reported_not_renamed() -> Result<()> {
    let dir = TempDir::new()?;
    create_note(dir.path(), "#?#.md")?;
    let vault = FsVault::new(dir.path().to_path_buf());
    let config = config_with(&[
        (CharacterClass::NumberSign, ReplacementPolicy::Blank),
        (CharacterClass::QuestionMark, ReplacementPolicy::Blank),
    ]);

    let file = NoteFile::new(dir.path().join("#?#.md"))?;
    let outcome = lint_one(&vault, &file, &config);

    assert_eq!(
        outcome,
        LintOutcome::EmptyName {
            old: String::from("#?#"),
        }
    );
    assert!(dir.path().join("#?#.md").exists());
    Ok(())
}

#[test]
fn test_extensionless_file_is_renamed_without_a_dot() -> Result<()> {
    let dir = TempDir::new()?;
    create_note(dir.path(), "draft|notes")?;
    let vault = FsVault::new(dir.path().to_path_buf());
    let config = config_with(&[(CharacterClass::Pipe, ReplacementPolicy::Hyphen)]);

    let file = NoteFile::new(dir.path().join("draft|notes"))?;
    let outcome = lint_one(&vault, &file, &config);

    assert_eq!(
        outcome,
        LintOutcome::Renamed {
            old: String::from("draft|notes"),
            new: String::from("draft-notes"),
        }
    );
    assert!(dir.path().join("draft-notes").exists());
    Ok(())
}

#[test]
fn test_hidden_files_are_not_enumerated() -> Result<()> {
    let dir = TempDir::new()?;
    create_note(dir.path(), "visible.md")?;
    create_note(dir.path(), ".trash/old [junk].md")?;
    let vault = FsVault::new(dir.path().to_path_buf());

    let files = vault.files()?;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].base_name(), "visible");
    Ok(())
}

#[test]
fn test_rewrite_only_touches_the_base_name() -> Result<()> {
    // The extension is carried over verbatim, even when the base name
    // changes around it.
    let dir = TempDir::new()?;
    create_note(dir.path(), "a[b].tar.gz")?;
    let vault = FsVault::new(dir.path().to_path_buf());
    let config = config_with(&[(CharacterClass::SquareBrackets, ReplacementPolicy::Blank)]);

    let file = NoteFile::new(dir.path().join("a[b].tar.gz"))?;
    let outcome = lint_one(&vault, &file, &config);

    assert_eq!(
        outcome,
        LintOutcome::Renamed {
            old: String::from("a[b].tar"),
            new: String::from("ab.tar"),
        }
    );
    assert!(dir.path().join("ab.tar.gz").exists());
    Ok(())
}
