// src/core/linter/rename.rs
use anyhow::{Result, anyhow};
use std::thread;

use crate::core::config::Config;
use crate::core::linter::rewrite;
use crate::core::vault::{NoteFile, Vault};
use crate::models::LintOutcome;

/// Lints one filename, renaming the file when the rewrite changes it.
///
/// A clean name is a silent no-op. A rewrite that would leave an empty
/// base name is refused and reported. Rename failures never escape this
/// function: a failed rename (most commonly because a file with the new
/// name already exists) becomes [`LintOutcome::Conflict`] and the file
/// stays at its original path.
pub fn lint_one(vault: &dyn Vault, file: &NoteFile, config: &Config) -> LintOutcome {
    let old_base = file.base_name();
    let new_base = rewrite(&old_base, config);

    if new_base == old_base {
        return LintOutcome::Unchanged;
    }

    if new_base.is_empty() {
        return LintOutcome::EmptyName { old: old_base };
    }

    let new_path = file.sibling(&new_base);
    match vault.rename(file, &new_path) {
        Ok(()) => LintOutcome::Renamed {
            old: old_base,
            new: new_base,
        },
        Err(_) => LintOutcome::Conflict {
            old: old_base,
            new: new_base,
        },
    }
}

/// Lints every filename in the vault.
///
/// Takes one snapshot of the file list, then fans [`lint_one`] out across
/// a scoped thread per file. Completion order is unspecified; one file's
/// conflict does not stop the others, and a partially renamed vault is a
/// valid end state. There is no rollback and no retry.
///
/// # Errors
///
/// This function may return an error if:
/// * The vault cannot be enumerated
/// * A lint worker panics
pub fn lint_all(vault: &dyn Vault, config: &Config) -> Result<Vec<LintOutcome>> {
    let files = vault.files()?;

    thread::scope(|scope| {
        let handles: Vec<_> = files
            .iter()
            .map(|file| scope.spawn(move || lint_one(vault, file, config)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow!("lint worker panicked")))
            .collect()
    })
}
