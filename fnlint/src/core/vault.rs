// src/core/vault.rs
mod fs;

pub use fs::FsVault;

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// A single file in the vault, identified by its path.
///
/// The linter only ever reads from it; renames go through the owning
/// [`Vault`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteFile {
    path: PathBuf,
}

impl NoteFile {
    /// Wraps a path after checking that it names an existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist or is not a regular file.
    pub fn new(path: PathBuf) -> Result<Self> {
        if !path.is_file() {
            bail!("Not a file: {}", path.display());
        }
        Ok(Self { path })
    }

    /// Wraps a path without touching the filesystem.
    #[must_use]
    pub const fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The filename without its extension.
    #[must_use]
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
    }

    /// Path of a file next to this one with the given base name and this
    /// file's extension.
    #[must_use]
    pub fn sibling(&self, base_name: &str) -> PathBuf {
        match self.extension() {
            Some(ext) => self.path.with_file_name(format!("{base_name}.{ext}")),
            None => self.path.with_file_name(base_name),
        }
    }
}

/// Host file-management capability the linter runs against.
pub trait Vault: Sync {
    /// Every file currently in the vault. Snapshot semantics: files
    /// created after the call are not included.
    ///
    /// # Errors
    ///
    /// Returns an error if the vault cannot be enumerated.
    fn files(&self) -> Result<Vec<NoteFile>>;

    /// Renames `file` to `new_path`, failing if the target is already
    /// occupied.
    ///
    /// # Errors
    ///
    /// Returns an error if a file already exists at `new_path` or the
    /// rename itself fails.
    fn rename(&self, file: &NoteFile, new_path: &Path) -> Result<()>;
}
