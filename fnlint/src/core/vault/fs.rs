// src/core/vault/fs.rs
use anyhow::{Context as _, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::vault::{NoteFile, Vault};
use crate::utils::is_hidden;

/// Vault backed by a directory tree on the local filesystem.
#[derive(Clone, Debug)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Vault for FsVault {
    fn files(&self) -> Result<Vec<NoteFile>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = entry
                .with_context(|| format!("Failed to walk vault: {}", self.root.display()))?;
            if entry.file_type().is_file() {
                files.push(NoteFile::from_path(entry.path().to_path_buf()));
            }
        }

        Ok(files)
    }

    fn rename(&self, file: &NoteFile, new_path: &Path) -> Result<()> {
        // fs::rename replaces an existing target on most platforms; an
        // occupied name must fail instead of clobbering the other file.
        if new_path.exists() {
            bail!("A file already exists at {}", new_path.display());
        }

        fs::rename(file.path(), new_path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                file.path().display(),
                new_path.display()
            )
        })
    }
}
