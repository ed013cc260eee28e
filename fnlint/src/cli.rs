// src/cli.rs
use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::{CONFIG_FILE_NAME, load_config, save_config};
use crate::core::linter::{lint_all, lint_one};
use crate::core::vault::{FsVault, NoteFile};
use crate::models::{CharacterClass, LintSummary, ReplacementPolicy};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Vault root directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Lint a single file's name
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Lint every filename in the vault
    #[arg(short, long)]
    pub all: bool,

    /// Update a replacement policy and persist it (e.g. "colon=hyphen")
    #[arg(short, long, value_name = "CLASS=POLICY")]
    pub set: Vec<String>,

    /// Config file location (defaults to .fnlint.toml in the vault root)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<()> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| args.directory.join(CONFIG_FILE_NAME));

    let mut config = load_config(&config_path)?;

    for assignment in &args.set {
        let (class, policy) = parse_assignment(assignment)?;
        config.set(class, policy);
        // Write-through: one save per change, like the settings screen it
        // stands in for.
        save_config(&config_path, &config)?;
    }

    if let Some(file) = args.file {
        let vault = FsVault::new(args.directory);
        let note = NoteFile::new(file)?;
        if let Some(line) = lint_one(&vault, &note, &config).report() {
            println!("{line}");
        }
    } else if args.all {
        let vault = FsVault::new(args.directory);
        println!("Linting all filenames...");

        let outcomes = lint_all(&vault, &config)?;
        let mut summary = LintSummary::new();
        for outcome in &outcomes {
            if let Some(line) = outcome.report() {
                println!("{line}");
            }
            summary.record(outcome);
        }

        println!(
            "Linted all filenames: {} checked, {} renamed, {} conflicts",
            summary.total(),
            summary.renamed,
            summary.conflicts
        );
    } else if args.set.is_empty() {
        // No operation requested: show the effective configuration.
        for class in CharacterClass::ALL {
            println!("{:<16} {}", class.as_str(), config.get(class));
        }
    }

    Ok(())
}

fn parse_assignment(assignment: &str) -> Result<(CharacterClass, ReplacementPolicy)> {
    let Some((class, policy)) = assignment.split_once('=') else {
        bail!("invalid --set value '{assignment}' (expected CLASS=POLICY, e.g. colon=hyphen)");
    };
    Ok((class.trim().parse()?, policy.trim().parse()?))
}
