//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks every
//! note record for the fields and formats a published note needs:
//!
//! - **Required Fields**: `slug`, `title`, `thesis`, `bullets` and `tags`
//!   are present and non-empty.
//! - **Slug Format**: lowercase letters, digits and hyphens only, matching
//!   the record's file name.
//! - **Lists**: no blank bullets or tags.
//! - **Links**: every link has a label and an `http://`/`https://` URL.
//! - **Uniqueness**: no two records share a slug.
//!
//! This command is read-only and independent of `build`, which renders
//! records whether or not they pass.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use notesite::filesystem::MemoryFS;
use notesite::output::{Mark, OutputConfig};
use notesite::validate::validate;

/// Validate note records
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory containing the note records (*.yaml)
    #[arg(long, value_name = "DIR", default_value = "content")]
    pub content: PathBuf,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!(
        "{} Validating note records in {}",
        out.mark(Mark::Scan),
        args.content.display()
    );

    let records = MemoryFS::load_flat(&args.content)?;
    let report = validate(&records);

    if report.is_empty() {
        println!(
            "{} No note records found in {}",
            out.mark(Mark::Error),
            args.content.display()
        );
        anyhow::bail!("No note records found in {}", args.content.display());
    }

    for record in &report.records {
        if record.is_valid() {
            println!("{} {}", out.mark(Mark::Ok), record.file.display());
            continue;
        }

        println!("{} {}", out.mark(Mark::Error), record.file.display());
        for issue in &record.issues {
            println!("   - {}", issue);
        }
    }

    let invalid = report.records.iter().filter(|r| !r.is_valid()).count();
    println!();
    if invalid > 0 {
        println!(
            "{} {} of {} records have issues ({} total)",
            out.mark(Mark::Error),
            invalid,
            report.records.len(),
            report.issue_count()
        );
        anyhow::bail!("Validation failed: {} issue(s) found", report.issue_count());
    }

    println!(
        "{} All {} records are valid",
        out.mark(Mark::Ok),
        report.records.len()
    );
    Ok(())
}
