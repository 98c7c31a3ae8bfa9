//! Check command handler.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use super::open_notebook;
use crate::cli::CheckArgs;
use crate::cli::output::{OutputFormat, print_json};
use crate::domain::Requester;
use crate::tree::{CheckReport, RepairReport};

#[derive(Serialize)]
struct CheckOutput<'a> {
    #[serde(flatten)]
    report: &'a CheckReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    repaired: Option<RepairReport>,
}

pub fn handle_check(args: &CheckArgs, db_path: &Path, requester: &Requester) -> Result<()> {
    let mut notebook = open_notebook(db_path)?;

    let (report, repaired) = if args.fix {
        let (report, repaired) = notebook.repair(requester).context("repair failed")?;
        (report, Some(repaired))
    } else {
        (notebook.check(requester).context("check failed")?, None)
    };

    match args.format {
        OutputFormat::Json => print_json(CheckOutput {
            report: &report,
            repaired,
        })?,
        OutputFormat::Human => {
            if report.is_ok() {
                println!("All topics OK.");
                return Ok(());
            }
            for issue in &report.issues {
                println!("error: {}", issue);
            }
            println!("\nFound {} issue(s)", report.len());
            if let Some(r) = repaired {
                println!(
                    "Repaired: {} chain(s) rewritten, {} topic(s) and {} card(s) removed, {} orphan card(s) removed",
                    r.rewritten, r.cascade.topics, r.cascade.cards, r.orphan_cards
                );
            }
        }
    }

    // Exit code: fail while anything is left unfixed
    match repaired {
        Some(r) if r.unresolved > 0 => bail!("{} issue(s) could not be repaired", r.unresolved),
        None if !report.is_ok() => bail!("check failed"),
        _ => Ok(()),
    }
}
