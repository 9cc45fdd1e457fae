use std::path::Path;

use log::{debug, info};

use crate::collectors::command::{self, CommandStatus};
use crate::collectors::copy::{self, CopyStatus};
use crate::models::{CollectionPlan, Outcome, OutcomeKind};
use crate::run_log::RunLog;

/// Execute a collection plan against a staging root.
///
/// Items run sequentially in plan order, each attempted independently: a
/// failure or skip never prevents subsequent items. Failures are appended to
/// the run log, and the full per-item outcome set is returned.
pub fn execute_plan(plan: &CollectionPlan, staging_root: &Path, log: &RunLog) -> Vec<Outcome> {
    let mut outcomes = Vec::with_capacity(plan.commands.len() + plan.paths.len());

    for spec in &plan.commands {
        debug!("Running {} {}", spec.name, spec.args.join(" "));
        let kind = match command::run_and_save(staging_root, spec) {
            Ok(CommandStatus::Captured) => OutcomeKind::Collected,
            Ok(CommandStatus::SkippedOptional) => OutcomeKind::Skipped,
            Err(err) => {
                let message = format!("cmd {} {}: {:#}", spec.name, spec.args.join(" "), err);
                log.record(&message);
                OutcomeKind::Failed(message)
            }
        };
        outcomes.push(Outcome {
            item: spec.output.clone(),
            kind,
        });
    }

    for spec in &plan.paths {
        debug!("Copying {}", spec.source);
        let dest = staging_root.join(&spec.dest);
        let kind = match copy::copy_path(Path::new(&spec.source), &dest) {
            Ok(CopyStatus::Copied) => OutcomeKind::Collected,
            // Unreadable sources are expected on unprivileged runs; not logged
            Ok(CopyStatus::Missing) => OutcomeKind::Skipped,
            Err(err) => {
                let message = format!("copy {} -> {}: {:#}", spec.source, dest.display(), err);
                log.record(&message);
                OutcomeKind::Failed(message)
            }
        };
        outcomes.push(Outcome {
            item: spec.dest.clone(),
            kind,
        });
    }

    let collected = outcomes
        .iter()
        .filter(|o| o.kind == OutcomeKind::Collected)
        .count();
    info!("Collected {} of {} plan items", collected, outcomes.len());

    outcomes
}
