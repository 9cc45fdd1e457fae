use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::models::CommandSpec;

/// Result of attempting one diagnostic command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    /// Output captured and written to the staging tree
    Captured,
    /// The executable is absent and the command is optional
    SkippedOptional,
}

/// Run one diagnostic command and save its combined output.
///
/// The executable is located via `PATH`; a missing optional command is a
/// silent skip, a missing required one an error. Output (stdout followed by
/// stderr) is written to the spec's relative path under `staging_root`
/// regardless of exit status. Only an inability to execute or to write the
/// artifact is an error.
pub fn run_and_save(staging_root: &Path, spec: &CommandSpec) -> Result<CommandStatus> {
    let exe = match which::which(&spec.name) {
        Ok(path) => path,
        Err(_) => {
            if spec.optional {
                debug!("Optional command not present: {}", spec.name);
                return Ok(CommandStatus::SkippedOptional);
            }
            return Err(anyhow!("command not found: {}", spec.name));
        }
    };

    // Arguments are passed as an explicit list; nothing goes through a shell.
    let output = Command::new(&exe)
        .args(&spec.args)
        .output()
        .with_context(|| format!("failed to execute {}", spec.name))?;

    let mut captured = output.stdout;
    captured.extend_from_slice(&output.stderr);

    let dest = staging_root.join(&spec.output);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(&dest, &captured)
        .with_context(|| format!("failed to write {}", dest.display()))?;

    if !output.status.success() {
        debug!(
            "{} exited with {}; output saved regardless",
            spec.name, output.status
        );
    }

    Ok(CommandStatus::Captured)
}
