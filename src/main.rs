use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use linux_triage::cli::Args;
use linux_triage::collectors::executor;
use linux_triage::constants::{
    DISTRO_METADATA_FILE, FALLBACK_HOSTNAME, RUN_TIMESTAMP_FORMAT, STAGING_DIR_INFIX, SUMMARY_FILE,
};
use linux_triage::distro;
use linux_triage::models::{DistroInfo, Outcome, OutcomeKind};
use linux_triage::plan;
use linux_triage::privileges;
use linux_triage::run_log::RunLog;
use linux_triage::utils::{compress, summary};

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logging(args.verbose)?;

    info!("Starting Linux triage collection");
    privileges::report_privileges();

    let info = distro::detect_distro();
    let hostname = resolve_hostname();
    let timestamp = chrono::Utc::now().format(RUN_TIMESTAMP_FORMAT).to_string();

    let staging_root = args
        .output
        .join(format!("{}_{}_{}", hostname, STAGING_DIR_INFIX, timestamp));
    fs::create_dir_all(&staging_root)
        .with_context(|| format!("failed to create staging directory {}", staging_root.display()))?;
    info!("Staging directory created at {}", staging_root.display());

    write_distro_metadata(&staging_root, &info)?;

    let log = RunLog::new(&staging_root);
    let plan = plan::build_plan(&info);
    info!(
        "Collection plan for family {}: {} commands, {} paths",
        info.family,
        plan.commands.len(),
        plan.paths.len()
    );

    let outcomes = executor::execute_plan(&plan, &staging_root, &log);
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o.kind, OutcomeKind::Failed(_)))
        .count();
    if failed > 0 {
        warn!("{} plan items failed; see {}", failed, log.path().display());
    }

    write_summary(&staging_root, &hostname, &timestamp, &info, &outcomes);

    if args.skip_package {
        info!(
            "Packaging skipped; staging tree left at {}",
            staging_root.display()
        );
        info!("Detected distribution: {} ({})", info.family, info.pretty_name);
        return Ok(());
    }

    let archive_path = args.output.join(format!("{}_{}.zip", hostname, timestamp));
    if let Err(err) = compress::zip_folder(&staging_root, &archive_path) {
        log.record(&format!("zip: {:#}", err));
        return Err(err.context("failed to create evidence archive"));
    }

    if !args.keep_staging {
        if let Err(err) = fs::remove_dir_all(&staging_root) {
            warn!(
                "Could not remove staging directory {}: {}",
                staging_root.display(),
                err
            );
        }
    }

    info!("Detected distribution: {} ({})", info.family, info.pretty_name);
    info!("Forensic evidence saved to {}", archive_path.display());
    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

fn resolve_hostname() -> String {
    let name = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_default();
    if name.is_empty() {
        FALLBACK_HOSTNAME.to_string()
    } else {
        name
    }
}

/// Write the detection metadata artifact at the staging root.
fn write_distro_metadata(staging_root: &Path, info: &DistroInfo) -> Result<()> {
    let meta = format!(
        "ID={}\nID_LIKE={}\nFAMILY={}\nPRETTY={}\nVERSION_ID={}\n",
        info.id,
        info.id_like.join(","),
        info.family,
        info.pretty_name,
        info.version_id
    );
    fs::write(staging_root.join(DISTRO_METADATA_FILE), meta)
        .context("failed to write distribution metadata")
}

/// Write the run summary; a summary failure is not worth losing the archive.
fn write_summary(
    staging_root: &Path,
    hostname: &str,
    timestamp: &str,
    info: &DistroInfo,
    outcomes: &[Outcome],
) {
    match summary::create_collection_summary(hostname, timestamp, info, outcomes) {
        Ok(json) => {
            if let Err(err) = fs::write(staging_root.join(SUMMARY_FILE), json) {
                warn!("Could not write collection summary: {}", err);
            }
        }
        Err(err) => warn!("Could not build collection summary: {:#}", err),
    }
}
