use anyhow::{Context, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{DistroInfo, Outcome, OutcomeKind};

/// Machine-readable report of one collection run.
#[derive(Serialize)]
struct CollectionSummary<'a> {
    collection_id: String,
    hostname: &'a str,
    collection_time: &'a str,
    collector_version: &'static str,
    distro: &'a DistroInfo,
    collected: usize,
    skipped: usize,
    failed: usize,
    failures: Vec<&'a str>,
}

/// Create a JSON summary of the collection.
///
/// Counts per-item outcomes and lists every failure message alongside the
/// detected distribution identity.
pub fn create_collection_summary(
    hostname: &str,
    timestamp: &str,
    distro: &DistroInfo,
    outcomes: &[Outcome],
) -> Result<String> {
    let mut collected = 0;
    let mut skipped = 0;
    let mut failures = Vec::new();

    for outcome in outcomes {
        match &outcome.kind {
            OutcomeKind::Collected => collected += 1,
            OutcomeKind::Skipped => skipped += 1,
            OutcomeKind::Failed(message) => failures.push(message.as_str()),
        }
    }

    let summary = CollectionSummary {
        collection_id: Uuid::new_v4().to_string(),
        hostname,
        collection_time: timestamp,
        collector_version: env!("CARGO_PKG_VERSION"),
        distro,
        collected,
        skipped,
        failed: failures.len(),
        failures,
    };

    serde_json::to_string_pretty(&summary).context("failed to serialize collection summary")
}
