//! OS identity detection and distribution family classification.
//!
//! The identity source (`/etc/os-release`) is read once per run into an
//! [`IdentityRecord`], normalized, and classified into a [`Family`]. An
//! unreadable identity source is not a run failure: detection falls back to
//! the hardcoded Unknown distribution.

use std::path::Path;

use log::{debug, warn};

use crate::constants::OS_RELEASE_PATH;
use crate::models::DistroInfo;

pub mod family;
pub mod os_release;

pub use family::classify;
pub use os_release::{read_os_release, IdentityRecord};

/// Detect the running distribution from the well-known identity source.
///
/// Never fails: if `/etc/os-release` is missing or unreadable, the hardcoded
/// Unknown fallback is returned and collection proceeds with the broad
/// Unknown-family plan.
pub fn detect_distro() -> DistroInfo {
    match read_os_release(Path::new(OS_RELEASE_PATH)) {
        Ok(record) => {
            let info = from_identity(&record);
            debug!("Detected distribution id={} family={}", info.id, info.family);
            info
        }
        Err(err) => {
            warn!(
                "Could not read {}: {:#}; treating distribution as unknown",
                OS_RELEASE_PATH, err
            );
            DistroInfo::unknown()
        }
    }
}

/// Build a [`DistroInfo`] from a parsed identity record.
///
/// Applies the normalization the classifier relies on: `ID` is lowercased and
/// `ID_LIKE` is lowercased and tokenized on whitespace and commas.
pub fn from_identity(record: &IdentityRecord) -> DistroInfo {
    let id = record
        .get("ID")
        .map(|v| v.to_lowercase())
        .unwrap_or_default();
    let id_like = tokenize_id_like(record.get("ID_LIKE").map(String::as_str).unwrap_or(""));
    let family = classify(&id, &id_like);

    DistroInfo {
        id,
        id_like,
        family,
        pretty_name: record.get("PRETTY_NAME").cloned().unwrap_or_default(),
        version_id: record.get("VERSION_ID").cloned().unwrap_or_default(),
    }
}

fn tokenize_id_like(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
