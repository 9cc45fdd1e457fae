use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// Mapping from uppercase identifier tokens to unquoted string values,
/// parsed from a line-oriented `KEY=value` source. No required keys.
pub type IdentityRecord = HashMap<String, String>;

lazy_static! {
    static ref IDENTITY_LINE: Regex = Regex::new(r"^([A-Z_]+)=(.*)$").unwrap();
}

/// Read and parse the system identity source.
///
/// Only a wholly unreadable source is an error; individual malformed lines
/// are ignored.
pub fn read_os_release(path: &Path) -> Result<IdentityRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse_identity(&content))
}

/// Parse identity text line by line.
///
/// Each line matching `TOKEN=VALUE` (token = uppercase letters/underscore)
/// contributes one entry, with surrounding single or double quotes stripped
/// from the value. Non-matching lines are skipped.
pub fn parse_identity(content: &str) -> IdentityRecord {
    let mut record = IdentityRecord::new();
    for line in content.lines() {
        if let Some(caps) = IDENTITY_LINE.captures(line) {
            let value = caps[2].trim_matches(|c| c == '"' || c == '\'');
            record.insert(caps[1].to_string(), value.to_string());
        }
    }
    record
}
