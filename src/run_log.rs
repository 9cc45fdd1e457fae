use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use log::debug;

use crate::constants::ERROR_LOG_FILE;

/// Append-only run-scoped error log at the staging root.
///
/// One `<RFC3339-timestamp>: <message>` line per recorded failure. The log
/// itself must never abort the run: append failures are swallowed.
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(staging_root: &Path) -> Self {
        RunLog {
            path: staging_root.join(ERROR_LOG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one sanitized entry. Embedded newlines are collapsed so the log
    /// stays one entry per line.
    pub fn record(&self, message: &str) {
        let line = format!(
            "{}: {}\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            sanitize(message)
        );

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path);
        match file {
            Ok(mut f) => {
                if let Err(err) = f.write_all(line.as_bytes()) {
                    debug!("could not append to {}: {}", self.path.display(), err);
                }
            }
            Err(err) => debug!("could not open {}: {}", self.path.display(), err),
        }
    }
}

fn sanitize(message: &str) -> String {
    message
        .split(['\n', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_record_appends_one_line_per_entry() {
        let staging = TempDir::new().unwrap();
        let log = RunLog::new(staging.path());

        log.record("first failure");
        log.record("second failure");

        let content = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(": first failure"));
        assert!(lines[1].ends_with(": second failure"));
    }

    #[test]
    fn test_entries_carry_an_rfc3339_timestamp() {
        let staging = TempDir::new().unwrap();
        let log = RunLog::new(staging.path());

        log.record("boom");

        let content = fs::read_to_string(log.path()).unwrap();
        let (stamp, _) = content.split_once(": ").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_embedded_newlines_are_collapsed() {
        let staging = TempDir::new().unwrap();
        let log = RunLog::new(staging.path());

        log.record("line one\nline two\r\nline three");

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("line one | line two | line three"));
    }

    #[test]
    fn test_record_never_panics_on_unwritable_path() {
        let log = RunLog::new(Path::new("/nonexistent/staging"));
        // Swallowed, not propagated
        log.record("does not crash");
    }
}
