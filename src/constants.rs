//! Global constants for the linux_triage application.
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make configuration changes easier.

/// Well-known system identity source
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Detection metadata artifact written at the staging root
pub const DISTRO_METADATA_FILE: &str = "_distro.txt";

/// Append-only error log at the staging root, one entry per line
pub const ERROR_LOG_FILE: &str = "_errors.txt";

/// Machine-readable run summary at the staging root
pub const SUMMARY_FILE: &str = "collection_summary.json";

/// UTC run stamp used in the staging directory and archive names
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Infix of the staging directory name: `<hostname>_<infix>_<stamp>`
pub const STAGING_DIR_INFIX: &str = "evidencia";

/// Case name used when the hostname cannot be determined or is empty
pub const FALLBACK_HOSTNAME: &str = "equipo";

/// Default parent directory for the staging tree and final archive
pub const DEFAULT_OUTPUT_DIR: &str = "/tmp";

/// Bound on symlink resolution during path copy; deeper chains are treated
/// as unreadable rather than followed forever
pub const MAX_SYMLINK_DEPTH: usize = 8;

/// Chunk size for streaming file contents into the archive (512KB)
pub const COMPRESSION_CHUNK_SIZE: usize = 512 * 1024;
