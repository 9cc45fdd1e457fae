use std::fmt;

use serde::Serialize;

/// Canonical grouping of Linux distributions sharing configuration and log
/// conventions.
///
/// Classification of any `(ID, ID_LIKE)` pair yields exactly one family;
/// [`Family::Unknown`] is the total-function fallback.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Debian,
    RedHat,
    #[serde(rename = "SUSE")]
    Suse,
    Arch,
    Gentoo,
    Slackware,
    Specialized,
    Unknown,
}

impl Family {
    /// Every canonical family tag.
    pub const ALL: [Family; 8] = [
        Family::Debian,
        Family::RedHat,
        Family::Suse,
        Family::Arch,
        Family::Gentoo,
        Family::Slackware,
        Family::Specialized,
        Family::Unknown,
    ];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Family::Debian => "Debian",
            Family::RedHat => "RedHat",
            Family::Suse => "SUSE",
            Family::Arch => "Arch",
            Family::Gentoo => "Gentoo",
            Family::Slackware => "Slackware",
            Family::Specialized => "Specialized",
            Family::Unknown => "Unknown",
        };
        write!(f, "{}", tag)
    }
}

/// Distribution identity resolved once per run from the OS identity source.
///
/// Written verbatim into the `_distro.txt` metadata artifact and consumed by
/// the plan builder. Never mutated after creation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DistroInfo {
    /// Lowercased `ID` token, e.g. `ubuntu`, `rocky`
    pub id: String,
    /// Lowercased, tokenized `ID_LIKE` hierarchy, e.g. `["rhel", "fedora"]`
    pub id_like: Vec<String>,
    pub family: Family,
    pub pretty_name: String,
    pub version_id: String,
}

impl DistroInfo {
    /// Hardcoded fallback used when the identity source is unreadable.
    pub fn unknown() -> Self {
        DistroInfo {
            id: "unknown".to_string(),
            id_like: Vec::new(),
            family: Family::Unknown,
            pretty_name: "Unknown Linux".to_string(),
            version_id: String::new(),
        }
    }
}

/// One diagnostic command to run during collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    /// Executable name, located via PATH at execution time
    pub name: String,
    /// Arguments passed as an explicit list, never shell-interpolated
    pub args: Vec<String>,
    /// Artifact path relative to the staging root
    pub output: String,
    /// When true, absence of the executable is not an error
    pub optional: bool,
}

/// One filesystem object (file, directory, or symlink) to copy into the
/// staging tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSpec {
    /// Absolute source path on the live host
    pub source: String,
    /// Destination path relative to the staging root
    pub dest: String,
}

/// The ordered set of commands and paths to gather for a given family.
///
/// Built once per run and read-only during execution. Order defines execution
/// order, but items are independent: one failure never affects another.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPlan {
    pub commands: Vec<CommandSpec>,
    pub paths: Vec<PathSpec>,
}

/// How a single plan item ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeKind {
    /// An artifact was written
    Collected,
    /// Missing optional executable or an unreadable/absent source; routine,
    /// never logged
    Skipped,
    /// A real failure; the message is also appended to the run error log
    Failed(String),
}

/// Per-item execution record returned by the plan executor.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The item's relative destination inside the staging tree
    pub item: String,
    pub kind: OutcomeKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_display_tags() {
        assert_eq!(format!("{}", Family::Debian), "Debian");
        assert_eq!(format!("{}", Family::RedHat), "RedHat");
        assert_eq!(format!("{}", Family::Suse), "SUSE");
        assert_eq!(format!("{}", Family::Arch), "Arch");
        assert_eq!(format!("{}", Family::Gentoo), "Gentoo");
        assert_eq!(format!("{}", Family::Slackware), "Slackware");
        assert_eq!(format!("{}", Family::Specialized), "Specialized");
        assert_eq!(format!("{}", Family::Unknown), "Unknown");
    }

    #[test]
    fn test_family_all_is_exhaustive() {
        // Eight variants, no duplicates
        assert_eq!(Family::ALL.len(), 8);
        for (i, a) in Family::ALL.iter().enumerate() {
            for b in Family::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_fallback() {
        let info = DistroInfo::unknown();
        assert_eq!(info.id, "unknown");
        assert_eq!(info.family, Family::Unknown);
        assert_eq!(info.pretty_name, "Unknown Linux");
        assert!(info.id_like.is_empty());
        assert!(info.version_id.is_empty());
    }

    #[test]
    fn test_family_serializes_with_canonical_tags() {
        let json = serde_json::to_string(&Family::Suse).unwrap();
        assert_eq!(json, "\"SUSE\"");
        let json = serde_json::to_string(&Family::RedHat).unwrap();
        assert_eq!(json, "\"RedHat\"");
    }
}
