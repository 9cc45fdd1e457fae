//! Family-specific plan extensions.
//!
//! Each family maps to the ordered list of extra paths covering its canonical
//! authentication log, web-server log directory, package-manager history and
//! scheduled-task configuration. The table is built once; the Unknown family
//! falls back to a single broad `/var/log` capture.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::path;
use crate::models::{Family, PathSpec};

lazy_static! {
    static ref FAMILY_PATHS: HashMap<Family, Vec<PathSpec>> = {
        let mut table = HashMap::new();
        table.insert(
            Family::Debian,
            vec![
                path("/var/log/auth.log", "logs/autenticacion/auth.log"),
                path("/var/log/apache2", "apache"),
                path("/var/log/dpkg.log", "paquetes/dpkg.log"),
                path("/var/log/apt", "paquetes/apt"),
                path("/etc/cron.d", "tareas/etc_cron.d"),
                path("/etc/cron.daily", "tareas/cron.daily"),
                path("/etc/cron.hourly", "tareas/cron.hourly"),
                path("/etc/crontab", "tareas/etc_crontab"),
            ],
        );
        table.insert(
            Family::RedHat,
            vec![
                path("/var/log/secure", "logs/autenticacion/secure"),
                path("/var/log/httpd", "apache"),
                path("/var/log/yum.log", "paquetes/yum.log"),
                path("/var/log/dnf.log", "paquetes/dnf.log"),
                path("/etc/cron.d", "tareas/etc_cron.d"),
                path("/etc/crontab", "tareas/etc_crontab"),
                path("/var/spool/cron", "tareas/var_spool_cron"),
            ],
        );
        table.insert(
            Family::Suse,
            vec![
                path("/var/log/audit/audit.log", "logs/audit/audit.log"),
                path("/var/log/apache2", "apache"),
                path("/var/log/zypp/history", "paquetes/zypp_history"),
                path("/etc/cron.d", "tareas/etc_cron.d"),
                path("/etc/crontab", "tareas/etc_crontab"),
            ],
        );
        table.insert(
            Family::Arch,
            vec![
                // Present when rsyslog is installed; the journal is canonical
                path("/var/log/auth.log", "logs/autenticacion/auth.log"),
                path("/var/log/journal", "logs/journal"),
                path("/var/log/httpd", "apache"),
                path("/var/log/pacman.log", "paquetes/pacman.log"),
                path("/etc/cron.d", "tareas/etc_cron.d"),
                path("/etc/crontab", "tareas/etc_crontab"),
            ],
        );
        table.insert(
            Family::Gentoo,
            vec![
                path("/var/log/auth.log", "logs/autenticacion/auth.log"),
                path("/var/log/apache2", "apache"),
                path("/var/log/emerge.log", "paquetes/emerge.log"),
                path("/etc/cron.d", "tareas/etc_cron.d"),
                path("/etc/crontab", "tareas/etc_crontab"),
            ],
        );
        table.insert(
            Family::Slackware,
            vec![
                path("/var/log/secure", "logs/autenticacion/secure"),
                path("/var/log/httpd", "apache"),
                path("/var/log/packages", "paquetes/packages"),
                path("/etc/crontab", "tareas/etc_crontab"),
            ],
        );
        table.insert(
            Family::Specialized,
            vec![
                path("/var/log/auth.log", "logs/autenticacion/auth.log"),
                path("/var/log/apache2", "apache"),
                path("/etc/crontab", "tareas/etc_crontab"),
            ],
        );
        table.insert(Family::Unknown, vec![path("/var/log", "logs/var_log")]);
        table
    };
}

/// Extra paths collected for a family on top of the baseline.
pub fn family_paths(family: Family) -> &'static [PathSpec] {
    FAMILY_PATHS
        .get(&family)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_an_entry() {
        for family in Family::ALL {
            assert!(
                !family_paths(family).is_empty(),
                "family {} has no path extensions",
                family
            );
        }
    }

    #[test]
    fn test_known_families_capture_auth_and_packages() {
        for family in Family::ALL {
            if family == Family::Unknown || family == Family::Specialized {
                continue;
            }
            let dests: Vec<&str> = family_paths(family).iter().map(|p| p.dest.as_str()).collect();
            assert!(
                dests.iter().any(|d| d.starts_with("logs/")),
                "family {} misses an authentication/audit log",
                family
            );
            assert!(
                dests.iter().any(|d| d.starts_with("paquetes/")),
                "family {} misses package-manager history",
                family
            );
        }
    }

    #[test]
    fn test_unknown_is_the_broad_capture_only() {
        let extras = family_paths(Family::Unknown);
        assert_eq!(extras.len(), 1);
        assert_eq!(extras[0].source, "/var/log");
    }

    #[test]
    fn test_table_lookup_is_stable() {
        // Two lookups return the same ordered slice
        assert_eq!(family_paths(Family::Debian), family_paths(Family::Debian));
    }
}
