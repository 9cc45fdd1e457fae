use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use walkdir::WalkDir;

use crate::constants::MAX_SYMLINK_DEPTH;

/// Result of attempting one path copy.
#[derive(Debug, PartialEq, Eq)]
pub enum CopyStatus {
    /// At least the source itself was mirrored into the staging tree
    Copied,
    /// The source is absent or unreadable; routine on unprivileged runs
    Missing,
}

/// Copy one filesystem object into the staging tree.
///
/// Missing or unreadable sources are a silent skip, never an error. Symlinks
/// are resolved (bounded depth, so a link cycle degrades to `Missing` instead
/// of recursing forever) and the resolved target is copied. Directories are
/// mirrored recursively; unreadable files inside a directory are skipped
/// individually without aborting the walk. Only destination-side failures
/// (directory creation, file write) surface as errors.
pub fn copy_path(source: &Path, dest: &Path) -> Result<CopyStatus> {
    copy_path_bounded(source, dest, MAX_SYMLINK_DEPTH)
}

fn copy_path_bounded(source: &Path, dest: &Path, links_left: usize) -> Result<CopyStatus> {
    let meta = match fs::symlink_metadata(source) {
        Ok(meta) => meta,
        Err(_) => return Ok(CopyStatus::Missing),
    };

    if meta.file_type().is_symlink() {
        if links_left == 0 {
            debug!("link chain too deep at {}", source.display());
            return Ok(CopyStatus::Missing);
        }
        let target = match fs::read_link(source) {
            Ok(target) => target,
            Err(_) => return Ok(CopyStatus::Missing),
        };
        // Relative link targets resolve against the link's own directory
        let resolved = if target.is_absolute() {
            target
        } else {
            match source.parent() {
                Some(parent) => parent.join(target),
                None => target,
            }
        };
        return copy_path_bounded(&resolved, dest, links_left - 1);
    }

    if meta.is_dir() {
        copy_dir(source, dest)?;
        return Ok(CopyStatus::Copied);
    }

    if copy_file(source, dest)? {
        Ok(CopyStatus::Copied)
    } else {
        Ok(CopyStatus::Missing)
    }
}

/// Mirror a directory tree under `dest`, copying every regular file.
fn copy_dir(source: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("failed to create directory {}", dest.display()))?;

    for entry in WalkDir::new(source).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry under {}: {}", source.display(), err);
                continue;
            }
        };
        let rel = match entry.path().strip_prefix(source) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel,
            _ => continue,
        };
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("failed to create directory {}", target.display()))?;
        } else {
            // Regular files and symlinks alike: open (following links) and
            // copy bytes. Dangling links and permission misses are skipped
            // individually; the walk continues.
            if let Err(err) = copy_file(entry.path(), &target) {
                debug!("skipping {}: {:#}", entry.path().display(), err);
            }
        }
    }

    Ok(())
}

/// Copy a single file's bytes, creating parent directories as needed.
///
/// Returns `Ok(false)` when the source cannot be opened (routine permission
/// miss or dangling link). Handles are scoped so both are released on every
/// exit path.
fn copy_file(source: &Path, dest: &Path) -> Result<bool> {
    let mut reader = match fs::File::open(source) {
        Ok(file) => file,
        Err(_) => return Ok(false),
    };

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let mut writer = fs::File::create(dest)
        .with_context(|| format!("failed to create {}", dest.display()))?;
    io::copy(&mut reader, &mut writer)
        .with_context(|| format!("failed to copy {} to {}", source.display(), dest.display()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::symlink;
    use tempfile::TempDir;

    #[test]
    fn test_copy_regular_file() {
        let src_dir = TempDir::new().unwrap();
        let staging = TempDir::new().unwrap();
        let src = src_dir.path().join("passwd");
        fs::write(&src, "root:x:0:0:root:/root:/bin/bash\n").unwrap();

        let dest = staging.path().join("sistema/etc/passwd");
        let status = copy_path(&src, &dest).unwrap();

        assert_eq!(status, CopyStatus::Copied);
        assert_eq!(
            fs::read_to_string(dest).unwrap(),
            "root:x:0:0:root:/root:/bin/bash\n"
        );
    }

    #[test]
    fn test_missing_source_is_silent() {
        let staging = TempDir::new().unwrap();
        let dest = staging.path().join("out");

        let status = copy_path(Path::new("/definitely/not/here"), &dest).unwrap();

        assert_eq!(status, CopyStatus::Missing);
        assert!(!dest.exists());
    }

    #[test]
    fn test_copy_directory_mirrors_structure() {
        let src_dir = TempDir::new().unwrap();
        let staging = TempDir::new().unwrap();
        fs::create_dir_all(src_dir.path().join("cron.d")).unwrap();
        fs::write(src_dir.path().join("crontab"), "0 * * * * root run\n").unwrap();
        fs::write(src_dir.path().join("cron.d/job"), "@reboot root boot\n").unwrap();

        let dest = staging.path().join("tareas");
        let status = copy_path(src_dir.path(), &dest).unwrap();

        assert_eq!(status, CopyStatus::Copied);
        assert!(dest.join("cron.d").is_dir());
        assert_eq!(
            fs::read_to_string(dest.join("crontab")).unwrap(),
            "0 * * * * root run\n"
        );
        assert_eq!(
            fs::read_to_string(dest.join("cron.d/job")).unwrap(),
            "@reboot root boot\n"
        );
    }

    #[test]
    fn test_symlink_source_is_resolved() {
        let src_dir = TempDir::new().unwrap();
        let staging = TempDir::new().unwrap();
        let real = src_dir.path().join("real.log");
        fs::write(&real, "log data\n").unwrap();
        let link = src_dir.path().join("current.log");
        symlink(&real, &link).unwrap();

        let dest = staging.path().join("logs/current.log");
        let status = copy_path(&link, &dest).unwrap();

        assert_eq!(status, CopyStatus::Copied);
        assert_eq!(fs::read_to_string(dest).unwrap(), "log data\n");
    }

    #[test]
    fn test_relative_symlink_resolves_against_link_directory() {
        let src_dir = TempDir::new().unwrap();
        let staging = TempDir::new().unwrap();
        fs::write(src_dir.path().join("target.txt"), "via relative link\n").unwrap();
        let link = src_dir.path().join("alias.txt");
        symlink("target.txt", &link).unwrap();

        let dest = staging.path().join("alias.txt");
        let status = copy_path(&link, &dest).unwrap();

        assert_eq!(status, CopyStatus::Copied);
        assert_eq!(fs::read_to_string(dest).unwrap(), "via relative link\n");
    }

    #[test]
    fn test_dangling_symlink_is_treated_as_missing() {
        let src_dir = TempDir::new().unwrap();
        let staging = TempDir::new().unwrap();
        let link = src_dir.path().join("dangling");
        symlink("/definitely/not/here", &link).unwrap();

        let dest = staging.path().join("dangling");
        let status = copy_path(&link, &dest).unwrap();

        assert_eq!(status, CopyStatus::Missing);
        assert!(!dest.exists());
    }

    #[test]
    fn test_symlink_cycle_degrades_to_missing() {
        let src_dir = TempDir::new().unwrap();
        let staging = TempDir::new().unwrap();
        let a = src_dir.path().join("a");
        let b = src_dir.path().join("b");
        symlink(&a, &b).unwrap();
        symlink(&b, &a).unwrap();

        let status = copy_path(&a, &staging.path().join("a")).unwrap();

        assert_eq!(status, CopyStatus::Missing);
    }

    #[test]
    fn test_directory_with_dangling_sublink_still_copies_files() {
        let src_dir = TempDir::new().unwrap();
        let staging = TempDir::new().unwrap();
        fs::write(src_dir.path().join("kept.txt"), "kept\n").unwrap();
        symlink("/definitely/not/here", src_dir.path().join("broken")).unwrap();

        let dest = staging.path().join("mirror");
        let status = copy_path(src_dir.path(), &dest).unwrap();

        assert_eq!(status, CopyStatus::Copied);
        assert_eq!(fs::read_to_string(dest.join("kept.txt")).unwrap(), "kept\n");
        assert!(!dest.join("broken").exists());
    }

    #[test]
    fn test_directory_sublink_pointing_outside_copies_bytes() {
        let outside = TempDir::new().unwrap();
        let src_dir = TempDir::new().unwrap();
        let staging = TempDir::new().unwrap();
        let external = outside.path().join("external.conf");
        fs::write(&external, "external content\n").unwrap();
        symlink(&external, src_dir.path().join("link.conf")).unwrap();
        fs::write(src_dir.path().join("plain.conf"), "plain\n").unwrap();

        let dest = staging.path().join("conf");
        copy_path(src_dir.path(), &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("plain.conf")).unwrap(), "plain\n");
        assert_eq!(
            fs::read_to_string(dest.join("link.conf")).unwrap(),
            "external content\n"
        );
    }
}
