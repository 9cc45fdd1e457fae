use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use walkdir::WalkDir;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use crate::constants::COMPRESSION_CHUNK_SIZE;

/// Package a staging tree into a single compressed ZIP archive.
///
/// Every entry lands under a root named after the source directory's base
/// name, so the archive unpacks into one case directory. Directory entries
/// are preserved (trailing separator) and file entries are deflated. Files
/// that cannot be opened are skipped; any write-side failure aborts
/// packaging.
pub fn zip_folder(source: &Path, target: &Path) -> Result<()> {
    info!("Packaging {} into {}", source.display(), target.display());

    let zip_file = fs::File::create(target)
        .with_context(|| format!("failed to create archive {}", target.display()))?;
    let mut zip = ZipWriter::new(zip_file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    // Entries are rooted at the staging directory's base name
    let root = source.parent().unwrap_or_else(|| Path::new(""));
    let mut buffer = vec![0u8; COMPRESSION_CHUNK_SIZE];

    for entry in WalkDir::new(source) {
        let entry = entry.with_context(|| format!("failed to walk {}", source.display()))?;
        let name = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .to_string();

        if entry.file_type().is_dir() {
            zip.add_directory(name.as_str(), options)
                .with_context(|| format!("failed to add directory entry {}", name))?;
        } else if entry.file_type().is_file() {
            let mut reader = match fs::File::open(entry.path()) {
                Ok(file) => file,
                Err(err) => {
                    debug!("skipping unreadable file {}: {}", entry.path().display(), err);
                    continue;
                }
            };

            zip.start_file(name.as_str(), options)
                .with_context(|| format!("failed to start archive entry {}", name))?;
            loop {
                let bytes_read = reader
                    .read(&mut buffer)
                    .with_context(|| format!("failed to read {}", entry.path().display()))?;
                if bytes_read == 0 {
                    break;
                }
                zip.write_all(&buffer[..bytes_read])
                    .with_context(|| format!("failed to write archive entry {}", name))?;
            }
        }
    }

    zip.finish().context("failed to finalize archive")?;
    Ok(())
}
