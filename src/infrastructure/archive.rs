//! Zip archives
//!
//! Bundles files and directories for shipping between hosts and unpacks
//! them into a target directory.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::domain::value_objects::EntityKind;
use crate::error::{BerthError, BerthResult};
use crate::infrastructure::fs::LocalFs;

/// Write `entries` into a new archive at `archive_path`.
///
/// Each entry is stored under its own file name. Directories contribute
/// their files; sub-directories are included only when `recursive` is set.
/// Returns the number of top-level entries archived.
pub fn create_archive(archive_path: &Path, entries: &[PathBuf], recursive: bool) -> BerthResult<usize> {
    if let Some(parent) = archive_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        LocalFs::new().ensure_exists(parent, EntityKind::Directory)?;
    }

    let mut zip = ZipWriter::new(File::create(archive_path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        let name = entry
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                BerthError::invalid_argument(format!("cannot archive '{}'", entry.display()))
            })?;

        if entry.is_dir() {
            add_directory(&mut zip, entry, &name, recursive, options)?;
        } else {
            add_file(&mut zip, entry, &name, options)?;
        }
    }

    zip.finish()?;
    debug!(archive = %archive_path.display(), entries = entries.len(), "archive written");
    Ok(entries.len())
}

/// Unpack an archive into `dest_dir`, creating it if needed
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> BerthResult<()> {
    LocalFs::new().ensure_exists(dest_dir, EntityKind::Directory)?;
    let mut archive = ZipArchive::new(File::open(archive_path)?)?;
    archive.extract(dest_dir)?;
    debug!(archive = %archive_path.display(), dest = %dest_dir.display(), "archive extracted");
    Ok(())
}

/// Entry names always use `/`, whatever the host separator
fn add_directory(
    zip: &mut ZipWriter<File>,
    dir: &Path,
    name: &str,
    recursive: bool,
    options: SimpleFileOptions,
) -> BerthResult<()> {
    zip.add_directory(format!("{}/", name), options)?;

    let mut children: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<io::Result<_>>()?;
    children.sort();

    for child in children {
        let Some(child_name) = child.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let child_entry = format!("{}/{}", name, child_name);
        if child.is_dir() {
            if recursive {
                add_directory(zip, &child, &child_entry, recursive, options)?;
            }
        } else {
            add_file(zip, &child, &child_entry, options)?;
        }
    }
    Ok(())
}

fn add_file(
    zip: &mut ZipWriter<File>,
    path: &Path,
    name: &str,
    options: SimpleFileOptions,
) -> BerthResult<()> {
    zip.start_file(name, options)?;
    io::copy(&mut File::open(path)?, zip)?;
    Ok(())
}
