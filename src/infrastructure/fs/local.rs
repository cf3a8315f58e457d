//! Local File System Reconciler
//!
//! Idempotent create/remove/copy over the local disk. "Nothing to do" is
//! success everywhere: these calls are re-run on every redeployment.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::value_objects::{ChildKind, EntityKind};
use crate::error::{BerthError, BerthResult};

/// Mode for directories created by the reconciler (rwxrwxr-x)
pub const DIRECTORY_MODE: u32 = 0o775;

/// Local file system reconciler
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// Create `path` (and any missing parents) unless it already exists
    pub fn ensure_exists(&self, path: &Path, kind: EntityKind) -> BerthResult<()> {
        if path.exists() {
            return Ok(());
        }

        match kind {
            EntityKind::Directory => create_dir_all_with_mode(path)?,
            EntityKind::File => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    self.ensure_exists(parent, EntityKind::Directory)?;
                }
                fs::File::create(path)?;
            }
        }
        debug!(path = %path.display(), ?kind, "created");
        Ok(())
    }

    /// Delete a file; an absent file counts as deleted
    pub fn remove_file(&self, path: &Path) -> BerthResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "file does not exist; carrying on");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Recursively delete a directory tree.
    ///
    /// A permission error triggers one pass granting write access over the
    /// tree, then one retry. An absent tree counts as deleted.
    pub fn remove_tree(&self, path: &Path) -> BerthResult<()> {
        match fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "directory does not exist; carrying on");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                warn!(path = %path.display(), "permission denied; granting write access and retrying");
                grant_write_recursive(path)?;
                match fs::remove_dir_all(path) {
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                    other => other.map_err(Into::into),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Merge the contents of `source` into `dest`, overwriting files.
    ///
    /// Returns the number of files copied. A missing `source` is a no-op:
    /// `dest` is left untouched.
    pub fn copy_tree(&self, source: &Path, dest: &Path) -> BerthResult<usize> {
        if !source.exists() {
            warn!(source = %source.display(), "source directory does not exist; carrying on");
            return Ok(0);
        }
        self.ensure_exists(dest, EntityKind::Directory)?;

        let walker = ignore::WalkBuilder::new(source)
            .standard_filters(false)
            .build();

        let mut copied = 0;
        for entry in walker {
            let entry = entry.map_err(walk_error)?;
            let Ok(relative) = entry.path().strip_prefix(source) else {
                continue;
            };
            if relative.as_os_str().is_empty() {
                continue;
            }

            let target = dest.join(relative);
            if entry.path().is_dir() {
                create_dir_all_with_mode(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    create_dir_all_with_mode(parent)?;
                }
                fs::copy(entry.path(), &target)?;
                copied += 1;
            }
        }

        debug!(source = %source.display(), dest = %dest.display(), copied, "tree copied");
        Ok(copied)
    }

    /// True if anything matches `pattern`; shell-style wildcards allowed
    pub fn path_exists(&self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }
        Path::new(pattern).exists() || !self.expand_glob(pattern).is_empty()
    }

    /// All paths matching a wildcard pattern, sorted
    pub fn expand_glob(&self, pattern: &str) -> Vec<PathBuf> {
        match glob::glob(pattern) {
            Ok(paths) => {
                let mut matches: Vec<PathBuf> = paths.filter_map(Result::ok).collect();
                matches.sort();
                matches
            }
            Err(e) => {
                debug!(pattern, error = %e, "invalid glob pattern");
                Vec::new()
            }
        }
    }

    /// Immediate children of a directory, sorted; directories end with `/`
    pub fn list_children(&self, path: &Path, kind: ChildKind) -> BerthResult<Vec<String>> {
        if !path.is_dir() {
            return Err(BerthError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut children = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let is_dir = entry.path().is_dir();
            if !kind.accepts(is_dir) {
                continue;
            }
            let mut child = entry.path().display().to_string();
            if is_dir {
                child.push('/');
            }
            children.push(child);
        }
        children.sort();
        Ok(children)
    }

    /// Copy a file, creating the destination's parent directories.
    /// A directory destination receives the file under its own name.
    pub fn copy_file(&self, source: &Path, dest: &Path) -> BerthResult<()> {
        let target = match (dest.is_dir(), source.file_name()) {
            (true, Some(name)) => dest.join(name),
            _ => dest.to_path_buf(),
        };
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.ensure_exists(parent, EntityKind::Directory)?;
        }
        fs::copy(source, &target)?;
        Ok(())
    }

    /// Copy only when `dest` does not exist yet. Returns whether it copied.
    pub fn copy_file_if_absent(&self, source: &Path, dest: &Path) -> BerthResult<bool> {
        if dest.exists() {
            return Ok(false);
        }
        self.copy_file(source, dest)?;
        Ok(true)
    }

    /// Rename when `old` exists. Returns whether it renamed.
    pub fn rename_if_exists(&self, old: &Path, new: &Path) -> BerthResult<bool> {
        if !old.exists() {
            return Ok(false);
        }
        fs::rename(old, new)?;
        Ok(true)
    }
}

fn walk_error(err: ignore::Error) -> BerthError {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| std::io::Error::new(ErrorKind::Other, message))
        .into()
}

#[cfg(unix)]
fn create_dir_all_with_mode(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(DIRECTORY_MODE)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir_all_with_mode(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

fn grant_write_recursive(path: &Path) -> std::io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if metadata.file_type().is_symlink() {
        return Ok(());
    }

    grant_write(path, &metadata)?;

    if metadata.is_dir() {
        for entry in fs::read_dir(path)? {
            grant_write_recursive(&entry?.path())?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn grant_write(path: &Path, metadata: &fs::Metadata) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = metadata.permissions();
    // directories also need read + search to be emptied
    let extra = if metadata.is_dir() { 0o700 } else { 0o200 };
    permissions.set_mode(permissions.mode() | extra);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn grant_write(path: &Path, metadata: &fs::Metadata) -> std::io::Result<()> {
    let mut permissions = metadata.permissions();
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions)
}
