//! Whole-file text utilities
//!
//! Files are loaded entirely into memory; these helpers are meant for
//! configuration files and compose templates, not large data.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use regex::Regex;

use crate::domain::value_objects::EntityKind;
use crate::error::BerthResult;
use crate::infrastructure::fs::LocalFs;

pub fn read_to_string(path: &Path) -> BerthResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Overwrite `path` with `content`
pub fn write_string(path: &Path, content: &str) -> BerthResult<()> {
    Ok(fs::write(path, content)?)
}

/// Replace the contents of `dest` with the contents of `source`
pub fn copy_text(source: &Path, dest: &Path) -> BerthResult<()> {
    let content = read_to_string(source)?;
    write_string(dest, &content)
}

/// Substitute every match of `pattern` in the file with `replacement`.
///
/// `replacement` may reference capture groups as `$1` or `${name}`.
/// Returns the number of matches replaced; the file is rewritten only if
/// there was at least one.
pub fn replace_in_file(path: &Path, pattern: &str, replacement: &str) -> BerthResult<usize> {
    let re = Regex::new(pattern)?;
    let content = read_to_string(path)?;

    let count = re.find_iter(&content).count();
    if count > 0 {
        let replaced = re.replace_all(&content, replacement);
        write_string(path, &replaced)?;
    }
    Ok(count)
}

/// Append to `dest` every line of `source` whose beginning matches
/// `pattern`. `dest` is created if missing and made writable first.
/// Returns the number of lines appended.
pub fn append_matching_lines(source: &Path, pattern: &str, dest: &Path) -> BerthResult<usize> {
    let re = Regex::new(pattern)?;
    let content = read_to_string(source)?;

    let matched: Vec<&str> = content
        .split_inclusive('\n')
        .filter(|line| re.find(line).is_some_and(|m| m.start() == 0))
        .collect();

    LocalFs::new().ensure_exists(dest, EntityKind::File)?;
    make_writable(dest)?;

    let mut file = OpenOptions::new().append(true).open(dest)?;
    for line in &matched {
        file.write_all(line.as_bytes())?;
    }
    Ok(matched.len())
}

#[cfg(unix)]
fn make_writable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o200);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn make_writable(path: &Path) -> std::io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions)
}
