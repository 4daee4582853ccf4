//! File permission hardening utilities.
//!
//! - **Unix (macOS, Linux, iOS, Android)**: database directories get mode 0700
//!   and database files 0600.
//! - **Other platforms**: no-op; hosts keep the database in an app-private
//!   location.

use std::fs::OpenOptions;
use std::io::ErrorKind;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::error::Error;

/// Whether a path names an SQLite special database (`:memory:` and friends)
pub(crate) fn is_special_path(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.is_empty() || path_str.starts_with(':')
}

/// Pre-creates the database file with owner-only permissions before SQLite
/// opens it, so it never exists with umask-dependent permissions.
///
/// Special paths are skipped. An existing file is left untouched.
pub fn precreate_secure_database_file<P>(path: P) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if is_special_path(path) {
        return Ok(());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
        #[cfg(unix)]
        set_unix_permissions(parent, 0o700)?;
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_file) => set_secure_file_permissions(path),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Sets owner-only permissions on an existing file; missing files are ignored.
pub fn set_secure_file_permissions<P>(path: P) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(());
    }

    #[cfg(unix)]
    set_unix_permissions(path, 0o600)?;

    Ok(())
}

#[cfg(unix)]
fn set_unix_permissions(path: &Path, mode: u32) -> Result<(), Error> {
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).map_err(|e| {
        Error::FilePermission(format!(
            "Failed to set permissions {mode:o} on {}: {e}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_paths_are_skipped() {
        assert!(is_special_path(Path::new(":memory:")));
        assert!(is_special_path(Path::new("")));
        assert!(!is_special_path(Path::new("/tmp/documents.sqlite3")));
        precreate_secure_database_file(":memory:").unwrap();
    }

    #[test]
    fn test_precreate_creates_parent_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("documents.sqlite3");

        precreate_secure_database_file(&path).unwrap();
        assert!(path.exists());

        #[cfg(unix)]
        {
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        // Second call leaves the file alone.
        std::fs::write(&path, b"keep").unwrap();
        precreate_secure_database_file(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"keep");
    }
}
