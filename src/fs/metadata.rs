//! File metadata queries: size, times, ownership, and access checks.
//!
//! The access checks mirror `access(2)` on unix, answering for the real
//! uid/gid of the calling process. Elsewhere they degrade to what
//! [`std::fs::Metadata`] can answer.

use crate::error::{FsError, Result};
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Returns the file size in bytes.
///
/// # Errors
///
/// [`FsError::NotFound`] if the path is absent.
pub fn size(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path).map_err(|err| FsError::from_io(err, path))?;
    Ok(metadata.len())
}

/// Returns the file's last modification time.
///
/// # Errors
///
/// [`FsError::NotFound`] if the path is absent.
pub fn modified(path: &Path) -> Result<SystemTime> {
    let metadata = fs::metadata(path).map_err(|err| FsError::from_io(err, path))?;
    metadata.modified().map_err(|err| FsError::from_io(err, path))
}

/// Returns the permission mode bits of the file.
///
/// # Errors
///
/// [`FsError::NotFound`] if the path is absent.
#[cfg(unix)]
pub fn mode(path: &Path) -> Result<u32> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|err| FsError::from_io(err, path))?;
    Ok(metadata.permissions().mode() & 0o7777)
}

/// Returns the uid of the file's owner.
///
/// # Errors
///
/// [`FsError::NotFound`] if the path is absent.
#[cfg(unix)]
pub fn owner_uid(path: &Path) -> Result<u32> {
    use std::os::unix::fs::MetadataExt;

    let metadata = fs::metadata(path).map_err(|err| FsError::from_io(err, path))?;
    Ok(metadata.uid())
}

/// Changes the owner and/or group of the file. `None` leaves that id
/// unchanged.
///
/// # Errors
///
/// [`FsError::NotFound`] if the path is absent,
/// [`FsError::PermissionDenied`] if the process may not chown it.
#[cfg(unix)]
pub fn change_owner(path: &Path, uid: Option<u32>, gid: Option<u32>) -> Result<()> {
    std::os::unix::fs::chown(path, uid, gid).map_err(|err| FsError::from_io(err, path))
}

#[cfg(unix)]
fn access(path: &Path, amode: libc::c_int) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(cpath) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(cpath.as_ptr(), amode) == 0 }
}

/// Returns `true` if the path exists.
#[cfg(unix)]
#[must_use]
pub fn exists(path: &Path) -> bool {
    access(path, libc::F_OK)
}

/// Returns `true` if the path is readable by the calling process.
#[cfg(unix)]
#[must_use]
pub fn is_readable(path: &Path) -> bool {
    access(path, libc::R_OK)
}

/// Returns `true` if the path is writable by the calling process.
#[cfg(unix)]
#[must_use]
pub fn is_writable(path: &Path) -> bool {
    access(path, libc::W_OK)
}

/// Returns `true` if the path is executable by the calling process.
#[cfg(unix)]
#[must_use]
pub fn is_executable(path: &Path) -> bool {
    access(path, libc::X_OK)
}

/// Returns `true` if the path exists.
#[cfg(not(unix))]
#[must_use]
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Returns `true` if the path is readable by the calling process.
#[cfg(not(unix))]
#[must_use]
pub fn is_readable(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Returns `true` if the path is writable by the calling process.
#[cfg(not(unix))]
#[must_use]
pub fn is_writable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| !m.permissions().readonly())
}

/// Returns `true` if the path is executable by the calling process.
#[cfg(not(unix))]
#[must_use]
pub fn is_executable(path: &Path) -> bool {
    // No execute bit outside unix; fall back to existence.
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_size() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("sized.txt");
        std::fs::write(&file, "12345").unwrap();

        assert_eq!(size(&file).unwrap(), 5);

        let err = size(&temp.path().join("ghost")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_modified() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("timed.txt");
        std::fs::write(&file, "content").unwrap();

        let mtime = modified(&file).unwrap();
        assert!(mtime <= SystemTime::now());
    }

    #[test]
    fn test_access_checks() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "content").unwrap();

        assert!(exists(&file));
        assert!(is_readable(&file));
        assert!(is_writable(&file));

        let ghost = temp.path().join("ghost");
        assert!(!exists(&ghost));
        assert!(!is_readable(&ghost));
    }

    #[test]
    #[cfg(unix)]
    fn test_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let file = temp.path().join("script.sh");
        std::fs::write(&file, "#!/bin/sh\n").unwrap();

        assert!(!is_executable(&file));

        let mut perms = std::fs::metadata(&file).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&file, perms).unwrap();
        assert!(is_executable(&file));
    }

    #[test]
    #[cfg(unix)]
    fn test_mode_and_owner() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let file = temp.path().join("owned.txt");
        std::fs::write(&file, "content").unwrap();

        let mut perms = std::fs::metadata(&file).unwrap().permissions();
        perms.set_mode(0o640);
        std::fs::set_permissions(&file, perms).unwrap();
        assert_eq!(mode(&file).unwrap() & 0o777, 0o640);

        // Files we just created belong to us.
        let uid = owner_uid(&file).unwrap();
        assert_eq!(uid, unsafe { libc::getuid() });

        // Chown to our own ids is always permitted.
        change_owner(&file, Some(uid), None).unwrap();
    }
}
