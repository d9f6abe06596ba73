//! Working-copy discovery by metadata-directory walk.
//!
//! CVS records its bookkeeping in a `CVS/` subdirectory inside every
//! directory of a checkout. Locating a working copy therefore needs no
//! client invocation at all: walk upward from the path in question until a
//! directory carrying the marker appears.
//!
//! # Public API
//! - [`WorkingCopy`]: A located root plus path arithmetic against it
//! - [`CVS_METADATA_DIR`]: The standard marker name
//!
//! Every directory of a checkout carries the marker, so the nearest marked
//! ancestor is already inside the working copy and commands run from there
//! resolve the same repository as any level above it.

use crate::core::error::{CvsScoutError, Result};
use std::path::{Path, PathBuf};

/// Name of the metadata directory marking each directory of a CVS checkout.
pub const CVS_METADATA_DIR: &str = "CVS";

/// A discovered working copy, identified by its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCopy {
    root: PathBuf,
}

impl WorkingCopy {
    /// Locate the working copy containing `start` using the standard
    /// [`CVS_METADATA_DIR`] marker.
    pub fn locate(start: &Path) -> Result<Self> {
        Self::locate_with_marker(CVS_METADATA_DIR, start)
    }

    /// Locate the working copy containing `start`, walking upward until a
    /// directory with a `marker` subdirectory is found.
    ///
    /// `start` may be a file; the walk then begins at its parent directory.
    /// The marker must be a directory, a plain file of the same name does
    /// not count.
    ///
    /// # Errors
    /// [`CvsScoutError::RepositoryNotFound`] when no ancestor up to the
    /// filesystem root carries the marker.
    pub fn locate_with_marker(marker: &str, start: &Path) -> Result<Self> {
        let begin: &Path = if start.is_dir() {
            start
        } else {
            start.parent().unwrap_or(start)
        };

        let mut dir = Some(begin);
        while let Some(current) = dir {
            if current.join(marker).is_dir() {
                log::debug!(
                    "Located working copy {} for {}",
                    current.display(),
                    start.display()
                );
                return Ok(Self {
                    root: current.to_path_buf(),
                });
            }
            dir = current.parent();
        }

        Err(CvsScoutError::repository_not_found(marker, start))
    }

    /// The root directory every client command uses as its working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rewrite `path` relative to the root, as passed on client command lines.
    ///
    /// The root itself relativizes to `.` so it stays a usable argument.
    ///
    /// # Errors
    /// [`CvsScoutError::OutsideWorkingCopy`] when `path` does not live under
    /// the root.
    pub fn relativize(&self, path: &Path) -> Result<PathBuf> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| CvsScoutError::outside_working_copy(path, &self.root))?;
        if relative.as_os_str().is_empty() {
            Ok(PathBuf::from("."))
        } else {
            Ok(relative.to_path_buf())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Build `a/CVS`, `a/b/CVS` and `a/b/c` (no marker) under a tempdir.
    fn layered_tree() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        fs::create_dir_all(a.join("CVS")).unwrap();
        fs::create_dir_all(a.join("b").join("CVS")).unwrap();
        fs::create_dir_all(a.join("b").join("c")).unwrap();
        (temp, a)
    }

    #[test]
    fn test_locates_nearest_marked_ancestor() {
        let (_temp, a) = layered_tree();

        let from_unmarked = WorkingCopy::locate(&a.join("b").join("c").join("file.txt")).unwrap();
        assert_eq!(from_unmarked.root(), a.join("b"));

        let from_outer = WorkingCopy::locate(&a.join("file.txt")).unwrap();
        assert_eq!(from_outer.root(), a);
    }

    #[test]
    fn test_locate_from_directory_checks_that_directory_first() {
        let (_temp, a) = layered_tree();
        let copy = WorkingCopy::locate(&a.join("b")).unwrap();
        assert_eq!(copy.root(), a.join("b"));
    }

    #[test]
    fn test_no_marker_anywhere_is_an_error() {
        let temp = TempDir::new().unwrap();
        let plain = temp.path().join("plain");
        fs::create_dir_all(&plain).unwrap();

        let result = WorkingCopy::locate(&plain.join("file.txt"));
        assert!(matches!(
            result,
            Err(CvsScoutError::RepositoryNotFound { .. })
        ));
    }

    #[test]
    fn test_marker_file_does_not_count() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("project");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("CVS"), "not a directory").unwrap();

        let result = WorkingCopy::locate(&dir.join("file.txt"));
        assert!(matches!(
            result,
            Err(CvsScoutError::RepositoryNotFound { .. })
        ));
    }

    #[test]
    fn test_custom_marker_name() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("project");
        fs::create_dir_all(dir.join(".svn")).unwrap();

        let copy = WorkingCopy::locate_with_marker(".svn", &dir.join("file.txt")).unwrap();
        assert_eq!(copy.root(), dir);

        let missing = WorkingCopy::locate(&dir.join("file.txt"));
        assert!(missing.is_err());
    }

    #[test]
    fn test_relativize_strips_the_root() {
        let (_temp, a) = layered_tree();
        let copy = WorkingCopy::locate(&a.join("file.txt")).unwrap();

        let relative = copy.relativize(&a.join("b").join("file.txt")).unwrap();
        assert_eq!(relative, PathBuf::from("b").join("file.txt"));
    }

    #[test]
    fn test_relativize_root_itself_yields_dot() {
        let (_temp, a) = layered_tree();
        let copy = WorkingCopy::locate(&a.join("file.txt")).unwrap();
        assert_eq!(copy.relativize(&a).unwrap(), PathBuf::from("."));
    }

    #[test]
    fn test_relativize_rejects_paths_outside_the_root() {
        let (_temp, a) = layered_tree();
        let copy = WorkingCopy::locate(&a.join("b").join("file.txt")).unwrap();

        let result = copy.relativize(&a.join("elsewhere.txt"));
        assert!(matches!(
            result,
            Err(CvsScoutError::OutsideWorkingCopy { .. })
        ));
    }
}
