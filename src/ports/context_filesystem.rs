//! Filesystem access for build-context sessions.
//!
//! Paths are absolute or relative to the process working directory; the
//! session decides where artifacts go. Errors carry the offending path.

use std::path::Path;

use crate::domain::AppError;

/// Port for the filesystem operations a build-context session performs.
pub trait ContextFilesystem {
    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, replacing any existing content.
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Remove a file. Absence is reported as an error of kind `NotFound`.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError>;
}
