//! Dockerfile validation against a file on disk.

use std::path::Path;

use crate::domain::{AppError, check_dockerfile};
use crate::ports::ContextFilesystem;

/// Read `path` and require every mandatory instruction to be present.
pub fn execute<F: ContextFilesystem>(filesystem: &F, path: &Path) -> Result<(), AppError> {
    let content = filesystem.read_to_string(path)?;
    let check = check_dockerfile(&content);
    if !check.is_valid() {
        return Err(AppError::ValidationFailed { missing: check.missing_owned() });
    }
    tracing::info!(path = %path.display(), "Dockerfile is valid");
    Ok(())
}
