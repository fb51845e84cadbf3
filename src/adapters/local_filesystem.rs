use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ContextFilesystem;

/// `ContextFilesystem` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ContextFilesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|e| AppError::file_io("read", path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|e| AppError::file_io("write", path, e))
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_file(path).map_err(|e| AppError::file_io("delete", path, e))
    }

    /// Unreadable metadata counts as present so the caller's read reports the real error.
    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(true)
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(|e| AppError::file_io("create directory", path, e))
    }
}

/// Make `path` absolute against the current directory and normalize it.
pub fn absolutize(path: &Path) -> Result<PathBuf, AppError> {
    let full =
        if path.is_absolute() { path.to_path_buf() } else { std::env::current_dir()?.join(path) };
    Ok(normalize_path(&full))
}

/// Whether `path` lies inside `root` after logical normalization.
pub fn is_within(path: &Path, root: &Path) -> bool {
    normalize_path(path).starts_with(normalize_path(root))
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => {
                ret.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}
