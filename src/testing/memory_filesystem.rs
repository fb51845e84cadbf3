use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ContextFilesystem;

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after moving one into a
/// session and inspect or tamper with the files behind it.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
    locked: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn add(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
    }

    /// Delete a file behind the session's back.
    pub fn delete(&self, path: &Path) {
        self.files.lock().unwrap().remove(path);
    }

    /// Make future removals of `path` fail with a permission error.
    pub fn fail_removal(&self, path: &Path) {
        self.locked.lock().unwrap().insert(path.to_path_buf());
    }

    pub fn content(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.files.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}

impl ContextFilesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| {
            AppError::file_io("read", path, io::Error::new(io::ErrorKind::NotFound, "not found"))
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.add(path, content);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        if self.locked.lock().unwrap().contains(path) {
            return Err(AppError::file_io(
                "delete",
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        match self.files.lock().unwrap().remove(path) {
            Some(_) => Ok(()),
            None => Err(AppError::file_io(
                "delete",
                path,
                io::Error::new(io::ErrorKind::NotFound, "not found"),
            )),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }
}
