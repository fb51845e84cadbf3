//! In-memory state of a build-context editing session.
//!
//! `BuildContext` owns the invariants; it performs no I/O. The session layer
//! in `app::session` wraps it with filesystem and template access.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{AppError, ContextFileName, Template};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    dockerfile: String,
    files: BTreeMap<ContextFileName, String>,
    active: Option<ContextFileName>,
    persisted: Vec<PathBuf>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dockerfile(&self) -> &str {
        &self.dockerfile
    }

    pub fn set_dockerfile(&mut self, content: String) {
        self.dockerfile = content;
    }

    /// Auxiliary files ordered by name.
    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(name, content)| (name.as_str(), content.as_str()))
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.keys().map(ContextFileName::as_str).collect()
    }

    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_ref().map(ContextFileName::as_str)
    }

    pub fn persisted(&self) -> &[PathBuf] {
        &self.persisted
    }

    /// Replace Dockerfile and files with the template's content. Clears the active file.
    pub fn apply_template(&mut self, template: &Template) -> Result<(), AppError> {
        let mut files = BTreeMap::new();
        for (name, content) in &template.files {
            files.insert(ContextFileName::new(name)?, content.clone());
        }
        self.dockerfile = template.dockerfile.clone();
        self.files = files;
        self.active = None;
        Ok(())
    }

    /// Drop all Dockerfile and file content. Persisted paths are kept.
    pub fn clear(&mut self) {
        self.dockerfile.clear();
        self.files.clear();
        self.active = None;
    }

    /// Insert or overwrite a file without changing the active selection.
    pub fn insert_file(&mut self, name: ContextFileName, content: String) {
        self.files.insert(name, content);
    }

    /// Insert an empty file (overwriting any existing entry) and make it active.
    pub fn add_empty_file(&mut self, name: ContextFileName) {
        self.files.insert(name.clone(), String::new());
        self.active = Some(name);
    }

    /// Make `name` the active file and return its content.
    pub fn activate(&mut self, name: &str) -> Result<&str, AppError> {
        let key = self
            .files
            .get_key_value(name)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| AppError::FileNotFound(name.to_string()))?;
        self.active = Some(key);
        Ok(self.file(name).unwrap_or_default())
    }

    /// Activate `name` only when nothing is active yet.
    pub fn activate_if_none(&mut self, name: &ContextFileName) {
        if self.active.is_none() && self.files.contains_key(name) {
            self.active = Some(name.clone());
        }
    }

    /// Store `content` as the active file's content and return its name.
    pub fn update_active(&mut self, content: String) -> Result<ContextFileName, AppError> {
        let name = self.active.clone().ok_or(AppError::NoActiveFile)?;
        self.files.insert(name.clone(), content);
        Ok(name)
    }

    /// Move `old`'s content to `new`. Fails if `new` names a different existing file.
    pub fn rename_file(&mut self, old: &str, new: ContextFileName) -> Result<(), AppError> {
        if !self.files.contains_key(old) {
            return Err(AppError::FileNotFound(old.to_string()));
        }
        if new.as_str() != old && self.files.contains_key(new.as_str()) {
            return Err(AppError::FileExists(new.into()));
        }
        let content =
            self.files.remove(old).ok_or_else(|| AppError::FileNotFound(old.to_string()))?;
        if self.active.as_deref() == Some(old) {
            self.active = Some(new.clone());
        }
        self.files.insert(new, content);
        Ok(())
    }

    pub fn remove_file(&mut self, name: &str) -> Result<String, AppError> {
        let content =
            self.files.remove(name).ok_or_else(|| AppError::FileNotFound(name.to_string()))?;
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        Ok(content)
    }

    /// Record a written path. Returns false when it was already recorded.
    pub fn record_persisted(&mut self, path: &Path) -> bool {
        if self.persisted.iter().any(|p| p == path) {
            return false;
        }
        self.persisted.push(path.to_path_buf());
        true
    }
}
