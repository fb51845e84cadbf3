//! Build-context session: the editable Dockerfile plus auxiliary files.
//!
//! A session is created empty, reset whenever a template is selected, and
//! mutated through explicit method calls. Every file it writes is recorded so
//! that `cleanup` can remove exactly those files when the session ends.
//!
//! The caller owns the edit buffers: before switching files or templates it
//! must flush the buffer it is displaying through `update_active_content` or
//! `set_dockerfile`.

use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, BuildContext, CleanupOutcome, CleanupReport, ContextFileName, DOCKERFILE_NAME,
    DockerfileCheck, TemplateSelection, check_dockerfile,
};
use crate::ports::{ContextFilesystem, TemplateCatalog};

/// Result of loading auxiliary files from disk.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Names inserted into the context, in load order.
    pub loaded: Vec<String>,
    /// Paths that could not be loaded, with the reason.
    pub failures: Vec<(PathBuf, AppError)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct BuildContextSession<F: ContextFilesystem, T: TemplateCatalog> {
    filesystem: F,
    templates: T,
    work_dir: PathBuf,
    context: BuildContext,
}

impl<F: ContextFilesystem, T: TemplateCatalog> BuildContextSession<F, T> {
    /// Open an empty session persisting into `work_dir`.
    pub fn new(filesystem: F, templates: T, work_dir: PathBuf) -> Self {
        Self { filesystem, templates, work_dir, context: BuildContext::new() }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn context(&self) -> &BuildContext {
        &self.context
    }

    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn dockerfile(&self) -> &str {
        self.context.dockerfile()
    }

    /// Flush the Dockerfile edit buffer.
    pub fn set_dockerfile(&mut self, content: String) {
        self.context.set_dockerfile(content);
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.context.file_names()
    }

    pub fn active_file(&self) -> Option<&str> {
        self.context.active()
    }

    pub fn active_content(&self) -> Option<&str> {
        self.context.active().and_then(|name| self.context.file(name))
    }

    pub fn persisted_paths(&self) -> &[PathBuf] {
        self.context.persisted()
    }

    /// Replace the whole context with a template, or empty it for "Load Existing".
    pub fn select_template(&mut self, name: &str) -> Result<&BuildContext, AppError> {
        match TemplateSelection::parse(name)? {
            TemplateSelection::Template(template_name) => {
                let template = self.templates.template(template_name);
                self.context.apply_template(&template)?;
                tracing::info!(
                    template = %template_name,
                    files = template.files.len(),
                    "selected template"
                );
            }
            TemplateSelection::LoadExisting => {
                self.context.clear();
                tracing::info!("cleared context to load an existing Dockerfile");
            }
        }
        Ok(&self.context)
    }

    /// Replace the Dockerfile with the content of `path`, verbatim.
    pub fn load_dockerfile_from_path(&mut self, path: &Path) -> Result<&str, AppError> {
        let content = self.filesystem.read_to_string(path)?;
        self.context.set_dockerfile(content);
        tracing::info!(path = %path.display(), "loaded Dockerfile");
        Ok(self.context.dockerfile())
    }

    /// Load each path as an auxiliary file named after its basename.
    ///
    /// Failures are collected per path; the remaining paths are still loaded.
    pub fn load_auxiliary_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> LoadReport {
        let mut report = LoadReport::default();
        let mut first_loaded: Option<ContextFileName> = None;

        for path in paths {
            let path = path.as_ref();
            match self.read_auxiliary_file(path) {
                Ok((name, content)) => {
                    tracing::info!(file = %name, path = %path.display(), "loaded auxiliary file");
                    report.loaded.push(name.to_string());
                    first_loaded.get_or_insert_with(|| name.clone());
                    self.context.insert_file(name, content);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "could not load file");
                    report.failures.push((path.to_path_buf(), err));
                }
            }
        }

        if let Some(name) = first_loaded {
            self.context.activate_if_none(&name);
        }
        report
    }

    fn read_auxiliary_file(&self, path: &Path) -> Result<(ContextFileName, String), AppError> {
        let base = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| AppError::InvalidFilename(path.display().to_string()))?;
        let name = ContextFileName::new(&base)?;
        let content = self.filesystem.read_to_string(path)?;
        Ok((name, content))
    }

    /// Add an empty file and make it active. An existing name is overwritten.
    pub fn add_file(&mut self, filename: &str) -> Result<(), AppError> {
        let name = ContextFileName::new(filename)?;
        tracing::info!(file = %name, "added file");
        self.context.add_empty_file(name);
        Ok(())
    }

    /// Make `filename` active and return its content.
    pub fn show_file(&mut self, filename: &str) -> Result<&str, AppError> {
        self.context.activate(filename)
    }

    /// Flush the active file's edit buffer without writing to disk.
    pub fn update_active_content(&mut self, content: String) -> Result<(), AppError> {
        self.context.update_active(content).map(|_| ())
    }

    pub fn rename_file(&mut self, old: &str, new: &str) -> Result<(), AppError> {
        let new_name = ContextFileName::new(new)?;
        self.context.rename_file(old, new_name)?;
        tracing::info!(from = old, to = new, "renamed file");
        Ok(())
    }

    pub fn remove_file(&mut self, filename: &str) -> Result<(), AppError> {
        self.context.remove_file(filename)?;
        tracing::info!(file = filename, "removed file");
        Ok(())
    }

    /// Store `content` in the active file and write it to the working directory.
    pub fn save_active_file(&mut self, content: &str) -> Result<PathBuf, AppError> {
        let name = self.context.update_active(content.to_string())?;
        self.persist(name.as_str(), content)
    }

    pub fn validate_dockerfile(&self, content: &str) -> DockerfileCheck {
        check_dockerfile(content)
    }

    /// Validate and write `content` as `Dockerfile` in the working directory.
    pub fn save_dockerfile(&mut self, content: &str) -> Result<PathBuf, AppError> {
        let check = self.validate_dockerfile(content);
        if !check.is_valid() {
            return Err(AppError::ValidationFailed { missing: check.missing_owned() });
        }
        self.context.set_dockerfile(content.to_string());
        self.persist(DOCKERFILE_NAME, content)
    }

    /// Write the Dockerfile and every auxiliary file.
    ///
    /// The Dockerfile is validated first; nothing is written if it fails.
    pub fn save_all(&mut self) -> Result<Vec<PathBuf>, AppError> {
        let dockerfile = self.context.dockerfile().to_string();
        let mut written = vec![self.save_dockerfile(&dockerfile)?];

        let files: Vec<(String, String)> = self
            .context
            .files()
            .map(|(name, content)| (name.to_string(), content.to_string()))
            .collect();
        for (name, content) in files {
            written.push(self.persist(&name, &content)?);
        }
        Ok(written)
    }

    fn persist(&mut self, name: &str, content: &str) -> Result<PathBuf, AppError> {
        self.filesystem.ensure_dir(&self.work_dir)?;
        let path = self.work_dir.join(name);
        self.filesystem.write(&path, content)?;
        self.context.record_persisted(&path);
        tracing::info!(file = name, path = %path.display(), "saved");
        Ok(path)
    }

    /// Delete every file written during this session.
    ///
    /// Each path is attempted once; failures are reported, never raised. The
    /// recorded paths are kept, so a second call reports them as already absent.
    pub fn cleanup(&self) -> CleanupReport {
        let mut report = CleanupReport::default();

        for path in self.context.persisted() {
            let outcome = match self.filesystem.remove_file(path) {
                Ok(()) => CleanupOutcome::Deleted,
                Err(err) if err.is_not_found() => CleanupOutcome::AlreadyAbsent,
                Err(err) => CleanupOutcome::Failed(err.to_string()),
            };
            match &outcome {
                CleanupOutcome::Failed(reason) => {
                    tracing::warn!(path = %path.display(), reason = %reason, "cleanup failed");
                }
                other => tracing::info!(path = %path.display(), outcome = %other, "cleanup"),
            }
            report.entries.push((path.clone(), outcome));
        }

        report
    }
}
