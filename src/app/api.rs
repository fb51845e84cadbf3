//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, context creation and command execution. Each operation has an
//! `_at` variant taking the project directory explicitly.

use std::path::{Path, PathBuf};

use crate::adapters::local_filesystem::{absolutize, normalize_path};
use crate::adapters::{EmbeddedTemplateCatalog, LocalFilesystem, ProcessToolRunner};
use crate::app::commands::{container, image, scaffold, validate, vm};
use crate::app::config::load_config;
use crate::app::{AppContext, BuildContextSession};
use crate::domain::{AppConfig, DOCKERFILE_NAME, TemplateName, Toolchain};
use crate::ports::TemplateCatalog;

pub use crate::app::commands::image::BuildOutcome;
pub use crate::domain::{
    AppError, BootSpec, CleanupOutcome, CleanupPolicy, CleanupReport, ContainerSummary,
    HubSearchResult, ImageSummary,
};

/// Session type backed by the local filesystem and embedded templates.
pub type LocalSession = BuildContextSession<LocalFilesystem, EmbeddedTemplateCatalog>;

type LocalContext = AppContext<LocalFilesystem, ProcessToolRunner>;

fn current_dir() -> Result<PathBuf, AppError> {
    Ok(std::env::current_dir()?)
}

/// Load `dockctx.toml` from `dir`, or defaults when absent.
pub fn config_at(dir: &Path) -> Result<AppConfig, AppError> {
    load_config(dir, &LocalFilesystem::new())
}

fn create_context(dir: &Path) -> Result<(AppConfig, LocalContext), AppError> {
    let config = config_at(dir)?;
    let toolchain = Toolchain::new(config.tools.clone(), config.vm.clone());
    let ctx = AppContext::new(LocalFilesystem::new(), ProcessToolRunner::new(), toolchain);
    Ok((config, ctx))
}

/// Open an empty build-context session persisting into the configured context directory.
pub fn open_session() -> Result<(AppConfig, LocalSession), AppError> {
    open_session_at(&current_dir()?)
}

pub fn open_session_at(dir: &Path) -> Result<(AppConfig, LocalSession), AppError> {
    let config = config_at(dir)?;
    let work_dir = absolutize(&config.context.dir)?;
    let session =
        BuildContextSession::new(LocalFilesystem::new(), EmbeddedTemplateCatalog::new(), work_dir);
    Ok((config, session))
}

// =============================================================================
// Templates
// =============================================================================

pub fn templates() -> Vec<TemplateName> {
    EmbeddedTemplateCatalog::new().names()
}

/// Write `template` into the context directory of the current project.
pub fn scaffold(template: &str) -> Result<Vec<PathBuf>, AppError> {
    scaffold_at(&current_dir()?, template)
}

pub fn scaffold_at(dir: &Path, template: &str) -> Result<Vec<PathBuf>, AppError> {
    let (_config, mut session) = open_session_at(dir)?;
    scaffold::execute(&mut session, template)
}

/// Validate `path`, or the context directory's Dockerfile when `None`.
pub fn validate(path: Option<&Path>) -> Result<PathBuf, AppError> {
    validate_at(&current_dir()?, path)
}

pub fn validate_at(dir: &Path, path: Option<&Path>) -> Result<PathBuf, AppError> {
    let path = match path {
        Some(path) => dir.join(path),
        None => config_at(dir)?.context.dir.join(DOCKERFILE_NAME),
    };
    validate::execute(&LocalFilesystem::new(), &path)?;
    Ok(path)
}

// =============================================================================
// Images
// =============================================================================

/// Build an image from the context directory.
///
/// `dockerfile` defaults to `<context dir>/Dockerfile`.
pub fn image_build(tag: &str, dockerfile: Option<&Path>) -> Result<BuildOutcome, AppError> {
    image_build_at(&current_dir()?, tag, dockerfile)
}

pub fn image_build_at(
    dir: &Path,
    tag: &str,
    dockerfile: Option<&Path>,
) -> Result<BuildOutcome, AppError> {
    let (config, ctx) = create_context(dir)?;
    let context_dir = config.context.dir;
    let dockerfile = match dockerfile {
        Some(path) => normalize_path(&dir.join(path)),
        None => context_dir.join(DOCKERFILE_NAME),
    };
    image::build(&ctx, tag, &dockerfile, &context_dir)
}

pub fn image_pull(image_name: &str) -> Result<(), AppError> {
    let (_config, ctx) = create_context(&current_dir()?)?;
    image::pull(&ctx, image_name)
}

pub fn image_list() -> Result<Vec<ImageSummary>, AppError> {
    let (_config, ctx) = create_context(&current_dir()?)?;
    image::list(&ctx)
}

pub fn image_search_local(term: &str) -> Result<Vec<ImageSummary>, AppError> {
    let (_config, ctx) = create_context(&current_dir()?)?;
    image::search_local(&ctx, term)
}

pub fn image_search_hub(term: &str) -> Result<Vec<HubSearchResult>, AppError> {
    let (_config, ctx) = create_context(&current_dir()?)?;
    image::search_hub(&ctx, term)
}

// =============================================================================
// Containers
// =============================================================================

pub fn container_start(image_name: &str, name: &str) -> Result<String, AppError> {
    let (_config, ctx) = create_context(&current_dir()?)?;
    container::start(&ctx, image_name, name)
}

pub fn container_stop(name: &str) -> Result<(), AppError> {
    let (_config, ctx) = create_context(&current_dir()?)?;
    container::stop(&ctx, name)
}

pub fn container_list(all: bool) -> Result<Vec<ContainerSummary>, AppError> {
    let (_config, ctx) = create_context(&current_dir()?)?;
    container::list(&ctx, all)
}

pub fn container_search(query: &str) -> Result<Vec<ContainerSummary>, AppError> {
    let (_config, ctx) = create_context(&current_dir()?)?;
    container::search(&ctx, query)
}

// =============================================================================
// Virtual machines
// =============================================================================

/// Create `<dir>/<name>.img`; `dir` defaults to the context directory.
pub fn vm_create(name: &str, size_mb: u32, dir: Option<&Path>) -> Result<PathBuf, AppError> {
    vm_create_at(&current_dir()?, name, size_mb, dir)
}

pub fn vm_create_at(
    project_dir: &Path,
    name: &str,
    size_mb: u32,
    dir: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let (config, ctx) = create_context(project_dir)?;
    let dir = match dir {
        Some(dir) => project_dir.join(dir),
        None => config.context.dir,
    };
    vm::create(&ctx, &dir, name, size_mb)
}

pub fn vm_boot(spec: &BootSpec) -> Result<(), AppError> {
    let (_config, ctx) = create_context(&current_dir()?)?;
    vm::boot(&ctx, spec)
}
