//! dockctx: author Docker build contexts from templates and drive docker/qemu.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    LocalSession, config_at, open_session, open_session_at, scaffold, scaffold_at, templates,
    validate, validate_at,
};
pub use app::{BuildContextSession, LoadReport};
pub use domain::{
    AppConfig, AppError, BuildContext, CleanupOutcome, CleanupPolicy, CleanupReport,
    DockerfileCheck, TemplateName,
};
