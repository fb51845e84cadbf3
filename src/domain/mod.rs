pub mod build_context;
pub mod cleanup;
pub mod config;
pub mod dockerfile;
pub mod error;
pub mod identifiers;
pub mod runtime;
pub mod template;
pub mod toolchain;

pub use build_context::BuildContext;
pub use cleanup::{CleanupOutcome, CleanupReport};
pub use config::{AppConfig, CONFIG_FILE, CleanupPolicy};
pub use dockerfile::{DOCKERFILE_NAME, DockerfileCheck, check_dockerfile};
pub use error::AppError;
pub use identifiers::ContextFileName;
pub use runtime::{ContainerSummary, HubSearchResult, ImageSummary};
pub use template::{Template, TemplateName, TemplateSelection};
pub use toolchain::{BootSpec, ToolInvocation, Toolchain};
