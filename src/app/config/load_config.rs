//! `dockctx.toml` loading from a project directory.

use std::path::Path;

use crate::adapters::local_filesystem::normalize_path;
use crate::domain::config::parse_config_content;
use crate::domain::{AppConfig, AppError, CONFIG_FILE};
use crate::ports::ContextFilesystem;

/// Load `dockctx.toml` from `dir`, falling back to defaults when it is absent.
///
/// `context.dir` is resolved against `dir`.
pub fn load_config<F: ContextFilesystem>(dir: &Path, filesystem: &F) -> Result<AppConfig, AppError> {
    let config_path = dir.join(CONFIG_FILE);
    let mut config = if filesystem.exists(&config_path) {
        let content = filesystem.read_to_string(&config_path)?;
        let config = parse_config_content(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded configuration");
        config
    } else {
        AppConfig::default()
    };

    config.context.dir = normalize_path(&dir.join(&config.context.dir));
    Ok(config)
}
