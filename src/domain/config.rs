//! `dockctx.toml` schema.

use std::path::PathBuf;

use serde::Deserialize;

use super::AppError;

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "dockctx.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub vm: VmConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextConfig {
    /// Working directory for persisted artifacts, relative to the config directory.
    #[serde(default = "default_context_dir")]
    pub dir: PathBuf,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self { dir: default_context_dir() }
    }
}

fn default_context_dir() -> PathBuf {
    PathBuf::from(".")
}

/// What to do with persisted files when an editing session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanupPolicy {
    #[default]
    Ask,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default)]
    pub cleanup_on_exit: CleanupPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    #[serde(default = "default_docker")]
    pub docker: String,
    #[serde(default = "default_qemu_img")]
    pub qemu_img: String,
    #[serde(default = "default_qemu_system")]
    pub qemu_system: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            docker: default_docker(),
            qemu_img: default_qemu_img(),
            qemu_system: default_qemu_system(),
        }
    }
}

fn default_docker() -> String {
    "docker".to_string()
}

fn default_qemu_img() -> String {
    "qemu-img".to_string()
}

fn default_qemu_system() -> String {
    "qemu-system-x86_64".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VmConfig {
    /// Pass `-enable-kvm -cpu host`.
    #[serde(default = "default_true")]
    pub accelerate: bool,
    #[serde(default = "default_vga")]
    pub vga: String,
    #[serde(default = "default_display")]
    pub display: String,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self { accelerate: true, vga: default_vga(), display: default_display() }
    }
}

fn default_true() -> bool {
    true
}

fn default_vga() -> String {
    "virtio".to_string()
}

fn default_display() -> String {
    "sdl,gl=on".to_string()
}

/// Parse `dockctx.toml` content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    if config.tools.docker.trim().is_empty()
        || config.tools.qemu_img.trim().is_empty()
        || config.tools.qemu_system.trim().is_empty()
    {
        return Err(AppError::config_error("[tools] program names must not be empty"));
    }
    Ok(config)
}
