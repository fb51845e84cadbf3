//! Build-context templates.

use std::collections::BTreeMap;
use std::fmt;

use super::AppError;

/// Built-in template identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateName {
    Custom,
    PythonApp,
    NodeApp,
    JavaApp,
}

impl TemplateName {
    /// All templates in menu order.
    pub const ALL: [TemplateName; 4] = [
        TemplateName::Custom,
        TemplateName::PythonApp,
        TemplateName::NodeApp,
        TemplateName::JavaApp,
    ];

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateName::Custom => "Custom",
            TemplateName::PythonApp => "Python App",
            TemplateName::NodeApp => "Node.js App",
            TemplateName::JavaApp => "Java App",
        }
    }

    /// Directory name under the embedded template assets.
    pub fn slug(&self) -> &'static str {
        match self {
            TemplateName::Custom => "custom",
            TemplateName::PythonApp => "python-app",
            TemplateName::NodeApp => "node-app",
            TemplateName::JavaApp => "java-app",
        }
    }

    /// Parse from a display name or slug, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim();
        Self::ALL.into_iter().find(|template| {
            template.display_name().eq_ignore_ascii_case(needle)
                || template.slug().eq_ignore_ascii_case(needle)
        })
    }

    /// Comma-separated list of accepted names, for error messages.
    pub fn available() -> String {
        Self::ALL.iter().map(|t| t.display_name()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// What the user picked in the template menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSelection {
    Template(TemplateName),
    /// Start from an empty context and load a Dockerfile from disk.
    LoadExisting,
}

impl TemplateSelection {
    pub const LOAD_EXISTING_NAME: &'static str = "Load Existing Dockerfile";

    /// Parse a menu choice; unknown names fail with `UnknownTemplate`.
    pub fn parse(name: &str) -> Result<Self, AppError> {
        if let Some(template) = TemplateName::from_name(name) {
            return Ok(TemplateSelection::Template(template));
        }
        let needle = name.trim();
        if needle.eq_ignore_ascii_case(Self::LOAD_EXISTING_NAME)
            || needle.eq_ignore_ascii_case("load-existing")
        {
            return Ok(TemplateSelection::LoadExisting);
        }
        Err(AppError::UnknownTemplate {
            name: name.to_string(),
            available: format!("{}, {}", TemplateName::available(), Self::LOAD_EXISTING_NAME),
        })
    }
}

/// A named starting point for a Dockerfile and its auxiliary files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: TemplateName,
    pub dockerfile: String,
    pub files: BTreeMap<String, String>,
}
