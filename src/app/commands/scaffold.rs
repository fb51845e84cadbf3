//! Non-interactive template scaffolding.

use std::path::PathBuf;

use crate::app::session::BuildContextSession;
use crate::domain::{AppError, TemplateSelection};
use crate::ports::{ContextFilesystem, TemplateCatalog};

/// Select `template` and write its Dockerfile and auxiliary files.
pub fn execute<F: ContextFilesystem, T: TemplateCatalog>(
    session: &mut BuildContextSession<F, T>,
    template: &str,
) -> Result<Vec<PathBuf>, AppError> {
    if TemplateSelection::parse(template)? == TemplateSelection::LoadExisting {
        return Err(AppError::Validation(
            "Scaffolding needs a concrete template, not 'Load Existing Dockerfile'".into(),
        ));
    }
    session.select_template(template)?;
    session.save_all()
}
