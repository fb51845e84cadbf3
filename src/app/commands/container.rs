//! Container start, stop, list and search.

use crate::app::AppContext;
use crate::domain::runtime::parse_json_lines;
use crate::domain::{AppError, ContainerSummary};
use crate::ports::{ContextFilesystem, ToolRunner};

const NO_SUCH_CONTAINER: &str = "No such container";

/// Start `image` detached as `name`. Returns the new container ID.
pub fn start<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
    image: &str,
    name: &str,
) -> Result<String, AppError> {
    let invocation = ctx.toolchain().docker_run(image, name)?;
    tracing::info!(command = %invocation, "starting container");
    let output = ctx.runner().run(&invocation)?;
    Ok(output.stdout.trim().to_string())
}

pub fn stop<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
    name: &str,
) -> Result<(), AppError> {
    let invocation = ctx.toolchain().docker_stop(name)?;
    tracing::info!(command = %invocation, "stopping container");
    match ctx.runner().run(&invocation) {
        Ok(_) => Ok(()),
        Err(AppError::ToolFailed { details, .. }) if details.contains(NO_SUCH_CONTAINER) => {
            Err(AppError::ContainerNotFound(name.trim().to_string()))
        }
        Err(err) => Err(err),
    }
}

pub fn list<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
    all: bool,
) -> Result<Vec<ContainerSummary>, AppError> {
    let output = ctx.runner().run(&ctx.toolchain().docker_ps(all))?;
    parse_json_lines("docker ps", &output.stdout)
}

/// Containers, running or not, whose name or ID contains `query`.
pub fn search<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
    query: &str,
) -> Result<Vec<ContainerSummary>, AppError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::Validation("Search query must not be empty".into()));
    }
    Ok(list(ctx, true)?.into_iter().filter(|c| c.matches(query)).collect())
}
