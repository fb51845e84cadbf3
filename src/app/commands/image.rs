//! Image build, pull, list and search.

use std::path::{Path, PathBuf};

use crate::adapters::local_filesystem::is_within;
use crate::app::AppContext;
use crate::domain::runtime::parse_json_lines;
use crate::domain::{AppError, HubSearchResult, ImageSummary};
use crate::ports::{ContextFilesystem, ToolRunner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub tag: String,
    pub dockerfile: PathBuf,
    pub context_dir: PathBuf,
}

/// Build `dockerfile` with `context_dir` as the build context.
///
/// The Dockerfile must exist and lie inside the context directory.
pub fn build<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
    tag: &str,
    dockerfile: &Path,
    context_dir: &Path,
) -> Result<BuildOutcome, AppError> {
    if !is_within(dockerfile, context_dir) {
        return Err(AppError::Validation(format!(
            "Dockerfile {} must be inside the build context {}",
            dockerfile.display(),
            context_dir.display()
        )));
    }
    if !ctx.filesystem().exists(dockerfile) {
        return Err(AppError::Validation(format!(
            "Dockerfile {} does not exist",
            dockerfile.display()
        )));
    }

    let invocation = ctx.toolchain().docker_build(tag, dockerfile, context_dir)?;
    tracing::info!(command = %invocation, "building image");
    ctx.runner().run(&invocation)?;

    Ok(BuildOutcome {
        tag: tag.trim().to_string(),
        dockerfile: dockerfile.to_path_buf(),
        context_dir: context_dir.to_path_buf(),
    })
}

pub fn pull<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
    image: &str,
) -> Result<(), AppError> {
    let invocation = ctx.toolchain().docker_pull(image)?;
    tracing::info!(command = %invocation, "pulling image");
    ctx.runner().run(&invocation)?;
    Ok(())
}

pub fn list<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
) -> Result<Vec<ImageSummary>, AppError> {
    let output = ctx.runner().run(&ctx.toolchain().docker_images())?;
    parse_json_lines("docker images", &output.stdout)
}

/// Local images whose reference or ID contains `term`.
pub fn search_local<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
    term: &str,
) -> Result<Vec<ImageSummary>, AppError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(AppError::Validation("Search term must not be empty".into()));
    }
    Ok(list(ctx)?.into_iter().filter(|image| image.matches(term)).collect())
}

pub fn search_hub<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
    term: &str,
) -> Result<Vec<HubSearchResult>, AppError> {
    let output = ctx.runner().run(&ctx.toolchain().docker_search(term)?)?;
    parse_json_lines("docker search", &output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Toolchain;
    use crate::testing::{FakeToolRunner, MemoryFilesystem};

    fn context() -> (MemoryFilesystem, AppContext<MemoryFilesystem, FakeToolRunner>) {
        let fs = MemoryFilesystem::new();
        let ctx = AppContext::new(fs.clone(), FakeToolRunner::new(), Toolchain::default());
        (fs, ctx)
    }

    #[test]
    fn build_runs_docker_with_context() {
        let (fs, ctx) = context();
        fs.add("/work/Dockerfile", "FROM x\nCOPY . .");

        let outcome =
            build(&ctx, "myimage:latest", Path::new("/work/Dockerfile"), Path::new("/work"))
                .unwrap();

        assert_eq!(outcome.tag, "myimage:latest");
        assert_eq!(
            ctx.runner().calls(),
            vec!["docker build -t myimage:latest -f /work/Dockerfile /work"]
        );
    }

    #[test]
    fn build_rejects_dockerfile_outside_context() {
        let (fs, ctx) = context();
        fs.add("/elsewhere/Dockerfile", "FROM x\nCOPY . .");

        let err = build(&ctx, "img", Path::new("/elsewhere/Dockerfile"), Path::new("/work"))
            .unwrap_err();
        assert!(err.to_string().contains("must be inside the build context"));
        assert!(ctx.runner().calls().is_empty());
    }

    #[test]
    fn build_requires_existing_dockerfile() {
        let (_fs, ctx) = context();
        let err =
            build(&ctx, "img", Path::new("/work/Dockerfile"), Path::new("/work")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn search_local_filters_decoded_images() {
        let (_fs, ctx) = context();
        ctx.runner().push_stdout(concat!(
            r#"{"ID":"aaaaaaaaaaaaaaaa","Repository":"ubuntu","Tag":"22.04","Size":"1MB"}"#,
            "\n",
            r#"{"ID":"bbbbbbbbbbbbbbbb","Repository":"alpine","Tag":"3","Size":"1MB"}"#,
        ));

        let found = search_local(&ctx, "ubu").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].reference(), "ubuntu:22.04");
    }

    #[test]
    fn search_hub_decodes_results() {
        let (_fs, ctx) = context();
        ctx.runner().push_stdout(
            r#"{"Name":"nginx","Description":"web server","StarCount":"20000","IsOfficial":"[OK]"}"#,
        );

        let found = search_hub(&ctx, "nginx").unwrap();
        assert_eq!(found[0].name, "nginx");
        assert_eq!(ctx.runner().calls(), vec!["docker search --format {{json .}} nginx"]);
    }

    #[test]
    fn pull_failure_is_propagated() {
        let (_fs, ctx) = context();
        ctx.runner().push_failure("manifest unknown");
        let err = pull(&ctx, "nosuch").unwrap_err();
        assert!(err.to_string().contains("manifest unknown"));
    }
}
