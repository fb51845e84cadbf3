//! VM disk image creation and boot.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, BootSpec, ContextFileName};
use crate::ports::{ContextFilesystem, ToolRunner};

/// Create `<dir>/<name>.img` as a qcow2 image of `size_mb` megabytes.
pub fn create<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
    dir: &Path,
    name: &str,
    size_mb: u32,
) -> Result<PathBuf, AppError> {
    let name = ContextFileName::new(name.trim())?;
    let image = dir.join(format!("{name}.img"));
    let invocation = ctx.toolchain().qemu_img_create(&image, size_mb)?;

    ctx.filesystem().ensure_dir(dir)?;
    tracing::info!(command = %invocation, "creating VM image");
    ctx.runner().run(&invocation)?;
    Ok(image)
}

/// Boot a VM attached to the current terminal until it exits.
pub fn boot<F: ContextFilesystem, R: ToolRunner>(
    ctx: &AppContext<F, R>,
    spec: &BootSpec,
) -> Result<(), AppError> {
    if !ctx.filesystem().exists(&spec.image) {
        return Err(missing("VM image", &spec.image));
    }
    if let Some(iso) = &spec.iso
        && !ctx.filesystem().exists(iso)
    {
        return Err(missing("ISO", iso));
    }

    let invocation = ctx.toolchain().qemu_boot(spec)?;
    tracing::info!(command = %invocation, "booting VM");
    ctx.runner().run_attached(&invocation)
}

fn missing(what: &str, path: &Path) -> AppError {
    AppError::Validation(format!("{} {} does not exist", what, path.display()))
}
