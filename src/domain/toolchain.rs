//! Argument-vector builders for the container runtime and VM toolchain.
//!
//! Nothing here runs a process. Every invocation is a program plus a list of
//! arguments; no shell is involved, so user input is never interpolated into
//! a command line.

use std::fmt;
use std::path::{Path, PathBuf};

use super::AppError;
use super::config::{ToolsConfig, VmConfig};
use super::identifiers::validation::validate_tool_argument;

/// Go template that makes docker emit one JSON object per line.
pub const JSON_LINES_FORMAT: &str = "{{json .}}";

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Parameters for booting a VM image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSpec {
    pub ram_mb: u32,
    pub cores: u32,
    pub image: PathBuf,
    pub iso: Option<PathBuf>,
}

/// Builds invocations from configured program names.
#[derive(Debug, Clone, Default)]
pub struct Toolchain {
    tools: ToolsConfig,
    vm: VmConfig,
}

impl Toolchain {
    pub fn new(tools: ToolsConfig, vm: VmConfig) -> Self {
        Self { tools, vm }
    }

    fn docker(&self) -> ToolInvocation {
        ToolInvocation::new(&self.tools.docker)
    }

    pub fn docker_build(
        &self,
        tag: &str,
        dockerfile: &Path,
        context_dir: &Path,
    ) -> Result<ToolInvocation, AppError> {
        let tag = checked("image tag", tag)?;
        Ok(self
            .docker()
            .args(["build", "-t", tag, "-f"])
            .arg(path_arg(dockerfile))
            .arg(path_arg(context_dir)))
    }

    pub fn docker_pull(&self, image: &str) -> Result<ToolInvocation, AppError> {
        let image = checked("image name", image)?;
        Ok(self.docker().args(["pull", image]))
    }

    pub fn docker_search(&self, term: &str) -> Result<ToolInvocation, AppError> {
        let term = checked("search term", term)?;
        Ok(self.docker().args(["search", "--format", JSON_LINES_FORMAT, term]))
    }

    pub fn docker_images(&self) -> ToolInvocation {
        self.docker().args(["images", "--format", JSON_LINES_FORMAT])
    }

    pub fn docker_ps(&self, all: bool) -> ToolInvocation {
        let mut invocation = self.docker().arg("ps");
        if all {
            invocation = invocation.arg("-a");
        }
        invocation.args(["--format", JSON_LINES_FORMAT])
    }

    pub fn docker_run(&self, image: &str, name: &str) -> Result<ToolInvocation, AppError> {
        let image = checked("image name", image)?;
        let name = checked("container name", name)?;
        Ok(self.docker().args(["run", "-d", "--name", name, image]))
    }

    pub fn docker_stop(&self, name: &str) -> Result<ToolInvocation, AppError> {
        let name = checked("container name", name)?;
        Ok(self.docker().args(["stop", name]))
    }

    pub fn qemu_img_create(&self, image: &Path, size_mb: u32) -> Result<ToolInvocation, AppError> {
        if size_mb == 0 {
            return Err(AppError::Validation("Image size must be greater than 0 MB".into()));
        }
        Ok(ToolInvocation::new(&self.tools.qemu_img)
            .args(["create", "-f", "qcow2"])
            .arg(path_arg(image))
            .arg(format!("{size_mb}M")))
    }

    pub fn qemu_boot(&self, spec: &BootSpec) -> Result<ToolInvocation, AppError> {
        if spec.ram_mb == 0 {
            return Err(AppError::Validation("RAM must be greater than 0 MB".into()));
        }
        if spec.cores == 0 {
            return Err(AppError::Validation("Core count must be greater than 0".into()));
        }

        let mut invocation = ToolInvocation::new(&self.tools.qemu_system)
            .args(["-m".to_string(), spec.ram_mb.to_string(), "-boot".into(), "d".into()]);
        if self.vm.accelerate {
            invocation = invocation.arg("-enable-kvm");
        }
        invocation = invocation
            .args(["-smp".to_string(), spec.cores.to_string(), "-hda".into()])
            .arg(path_arg(&spec.image));
        if self.vm.accelerate {
            invocation = invocation.args(["-cpu", "host"]);
        }
        invocation = invocation.args([
            "-vga",
            self.vm.vga.as_str(),
            "-display",
            self.vm.display.as_str(),
        ]);
        if let Some(iso) = &spec.iso {
            invocation = invocation.arg("-cdrom").arg(path_arg(iso));
        }
        Ok(invocation)
    }
}

fn checked<'a>(what: &str, value: &'a str) -> Result<&'a str, AppError> {
    let value = value.trim();
    if validate_tool_argument(value) {
        Ok(value)
    } else {
        Err(AppError::Validation(format!(
            "Invalid {what} '{value}': must be non-empty, contain no whitespace and not start with '-'"
        )))
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
