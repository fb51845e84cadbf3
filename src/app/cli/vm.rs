//! VM subcommands.

use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api;
use crate::domain::{AppError, BootSpec};

#[derive(Subcommand)]
pub enum VmCommands {
    /// Create a qcow2 disk image
    Create {
        /// Image name; the file is <dir>/<name>.img
        name: String,
        /// Size in megabytes
        #[arg(short, long)]
        size: u32,
        /// Target directory (defaults to the context directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Boot a disk image, optionally from an installer ISO
    Boot {
        /// Memory in megabytes
        #[arg(long)]
        ram: u32,
        #[arg(long)]
        cores: u32,
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        iso: Option<PathBuf>,
    },
}

pub fn run_vm(command: VmCommands) -> Result<(), AppError> {
    match command {
        VmCommands::Create { name, size, dir } => {
            let path = api::vm_create(&name, size, dir.as_deref())?;
            println!("✅ Created VM image {} ({} MB)", path.display(), size);
        }
        VmCommands::Boot { ram, cores, image, iso } => {
            api::vm_boot(&BootSpec { ram_mb: ram, cores, image, iso })?;
            println!("ℹ️  VM exited");
        }
    }
    Ok(())
}
