//! CLI Adapter.

mod container;
mod edit;
mod image;
mod vm;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "dockctx")]
#[command(version)]
#[command(
    about = "Author Docker build contexts from templates and drive docker/qemu",
    long_about = None
)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open an interactive build-context session
    #[clap(visible_alias = "e")]
    Edit {
        /// Template to start from
        #[arg(short, long)]
        template: Option<String>,
    },
    /// Write a template's Dockerfile and files into the context directory
    #[clap(visible_alias = "n")]
    New {
        /// Template name or slug (e.g. python-app)
        #[arg(short, long)]
        template: String,
    },
    /// List available templates
    #[clap(visible_alias = "t")]
    Templates,
    /// Check that a Dockerfile has the required instructions
    #[clap(visible_alias = "v")]
    Validate {
        /// Dockerfile to check (defaults to the context directory's Dockerfile)
        path: Option<PathBuf>,
    },
    /// Build, pull, list and search images
    #[clap(visible_alias = "img")]
    Image {
        #[command(subcommand)]
        command: image::ImageCommands,
    },
    /// Start, stop, list and search containers
    #[clap(visible_alias = "c")]
    Container {
        #[command(subcommand)]
        command: container::ContainerCommands,
    },
    /// Create and boot QEMU virtual machines
    Vm {
        #[command(subcommand)]
        command: vm::VmCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Edit { template } => edit::run_edit(template),
        Commands::New { template } => run_new(&template),
        Commands::Templates => {
            run_templates();
            Ok(())
        }
        Commands::Validate { path } => run_validate(path),
        Commands::Image { command } => image::run_image(command),
        Commands::Container { command } => container::run_container(command),
        Commands::Vm { command } => vm::run_vm(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_new(template: &str) -> Result<(), AppError> {
    let written = crate::app::api::scaffold(template)?;
    println!("✅ Created build context from template '{}'", template);
    for path in &written {
        println!("  • {}", path.display());
    }
    Ok(())
}

fn run_templates() {
    println!("Available templates:");
    for name in crate::app::api::templates() {
        println!("  {} - {}", name.slug(), name.display_name());
    }
}

fn run_validate(path: Option<PathBuf>) -> Result<(), AppError> {
    let path = crate::app::api::validate(path.as_deref())?;
    println!("✅ {} is a valid Dockerfile", path.display());
    Ok(())
}
