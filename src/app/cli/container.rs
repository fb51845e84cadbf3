//! Container subcommands.

use clap::Subcommand;

use crate::app::api;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ContainerCommands {
    /// Start a detached container from an image
    Start {
        image: String,
        /// Container name
        #[arg(short, long)]
        name: String,
    },
    /// Stop a running container
    Stop { name: String },
    /// List running containers
    #[clap(visible_alias = "ls")]
    List {
        /// Include stopped containers
        #[arg(short, long)]
        all: bool,
    },
    /// Search containers by name or ID
    Search { query: String },
}

pub fn run_container(command: ContainerCommands) -> Result<(), AppError> {
    match command {
        ContainerCommands::Start { image, name } => {
            let id = api::container_start(&image, &name)?;
            println!("✅ Started container '{}' ({})", name.trim(), short(&id));
        }
        ContainerCommands::Stop { name } => {
            api::container_stop(&name)?;
            println!("✅ Stopped container '{}'", name.trim());
        }
        ContainerCommands::List { all } => {
            let containers = api::container_list(all)?;
            if containers.is_empty() {
                println!(
                    "{}",
                    if all { "No containers found." } else { "No running containers found." }
                );
            }
            for container in containers {
                println!("{}: {}", container.short_id(), container.names);
            }
        }
        ContainerCommands::Search { query } => {
            let containers = api::container_search(&query)?;
            if containers.is_empty() {
                println!("ℹ️  No containers match '{}'", query.trim());
            }
            for container in containers {
                println!(
                    "{}: {} [{}] {}",
                    container.short_id(),
                    container.names,
                    container.image,
                    container.status
                );
            }
        }
    }
    Ok(())
}

fn short(id: &str) -> &str {
    id.get(..12).unwrap_or(id)
}
