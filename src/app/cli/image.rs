//! Image subcommands.

use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ImageCommands {
    /// Build an image from the context directory
    #[clap(visible_alias = "b")]
    Build {
        /// Image tag (e.g. myimage:latest)
        #[arg(short, long)]
        tag: String,
        /// Dockerfile inside the context directory
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Pull an image from a registry
    Pull { image: String },
    /// List local images
    #[clap(visible_alias = "ls")]
    List,
    /// Search local images, or Docker Hub with --hub
    Search {
        term: String,
        #[arg(long)]
        hub: bool,
    },
}

pub fn run_image(command: ImageCommands) -> Result<(), AppError> {
    match command {
        ImageCommands::Build { tag, file } => {
            let outcome = api::image_build(&tag, file.as_deref())?;
            println!(
                "✅ Built image '{}' from {}",
                outcome.tag,
                outcome.dockerfile.display()
            );
        }
        ImageCommands::Pull { image } => {
            api::image_pull(&image)?;
            println!("✅ Pulled image '{}'", image.trim());
        }
        ImageCommands::List => {
            let images = api::image_list()?;
            if images.is_empty() {
                println!("No images found.");
            }
            for image in images {
                println!("{}: {}", image.short_id(), image.reference());
            }
        }
        ImageCommands::Search { term, hub: false } => {
            let images = api::image_search_local(&term)?;
            if images.is_empty() {
                println!("ℹ️  No local images match '{}'", term.trim());
            }
            for image in images {
                println!("{}: {} ({})", image.short_id(), image.reference(), image.size);
            }
        }
        ImageCommands::Search { term, hub: true } => {
            let results = api::image_search_hub(&term)?;
            if results.is_empty() {
                println!("ℹ️  No Docker Hub images match '{}'", term.trim());
            }
            for result in results {
                let official = if result.is_official.is_empty() { "" } else { " [official]" };
                println!("{}{} ★{}", result.name, official, result.star_count);
                if !result.description.is_empty() {
                    println!("    {}", result.description);
                }
            }
        }
    }
    Ok(())
}
