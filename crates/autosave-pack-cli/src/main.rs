//! autosave-pack CLI - packaging tool for the You Are Autosave extension
//!
//! Commands:
//! - `autosave-pack info` - Print the extension name and version
//! - `autosave-pack version` - Print the extension version
//! - `autosave-pack validate` - Ask Blender to validate the extension
//! - `autosave-pack build` - Ask Blender to build the distributable archive
//! - `autosave-pack validate-and-build` - Validate, then build (the default)
//!
//! All commands read `blender_manifest.toml` from the current directory.

use clap::{Parser, Subcommand};

mod build;
mod info;
mod validate;
mod version;

#[derive(Parser)]
#[command(name = "autosave-pack")]
#[command(author, version, about = "Packaging tool for the You Are Autosave extension", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the extension name and version from the manifest
    Info,

    /// Print the extension version from the manifest
    Version,

    /// Validate the extension in the current directory with Blender
    Validate,

    /// Build the distributable archive with Blender
    Build,

    /// Validate, then build; build is skipped when validation fails
    ValidateAndBuild,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // No subcommand means the full release pipeline.
    match cli.command.unwrap_or(Commands::ValidateAndBuild) {
        Commands::Info => info::run()?,
        Commands::Version => version::run()?,
        Commands::Validate => validate::run()?,
        Commands::Build => build::run()?,
        Commands::ValidateAndBuild => {
            validate::run()?;
            build::run()?;
        }
    }

    Ok(())
}
