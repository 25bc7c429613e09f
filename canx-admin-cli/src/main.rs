//! canx-admin CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use canx_admin_cli_lib::commands::{InstallCommand, MakeAdminCommand, MakeDashboardCommand};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "canx-admin")]
#[command(version)]
#[command(about = "CanxJS admin panel generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate admin CRUD for a model with optional fields
    #[command(name = "make:admin")]
    MakeAdmin {
        /// Model name (`PascalCase`, e.g., `User`)
        model: String,
        /// Field definitions (format: `name:type`, e.g. `title:string is_active:boolean`)
        #[arg(value_name = "NAME:TYPE")]
        fields: Vec<String>,
    },
    /// Generate the admin dashboard view
    #[command(name = "make:dashboard")]
    MakeDashboard,
    /// Install auth scaffolding (login, register, dashboard) into your project
    Install,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::MakeAdmin { model, fields } => {
            let cmd = MakeAdminCommand::new(model, fields)?;
            cmd.execute()?;
        }
        Commands::MakeDashboard => {
            MakeDashboardCommand::execute()?;
        }
        Commands::Install => {
            InstallCommand::execute()?;
        }
    }

    Ok(())
}
