//! Picobuild - module configuration pass for the pico SDK framework.
//!
//! Registers each framework module's include paths, defines, and source
//! directories with a shared build environment, the way the framework's
//! per-module build callbacks do during its configuration phase.

use anyhow::Result;
use clap::{Parser, Subcommand};

use picobuild::commands;
use picobuild::config::Config;

#[derive(Parser)]
#[command(name = "picobuild")]
#[command(about = "Module configuration pass for the pico SDK framework")]
#[command(
    after_help = "QUICK START:\n  picobuild list        Show the module catalog\n  picobuild configure   Run the configuration pass\n  picobuild show groups Inspect registered source groups"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the module configuration pass
    Configure,

    /// List the module catalog
    List,

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// Show the include search path after a configuration pass
    Cpppath {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show registered source groups after a configuration pass
    Groups {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = std::env::current_dir()?;

    // Load .env if present
    dotenvy::dotenv().ok();
    let config = Config::load(&base_dir);

    match cli.command {
        Commands::Configure => {
            commands::cmd_configure(&config)?;
        }

        Commands::List => {
            commands::cmd_list()?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Cpppath { json } => commands::show::ShowTarget::Cpppath { json },
                ShowTarget::Groups { json } => commands::show::ShowTarget::Groups { json },
            };
            commands::cmd_show(&config, show_target)?;
        }
    }

    Ok(())
}
