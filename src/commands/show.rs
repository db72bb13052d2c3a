//! Show command - displays information.

use anyhow::Result;

use crate::config::Config;
use crate::env::BuildEnv;
use crate::module::register_all;
use crate::sources;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// Show the include search path after a configuration pass
    Cpppath { json: bool },
    /// Show the registered source groups after a configuration pass
    Groups { json: bool },
}

/// Execute the show command.
pub fn cmd_show(config: &Config, target: ShowTarget) -> Result<()> {
    match target {
        ShowTarget::Config => {
            config.print();
        }
        ShowTarget::Cpppath { json } => {
            let env = configured(config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&env.cpp_path)?);
            } else {
                println!("Include search path ({} entries):", env.cpp_path.len());
                for dir in &env.cpp_path {
                    println!("  {}", dir.display());
                }
            }
        }
        ShowTarget::Groups { json } => {
            let env = configured(config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&env.source_groups)?);
            } else {
                println!("Source groups ({} registered):", env.source_groups.len());
                for group in &env.source_groups {
                    if group.dir.is_dir() {
                        let units = sources::collect_units(&group.dir)?;
                        println!(
                            "  {} <- {} ({} units)",
                            group.target,
                            group.dir.display(),
                            units.len()
                        );
                    } else {
                        println!(
                            "  {} <- {} (not found)",
                            group.target,
                            group.dir.display()
                        );
                    }
                }
            }
        }
    }
    Ok(())
}

/// Run a configuration pass and return the resulting environment.
fn configured(config: &Config) -> Result<BuildEnv> {
    let mut env = BuildEnv::new(&config.framework_dir, &config.sdk);
    register_all(&mut env)?;
    Ok(env)
}
