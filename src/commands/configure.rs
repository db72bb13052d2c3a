//! Configure command - runs the module configuration pass.

use anyhow::Result;

use crate::config::Config;
use crate::env::BuildEnv;
use crate::module::register_all;

/// Execute the configure command.
///
/// Builds a fresh environment, registers every cataloged module against it,
/// and prints a summary of the accumulated configuration.
pub fn cmd_configure(config: &Config) -> Result<()> {
    println!("Configuring modules...");

    let mut env = BuildEnv::new(&config.framework_dir, &config.sdk);
    register_all(&mut env)?;

    println!();
    println!("Configuration pass complete:");
    println!("  {} include paths", env.cpp_path.len());
    println!("  {} defines", env.cpp_defines.len());
    println!("  {} source groups", env.source_groups.len());
    Ok(())
}
