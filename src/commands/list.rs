//! List command - prints the module catalog.

use anyhow::Result;

use crate::module::definitions::MODULES;
use crate::module::registrar::group_target;

/// Execute the list command.
pub fn cmd_list() -> Result<()> {
    println!("Module catalog ({} modules):", MODULES.len());
    for module in MODULES {
        println!(
            "  {:<10} {:<14} {} ops -> {}",
            module.name,
            module.label,
            module.ops.len(),
            group_target(module.name)
        );
    }
    Ok(())
}
