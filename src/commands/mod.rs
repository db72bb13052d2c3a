//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `configure` - Run the module configuration pass
//! - `list` - List the module catalog
//! - `show` - Display information

pub mod configure;
pub mod list;
pub mod show;

pub use configure::cmd_configure;
pub use list::cmd_list;
pub use show::cmd_show;
