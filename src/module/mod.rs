//! Declarative module catalog for the configuration pass.
//!
//! Modules are static data describing WHAT each one contributes to the
//! shared build environment; the registrar interprets the definitions.
//!
//! ```text
//! Module Definition (DATA)        →     Registrar (LOGIC)
//! ─────────────────────────────        ─────────────────
//! AT_TOK = Module {                    for op in module.ops {
//!   ops: [                               apply(env, op)?;
//!     include(Sdk, ["lib","at_tok"]),  }
//!     sources(Sdk, ["lib","at_tok"]),
//!   ]
//! }
//! ```

pub mod definitions;
pub mod registrar;

pub use registrar::{register, register_all};

/// Where a module's path segments are rooted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// Under `<framework_dir>/<sdk>`.
    Sdk,
    /// Directly under `<framework_dir>`.
    Framework,
}

/// One module of the framework, as registered during the configuration pass.
#[derive(Debug, Clone)]
pub struct Module {
    /// Output-group name, used under `$BUILD_DIR/modules/`.
    pub name: &'static str,
    /// Console label printed when the module registers.
    pub label: &'static str,
    /// Contributions, applied in order.
    pub ops: &'static [Op],
}

/// A single contribution to the build environment.
///
/// All operations are additive; nothing a module registers is ever removed
/// or reordered by a later module.
#[derive(Debug, Clone)]
pub enum Op {
    /// Append a directory to the include search path.
    Include(Base, &'static [&'static str]),
    /// Append a compiler define.
    Define(&'static str),
    /// Register the sources under a directory into the module's output group.
    Sources(Base, &'static [&'static str]),
}

/// Append an include directory.
pub const fn include(base: Base, segments: &'static [&'static str]) -> Op {
    Op::Include(base, segments)
}

/// Append a compiler define.
pub const fn define(name: &'static str) -> Op {
    Op::Define(name)
}

/// Register a source directory into the module's output group.
pub const fn sources(base: Base, segments: &'static [&'static str]) -> Op {
    Op::Sources(base, segments)
}
