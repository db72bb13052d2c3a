//! Module registrar - applies module definitions to the build environment.
//!
//! The registrar is the single place where module contributions are
//! interpreted. It prints the module label first, then applies each op in
//! definition order. The first failing op aborts the module's registration
//! and the error propagates to the caller; the registrar itself performs no
//! validation, retry, or recovery. In particular it does not check that the
//! registered directories exist - a missing directory surfaces downstream,
//! when the framework walks the group.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::env::{Environment, BUILD_DIR_VAR};

use super::definitions::MODULES;
use super::{Base, Module, Op};

/// Register one module with the build environment.
pub fn register(env: &mut dyn Environment, module: &Module) -> Result<()> {
    env.status(&format!("  {}", module.label));

    for op in module.ops {
        apply(env, module, op)
            .with_context(|| format!("in module '{}': {:?}", module.name, op))?;
    }

    Ok(())
}

/// Run the whole configuration pass: every cataloged module, in order.
pub fn register_all(env: &mut dyn Environment) -> Result<()> {
    for module in MODULES {
        register(env, module)?;
    }
    Ok(())
}

/// Output-group target for a module, rooted at the build-dir placeholder.
pub fn group_target(name: &str) -> String {
    format!("{}/modules/{}", BUILD_DIR_VAR, name)
}

fn apply(env: &mut dyn Environment, module: &Module, op: &Op) -> Result<()> {
    match op {
        Op::Include(base, segments) => {
            let dir = resolve(&*env, *base, segments);
            env.append_cpp_path(dir)?;
        }
        Op::Define(name) => {
            env.append_cpp_define((*name).to_string())?;
        }
        Op::Sources(base, segments) => {
            let dir = resolve(&*env, *base, segments);
            env.build_sources(group_target(module.name), dir)?;
        }
    }
    Ok(())
}

/// Join a module's path segments onto its base directory.
fn resolve(env: &dyn Environment, base: Base, segments: &[&str]) -> PathBuf {
    let mut dir = match base {
        Base::Sdk => env.framework_dir().join(env.sdk()),
        Base::Framework => env.framework_dir().to_path_buf(),
    };
    for segment in segments {
        dir.push(segment);
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::BuildEnv;
    use std::path::Path;

    #[test]
    fn group_target_is_rooted_at_build_dir() {
        assert_eq!(group_target("at_tok"), "$BUILD_DIR/modules/at_tok");
    }

    #[test]
    fn resolve_sdk_base_includes_sdk_segment() {
        let env = BuildEnv::new(Path::new("/proj/sdk"), "sdk");
        let dir = resolve(&env, Base::Sdk, &["lib", "at_tok"]);
        assert_eq!(dir, PathBuf::from("/proj/sdk/sdk/lib/at_tok"));
    }

    #[test]
    fn resolve_framework_base_skips_sdk_segment() {
        let env = BuildEnv::new(Path::new("/proj/sdk"), "sdk");
        let dir = resolve(&env, Base::Framework, &["library", "dap"]);
        assert_eq!(dir, PathBuf::from("/proj/sdk/library/dap"));
    }
}
