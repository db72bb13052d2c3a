//! Shared build environment mutated by module registrars.
//!
//! One `BuildEnv` exists per configuration pass, owned by the orchestrator
//! and handed to each registrar by mutable reference. Registrars only add:
//! include paths, defines, and source-group registrations accumulate in
//! definition order and are never removed or reordered.

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Build-output root placeholder. Output-group targets are rooted here and
/// expanded by the framework after the configuration pass, never by
/// registrars.
pub const BUILD_DIR_VAR: &str = "$BUILD_DIR";

/// The environment surface a registrar is allowed to touch.
///
/// `BuildEnv` is the real implementation. Tests substitute doubles to
/// observe call ordering and to inject append failures.
pub trait Environment {
    /// Root of the framework checkout.
    fn framework_dir(&self) -> &Path;

    /// Name of the SDK sub-directory under the framework root.
    fn sdk(&self) -> &str;

    /// Emit a status line to the console sink.
    fn status(&mut self, line: &str);

    /// Append one directory to the include search path.
    fn append_cpp_path(&mut self, dir: PathBuf) -> Result<()>;

    /// Append one compiler define.
    fn append_cpp_define(&mut self, define: String) -> Result<()>;

    /// Register the sources under `dir` into the named output group.
    ///
    /// Discovery and compilation of the units happen downstream of this
    /// seam; registration only records the pair.
    fn build_sources(&mut self, target: String, dir: PathBuf) -> Result<()>;
}

/// One registered output group: sources under `dir` compile into `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceGroup {
    /// Output identifier, e.g. `$BUILD_DIR/modules/at_tok`.
    pub target: String,
    /// Directory the group's sources live in.
    pub dir: PathBuf,
}

/// Framework-owned build configuration for one build run.
#[derive(Debug, Clone, Serialize)]
pub struct BuildEnv {
    /// Root of the framework checkout.
    pub framework_dir: PathBuf,
    /// SDK sub-directory name under the framework root.
    pub sdk: String,
    /// Include search path, in registration order.
    pub cpp_path: Vec<PathBuf>,
    /// Compiler defines, in registration order.
    pub cpp_defines: Vec<String>,
    /// Registered output groups, in registration order.
    pub source_groups: Vec<SourceGroup>,
}

impl BuildEnv {
    /// Create an empty environment for the given framework checkout.
    pub fn new(framework_dir: &Path, sdk: &str) -> Self {
        Self {
            framework_dir: framework_dir.to_path_buf(),
            sdk: sdk.to_string(),
            cpp_path: Vec::new(),
            cpp_defines: Vec::new(),
            source_groups: Vec::new(),
        }
    }
}

impl Environment for BuildEnv {
    fn framework_dir(&self) -> &Path {
        &self.framework_dir
    }

    fn sdk(&self) -> &str {
        &self.sdk
    }

    fn status(&mut self, line: &str) {
        println!("{}", line);
    }

    fn append_cpp_path(&mut self, dir: PathBuf) -> Result<()> {
        self.cpp_path.push(dir);
        Ok(())
    }

    fn append_cpp_define(&mut self, define: String) -> Result<()> {
        self.cpp_defines.push(define);
        Ok(())
    }

    fn build_sources(&mut self, target: String, dir: PathBuf) -> Result<()> {
        self.source_groups.push(SourceGroup { target, dir });
        Ok(())
    }
}
