//! Configuration management for picobuild.
//!
//! Reads configuration from .env file and environment variables.
//! Environment variables take precedence over .env file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default SDK sub-directory name under the framework root.
pub const DEFAULT_SDK: &str = "sdk";

/// Picobuild configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the framework checkout (default: <base>/framework)
    pub framework_dir: PathBuf,
    /// SDK sub-directory name under the framework root (default: "sdk")
    pub sdk: String,
}

impl Config {
    /// Load configuration from .env file and environment.
    ///
    /// Relative FRAMEWORK_DIR values are resolved against `base_dir`.
    pub fn load(base_dir: &Path) -> Self {
        let mut env_vars = HashMap::new();

        // Try to load .env file
        let env_path = base_dir.join(".env");
        if env_path.exists() {
            if let Ok(content) = fs::read_to_string(&env_path) {
                for line in content.lines() {
                    let line = line.trim();
                    // Skip comments and empty lines
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    // Parse KEY=value
                    if let Some((key, value)) = line.split_once('=') {
                        let key = key.trim();
                        let value = value.trim();
                        // Remove quotes if present
                        let value = value.trim_matches('"').trim_matches('\'');
                        env_vars.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }

        // Environment variables override .env file
        for (key, value) in std::env::vars() {
            env_vars.insert(key, value);
        }

        let framework_dir = env_vars
            .get("FRAMEWORK_DIR")
            .map(|s| {
                let path = PathBuf::from(s);
                if path.is_absolute() {
                    path
                } else {
                    base_dir.join(path)
                }
            })
            .unwrap_or_else(|| base_dir.join("framework"));

        let sdk = env_vars
            .get("SDK")
            .cloned()
            .unwrap_or_else(|| DEFAULT_SDK.to_string());

        Self { framework_dir, sdk }
    }

    /// Check if the SDK directory is present under the framework root.
    pub fn has_sdk(&self) -> bool {
        self.framework_dir.join(&self.sdk).is_dir()
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  FRAMEWORK_DIR: {}", self.framework_dir.display());
        println!("  SDK: {}", self.sdk);
        if self.has_sdk() {
            println!("  SDK directory: FOUND");
        } else {
            println!("  SDK directory: NOT FOUND (set FRAMEWORK_DIR to a framework checkout)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn env_file_values_are_parsed_and_resolved() {
        let base = tempfile::tempdir().unwrap();
        fs::write(
            base.path().join(".env"),
            "# framework location\nFRAMEWORK_DIR=fw\nSDK=\"pico-sdk\"\n",
        )
        .unwrap();

        let config = Config::load(base.path());
        assert_eq!(config.framework_dir, base.path().join("fw"));
        assert_eq!(config.sdk, "pico-sdk");
    }

    #[test]
    fn defaults_apply_without_env_file() {
        let base = tempfile::tempdir().unwrap();
        let config = Config::load(base.path());
        assert_eq!(config.framework_dir, base.path().join("framework"));
        assert_eq!(config.sdk, DEFAULT_SDK);
    }
}
