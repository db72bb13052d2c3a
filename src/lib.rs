//! Picobuild library exports for testing.
//!
//! This module exposes internal components for integration testing.

pub mod commands;
pub mod config;
pub mod env;
pub mod module;
pub mod sources;
