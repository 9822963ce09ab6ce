//! Query abstraction over the rpm tool.
//!
//! The core never inspects archive contents or compares version strings
//! itself; both are delegated to rpm through this trait, enabling
//! dependency injection and testability. [`RpmCli`] is the real adapter.

mod cli;

use anyhow::Result;
use std::path::Path;

pub use cli::RpmCli;

use crate::package::{Evr, Operator};

/// Metadata extracted from one archive.
#[derive(Debug, Clone)]
pub struct RpmMetadata {
    pub name: String,
    pub version: Evr,
    /// Raw requirement lines, one per declared dependency.
    pub requires: Vec<String>,
}

#[cfg_attr(test, mockall::automock)]
pub trait RpmQuery {
    /// One-shot probe for the rpm tool. Called once before any work.
    fn available(&self) -> bool;

    /// Extract name, version identifier and raw requirements from an
    /// archive. A failed query is fatal for the whole run.
    fn metadata(&self, path: &Path) -> Result<RpmMetadata>;

    /// Whether `installed` stands in relation `operator` to `desired`,
    /// under rpm's native version ordering.
    fn satisfies(&self, installed: &str, desired: &str, operator: Operator) -> Result<bool>;
}
