use std::path::PathBuf;

use super::{Constraint, Evr};

/// One RPM archive of the repository, as held in the index.
///
/// `constraints` keeps the declaration order of the archive's requirements;
/// the tree walker recurses in exactly that order.
#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub version: Evr,
    /// Path of the backing archive file.
    pub path: PathBuf,
    pub constraints: Vec<Constraint>,
}

impl Package {
    pub fn new(name: impl Into<String>, version: Evr, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            version,
            path,
            constraints: Vec::new(),
        }
    }
}
