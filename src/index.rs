//! Repository index: name-keyed map of all packages in the directory.

use anyhow::{Result, bail};
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::package::{Constraint, Package};
use crate::query::RpmQuery;

/// Name-keyed package index, built once per run.
///
/// "Index order" everywhere in this crate means the iteration order of
/// this map: lexicographic by package name. After [`RepoIndex::resolve`]
/// runs, every constraint still held by a package refers to a name that
/// is guaranteed present in the index.
#[derive(Debug)]
pub struct RepoIndex {
    packages: BTreeMap<String, Package>,
}

impl RepoIndex {
    /// Build the index by querying each archive for its metadata.
    ///
    /// Two archives reporting the same package name abort the run: a
    /// silently shadowed package would corrupt every later constraint
    /// resolution.
    #[tracing::instrument(skip(query, archives))]
    pub fn build<Q: RpmQuery>(query: &Q, archives: &[PathBuf]) -> Result<Self> {
        let mut packages: BTreeMap<String, Package> = BTreeMap::new();

        for path in archives {
            let metadata = query.metadata(path)?;
            if let Some(existing) = packages.get(&metadata.name) {
                bail!(
                    "duplicate package '{}': {:?} and {:?} both provide it",
                    metadata.name,
                    existing.path,
                    path
                );
            }

            let mut package = Package::new(&metadata.name, metadata.version, path.clone());
            package.constraints = metadata
                .requires
                .iter()
                .map(|raw| Constraint::parse(raw))
                .collect();
            debug!(
                "indexed {} {} with {} requirement(s)",
                package.name,
                package.version,
                package.constraints.len()
            );
            packages.insert(package.name.clone(), package);
        }

        Ok(Self { packages })
    }

    /// Bind every constraint to the archive backing its target, dropping
    /// constraints whose target is not a package of this repository.
    ///
    /// Dropped targets are assumed to be satisfied by the system outside
    /// the repository's scope; they are logged at debug level only.
    pub fn resolve(&mut self) {
        let paths: HashMap<String, PathBuf> = self
            .packages
            .values()
            .map(|package| (package.name.clone(), package.path.clone()))
            .collect();

        for package in self.packages.values_mut() {
            let owner = package.name.clone();
            package.constraints.retain_mut(|constraint| {
                match paths.get(&constraint.target) {
                    Some(path) => {
                        constraint.resolved = Some(path.clone());
                        true
                    }
                    None => {
                        debug!(
                            "{}: requirement on '{}' is not in the repository, skipping",
                            owner, constraint.target
                        );
                        false
                    }
                }
            });
        }
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Package names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Assemble an index directly from packages, bypassing the query tool.
    #[cfg(test)]
    pub fn from_packages(packages: Vec<Package>) -> Self {
        Self {
            packages: packages
                .into_iter()
                .map(|package| (package.name.clone(), package))
                .collect(),
        }
    }
}
