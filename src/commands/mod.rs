//! Command layer wiring the audit pipeline together:
//! discover archives, build and resolve the index, walk the tree,
//! then report version mismatches.

use anyhow::{Result, bail};
use log::debug;
use std::io::Write;
use std::path::Path;

use crate::index::RepoIndex;
use crate::package::find_archives;
use crate::query::RpmQuery;
use crate::report::report_mismatches;
use crate::tree::TreeWalker;

/// Run the full audit over `directory`, rooted at `root` if given.
///
/// The tree and any mismatch warnings both go to `out`. Returns an error
/// on usage problems (bad paths), a missing rpm tool, duplicate package
/// names, or a failed rpm invocation; version mismatches are warnings
/// and never fail the run.
#[tracing::instrument(skip(query, out))]
pub fn audit<Q: RpmQuery, W: Write>(
    query: &Q,
    directory: &Path,
    root: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    if !directory.is_dir() {
        bail!("'{}' is not a directory", directory.display());
    }
    if let Some(root) = root {
        if !root.is_file() {
            bail!("'{}' is not a file", root.display());
        }
        let is_rpm = root
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("rpm"));
        if !is_rpm {
            bail!("'{}' is not an .rpm archive", root.display());
        }
    }
    if !query.available() {
        bail!("the rpm tool is not available; install rpm and retry");
    }

    let archives = find_archives(directory)?;
    debug!("found {} archive(s) in {:?}", archives.len(), directory);

    let mut index = RepoIndex::build(query, &archives)?;
    index.resolve();

    let walker = TreeWalker::new(&index, out);
    let visited = match root {
        Some(root) => {
            let name = query.metadata(root)?.name;
            debug!("walking from root package '{}'", name);
            walker.walk(&name)?
        }
        None => walker.walk_all()?,
    };

    report_mismatches(query, &index, &visited, out)
}
