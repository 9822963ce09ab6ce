//! Post-traversal version-mismatch reporting.

use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;

use crate::index::RepoIndex;
use crate::package::Evr;
use crate::query::RpmQuery;

/// Re-check every visited package's resolved requirements against the
/// versions actually present in the repository, writing one warning per
/// unsatisfied requirement to `out`.
///
/// Packages are processed in the order they first appeared in the tree,
/// constraints in declaration order. Mismatches never abort the pass; a
/// failed comparator invocation does.
#[tracing::instrument(skip(query, index, visited, out))]
pub fn report_mismatches<Q: RpmQuery, W: Write>(
    query: &Q,
    index: &RepoIndex,
    visited: &HashMap<String, usize>,
    out: &mut W,
) -> Result<()> {
    let mut order: Vec<(&str, usize)> = visited
        .iter()
        .map(|(name, &line)| (name.as_str(), line))
        .collect();
    order.sort_by_key(|&(_, line)| line);

    for (name, _) in order {
        let Some(package) = index.get(name) else {
            continue;
        };
        for constraint in &package.constraints {
            let Some(target) = index.get(&constraint.target) else {
                // Resolved constraints always point into the index.
                continue;
            };
            let installed = comparison_subject(&target.version, &constraint.desired);
            if !query.satisfies(&installed, &constraint.desired, constraint.operator)? {
                writeln!(
                    out,
                    "warning: {} requires {} {} {}, but {} is present",
                    package.name,
                    constraint.target,
                    constraint.operator,
                    constraint.desired,
                    target.version
                )?;
            }
        }
    }
    Ok(())
}

/// A desired version without a release separator is release-agnostic:
/// compare against epoch and version only.
fn comparison_subject(installed: &Evr, desired: &str) -> String {
    if desired.contains('-') {
        installed.full()
    } else {
        installed.without_release()
    }
}
