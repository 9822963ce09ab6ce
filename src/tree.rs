//! Cycle-safe rendering of the dependency graph as an indented tree.

use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;

use crate::index::RepoIndex;

/// Traversal context for one tree-rendering run.
///
/// Owns the line counter and the visit ledger for the duration of the
/// walk; both are shared across every subtree of the run, never global.
/// The ledger records the line on which each package was first printed,
/// so a package reached again (through a cycle or through a second path)
/// is emitted as a one-line back-reference instead of being expanded
/// again. That bounds the output at one full expansion per distinct
/// package and makes traversal terminate on any graph.
pub struct TreeWalker<'a, W: Write> {
    index: &'a RepoIndex,
    out: &'a mut W,
    line: usize,
    visited: HashMap<String, usize>,
}

impl<'a, W: Write> TreeWalker<'a, W> {
    pub fn new(index: &'a RepoIndex, out: &'a mut W) -> Self {
        Self {
            index,
            out,
            line: 0,
            visited: HashMap::new(),
        }
    }

    /// Render the subtree rooted at `root` and return the visit ledger.
    pub fn walk(mut self, root: &str) -> Result<HashMap<String, usize>> {
        self.node(root, "", true)?;
        Ok(self.visited)
    }

    /// Render one subtree per package, in index order, sharing the line
    /// counter and ledger across all of them. A package already expanded
    /// under an earlier root shows up under later roots only as a
    /// back-reference. Subtrees are separated by a blank line carrying
    /// the next line number.
    pub fn walk_all(mut self) -> Result<HashMap<String, usize>> {
        let names: Vec<String> = self.index.names().map(str::to_string).collect();
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.line += 1;
                writeln!(self.out, "{:04}:", self.line)?;
            }
            self.node(name, "", true)?;
        }
        Ok(self.visited)
    }

    fn node(&mut self, name: &str, padding: &str, is_last: bool) -> Result<()> {
        // Should not happen once the index is resolved; guard so an
        // unresolvable name consumes no line number.
        let index = self.index;
        let Some(package) = index.get(name) else {
            return Ok(());
        };

        self.line += 1;
        let connector = if is_last { "└─ " } else { "├─ " };

        if let Some(&first) = self.visited.get(name) {
            writeln!(
                self.out,
                "{:04}: {}{}{} (goto line {})",
                self.line, padding, connector, name, first
            )?;
            return Ok(());
        }
        self.visited.insert(name.to_string(), self.line);

        if package.constraints.is_empty() {
            writeln!(
                self.out,
                "{:04}: {}{}{} (no dependencies)",
                self.line, padding, connector, name
            )?;
            return Ok(());
        }
        writeln!(self.out, "{:04}: {}{}{}", self.line, padding, connector, name)?;

        // Extend the vertical guide only while a sibling subtree still
        // follows below this node.
        let child_padding = format!("{}{}", padding, if is_last { "   " } else { "│  " });
        let last = package.constraints.len() - 1;
        for (i, constraint) in package.constraints.iter().enumerate() {
            self.node(&constraint.target, &child_padding, i == last)?;
        }
        Ok(())
    }
}
