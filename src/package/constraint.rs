use log::warn;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Relational operator of a version requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ge,
    Le,
    Gt,
    Lt,
}

impl FromStr for Operator {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Operator::Eq),
            ">=" => Ok(Operator::Ge),
            "<=" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            "<" => Ok(Operator::Lt),
            _ => anyhow::bail!("unsupported version operator '{}'", s),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operator::Eq => "=",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
        };
        write!(f, "{}", s)
    }
}

/// A declared requirement edge: "the owning package requires `target`,
/// with version relation `operator` against `desired`".
///
/// `resolved` is written once by [`crate::index::RepoIndex::resolve`]:
/// `Some(path)` binds the edge to the archive backing `target` in the local
/// repository. Constraints whose target is not present locally never reach
/// that state; the resolver drops them instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub target: String,
    pub operator: Operator,
    pub desired: String,
    pub resolved: Option<PathBuf>,
}

/// Sentinel desired version for requirements that name no version at all.
const ANY_VERSION: &str = "0.0";

impl Constraint {
    /// Parse one raw requirement line as emitted by `rpm -qpR`.
    ///
    /// The target name runs up to the first space, `=`, `<` or `>`. A bare
    /// name means "any version": operator `>=` against a `0.0` sentinel.
    /// Otherwise an optional space, a run of characters from `{=, <, >}`,
    /// another optional space, and the rest of the line verbatim as the
    /// desired version.
    ///
    /// Requirement lines that do not fit this shape (rich dependencies,
    /// a dangling operator with no version) degrade to the "any version"
    /// form rather than failing the run; their targets are never local
    /// packages, so the resolver discards them anyway.
    pub fn parse(raw: &str) -> Constraint {
        let raw = raw.trim();
        let name_end = raw
            .find([' ', '=', '<', '>'])
            .unwrap_or(raw.len());
        let target = &raw[..name_end];

        if name_end == raw.len() {
            return Constraint::any_version(target);
        }

        let rest = raw[name_end..].strip_prefix(' ').unwrap_or(&raw[name_end..]);
        let op_end = rest
            .find(|c| !matches!(c, '=' | '<' | '>'))
            .unwrap_or(rest.len());
        let desired = rest[op_end..].strip_prefix(' ').unwrap_or(&rest[op_end..]);

        let operator = match rest[..op_end].parse::<Operator>() {
            Ok(op) if !desired.is_empty() => op,
            _ => {
                warn!("malformed requirement '{}', treating as unversioned", raw);
                return Constraint::any_version(target);
            }
        };

        Constraint {
            target: target.to_string(),
            operator,
            desired: desired.to_string(),
            resolved: None,
        }
    }

    fn any_version(target: &str) -> Constraint {
        Constraint {
            target: target.to_string(),
            operator: Operator::Ge,
            desired: ANY_VERSION.to_string(),
            resolved: None,
        }
    }
}
