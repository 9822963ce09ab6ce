use anyhow::{Context, Result, bail};
use log::debug;
use std::cmp::Ordering;
use std::path::Path;
use std::process::Command;

use super::{RpmMetadata, RpmQuery};
use crate::package::{Evr, Operator};

/// Real query adapter shelling out to rpm(8).
///
/// Every call blocks on the subprocess; there is no timeout. A non-zero
/// exit from rpm fails the whole run.
pub struct RpmCli;

/// One line each for name, epoch, version and release.
const METADATA_FORMAT: &str = "%{NAME}\\n%{EPOCH}\\n%{VERSION}\\n%{RELEASE}";

impl RpmQuery for RpmCli {
    fn available(&self) -> bool {
        Command::new("rpm")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn metadata(&self, path: &Path) -> Result<RpmMetadata> {
        let header = run(
            Command::new("rpm")
                .args(["-qp", "--queryformat", METADATA_FORMAT])
                .arg(path),
            &format!("querying metadata of {:?}", path),
        )?;
        let (name, version) = parse_metadata_fields(&header)
            .with_context(|| format!("Unexpected rpm query output for {:?}: {:?}", path, header))?;

        let requires = run(
            Command::new("rpm").args(["-qpR"]).arg(path),
            &format!("querying requirements of {:?}", path),
        )?;
        let requires: Vec<String> = requires
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        debug!("{:?}: {} {} ({} requirements)", path, name, version, requires.len());
        Ok(RpmMetadata {
            name,
            version,
            requires,
        })
    }

    fn satisfies(&self, installed: &str, desired: &str, operator: Operator) -> Result<bool> {
        for version in [installed, desired] {
            if version.contains(['"', '\\']) {
                bail!("version string {:?} cannot be passed to rpm.vercmp", version);
            }
        }

        let expr = format!(r#"%{{lua:print(rpm.vercmp("{}", "{}"))}}"#, installed, desired);
        let out = run(
            Command::new("rpm").args(["--eval", &expr]),
            &format!("comparing {} against {}", installed, desired),
        )?;
        let ordering = match out.trim() {
            "-1" => Ordering::Less,
            "0" => Ordering::Equal,
            "1" => Ordering::Greater,
            other => bail!("unexpected rpm.vercmp output {:?}", other),
        };
        Ok(relation_holds(ordering, operator))
    }
}

fn run(command: &mut Command, what: &str) -> Result<String> {
    let output = command
        .output()
        .with_context(|| format!("Failed to invoke rpm while {}", what))?;
    if !output.status.success() {
        bail!(
            "rpm failed while {}: {}",
            what,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split the four-line `--queryformat` output into name and version.
fn parse_metadata_fields(text: &str) -> Option<(String, Evr)> {
    let mut lines = text.lines();
    let name = lines.next()?;
    let epoch = lines.next()?;
    let version = lines.next()?;
    let release = lines.next()?;

    // rpm prints "(none)" for an unset epoch.
    let epoch = match epoch {
        "" | "(none)" => None,
        value => Some(value.to_string()),
    };
    Some((name.to_string(), Evr::new(epoch, version, release)))
}

/// Map rpm's three-way comparison result onto a requirement operator.
fn relation_holds(ordering: Ordering, operator: Operator) -> bool {
    match operator {
        Operator::Eq => ordering == Ordering::Equal,
        Operator::Ge => ordering != Ordering::Less,
        Operator::Le => ordering != Ordering::Greater,
        Operator::Gt => ordering == Ordering::Greater,
        Operator::Lt => ordering == Ordering::Less,
    }
}
