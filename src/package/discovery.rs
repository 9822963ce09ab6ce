use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Find all RPM archives directly inside `dir`.
///
/// Only plain files with an `.rpm` extension (case-insensitive) count;
/// subdirectories are not descended into. Results are sorted by path so
/// index construction is deterministic regardless of readdir order.
#[tracing::instrument(skip(dir))]
pub fn find_archives(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut archives = Vec::new();

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {:?}", dir))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory entry in {:?}", dir))?
            .path();
        if path.is_file() && has_rpm_extension(&path) {
            archives.push(path);
        }
    }

    archives.sort();
    Ok(archives)
}

fn has_rpm_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("rpm"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_find_archives_filters_and_sorts() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("zlib.rpm")).unwrap();
        File::create(dir.path().join("bash.rpm")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        std::fs::create_dir(dir.path().join("nested.rpm")).unwrap();

        let archives = find_archives(dir.path()).unwrap();
        assert_eq!(
            archives,
            vec![dir.path().join("bash.rpm"), dir.path().join("zlib.rpm")]
        );
    }

    #[test]
    fn test_find_archives_extension_case_insensitive() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("loud.RPM")).unwrap();

        let archives = find_archives(dir.path()).unwrap();
        assert_eq!(archives, vec![dir.path().join("loud.RPM")]);
    }

    #[test]
    fn test_find_archives_empty_dir() {
        let dir = tempdir().unwrap();
        assert!(find_archives(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_find_archives_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(find_archives(&missing).is_err());
    }
}
