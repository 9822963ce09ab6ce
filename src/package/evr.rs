use std::fmt;

/// Version identifier of a package: epoch, version and release.
///
/// Ordering between two identifiers is delegated to rpm itself (see
/// [`crate::query::RpmQuery`]); this type only carries the components and
/// renders the combined strings handed to the comparator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evr {
    /// Epoch, if the package declares one.
    pub epoch: Option<String>,
    pub version: String,
    /// Release; may be empty for archives that do not carry one.
    pub release: String,
}

impl Evr {
    pub fn new(epoch: Option<String>, version: impl Into<String>, release: impl Into<String>) -> Self {
        Self {
            epoch,
            version: version.into(),
            release: release.into(),
        }
    }

    /// The combined `[epoch:]version[-release]` ordering string.
    pub fn full(&self) -> String {
        let mut s = String::new();
        if let Some(epoch) = &self.epoch {
            s.push_str(epoch);
            s.push(':');
        }
        s.push_str(&self.version);
        if !self.release.is_empty() {
            s.push('-');
            s.push_str(&self.release);
        }
        s
    }

    /// The ordering string with the release component stripped.
    ///
    /// Used when a requirement's desired version names no release: such a
    /// requirement is release-agnostic and must be compared on epoch and
    /// version only.
    pub fn without_release(&self) -> String {
        match &self.epoch {
            Some(epoch) => format!("{}:{}", epoch, self.version),
            None => self.version.clone(),
        }
    }
}

impl fmt::Display for Evr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_version_release() {
        let evr = Evr::new(None, "1.0", "3");
        assert_eq!(evr.full(), "1.0-3");
    }

    #[test]
    fn test_full_with_epoch() {
        let evr = Evr::new(Some("2".into()), "1.0", "3.el9");
        assert_eq!(evr.full(), "2:1.0-3.el9");
    }

    #[test]
    fn test_full_without_release_component() {
        let evr = Evr::new(None, "1.5", "");
        assert_eq!(evr.full(), "1.5");
    }

    #[test]
    fn test_without_release() {
        let evr = Evr::new(None, "1.0", "3");
        assert_eq!(evr.without_release(), "1.0");

        let evr = Evr::new(Some("2".into()), "1.0", "3");
        assert_eq!(evr.without_release(), "2:1.0");
    }

    #[test]
    fn test_display_matches_full() {
        let evr = Evr::new(Some("1".into()), "4.2", "7");
        assert_eq!(evr.to_string(), "1:4.2-7");
    }
}
