use crate::DEFAULT_PACKAGING;

/// Maven coordinates parsed from a shorthand string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub packaging: String,
    pub version: String,
}

impl Coordinate {
    /// Parse `"group:artifact:packaging:version"` into coordinates.
    ///
    /// The three-part form `"group:artifact:version"` is accepted too, with
    /// the packaging defaulting to `"jar"`.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        match parts.as_slice() {
            [group, artifact, packaging, version] => Some(Self {
                group: group.to_string(),
                artifact: artifact.to_string(),
                packaging: packaging.to_string(),
                version: version.to_string(),
            }),
            [group, artifact, version] => Some(Self {
                group: group.to_string(),
                artifact: artifact.to_string(),
                packaging: DEFAULT_PACKAGING.to_string(),
                version: version.to_string(),
            }),
            _ => None,
        }
    }

    /// `group:artifact` identifier (without packaging or version).
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group, self.artifact, self.packaging, self.version
        )
    }
}
