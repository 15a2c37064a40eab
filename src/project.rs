use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::errors::ExopackError;

/// A single build artifact: a Maven coordinate plus its direct dependency
/// edges, in declaration order.
///
/// A project referenced by several parents (e.g. `commons` appearing inside
/// `container`) is cloned into each parent; graph identity is the
/// `group:artifact` key, not object identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub group: String,
    pub artifact: String,
    pub packaging: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Project>,
}

impl Project {
    pub fn new(group: &str, artifact: &str, packaging: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            packaging: packaging.to_string(),
            version: version.to_string(),
            dependencies: Vec::new(),
        }
    }

    /// Append a dependency edge, preserving declaration order.
    ///
    /// Consumes and returns `self` so construction reads as a chain.
    pub fn depends_on(mut self, dep: Project) -> Self {
        self.dependencies.push(dep);
        self
    }

    /// `group:artifact` identifier (without version).
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            group: self.group.clone(),
            artifact: self.artifact.clone(),
            packaging: self.packaging.clone(),
            version: self.version.clone(),
        }
    }

    /// Reject empty coordinate fields, recursively through dependencies.
    pub fn validate(&self) -> miette::Result<()> {
        if self.group.is_empty()
            || self.artifact.is_empty()
            || self.packaging.is_empty()
            || self.version.is_empty()
        {
            return Err(ExopackError::Coordinate {
                message: format!(
                    "project '{}:{}' has an empty coordinate field",
                    self.group, self.artifact
                ),
            }
            .into());
        }
        for dep in &self.dependencies {
            dep.validate()?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group, self.artifact, self.packaging, self.version
        )
    }
}
