use serde::{Deserialize, Serialize};

use crate::project::Project;

/// A packaging module: a named, versioned grouping of related build
/// artifacts sharing a repository location.
///
/// The sub-groupings are a fixed set of named fields rather than an open
/// property bag, so the full shape is known at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub version: String,
    #[serde(rename = "relative-maven-repo")]
    pub relative_maven_repo: String,
    #[serde(rename = "relative-src-repo")]
    pub relative_src_repo: String,
    pub commons: Project,
    pub container: Project,
    pub misc: MiscProjects,
    pub component: ComponentProjects,
}

/// Miscellaneous third-party projects bundled with the module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiscProjects {
    pub drools: Project,
}

/// The module's component projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentProjects {
    pub common: Project,
    pub command: Project,
    pub cache: Project,
    pub remote: Project,
}

impl Module {
    /// Every project in the module, in declaration order.
    pub fn projects(&self) -> Vec<&Project> {
        vec![
            &self.commons,
            &self.container,
            &self.misc.drools,
            &self.component.common,
            &self.component.command,
            &self.component.cache,
            &self.component.remote,
        ]
    }

    /// Reject empty names and malformed coordinates anywhere in the tree.
    pub fn validate(&self) -> miette::Result<()> {
        if self.name.is_empty() || self.version.is_empty() {
            return Err(crate::errors::ExopackError::Manifest {
                message: "module name and version must be non-empty".to_string(),
            }
            .into());
        }
        for project in self.projects() {
            project.validate()?;
        }
        Ok(())
    }

    /// Serialize the module to a pretty-printed TOML string.
    pub fn to_string_pretty(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
