use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::coordinate::Coordinate;
use crate::errors::ExopackError;
use crate::module::{ComponentProjects, MiscProjects, Module};
use crate::project::Project;
use crate::DEFAULT_PACKAGING;

/// The parsed representation of a module manifest file.
///
/// This is the lenient on-disk form: project specs may omit `packaging`
/// (defaults to `"jar"`) and `version` (inherits the module version), and a
/// dependency may be written as a shorthand coordinate string. Resolving
/// into a [`Module`] applies the defaults and validates the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleManifest {
    pub name: String,
    pub version: String,
    #[serde(rename = "relative-maven-repo")]
    pub relative_maven_repo: String,
    #[serde(rename = "relative-src-repo")]
    pub relative_src_repo: String,
    pub commons: ProjectSpec,
    pub container: ProjectSpec,
    pub misc: MiscSpec,
    pub component: ComponentSpec,
}

/// A project entry in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub group: String,
    pub artifact: String,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,
}

/// A dependency entry, either a shorthand coordinate string or a full spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencySpec {
    Short(String),
    Detailed(Box<ProjectSpec>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiscSpec {
    pub drools: ProjectSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub common: ProjectSpec,
    pub command: ProjectSpec,
    pub cache: ProjectSpec,
    pub remote: ProjectSpec,
}

impl ModuleManifest {
    /// Load and parse a module manifest from the given path.
    ///
    /// Before parsing, `${key}` placeholders in the manifest content are
    /// interpolated from `vars` (the outer build supplies at least
    /// `project.version`). Placeholders with no matching key are left
    /// untouched.
    pub fn from_path(path: &Path, vars: &BTreeMap<String, String>) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ExopackError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let resolved = crate::properties::interpolate(&content, vars);
        Self::from_str(&resolved)
    }

    /// Parse a module manifest from a string (no interpolation).
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            ExopackError::Manifest {
                message: format!("Failed to parse module manifest: {e}"),
            }
            .into()
        })
    }

    /// Resolve the manifest into a validated [`Module`].
    pub fn into_module(self) -> miette::Result<Module> {
        let version = self.version.clone();
        let module = Module {
            name: self.name,
            version: self.version,
            relative_maven_repo: self.relative_maven_repo,
            relative_src_repo: self.relative_src_repo,
            commons: resolve_project(self.commons, &version)?,
            container: resolve_project(self.container, &version)?,
            misc: MiscProjects {
                drools: resolve_project(self.misc.drools, &version)?,
            },
            component: ComponentProjects {
                common: resolve_project(self.component.common, &version)?,
                command: resolve_project(self.component.command, &version)?,
                cache: resolve_project(self.component.cache, &version)?,
                remote: resolve_project(self.component.remote, &version)?,
            },
        };
        module.validate()?;
        Ok(module)
    }
}

/// Load a module manifest file and resolve it in one step.
pub fn load_module(path: &Path, version: &str) -> miette::Result<Module> {
    let mut vars = BTreeMap::new();
    vars.insert("project.version".to_string(), version.to_string());
    let manifest = ModuleManifest::from_path(path, &vars)?;
    let module = manifest.into_module()?;
    tracing::debug!(
        "Loaded module manifest '{}' ({} projects) from {}",
        module.name,
        module.projects().len(),
        path.display()
    );
    Ok(module)
}

fn resolve_project(spec: ProjectSpec, module_version: &str) -> miette::Result<Project> {
    let mut project = Project::new(
        &spec.group,
        &spec.artifact,
        spec.packaging.as_deref().unwrap_or(DEFAULT_PACKAGING),
        spec.version.as_deref().unwrap_or(module_version),
    );
    for dep in spec.dependencies {
        let resolved = match dep {
            DependencySpec::Short(s) => {
                let coord = Coordinate::parse(&s).ok_or_else(|| ExopackError::Coordinate {
                    message: format!("invalid shorthand coordinate '{s}'"),
                })?;
                Project::new(&coord.group, &coord.artifact, &coord.packaging, &coord.version)
            }
            DependencySpec::Detailed(inner) => resolve_project(*inner, module_version)?,
        };
        project = project.depends_on(resolved);
    }
    Ok(project)
}
