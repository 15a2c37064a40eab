//! Graph view of a module: flattening, rebuild, and tree printing.

use std::collections::HashMap;
use std::collections::HashSet;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::errors::ExopackError;
use crate::module::Module;
use crate::project::Project;

/// A project in flat form: coordinates plus dependency artifact ids.
///
/// The flat form is the serialization boundary; rebuilding a graph from it
/// must reproduce the same node set, edge set, and declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatProject {
    pub group: String,
    pub artifact: String,
    pub packaging: String,
    pub version: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// A module's dependency graph backed by petgraph.
///
/// Nodes are deduplicated by `group:artifact`, so a project referenced by
/// several parents appears once with multiple incoming edges.
pub struct ModuleGraph {
    graph: DiGraph<Coordinate, ()>,
    /// Lookup from `group:artifact` to node index.
    index: HashMap<String, NodeIndex>,
    /// Node indices in insertion order; flattening follows this.
    order: Vec<NodeIndex>,
    /// The module's top-level projects, in declaration order.
    roots: Vec<NodeIndex>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            order: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Build the graph for every project and dependency edge in a module.
    pub fn from_module(module: &Module) -> Self {
        let mut g = Self::new();
        for project in module.projects() {
            let idx = g.add_project(project);
            g.roots.push(idx);
        }
        g
    }

    fn add_project(&mut self, project: &Project) -> NodeIndex {
        let idx = self.add_node(project.coordinate());
        for dep in &project.dependencies {
            let dep_idx = self.add_project(dep);
            self.add_edge(idx, dep_idx);
        }
        idx
    }

    /// Add or retrieve a node. If the key already exists, returns the existing index.
    pub fn add_node(&mut self, coord: Coordinate) -> NodeIndex {
        let key = coord.key();
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(coord);
        self.index.insert(key, idx);
        self.order.push(idx);
        idx
    }

    /// Add a dependency edge from `from` to `to`, ignoring duplicates.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, ());
        }
    }

    /// Look up a node by `group:artifact`.
    pub fn find(&self, key: &str) -> Option<NodeIndex> {
        self.index.get(key).copied()
    }

    /// Get the node data for an index.
    pub fn node(&self, idx: NodeIndex) -> &Coordinate {
        &self.graph[idx]
    }

    /// Direct dependencies of a node, in declaration order.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph iterates outgoing edges most-recent-first.
        let mut deps: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| e.target())
            .collect();
        deps.reverse();
        deps
    }

    /// Reverse dependencies (who depends on this node).
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| e.source())
            .collect()
    }

    /// Whether the graph contains a dependency cycle.
    pub fn is_cyclic(&self) -> bool {
        petgraph::algo::is_cyclic_directed(&self.graph)
    }

    /// Flatten to the serializable form, preserving insertion order for
    /// nodes and declaration order for each node's dependency list.
    pub fn flatten(&self) -> Vec<FlatProject> {
        self.order
            .iter()
            .map(|&idx| {
                let coord = &self.graph[idx];
                FlatProject {
                    group: coord.group.clone(),
                    artifact: coord.artifact.clone(),
                    packaging: coord.packaging.clone(),
                    version: coord.version.clone(),
                    dependencies: self
                        .dependencies_of(idx)
                        .iter()
                        .map(|&dep| self.graph[dep].artifact.clone())
                        .collect(),
                }
            })
            .collect()
    }

    /// Rebuild a graph from the flat form.
    ///
    /// A dependency naming an artifact not present in the list is an error.
    pub fn from_flat(flat: &[FlatProject]) -> miette::Result<Self> {
        let mut g = Self::new();
        let mut by_artifact: HashMap<&str, NodeIndex> = HashMap::new();
        for entry in flat {
            let idx = g.add_node(Coordinate {
                group: entry.group.clone(),
                artifact: entry.artifact.clone(),
                packaging: entry.packaging.clone(),
                version: entry.version.clone(),
            });
            by_artifact.insert(entry.artifact.as_str(), idx);
        }
        for entry in flat {
            let from = by_artifact[entry.artifact.as_str()];
            for dep in &entry.dependencies {
                let to = *by_artifact.get(dep.as_str()).ok_or_else(|| {
                    ExopackError::Graph {
                        message: format!(
                            "'{}' depends on unknown artifact '{dep}'",
                            entry.artifact
                        ),
                    }
                })?;
                g.add_edge(from, to);
            }
        }
        Ok(g)
    }

    /// Print the dependency tree of every top-level project to a string.
    pub fn print_tree(&self) -> String {
        let mut output = String::new();
        for &root in &self.roots {
            output.push_str(&format!("{}\n", self.graph[root]));
            let mut visited = HashSet::new();
            visited.insert(root);
            let deps = self.dependencies_of(root);
            let count = deps.len();
            for (i, &idx) in deps.iter().enumerate() {
                let is_last = i == count - 1;
                self.print_subtree(&mut output, idx, "", is_last, &mut visited);
            }
        }
        output
    }

    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!("{prefix}{connector}{}\n", self.graph[idx]));

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, &child) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(output, child, &child_prefix, is_last, visited);
        }

        visited.remove(&idx);
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ModuleGraph {
    fn default() -> Self {
        Self::new()
    }
}
