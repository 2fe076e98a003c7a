//! Structural checks on a built hierarchy

use crate::error::HierarchyError;
use crate::node::Hierarchy;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::HashMap;

impl Hierarchy {
    /// Check that the edges form a single rooted tree over the nodes
    ///
    /// # Errors
    /// Returns the first structural defect found, see [`HierarchyError`].
    pub fn validate(&self) -> Result<(), HierarchyError> {
        let mut levels: HashMap<&str, u8> = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if levels.insert(node.id.as_str(), node.level).is_some() {
                return Err(HierarchyError::DuplicateNode(node.id.clone()));
            }
        }

        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
        for &id in levels.keys() {
            graph.add_node(id);
        }

        for edge in &self.edges {
            let (from, to) = (edge.from.as_str(), edge.to.as_str());
            if !levels.contains_key(from) || !levels.contains_key(to) {
                return Err(HierarchyError::DanglingEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            }
            if graph.neighbors_directed(to, Direction::Incoming).next().is_some() {
                return Err(HierarchyError::MultipleParents(edge.to.clone()));
            }
            graph.add_edge(from, to, ());
        }

        if petgraph::algo::is_cyclic_directed(&graph) {
            return Err(HierarchyError::Cycle);
        }

        let roots = graph
            .nodes()
            .filter(|&n| graph.neighbors_directed(n, Direction::Incoming).next().is_none())
            .count();
        if roots != 1 {
            return Err(HierarchyError::RootCount(roots));
        }

        for (from, to, _) in graph.all_edges() {
            let (parent_level, level) = (levels[from], levels[to]);
            if level != parent_level.saturating_add(1) {
                return Err(HierarchyError::LevelMismatch {
                    parent: from.to_string(),
                    child: to.to_string(),
                    level,
                });
            }
        }

        Ok(())
    }
}
