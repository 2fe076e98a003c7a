//! Built hierarchy types and the builder

use crate::palette::Colors;
use crate::schema::{LabelStyle, NodeSpec, Position, SCHEMA, SUBTITLE_PREFIX};
use rashut_model::{AggregateStatistics, Percentage};
use serde::Serialize;

/// A positioned, styled node ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    /// Stable identifier
    pub id: String,
    /// Formatted count
    pub label: String,
    /// Display title
    pub title: String,
    /// Completion subtitle on branch nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Depth, root is 0
    pub level: u8,
    /// Chart position
    pub position: Position,
    /// Background fill
    pub fill: String,
    /// Border stroke
    pub border: String,
    /// Completion badge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Percentage>,
}

impl HierarchyNode {
    /// Bare node at the given level, unstyled
    #[must_use]
    pub fn new(id: impl Into<String>, level: u8) -> Self {
        let colors = crate::palette::ColorKey::Default.colors();
        Self {
            id: id.into(),
            label: "0".to_string(),
            title: String::new(),
            subtitle: None,
            level,
            position: Position::new(0.0, 0.0),
            fill: colors.fill.to_string(),
            border: colors.border.to_string(),
            percentage: None,
        }
    }

    fn from_spec(spec: &NodeSpec, stats: &AggregateStatistics) -> Self {
        let count = stats.count(spec.metric);
        let label = match spec.label_style {
            LabelStyle::Plain => count.to_string(),
            LabelStyle::Grouped => group_thousands(count),
        };
        let percentage = spec.badge.map(|branch| stats.percentage(branch));
        let Colors { fill, border } = spec.color.colors();

        Self {
            id: spec.id.to_string(),
            label,
            title: spec.title.to_string(),
            subtitle: percentage.map(|pct| format!("{SUBTITLE_PREFIX}{pct}")),
            level: spec.level,
            position: spec.position,
            fill: fill.to_string(),
            border: border.to_string(),
            percentage,
        }
    }
}

/// Parent to child link
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HierarchyEdge {
    /// Parent id
    pub from: String,
    /// Child id
    pub to: String,
}

impl HierarchyEdge {
    /// New edge
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Nodes and edges of one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hierarchy {
    /// Nodes, parents before children
    pub nodes: Vec<HierarchyNode>,
    /// Edges
    pub edges: Vec<HierarchyEdge>,
}

impl Hierarchy {
    /// Look up a node
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&HierarchyNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Direct children of a node, in edge order
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a HierarchyNode> + 'a {
        self.edges
            .iter()
            .filter(move |edge| edge.from == id)
            .filter_map(move |edge| self.node(&edge.to))
    }

    /// Node ids in order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.id.as_str())
    }
}

/// Derive the render tree from statistics
///
/// Always yields the full fixed shape; zero counts are rendered as `0`.
#[must_use]
pub fn build_hierarchy(stats: &AggregateStatistics) -> Hierarchy {
    let nodes = SCHEMA
        .iter()
        .map(|spec| HierarchyNode::from_spec(spec, stats))
        .collect();
    let edges = SCHEMA
        .iter()
        .filter_map(|spec| spec.parent.map(|parent| HierarchyEdge::new(parent, spec.id)))
        .collect();

    let hierarchy = Hierarchy { nodes, edges };
    debug_assert_eq!(hierarchy.validate(), Ok(()));
    tracing::debug!(
        nodes = hierarchy.nodes.len(),
        edges = hierarchy.edges.len(),
        total = stats.total,
        "hierarchy built"
    );
    hierarchy
}

/// Format a count with comma thousands separators
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rashut_model::Provenance;

    fn fallback() -> AggregateStatistics {
        rashut_stats::fallback_statistics()
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1496), "1,496");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn fallback_tree() {
        let stats = fallback();
        assert_eq!(stats.provenance, Provenance::Fallback);
        let tree = build_hierarchy(&stats);

        assert_eq!(tree.nodes.len(), 17);
        assert_eq!(tree.edges.len(), 16);

        let root = tree.node("root").unwrap();
        assert_eq!(root.label, "1,496");
        assert_eq!(root.fill, "#d6e9f5");
        assert_eq!(root.level, 0);

        let left = tree.node("left-branch").unwrap();
        assert_eq!(left.label, "590");
        assert_eq!(left.subtitle.as_deref(), Some("שיעור ביצוע: 80%"));
        assert_eq!(left.percentage, Some(Percentage(80)));

        let right = tree.node("right-branch").unwrap();
        assert_eq!(right.label, "906");
        assert_eq!(right.percentage, Some(Percentage(77)));

        assert_eq!(tree.node("right-cancelled").unwrap().label, "97");
        assert_eq!(tree.node("left-new-converted").unwrap().label, "286");
        assert_eq!(tree.node("left-midyear-converted-executing").unwrap().label, "91");
    }

    #[test]
    fn empty_statistics_render_zeros() {
        let tree = build_hierarchy(&AggregateStatistics::default());

        assert_eq!(tree.nodes.len(), 17);
        assert!(tree.nodes.iter().all(|node| node.label == "0"));
        assert_eq!(
            tree.node("left-branch").unwrap().subtitle.as_deref(),
            Some("שיעור ביצוע: 0%")
        );
        assert!(tree.node("left-new").unwrap().subtitle.is_none());
    }

    #[test]
    fn children_follow_schema() {
        let tree = build_hierarchy(&fallback());
        let children: Vec<_> = tree.children("right-branch").map(|n| n.id.as_str()).collect();
        assert_eq!(
            children,
            vec!["right-new", "right-continued", "right-midyear", "right-cancelled"]
        );
        assert_eq!(tree.children("left-new-converted-executing").count(), 0);
    }

    #[test]
    fn serializes_camel_case() {
        let tree = build_hierarchy(&fallback());
        let json = serde_json::to_value(tree.node("left-branch").unwrap()).unwrap();
        assert_eq!(json["percentage"], "80%");
        assert_eq!(json["position"]["x"], 28.0);
        assert!(tree.node("root").map(|n| serde_json::to_value(n).unwrap()["subtitle"].is_null()).unwrap());
    }
}
