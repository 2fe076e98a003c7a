//! Tree validation errors

/// Structural defect in a hierarchy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// Two nodes share an id
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    /// Edge endpoint does not name a node
    #[error("edge {from} -> {to} references a missing node")]
    DanglingEdge {
        /// Parent end
        from: String,
        /// Child end
        to: String,
    },

    /// Not exactly one parentless node
    #[error("expected exactly one root, found {0}")]
    RootCount(usize),

    /// Node reached by more than one edge
    #[error("node {0} has more than one parent")]
    MultipleParents(String),

    /// Edges loop back on themselves
    #[error("hierarchy contains a cycle")]
    Cycle,

    /// Child is not exactly one level below its parent
    #[error("node {child} at level {level} is not one below its parent {parent}")]
    LevelMismatch {
        /// Parent id
        parent: String,
        /// Child id
        child: String,
        /// Child level
        level: u8,
    },
}
