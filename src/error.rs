//! Error types for polyconn.
//!
//! Every topology precondition is checked before an operation starts mutating
//! the mesh, so an `Err` always means the mesh was left untouched.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A face needs at least three distinct vertices.
    #[error("degenerate face with {len} vertices (need at least 3 distinct)")]
    DegenerateFace {
        /// Number of vertices given.
        len: usize,
    },

    /// A handle does not address an element of this mesh.
    #[error("{kind} handle {index} is out of range")]
    InvalidHandle {
        /// Element kind ("vertex", "halfedge", ...).
        kind: &'static str,
        /// The raw index.
        index: usize,
    },

    /// The vertex has no boundary gap left for a new face.
    #[error("complex vertex {vertex}: no free boundary gap")]
    ComplexVertex {
        /// The offending vertex.
        vertex: usize,
    },

    /// The directed edge already has a face on the required side.
    #[error("complex edge ({from}, {to}): halfedge already has a face")]
    ComplexEdge {
        /// Start vertex of the edge.
        from: usize,
        /// End vertex of the edge.
        to: usize,
    },

    /// No free gap could be found to move a boundary patch into.
    #[error("patch re-linking failed between halfedges {from} and {to}")]
    PatchRelinkingFailed {
        /// The incoming halfedge of the corner.
        from: usize,
        /// The outgoing halfedge of the corner.
        to: usize,
    },

    /// The element is already deleted.
    #[error("{kind} {index} is deleted")]
    DeletedElement {
        /// Element kind ("vertex", "edge", "face").
        kind: &'static str,
        /// The raw index.
        index: usize,
    },

    /// The two faces at the edge share more than this edge.
    #[error("edge {edge} is not a simple link between its faces")]
    NotSimpleLink {
        /// The edge.
        edge: usize,
    },

    /// Collapsing the halfedge would break the topology.
    #[error("collapsing halfedge {halfedge} would break the topology")]
    CollapseNotAllowed {
        /// The halfedge.
        halfedge: usize,
    },

    /// The two halfedges do not bound the same face or boundary loop.
    #[error("halfedges {prev} and {next} are not in the same loop")]
    NotInSameFace {
        /// The first halfedge.
        prev: usize,
        /// The second halfedge.
        next: usize,
    },

    /// The two halfedges are already consecutive.
    #[error("halfedges {prev} and {next} are already consecutive")]
    AlreadyConsecutive {
        /// The first halfedge.
        prev: usize,
        /// The second halfedge.
        next: usize,
    },

    /// The new edge would leave a loop with fewer than three sides.
    #[error("an edge from halfedge {prev} to {next} would leave a two-sided loop")]
    InsertWouldDegenerate {
        /// The first halfedge.
        prev: usize,
        /// The second halfedge.
        next: usize,
    },

    /// The index type cannot address any more elements of this kind.
    #[error("no {kind} handle left: index type holds at most {limit}")]
    CapacityExceeded {
        /// Element kind ("vertex", "edge", "face").
        kind: &'static str,
        /// The number of elements of that kind the index type can address.
        limit: usize,
    },

    /// The vertex must be isolated for this operation.
    #[error("vertex {vertex} is not isolated")]
    VertexNotIsolated {
        /// The vertex.
        vertex: usize,
    },

    /// `reinsert_edge` needs an edge that was removed by `remove_edge`.
    #[error("edge {edge} is not deleted")]
    EdgeNotDeleted {
        /// The edge.
        edge: usize,
    },

    /// A face index list refers to a vertex that does not exist.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face of an index list could not be inserted.
    #[error("face {face} could not be added")]
    FaceRejected {
        /// The face index.
        face: usize,
        /// Why `add_face` refused it.
        #[source]
        source: Box<MeshError>,
    },

    /// A loop did not return to its start within the element count.
    #[error("{kind} {index}: cycle does not close")]
    BrokenCycle {
        /// What was being circulated ("face", "vertex").
        kind: &'static str,
        /// The raw index of the circulated element.
        index: usize,
    },

    /// A live face has fewer than three sides.
    #[error("face {face} has only {valence} sides")]
    DegenerateLoop {
        /// The face.
        face: usize,
        /// The number of halfedges in its loop.
        valence: usize,
    },

    /// A halfedge link is inconsistent.
    #[error("halfedge {halfedge}: {details}")]
    InconsistentLink {
        /// The halfedge.
        halfedge: usize,
        /// Description of the problem.
        details: String,
    },
}

impl MeshError {
    /// Create an out-of-range handle error.
    pub fn invalid_handle(kind: &'static str, index: usize) -> Self {
        MeshError::InvalidHandle { kind, index }
    }

    /// Create a deleted element error.
    pub fn deleted(kind: &'static str, index: usize) -> Self {
        MeshError::DeletedElement { kind, index }
    }

    /// Create an inconsistent link error.
    pub fn link<S: Into<String>>(halfedge: usize, details: S) -> Self {
        MeshError::InconsistentLink {
            halfedge,
            details: details.into(),
        }
    }
}
