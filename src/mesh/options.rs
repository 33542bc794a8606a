//! Mesh configuration.

/// Options controlling how a [`PolyMesh`](super::PolyMesh) tracks its elements.
///
/// # Example
///
/// ```
/// use polyconn::mesh::{MeshOptions, PolyMesh};
///
/// let options = MeshOptions::default()
///     .with_halfedge_status(false)
///     .with_reserve(100, 300, 200);
/// let mesh: PolyMesh = PolyMesh::with_options(&options);
/// assert!(!mesh.has_halfedge_status());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshOptions {
    /// Whether halfedges get their deleted bit set alongside their edge.
    ///
    /// When off, only the edge status is authoritative for deleted halfedges.
    pub halfedge_status: bool,

    /// Number of vertices to reserve storage for.
    pub reserve_vertices: usize,

    /// Number of edges to reserve storage for (halfedges are twice this).
    pub reserve_edges: usize,

    /// Number of faces to reserve storage for.
    pub reserve_faces: usize,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            halfedge_status: true,
            reserve_vertices: 0,
            reserve_edges: 0,
            reserve_faces: 0,
        }
    }
}

impl MeshOptions {
    /// Enable or disable halfedge deletion flags.
    pub fn with_halfedge_status(mut self, enabled: bool) -> Self {
        self.halfedge_status = enabled;
        self
    }

    /// Reserve storage for the given element counts.
    pub fn with_reserve(mut self, vertices: usize, edges: usize, faces: usize) -> Self {
        self.reserve_vertices = vertices;
        self.reserve_edges = edges;
        self.reserve_faces = faces;
        self
    }

    /// Reserve storage for a triangle mesh with `num_vertices` vertices.
    ///
    /// Uses the Euler estimate for closed triangle meshes: F ≈ 2V, E ≈ 3V.
    pub fn for_triangle_mesh(num_vertices: usize) -> Self {
        Self::default().with_reserve(num_vertices, num_vertices * 3, num_vertices * 2)
    }
}
