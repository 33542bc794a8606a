//! # polyconn
//!
//! Halfedge connectivity for polygonal meshes.
//!
//! polyconn stores the topology of a polygon mesh (vertices, paired
//! halfedges, edges and faces of any size) and provides the local edits that
//! mesh processing is built from: face insertion, deletion, edge collapse,
//! edge removal and insertion, face and edge splits, and triangulation.
//! Geometry is left to the caller, usually as a vertex property.
//!
//! ## Features
//!
//! - **Halfedge data structure**: O(1) adjacency queries with type-safe handles
//! - **Flexible indexing**: Support for 16-bit, 32-bit, and 64-bit indices
//! - **Checked edits**: operations validate their preconditions and leave the
//!   mesh untouched on error
//! - **Custom properties**: typed per-element columns that follow the edits
//!
//! ## Building Meshes
//!
//! ```
//! use polyconn::prelude::*;
//!
//! let mut mesh: PolyMesh = PolyMesh::new();
//! let v: Vec<VertexHandle> = (0..4).map(|_| mesh.add_vertex()).collect();
//!
//! // A closed tetrahedron
//! mesh.add_face(&[v[0], v[2], v[1]]).unwrap();
//! mesh.add_face(&[v[0], v[1], v[3]]).unwrap();
//! mesh.add_face(&[v[1], v[2], v[3]]).unwrap();
//! mesh.add_face(&[v[2], v[0], v[3]]).unwrap();
//!
//! assert_eq!(mesh.num_edges(), 6);
//! assert!(mesh.vertices().all(|v| !mesh.is_boundary_vertex(v)));
//! ```
//!
//! ## Editing
//!
//! ```
//! use polyconn::prelude::*;
//!
//! let mut mesh: PolyMesh = build_from_quads(6, &[[0, 1, 2, 3], [1, 4, 5, 2]]).unwrap();
//!
//! // Merge the two quads into a hexagon and put the edge back.
//! let shared = mesh.find_halfedge(VertexHandle::new(1), VertexHandle::new(2)).edge();
//! let hexagon = mesh.remove_edge(shared).unwrap();
//! assert_eq!(mesh.valence_face(hexagon), 6);
//! mesh.reinsert_edge(shared).unwrap();
//!
//! mesh.triangulate_all();
//! assert!(mesh.is_triangle_mesh());
//! assert!(mesh.check().is_ok());
//! ```
//!
//! ## Mesh Traversal
//!
//! ```
//! use polyconn::prelude::*;
//!
//! # let mesh: PolyMesh = build_from_triangles(3, &[[0, 1, 2]]).unwrap();
//! // Iterate over neighbors of a vertex
//! let v = VertexHandle::new(0);
//! for neighbor in mesh.vertex_neighbors(v) {
//!     println!("Neighbor: {:?}", neighbor);
//! }
//!
//! // Get vertices of a face, in the order they were added
//! let f = FaceHandle::new(0);
//! let corners: Vec<_> = mesh.face_vertices(f).collect();
//! assert_eq!(corners.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use polyconn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_polygons, build_from_quads, build_from_triangles, to_face_lists, EdgeHandle,
        EdgeKind, FaceHandle, FaceKind, HalfedgeHandle, HalfedgeKind, MeshIndex, MeshOptions,
        PolyMesh, Property, StatusFlags, VertexHandle, VertexKind,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_tetrahedron() {
        let faces = [
            [0, 2, 1], // bottom
            [0, 1, 3], // front
            [1, 2, 3], // right
            [2, 0, 3], // left
        ];

        let mesh: PolyMesh = build_from_triangles(4, &faces).unwrap();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 4);
        // Closed mesh: every halfedge has a face
        assert_eq!(mesh.num_halfedges(), 12);
        assert!(mesh.halfedges().all(|h| !mesh.is_boundary_halfedge(h)));
        assert!(mesh.is_valid());

        // Check that it's a closed mesh (no boundary vertices)
        for v in mesh.vertices() {
            assert!(!mesh.is_boundary_vertex(v), "vertex {:?} should not be on boundary", v);
        }
    }
}
