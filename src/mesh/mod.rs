//! Core mesh data structures.
//!
//! This module provides the halfedge representation of polygonal meshes and
//! the topological operations on it.
//!
//! # Overview
//!
//! The primary type is [`PolyMesh`], which stores connectivity only: vertices,
//! paired halfedges, edges and faces of arbitrary size. Geometry and any other
//! per-element data live in [properties](PolyMesh::add_property).
//!
//! # Handles
//!
//! Mesh elements are identified by type-safe handles:
//! - [`VertexHandle`] - Identifies a vertex
//! - [`HalfedgeHandle`] - Identifies a halfedge
//! - [`EdgeHandle`] - Identifies a full edge (a halfedge pair)
//! - [`FaceHandle`] - Identifies a face
//!
//! These handles are generic over the underlying integer type ([`MeshIndex`]
//! trait), allowing you to choose `u16`, `u32`, or `u64` based on mesh size.
//! The maximum value of the integer is reserved as the invalid handle.
//!
//! # Deletion
//!
//! Deleting an element only sets its `DELETED` status bit. Handles stay
//! stable; iterators such as [`PolyMesh::faces`] skip deleted elements.
//!
//! # Construction
//!
//! Meshes are built with [`PolyMesh::add_face`] or from face-vertex lists:
//!
//! ```
//! use polyconn::mesh::{build_from_triangles, PolyMesh};
//!
//! let faces = vec![[0, 1, 2], [0, 2, 3]];
//! let mesh: PolyMesh = build_from_triangles(4, &faces).unwrap();
//! assert_eq!(mesh.num_edges(), 5);
//! ```

mod builder;
mod check;
mod circulator;
mod edit;
mod halfedge;
mod index;
mod options;
mod property;
mod status;

#[cfg(test)]
pub(crate) mod fixtures;

pub use builder::{
    build_from_polygons, build_from_quads, build_from_triangles, build_with_options,
    to_face_lists,
};
pub use circulator::{
    Circulator, LoopHalfedgeIter, VertexEdgeIter, VertexFaceIter, VertexHalfedgeIter,
    VertexVertexIter,
};
pub use halfedge::{Edge, Face, Halfedge, PolyMesh, Vertex};
pub use index::{EdgeHandle, FaceHandle, HalfedgeHandle, MeshIndex, VertexHandle};
pub use options::MeshOptions;
pub use property::{
    EdgeKind, EdgeProperty, Element, ElementKind, FaceKind, FaceProperty, HalfedgeKind,
    HalfedgeProperty, Property, PropertyKind, VertexKind, VertexProperty,
};
pub use status::StatusFlags;
