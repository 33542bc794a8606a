//! Topological edits on [`PolyMesh`](super::PolyMesh).
//!
//! Every operation keeps the connectivity invariants checked by
//! [`PolyMesh::check`](super::PolyMesh::check). Operations that can fail
//! validate first and return an error before touching the mesh.

mod add_face;
mod collapse;
mod delete;
mod edge;
mod split;
