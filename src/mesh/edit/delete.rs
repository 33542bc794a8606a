//! Deletion of faces, edges and vertices.
//!
//! Deleted elements keep their slots and only get the `DELETED` bit; the
//! surrounding loops are re-linked so that no live element refers to them.

use log::{debug, trace};

use crate::error::Result;
use crate::mesh::halfedge::PolyMesh;
use crate::mesh::index::{EdgeHandle, FaceHandle, MeshIndex, VertexHandle};

impl<I: MeshIndex> PolyMesh<I> {
    /// Delete a face.
    ///
    /// Its halfedges become boundary. Edges that end up with no face on
    /// either side are deleted as well, and vertices left without any edge
    /// are isolated (and deleted when `delete_isolated_vertices` is set).
    pub fn delete_face(&mut self, f: FaceHandle<I>, delete_isolated_vertices: bool) -> Result<()> {
        if let Err(err) = self.require_face(f) {
            debug!("delete_face: {}", err);
            return Err(err);
        }

        self.face_status_mut(f).set_deleted(true);

        let loop_halfedges: Vec<_> = self.face_halfedges(f).collect();
        let mut dead_edges = Vec::new();
        let mut touched = Vec::with_capacity(loop_halfedges.len());
        for h in loop_halfedges {
            self.set_face(h, FaceHandle::invalid());
            if self.is_boundary_halfedge(h.opposite()) {
                dead_edges.push(h.edge());
            }
            touched.push(self.to_vertex(h));
        }

        for e in dead_edges {
            self.unlink_edge(e, delete_isolated_vertices);
        }

        for v in touched {
            self.adjust_outgoing_halfedge(v);
        }
        Ok(())
    }

    /// Delete an edge together with its incident faces.
    ///
    /// An edge without faces is cut out of its boundary loop directly.
    pub fn delete_edge(&mut self, e: EdgeHandle<I>, delete_isolated_vertices: bool) -> Result<()> {
        if let Err(err) = self.require_edge(e) {
            debug!("delete_edge: {}", err);
            return Err(err);
        }

        let f0 = self.face_handle(e.halfedge(0));
        let f1 = self.face_handle(e.halfedge(1));
        if f0.is_valid() {
            self.delete_face(f0, delete_isolated_vertices)?;
        }
        if f1.is_valid() && f1 != f0 {
            self.delete_face(f1, delete_isolated_vertices)?;
        }
        if !f0.is_valid() && !f1.is_valid() {
            self.unlink_edge(e, delete_isolated_vertices);
            let (v0, v1) = (self.to_vertex(e.halfedge(0)), self.to_vertex(e.halfedge(1)));
            self.adjust_outgoing_halfedge(v0);
            self.adjust_outgoing_halfedge(v1);
        }
        Ok(())
    }

    /// Delete a vertex with all incident faces and edges.
    ///
    /// Neighbors left without any edge are deleted too when
    /// `delete_isolated_vertices` is set; the vertex itself always is.
    pub fn delete_vertex(&mut self, v: VertexHandle<I>, delete_isolated_vertices: bool) -> Result<()> {
        if let Err(err) = self.require_vertex(v) {
            debug!("delete_vertex: {}", err);
            return Err(err);
        }

        let faces: Vec<_> = self.vertex_faces(v).collect();
        for f in faces {
            if !self.is_deleted_face(f) {
                self.delete_face(f, delete_isolated_vertices)?;
            }
        }

        // Edges without faces survive face deletion.
        let dangling: Vec<_> = self.vertex_edges(v).collect();
        for e in dangling {
            self.unlink_edge(e, delete_isolated_vertices);
            let other = if self.to_vertex(e.halfedge(0)) == v {
                self.to_vertex(e.halfedge(1))
            } else {
                self.to_vertex(e.halfedge(0))
            };
            self.adjust_outgoing_halfedge(other);
        }

        self.set_isolated(v);
        self.vertex_status_mut(v).set_deleted(true);
        Ok(())
    }

    /// Cut a faceless edge out of its loops and flag it deleted.
    ///
    /// Endpoints left without edges are isolated.
    fn unlink_edge(&mut self, e: EdgeHandle<I>, delete_isolated_vertices: bool) {
        let h0 = e.halfedge(0);
        let h1 = e.halfedge(1);
        debug_assert!(self.is_boundary_halfedge(h0) && self.is_boundary_halfedge(h1));

        let v0 = self.to_vertex(h0);
        let v1 = self.to_vertex(h1);
        let (next0, prev0) = (self.next_halfedge(h0), self.prev_halfedge(h0));
        let (next1, prev1) = (self.next_halfedge(h1), self.prev_halfedge(h1));

        trace!("unlink {:?}: {:?} -> {:?}, {:?} -> {:?}", e, prev0, next1, prev1, next0);
        self.set_next_halfedge(prev0, next1);
        self.set_next_halfedge(prev1, next0);
        self.mark_edge_deleted(e, true);

        if self.vertex_halfedge(v0) == h1 {
            if next0 == h1 {
                self.isolate(v0, delete_isolated_vertices);
            } else {
                self.set_vertex_halfedge(v0, next0);
            }
        }
        if self.vertex_halfedge(v1) == h0 {
            if next1 == h0 {
                self.isolate(v1, delete_isolated_vertices);
            } else {
                self.set_vertex_halfedge(v1, next1);
            }
        }
    }

    fn isolate(&mut self, v: VertexHandle<I>, delete: bool) {
        if delete {
            self.vertex_status_mut(v).set_deleted(true);
        }
        self.set_isolated(v);
    }
}
