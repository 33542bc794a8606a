//! Edge removal, reinsertion and insertion.
//!
//! [`PolyMesh::remove_edge`] merges the two faces at an edge and
//! [`PolyMesh::reinsert_edge`] undoes exactly that, as long as nothing else
//! changed in between. Removal leaves the edge's own halfedge records
//! untouched, which is what makes the undo possible.

use log::{debug, trace};

use crate::error::{MeshError, Result};
use crate::mesh::halfedge::PolyMesh;
use crate::mesh::index::{EdgeHandle, FaceHandle, HalfedgeHandle, MeshIndex, VertexHandle};

impl<I: MeshIndex> PolyMesh<I> {
    /// Remove an edge and merge its two faces.
    ///
    /// The face of `halfedge(e, 1)` survives, unless that side is boundary.
    /// In that case the merged loop becomes a boundary loop and the invalid
    /// face handle is returned.
    ///
    /// # Errors
    ///
    /// [`MeshError::NotSimpleLink`] if the faces share another edge (or the
    /// edge has the boundary on both sides).
    pub fn remove_edge(&mut self, e: EdgeHandle<I>) -> Result<FaceHandle<I>> {
        self.require_edge(e)?;
        if !self.is_simple_link(e) {
            debug!("remove_edge: {:?} is not a simple link", e);
            return Err(MeshError::NotSimpleLink { edge: e.index() });
        }

        let heh0 = e.halfedge(1);
        let heh1 = e.halfedge(0);

        let mut rem = self.face_handle(heh0);
        let mut del = self.face_handle(heh1);
        if !del.is_valid() {
            std::mem::swap(&mut rem, &mut del);
        }
        debug_assert!(del.is_valid());

        let prev_heh0 = self.prev_halfedge(heh0);
        let prev_heh1 = self.prev_halfedge(heh1);
        let next_heh0 = self.next_halfedge(heh0);
        let next_heh1 = self.next_halfedge(heh1);
        trace!("remove_edge {:?}: keep {:?}, delete {:?}", e, rem, del);

        self.set_next_halfedge(prev_heh0, next_heh1);
        self.set_next_halfedge(prev_heh1, next_heh0);

        let vh0 = self.to_vertex(heh0);
        let vh1 = self.to_vertex(heh1);
        if self.vertex_halfedge(vh0) == heh1 {
            self.set_vertex_halfedge(vh0, next_heh0);
        }
        if self.vertex_halfedge(vh1) == heh0 {
            self.set_vertex_halfedge(vh1, next_heh1);
        }

        if rem.is_valid() {
            // Keep the reference halfedge starting at the same vertex.
            if self.face_halfedge(rem) == heh0 {
                self.set_face_halfedge(rem, prev_heh1);
            } else if self.face_halfedge(rem) == heh1 {
                self.set_face_halfedge(rem, prev_heh0);
            }
        }

        let merged: Vec<_> = self.halfedge_loop(next_heh0).collect();
        for &h in &merged {
            self.set_face(h, rem);
        }
        if !rem.is_valid() {
            for &h in &merged {
                self.adjust_outgoing_halfedge(self.to_vertex(h));
            }
        }

        self.mark_edge_deleted(e, true);
        self.face_status_mut(del).set_deleted(true);
        Ok(rem)
    }

    /// Undo [`remove_edge`](Self::remove_edge).
    ///
    /// The edge, the deleted face and all of their links are restored. This
    /// is only exact if nothing else was changed after the removal.
    ///
    /// # Errors
    ///
    /// [`MeshError::EdgeNotDeleted`] if the edge is live.
    pub fn reinsert_edge(&mut self, e: EdgeHandle<I>) -> Result<()> {
        if !self.is_valid_edge(e) {
            return Err(MeshError::invalid_handle("edge", e.index()));
        }
        if !self.is_deleted_edge(e) {
            debug!("reinsert_edge: {:?} is not deleted", e);
            return Err(MeshError::EdgeNotDeleted { edge: e.index() });
        }

        let h0 = e.halfedge(0);
        let h1 = e.halfedge(1);
        let f0 = self.face_handle(h0);
        let f1 = self.face_handle(h1);

        // The halfedge records still name the faces they had before removal.
        let (hd, hr) = if f0.is_valid() && self.is_deleted_face(f0) {
            (h0, h1)
        } else {
            (h1, h0)
        };
        let del = self.face_handle(hd);
        let rem = self.face_handle(hr);
        if !del.is_valid() || !self.is_deleted_face(del) {
            return Err(MeshError::link(hd.index(), "no removed face to restore"));
        }

        self.mark_edge_deleted(e, false);
        self.face_status_mut(del).set_deleted(false);

        let prev_h0 = self.prev_halfedge(h0);
        let prev_h1 = self.prev_halfedge(h1);
        let next_h0 = self.next_halfedge(h0);
        let next_h1 = self.next_halfedge(h1);
        self.set_next_halfedge(prev_h0, h0);
        self.set_next_halfedge(h0, next_h0);
        self.set_next_halfedge(prev_h1, h1);
        self.set_next_halfedge(h1, next_h1);
        trace!("reinsert_edge {:?}: restore {:?}", e, del);

        let start = self.face_halfedge(del);
        let restored: Vec<_> = self.halfedge_loop(start).collect();
        for h in restored {
            self.set_face(h, del);
        }

        if rem.is_valid() && self.face_handle(self.face_halfedge(rem)) == del {
            self.set_face_halfedge(rem, hr);
        }

        let touched: Vec<VertexHandle<I>> = self
            .halfedge_loop(h0)
            .chain(self.halfedge_loop(h1))
            .map(|h| self.to_vertex(h))
            .collect();
        for v in touched {
            self.adjust_outgoing_halfedge(v);
        }
        Ok(())
    }

    /// Insert an edge from `to(prev)` to `from(next)` splitting their loop.
    ///
    /// The new face takes the `prev -> new -> next` side; the old face (or
    /// boundary) keeps the other side. Returns the new halfedge that points
    /// to `from(next)`. The new halfedges copy the properties of `prev` and
    /// the new face those of the old one.
    ///
    /// # Errors
    ///
    /// - [`MeshError::NotInSameFace`] if the halfedges are in different loops
    /// - [`MeshError::AlreadyConsecutive`] if `next` already follows `prev`
    /// - [`MeshError::InsertWouldDegenerate`] if either new loop would have
    ///   only two sides
    pub fn insert_edge(
        &mut self,
        prev: HalfedgeHandle<I>,
        next: HalfedgeHandle<I>,
    ) -> Result<HalfedgeHandle<I>> {
        self.require_halfedge(prev)?;
        self.require_halfedge(next)?;
        if self.face_handle(prev) != self.face_handle(next)
            || !self.halfedge_loop(prev).any(|h| h == next)
        {
            debug!("insert_edge: {:?} and {:?} are in different loops", prev, next);
            return Err(MeshError::NotInSameFace {
                prev: prev.index(),
                next: next.index(),
            });
        }
        if self.next_halfedge(prev) == next {
            debug!("insert_edge: {:?} is already followed by {:?}", prev, next);
            return Err(MeshError::AlreadyConsecutive {
                prev: prev.index(),
                next: next.index(),
            });
        }

        // Both loops need at least three sides afterwards.
        let next_prev = self.next_halfedge(prev);
        if next == prev || self.next_halfedge(next_prev) == next {
            debug!("insert_edge: {:?} -> {:?} would leave a two-sided loop", prev, next);
            return Err(MeshError::InsertWouldDegenerate {
                prev: prev.index(),
                next: next.index(),
            });
        }
        self.require_capacity(0, 1, 1)?;

        let vh0 = self.to_vertex(prev);
        let vh1 = self.from_vertex(next);

        let heh0 = self.new_edge(vh0, vh1);
        let heh1 = heh0.opposite();

        let prev_next = self.prev_halfedge(next);
        self.set_next_halfedge(prev, heh0);
        self.set_next_halfedge(heh0, next);
        self.set_next_halfedge(prev_next, heh1);
        self.set_next_halfedge(heh1, next_prev);

        let new_f = self.new_face();
        self.set_face_halfedge(new_f, heh0);
        let side: Vec<_> = self.halfedge_loop(heh0).collect();
        for &h in &side {
            self.set_face(h, new_f);
        }

        let old_f = self.face_handle(next_prev);
        self.set_face(heh1, old_f);
        if old_f.is_valid() && self.face_handle(self.face_halfedge(old_f)) == new_f {
            self.set_face_halfedge(old_f, heh1);
        }

        self.copy_all_properties(prev, heh0);
        self.copy_all_properties(prev, heh1);
        if old_f.is_valid() {
            self.copy_all_properties(old_f, new_f);
        }

        // On a boundary loop the new face covers outgoing boundary
        // halfedges of every vertex on its side.
        for h in side {
            self.adjust_outgoing_halfedge(self.to_vertex(h));
        }
        Ok(heh0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::fixtures::{grid_quads, grid_triangles, two_triangles, unit_quad, Snapshot};
    use crate::mesh::property::{FaceKind, HalfedgeKind};

    #[test]
    fn test_remove_shared_edge() {
        let (mut mesh, v, faces) = two_triangles();
        let e = mesh.find_halfedge(v[0], v[1]).edge();

        let kept = mesh.remove_edge(e).unwrap();
        assert!(faces.contains(&kept));
        assert_eq!(mesh.num_live_faces(), 1);
        assert_eq!(mesh.valence_face(kept), 4);
        assert!(mesh.is_deleted_edge(e));
        assert!(mesh.is_valid());

        let mut around: Vec<usize> = mesh.face_vertices(kept).map(|v| v.index()).collect();
        around.sort_unstable();
        assert_eq!(around, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_remove_then_reinsert_restores_links() {
        let mut mesh: PolyMesh = grid_quads(3);
        let e = mesh
            .edges()
            .find(|&e| !mesh.is_boundary_edge(e))
            .unwrap();
        let before = Snapshot::of(&mesh);

        mesh.remove_edge(e).unwrap();
        assert!(mesh.is_valid());
        assert_ne!(Snapshot::of(&mesh), before);

        mesh.reinsert_edge(e).unwrap();
        assert!(mesh.is_valid());
        assert!(Snapshot::of(&mesh).same_links(&before));
    }

    #[test]
    fn test_round_trip_on_every_interior_edge() {
        let mesh: PolyMesh = grid_triangles(3);
        for e in mesh.edges() {
            if mesh.is_boundary_edge(e) || !mesh.is_simple_link(e) {
                continue;
            }
            let mut copy = mesh.clone();
            let before = Snapshot::of(&copy);
            copy.remove_edge(e).unwrap();
            copy.reinsert_edge(e).unwrap();
            assert!(Snapshot::of(&copy).same_links(&before), "edge {:?}", e);
            assert!(copy.is_valid());
        }
    }

    #[test]
    fn test_remove_boundary_edge_opens_face() {
        let mut mesh: PolyMesh = grid_quads(3);
        // Corner quads touch the boundary twice, so this is a side quad.
        let e = mesh
            .edges()
            .find(|&e| mesh.is_boundary_edge(e) && mesh.is_simple_link(e))
            .unwrap();

        let kept = mesh.remove_edge(e).unwrap();
        assert!(!kept.is_valid());
        assert_eq!(mesh.num_live_faces(), 8);
        assert!(mesh.is_valid());

        let before_reinsert = mesh.num_live_faces();
        mesh.reinsert_edge(e).unwrap();
        assert_eq!(mesh.num_live_faces(), before_reinsert + 1);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_remove_non_simple_link_fails() {
        let (mut mesh, v, _) = two_triangles();
        let e = mesh.find_halfedge(v[1], v[2]).edge();
        let before = Snapshot::of(&mesh);
        assert_eq!(
            mesh.remove_edge(e),
            Err(MeshError::NotSimpleLink { edge: e.index() })
        );
        assert_eq!(Snapshot::of(&mesh), before);
    }

    #[test]
    fn test_reinsert_live_edge_fails() {
        let (mut mesh, v, _) = two_triangles();
        let e = mesh.find_halfedge(v[0], v[1]).edge();
        assert_eq!(
            mesh.reinsert_edge(e),
            Err(MeshError::EdgeNotDeleted { edge: e.index() })
        );
    }

    #[test]
    fn test_insert_diagonal_into_quad() {
        let (mut mesh, v, f) = unit_quad();
        let prev = mesh.find_halfedge(v[0], v[1]);
        let next = mesh.find_halfedge(v[3], v[0]);

        let h = mesh.insert_edge(prev, next).unwrap();
        assert_eq!(mesh.from_vertex(h), v[1]);
        assert_eq!(mesh.to_vertex(h), v[3]);
        assert_eq!(mesh.num_live_faces(), 2);
        assert_eq!(mesh.face_handle(h.opposite()), f);
        assert_eq!(mesh.valence_face(f), 3);
        assert_eq!(mesh.valence_face(mesh.face_handle(h)), 3);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_insert_edge_rejects_bad_pairs() {
        let (mut mesh, v, _) = unit_quad();
        let h01 = mesh.find_halfedge(v[0], v[1]);
        let h12 = mesh.find_halfedge(v[1], v[2]);
        assert_eq!(
            mesh.insert_edge(h01, h12),
            Err(MeshError::AlreadyConsecutive {
                prev: h01.index(),
                next: h12.index()
            })
        );

        let outside = h12.opposite();
        assert!(matches!(
            mesh.insert_edge(h01, outside),
            Err(MeshError::NotInSameFace { .. })
        ));
        assert_eq!(mesh.num_edges(), 4);
    }

    #[test]
    fn test_insert_then_remove_is_identity_on_faces() {
        let (mut mesh, v, f) = unit_quad();
        let prev = mesh.find_halfedge(v[1], v[2]);
        let next = mesh.find_halfedge(v[0], v[1]);

        let h = mesh.insert_edge(prev, next).unwrap();
        assert!(mesh.is_valid());

        let kept = mesh.remove_edge(h.edge()).unwrap();
        assert_eq!(kept, f);
        assert_eq!(mesh.num_live_faces(), 1);
        assert_eq!(mesh.valence_face(f), 4);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_insert_edge_into_boundary_loop() {
        let mut mesh: PolyMesh = grid_quads(2);
        let prev = mesh.vertex_halfedge(VertexHandle::new(0));
        assert!(mesh.is_boundary_halfedge(prev));
        let n1 = mesh.next_halfedge(prev);
        let n2 = mesh.next_halfedge(n1);
        let next = mesh.next_halfedge(n2);

        let h = mesh.insert_edge(prev, next).unwrap();

        // The new face closes the outer loop except for a triangular hole.
        let f = mesh.face_handle(h);
        assert!(f.is_valid());
        assert_eq!(mesh.num_live_faces(), 5);
        assert_eq!(mesh.valence_face(f), 7);
        assert!(mesh.is_boundary_halfedge(h.opposite()));
        assert_eq!(mesh.next_halfedge(h.opposite()), n1);
        let boundary: Vec<_> = mesh.vertices().filter(|&v| mesh.is_boundary_vertex(v)).collect();
        assert_eq!(boundary.len(), 3);
        for v in boundary {
            assert!(mesh.is_boundary_halfedge(mesh.vertex_halfedge(v)), "{:?}", v);
        }
        mesh.check().unwrap();
    }

    #[test]
    fn test_insert_edge_copies_properties() {
        let (mut mesh, v, f) = unit_quad();
        let uv = mesh.add_property::<HalfedgeKind, u32>(0);
        let group = mesh.add_property::<FaceKind, u32>(0);
        let prev = mesh.find_halfedge(v[0], v[1]);
        let next = mesh.find_halfedge(v[3], v[0]);
        assert!(mesh.set_property(uv, prev, 9));
        assert!(mesh.set_property(group, f, 5));

        let h = mesh.insert_edge(prev, next).unwrap();

        assert_eq!(mesh.property(uv, h), Some(&9));
        assert_eq!(mesh.property(uv, h.opposite()), Some(&9));
        assert_eq!(mesh.property(group, mesh.face_handle(h)), Some(&5));
        assert_eq!(mesh.property(group, f), Some(&5));
    }

    #[test]
    fn test_insert_edge_rejects_two_sided_loops() {
        let (mut mesh, v, _) = unit_quad();
        let h01 = mesh.find_halfedge(v[0], v[1]);
        let h23 = mesh.find_halfedge(v[2], v[3]);
        let before = Snapshot::of(&mesh);

        // v1 -> v2 would run parallel to the existing side.
        assert_eq!(
            mesh.insert_edge(h01, h23),
            Err(MeshError::InsertWouldDegenerate {
                prev: h01.index(),
                next: h23.index()
            })
        );
        assert_eq!(
            mesh.insert_edge(h01, h01),
            Err(MeshError::InsertWouldDegenerate {
                prev: h01.index(),
                next: h01.index()
            })
        );
        assert_eq!(Snapshot::of(&mesh), before);
    }
}

