//! Halfedge collapse.
//!
//! Collapsing `h` moves everything attached to its from-vertex onto its
//! to-vertex and removes the edge. Side faces that shrink to two sides are
//! removed afterwards.

use std::collections::HashSet;

use log::{debug, trace};

use crate::error::{MeshError, Result};
use crate::mesh::halfedge::PolyMesh;
use crate::mesh::index::{FaceHandle, HalfedgeHandle, MeshIndex};

impl<I: MeshIndex> PolyMesh<I> {
    /// Check whether collapsing `v0v1` keeps the topology intact.
    ///
    /// The from-vertex `v0` would be merged into the to-vertex `v1`. The
    /// collapse is refused when:
    ///
    /// - the edge or one of its vertices is deleted
    /// - the edge has no face on either side
    /// - the apex vertices of the two triangular side faces coincide
    /// - both vertices are on the boundary but the edge is not
    /// - the one-rings of `v0` and `v1` share a vertex other than the apex
    ///   of a triangular side face
    /// - a triangular side face has both outer edges on the same non-triangle
    ///   face, which would degenerate
    pub fn is_collapse_ok(&self, v0v1: HalfedgeHandle<I>) -> bool {
        if !self.is_valid_halfedge(v0v1) || self.is_deleted_edge(v0v1.edge()) {
            return false;
        }
        let v1v0 = v0v1.opposite();
        let v0 = self.to_vertex(v1v0);
        let v1 = self.to_vertex(v0v1);
        if self.is_deleted_vertex(v0) || self.is_deleted_vertex(v1) {
            return false;
        }
        if self.is_boundary_halfedge(v0v1) && self.is_boundary_halfedge(v1v0) {
            trace!("collapse {:?}: edge has no face", v0v1);
            return false;
        }

        let is_triangle = |h: HalfedgeHandle<I>| {
            !self.is_boundary_halfedge(h) && self.valence_face(self.face_handle(h)) == 3
        };
        let v0v1_triangle = is_triangle(v0v1);
        let v1v0_triangle = is_triangle(v1v0);

        let vl = if v0v1_triangle {
            self.to_vertex(self.next_halfedge(v0v1))
        } else {
            Default::default()
        };
        let vr = if v1v0_triangle {
            self.to_vertex(self.next_halfedge(v1v0))
        } else {
            Default::default()
        };
        if vl.is_valid() && vl == vr {
            trace!("collapse {:?}: apex vertices coincide", v0v1);
            return false;
        }

        if self.is_boundary_vertex(v0)
            && self.is_boundary_vertex(v1)
            && !self.is_boundary_halfedge(v0v1)
            && !self.is_boundary_halfedge(v1v0)
        {
            trace!("collapse {:?}: interior edge joins two boundaries", v0v1);
            return false;
        }

        let ring1: HashSet<_> = self.vertex_neighbors(v1).collect();
        for nb in self.vertex_neighbors(v0) {
            if !ring1.contains(&nb) {
                continue;
            }
            let is_apex = (v0v1_triangle && nb == vl) || (v1v0_triangle && nb == vr);
            if !is_apex {
                trace!("collapse {:?}: one-rings share {:?}", v0v1, nb);
                return false;
            }
        }

        for (h, triangle) in [(v0v1, v0v1_triangle), (v1v0, v1v0_triangle)] {
            if !triangle {
                continue;
            }
            let one = self.next_halfedge(h).opposite();
            let two = self.next_halfedge(self.next_halfedge(h)).opposite();
            let f = self.face_handle(one);
            if f.is_valid() && f == self.face_handle(two) && self.valence_face(f) != 3 {
                trace!("collapse {:?}: face {:?} behind the side face would degenerate", v0v1, f);
                return false;
            }
        }

        true
    }

    /// Collapse `h`, merging its from-vertex into its to-vertex.
    ///
    /// No checks are made; call [`is_collapse_ok`](Self::is_collapse_ok)
    /// first or use [`try_collapse`](Self::try_collapse).
    ///
    /// When both sides shrink to two-sided loops (an isolated triangle), the
    /// triangle's face is deleted and a single edge without faces is left.
    pub fn collapse(&mut self, h: HalfedgeHandle<I>) {
        let h1 = self.next_halfedge(h);
        let mut o1 = self.next_halfedge(h.opposite());

        self.collapse_edge(h);

        if self.next_halfedge(self.next_halfedge(h1)) == h1 {
            let h0 = self.next_halfedge(h1);
            if h0 == h1.opposite() {
                self.drop_edge_loop_face(h1);
            } else {
                self.collapse_loop(h0);
                // h1 now stands in for the halfedge the loop removed.
                if o1 == h0.opposite() {
                    o1 = h1;
                }
            }
        }
        if self.next_halfedge(self.next_halfedge(o1)) == o1 {
            if self.next_halfedge(o1) == o1.opposite() {
                self.drop_edge_loop_face(o1);
            } else {
                self.collapse_loop(o1);
            }
        }
    }

    /// Delete the face of a loop made of the two halfedges of one edge.
    ///
    /// The edge stays, with no face on either side.
    fn drop_edge_loop_face(&mut self, h: HalfedgeHandle<I>) {
        let f = self.face_handle(h);
        if !f.is_valid() {
            return;
        }
        trace!("collapse: face {:?} shrank onto a single edge", f);
        self.set_face(h, FaceHandle::invalid());
        self.set_face(h.opposite(), FaceHandle::invalid());
        self.set_face_halfedge(f, HalfedgeHandle::invalid());
        self.face_status_mut(f).set_deleted(true);

        let (a, b) = (self.to_vertex(h), self.to_vertex(h.opposite()));
        self.adjust_outgoing_halfedge(a);
        self.adjust_outgoing_halfedge(b);
    }

    /// Collapse `h` if [`is_collapse_ok`](Self::is_collapse_ok) allows it.
    pub fn try_collapse(&mut self, h: HalfedgeHandle<I>) -> Result<()> {
        if !self.is_collapse_ok(h) {
            debug!("collapse of {:?} refused", h);
            return Err(MeshError::CollapseNotAllowed {
                halfedge: h.index(),
            });
        }
        self.collapse(h);
        Ok(())
    }

    /// Remove the edge of `h` and merge its from-vertex into its to-vertex.
    ///
    /// Side faces keep their remaining halfedges, so a triangle becomes a
    /// two-sided loop; [`collapse`](Self::collapse) cleans those up.
    pub fn collapse_edge(&mut self, h: HalfedgeHandle<I>) {
        let hn = self.next_halfedge(h);
        let hp = self.prev_halfedge(h);

        let o = h.opposite();
        let on = self.next_halfedge(o);
        let op = self.prev_halfedge(o);

        let fh = self.face_handle(h);
        let fo = self.face_handle(o);

        let vh = self.to_vertex(h);
        let vo = self.to_vertex(o);
        trace!("collapse_edge {:?}: {:?} into {:?}", h, vo, vh);

        let incoming: Vec<_> = self.vertex_incoming_halfedges(vo).collect();
        for ih in incoming {
            self.set_to_vertex(ih, vh);
        }

        self.set_next_halfedge(hp, hn);
        self.set_next_halfedge(op, on);

        if fh.is_valid() {
            self.set_face_halfedge(fh, hn);
        }
        if fo.is_valid() {
            self.set_face_halfedge(fo, on);
        }

        if self.vertex_halfedge(vh) == o {
            self.set_vertex_halfedge(vh, hn);
        }
        self.adjust_outgoing_halfedge(vh);
        self.set_isolated(vo);

        self.mark_edge_deleted(h.edge(), true);
        self.vertex_status_mut(vo).set_deleted(true);
    }

    /// Remove the two-halfedge loop `h`, `next(h)`.
    ///
    /// The edge of `h` and the loop's face (if any) are deleted; `next(h)`
    /// takes the place of `opposite(h)`.
    pub fn collapse_loop(&mut self, h: HalfedgeHandle<I>) {
        let h0 = h;
        let h1 = self.next_halfedge(h0);

        let o0 = h0.opposite();
        let o1 = h1.opposite();

        let v0 = self.to_vertex(h0);
        let v1 = self.to_vertex(h1);

        let fh = self.face_handle(h0);
        let fo = self.face_handle(o0);
        debug_assert!(self.next_halfedge(h1) == h0 && h1 != o0);
        trace!("collapse_loop {:?}", h0);

        let o0_next = self.next_halfedge(o0);
        let o0_prev = self.prev_halfedge(o0);
        self.set_next_halfedge(h1, o0_next);
        self.set_next_halfedge(o0_prev, h1);
        self.set_face(h1, fo);

        self.set_vertex_halfedge(v0, h1);
        self.adjust_outgoing_halfedge(v0);
        self.set_vertex_halfedge(v1, o1);
        self.adjust_outgoing_halfedge(v1);

        if fo.is_valid() && self.face_halfedge(fo) == o0 {
            self.set_face_halfedge(fo, h1);
        }

        if fh.is_valid() {
            self.set_face_halfedge(fh, HalfedgeHandle::invalid());
            self.face_status_mut(fh).set_deleted(true);
        }
        self.mark_edge_deleted(h0.edge(), true);
    }
}
