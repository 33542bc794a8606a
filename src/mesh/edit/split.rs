//! Face and edge splits, and fan triangulation.

use log::{debug, trace};

use crate::error::{MeshError, Result};
use crate::mesh::halfedge::PolyMesh;
use crate::mesh::index::{EdgeHandle, FaceHandle, MeshIndex, VertexHandle};

impl<I: MeshIndex> PolyMesh<I> {
    /// Fan-triangulate a face from the start vertex of its reference halfedge.
    ///
    /// New faces copy the properties of `f`; new halfedges copy the ones of
    /// the halfedge preceding the reference halfedge. Triangles and faces
    /// that are not live are left alone.
    pub fn triangulate_face(&mut self, f: FaceHandle<I>) {
        if let Err(err) = self.require_face(f) {
            debug!("triangulate_face: {}", err);
            return;
        }
        let cuts = self.valence_face(f).saturating_sub(3);
        if let Err(err) = self.require_capacity(0, cuts, cuts) {
            debug!("triangulate_face {:?}: {}", f, err);
            return;
        }

        let mut base = self.face_halfedge(f);
        let start = self.from_vertex(base);
        let prev_heh = self.prev_halfedge(base);
        let mut next = self.next_halfedge(base);

        while self.to_vertex(self.next_halfedge(next)) != start {
            let next_next = self.next_halfedge(next);

            let new_f = self.new_face();
            self.set_face_halfedge(new_f, base);

            let new_heh = self.new_edge(self.to_vertex(next), start);
            self.set_next_halfedge(base, next);
            self.set_next_halfedge(next, new_heh);
            self.set_next_halfedge(new_heh, base);

            self.set_face(base, new_f);
            self.set_face(next, new_f);
            self.set_face(new_heh, new_f);

            self.copy_all_properties(prev_heh, new_heh);
            self.copy_all_properties(prev_heh, new_heh.opposite());
            self.copy_all_properties(f, new_f);
            trace!("triangulate {:?}: cut off {:?}", f, new_f);

            base = new_heh.opposite();
            next = next_next;
        }

        self.set_face_halfedge(f, base);
        self.set_next_halfedge(base, next);
        let last = self.next_halfedge(next);
        self.set_next_halfedge(last, base);
        self.set_face(base, f);
    }

    /// Triangulate every face that is live when the call starts.
    pub fn triangulate_all(&mut self) {
        let faces: Vec<_> = self.faces().collect();
        for f in faces {
            self.triangulate_face(f);
        }
    }

    /// Split `f` into a fan of triangles around the isolated vertex `v`.
    ///
    /// The original face keeps the triangle on its reference halfedge.
    pub fn split(&mut self, f: FaceHandle<I>, v: VertexHandle<I>) -> Result<()> {
        self.require_face(f)?;
        self.require_isolated(v)?;
        let n = self.valence_face(f);
        self.require_capacity(0, n, n - 1)?;

        let hend = self.face_halfedge(f);
        let mut hh = self.next_halfedge(hend);

        let mut hold = self.new_edge(self.to_vertex(hend), v);
        self.set_next_halfedge(hend, hold);
        self.set_face(hold, f);
        hold = hold.opposite();

        while hh != hend {
            let hnext = self.next_halfedge(hh);

            let fnew = self.new_face();
            self.set_face_halfedge(fnew, hh);

            let hnew = self.new_edge(self.to_vertex(hh), v);
            self.set_next_halfedge(hnew, hold);
            self.set_next_halfedge(hold, hh);
            self.set_next_halfedge(hh, hnew);

            self.set_face(hnew, fnew);
            self.set_face(hold, fnew);
            self.set_face(hh, fnew);

            hold = hnew.opposite();
            hh = hnext;
        }

        self.set_next_halfedge(hold, hend);
        let spoke = self.next_halfedge(hend);
        self.set_next_halfedge(spoke, hold);
        self.set_face(hold, f);
        self.set_vertex_halfedge(v, hold);
        trace!("split {:?} at {:?}", f, v);
        Ok(())
    }

    /// [`split`](Self::split), then copy the properties of `f` onto every
    /// face around `v`.
    pub fn split_copy(&mut self, f: FaceHandle<I>, v: VertexHandle<I>) -> Result<()> {
        self.split(f, v)?;
        let fan: Vec<_> = self.vertex_faces(v).collect();
        for nf in fan {
            if nf != f {
                self.copy_all_properties(f, nf);
            }
        }
        Ok(())
    }

    /// Insert the isolated vertex `v` in the middle of `e`.
    ///
    /// `halfedge(e, 0)` keeps pointing to its old target and now starts at
    /// `v`; the new edge runs from the old start vertex to `v`. The faces on
    /// either side gain one side each. A dangling edge becomes a path of two
    /// dangling edges.
    pub fn split_edge(&mut self, e: EdgeHandle<I>, v: VertexHandle<I>) -> Result<()> {
        self.require_edge(e)?;
        self.require_isolated(v)?;
        self.require_capacity(0, 1, 0)?;

        let h0 = e.halfedge(0);
        let h1 = e.halfedge(1);
        let vfrom = self.from_vertex(h0);

        let ph0 = self.prev_halfedge(h0);
        let nh1 = self.next_halfedge(h1);
        let f0 = self.face_handle(h0);
        let f1 = self.face_handle(h1);

        let new_e = self.new_edge(vfrom, v);
        let new_o = new_e.opposite();
        self.set_to_vertex(h1, v);

        self.set_next_halfedge(new_e, h0);
        self.set_next_halfedge(h1, new_o);
        if ph0 == h1 {
            // `vfrom` is the loose end of a dangling edge: the walk turns
            // around at it, now through the new edge.
            self.set_next_halfedge(new_o, new_e);
        } else {
            self.set_next_halfedge(ph0, new_e);
            self.set_next_halfedge(new_o, nh1);
        }

        self.set_face(new_e, f0);
        self.set_face(new_o, f1);

        self.set_vertex_halfedge(v, h0);
        self.adjust_outgoing_halfedge(v);

        if self.vertex_halfedge(vfrom) == h0 {
            self.set_vertex_halfedge(vfrom, new_e);
            self.adjust_outgoing_halfedge(vfrom);
        }
        trace!("split {:?} at {:?}, new {:?}", e, v, new_e.edge());
        Ok(())
    }

    /// [`split_edge`](Self::split_edge), then copy the properties of `e`
    /// onto the new edge.
    pub fn split_edge_copy(&mut self, e: EdgeHandle<I>, v: VertexHandle<I>) -> Result<()> {
        self.split_edge(e, v)?;
        let new_e = self.vertex_halfedges(v).map(|h| h.edge()).find(|&ne| ne != e);
        if let Some(new_e) = new_e {
            self.copy_all_properties(e, new_e);
        }
        Ok(())
    }

    fn require_isolated(&self, v: VertexHandle<I>) -> Result<()> {
        self.require_vertex(v)?;
        if !self.is_isolated(v) {
            debug!("{:?} is not isolated", v);
            return Err(MeshError::VertexNotIsolated { vertex: v.index() });
        }
        Ok(())
    }
}
