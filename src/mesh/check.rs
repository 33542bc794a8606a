//! Topology consistency checks.
//!
//! Every walk here is bounded by the number of halfedges, so a corrupted mesh
//! produces an error instead of an endless loop.

use super::halfedge::PolyMesh;
use super::index::{FaceHandle, HalfedgeHandle, MeshIndex, VertexHandle};
use crate::error::{MeshError, Result};

impl<I: MeshIndex> PolyMesh<I> {
    /// Check if the connectivity of all live elements is consistent.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Verify the connectivity of all live elements.
    ///
    /// Returns the first problem found.
    pub fn check(&self) -> Result<()> {
        for h in self.halfedges() {
            self.check_halfedge(h)?;
        }
        for f in self.faces() {
            self.check_face(f)?;
        }
        for v in self.vertices() {
            self.check_vertex(v)?;
        }
        Ok(())
    }

    fn check_halfedge(&self, h: HalfedgeHandle<I>) -> Result<()> {
        let link = |details: String| Err(MeshError::link(h.index(), details));

        if self.is_deleted_halfedge(h) {
            return link("halfedge of a live edge is flagged deleted".to_string());
        }

        let v = self.to_vertex(h);
        if !self.is_valid_vertex(v) || self.is_deleted_vertex(v) {
            return link(format!("points to dead vertex {:?}", v));
        }

        let next = self.next_halfedge(h);
        let prev = self.prev_halfedge(h);
        if !self.is_valid_halfedge(next) || self.is_deleted_halfedge(next) {
            return link(format!("next {:?} is not a live halfedge", next));
        }
        if !self.is_valid_halfedge(prev) || self.is_deleted_halfedge(prev) {
            return link(format!("prev {:?} is not a live halfedge", prev));
        }
        if self.prev_halfedge(next) != h {
            return link(format!("prev(next) is {:?}", self.prev_halfedge(next)));
        }
        if self.from_vertex(next) != v {
            return link(format!(
                "next {:?} starts at {:?}, not at {:?}",
                next,
                self.from_vertex(next),
                v
            ));
        }

        let f = self.face_handle(h);
        if f.is_valid() && (!self.is_valid_face(f) || self.is_deleted_face(f)) {
            return link(format!("belongs to dead face {:?}", f));
        }
        if self.face_handle(next) != f {
            return link(format!(
                "face {:?} differs from face {:?} of next",
                f,
                self.face_handle(next)
            ));
        }
        Ok(())
    }

    fn check_face(&self, f: FaceHandle<I>) -> Result<()> {
        let start = self.face_halfedge(f);
        if !self.is_valid_halfedge(start) || self.is_deleted_halfedge(start) {
            return Err(MeshError::BrokenCycle {
                kind: "face",
                index: f.index(),
            });
        }

        let mut h = start;
        for valence in 1..=self.num_halfedges() + 1 {
            if self.face_handle(h) != f {
                return Err(MeshError::link(
                    h.index(),
                    format!("lies in the loop of {:?} but has face {:?}", f, self.face_handle(h)),
                ));
            }
            h = self.next_halfedge(h);
            if h == start {
                if valence < 3 {
                    return Err(MeshError::DegenerateLoop {
                        face: f.index(),
                        valence,
                    });
                }
                return Ok(());
            }
        }
        Err(MeshError::BrokenCycle {
            kind: "face",
            index: f.index(),
        })
    }

    fn check_vertex(&self, v: VertexHandle<I>) -> Result<()> {
        let start = self.vertex_halfedge(v);
        if !start.is_valid() {
            return Ok(());
        }
        if !self.is_valid_halfedge(start) || self.is_deleted_halfedge(start) {
            return Err(MeshError::BrokenCycle {
                kind: "vertex",
                index: v.index(),
            });
        }

        let mut h = start;
        let mut saw_boundary = false;
        for _ in 0..=self.num_halfedges() {
            if self.from_vertex(h) != v {
                return Err(MeshError::link(
                    h.index(),
                    format!("in the ring of {:?} but starts at {:?}", v, self.from_vertex(h)),
                ));
            }
            saw_boundary |= self.is_boundary_halfedge(h);
            h = self.next_halfedge(h.opposite());
            if h == start {
                if saw_boundary && !self.is_boundary_halfedge(start) {
                    return Err(MeshError::link(
                        start.index(),
                        format!("outgoing halfedge of boundary vertex {:?} is not boundary", v),
                    ));
                }
                return Ok(());
            }
        }
        Err(MeshError::BrokenCycle {
            kind: "vertex",
            index: v.index(),
        })
    }
}
