//! Face insertion.
//!
//! Adding a face next to existing ones may require moving whole fans of
//! faces ("patches") around a vertex so that the new face's halfedges end up
//! consecutive in the boundary loop. All `next` links are computed first and
//! applied in one batch at the end, so nothing reads a half-updated loop.

use log::{debug, trace};

use crate::error::{MeshError, Result};
use crate::mesh::halfedge::PolyMesh;
use crate::mesh::index::{FaceHandle, HalfedgeHandle, MeshIndex, VertexHandle};

/// Per-side bookkeeping of a face being added.
#[derive(Debug, Clone, Copy)]
struct Side<I: MeshIndex> {
    halfedge: HalfedgeHandle<I>,
    is_new: bool,
    needs_adjust: bool,
}

impl<I: MeshIndex> PolyMesh<I> {
    /// Add a face bounded by `vertices` in order.
    ///
    /// The face is oriented so that walking its halfedges visits the vertices
    /// in the given order. Existing boundary edges between consecutive
    /// vertices are reused; missing ones are created.
    ///
    /// # Errors
    ///
    /// - [`MeshError::DegenerateFace`] for fewer than three or repeated vertices
    /// - [`MeshError::InvalidHandle`] / [`MeshError::DeletedElement`] for bad vertices
    /// - [`MeshError::ComplexVertex`] if a vertex is already surrounded by faces
    /// - [`MeshError::ComplexEdge`] if a directed edge already has a face
    /// - [`MeshError::PatchRelinkingFailed`] if no free gap is left to move a
    ///   fan into
    /// - [`MeshError::CapacityExceeded`] if the index type has no handles left
    ///
    /// On error the mesh is unchanged.
    pub fn add_face(&mut self, vertices: &[VertexHandle<I>]) -> Result<FaceHandle<I>> {
        let n = vertices.len();
        if n < 3 {
            debug!("add_face: {} vertices is degenerate", n);
            return Err(MeshError::DegenerateFace { len: n });
        }
        for (i, &v) in vertices.iter().enumerate() {
            self.require_vertex(v)?;
            if vertices[i + 1..].contains(&v) {
                debug!("add_face: vertex {:?} appears twice", v);
                return Err(MeshError::DegenerateFace { len: n });
            }
        }

        let mut sides: Vec<Side<I>> = Vec::with_capacity(n);
        for i in 0..n {
            let (from, to) = (vertices[i], vertices[(i + 1) % n]);
            if !self.is_boundary_vertex(from) {
                debug!("add_face: complex vertex {:?}", from);
                return Err(MeshError::ComplexVertex {
                    vertex: from.index(),
                });
            }

            let h = self.find_halfedge(from, to);
            if h.is_valid() && !self.is_boundary_halfedge(h) {
                debug!("add_face: complex edge {:?} -> {:?}", from, to);
                return Err(MeshError::ComplexEdge {
                    from: from.index(),
                    to: to.index(),
                });
            }
            sides.push(Side {
                halfedge: h,
                is_new: !h.is_valid(),
                needs_adjust: false,
            });
        }

        let mut relinks: Vec<(HalfedgeHandle<I>, HalfedgeHandle<I>)> = Vec::with_capacity(3 * n);

        // Existing consecutive sides must be consecutive in their boundary
        // loop; otherwise move the fan between them into another gap.
        for i in 0..n {
            let ii = (i + 1) % n;
            if sides[i].is_new || sides[ii].is_new {
                continue;
            }
            let inner_prev = sides[i].halfedge;
            let inner_next = sides[ii].halfedge;
            if self.next_halfedge(inner_prev) == inner_next {
                continue;
            }

            let mut boundary_prev = inner_next.opposite();
            loop {
                boundary_prev = self.next_halfedge(boundary_prev).opposite();
                if self.is_boundary_halfedge(boundary_prev) {
                    break;
                }
            }
            if boundary_prev == inner_prev {
                debug!(
                    "add_face: patch re-linking failed at {:?}",
                    vertices[ii]
                );
                return Err(MeshError::PatchRelinkingFailed {
                    from: inner_prev.index(),
                    to: inner_next.index(),
                });
            }
            let boundary_next = self.next_halfedge(boundary_prev);
            let patch_start = self.next_halfedge(inner_prev);
            let patch_end = self.prev_halfedge(inner_next);
            trace!(
                "add_face: moving patch {:?}..{:?} between {:?} and {:?}",
                patch_start,
                patch_end,
                boundary_prev,
                boundary_next
            );

            relinks.push((boundary_prev, patch_start));
            relinks.push((patch_end, boundary_next));
            relinks.push((inner_prev, inner_next));
        }

        let new_edges = sides.iter().filter(|side| side.is_new).count();
        self.require_capacity(0, new_edges, 1)?;

        // Nothing below can fail.
        for i in 0..n {
            if sides[i].is_new {
                sides[i].halfedge = self.new_edge(vertices[i], vertices[(i + 1) % n]);
            }
        }

        let f = self.new_face();
        self.set_face_halfedge(f, sides[n - 1].halfedge);

        for i in 0..n {
            let ii = (i + 1) % n;
            let v = vertices[ii];
            let inner_prev = sides[i].halfedge;
            let inner_next = sides[ii].halfedge;

            let corner = (sides[i].is_new as u8) | ((sides[ii].is_new as u8) << 1);
            if corner != 0 {
                let outer_prev = inner_next.opposite();
                let outer_next = inner_prev.opposite();

                match corner {
                    // Incoming side is new, outgoing side existed.
                    1 => {
                        let boundary_prev = self.prev_halfedge(inner_next);
                        relinks.push((boundary_prev, outer_next));
                        self.set_vertex_halfedge(v, outer_next);
                    }
                    // Outgoing side is new, incoming side existed.
                    2 => {
                        let boundary_next = self.next_halfedge(inner_prev);
                        relinks.push((outer_prev, boundary_next));
                        self.set_vertex_halfedge(v, boundary_next);
                    }
                    // Both sides are new.
                    _ => {
                        if self.is_isolated(v) {
                            self.set_vertex_halfedge(v, outer_next);
                            relinks.push((outer_prev, outer_next));
                        } else {
                            let boundary_next = self.vertex_halfedge(v);
                            let boundary_prev = self.prev_halfedge(boundary_next);
                            relinks.push((boundary_prev, outer_next));
                            relinks.push((outer_prev, boundary_next));
                        }
                    }
                }
                relinks.push((inner_prev, inner_next));
            } else {
                sides[ii].needs_adjust = self.vertex_halfedge(v) == inner_next;
            }

            self.set_face(inner_prev, f);
        }

        for (h, next) in relinks {
            self.set_next_halfedge(h, next);
        }

        for (i, side) in sides.iter().enumerate() {
            if side.needs_adjust {
                self.adjust_outgoing_halfedge(vertices[i]);
            }
        }

        Ok(f)
    }

    /// Add a triangle `a, b, c`.
    pub fn add_triangle(
        &mut self,
        a: VertexHandle<I>,
        b: VertexHandle<I>,
        c: VertexHandle<I>,
    ) -> Result<FaceHandle<I>> {
        self.add_face(&[a, b, c])
    }

    /// Add a quad `a, b, c, d`.
    pub fn add_quad(
        &mut self,
        a: VertexHandle<I>,
        b: VertexHandle<I>,
        c: VertexHandle<I>,
        d: VertexHandle<I>,
    ) -> Result<FaceHandle<I>> {
        self.add_face(&[a, b, c, d])
    }
}
