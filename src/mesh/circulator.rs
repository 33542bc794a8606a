//! Circulators over local neighborhoods.
//!
//! A circulator walks a halfedge cycle lazily: around a vertex it advances
//! with `next(opposite(h))`, around a face or a boundary loop with `next(h)`.
//! It stops as soon as the start halfedge comes around again.
//!
//! Every circulator is an [`Iterator`]. [`Circulator::is_valid`] reports
//! whether there is anything left to yield and [`Circulator::reset`] starts
//! the walk over.
//!
//! Circulators must not be held across mutations; collect first when the
//! mesh is about to change.

use super::halfedge::PolyMesh;
use super::index::{EdgeHandle, FaceHandle, HalfedgeHandle, MeshIndex, VertexHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// `next(opposite(h))`: outgoing halfedges of a vertex.
    VertexRing,
    /// `next(h)`: halfedges of a face or boundary loop.
    Loop,
}

/// A lazy walk over a halfedge cycle, mapped to the item type `T`.
pub struct Circulator<'a, I: MeshIndex, T> {
    mesh: &'a PolyMesh<I>,
    start: HalfedgeHandle<I>,
    current: HalfedgeHandle<I>,
    done: bool,
    step: Step,
    map: fn(&PolyMesh<I>, HalfedgeHandle<I>) -> Option<T>,
}

impl<'a, I: MeshIndex, T> Circulator<'a, I, T> {
    fn new(
        mesh: &'a PolyMesh<I>,
        start: HalfedgeHandle<I>,
        step: Step,
        map: fn(&PolyMesh<I>, HalfedgeHandle<I>) -> Option<T>,
    ) -> Self {
        Self {
            mesh,
            start,
            current: start,
            done: !start.is_valid(),
            step,
            map,
        }
    }

    /// Whether the circulator still has halfedges to visit.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.done
    }

    /// Restart from the first halfedge.
    pub fn reset(&mut self) {
        self.current = self.start;
        self.done = !self.start.is_valid();
    }

    /// The halfedge the circulator is currently at.
    #[inline]
    pub fn current_halfedge(&self) -> HalfedgeHandle<I> {
        self.current
    }

    fn advance(&mut self) -> HalfedgeHandle<I> {
        let h = self.current;
        self.current = match self.step {
            Step::VertexRing => self.mesh.next_halfedge(h.opposite()),
            Step::Loop => self.mesh.next_halfedge(h),
        };
        if self.current == self.start || !self.current.is_valid() {
            self.done = true;
        }
        h
    }
}

impl<'a, I: MeshIndex, T> Iterator for Circulator<'a, I, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while !self.done {
            let h = self.advance();
            if let Some(item) = (self.map)(self.mesh, h) {
                return Some(item);
            }
        }
        None
    }
}

impl<'a, I: MeshIndex, T> std::fmt::Debug for Circulator<'a, I, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Circulator")
            .field("start", &self.start)
            .field("current", &self.current)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// Outgoing halfedges of a vertex.
pub type VertexHalfedgeIter<'a, I = u32> = Circulator<'a, I, HalfedgeHandle<I>>;
/// Neighboring vertices of a vertex.
pub type VertexVertexIter<'a, I = u32> = Circulator<'a, I, VertexHandle<I>>;
/// Edges around a vertex.
pub type VertexEdgeIter<'a, I = u32> = Circulator<'a, I, EdgeHandle<I>>;
/// Faces around a vertex.
pub type VertexFaceIter<'a, I = u32> = Circulator<'a, I, FaceHandle<I>>;
/// Halfedges of a face or boundary loop.
pub type LoopHalfedgeIter<'a, I = u32> = Circulator<'a, I, HalfedgeHandle<I>>;

impl<I: MeshIndex> PolyMesh<I> {
    /// Iterate over the outgoing halfedges of a vertex.
    pub fn vertex_halfedges(&self, v: VertexHandle<I>) -> VertexHalfedgeIter<'_, I> {
        Circulator::new(self, self.vertex_halfedge(v), Step::VertexRing, |_, h| {
            Some(h)
        })
    }

    /// Iterate over the incoming halfedges of a vertex.
    pub fn vertex_incoming_halfedges(&self, v: VertexHandle<I>) -> VertexHalfedgeIter<'_, I> {
        Circulator::new(self, self.vertex_halfedge(v), Step::VertexRing, |_, h| {
            Some(h.opposite())
        })
    }

    /// Iterate over the vertices adjacent to a vertex.
    pub fn vertex_neighbors(&self, v: VertexHandle<I>) -> VertexVertexIter<'_, I> {
        Circulator::new(self, self.vertex_halfedge(v), Step::VertexRing, |m, h| {
            Some(m.to_vertex(h))
        })
    }

    /// Iterate over the edges incident to a vertex.
    pub fn vertex_edges(&self, v: VertexHandle<I>) -> VertexEdgeIter<'_, I> {
        Circulator::new(self, self.vertex_halfedge(v), Step::VertexRing, |_, h| {
            Some(h.edge())
        })
    }

    /// Iterate over the faces incident to a vertex, skipping boundary gaps.
    pub fn vertex_faces(&self, v: VertexHandle<I>) -> VertexFaceIter<'_, I> {
        Circulator::new(self, self.vertex_halfedge(v), Step::VertexRing, |m, h| {
            let f = m.face_handle(h);
            f.is_valid().then_some(f)
        })
    }

    /// Iterate over the halfedges of a face, starting at its reference halfedge.
    pub fn face_halfedges(&self, f: FaceHandle<I>) -> LoopHalfedgeIter<'_, I> {
        self.halfedge_loop(self.face_halfedge(f))
    }

    /// Iterate over the vertices of a face.
    ///
    /// Yields the to-vertex of each halfedge, so a face added from
    /// `[v0, v1, ..., vn]` yields exactly that sequence.
    pub fn face_vertices(&self, f: FaceHandle<I>) -> VertexVertexIter<'_, I> {
        Circulator::new(self, self.face_halfedge(f), Step::Loop, |m, h| {
            Some(m.to_vertex(h))
        })
    }

    /// Iterate over the edges of a face.
    pub fn face_edges(&self, f: FaceHandle<I>) -> VertexEdgeIter<'_, I> {
        Circulator::new(self, self.face_halfedge(f), Step::Loop, |_, h| {
            Some(h.edge())
        })
    }

    /// Iterate over the faces across the edges of a face, skipping the boundary.
    pub fn face_neighbors(&self, f: FaceHandle<I>) -> VertexFaceIter<'_, I> {
        Circulator::new(self, self.face_halfedge(f), Step::Loop, |m, h| {
            let nb = m.opposite_face(h);
            nb.is_valid().then_some(nb)
        })
    }

    /// Iterate over the loop `h`, `next(h)`, ... until `h` comes around again.
    ///
    /// Works for face loops and boundary loops alike.
    pub fn halfedge_loop(&self, h: HalfedgeHandle<I>) -> LoopHalfedgeIter<'_, I> {
        Circulator::new(self, h, Step::Loop, |_, h| Some(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::fixtures::{closed_cube, grid_quads, single_triangle, two_triangles};

    #[test]
    fn test_face_vertices_keep_input_order() {
        let mut mesh: PolyMesh = PolyMesh::new();
        let v: Vec<_> = (0..5).map(|_| mesh.add_vertex()).collect();
        let f = mesh.add_face(&v).unwrap();

        let around: Vec<_> = mesh.face_vertices(f).collect();
        assert_eq!(around, v);
    }

    #[test]
    fn test_vertex_ring_of_grid_center() {
        let mesh: PolyMesh = grid_quads(2);
        let center = VertexHandle::new(4);

        let mut neighbors: Vec<usize> = mesh.vertex_neighbors(center).map(|v| v.index()).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![1, 3, 5, 7]);

        assert_eq!(mesh.vertex_faces(center).count(), 4);
        assert_eq!(mesh.vertex_edges(center).count(), 4);
        for h in mesh.vertex_halfedges(center) {
            assert_eq!(mesh.from_vertex(h), center);
        }
        for h in mesh.vertex_incoming_halfedges(center) {
            assert_eq!(mesh.to_vertex(h), center);
        }
    }

    #[test]
    fn test_boundary_vertex_skips_gap() {
        let (mesh, v, _) = two_triangles();
        assert_eq!(mesh.vertex_halfedges(v[0]).count(), 3);
        assert_eq!(mesh.vertex_faces(v[0]).count(), 2);
    }

    #[test]
    fn test_isolated_vertex_has_empty_ring() {
        let mut mesh: PolyMesh = PolyMesh::new();
        let v = mesh.add_vertex();

        let ring = mesh.vertex_halfedges(v);
        assert!(!ring.is_valid());
        assert_eq!(mesh.vertex_neighbors(v).count(), 0);
    }

    #[test]
    fn test_reset_restarts_walk() {
        let (mesh, _, f) = single_triangle();
        let mut it = mesh.face_halfedges(f);

        assert!(it.is_valid());
        let first: Vec<_> = it.by_ref().collect();
        assert_eq!(first.len(), 3);
        assert!(!it.is_valid());

        it.reset();
        assert!(it.is_valid());
        let second: Vec<_> = it.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_face_neighbors_skip_boundary() {
        let (mesh, _, f) = single_triangle();
        assert_eq!(mesh.face_neighbors(f).count(), 0);
        assert_eq!(mesh.face_edges(f).count(), 3);

        let cube: PolyMesh = closed_cube();
        for f in cube.faces() {
            let mut nbs: Vec<_> = cube.face_neighbors(f).collect();
            nbs.sort();
            nbs.dedup();
            assert_eq!(nbs.len(), 4);
            assert!(!nbs.contains(&f));
        }
    }

    #[test]
    fn test_boundary_loop() {
        let (mesh, _, f) = single_triangle();
        let inner = mesh.face_halfedge(f);
        let outer = inner.opposite();

        let boundary: Vec<_> = mesh.halfedge_loop(outer).collect();
        assert_eq!(boundary.len(), 3);
        assert!(boundary.iter().all(|&h| mesh.is_boundary_halfedge(h)));
    }
}
