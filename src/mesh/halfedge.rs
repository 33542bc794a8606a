//! Half-edge connectivity store.
//!
//! This module provides the element records and the [`PolyMesh`] arena that
//! owns them. Every polygon size is supported; nothing here knows about
//! positions or any other geometry.
//!
//! # Structure
//!
//! - Each edge is split into two **halfedges** pointing in opposite directions.
//!   They live at indices `2e` and `2e + 1`, so the opposite halfedge and the
//!   edge are computed from the handle instead of being stored.
//! - Each halfedge knows its **to-vertex**, its **next** and **prev** halfedge
//!   in the surrounding loop, and its **face**.
//! - Each vertex stores one outgoing halfedge (invalid when isolated).
//! - Each face stores one halfedge of its loop.
//!
//! # Boundary Handling
//!
//! Boundary halfedges have an invalid face handle and form loops of their own
//! around holes. A boundary vertex always stores a boundary halfedge as its
//! outgoing halfedge; [`PolyMesh::adjust_outgoing_halfedge`] restores that
//! after edits.
//!
//! # Deletion
//!
//! Elements are never removed from the arenas. Deleting only sets the
//! `DELETED` status bit, so handles stay stable until the caller rebuilds
//! the mesh.

use log::{debug, trace};

use super::index::{EdgeHandle, FaceHandle, HalfedgeHandle, MeshIndex, VertexHandle};
use super::options::MeshOptions;
use super::property::{ElementKind, PropertyStore};
use super::status::StatusFlags;
use crate::error::{MeshError, Result};

/// A vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex<I: MeshIndex = u32> {
    /// One outgoing halfedge, or invalid for an isolated vertex.
    /// For boundary vertices this is a boundary halfedge.
    pub halfedge: HalfedgeHandle<I>,

    /// Status bits.
    pub status: StatusFlags,
}

impl<I: MeshIndex> Default for Vertex<I> {
    fn default() -> Self {
        Self {
            halfedge: HalfedgeHandle::invalid(),
            status: StatusFlags::new(),
        }
    }
}

/// A halfedge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halfedge<I: MeshIndex = u32> {
    /// The vertex this halfedge points to.
    pub vertex: VertexHandle<I>,

    /// The next halfedge in the face or boundary loop.
    pub next: HalfedgeHandle<I>,

    /// The previous halfedge in the face or boundary loop.
    pub prev: HalfedgeHandle<I>,

    /// The face this halfedge belongs to. Invalid for boundary halfedges.
    pub face: FaceHandle<I>,

    /// Status bits.
    pub status: StatusFlags,
}

impl<I: MeshIndex> Halfedge<I> {
    fn pointing_to(vertex: VertexHandle<I>) -> Self {
        Self {
            vertex,
            next: HalfedgeHandle::invalid(),
            prev: HalfedgeHandle::invalid(),
            face: FaceHandle::invalid(),
            status: StatusFlags::new(),
        }
    }

    /// Check if this halfedge is on the boundary.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        !self.face.is_valid()
    }
}

/// An edge record. Its halfedges are implied by its index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edge {
    /// Status bits.
    pub status: StatusFlags,
}

/// A face record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face<I: MeshIndex = u32> {
    /// One halfedge of the face loop.
    pub halfedge: HalfedgeHandle<I>,

    /// Status bits.
    pub status: StatusFlags,
}

impl<I: MeshIndex> Default for Face<I> {
    fn default() -> Self {
        Self {
            halfedge: HalfedgeHandle::invalid(),
            status: StatusFlags::new(),
        }
    }
}

/// A polygonal half-edge mesh.
///
/// Faces may have any number of sides (at least three). The mesh tolerates
/// non-manifold vertices that have several boundary gaps, but it never creates
/// an edge with more than two faces.
#[derive(Debug, Clone)]
pub struct PolyMesh<I: MeshIndex = u32> {
    /// All vertices in the mesh, deleted ones included.
    pub(crate) vertices: Vec<Vertex<I>>,

    /// All halfedges in the mesh, two per edge.
    pub(crate) halfedges: Vec<Halfedge<I>>,

    /// All edges in the mesh.
    pub(crate) edges: Vec<Edge>,

    /// All faces in the mesh.
    pub(crate) faces: Vec<Face<I>>,

    /// Custom property columns.
    pub(crate) props: PropertyStore,

    halfedge_status: bool,
}

impl<I: MeshIndex> Default for PolyMesh<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> PolyMesh<I> {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::with_options(&MeshOptions::default())
    }

    /// Create an empty mesh configured by `options`.
    pub fn with_options(options: &MeshOptions) -> Self {
        Self {
            vertices: Vec::with_capacity(options.reserve_vertices),
            halfedges: Vec::with_capacity(options.reserve_edges * 2),
            edges: Vec::with_capacity(options.reserve_edges),
            faces: Vec::with_capacity(options.reserve_faces),
            props: PropertyStore::default(),
            halfedge_status: options.halfedge_status,
        }
    }

    /// Whether deleted halfedges get their own deleted bit.
    #[inline]
    pub fn has_halfedge_status(&self) -> bool {
        self.halfedge_status
    }

    // ==================== Allocation ====================

    /// Add a new isolated vertex and return its handle.
    ///
    /// Returns the invalid handle, and adds nothing, once the index type has
    /// run out of vertex handles; see [`try_add_vertex`](Self::try_add_vertex).
    pub fn add_vertex(&mut self) -> VertexHandle<I> {
        match self.try_add_vertex() {
            Ok(v) => v,
            Err(err) => {
                debug!("add_vertex: {}", err);
                VertexHandle::invalid()
            }
        }
    }

    /// Add a new isolated vertex, failing when the index type is exhausted.
    pub fn try_add_vertex(&mut self) -> Result<VertexHandle<I>> {
        self.require_capacity(1, 0, 0)?;
        let v = VertexHandle::new(self.vertices.len());
        self.vertices.push(Vertex::default());
        self.props.get_mut(ElementKind::Vertex).push();
        Ok(v)
    }

    /// Whether `vertices`, `edges` and `faces` more elements still get
    /// handles of their own.
    pub fn has_capacity(&self, vertices: usize, edges: usize, faces: usize) -> bool {
        self.require_capacity(vertices, edges, faces).is_ok()
    }

    pub(crate) fn require_capacity(&self, vertices: usize, edges: usize, faces: usize) -> Result<()> {
        let limit = I::capacity();
        if self.vertices.len() + vertices > limit {
            return Err(MeshError::CapacityExceeded { kind: "vertex", limit });
        }
        // Both halfedges of an edge need an index.
        if 2 * (self.edges.len() + edges) > limit {
            return Err(MeshError::CapacityExceeded {
                kind: "edge",
                limit: limit / 2,
            });
        }
        if self.faces.len() + faces > limit {
            return Err(MeshError::CapacityExceeded { kind: "face", limit });
        }
        Ok(())
    }

    /// Allocate a new edge between two vertices.
    ///
    /// Returns the halfedge `from -> to`; its opposite points back to `from`.
    /// Both halfedges start unlinked and on the boundary. Nothing else is
    /// updated, so the caller is responsible for splicing them into loops,
    /// and for checking [`has_capacity`](Self::has_capacity) first.
    pub fn new_edge(&mut self, from: VertexHandle<I>, to: VertexHandle<I>) -> HalfedgeHandle<I> {
        debug_assert!(self.has_capacity(0, 1, 0));
        let e = EdgeHandle::<I>::new(self.edges.len());
        self.edges.push(Edge::default());
        self.halfedges.push(Halfedge::pointing_to(to));
        self.halfedges.push(Halfedge::pointing_to(from));

        self.props.get_mut(ElementKind::Edge).push();
        let halfedge_props = self.props.get_mut(ElementKind::Halfedge);
        halfedge_props.push();
        halfedge_props.push();

        trace!("new edge {:?}: {:?} -> {:?}", e, from, to);
        e.halfedge(0)
    }

    /// Allocate a new face without any halfedge.
    pub fn new_face(&mut self) -> FaceHandle<I> {
        debug_assert!(self.has_capacity(0, 0, 1));
        let f = FaceHandle::new(self.faces.len());
        self.faces.push(Face::default());
        self.props.get_mut(ElementKind::Face).push();
        f
    }

    // ==================== Counts ====================

    /// Number of vertex slots, deleted vertices included.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of halfedge slots, deleted halfedges included.
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    /// Number of edge slots, deleted edges included.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of face slots, deleted faces included.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of vertices that are not deleted.
    pub fn num_live_vertices(&self) -> usize {
        self.vertices.iter().filter(|v| !v.status.is_deleted()).count()
    }

    /// Number of edges that are not deleted.
    pub fn num_live_edges(&self) -> usize {
        self.edges.iter().filter(|e| !e.status.is_deleted()).count()
    }

    /// Number of halfedges whose edge is not deleted.
    pub fn num_live_halfedges(&self) -> usize {
        self.num_live_edges() * 2
    }

    /// Number of faces that are not deleted.
    pub fn num_live_faces(&self) -> usize {
        self.faces.iter().filter(|f| !f.status.is_deleted()).count()
    }

    // ==================== Records ====================

    /// Get a vertex record.
    #[inline]
    pub fn vertex(&self, v: VertexHandle<I>) -> &Vertex<I> {
        &self.vertices[v.index()]
    }

    /// Get a halfedge record.
    #[inline]
    pub fn halfedge(&self, h: HalfedgeHandle<I>) -> &Halfedge<I> {
        &self.halfedges[h.index()]
    }

    /// Get an edge record.
    #[inline]
    pub fn edge(&self, e: EdgeHandle<I>) -> &Edge {
        &self.edges[e.index()]
    }

    /// Get a face record.
    #[inline]
    pub fn face(&self, f: FaceHandle<I>) -> &Face<I> {
        &self.faces[f.index()]
    }

    // ==================== Handle validity ====================

    /// Check that `v` addresses a vertex slot of this mesh.
    #[inline]
    pub fn is_valid_vertex(&self, v: VertexHandle<I>) -> bool {
        v.is_valid() && v.index() < self.vertices.len()
    }

    /// Check that `h` addresses a halfedge slot of this mesh.
    #[inline]
    pub fn is_valid_halfedge(&self, h: HalfedgeHandle<I>) -> bool {
        h.is_valid() && h.index() < self.halfedges.len()
    }

    /// Check that `e` addresses an edge slot of this mesh.
    #[inline]
    pub fn is_valid_edge(&self, e: EdgeHandle<I>) -> bool {
        e.is_valid() && e.index() < self.edges.len()
    }

    /// Check that `f` addresses a face slot of this mesh.
    #[inline]
    pub fn is_valid_face(&self, f: FaceHandle<I>) -> bool {
        f.is_valid() && f.index() < self.faces.len()
    }

    // ==================== Status ====================

    /// Status bits of a vertex.
    #[inline]
    pub fn vertex_status(&self, v: VertexHandle<I>) -> StatusFlags {
        self.vertices[v.index()].status
    }

    /// Mutable status bits of a vertex.
    #[inline]
    pub fn vertex_status_mut(&mut self, v: VertexHandle<I>) -> &mut StatusFlags {
        &mut self.vertices[v.index()].status
    }

    /// Status bits of a halfedge.
    #[inline]
    pub fn halfedge_status(&self, h: HalfedgeHandle<I>) -> StatusFlags {
        self.halfedges[h.index()].status
    }

    /// Mutable status bits of a halfedge.
    #[inline]
    pub fn halfedge_status_mut(&mut self, h: HalfedgeHandle<I>) -> &mut StatusFlags {
        &mut self.halfedges[h.index()].status
    }

    /// Status bits of an edge.
    #[inline]
    pub fn edge_status(&self, e: EdgeHandle<I>) -> StatusFlags {
        self.edges[e.index()].status
    }

    /// Mutable status bits of an edge.
    #[inline]
    pub fn edge_status_mut(&mut self, e: EdgeHandle<I>) -> &mut StatusFlags {
        &mut self.edges[e.index()].status
    }

    /// Status bits of a face.
    #[inline]
    pub fn face_status(&self, f: FaceHandle<I>) -> StatusFlags {
        self.faces[f.index()].status
    }

    /// Mutable status bits of a face.
    #[inline]
    pub fn face_status_mut(&mut self, f: FaceHandle<I>) -> &mut StatusFlags {
        &mut self.faces[f.index()].status
    }

    /// Check if a vertex is deleted.
    #[inline]
    pub fn is_deleted_vertex(&self, v: VertexHandle<I>) -> bool {
        self.vertex_status(v).is_deleted()
    }

    /// Check if a halfedge is deleted.
    ///
    /// The edge status decides, so this is accurate even when halfedge status
    /// is disabled.
    #[inline]
    pub fn is_deleted_halfedge(&self, h: HalfedgeHandle<I>) -> bool {
        self.halfedge_status(h).is_deleted() || self.is_deleted_edge(h.edge())
    }

    /// Check if an edge is deleted.
    #[inline]
    pub fn is_deleted_edge(&self, e: EdgeHandle<I>) -> bool {
        self.edge_status(e).is_deleted()
    }

    /// Check if a face is deleted.
    #[inline]
    pub fn is_deleted_face(&self, f: FaceHandle<I>) -> bool {
        self.face_status(f).is_deleted()
    }

    /// Flag an edge deleted, together with its halfedges when enabled.
    pub(crate) fn mark_edge_deleted(&mut self, e: EdgeHandle<I>, deleted: bool) {
        self.edge_status_mut(e).set_deleted(deleted);
        if self.halfedge_status {
            self.halfedge_status_mut(e.halfedge(0)).set_deleted(deleted);
            self.halfedge_status_mut(e.halfedge(1)).set_deleted(deleted);
        }
    }

    pub(crate) fn require_vertex(&self, v: VertexHandle<I>) -> Result<()> {
        if !self.is_valid_vertex(v) {
            return Err(MeshError::invalid_handle("vertex", v.index()));
        }
        if self.is_deleted_vertex(v) {
            return Err(MeshError::deleted("vertex", v.index()));
        }
        Ok(())
    }

    pub(crate) fn require_halfedge(&self, h: HalfedgeHandle<I>) -> Result<()> {
        if !self.is_valid_halfedge(h) {
            return Err(MeshError::invalid_handle("halfedge", h.index()));
        }
        if self.is_deleted_halfedge(h) {
            return Err(MeshError::deleted("halfedge", h.index()));
        }
        Ok(())
    }

    pub(crate) fn require_edge(&self, e: EdgeHandle<I>) -> Result<()> {
        if !self.is_valid_edge(e) {
            return Err(MeshError::invalid_handle("edge", e.index()));
        }
        if self.is_deleted_edge(e) {
            return Err(MeshError::deleted("edge", e.index()));
        }
        Ok(())
    }

    pub(crate) fn require_face(&self, f: FaceHandle<I>) -> Result<()> {
        if !self.is_valid_face(f) {
            return Err(MeshError::invalid_handle("face", f.index()));
        }
        if self.is_deleted_face(f) {
            return Err(MeshError::deleted("face", f.index()));
        }
        Ok(())
    }

    // ==================== Links ====================

    /// The vertex a halfedge points to.
    #[inline]
    pub fn to_vertex(&self, h: HalfedgeHandle<I>) -> VertexHandle<I> {
        self.halfedges[h.index()].vertex
    }

    /// The vertex a halfedge starts from.
    #[inline]
    pub fn from_vertex(&self, h: HalfedgeHandle<I>) -> VertexHandle<I> {
        self.to_vertex(h.opposite())
    }

    /// The next halfedge in the loop.
    #[inline]
    pub fn next_halfedge(&self, h: HalfedgeHandle<I>) -> HalfedgeHandle<I> {
        self.halfedges[h.index()].next
    }

    /// The previous halfedge in the loop.
    #[inline]
    pub fn prev_halfedge(&self, h: HalfedgeHandle<I>) -> HalfedgeHandle<I> {
        self.halfedges[h.index()].prev
    }

    /// The opposite halfedge.
    #[inline]
    pub fn opposite_halfedge(&self, h: HalfedgeHandle<I>) -> HalfedgeHandle<I> {
        h.opposite()
    }

    /// The face of a halfedge, invalid on the boundary.
    #[inline]
    pub fn face_handle(&self, h: HalfedgeHandle<I>) -> FaceHandle<I> {
        self.halfedges[h.index()].face
    }

    /// The face on the other side of a halfedge.
    #[inline]
    pub fn opposite_face(&self, h: HalfedgeHandle<I>) -> FaceHandle<I> {
        self.face_handle(h.opposite())
    }

    /// The edge a halfedge belongs to.
    #[inline]
    pub fn edge_handle(&self, h: HalfedgeHandle<I>) -> EdgeHandle<I> {
        h.edge()
    }

    /// Halfedge `side` (0 or 1) of an edge.
    #[inline]
    pub fn edge_halfedge(&self, e: EdgeHandle<I>, side: usize) -> HalfedgeHandle<I> {
        e.halfedge(side)
    }

    /// The outgoing halfedge of a vertex.
    #[inline]
    pub fn vertex_halfedge(&self, v: VertexHandle<I>) -> HalfedgeHandle<I> {
        self.vertices[v.index()].halfedge
    }

    /// The reference halfedge of a face.
    #[inline]
    pub fn face_halfedge(&self, f: FaceHandle<I>) -> HalfedgeHandle<I> {
        self.faces[f.index()].halfedge
    }

    /// Link `h -> next`; also sets `prev(next) = h`.
    #[inline]
    pub fn set_next_halfedge(&mut self, h: HalfedgeHandle<I>, next: HalfedgeHandle<I>) {
        self.halfedges[h.index()].next = next;
        self.halfedges[next.index()].prev = h;
    }

    /// Set the outgoing halfedge of a vertex.
    #[inline]
    pub fn set_vertex_halfedge(&mut self, v: VertexHandle<I>, h: HalfedgeHandle<I>) {
        self.vertices[v.index()].halfedge = h;
    }

    /// Set the reference halfedge of a face.
    #[inline]
    pub fn set_face_halfedge(&mut self, f: FaceHandle<I>, h: HalfedgeHandle<I>) {
        self.faces[f.index()].halfedge = h;
    }

    /// Set the face of a halfedge. Pass an invalid handle to make it boundary.
    #[inline]
    pub fn set_face(&mut self, h: HalfedgeHandle<I>, f: FaceHandle<I>) {
        self.halfedges[h.index()].face = f;
    }

    /// Set the vertex a halfedge points to.
    #[inline]
    pub fn set_to_vertex(&mut self, h: HalfedgeHandle<I>, v: VertexHandle<I>) {
        self.halfedges[h.index()].vertex = v;
    }

    /// Mark a vertex as having no outgoing halfedge.
    #[inline]
    pub fn set_isolated(&mut self, v: VertexHandle<I>) {
        self.vertices[v.index()].halfedge = HalfedgeHandle::invalid();
    }

    // ==================== Iteration ====================

    /// Iterate over all vertices that are not deleted.
    pub fn vertices(&self) -> impl Iterator<Item = VertexHandle<I>> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.status.is_deleted())
            .map(|(i, _)| VertexHandle::new(i))
    }

    /// Iterate over all halfedges whose edge is not deleted.
    pub fn halfedges(&self) -> impl Iterator<Item = HalfedgeHandle<I>> + '_ {
        self.edges().flat_map(|e| [e.halfedge(0), e.halfedge(1)])
    }

    /// Iterate over all edges that are not deleted.
    pub fn edges(&self) -> impl Iterator<Item = EdgeHandle<I>> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.status.is_deleted())
            .map(|(i, _)| EdgeHandle::new(i))
    }

    /// Iterate over all faces that are not deleted.
    pub fn faces(&self) -> impl Iterator<Item = FaceHandle<I>> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.status.is_deleted())
            .map(|(i, _)| FaceHandle::new(i))
    }

    /// Iterate over every vertex slot, deleted ones included.
    pub fn all_vertices(&self) -> impl Iterator<Item = VertexHandle<I>> {
        (0..self.vertices.len()).map(VertexHandle::new)
    }

    /// Iterate over every halfedge slot, deleted ones included.
    pub fn all_halfedges(&self) -> impl Iterator<Item = HalfedgeHandle<I>> {
        (0..self.halfedges.len()).map(HalfedgeHandle::new)
    }

    /// Iterate over every edge slot, deleted ones included.
    pub fn all_edges(&self) -> impl Iterator<Item = EdgeHandle<I>> {
        (0..self.edges.len()).map(EdgeHandle::new)
    }

    /// Iterate over every face slot, deleted ones included.
    pub fn all_faces(&self) -> impl Iterator<Item = FaceHandle<I>> {
        (0..self.faces.len()).map(FaceHandle::new)
    }

    // ==================== Topology Queries ====================

    /// Find the halfedge `v0 -> v1`, or the invalid handle if there is none.
    pub fn find_halfedge(&self, v0: VertexHandle<I>, v1: VertexHandle<I>) -> HalfedgeHandle<I> {
        self.vertex_halfedges(v0)
            .find(|&h| self.to_vertex(h) == v1)
            .unwrap_or_default()
    }

    /// Check if a halfedge is on the boundary.
    #[inline]
    pub fn is_boundary_halfedge(&self, h: HalfedgeHandle<I>) -> bool {
        !self.face_handle(h).is_valid()
    }

    /// Check if either halfedge of an edge is on the boundary.
    #[inline]
    pub fn is_boundary_edge(&self, e: EdgeHandle<I>) -> bool {
        self.is_boundary_halfedge(e.halfedge(0)) || self.is_boundary_halfedge(e.halfedge(1))
    }

    /// Check if a vertex is on the boundary.
    ///
    /// Isolated vertices count as boundary. This relies on the outgoing
    /// halfedge being a boundary one whenever possible.
    #[inline]
    pub fn is_boundary_vertex(&self, v: VertexHandle<I>) -> bool {
        let h = self.vertex_halfedge(v);
        !h.is_valid() || self.is_boundary_halfedge(h)
    }

    /// Check if a face touches the boundary.
    ///
    /// With `check_vertex` set, a face that only shares a boundary vertex
    /// counts too.
    pub fn is_boundary_face(&self, f: FaceHandle<I>, check_vertex: bool) -> bool {
        for h in self.face_halfedges(f) {
            if self.is_boundary_halfedge(h.opposite()) {
                return true;
            }
            if check_vertex && self.is_boundary_vertex(self.to_vertex(h)) {
                return true;
            }
        }
        false
    }

    /// Check if a vertex has no outgoing halfedge.
    #[inline]
    pub fn is_isolated(&self, v: VertexHandle<I>) -> bool {
        !self.vertex_halfedge(v).is_valid()
    }

    /// Check if a vertex has at most one boundary gap.
    ///
    /// The stored outgoing halfedge is the only one allowed to be boundary.
    pub fn is_manifold(&self, v: VertexHandle<I>) -> bool {
        self.vertex_halfedges(v)
            .skip(1)
            .all(|h| !self.is_boundary_halfedge(h))
    }

    /// Point the outgoing halfedge of `v` at a boundary halfedge if it has one.
    pub fn adjust_outgoing_halfedge(&mut self, v: VertexHandle<I>) {
        let boundary = self
            .vertex_halfedges(v)
            .find(|&h| self.is_boundary_halfedge(h));
        if let Some(h) = boundary {
            self.set_vertex_halfedge(v, h);
        }
    }

    /// Number of edges incident to a vertex.
    pub fn valence_vertex(&self, v: VertexHandle<I>) -> usize {
        self.vertex_halfedges(v).count()
    }

    /// Number of sides of a face.
    pub fn valence_face(&self, f: FaceHandle<I>) -> usize {
        self.face_halfedges(f).count()
    }

    /// Check if every live face is a triangle.
    pub fn is_triangle_mesh(&self) -> bool {
        self.faces().all(|f| self.valence_face(f) == 3)
    }

    /// Check that the two faces at `e` share no other edge.
    ///
    /// The boundary counts as a face, so an edge whose face has another
    /// boundary edge is not a simple link either.
    pub fn is_simple_link(&self, e: EdgeHandle<I>) -> bool {
        let h0 = e.halfedge(0);
        let f1 = self.face_handle(e.halfedge(1));

        let mut h = self.next_halfedge(h0);
        let mut steps = 0;
        while h != h0 {
            if self.opposite_face(h) == f1 {
                return false;
            }
            h = self.next_halfedge(h);
            steps += 1;
            if steps > self.halfedges.len() {
                break;
            }
        }
        true
    }

    /// Check that `f` shares at most one edge with every neighbor.
    ///
    /// All boundary halfedges count as a single neighbor.
    pub fn is_simply_connected(&self, f: FaceHandle<I>) -> bool {
        let mut seen = Vec::new();
        for h in self.face_halfedges(f) {
            let nb = self.opposite_face(h);
            if seen.contains(&nb) {
                return false;
            }
            seen.push(nb);
        }
        true
    }
}
