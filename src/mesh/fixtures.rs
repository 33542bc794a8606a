//! Small meshes shared by the unit tests.

use super::builder::build_from_polygons;
use super::halfedge::{Edge, Face, Halfedge, PolyMesh, Vertex};
use super::index::{FaceHandle, VertexHandle};

/// Copy of every connectivity record, for "nothing changed" assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub vertices: Vec<Vertex<u32>>,
    pub halfedges: Vec<Halfedge<u32>>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face<u32>>,
}

impl Snapshot {
    pub fn of(mesh: &PolyMesh) -> Self {
        Self {
            vertices: mesh.vertices.clone(),
            halfedges: mesh.halfedges.clone(),
            edges: mesh.edges.clone(),
            faces: mesh.faces.clone(),
        }
    }

    /// Same halfedge links and statuses everywhere; the reference halfedges
    /// of vertices and faces may have moved.
    pub fn same_links(&self, other: &Snapshot) -> bool {
        self.halfedges == other.halfedges
            && self.edges == other.edges
            && self.vertices.len() == other.vertices.len()
            && self.faces.len() == other.faces.len()
            && self
                .vertices
                .iter()
                .zip(&other.vertices)
                .all(|(a, b)| a.status == b.status)
            && self
                .faces
                .iter()
                .zip(&other.faces)
                .all(|(a, b)| a.status == b.status)
    }
}

fn polygons(num_vertices: usize, faces: &[Vec<usize>]) -> PolyMesh {
    build_from_polygons(num_vertices, faces).unwrap()
}

/// One triangle `[v0, v1, v2]`.
pub(crate) fn single_triangle() -> (PolyMesh, [VertexHandle; 3], FaceHandle) {
    let mut mesh = PolyMesh::new();
    let v = [mesh.add_vertex(), mesh.add_vertex(), mesh.add_vertex()];
    let f = mesh.add_face(&v).unwrap();
    (mesh, v, f)
}

/// Triangles `[v0, v1, v2]` and `[v1, v0, v3]` sharing the edge v0-v1.
pub(crate) fn two_triangles() -> (PolyMesh, [VertexHandle; 4], [FaceHandle; 2]) {
    let mut mesh = PolyMesh::new();
    let v = [
        mesh.add_vertex(),
        mesh.add_vertex(),
        mesh.add_vertex(),
        mesh.add_vertex(),
    ];
    let f0 = mesh.add_face(&[v[0], v[1], v[2]]).unwrap();
    let f1 = mesh.add_face(&[v[1], v[0], v[3]]).unwrap();
    (mesh, v, [f0, f1])
}

/// One quad `[v0, v1, v2, v3]`.
pub(crate) fn unit_quad() -> (PolyMesh, [VertexHandle; 4], FaceHandle) {
    let mut mesh = PolyMesh::new();
    let v = [
        mesh.add_vertex(),
        mesh.add_vertex(),
        mesh.add_vertex(),
        mesh.add_vertex(),
    ];
    let f = mesh.add_face(&v).unwrap();
    (mesh, v, f)
}

fn grid_index(n: usize, i: usize, j: usize) -> usize {
    j * (n + 1) + i
}

/// An `n` by `n` grid of quads, faces in row-major order.
pub(crate) fn grid_quads(n: usize) -> PolyMesh {
    let mut faces = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            faces.push(vec![
                grid_index(n, i, j),
                grid_index(n, i + 1, j),
                grid_index(n, i + 1, j + 1),
                grid_index(n, i, j + 1),
            ]);
        }
    }
    polygons((n + 1) * (n + 1), &faces)
}

/// [`grid_quads`] with every quad cut along its `(i, j)`-`(i+1, j+1)` diagonal.
pub(crate) fn grid_triangles(n: usize) -> PolyMesh {
    let mut faces = Vec::with_capacity(2 * n * n);
    for j in 0..n {
        for i in 0..n {
            let v00 = grid_index(n, i, j);
            let v10 = grid_index(n, i + 1, j);
            let v11 = grid_index(n, i + 1, j + 1);
            let v01 = grid_index(n, i, j + 1);
            faces.push(vec![v00, v10, v11]);
            faces.push(vec![v00, v11, v01]);
        }
    }
    polygons((n + 1) * (n + 1), &faces)
}

/// Closed cube of six outward-facing quads.
pub(crate) fn closed_cube() -> PolyMesh {
    polygons(
        8,
        &[
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![1, 2, 6, 5],
            vec![2, 3, 7, 6],
            vec![3, 0, 4, 7],
        ],
    )
}

/// Closed tetrahedron.
pub(crate) fn tetrahedron() -> PolyMesh {
    polygons(
        4,
        &[vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]],
    )
}
