//! Mesh construction utilities.
//!
//! This module builds meshes from face-vertex index lists as commonly found in
//! mesh file formats, and converts them back. Every face goes through
//! [`PolyMesh::add_face`], so the same topology rules apply as for
//! incremental construction.

use log::debug;

use super::halfedge::PolyMesh;
use super::index::{MeshIndex, VertexHandle};
use super::options::MeshOptions;
use crate::error::{MeshError, Result};

/// Build a mesh from polygons of any size.
///
/// # Arguments
/// * `num_vertices` - Number of vertices to create
/// * `faces` - Faces as lists of vertex indices, in loop order
///
/// # Returns
/// The mesh, or an error naming the first face that is invalid or could not
/// be inserted.
///
/// # Example
/// ```
/// use polyconn::mesh::{build_from_polygons, PolyMesh};
///
/// let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3], vec![1, 4, 2]];
/// let mesh: PolyMesh = build_from_polygons(5, &faces).unwrap();
/// assert_eq!(mesh.num_faces(), 2);
/// assert_eq!(mesh.num_edges(), 6);
/// ```
pub fn build_from_polygons<I: MeshIndex, F: AsRef<[usize]>>(
    num_vertices: usize,
    faces: &[F],
) -> Result<PolyMesh<I>> {
    let edge_estimate = faces.iter().map(|f| f.as_ref().len()).sum::<usize>() / 2;
    let options = MeshOptions::default().with_reserve(num_vertices, edge_estimate, faces.len());
    build_with_options(&options, num_vertices, faces)
}

/// Like [`build_from_polygons`] with explicit [`MeshOptions`].
pub fn build_with_options<I: MeshIndex, F: AsRef<[usize]>>(
    options: &MeshOptions,
    num_vertices: usize,
    faces: &[F],
) -> Result<PolyMesh<I>> {
    // Validate vertex indices
    for (fi, face) in faces.iter().enumerate() {
        if let Some(&vi) = face.as_ref().iter().find(|&&vi| vi >= num_vertices) {
            return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
        }
    }

    let mut mesh = PolyMesh::with_options(options);
    let vertex_ids: Vec<VertexHandle<I>> = (0..num_vertices).map(|_| mesh.add_vertex()).collect();

    let mut corners = Vec::new();
    for (fi, face) in faces.iter().enumerate() {
        corners.clear();
        corners.extend(face.as_ref().iter().map(|&vi| vertex_ids[vi]));
        if let Err(err) = mesh.add_face(&corners) {
            debug!("face {} rejected: {}", fi, err);
            return Err(MeshError::FaceRejected {
                face: fi,
                source: Box::new(err),
            });
        }
    }

    Ok(mesh)
}

/// Build a mesh from triangle faces.
pub fn build_from_triangles<I: MeshIndex>(
    num_vertices: usize,
    faces: &[[usize; 3]],
) -> Result<PolyMesh<I>> {
    build_from_polygons(num_vertices, faces)
}

/// Build a mesh from quad faces, each as [v0, v1, v2, v3] (counter-clockwise).
pub fn build_from_quads<I: MeshIndex>(
    num_vertices: usize,
    faces: &[[usize; 4]],
) -> Result<PolyMesh<I>> {
    build_from_polygons(num_vertices, faces)
}

/// Convert a mesh back to face-vertex lists.
///
/// Deleted elements are skipped and live vertices are renumbered densely in
/// handle order. Returns the number of live vertices and the faces.
pub fn to_face_lists<I: MeshIndex>(mesh: &PolyMesh<I>) -> (usize, Vec<Vec<usize>>) {
    let mut remap = vec![usize::MAX; mesh.num_vertices()];
    let mut count = 0;
    for v in mesh.vertices() {
        remap[v.index()] = count;
        count += 1;
    }

    let faces = mesh
        .faces()
        .map(|f| mesh.face_vertices(f).map(|v| remap[v.index()]).collect())
        .collect();

    (count, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::index::FaceHandle;

    #[test]
    fn test_single_triangle() {
        let mesh: PolyMesh<u32> = build_from_triangles(3, &[[0, 1, 2]]).unwrap();

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
        // 3 interior half-edges + 3 boundary half-edges
        assert_eq!(mesh.num_halfedges(), 6);
        assert!(mesh.is_valid());

        // All vertices should be on boundary
        for v in mesh.vertices() {
            assert!(mesh.is_boundary_vertex(v));
        }
    }

    #[test]
    fn test_two_triangles() {
        let mesh: PolyMesh<u32> = build_from_triangles(4, &[[0, 1, 2], [1, 0, 3]]).unwrap();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 2);
        // 5 edges, the shared one has no boundary halfedge
        assert_eq!(mesh.num_halfedges(), 10);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_build_from_quads_two_quads() {
        let mesh: PolyMesh<u32> = build_from_quads(6, &[[0, 1, 2, 3], [1, 4, 5, 2]]).unwrap();

        assert_eq!(mesh.num_vertices(), 6);
        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.num_edges(), 7);
        assert!(!mesh.is_triangle_mesh());
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_mixed_polygons_small_index() {
        let faces: Vec<&[usize]> = vec![&[0, 1, 2, 3, 4][..], &[0, 5, 1][..]];
        let mesh: PolyMesh<u16> = build_from_polygons(6, &faces).unwrap();
        assert_eq!(mesh.valence_face(FaceHandle::new(0)), 5);
        assert_eq!(mesh.valence_face(FaceHandle::new(1)), 3);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_roundtrip() {
        let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3], vec![1, 4, 2]];
        let mesh: PolyMesh = build_from_polygons(5, &faces).unwrap();

        let (num_vertices, out) = to_face_lists(&mesh);
        assert_eq!(num_vertices, 5);
        assert_eq!(out, faces);
    }

    #[test]
    fn test_roundtrip_compacts_deleted() {
        let mut mesh: PolyMesh =
            build_from_triangles(4, &[[0, 1, 2], [1, 0, 3]]).unwrap();
        mesh.delete_face(FaceHandle::new(0), true).unwrap();

        // Vertex 2 is gone, so vertex 3 becomes 2.
        let (num_vertices, out) = to_face_lists(&mesh);
        assert_eq!(num_vertices, 3);
        assert_eq!(out, vec![vec![1, 0, 2]]);
    }

    #[test]
    fn test_invalid_vertex_index() {
        let result: Result<PolyMesh<u32>> = build_from_triangles(1, &[[0, 1, 2]]);
        assert_eq!(
            result.unwrap_err(),
            MeshError::InvalidVertexIndex { face: 0, vertex: 1 }
        );
    }

    #[test]
    fn test_degenerate_face() {
        let result: Result<PolyMesh<u32>> = build_from_triangles(3, &[[0, 1, 2], [0, 0, 2]]);
        match result {
            Err(MeshError::FaceRejected { face, source }) => {
                assert_eq!(face, 1);
                assert!(matches!(*source, MeshError::DegenerateFace { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_complex_edge_is_reported() {
        // The second face reuses the directed edge 0 -> 1.
        let result: Result<PolyMesh<u32>> = build_from_triangles(4, &[[0, 1, 2], [0, 1, 3]]);
        assert!(matches!(
            result,
            Err(MeshError::FaceRejected { face: 1, .. })
        ));
    }
}
