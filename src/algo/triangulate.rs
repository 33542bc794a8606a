//! Whole-mesh triangulation.

use log::trace;

use super::progress::Progress;
use crate::mesh::{MeshIndex, PolyMesh};

/// Fan-triangulate every face that is live when the pass starts.
///
/// Reports once per face. Returns the number of faces created.
///
/// # Example
/// ```
/// use polyconn::algo::{triangulate_with_progress, Progress};
/// use polyconn::mesh::{build_from_quads, PolyMesh};
///
/// let mut mesh: PolyMesh = build_from_quads(6, &[[0, 1, 2, 3], [1, 4, 5, 2]]).unwrap();
/// let created = triangulate_with_progress(&mut mesh, &Progress::none());
/// assert_eq!(created, 2);
/// assert!(mesh.is_triangle_mesh());
/// ```
pub fn triangulate_with_progress<I: MeshIndex>(mesh: &mut PolyMesh<I>, progress: &Progress) -> usize {
    let faces: Vec<_> = mesh.faces().collect();
    let total = faces.len();
    let before = mesh.num_faces();

    for (i, f) in faces.into_iter().enumerate() {
        mesh.triangulate_face(f);
        trace!("triangulated {:?} ({}/{})", f, i + 1, total);
        progress.report(i + 1, total, "Triangulating faces");
    }

    mesh.num_faces() - before
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::mesh::{build_from_polygons, build_from_triangles};

    #[test]
    fn test_reports_every_face() {
        let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3, 4], vec![0, 5, 1], vec![1, 5, 6, 2]];
        let mut mesh: PolyMesh = build_from_polygons(7, &faces).unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let progress = Progress::new(move |current, total, _| {
            assert_eq!(total, 3);
            assert!((1..=3).contains(&current));
            seen.fetch_add(1, Ordering::Relaxed);
        });

        let created = triangulate_with_progress(&mut mesh, &progress);
        assert_eq!(calls.load(Ordering::Relaxed), 3);
        // The pentagon gains two faces, the quad one.
        assert_eq!(created, 3);
        assert_eq!(mesh.num_live_faces(), 6);
        assert!(mesh.is_triangle_mesh());
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_triangle_mesh_is_untouched() {
        let mut mesh: PolyMesh = build_from_triangles(4, &[[0, 1, 2], [0, 2, 3]]).unwrap();
        let created = triangulate_with_progress(&mut mesh, &Progress::none());
        assert_eq!(created, 0);
        assert_eq!(mesh.num_edges(), 5);
    }
}
