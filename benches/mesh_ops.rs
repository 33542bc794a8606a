//! Benchmarks for mesh operations.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use polyconn::prelude::*;

fn grid_faces(n: usize, triangles: bool) -> Vec<Vec<usize>> {
    let mut faces = Vec::with_capacity(n * n * 2);
    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            if triangles {
                faces.push(vec![v00, v10, v11]);
                faces.push(vec![v00, v11, v01]);
            } else {
                faces.push(vec![v00, v10, v11, v01]);
            }
        }
    }
    faces
}

fn create_grid_mesh(n: usize, triangles: bool) -> PolyMesh {
    build_from_polygons((n + 1) * (n + 1), &grid_faces(n, triangles)).unwrap()
}

fn bench_mesh_construction(c: &mut Criterion) {
    let n = 50;
    let faces = grid_faces(n, true);
    c.bench_function("build_grid_50x50", |b| {
        b.iter(|| {
            let mesh: PolyMesh = build_from_polygons((n + 1) * (n + 1), &faces).unwrap();
            mesh
        });
    });
}

fn bench_mesh_traversal(c: &mut Criterion) {
    let mesh = create_grid_mesh(50, true);

    c.bench_function("vertex_neighbors_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for v in mesh.vertices() {
                count += mesh.vertex_neighbors(v).count();
            }
            count
        });
    });

    c.bench_function("check_grid_50x50", |b| b.iter(|| mesh.check().is_ok()));
}

fn bench_edits(c: &mut Criterion) {
    let quads = create_grid_mesh(50, false);
    c.bench_function("triangulate_all_50x50", |b| {
        b.iter_batched(
            || quads.clone(),
            |mut mesh| {
                mesh.triangulate_all();
                mesh
            },
            BatchSize::LargeInput,
        );
    });

    let triangles = create_grid_mesh(50, true);
    c.bench_function("collapse_interior_sweep", |b| {
        b.iter_batched(
            || triangles.clone(),
            |mut mesh| {
                let halfedges: Vec<_> = mesh.halfedges().collect();
                for h in halfedges {
                    if mesh.is_collapse_ok(h)
                        && !mesh.is_boundary_vertex(mesh.from_vertex(h))
                        && !mesh.is_boundary_vertex(mesh.to_vertex(h))
                    {
                        mesh.collapse(h);
                    }
                }
                mesh
            },
            BatchSize::LargeInput,
        );
    });

    c.bench_function("remove_reinsert_all", |b| {
        b.iter_batched(
            || triangles.clone(),
            |mut mesh| {
                let edges: Vec<_> = mesh.edges().collect();
                for e in edges {
                    if mesh.is_simple_link(e) && mesh.remove_edge(e).is_ok() {
                        mesh.reinsert_edge(e).unwrap();
                    }
                }
                mesh
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_mesh_construction, bench_mesh_traversal, bench_edits);
criterion_main!(benches);
