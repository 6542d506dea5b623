//! Benchmarks for the navigation mesh parsers

use criterion::{Criterion, criterion_group, criterion_main};

use godot_navmesh::resource::{parse_resource, write_resource};
use godot_navmesh::types::{NavMesh, Polygon, Vertex};
use godot_navmesh::wavefront::{parse_obj, write_obj};

/// Builds a grid mesh large enough to exercise the scanners
fn create_test_mesh() -> NavMesh {
    let mut mesh = NavMesh::new();

    const SIDE: u32 = 64;
    for row in 0..=SIDE {
        for col in 0..=SIDE {
            mesh.vertices
                .push(Vertex::new(col as f32, 0.0, row as f32));
        }
    }
    for row in 0..SIDE {
        for col in 0..SIDE {
            let base = row * (SIDE + 1) + col;
            mesh.polygons.push(Polygon::new(vec![
                base,
                base + 1,
                base + SIDE + 2,
                base + SIDE + 1,
            ]));
        }
    }

    mesh
}

fn create_resource_text() -> String {
    let mut buffer = Vec::new();
    write_resource(&mut buffer, &create_test_mesh(), None).unwrap();
    String::from_utf8(buffer).unwrap()
}

fn create_obj_text() -> String {
    let mut buffer = Vec::new();
    write_obj(&mut buffer, &create_test_mesh()).unwrap();
    String::from_utf8(buffer).unwrap()
}

fn bench_parse_resource(c: &mut Criterion) {
    let text = create_resource_text();

    c.bench_function("parse_resource", |b| {
        b.iter(|| parse_resource(&text).unwrap())
    });
}

fn bench_parse_obj(c: &mut Criterion) {
    let text = create_obj_text();

    c.bench_function("parse_obj", |b| b.iter(|| parse_obj(&text)));
}

fn bench_write_resource(c: &mut Criterion) {
    let mesh = create_test_mesh();

    c.bench_function("write_resource", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            write_resource(&mut buffer, &mesh, None).unwrap();
            buffer
        })
    });
}

criterion_group!(
    benches,
    bench_parse_resource,
    bench_parse_obj,
    bench_write_resource
);
criterion_main!(benches);
