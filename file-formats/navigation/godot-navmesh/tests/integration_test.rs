//! Integration tests for the navigation mesh converter

use pretty_assertions::assert_eq;

use godot_navmesh::conversion::{obj_to_resource, resource_to_obj};
use godot_navmesh::properties::{PropertySet, PropertyValue};
use godot_navmesh::resource::{parse_properties, parse_resource, write_resource};
use godot_navmesh::types::{NavMesh, Polygon, Vertex};
use godot_navmesh::wavefront::{parse_obj, write_obj};

/// Builds a mesh shaped like the ones Godot bakes: a strip of quads and
/// triangles sharing vertices
fn sample_mesh() -> NavMesh {
    NavMesh {
        vertices: vec![
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(2.0, 0.0, 0.0),
            Vertex::new(2.0, 0.0, 2.0),
            Vertex::new(0.0, 0.0, 2.0),
            Vertex::new(4.0, 0.25, 1.0),
            Vertex::new(3.0, 0.125, 3.0),
        ],
        polygons: vec![
            Polygon::new(vec![0, 1, 2, 3]),
            Polygon::new(vec![1, 4, 2]),
            Polygon::new(vec![2, 4, 5]),
        ],
    }
}

#[test]
fn test_obj_round_trip_preserves_mesh() {
    let mesh = sample_mesh();

    let mut buffer = Vec::new();
    write_obj(&mut buffer, &mesh).unwrap();
    let reparsed = parse_obj(&String::from_utf8(buffer).unwrap());

    assert_eq!(reparsed, mesh);
}

#[test]
fn test_resource_round_trip_preserves_mesh_and_properties() {
    let mesh = sample_mesh();
    let mut properties = PropertySet::new();
    properties.insert("agent_height", PropertyValue::Float(1.75));
    properties.insert("agent_radius", PropertyValue::Float(0.5));
    properties.insert("edge_max_length", PropertyValue::Float(12.0));
    properties.insert("filter_low_hanging_obstacles", PropertyValue::Bool(false));

    let mut buffer = Vec::new();
    write_resource(&mut buffer, &mesh, Some(&properties)).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert_eq!(parse_resource(&text).unwrap(), mesh);
    assert_eq!(parse_properties(&text), properties);
}

#[test]
fn test_default_property_block_is_independent_of_mesh() {
    for mesh in [sample_mesh(), {
        let mut small = NavMesh::new();
        small.vertices.push(Vertex::new(0.0, 0.0, 0.0));
        small.polygons.push(Polygon::new(vec![0, 0, 0]));
        small
    }] {
        let mut buffer = Vec::new();
        write_resource(&mut buffer, &mesh, None).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let defaults = parse_properties(&text);

        assert_eq!(defaults.len(), 6);
        assert_eq!(defaults.get("agent_height"), Some(PropertyValue::Float(0.5)));
        assert_eq!(
            defaults.get("vertices_per_polygon"),
            Some(PropertyValue::Float(3.0))
        );
        assert_eq!(
            defaults.get("detail_sample_distance"),
            Some(PropertyValue::Float(1.0))
        );
        assert_eq!(
            defaults.get("filter_low_hanging_obstacles"),
            Some(PropertyValue::Bool(true))
        );
        assert_eq!(defaults.get("filter_ledge_spans"), Some(PropertyValue::Bool(true)));
        assert_eq!(
            defaults.get("filter_walkable_low_height_spans"),
            Some(PropertyValue::Bool(true))
        );
    }
}

#[test]
fn test_full_conversion_cycle_with_donor() {
    let mesh = sample_mesh();
    let mut properties = PropertySet::new();
    properties.insert("agent_max_slope", PropertyValue::Float(44.0));
    properties.insert("filter_ledge_spans", PropertyValue::Bool(true));

    let mut buffer = Vec::new();
    write_resource(&mut buffer, &mesh, Some(&properties)).unwrap();
    let original = String::from_utf8(buffer).unwrap();

    // Resource -> OBJ drops the properties
    let obj = resource_to_obj(&original).unwrap();
    assert_eq!(obj.vertex_count, 6);
    assert_eq!(obj.polygon_count, 3);
    assert!(!obj.text.contains("agent_max_slope"));

    // OBJ -> resource with the original as donor restores them
    let restored = obj_to_resource(&obj.text, Some(&original)).unwrap();
    assert_eq!(parse_resource(&restored.text).unwrap(), mesh);
    assert_eq!(parse_properties(&restored.text), properties);
}

#[test]
fn test_partially_damaged_obj_still_converts() {
    let obj = "o navmesh\n\
               v 0.0 0.0 0.0\n\
               v nonsense here\n\
               v 1.0 0.0 0.0\n\
               v 0.0 0.0 1.0\n\
               f 1 2 3\n\
               f 1 2 broken\n";
    let result = obj_to_resource(obj, None).unwrap();
    assert_eq!(result.vertex_count, 3);
    assert_eq!(result.polygon_count, 1);
}
