// Host-side tests for binary glTF mesh extraction. The fixtures are tiny
// GLB files assembled in memory.

use player_core::model::{derive_normals, parse_glb};
use player_core::PlayerError;
use glam::Vec3;

fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json_bytes = json.as_bytes().to_vec();
    while json_bytes.len() % 4 != 0 {
        json_bytes.push(b' ');
    }
    let mut bin_bytes = bin.to_vec();
    while bin_bytes.len() % 4 != 0 {
        bin_bytes.push(0);
    }
    let total = 12 + 8 + json_bytes.len() + 8 + bin_bytes.len();

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json_bytes);
    out.extend_from_slice(&(bin_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(&bin_bytes);
    out
}

fn triangle_bin() -> Vec<u8> {
    let positions: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    positions.iter().flat_map(|f| f.to_le_bytes()).collect()
}

const TRIANGLE_JSON: &str = r#"{
  "asset": {"version": "2.0"},
  "buffers": [{"byteLength": 36}],
  "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 36}],
  "accessors": [{
    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
    "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
  }],
  "materials": [{"pbrMetallicRoughness": {"baseColorFactor": [0.5, 0.25, 1.0, 1.0]}}],
  "meshes": [{"primitives": [{"attributes": {"POSITION": 0}, "material": 0}]}],
  "nodes": [
    {"children": [1], "translation": [0.0, 0.0, 2.0]},
    {"mesh": 0, "scale": [2.0, 2.0, 2.0]}
  ],
  "scenes": [{"nodes": [0]}],
  "scene": 0
}"#;

#[test]
fn triangle_is_baked_with_node_transforms() {
    let mesh = parse_glb(&glb(TRIANGLE_JSON, &triangle_bin())).expect("parse");
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.indices, vec![0, 1, 2]);

    // child scale 2 then parent translation z+2
    assert_eq!(mesh.vertices[0].position, [0.0, 0.0, 2.0]);
    assert_eq!(mesh.vertices[1].position, [2.0, 0.0, 2.0]);
    assert_eq!(mesh.vertices[2].position, [0.0, 2.0, 2.0]);

    let (lo, hi) = mesh.bounds().unwrap();
    assert_eq!(lo, Vec3::new(0.0, 0.0, 2.0));
    assert_eq!(hi, Vec3::new(2.0, 2.0, 2.0));
}

#[test]
fn missing_normals_are_derived_and_material_colour_applied() {
    let mesh = parse_glb(&glb(TRIANGLE_JSON, &triangle_bin())).expect("parse");
    for v in &mesh.vertices {
        let n = Vec3::from(v.normal);
        assert!((n - Vec3::Z).length() < 1e-5, "normal {:?}", n);
        assert_eq!(v.color, [0.5, 0.25, 1.0, 1.0]);
    }
}

#[test]
fn garbage_bytes_are_a_model_error() {
    let err = parse_glb(b"definitely not a glb").unwrap_err();
    assert!(matches!(err, PlayerError::Model(_)));
}

#[test]
fn scene_without_meshes_is_rejected() {
    let json = r#"{
      "asset": {"version": "2.0"},
      "nodes": [{"translation": [0.0, 1.0, 0.0]}],
      "scenes": [{"nodes": [0]}],
      "scene": 0
    }"#;
    let err = parse_glb(&glb(json, &[])).unwrap_err();
    assert!(matches!(err, PlayerError::Model(_)));
}

#[test]
fn derived_normals_follow_winding() {
    let positions = [Vec3::ZERO, Vec3::Y, Vec3::X];
    let normals = derive_normals(&positions, &[0, 1, 2]);
    for n in normals {
        assert!((n + Vec3::Z).length() < 1e-6);
    }
}
