use crate::error::{PlayerError, Result};
use glam::{Mat3, Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// A flattened, world-space mesh ready for upload.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Axis-aligned bounds as (min, max).
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

/// Parse a binary glTF (`.glb`) and bake every mesh of the default scene into
/// one triangle list. Node transforms are applied, the material base colour
/// (times vertex colour, if present) becomes the vertex colour, and missing
/// normals are derived from the triangles. Textures are not sampled.
pub fn parse_glb(bytes: &[u8]) -> Result<MeshData> {
    let gltf = gltf::Gltf::from_slice(bytes).map_err(|e| PlayerError::Model(e.to_string()))?;
    let blob = gltf.blob.as_deref();
    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or_else(|| PlayerError::Model("no scene".into()))?;

    let mut mesh = MeshData::default();
    for node in scene.nodes() {
        append_node(&node, Mat4::IDENTITY, blob, &mut mesh)?;
    }
    if mesh.is_empty() {
        return Err(PlayerError::Model("scene has no triangles".into()));
    }
    log::info!(
        "[model] {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.indices.len() / 3
    );
    Ok(mesh)
}

fn append_node(
    node: &gltf::Node,
    parent: Mat4,
    blob: Option<&[u8]>,
    out: &mut MeshData,
) -> Result<()> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            append_primitive(&primitive, world, blob, out)?;
        }
    }
    for child in node.children() {
        append_node(&child, world, blob, out)?;
    }
    Ok(())
}

fn append_primitive(
    primitive: &gltf::Primitive,
    world: Mat4,
    blob: Option<&[u8]>,
    out: &mut MeshData,
) -> Result<()> {
    let reader = primitive.reader(|buffer| match buffer.source() {
        gltf::buffer::Source::Bin => blob,
        gltf::buffer::Source::Uri(_) => None,
    });
    let Some(positions) = reader.read_positions() else {
        return Ok(());
    };
    let positions: Vec<Vec3> = positions.map(|p| world.transform_point3(Vec3::from(p))).collect();
    let base = out.vertices.len() as u32;

    let indices: Vec<u32> = match reader.read_indices() {
        Some(ix) => ix.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    if let Some(bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(PlayerError::Model(format!("index {} out of bounds", bad)));
    }

    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    let normals: Vec<Vec3> = match reader.read_normals() {
        Some(ns) => ns
            .map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero())
            .collect(),
        None => derive_normals(&positions, &indices),
    };

    let factor = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();
    let colors: Vec<[f32; 4]> = match reader.read_colors(0) {
        Some(cs) => cs
            .into_rgba_f32()
            .map(|c| {
                [
                    c[0] * factor[0],
                    c[1] * factor[1],
                    c[2] * factor[2],
                    c[3] * factor[3],
                ]
            })
            .collect(),
        None => vec![factor; positions.len()],
    };

    for (i, p) in positions.iter().enumerate() {
        out.vertices.push(MeshVertex {
            position: p.to_array(),
            normal: normals.get(i).copied().unwrap_or(Vec3::Y).to_array(),
            color: colors.get(i).copied().unwrap_or(factor),
        });
    }
    out.indices.extend(indices.iter().map(|i| base + i));
    Ok(())
}

/// Area-weighted vertex normals from a triangle list.
pub fn derive_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let n = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += n;
        normals[b] += n;
        normals[c] += n;
    }
    normals.into_iter().map(|n| n.normalize_or_zero()).collect()
}
