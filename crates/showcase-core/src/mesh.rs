//! glTF / GLB import into a single flattened triangle mesh.
//!
//! Node transforms are baked into vertex data and each primitive's base colour
//! factor becomes a per-vertex colour, so the renderer only needs one draw.

use crate::constants::DEFAULT_ALBEDO;
use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};
use thiserror::Error;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("invalid glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("glTF has no scene to instantiate")]
    NoScene,
    #[error("primitive {primitive} of mesh {mesh} has no positions")]
    MissingPositions { mesh: usize, primitive: usize },
    #[error("model contains no triangle primitives")]
    NoTriangles,
}

#[derive(Clone, Debug, Default)]
pub struct ModelMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl ModelMesh {
    /// Parse a binary (`.glb`) or JSON glTF with embedded buffers.
    pub fn from_gltf_slice(bytes: &[u8]) -> Result<Self, MeshError> {
        let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
        let buffers = gltf::import_buffers(&document, None, blob)?;
        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or(MeshError::NoScene)?;

        let mut mesh = ModelMesh::default();
        for node in scene.nodes() {
            mesh.append_node(&node, Mat4::IDENTITY, &buffers)?;
        }
        if mesh.indices.is_empty() {
            return Err(MeshError::NoTriangles);
        }
        Ok(mesh)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds of all vertices, `None` when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    fn append_node(
        &mut self,
        node: &gltf::Node,
        parent: Mat4,
        buffers: &[gltf::buffer::Data],
    ) -> Result<(), MeshError> {
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(m) = node.mesh() {
            let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
            for primitive in m.primitives() {
                if primitive.mode() != gltf::mesh::Mode::Triangles {
                    log::warn!(
                        "[asset] skipping mesh {} primitive {}: mode {:?}",
                        m.index(),
                        primitive.index(),
                        primitive.mode()
                    );
                    continue;
                }
                self.append_primitive(&m, &primitive, world, normal_matrix, buffers)?;
            }
        }
        for child in node.children() {
            self.append_node(&child, world, buffers)?;
        }
        Ok(())
    }

    fn append_primitive(
        &mut self,
        mesh: &gltf::Mesh,
        primitive: &gltf::Primitive,
        world: Mat4,
        normal_matrix: Mat3,
        buffers: &[gltf::buffer::Data],
    ) -> Result<(), MeshError> {
        let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| &d.0[..]));
        let positions: Vec<Vec3> = reader
            .read_positions()
            .ok_or(MeshError::MissingPositions {
                mesh: mesh.index(),
                primitive: primitive.index(),
            })?
            .map(|p| world.transform_point3(Vec3::from(p)))
            .collect();
        let local_indices: Vec<u32> = match reader.read_indices() {
            Some(indices) => indices.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        let normals: Vec<Vec3> = match reader.read_normals() {
            Some(normals) => normals
                .map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero())
                .collect(),
            None => Vec::new(),
        };
        let normals = if normals.len() == positions.len() {
            normals
        } else {
            if !normals.is_empty() {
                log::warn!(
                    "[asset] mesh {} primitive {}: {} normals for {} positions, regenerating",
                    mesh.index(),
                    primitive.index(),
                    normals.len(),
                    positions.len()
                );
            }
            smooth_normals(&positions, &local_indices)
        };
        let base = primitive
            .material()
            .pbr_metallic_roughness()
            .base_color_factor();
        let color = if primitive.material().index().is_some() {
            [base[0], base[1], base[2]]
        } else {
            DEFAULT_ALBEDO
        };

        let offset = self.vertices.len() as u32;
        self.vertices
            .extend(positions.iter().zip(normals.iter()).map(|(p, n)| MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
                color,
            }));
        let count = self.vertices.len() as u32 - offset;
        // Drop trailing partial triangles and out-of-range indices.
        for tri in local_indices.chunks_exact(3) {
            if tri.iter().all(|&i| i < count) {
                self.indices.extend(tri.iter().map(|&i| i + offset));
            }
        }
        Ok(())
    }
}

/// Area-weighted vertex normals for primitives that ship without them.
pub fn smooth_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals.iter().map(|n| n.normalize_or_zero()).collect()
}
