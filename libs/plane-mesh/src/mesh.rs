//! # Mesh Data Structure
//!
//! The geometry bundle handed to the rendering host: positions, UVs,
//! triangles, derived normals and bounds, and the index width the host
//! should upload with.

use crate::bounds::Aabb;
use config::constants::{DEGENERATE_AREA_EPSILON, WIDE_INDEX_RESOLUTION_THRESHOLD};
use glam::{DVec2, DVec3};
use serde::Serialize;

/// Bit width of the integers in an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum IndexFormat {
    /// 16-bit indices.
    #[default]
    U16,
    /// 32-bit indices.
    U32,
}

impl IndexFormat {
    /// Selects the index width for a plane of the given resolution.
    ///
    /// Wide indices are used exactly when `resolution` exceeds
    /// [`WIDE_INDEX_RESOLUTION_THRESHOLD`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use plane_mesh::IndexFormat;
    ///
    /// assert_eq!(IndexFormat::for_resolution(250), IndexFormat::U16);
    /// assert_eq!(IndexFormat::for_resolution(251), IndexFormat::U32);
    /// ```
    pub fn for_resolution(resolution: u32) -> Self {
        if resolution > WIDE_INDEX_RESOLUTION_THRESHOLD {
            Self::U32
        } else {
            Self::U16
        }
    }

    /// Size of one index in bytes.
    pub fn size_bytes(&self) -> usize {
        match self {
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }
}

/// Index buffer in its declared width.
#[derive(Debug, Clone, PartialEq)]
pub enum Indices {
    /// 16-bit indices.
    U16(Vec<u16>),
    /// 32-bit indices.
    U32(Vec<u32>),
}

impl Indices {
    /// Number of indices.
    pub fn len(&self) -> usize {
        match self {
            Self::U16(v) => v.len(),
            Self::U32(v) => v.len(),
        }
    }

    /// Returns true if the buffer holds no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of the stored indices.
    pub fn format(&self) -> IndexFormat {
        match self {
            Self::U16(_) => IndexFormat::U16,
            Self::U32(_) => IndexFormat::U32,
        }
    }

    /// Returns the index at `position`, widened to u32.
    pub fn get(&self, position: usize) -> Option<u32> {
        match self {
            Self::U16(v) => v.get(position).map(|&i| u32::from(i)),
            Self::U32(v) => v.get(position).copied(),
        }
    }
}

/// A triangle mesh with per-vertex UVs and normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the GPU boundary via the `*_f32` helpers.
///
/// A `Mesh` is immutable once built; obtain one from
/// [`PlaneMeshBuilder`](crate::PlaneMeshBuilder) or
/// [`create_plane`](crate::primitives::create_plane).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Texture coordinates, one per vertex
    uvs: Vec<DVec2>,
    /// Smooth vertex normals, one per vertex
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    index_format: IndexFormat,
    bounds: Aabb,
}

impl Mesh {
    /// Assembles a mesh and derives its normals and bounds.
    pub(crate) fn from_parts(
        vertices: Vec<DVec3>,
        uvs: Vec<DVec2>,
        triangles: Vec<[u32; 3]>,
        index_format: IndexFormat,
    ) -> Self {
        debug_assert_eq!(vertices.len(), uvs.len());
        debug_assert!(
            index_format == IndexFormat::U32 || vertices.len() <= usize::from(u16::MAX) + 1,
            "16-bit index format cannot address {} vertices",
            vertices.len()
        );

        let normals = smooth_normals(&vertices, &triangles);
        let bounds = Aabb::from_points(vertices.iter().copied())
            .unwrap_or(Aabb::new(DVec3::ZERO, DVec3::ZERO));

        Self {
            vertices,
            uvs,
            normals,
            triangles,
            index_format,
            bounds,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of indices (three per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns a reference to the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the texture coordinate at the given index.
    #[inline]
    pub fn uv(&self, index: u32) -> DVec2 {
        self.uvs[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Index width the host should upload the index buffer with.
    #[inline]
    pub fn index_format(&self) -> IndexFormat {
        self.index_format
    }

    /// Axis-aligned bounding box of all vertices.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Returns the index buffer in the mesh's declared width.
    pub fn indices(&self) -> Indices {
        match self.index_format {
            // from_parts guarantees every index fits in 16 bits here
            IndexFormat::U16 => Indices::U16(
                self.triangles
                    .iter()
                    .flatten()
                    .map(|&i| i as u16)
                    .collect(),
            ),
            IndexFormat::U32 => Indices::U32(self.indices_u32()),
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - UV and normal counts match the vertex count
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index, coincident or collinear
    ///   corners), judged independently of the mesh's scale
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.uvs.len() != self.vertices.len() || self.normals.len() != self.vertices.len() {
            return false;
        }

        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            if face_direction(v0, v1, v2).length() < DEGENERATE_AREA_EPSILON {
                return false;
            }
        }

        true
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.extend_from_slice(&v.as_vec3().to_array());
        }
        result
    }

    /// Exports texture coordinates as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.extend_from_slice(&uv.as_vec2().to_array());
        }
        result
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.normals.len() * 3);
        for n in &self.normals {
            result.extend_from_slice(&n.as_vec3().to_array());
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

/// Scales `edge` so its largest component has magnitude 1.
///
/// Squaring or crossing raw edges underflows for tiny meshes and overflows
/// for huge ones; rescaled edges keep the products near unit range.
fn rescale_edge(edge: DVec3) -> DVec3 {
    let largest = edge.abs().max_element();
    if largest > 0.0 && largest.is_finite() {
        edge / largest
    } else {
        DVec3::ZERO
    }
}

/// Unnormalized face direction of a triangle, independent of its size.
///
/// Zero when two corners coincide or all three are collinear.
fn face_direction(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    rescale_edge(v1 - v0).cross(rescale_edge(v2 - v0))
}

/// Computes smooth per-vertex normals.
///
/// Each vertex normal is the normalized sum of the unit face normals of the
/// triangles that reference it. Zero-area faces contribute nothing, and a
/// vertex with no usable faces gets a zero normal. The result does not
/// depend on the magnitude of the coordinates.
pub fn smooth_normals(vertices: &[DVec3], triangles: &[[u32; 3]]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; vertices.len()];

    for tri in triangles {
        let v0 = vertices[tri[0] as usize];
        let v1 = vertices[tri[1] as usize];
        let v2 = vertices[tri[2] as usize];

        let face = face_direction(v0, v1, v2).normalize_or_zero();

        for &i in tri {
            normals[i as usize] += face;
        }
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    normals
}
