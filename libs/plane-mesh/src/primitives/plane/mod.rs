//! # Plane Primitive
//!
//! Generates a flat, subdivided square grid on the XZ plane.
//!
//! Vertices are laid out z-major, x-minor, so the vertex at grid position
//! `(x, z)` has flat index `z * (resolution + 1) + x`. Triangle generation
//! depends on that layout.

use crate::error::{MeshError, MeshResult};
use crate::mesh::{IndexFormat, Mesh};
use config::constants::{MAX_VERTICES, MIN_RESOLUTION};
use glam::{DVec2, DVec3};

/// Checks plane parameters and returns the vertex count they produce.
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`] if `resolution < 1`, or `size` is not a
///   positive finite number.
/// - [`MeshError::TooManyVertices`] if `(resolution + 1)^2` exceeds
///   [`MAX_VERTICES`].
///
/// # Example
///
/// ```rust
/// use plane_mesh::primitives::validate_plane_parameters;
///
/// assert_eq!(validate_plane_parameters(2, 1.0).unwrap(), 9);
/// assert!(validate_plane_parameters(0, 1.0).is_err());
/// assert!(validate_plane_parameters(2, 0.0).is_err());
/// ```
pub fn validate_plane_parameters(resolution: u32, size: f64) -> MeshResult<usize> {
    if resolution < MIN_RESOLUTION {
        return Err(MeshError::invalid_parameter(
            "resolution",
            format!("must be at least {MIN_RESOLUTION}, got {resolution}"),
        ));
    }

    if !size.is_finite() || size <= 0.0 {
        return Err(MeshError::invalid_parameter(
            "size",
            format!("must be a positive finite number, got {size}"),
        ));
    }

    let side = resolution as usize + 1;
    let count = side.checked_mul(side).unwrap_or(usize::MAX);
    if count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        });
    }

    Ok(count)
}

/// Creates a subdivided plane mesh.
///
/// # Arguments
///
/// * `resolution` - Grid subdivisions along each axis
/// * `size` - World-space edge length; the plane spans `[-size/2, size/2]`
///   on x and z at `y = 0`
///
/// # Returns
///
/// A mesh with `(resolution + 1)^2` vertices and `2 * resolution^2`
/// triangles, with smooth normals and bounds already derived.
///
/// # Example
///
/// ```rust
/// use plane_mesh::primitives::create_plane;
/// use glam::DVec3;
///
/// let mesh = create_plane(2, 2.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// assert_eq!(mesh.vertex(0), DVec3::new(-1.0, 0.0, -1.0));
/// assert_eq!(mesh.triangle(0), [0, 3, 1]);
/// ```
pub fn create_plane(resolution: u32, size: f64) -> MeshResult<Mesh> {
    let vertex_count = validate_plane_parameters(resolution, size)
        .inspect_err(|err| log::warn!("Rejected plane parameters: {err}"))?;

    let index_format = IndexFormat::for_resolution(resolution);
    if index_format == IndexFormat::U32 {
        log::trace!("Plane resolution {resolution} requires 32-bit indices");
    }

    let r = resolution as usize;
    let row = r + 1;
    let steps = f64::from(resolution);

    let mut vertices = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for z in 0..=r {
        let v = z as f64 / steps;
        for x in 0..=r {
            let u = x as f64 / steps;
            vertices.push(DVec3::new((u - 0.5) * size, 0.0, (v - 0.5) * size));
            uvs.push(DVec2::new(u, v));
        }
    }

    let mut triangles = Vec::with_capacity(r * r * 2);

    for z in 0..r {
        for x in 0..r {
            // validate_plane_parameters bounds every index by MAX_VERTICES
            let i = (z * row + x) as u32;
            let next_row = i + row as u32;

            triangles.push([i, next_row, i + 1]);
            triangles.push([i + 1, next_row, next_row + 1]);
        }
    }

    let mesh = Mesh::from_parts(vertices, uvs, triangles, index_format);

    log::debug!(
        "Generated plane: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}
