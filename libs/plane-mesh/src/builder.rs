//! # Plane Mesh Builder
//!
//! Owns the generation parameters and produces a fresh [`Mesh`] on every
//! call. The builder keeps no state between builds, so `build` and
//! `regenerate` are the same pure computation.

use crate::error::MeshResult;
use crate::mesh::{IndexFormat, Mesh};
use crate::primitives::create_plane;
use crate::settings::PlaneSettings;
use config::constants::{DEFAULT_RESOLUTION, DEFAULT_SIZE};

/// Builds subdivided plane meshes.
///
/// Parameters are not checked until [`build`](Self::build), which rejects
/// invalid values before allocating any buffer.
///
/// # Example
///
/// ```rust
/// use plane_mesh::{IndexFormat, PlaneMeshBuilder};
///
/// let builder = PlaneMeshBuilder::new(2, 2.0);
/// let mesh = builder.build().unwrap();
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.index_count(), 24);
/// assert_eq!(mesh.index_format(), IndexFormat::U16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMeshBuilder {
    resolution: u32,
    size: f64,
}

impl PlaneMeshBuilder {
    /// Creates a builder for a `resolution × resolution` grid with edge length `size`.
    pub fn new(resolution: u32, size: f64) -> Self {
        Self { resolution, size }
    }

    /// Creates a builder from host settings.
    pub fn from_settings(settings: &PlaneSettings) -> Self {
        Self::new(settings.resolution, settings.size)
    }

    /// Replaces the resolution.
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Replaces the edge length.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Grid subdivisions along each axis.
    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// World-space edge length.
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Index width the built mesh will declare.
    pub fn index_format(&self) -> IndexFormat {
        IndexFormat::for_resolution(self.resolution)
    }

    /// Current parameters as host settings.
    pub fn settings(&self) -> PlaneSettings {
        PlaneSettings {
            resolution: self.resolution,
            size: self.size,
        }
    }

    /// Generates the mesh.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`](crate::MeshError::InvalidParameter)
    /// for `resolution < 1` or a non-positive `size`, and
    /// [`MeshError::TooManyVertices`](crate::MeshError::TooManyVertices) when
    /// the grid would exceed the vertex limit.
    pub fn build(&self) -> MeshResult<Mesh> {
        create_plane(self.resolution, self.size)
    }

    /// Generates the mesh again on demand.
    pub fn regenerate(&self) -> MeshResult<Mesh> {
        self.build()
    }
}

impl Default for PlaneMeshBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION, DEFAULT_SIZE)
    }
}
