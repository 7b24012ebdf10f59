//! # Plane Mesh
//!
//! Procedural generation of subdivided flat grid meshes for rendering.
//! A square plane is split into `resolution × resolution` quads, each split
//! into two triangles, with UVs, smooth normals and bounds.
//!
//! ## Architecture
//!
//! ```text
//! PlaneSettings / PlaneMeshBuilder → primitives::create_plane → Mesh → host buffers
//! ```
//!
//! The crate has no rendering code. The host takes ownership of the
//! produced [`Mesh`] and uploads its buffers, using [`Mesh::index_format`]
//! to pick the index width.
//!
//! ## Usage
//!
//! ```rust
//! use plane_mesh::PlaneMeshBuilder;
//!
//! let mesh = PlaneMeshBuilder::new(100, 10.0).build()?;
//! let positions = mesh.vertices_f32();
//! let indices = mesh.indices();
//! assert_eq!(positions.len(), 101 * 101 * 3);
//! assert_eq!(indices.len(), 100 * 100 * 6);
//! # Ok::<(), plane_mesh::MeshError>(())
//! ```

pub mod bounds;
pub mod builder;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod settings;

pub use bounds::Aabb;
pub use builder::PlaneMeshBuilder;
pub use error::{MeshError, MeshResult};
pub use mesh::{IndexFormat, Indices, Mesh};
pub use settings::PlaneSettings;
