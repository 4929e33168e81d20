//! # fvmesh
//!
//! A 1D mesh generator for finite-difference and finite-volume
//! discretizations.
//!
//! This crate provides the building blocks for producing one-dimensional
//! computational meshes from a small textual geometry description:
//! - Geometry specification with validated construction (domain bounds,
//!   volume count, spacing law)
//! - Mesh generation under uniform or geometric (ratio-based) spacing
//! - Fixed-point solver recovering a geometric expansion ratio from a
//!   target first-cell width
//! - Plain-text mesh serialization with exact round-trip of `f64` values
//!
//! # Example
//!
//! ```
//! use fvmesh::{Discretization, GeometrySpec, build};
//!
//! let spec = GeometrySpec::uniform(0.0, 4.0, 4).unwrap();
//! let mesh = build(&spec, Discretization::CellCenter).unwrap();
//!
//! assert_eq!(mesh.face_nodes(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(mesh.centroids(), &[0.5, 1.5, 2.5, 3.5]);
//! ```

pub mod geometry;
pub mod mesh;
pub mod solver;

// Re-export main types for convenience
pub use geometry::{
    GeometryError, GeometryFileError, GeometrySpec, Spacing, parse_geometry,
    read_geometry_file,
};
pub use mesh::{
    BuildError, Discretization, Mesh1D, MeshError, MeshFileError, build,
    convert_raw_mesh, parse_mesh, read_mesh_file, serialize_mesh, write_mesh_file,
};
pub use solver::{ExpansionRatioSolve, ExpansionRatioSolver};
