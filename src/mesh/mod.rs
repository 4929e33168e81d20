//! 1D mesh representation, generation and file I/O.
//!
//! Provides:
//! - [`Mesh1D`]: face-node and centroid coordinates with validated construction
//! - [`build`]: pure mapping from a [`crate::GeometrySpec`] to a mesh
//! - Plain-text mesh serialization ([`serialize_mesh`], [`parse_mesh`],
//!   [`read_mesh_file`], [`write_mesh_file`], [`convert_raw_mesh`])
//!
//! # Mesh File Format
//!
//! One coordinate per line, centroids first, sections separated by a blank
//! line:
//!
//! ```text
//! CENTROID COORDINATES
//! 0.5
//! 1.5
//!
//! FACE NODES COORDINATES
//! 0
//! 1
//! 2
//! ```
//!
//! A legacy flat-array variant (a single `COORDINATES` section listing the
//! face nodes, optionally preceded by a `UNIT` entry) is accepted on read.

mod builder;
mod format;
mod mesh1d;

pub use builder::{BuildError, Discretization, build};
pub use format::{
    MeshFileError, convert_raw_mesh, parse_mesh, read_mesh_file, serialize_mesh,
    write_mesh_file,
};
pub use mesh1d::{Mesh1D, MeshError};
