//! Mesh generation from a geometry specification.

use std::str::FromStr;

use thiserror::Error;

use super::mesh1d::{Mesh1D, MeshError};
use crate::geometry::{GeometrySpec, Spacing};

/// Error type for mesh generation.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Discretization mode with no computation path.
    #[error("unsupported discretization: {0}")]
    UnsupportedDiscretization(&'static str),

    /// Discretization name not recognized.
    #[error("unknown discretization '{0}' (expected 'cellcenter' or 'cellvertex')")]
    UnknownDiscretization(String),

    /// Generated coordinates fail mesh validation (degenerate geometry,
    /// e.g. an expansion ratio whose powers overflow the interval widths).
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Discretization mode for the generated mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Discretization {
    /// Cell-center: unknowns at volume centroids.
    #[default]
    CellCenter,
    /// Cell-vertex: unknowns at face nodes. Not implemented; requesting it
    /// is an error rather than silently producing cell-center output.
    CellVertex,
}

impl Discretization {
    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Discretization::CellCenter => "cellcenter",
            Discretization::CellVertex => "cellvertex",
        }
    }
}

impl FromStr for Discretization {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cellcenter" => Ok(Discretization::CellCenter),
            "cellvertex" => Ok(Discretization::CellVertex),
            other => Err(BuildError::UnknownDiscretization(other.to_string())),
        }
    }
}

/// Generate a mesh from a geometry specification.
///
/// Pure and deterministic; the spec's invariants (positive volume count,
/// ordered domain, valid expansion ratio) are already guaranteed by
/// [`GeometrySpec`] construction.
///
/// # Errors
/// - [`BuildError::UnsupportedDiscretization`] for [`Discretization::CellVertex`]
///
/// # Example
///
/// ```
/// use fvmesh::{Discretization, GeometrySpec, build};
///
/// let spec = GeometrySpec::uniform(0.0, 4.0, 4).unwrap();
/// let mesh = build(&spec, Discretization::CellCenter).unwrap();
/// assert_eq!(mesh.centroids(), &[0.5, 1.5, 2.5, 3.5]);
/// ```
pub fn build(spec: &GeometrySpec, method: Discretization) -> Result<Mesh1D, BuildError> {
    match method {
        Discretization::CellCenter => {}
        Discretization::CellVertex => {
            return Err(BuildError::UnsupportedDiscretization("cellvertex"));
        }
    }

    let mesh = match spec.spacing() {
        Spacing::Uniform => uniform_mesh(spec),
        Spacing::Geometric { expansion_ratio } => geometric_mesh(spec, expansion_ratio),
    }?;

    Ok(mesh)
}

/// `count` evenly spaced points over [a, b], inclusive of both ends.
///
/// The last point is pinned to `b` so the endpoint is reproduced exactly
/// despite rounding in the step multiplication. For `count == 1` the single
/// point is `a`.
fn linspace(a: f64, b: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![a];
    }

    let step = (b - a) / (count - 1) as f64;
    (0..count)
        .map(|i| if i == count - 1 { b } else { a + i as f64 * step })
        .collect()
}

fn uniform_mesh(spec: &GeometrySpec) -> Result<Mesh1D, MeshError> {
    let n = spec.n_volumes() as usize;
    let dx = spec.length() / n as f64;

    // N volumes => N + 1 face nodes
    let face_nodes = linspace(spec.x_start(), spec.x_end(), n + 1);
    // The first and last centroids sit dx/2 inside the domain boundaries;
    // the rest are evenly spaced between them.
    let centroids = linspace(spec.x_start() + dx / 2.0, spec.x_end() - dx / 2.0, n);

    Mesh1D::from_parts(face_nodes, centroids)
}

fn geometric_mesh(spec: &GeometrySpec, alpha: f64) -> Result<Mesh1D, MeshError> {
    let n = spec.n_volumes() as usize;

    // First interval width from the geometric series sum
    // S = 1 + alpha + ... + alpha^(N-1); alpha != 1 is guaranteed by
    // GeometrySpec validation.
    let sum_geom_series = (1.0 - alpha.powi(n as i32)) / (1.0 - alpha);
    let h_first = spec.length() / sum_geom_series;

    let mut face_nodes = vec![0.0; n + 1];
    let mut centroids = vec![0.0; n];

    // Endpoints are fixed by construction, not recomputed from the
    // recurrence, so they match the requested domain exactly.
    face_nodes[0] = spec.x_start();
    face_nodes[n] = spec.x_end();

    for i in 1..n {
        let h_i = h_first * alpha.powi(i as i32 - 1);
        face_nodes[i] = face_nodes[i - 1] + h_i;
        centroids[i - 1] = (face_nodes[i] + face_nodes[i - 1]) / 2.0;
    }

    // The last interval's true width is whatever remains to reach x_end, so
    // its centroid comes from the pinned endpoint rather than the recurrence.
    // This also covers N == 1, where the loop body never runs.
    centroids[n - 1] = (face_nodes[n - 1] + spec.x_end()) / 2.0;

    Mesh1D::from_parts(face_nodes, centroids)
}
