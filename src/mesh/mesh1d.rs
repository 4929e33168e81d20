//! 1D mesh representation.
//!
//! A 1D mesh is a partition of an interval [x_start, x_end] into finite
//! volumes. The mesh stores coordinates at control-volume boundaries
//! (face nodes) and at control-volume representative points (centroids),
//! following the cell-center convention.

use thiserror::Error;

/// Error type for mesh construction.
#[derive(Debug, Error)]
pub enum MeshError {
    /// No intervals.
    #[error("mesh must contain at least one volume (two face nodes)")]
    Empty,

    /// Centroid count does not match the interval count.
    #[error("expected {expected} centroids for {n_faces} face nodes, got {actual}")]
    LengthMismatch {
        n_faces: usize,
        expected: usize,
        actual: usize,
    },

    /// Face nodes are not strictly increasing.
    #[error("face nodes must be strictly increasing (violation at index {index})")]
    NonMonotonic { index: usize },

    /// A centroid lies outside its interval.
    #[error("centroid {index} lies outside its interval")]
    CentroidOutsideInterval { index: usize },
}

/// 1D cell-center mesh of an interval.
///
/// Construction is validated ([`Mesh1D::from_parts`]); a mesh in hand always
/// has `n_volumes + 1` strictly increasing face nodes and one centroid
/// strictly inside each interval. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh1D {
    /// Control-volume boundary coordinates, length n_volumes + 1.
    face_nodes: Vec<f64>,
    /// Control-volume representative points, length n_volumes.
    centroids: Vec<f64>,
}

impl Mesh1D {
    /// Create a mesh from face-node and centroid arrays.
    ///
    /// # Errors
    /// - [`MeshError::Empty`] for fewer than two face nodes
    /// - [`MeshError::LengthMismatch`] unless `centroids.len() == face_nodes.len() - 1`
    /// - [`MeshError::NonMonotonic`] unless face nodes strictly increase
    /// - [`MeshError::CentroidOutsideInterval`] unless each centroid lies
    ///   strictly inside its interval
    pub fn from_parts(face_nodes: Vec<f64>, centroids: Vec<f64>) -> Result<Self, MeshError> {
        if face_nodes.len() < 2 {
            return Err(MeshError::Empty);
        }
        if centroids.len() != face_nodes.len() - 1 {
            return Err(MeshError::LengthMismatch {
                n_faces: face_nodes.len(),
                expected: face_nodes.len() - 1,
                actual: centroids.len(),
            });
        }
        for i in 1..face_nodes.len() {
            if face_nodes[i] <= face_nodes[i - 1] {
                return Err(MeshError::NonMonotonic { index: i });
            }
        }
        for (i, &c) in centroids.iter().enumerate() {
            if c <= face_nodes[i] || c >= face_nodes[i + 1] {
                return Err(MeshError::CentroidOutsideInterval { index: i });
            }
        }

        Ok(Self {
            face_nodes,
            centroids,
        })
    }

    /// Face-node coordinates as a slice.
    #[inline]
    pub fn face_nodes(&self) -> &[f64] {
        &self.face_nodes
    }

    /// Centroid coordinates as a slice.
    #[inline]
    pub fn centroids(&self) -> &[f64] {
        &self.centroids
    }

    /// Number of finite volumes.
    #[inline]
    pub fn n_volumes(&self) -> usize {
        self.centroids.len()
    }

    /// Left endpoint of the domain.
    #[inline]
    pub fn x_start(&self) -> f64 {
        self.face_nodes[0]
    }

    /// Right endpoint of the domain.
    #[inline]
    pub fn x_end(&self) -> f64 {
        self.face_nodes[self.face_nodes.len() - 1]
    }

    /// Total domain length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.x_end() - self.x_start()
    }

    /// Interval widths: `widths[i] = face_nodes[i+1] - face_nodes[i]`.
    pub fn interval_widths(&self) -> Vec<f64> {
        (0..self.n_volumes())
            .map(|i| self.face_nodes[i + 1] - self.face_nodes[i])
            .collect()
    }

    /// Get minimum interval width.
    pub fn h_min(&self) -> f64 {
        self.interval_widths()
            .into_iter()
            .fold(f64::INFINITY, f64::min)
    }
}
