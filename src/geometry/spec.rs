//! Validated geometry specification.

use thiserror::Error;

/// Error type for geometry validation.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Domain end does not lie to the right of the start.
    #[error("invalid domain: x_end ({x_end}) must be greater than x_start ({x_start})")]
    InvalidDomain { x_start: f64, x_end: f64 },

    /// Zero finite volumes requested.
    #[error("number of volumes must be at least 1")]
    ZeroVolumes,

    /// Expansion ratio is not usable for geometric spacing.
    ///
    /// The geometric-series sum `(1 - alpha^N) / (1 - alpha)` is undefined
    /// for `alpha == 1` and meaningless for `alpha <= 0`.
    #[error("invalid expansion ratio {0}: must be finite, positive and not equal to 1")]
    InvalidExpansionRatio(f64),

    /// Geometric spacing requested without an expansion ratio.
    #[error("geometric spacing requires an expansion ratio")]
    MissingExpansionRatio,
}

/// Distribution law for interval widths inside the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spacing {
    /// Equal interval widths `h = (x_end - x_start) / N`.
    Uniform,
    /// Interval widths follow a geometric series
    /// `h_i = h_1 * alpha^(i-1)` with ratio `alpha = expansion_ratio`.
    Geometric { expansion_ratio: f64 },
}

impl Spacing {
    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Spacing::Uniform => "uniform",
            Spacing::Geometric { .. } => "geometric",
        }
    }
}

/// Validated description of a 1D meshing problem.
///
/// Immutable once constructed: the constructors enforce `x_end > x_start`,
/// `n_volumes > 0` and, for geometric spacing, a finite positive expansion
/// ratio different from 1. Consumed by [`crate::mesh::build`].
///
/// # Example
///
/// ```
/// use fvmesh::GeometrySpec;
///
/// let spec = GeometrySpec::geometric(0.0, 1.0, 10, 1.1).unwrap();
/// assert_eq!(spec.n_volumes(), 10);
///
/// // alpha == 1 would make the geometric series sum degenerate
/// assert!(GeometrySpec::geometric(0.0, 1.0, 10, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySpec {
    x_start: f64,
    x_end: f64,
    n_volumes: u32,
    spacing: Spacing,
}

impl GeometrySpec {
    /// Create a spec with the given spacing law, validating all invariants.
    pub fn new(
        x_start: f64,
        x_end: f64,
        n_volumes: u32,
        spacing: Spacing,
    ) -> Result<Self, GeometryError> {
        if !(x_end > x_start) {
            return Err(GeometryError::InvalidDomain { x_start, x_end });
        }
        if n_volumes == 0 {
            return Err(GeometryError::ZeroVolumes);
        }
        if let Spacing::Geometric { expansion_ratio } = spacing {
            if !expansion_ratio.is_finite() || expansion_ratio <= 0.0 || expansion_ratio == 1.0 {
                return Err(GeometryError::InvalidExpansionRatio(expansion_ratio));
            }
        }

        Ok(Self {
            x_start,
            x_end,
            n_volumes,
            spacing,
        })
    }

    /// Create a uniformly spaced spec.
    pub fn uniform(x_start: f64, x_end: f64, n_volumes: u32) -> Result<Self, GeometryError> {
        Self::new(x_start, x_end, n_volumes, Spacing::Uniform)
    }

    /// Create a geometrically spaced spec with the given expansion ratio.
    pub fn geometric(
        x_start: f64,
        x_end: f64,
        n_volumes: u32,
        expansion_ratio: f64,
    ) -> Result<Self, GeometryError> {
        Self::new(
            x_start,
            x_end,
            n_volumes,
            Spacing::Geometric { expansion_ratio },
        )
    }

    /// Left endpoint of the domain.
    #[inline]
    pub fn x_start(&self) -> f64 {
        self.x_start
    }

    /// Right endpoint of the domain.
    #[inline]
    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    /// Number of finite volumes (intervals) in the domain.
    #[inline]
    pub fn n_volumes(&self) -> u32 {
        self.n_volumes
    }

    /// Spacing law.
    #[inline]
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Total domain length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.x_end - self.x_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_spec() {
        let spec = GeometrySpec::uniform(0.0, 4.0, 4).unwrap();
        assert_eq!(spec.x_start(), 0.0);
        assert_eq!(spec.x_end(), 4.0);
        assert_eq!(spec.n_volumes(), 4);
        assert_eq!(spec.spacing(), Spacing::Uniform);
        assert_eq!(spec.length(), 4.0);
    }

    #[test]
    fn test_geometric_spec() {
        let spec = GeometrySpec::geometric(-1.0, 1.0, 8, 1.2).unwrap();
        assert_eq!(
            spec.spacing(),
            Spacing::Geometric {
                expansion_ratio: 1.2
            }
        );
        assert_eq!(spec.spacing().name(), "geometric");
    }

    #[test]
    fn test_reversed_domain_rejected() {
        let result = GeometrySpec::uniform(1.0, 0.0, 4);
        assert!(matches!(result, Err(GeometryError::InvalidDomain { .. })));

        // Degenerate (zero-length) domain is rejected too
        let result = GeometrySpec::uniform(1.0, 1.0, 4);
        assert!(matches!(result, Err(GeometryError::InvalidDomain { .. })));
    }

    #[test]
    fn test_zero_volumes_rejected() {
        let result = GeometrySpec::uniform(0.0, 1.0, 0);
        assert!(matches!(result, Err(GeometryError::ZeroVolumes)));
    }

    #[test]
    fn test_bad_expansion_ratio_rejected() {
        for alpha in [1.0, 0.0, -0.5, f64::NAN, f64::INFINITY] {
            let result = GeometrySpec::geometric(0.0, 1.0, 4, alpha);
            assert!(
                matches!(result, Err(GeometryError::InvalidExpansionRatio(_))),
                "alpha = {} should be rejected",
                alpha
            );
        }
    }

    #[test]
    fn test_contracting_ratio_accepted() {
        // 0 < alpha < 1 shrinks intervals left to right and is valid
        assert!(GeometrySpec::geometric(0.0, 1.0, 4, 0.9).is_ok());
    }
}
