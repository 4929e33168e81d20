//! Numerical utilities for mesh generation.
//!
//! Currently holds the expansion-ratio solver: a fixed-point iteration that
//! recovers the geometric expansion ratio producing a target first-cell
//! width over a given domain. It is a standalone utility; callers feed the
//! recovered ratio into [`crate::GeometrySpec::geometric`] themselves.

mod expansion;

pub use expansion::{ExpansionRatioSolve, ExpansionRatioSolver};
