//! Plain-text mesh file I/O.
//!
//! Supports the sectioned keyword format (centroids first, then face nodes)
//! and, on read, the legacy flat-array variant. Coordinates are written with
//! Rust's shortest round-trip `f64` formatting, so parsing a serialized mesh
//! reproduces the original values exactly.
//!
//! # Example
//! ```no_run
//! use fvmesh::read_mesh_file;
//! use std::path::Path;
//!
//! let mesh = read_mesh_file(Path::new("sample.mesh")).expect("Failed to read mesh");
//! ```

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::mesh1d::{Mesh1D, MeshError};

/// Error type for mesh file I/O operations.
#[derive(Debug, Error)]
pub enum MeshFileError {
    /// File could not be opened or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is empty or contains only whitespace.
    #[error("mesh input is empty")]
    EmptyInput,

    /// Invalid file content.
    #[error("parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Missing required section.
    #[error("missing section: {0}")]
    MissingSection(&'static str),

    /// Parsed coordinates do not form a valid mesh.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

const CENTROID_SECTION: &str = "CENTROID COORDINATES";
const FACE_SECTION: &str = "FACE NODES COORDINATES";
const LEGACY_COORDINATES: &str = "COORDINATES";
const LEGACY_UNIT: &str = "UNIT";

/// Serialize a mesh to the sectioned text format.
///
/// Centroids first, then face nodes, one coordinate per line, sections
/// separated by a blank line.
pub fn serialize_mesh(mesh: &Mesh1D) -> String {
    let mut out = String::new();

    out.push_str(CENTROID_SECTION);
    out.push('\n');
    for &x in mesh.centroids() {
        // Infallible for String
        let _ = writeln!(out, "{}", x);
    }
    out.push('\n');

    out.push_str(FACE_SECTION);
    out.push('\n');
    for &x in mesh.face_nodes() {
        let _ = writeln!(out, "{}", x);
    }

    out
}

fn parse_coordinate(line: usize, value: &str) -> Result<f64, MeshFileError> {
    let x: f64 = value.parse().map_err(|_| MeshFileError::ParseError {
        line,
        message: format!("invalid coordinate: '{}'", value),
    })?;
    if !x.is_finite() {
        return Err(MeshFileError::ParseError {
            line,
            message: format!("coordinate is not finite: '{}'", value),
        });
    }
    Ok(x)
}

/// Interval midpoints of a face-node array.
fn midpoints(face_nodes: &[f64]) -> Vec<f64> {
    face_nodes
        .windows(2)
        .map(|w| (w[0] + w[1]) / 2.0)
        .collect()
}

#[derive(PartialEq)]
enum Section {
    /// Before any keyword.
    Preamble,
    /// Collecting centroid coordinates.
    Centroids,
    /// Collecting face-node coordinates.
    Faces,
    /// Next non-blank line is the legacy unit name.
    LegacyUnit,
    /// Collecting legacy flat coordinates.
    LegacyCoordinates,
}

/// Parse a mesh from a string.
///
/// Accepts the sectioned format ([`serialize_mesh`]) and the legacy
/// flat-array variant: a single `COORDINATES` section whose values are taken
/// as face nodes (centroids are derived as interval midpoints), optionally
/// preceded by a `UNIT` entry, which is skipped.
///
/// # Errors
/// - [`MeshFileError::EmptyInput`] if the input is empty or whitespace-only
/// - [`MeshFileError::ParseError`] for unparsable or non-finite coordinates,
///   coordinates outside any section, or sections out of order
/// - [`MeshFileError::MissingSection`] if a required section never appears
/// - [`MeshFileError::Mesh`] if the coordinate arrays fail mesh validation
pub fn parse_mesh(content: &str) -> Result<Mesh1D, MeshFileError> {
    if content.trim().is_empty() {
        return Err(MeshFileError::EmptyInput);
    }

    let mut section = Section::Preamble;
    let mut centroids: Vec<f64> = Vec::new();
    let mut face_nodes: Vec<f64> = Vec::new();
    let mut legacy: Vec<f64> = Vec::new();
    let mut seen_centroids = false;
    let mut seen_faces = false;
    let mut seen_legacy = false;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_num = idx + 1;

        match line {
            CENTROID_SECTION => {
                if seen_legacy {
                    return Err(MeshFileError::ParseError {
                        line: line_num,
                        message: format!(
                            "{} section cannot follow legacy {}",
                            CENTROID_SECTION, LEGACY_COORDINATES
                        ),
                    });
                }
                if seen_centroids {
                    return Err(MeshFileError::ParseError {
                        line: line_num,
                        message: format!("duplicate {} section", CENTROID_SECTION),
                    });
                }
                seen_centroids = true;
                section = Section::Centroids;
            }
            FACE_SECTION => {
                if !seen_centroids {
                    return Err(MeshFileError::ParseError {
                        line: line_num,
                        message: format!(
                            "{} section must follow {}",
                            FACE_SECTION, CENTROID_SECTION
                        ),
                    });
                }
                if seen_faces {
                    return Err(MeshFileError::ParseError {
                        line: line_num,
                        message: format!("duplicate {} section", FACE_SECTION),
                    });
                }
                seen_faces = true;
                section = Section::Faces;
            }
            LEGACY_UNIT if section == Section::Preamble => {
                section = Section::LegacyUnit;
            }
            LEGACY_COORDINATES if !seen_centroids => {
                seen_legacy = true;
                section = Section::LegacyCoordinates;
            }
            value => match section {
                Section::Preamble => {
                    return Err(MeshFileError::ParseError {
                        line: line_num,
                        message: format!("'{}' appears before any section keyword", value),
                    });
                }
                Section::Centroids => centroids.push(parse_coordinate(line_num, value)?),
                Section::Faces => face_nodes.push(parse_coordinate(line_num, value)?),
                // The unit name itself is free text; skip it and wait for
                // the COORDINATES keyword.
                Section::LegacyUnit => section = Section::Preamble,
                Section::LegacyCoordinates => legacy.push(parse_coordinate(line_num, value)?),
            },
        }
    }

    if seen_legacy {
        let centroids = midpoints(&legacy);
        return Ok(Mesh1D::from_parts(legacy, centroids)?);
    }

    if !seen_centroids {
        return Err(MeshFileError::MissingSection(CENTROID_SECTION));
    }
    if !seen_faces {
        return Err(MeshFileError::MissingSection(FACE_SECTION));
    }

    Ok(Mesh1D::from_parts(face_nodes, centroids)?)
}

/// Read a mesh file.
///
/// # Example
///
/// ```no_run
/// use fvmesh::read_mesh_file;
/// use std::path::Path;
///
/// let mesh = read_mesh_file(Path::new("sample.mesh")).unwrap();
/// println!("{} volumes, h_min = {}", mesh.n_volumes(), mesh.h_min());
/// ```
pub fn read_mesh_file(path: &Path) -> Result<Mesh1D, MeshFileError> {
    let content = fs::read_to_string(path)?;
    parse_mesh(&content)
}

/// Write a mesh file in the sectioned text format.
///
/// The serialization is buffered in full before the file is touched, so a
/// formatting failure can never leave a partial file behind.
pub fn write_mesh_file(mesh: &Mesh1D, path: &Path) -> Result<(), MeshFileError> {
    let content = serialize_mesh(mesh);
    fs::write(path, content)?;
    Ok(())
}

/// Convert a raw coordinate list into a mesh file.
///
/// The raw file holds one face-node coordinate per line (blank lines are
/// skipped); centroids are derived as interval midpoints and the result is
/// written to `mesh_path` in the sectioned format. Returns the converted
/// mesh.
pub fn convert_raw_mesh(raw_path: &Path, mesh_path: &Path) -> Result<Mesh1D, MeshFileError> {
    let content = fs::read_to_string(raw_path)?;
    if content.trim().is_empty() {
        return Err(MeshFileError::EmptyInput);
    }

    let mut face_nodes = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        face_nodes.push(parse_coordinate(idx + 1, line)?);
    }

    let centroids = midpoints(&face_nodes);
    let mesh = Mesh1D::from_parts(face_nodes, centroids)?;
    write_mesh_file(&mesh, mesh_path)?;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_mesh() -> Mesh1D {
        Mesh1D::from_parts(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.5, 1.5, 2.5, 3.5]).unwrap()
    }

    #[test]
    fn test_serialize_format() {
        let mesh = Mesh1D::from_parts(vec![0.0, 1.0, 2.0], vec![0.5, 1.5]).unwrap();
        let text = serialize_mesh(&mesh);

        assert_eq!(
            text,
            "CENTROID COORDINATES\n0.5\n1.5\n\nFACE NODES COORDINATES\n0\n1\n2\n"
        );
    }

    #[test]
    fn test_roundtrip_exact() {
        let mesh = sample_mesh();
        let parsed = parse_mesh(&serialize_mesh(&mesh)).unwrap();
        assert_eq!(parsed, mesh);
    }

    #[test]
    fn test_roundtrip_exact_irrational() {
        // Values with no short decimal representation must still round-trip
        // bit-for-bit.
        let faces: Vec<f64> = (0..=7).map(|i| i as f64 / 3.0).collect();
        let centroids = midpoints(&faces);
        let mesh = Mesh1D::from_parts(faces, centroids).unwrap();

        let parsed = parse_mesh(&serialize_mesh(&mesh)).unwrap();
        assert_eq!(parsed, mesh);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "\nCENTROID COORDINATES\n\n0.5\n\n\nFACE NODES COORDINATES\n0\n\n1\n\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.centroids(), &[0.5]);
        assert_eq!(mesh.face_nodes(), &[0.0, 1.0]);
    }

    #[test]
    fn test_parse_legacy_coordinates() {
        let text = "COORDINATES\n0\n0.1\n0.2\n0.3\n0.4\n";
        let mesh = parse_mesh(text).unwrap();

        assert_eq!(mesh.face_nodes(), &[0.0, 0.1, 0.2, 0.3, 0.4]);
        assert_eq!(mesh.n_volumes(), 4);
        // Centroids derived as midpoints
        assert!((mesh.centroids()[0] - 0.05).abs() < 1e-10);
    }

    #[test]
    fn test_parse_legacy_with_unit() {
        let text = "UNIT\nmeter\n\nCOORDINATES\n0\n1\n2\n";
        let mesh = parse_mesh(text).unwrap();
        assert_eq!(mesh.face_nodes(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_mesh(""), Err(MeshFileError::EmptyInput)));
        assert!(matches!(
            parse_mesh(" \n\t \n"),
            Err(MeshFileError::EmptyInput)
        ));
    }

    #[test]
    fn test_missing_face_section() {
        let text = "CENTROID COORDINATES\n0.5\n";
        assert!(matches!(
            parse_mesh(text),
            Err(MeshFileError::MissingSection(FACE_SECTION))
        ));
    }

    #[test]
    fn test_missing_centroid_section() {
        // No recognized keyword at all: the first line is treated as stray
        let text = "0.5\n1.5\n";
        assert!(matches!(
            parse_mesh(text),
            Err(MeshFileError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_wrong_section_order() {
        let text = "FACE NODES COORDINATES\n0\n1\nCENTROID COORDINATES\n0.5\n";
        assert!(matches!(
            parse_mesh(text),
            Err(MeshFileError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_bad_coordinate() {
        let text = "CENTROID COORDINATES\n0.5\nabc\nFACE NODES COORDINATES\n0\n1\n2\n";
        assert!(matches!(
            parse_mesh(text),
            Err(MeshFileError::ParseError { line: 3, .. })
        ));
    }

    #[test]
    fn test_non_finite_coordinate() {
        let text = "CENTROID COORDINATES\ninf\nFACE NODES COORDINATES\n0\n1\n";
        assert!(matches!(
            parse_mesh(text),
            Err(MeshFileError::ParseError { line: 2, .. })
        ));

        let text = "CENTROID COORDINATES\nNaN\nFACE NODES COORDINATES\n0\n1\n";
        assert!(matches!(
            parse_mesh(text),
            Err(MeshFileError::ParseError { line: 2, .. })
        ));
    }

    #[test]
    fn test_inconsistent_arrays_rejected() {
        // Three faces but only one centroid
        let text = "CENTROID COORDINATES\n0.5\nFACE NODES COORDINATES\n0\n1\n2\n";
        assert!(matches!(
            parse_mesh(text),
            Err(MeshFileError::Mesh(MeshError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn test_file_roundtrip() {
        let mesh = sample_mesh();

        let file = NamedTempFile::new().unwrap();
        write_mesh_file(&mesh, file.path()).unwrap();
        let read_back = read_mesh_file(file.path()).unwrap();

        assert_eq!(read_back, mesh);
    }

    #[test]
    fn test_read_legacy_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "COORDINATES").unwrap();
        for i in 0..=10 {
            writeln!(file, "{}", i as f64 * 0.1).unwrap();
        }

        let mesh = read_mesh_file(file.path()).unwrap();
        assert_eq!(mesh.n_volumes(), 10);
        assert!((mesh.x_end() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_convert_raw_mesh() {
        let mut raw = NamedTempFile::new().unwrap();
        for i in 0..5 {
            writeln!(raw, "{}", i as f64 * 0.1).unwrap();
        }
        let out = NamedTempFile::new().unwrap();

        let mesh = convert_raw_mesh(raw.path(), out.path()).unwrap();
        assert_eq!(mesh.face_nodes(), &[0.0, 0.1, 0.2, 0.30000000000000004, 0.4]);

        let read_back = read_mesh_file(out.path()).unwrap();
        assert_eq!(read_back, mesh);
    }

    #[test]
    fn test_convert_raw_mesh_empty() {
        let raw = NamedTempFile::new().unwrap();
        let out = NamedTempFile::new().unwrap();

        let result = convert_raw_mesh(raw.path(), out.path());
        assert!(matches!(result, Err(MeshFileError::EmptyInput)));
    }
}
