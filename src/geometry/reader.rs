//! Reader for geometry description files.
//!
//! Parses the keyword/value format documented in the [module docs](super)
//! into a validated [`GeometrySpec`]. Parsing happens in two stages: a
//! tokenizer groups the lines into `(keyword, value-lines)` pairs, then a
//! structured mapping pulls out each field with explicit validation. Stray
//! lines that belong to no keyword are an error, not silently skipped.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::spec::{GeometryError, GeometrySpec, Spacing};

/// Error type for geometry file parsing.
#[derive(Debug, Error)]
pub enum GeometryFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is empty or contains only whitespace
    #[error("geometry input is empty")]
    EmptyInput,

    /// Parse error with line number
    #[error("parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Required keyword never appeared
    #[error("missing keyword: {0}")]
    MissingKeyword(&'static str),

    /// Spacing value is neither `uniform` nor `geometric`
    #[error("unknown spacing '{0}' (expected 'uniform' or 'geometric')")]
    UnknownSpacing(String),

    /// Parsed values fail geometry validation
    #[error(transparent)]
    Spec(#[from] GeometryError),
}

const KEYWORDS: [&str; 5] = ["X0", "XL", "N", "SPACING", "EXPANSION_RATIO"];

/// One keyword together with the value lines that follow it.
struct Block<'a> {
    keyword: &'a str,
    /// Line number the keyword appeared on (1-based).
    line: usize,
    /// Non-blank lines between this keyword and the next, with line numbers.
    values: Vec<(usize, &'a str)>,
}

/// Group the input lines into `(keyword, value-lines)` blocks.
fn tokenize(content: &str) -> Result<Vec<Block<'_>>, GeometryFileError> {
    let mut blocks: Vec<Block> = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if KEYWORDS.contains(&line) {
            blocks.push(Block {
                keyword: line,
                line: idx + 1,
                values: Vec::new(),
            });
        } else {
            match blocks.last_mut() {
                Some(block) => block.values.push((idx + 1, line)),
                None => {
                    return Err(GeometryFileError::ParseError {
                        line: idx + 1,
                        message: format!("'{}' appears before any keyword", line),
                    });
                }
            }
        }
    }

    Ok(blocks)
}

/// First value line of a block, or an error pointing at the keyword line.
fn block_value<'a>(block: &Block<'a>) -> Result<(usize, &'a str), GeometryFileError> {
    block
        .values
        .first()
        .copied()
        .ok_or_else(|| GeometryFileError::ParseError {
            line: block.line,
            message: format!("keyword {} has no value", block.keyword),
        })
}

fn parse_f64(line: usize, value: &str, what: &str) -> Result<f64, GeometryFileError> {
    value.parse().map_err(|_| GeometryFileError::ParseError {
        line,
        message: format!("invalid {} value: '{}'", what, value),
    })
}

/// Parse a geometry description from a string.
///
/// Same format as the file, useful for testing or embedded descriptions.
///
/// # Errors
/// - [`GeometryFileError::EmptyInput`] if the input is empty or whitespace-only
/// - [`GeometryFileError::ParseError`] for unparsable values or stray lines
/// - [`GeometryFileError::MissingKeyword`] if `X0`, `XL`, `N` or `SPACING`
///   never appears
/// - [`GeometryFileError::UnknownSpacing`] for a spacing other than
///   `uniform`/`geometric`
/// - [`GeometryFileError::Spec`] if the values fail [`GeometrySpec`]
///   validation (including a missing expansion ratio under geometric spacing)
pub fn parse_geometry(content: &str) -> Result<GeometrySpec, GeometryFileError> {
    if content.trim().is_empty() {
        return Err(GeometryFileError::EmptyInput);
    }

    let blocks = tokenize(content)?;

    let mut x_start: Option<f64> = None;
    let mut x_end: Option<f64> = None;
    let mut n_volumes: Option<u32> = None;
    let mut spacing_raw: Option<String> = None;
    let mut ratio_raw: Option<(usize, String)> = None;

    // A repeated keyword overrides the earlier occurrence.
    for block in &blocks {
        match block.keyword {
            "X0" => {
                let (line, value) = block_value(block)?;
                x_start = Some(parse_f64(line, value, "X0")?);
            }
            "XL" => {
                let (line, value) = block_value(block)?;
                x_end = Some(parse_f64(line, value, "XL")?);
            }
            "N" => {
                let (line, value) = block_value(block)?;
                let n = value.parse().map_err(|_| GeometryFileError::ParseError {
                    line,
                    message: format!("invalid N value: '{}'", value),
                })?;
                n_volumes = Some(n);
            }
            "SPACING" => {
                let (_, value) = block_value(block)?;
                spacing_raw = Some(value.to_lowercase());
            }
            "EXPANSION_RATIO" => {
                let (line, value) = block_value(block)?;
                ratio_raw = Some((line, value.to_string()));
            }
            _ => unreachable!("tokenizer only emits known keywords"),
        }
    }

    let x_start = x_start.ok_or(GeometryFileError::MissingKeyword("X0"))?;
    let x_end = x_end.ok_or(GeometryFileError::MissingKeyword("XL"))?;
    let n_volumes = n_volumes.ok_or(GeometryFileError::MissingKeyword("N"))?;
    let spacing_raw = spacing_raw.ok_or(GeometryFileError::MissingKeyword("SPACING"))?;

    let spacing = match spacing_raw.as_str() {
        // The ratio is only meaningful for non-uniform spacing; a stray
        // EXPANSION_RATIO entry under uniform spacing is ignored.
        "uniform" => Spacing::Uniform,
        "geometric" => {
            let (line, value) = ratio_raw.ok_or(GeometryError::MissingExpansionRatio)?;
            let expansion_ratio = parse_f64(line, &value, "EXPANSION_RATIO")?;
            Spacing::Geometric { expansion_ratio }
        }
        other => return Err(GeometryFileError::UnknownSpacing(other.to_string())),
    };

    Ok(GeometrySpec::new(x_start, x_end, n_volumes, spacing)?)
}

/// Read a geometry description file.
///
/// # Example
///
/// ```no_run
/// use fvmesh::read_geometry_file;
/// use std::path::Path;
///
/// let spec = read_geometry_file(Path::new("geometry.input")).unwrap();
/// println!("{} volumes on [{}, {}]", spec.n_volumes(), spec.x_start(), spec.x_end());
/// ```
pub fn read_geometry_file(path: &Path) -> Result<GeometrySpec, GeometryFileError> {
    let content = fs::read_to_string(path)?;
    parse_geometry(&content)
}
