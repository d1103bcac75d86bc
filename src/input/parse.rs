//! src/input/parse.rs
//!
//! Line-to-sample adapter.

use crate::error::InputError;

/// Parse the first comma or whitespace separated field of `line` as a
/// sample.
///
/// Negative values are ordinary samples. Non-finite numbers are rejected.
pub fn parse_sample(line: &str) -> Result<f64, InputError> {
    let field = line
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .find(|f| !f.is_empty())
        .ok_or(InputError::Empty)?;
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::Malformed(field.to_string())),
    }
}
