//! src/graph/sample.rs
//!
//! One slot of the rolling window.

/// A horizontal pixel position and an optional value.
///
/// `value == None` marks a MISSING slot: never populated with real data,
/// excluded from range computation, and a break in the drawn line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub position: i64,
    pub value: Option<f64>,
}

impl Sample {
    pub fn new(position: i64, value: Option<f64>) -> Self {
        Self {
            position,
            value: value.filter(|v| v.is_finite()),
        }
    }

    /// A MISSING slot at `position`.
    pub fn missing(position: i64) -> Self {
        Self {
            position,
            value: None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}
