//! src/graph/resample.rs
//!
//! Rebuild the sample store for a new viewport, remapping old samples
//! proportionally to the width ratio.
//!
//! Samples are carried over in age order, so the resized window keeps the
//! old oldest-to-newest sequence and starts with its cursor at 0.
//!
//! - Growing: the `i`-th oldest sample goes to slot `i` and its position is
//!   stretched by the width ratio; slots past the old length stay MISSING.
//! - Shrinking: each sample goes to the column its displayed position maps
//!   to. When several land on the same column the newest valid one wins.

use super::config::SampleUnits;
use super::sample::Sample;
use super::store::SampleStore;
use super::view::Viewport;
use crate::error::GraphError;

/// Build a store of capacity `new.width` from `old`, using `reference` as
/// the geometry `old` was laid out for.
pub fn resample(
    old: &SampleStore,
    new: Viewport,
    reference: Viewport,
    units: SampleUnits,
) -> Result<SampleStore, GraphError> {
    let mut store = SampleStore::try_new(new.width)?;
    if new.width == 0 || reference.width == 0 {
        return Ok(store);
    }

    let x_ratio = new.width as f64 / reference.width as f64;
    let y_ratio = match units {
        SampleUnits::Pixels if reference.height > 0 => new.height as f64 / reference.height as f64,
        _ => 1.0,
    };
    let rescale = |value: Option<f64>| value.map(|v| v * y_ratio);

    let slots = store.slots_mut();
    if x_ratio >= 1.0 {
        for (i, (x, sample)) in old.columns().enumerate().take(new.width) {
            let position = (x as f64 * x_ratio).round() as i64;
            slots[i] = Sample::new(position, rescale(sample.value));
        }
    } else {
        let last = new.width - 1;
        for (x, sample) in old.columns() {
            if x < 0 || sample.is_missing() {
                continue;
            }
            let column = ((x as f64 * x_ratio).floor() as usize).min(last);
            slots[column] = Sample::new(column as i64, rescale(sample.value));
        }
    }

    log::debug!(
        "resampled {} -> {} slots (x ratio {:.3}, y ratio {:.3})",
        old.capacity(),
        new.width,
        x_ratio,
        y_ratio
    );
    Ok(store)
}
