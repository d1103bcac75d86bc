//! src/graph/store.rs
//!
//! Fixed-capacity sliding window of samples backed by a circular buffer.
//!
//! Slot `i` is written at pixel column `i`; a write cursor marks the oldest
//! slot, so ingestion is O(1) and nothing is ever shifted. The logical
//! order (oldest to newest) is `slots[cursor..]` followed by
//! `slots[..cursor]`.

use super::sample::Sample;
use crate::error::GraphError;

/// A contiguous physical run of slots and the horizontal shift that puts
/// it at its on-screen column.
#[derive(Clone, Copy, Debug)]
pub struct Run<'a> {
    pub samples: &'a [Sample],
    pub shift: i64,
}

#[derive(Clone, Debug)]
pub struct SampleStore {
    slots: Vec<Sample>,
    cursor: usize,
}

impl SampleStore {
    /// Create a store of `capacity` MISSING slots, each at its own column.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|i| Sample::missing(i as i64)).collect(),
            cursor: 0,
        }
    }

    /// Like [`SampleStore::new`], but reports allocation failure instead of
    /// aborting.
    pub fn try_new(capacity: usize) -> Result<Self, GraphError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|source| GraphError::Allocation { capacity, source })?;
        slots.extend((0..capacity).map(|i| Sample::missing(i as i64)));
        Ok(Self { slots, cursor: 0 })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the oldest slot, which the next ingestion overwrites.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Slots in physical order.
    pub fn slots(&self) -> &[Sample] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Sample] {
        &mut self.slots
    }

    /// Append `value` as the newest sample, evicting the oldest.
    ///
    /// `None` (or a non-finite value) is stored as MISSING. A zero-capacity
    /// store ignores ingestion.
    pub fn ingest(&mut self, value: Option<f64>) {
        let capacity = self.slots.len();
        if capacity == 0 {
            return;
        }
        self.slots[self.cursor] = Sample::new(self.cursor as i64, value);
        self.cursor = (self.cursor + 1) % capacity;
    }

    /// Exactly `capacity` samples, oldest first. Re-derived on every call.
    pub fn iter_oldest_to_newest(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.slots[self.cursor..]
            .iter()
            .chain(self.slots[..self.cursor].iter())
    }

    /// The two physical runs in age order.
    ///
    /// The first run (cursor to end) holds the older samples and is shifted
    /// left by the cursor; the second (start to cursor) holds the newer ones
    /// and is shifted right by a full width less the cursor, which lands the
    /// newest sample on the last column.
    pub fn runs(&self) -> [Run<'_>; 2] {
        let capacity = self.slots.len() as i64;
        let cursor = self.cursor as i64;
        [
            Run {
                samples: &self.slots[self.cursor..],
                shift: -cursor,
            },
            Run {
                samples: &self.slots[..self.cursor],
                shift: capacity - cursor,
            },
        ]
    }

    /// Samples oldest first, paired with the column they are displayed at.
    pub fn columns(&self) -> impl Iterator<Item = (i64, &Sample)> + '_ {
        self.runs().into_iter().flat_map(|run| {
            run.samples
                .iter()
                .map(move |sample| (sample.position + run.shift, sample))
        })
    }

    /// Values of every non-MISSING slot, in physical order.
    pub fn valid_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.slots.iter().filter_map(|s| s.value)
    }

    /// The most recently ingested sample.
    pub fn newest(&self) -> Option<&Sample> {
        self.iter_oldest_to_newest().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(store: &SampleStore) -> Vec<Option<f64>> {
        store.iter_oldest_to_newest().map(|s| s.value).collect()
    }

    #[test]
    fn new_store_is_all_missing() {
        let store = SampleStore::new(5);
        assert_eq!(store.capacity(), 5);
        assert!(store.iter_oldest_to_newest().all(Sample::is_missing));
        let positions: Vec<_> = store.slots().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn ingest_keeps_fifo_order() {
        let mut store = SampleStore::new(5);
        store.ingest(Some(1.0));
        store.ingest(Some(2.0));
        store.ingest(Some(3.0));
        assert_eq!(
            values(&store),
            vec![None, None, Some(1.0), Some(2.0), Some(3.0)]
        );
    }

    #[test]
    fn ingest_evicts_oldest_after_wrap() {
        let mut store = SampleStore::new(3);
        for v in 1..=5 {
            store.ingest(Some(v as f64));
            assert_eq!(store.iter_oldest_to_newest().count(), 3);
        }
        assert_eq!(values(&store), vec![Some(3.0), Some(4.0), Some(5.0)]);
        assert_eq!(store.newest().and_then(|s| s.value), Some(5.0));
    }

    #[test]
    fn explicit_missing_passes_through() {
        let mut store = SampleStore::new(3);
        store.ingest(Some(1.0));
        store.ingest(None);
        store.ingest(Some(f64::NAN));
        assert_eq!(values(&store), vec![Some(1.0), None, None]);
    }

    #[test]
    fn iteration_is_restartable() {
        let mut store = SampleStore::new(4);
        store.ingest(Some(9.0));
        let first: Vec<_> = store.iter_oldest_to_newest().copied().collect();
        let second: Vec<_> = store.iter_oldest_to_newest().copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn columns_put_newest_on_the_right() {
        let mut store = SampleStore::new(4);
        for v in 0..6 {
            store.ingest(Some(v as f64));
        }
        let cols: Vec<_> = store.columns().map(|(x, s)| (x, s.value)).collect();
        assert_eq!(
            cols,
            vec![(0, Some(2.0)), (1, Some(3.0)), (2, Some(4.0)), (3, Some(5.0))]
        );
    }

    #[test]
    fn zero_capacity_ignores_ingest() {
        let mut store = SampleStore::new(0);
        store.ingest(Some(1.0));
        assert_eq!(store.capacity(), 0);
        assert_eq!(store.iter_oldest_to_newest().count(), 0);
    }

    #[test]
    fn try_new_matches_new() {
        let store = SampleStore::try_new(16).unwrap();
        assert_eq!(store.slots(), SampleStore::new(16).slots());
    }

    #[test]
    fn try_new_reports_allocation_failure() {
        let err = SampleStore::try_new(usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Allocation {
                capacity: usize::MAX,
                ..
            }
        ));
    }
}
