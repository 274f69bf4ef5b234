//! Fixed-capacity ring buffer of magnitude vectors.
//!
//! `VectorRing` backs both detector buffers: the main detection window
//! (cleaned, normalized samples) and the shorter outlier history (raw
//! samples). Storage is allocated once at construction; once the ring is
//! full, every push overwrites the oldest entry in place.
//!
//! ## Example
//!
//! ```rust
//! use csi_presence::vector_ring::VectorRing;
//! use csi_presence::types::NUM_SUBCARRIERS;
//!
//! let mut ring = VectorRing::new(3);
//! for k in 0..4 {
//!     ring.push(&[k as f64; NUM_SUBCARRIERS]);
//! }
//! // Capacity 3, so the first sample has been evicted.
//! assert_eq!(ring.len(), 3);
//! assert_eq!(ring.at(0)[0], 1.0); // oldest retained
//! assert_eq!(ring.at(2)[0], 3.0); // newest
//! ```

use crate::types::{MagnitudeVector, NUM_SUBCARRIERS};

/// Overwrite-on-push ring of equal-width sample vectors.
///
/// Logical index 0 is the oldest retained sample, `len() - 1` the newest.
#[derive(Debug, Clone)]
pub struct VectorRing {
    data: Vec<MagnitudeVector>,
    start: usize,
    size: usize,
}

impl VectorRing {
    /// Create a ring holding up to `capacity` vectors.
    ///
    /// Storage for `capacity * NUM_SUBCARRIERS` values is allocated here
    /// and never resized.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be at least 1");
        Self {
            data: vec![[0.0; NUM_SUBCARRIERS]; capacity],
            start: 0,
            size: 0,
        }
    }

    /// Append a vector, evicting the oldest entry when full.
    pub fn push(&mut self, values: &MagnitudeVector) {
        let capacity = self.data.len();
        let end = (self.start + self.size) % capacity;
        self.data[end] = *values;
        if self.size < capacity {
            self.size += 1;
        } else {
            self.start = (self.start + 1) % capacity;
        }
    }

    /// The vector at logical position `index` (0 = oldest retained).
    ///
    /// Panics if `index >= len()`.
    pub fn at(&self, index: usize) -> &MagnitudeVector {
        assert!(index < self.size, "index {} out of bounds for ring of {}", index, self.size);
        &self.data[(self.start + index) % self.data.len()]
    }

    /// Iterate over retained vectors from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &MagnitudeVector> {
        (0..self.size).map(move |i| &self.data[(self.start + i) % self.data.len()])
    }

    /// Number of vectors currently retained.
    pub fn len(&self) -> usize {
        self.size
    }

    /// True if no vectors have been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Maximum number of vectors the ring retains.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// True once `len() == capacity()`; stays true forever after.
    pub fn is_full(&self) -> bool {
        self.size == self.data.len()
    }
}
