//! Magnitude extraction from raw channel-state frames.
//!
//! A CSI dump arrives as signed 8-bit components: a short format-dependent
//! header, then interleaved real/imaginary pairs, one pair per subcarrier.
//! Only the lower 26 subcarriers are usable; the upper half of the band is
//! unstable across frames and is discarded. This module turns such a
//! buffer into the [`MagnitudeVector`] the detector consumes, leaving the
//! radio plumbing that produced the buffer to the platform integration.
//!
//! ## Example
//!
//! ```rust
//! use csi_presence::csi_frame::{subcarrier_magnitudes, CsiFormat};
//!
//! // Header (2 components) followed by (re, im) pairs of (3, 4):
//! // every magnitude comes out as 5.
//! let mut buf = vec![0i8; 2 + 52];
//! for pair in buf[2..].chunks_exact_mut(2) {
//!     pair[0] = 3;
//!     pair[1] = 4;
//! }
//! let magnitudes = subcarrier_magnitudes(&buf, CsiFormat::Legacy).unwrap();
//! assert!(magnitudes.iter().all(|&m| (m - 5.0).abs() < 1e-12));
//! ```

use num_complex::Complex64;

use crate::types::{MagnitudeVector, NUM_SUBCARRIERS};

/// Frame layouts distinguished by their header length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiFormat {
    /// Legacy long-training-field capture: 2 header components.
    Legacy,
    /// High-efficiency (802.11ax) capture: 12 header components.
    HighEfficiency,
}

impl CsiFormat {
    /// Number of leading components to skip before the subcarrier pairs.
    pub fn header_offset(&self) -> usize {
        match self {
            CsiFormat::Legacy => 2,
            CsiFormat::HighEfficiency => 12,
        }
    }
}

/// Errors from frame-buffer validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("CSI frame too short: need {expected} components, got {actual}")]
    TruncatedFrame { expected: usize, actual: usize },
}

/// Derive the 26 retained subcarrier magnitudes from a raw CSI buffer.
///
/// Skips the format's header, reads 26 consecutive `(re, im)` component
/// pairs, and takes the complex norm of each. Anything past those pairs
/// (the discarded upper subcarriers) is ignored.
pub fn subcarrier_magnitudes(buf: &[i8], format: CsiFormat) -> Result<MagnitudeVector, FrameError> {
    let offset = format.header_offset();
    let expected = offset + 2 * NUM_SUBCARRIERS;
    if buf.len() < expected {
        return Err(FrameError::TruncatedFrame {
            expected,
            actual: buf.len(),
        });
    }

    let mut magnitudes = [0.0; NUM_SUBCARRIERS];
    for (k, pair) in buf[offset..expected].chunks_exact(2).enumerate() {
        let z = Complex64::new(pair[0] as f64, pair[1] as f64);
        magnitudes[k] = z.norm();
    }
    Ok(magnitudes)
}
