// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! LSB steganography layer.
//!
//! Packs a length-prefixed bitstream into the least-significant bits of an
//! RGBA carrier's color channels ([`embed()`]/[`extract()`]), with capacity
//! arithmetic ([`capacity_info`]) and an end-to-end text pipeline
//! ([`conceal`]/[`reveal`]) on top. All operations are pure and synchronous:
//! each call works on caller-owned buffers and keeps no state behind.

pub mod capacity;
pub mod carrier;
pub mod embed;
pub mod error;
pub mod extract;
mod pipeline;

pub use capacity::{capacity_info, message_size_bits, CapacityInfo, TIGHT_CAPACITY_PERCENT};
pub use carrier::Carrier;
pub use embed::embed;
pub use error::StegoError;
pub use extract::{extract, MAX_DECLARED_BITS};
pub use pipeline::{conceal, reveal};

/// Default width of the payload-length header, in bits.
pub const DEFAULT_HEADER_BITS: u32 = 32;

/// Minimum supported header width.
pub const MIN_HEADER_BITS: u32 = 1;

/// Maximum supported header width. Declared lengths are handled as `u64`.
pub const MAX_HEADER_BITS: u32 = 64;

/// How message text is converted to the embedded bitstream.
///
/// Must match between [`conceal`] and [`reveal`] for a given image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextCodec {
    /// UTF-8 bytes, 8 bits per byte.
    #[default]
    Plain,
    /// Huffman-compressed payload, byte-expanded to bits.
    Huffman,
}

/// Validate a caller-chosen header width.
///
/// # Errors
/// [`StegoError::InvalidHeaderWidth`] if `header_bits` is outside
/// [`MIN_HEADER_BITS`]..=[`MAX_HEADER_BITS`].
pub fn validate_header_width(header_bits: u32) -> Result<(), StegoError> {
    if !(MIN_HEADER_BITS..=MAX_HEADER_BITS).contains(&header_bits) {
        return Err(StegoError::InvalidHeaderWidth(header_bits));
    }
    Ok(())
}

#[cfg(test)]
mod header_width_tests {
    use super::*;

    #[test]
    fn supported_widths() {
        assert!(validate_header_width(1).is_ok());
        assert!(validate_header_width(32).is_ok());
        assert!(validate_header_width(48).is_ok());
        assert!(validate_header_width(64).is_ok());
    }

    #[test]
    fn rejected_widths() {
        assert!(matches!(
            validate_header_width(0),
            Err(StegoError::InvalidHeaderWidth(0))
        ));
        assert!(matches!(
            validate_header_width(65),
            Err(StegoError::InvalidHeaderWidth(65))
        ));
    }
}
