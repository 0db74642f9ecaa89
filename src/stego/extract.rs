// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! LSB extraction: recover a length-prefixed bitstream from channel LSBs.

use super::carrier::{Carrier, CHANNELS_PER_PIXEL, DATA_CHANNELS_PER_PIXEL};
use super::error::StegoError;
use super::validate_header_width;

/// Upper sanity bound on the declared payload length, in bits.
///
/// A header decoding to more than this is treated as corrupt rather than
/// scanning an arbitrarily large carrier for data that is almost certainly
/// noise.
pub const MAX_DECLARED_BITS: u64 = 100_000_000;

/// Extract the payload bitstream hidden by [`embed`](super::embed::embed)
/// with the same `header_bits`.
///
/// Reads channel LSBs in the embed order (R, G, B per pixel, alpha skipped)
/// until the fixed-width header is assembled, decodes the declared payload
/// bit-length, then reads exactly that many further bits and returns them.
///
/// # Errors
/// [`StegoError::NoHiddenMessage`] whenever a valid header and payload
/// cannot be established: the carrier is smaller than the header, the
/// declared length is zero, not a multiple of 8 (payloads are always
/// byte-aligned), larger than the remaining capacity, or beyond
/// [`MAX_DECLARED_BITS`]. The error is deliberately uninformative.
pub fn extract(carrier: &Carrier, header_bits: u32) -> Result<Vec<u8>, StegoError> {
    validate_header_width(header_bits)?;

    let capacity = carrier.capacity();
    if capacity < header_bits as u64 {
        return Err(StegoError::NoHiddenMessage);
    }

    let header_len = header_bits as usize;
    let mut bits: Vec<u8> = Vec::with_capacity(header_len);
    let mut needed = usize::MAX;

    'pixels: for pixel in carrier.data().chunks_exact(CHANNELS_PER_PIXEL) {
        for &channel in pixel.iter().take(DATA_CHANNELS_PER_PIXEL) {
            bits.push(channel & 1);

            if bits.len() == header_len {
                let declared = decode_header(&bits);
                if declared == 0
                    || declared % 8 != 0
                    || declared > capacity - header_bits as u64
                    || declared > MAX_DECLARED_BITS
                {
                    return Err(StegoError::NoHiddenMessage);
                }
                needed = header_len + declared as usize;
                bits.reserve(declared as usize);
            }
            if bits.len() >= needed {
                break 'pixels;
            }
        }
    }

    // The declared length was validated against capacity, so the scan above
    // always gathers enough bits once a header exists.
    if bits.len() < needed {
        return Err(StegoError::NoHiddenMessage);
    }
    Ok(bits.split_off(header_len))
}

/// Decode the fixed-width MSB-first header into the declared bit-length.
fn decode_header(header: &[u8]) -> u64 {
    let mut value = 0u64;
    for &bit in header {
        value = (value << 1) | bit as u64;
    }
    value
}
