// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! LSB embedding: write a length-prefixed bitstream into channel LSBs.

use super::carrier::{Carrier, CHANNELS_PER_PIXEL, DATA_CHANNELS_PER_PIXEL};
use super::error::StegoError;
use super::validate_header_width;
use crate::codec::error::CodecError;

/// Embed `payload_bits` into the cover image's channel LSBs.
///
/// The written bit sequence is the payload's bit-length as a fixed-width
/// MSB-first binary header, followed by the payload itself. Bits land in the
/// R, G, B least-significant bits in channel order, pixel order; alpha is
/// skipped as a data channel and forced to 255 on every pixel the write
/// touches. Pixels past the end of the data are left untouched.
///
/// The caller's buffer is not modified; a new [`Carrier`] is returned.
///
/// # Errors
/// - [`StegoError::InvalidHeaderWidth`] if `header_bits` is not in 1–64.
/// - [`StegoError::HeaderOverflow`] if `payload_bits.len() >= 2^header_bits`.
/// - [`StegoError::CapacityExceeded`] if `header_bits + payload_bits.len()`
///   exceeds the carrier capacity.
/// - [`StegoError::Codec`] ([`CodecError::NonBinaryDigit`]) if a payload
///   element is neither 0 nor 1.
pub fn embed(
    cover: &Carrier,
    payload_bits: &[u8],
    header_bits: u32,
) -> Result<Carrier, StegoError> {
    validate_header_width(header_bits)?;

    let payload_len = payload_bits.len() as u64;
    if header_bits < 64 && payload_len >= 1u64 << header_bits {
        return Err(StegoError::HeaderOverflow);
    }
    if header_bits as u64 + payload_len > cover.capacity() {
        return Err(StegoError::CapacityExceeded);
    }
    if payload_bits.iter().any(|&bit| bit > 1) {
        return Err(StegoError::Codec(CodecError::NonBinaryDigit));
    }

    // Header (payload bit-length, MSB first) followed by the payload.
    let mut full = Vec::with_capacity(header_bits as usize + payload_bits.len());
    for bit_pos in (0..header_bits as u64).rev() {
        full.push(((payload_len >> bit_pos) & 1) as u8);
    }
    full.extend_from_slice(payload_bits);

    let mut data = cover.data().to_vec();
    let mut di = 0usize;
    for pixel in data.chunks_exact_mut(CHANNELS_PER_PIXEL) {
        if di >= full.len() {
            break;
        }
        for channel in pixel.iter_mut().take(DATA_CHANNELS_PER_PIXEL) {
            if di < full.len() {
                *channel = (*channel & 0xFE) | full[di];
                di += 1;
            }
        }
        // Opaque alpha on every touched pixel, so alpha premultiplication in
        // the caller's image encoder cannot disturb the data channels.
        pixel[CHANNELS_PER_PIXEL - 1] = 255;
    }

    Ok(Carrier::from_raw(cover.width(), cover.height(), data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_carrier(width: u32, height: u32) -> Carrier {
        let data = vec![128u8; width as usize * height as usize * 4];
        Carrier::new(width, height, data).unwrap()
    }

    #[test]
    fn header_and_payload_land_in_lsbs() {
        let cover = gray_carrier(4, 4);
        // 8-bit payload 1010_1010 with a 32-bit header.
        let payload = [1, 0, 1, 0, 1, 0, 1, 0];
        let stego = embed(&cover, &payload, 32).unwrap();

        let lsbs: Vec<u8> = stego
            .data()
            .chunks_exact(4)
            .flat_map(|px| px[..3].iter().map(|&c| c & 1))
            .take(40)
            .collect();
        // Header: 8 as a 32-bit integer.
        let mut expected = vec![0u8; 32];
        expected[28] = 1; // 8 = 0b1000
        expected.extend_from_slice(&payload);
        assert_eq!(lsbs, expected);
    }

    #[test]
    fn touched_pixels_forced_opaque() {
        let mut data = vec![128u8; 4 * 4 * 4];
        for pixel in data.chunks_exact_mut(4) {
            pixel[3] = 17; // translucent
        }
        let cover = Carrier::new(4, 4, data).unwrap();
        let stego = embed(&cover, &[1, 1, 1, 1, 1, 1, 1, 1], 32).unwrap();

        // 40 bits cover 14 pixels (ceil(40 / 3)); those are opaque, the
        // remaining two keep their alpha.
        let alphas: Vec<u8> = stego.data().chunks_exact(4).map(|px| px[3]).collect();
        assert!(alphas[..14].iter().all(|&a| a == 255));
        assert!(alphas[14..].iter().all(|&a| a == 17));
    }

    #[test]
    fn cover_buffer_untouched() {
        let cover = gray_carrier(4, 4);
        let before = cover.data().to_vec();
        let _ = embed(&cover, &[1, 0, 1, 0, 1, 0, 1, 0], 32).unwrap();
        assert_eq!(cover.data(), before.as_slice());
    }

    #[test]
    fn exact_capacity_fits() {
        // 4x4 carrier: 48 bits. Header 32 + payload 16 = 48.
        let cover = gray_carrier(4, 4);
        assert!(embed(&cover, &vec![1u8; 16], 32).is_ok());
    }

    #[test]
    fn capacity_exceeded_by_one_bit() {
        // Header 32 + payload 17 = 49 > 48.
        let cover = gray_carrier(4, 4);
        assert!(matches!(
            embed(&cover, &vec![1u8; 17], 32),
            Err(StegoError::CapacityExceeded)
        ));
    }

    #[test]
    fn tiny_image_cannot_hold_header() {
        // 2x2 carrier: 12 bits < 32-bit header + any payload.
        let cover = gray_carrier(2, 2);
        assert!(matches!(
            embed(&cover, &[1], 32),
            Err(StegoError::CapacityExceeded)
        ));
    }

    #[test]
    fn header_width_bounds() {
        let cover = gray_carrier(8, 8);
        assert!(matches!(
            embed(&cover, &[1, 0], 0),
            Err(StegoError::InvalidHeaderWidth(0))
        ));
        assert!(matches!(
            embed(&cover, &[1, 0], 65),
            Err(StegoError::InvalidHeaderWidth(65))
        ));
        assert!(embed(&cover, &[1, 0], 64).is_ok());
    }

    #[test]
    fn payload_longer_than_header_can_describe() {
        // 8-bit header represents lengths up to 255; a 256-bit payload
        // overflows it even though the carrier has room.
        let cover = gray_carrier(16, 16);
        assert!(matches!(
            embed(&cover, &vec![0u8; 256], 8),
            Err(StegoError::HeaderOverflow)
        ));
        assert!(embed(&cover, &vec![0u8; 255], 8).is_ok());
    }

    #[test]
    fn non_binary_payload_rejected() {
        let cover = gray_carrier(8, 8);
        assert!(matches!(
            embed(&cover, &[0, 1, 2], 32),
            Err(StegoError::Codec(CodecError::NonBinaryDigit))
        ));
    }
}
