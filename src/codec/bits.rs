// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Bitstream conversions between bytes, UTF-8 text, and bit sequences.
//!
//! A bitstream is a `Vec<u8>` whose elements are the bit *values* 0 and 1,
//! most-significant bit first within each source byte. Two text paths exist:
//! the plain path (UTF-8 bytes, 8 bits per byte) and the compressed path,
//! which routes the text through the Huffman codec first and then expands
//! each payload byte to 8 bits. Both paths always produce byte-aligned
//! bitstreams, which the LSB extraction protocol relies on.

use super::error::{CodecError, Result};
use super::huffman;

/// Convert bytes to a bit vector, most-significant bit first.
///
/// The result length is always `bytes.len() * 8`.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
///
/// Strict inverse of [`bytes_to_bits`]: the length must be a multiple of 8
/// and every element must be 0 or 1.
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(CodecError::NotByteAligned(bits.len()));
    }
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks_exact(8) {
        let mut byte = 0u8;
        for &bit in chunk {
            if bit > 1 {
                return Err(CodecError::NonBinaryDigit);
            }
            byte = (byte << 1) | bit;
        }
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Plain text path: UTF-8 encode and expand to bits, 8 per byte.
pub fn text_to_bits(text: &str) -> Vec<u8> {
    bytes_to_bits(text.as_bytes())
}

/// Inverse of [`text_to_bits`]. Fails on misaligned bitstreams and on byte
/// sequences that are not valid UTF-8.
pub fn bits_to_text(bits: &[u8]) -> Result<String> {
    let bytes = bits_to_bytes(bits)?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}

/// Compressed text path: Huffman-compress the UTF-8 bytes, then expand each
/// payload byte (length prefix and ASCII bit characters alike) to 8 bits.
///
/// This is deliberately bit-expanding — the compressed payload's own bits are
/// not re-packed — so that both text paths share the byte-stream convention.
pub fn text_to_bits_compressed(text: &str) -> Vec<u8> {
    bytes_to_bits(&huffman::compress(text.as_bytes()))
}

/// Inverse of [`text_to_bits_compressed`]: re-pack the bits into the
/// compressed payload bytes, decompress, and decode the UTF-8 result.
pub fn bits_to_text_compressed(bits: &[u8]) -> Result<String> {
    let payload = bits_to_bytes(bits)?;
    let bytes = huffman::decompress(&payload)?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_bits_roundtrip() {
        let original = vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0xFF];
        let bits = bytes_to_bits(&original);
        assert_eq!(bits.len(), 48);
        assert_eq!(bits_to_bytes(&bits).unwrap(), original);
    }

    #[test]
    fn msb_first_order() {
        // 0xA5 = 1010_0101
        assert_eq!(bytes_to_bits(&[0xA5]), vec![1, 0, 1, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn misaligned_bits_rejected() {
        let bits = vec![1, 0, 1, 1, 0];
        assert!(matches!(
            bits_to_bytes(&bits),
            Err(CodecError::NotByteAligned(5))
        ));
    }

    #[test]
    fn non_binary_element_rejected() {
        let bits = vec![0, 1, 0, 1, 0, 1, 0, 2];
        assert!(matches!(
            bits_to_bytes(&bits),
            Err(CodecError::NonBinaryDigit)
        ));
    }

    #[test]
    fn empty_is_byte_aligned() {
        assert_eq!(bits_to_bytes(&[]).unwrap(), Vec::<u8>::new());
        assert_eq!(bytes_to_bits(&[]), Vec::<u8>::new());
    }

    #[test]
    fn text_roundtrip_ascii() {
        let bits = text_to_bits("Hello, world!");
        assert_eq!(bits.len(), 13 * 8);
        assert_eq!(bits_to_text(&bits).unwrap(), "Hello, world!");
    }

    #[test]
    fn text_roundtrip_unicode() {
        let msg = "Ünïcödé 🎉";
        let bits = text_to_bits(msg);
        assert_eq!(bits.len() % 8, 0);
        assert_eq!(bits_to_text(&bits).unwrap(), msg);
    }

    #[test]
    fn invalid_utf8_rejected() {
        // 0xFF is never valid UTF-8.
        let bits = bytes_to_bits(&[0xFF, 0xFF]);
        assert!(matches!(bits_to_text(&bits), Err(CodecError::InvalidUtf8)));
    }

    #[test]
    fn compressed_text_roundtrip() {
        for msg in ["a", "AB", "banana bandana", "Ünïcödé 🎉", "aaaaaaaa"] {
            let bits = text_to_bits_compressed(msg);
            assert_eq!(bits.len() % 8, 0, "compressed path must stay byte-aligned");
            assert_eq!(bits_to_text_compressed(&bits).unwrap(), msg, "{msg}");
        }
    }

    #[test]
    fn compressed_empty_text() {
        // Empty text compresses to the 4-byte sentinel, i.e. 32 zero bits.
        let bits = text_to_bits_compressed("");
        assert_eq!(bits, vec![0u8; 32]);
        assert_eq!(bits_to_text_compressed(&bits).unwrap(), "");
    }

    #[test]
    fn compressed_path_is_byte_expansion_of_payload() {
        // The compressed bitstream is exactly the payload bytes expanded
        // 8 bits per byte — nothing more.
        let payload = crate::codec::huffman::compress("mississippi".as_bytes());
        assert_eq!(text_to_bits_compressed("mississippi"), bytes_to_bits(&payload));
    }
}
