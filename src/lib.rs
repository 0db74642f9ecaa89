// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! # veil-core
//!
//! LSB image steganography core: hides a text message in the
//! least-significant bits of an RGBA pixel buffer's color channels, with a
//! companion Huffman codec for a compact self-describing binary
//! representation of text.
//!
//! The crate never touches files or image containers — callers hand in a
//! decoded pixel buffer ([`Carrier`]) and get one back for re-encoding.
//! Concealment is bit-level only; there is no encryption.
//!
//! # Quick start
//!
//! ```rust
//! use veil_core::{conceal, reveal, Carrier, TextCodec, DEFAULT_HEADER_BITS};
//!
//! // A 64x64 mid-gray RGBA image.
//! let cover = Carrier::new(64, 64, vec![128u8; 64 * 64 * 4]).unwrap();
//!
//! let stego = conceal(&cover, "meet at noon", DEFAULT_HEADER_BITS, TextCodec::Plain).unwrap();
//! let message = reveal(&stego, DEFAULT_HEADER_BITS, TextCodec::Plain).unwrap();
//! assert_eq!(message, "meet at noon");
//! ```

pub mod codec;
pub mod stego;

pub use codec::bits::{
    bits_to_bytes, bits_to_text, bits_to_text_compressed, bytes_to_bits, text_to_bits,
    text_to_bits_compressed,
};
pub use codec::huffman::{compress, decompress};
pub use codec::CodecError;
pub use stego::{
    capacity_info, conceal, embed, extract, message_size_bits, reveal, validate_header_width,
    CapacityInfo, Carrier, StegoError, TextCodec, DEFAULT_HEADER_BITS, MAX_DECLARED_BITS,
    MAX_HEADER_BITS, MIN_HEADER_BITS, TIGHT_CAPACITY_PERCENT,
};
