// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Binary codec layer: bitstream conversions and the Huffman text codec.
//!
//! Everything here is pure and stateless; the steganography layer
//! (`crate::stego`) composes these functions into the embed/extract
//! pipeline, but they are equally usable on their own for a compact binary
//! representation of text.

pub mod bits;
pub mod error;
pub mod huffman;

pub use error::CodecError;
