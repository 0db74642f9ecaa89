// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the binary codec layer.

use std::fmt;

/// Errors that can occur during bitstream conversion or Huffman coding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A bitstream's length is not a multiple of 8.
    NotByteAligned(usize),
    /// A bitstream element was neither 0 nor 1 (or neither `b'0'` nor `b'1'`
    /// in the ASCII-bit wire representation).
    NonBinaryDigit,
    /// Decoded bytes are not a valid UTF-8 sequence.
    InvalidUtf8,
    /// The serialized Huffman tree is malformed: the declared tree bit-length
    /// is out of bounds, deserialization ran out of bits, the tree left
    /// unused declared bits, or a traversal hit a missing child.
    CorruptTree,
    /// The coded data ended in the middle of a codeword.
    TruncatedPayload,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotByteAligned(len) => {
                write!(f, "bitstream length {len} is not a multiple of 8")
            }
            Self::NonBinaryDigit => write!(f, "non-binary digit in bitstream"),
            Self::InvalidUtf8 => write!(f, "decoded bytes are not valid UTF-8"),
            Self::CorruptTree => write!(f, "malformed serialized Huffman tree"),
            Self::TruncatedPayload => write!(f, "coded data ends mid-codeword"),
        }
    }
}

impl std::error::Error for CodecError {}

pub type Result<T> = std::result::Result<T, CodecError>;
