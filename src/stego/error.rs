// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the LSB steganography layer.
//!
//! [`StegoError`] covers carrier validation, capacity checks, and the
//! deliberately uninformative extraction failure.

use core::fmt;

use crate::codec::error::CodecError;

/// Errors that can occur during LSB embedding or extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The pixel buffer length does not match `width * height * 4`.
    InvalidDimensions,
    /// The header width is outside the supported 1–64 bit range.
    InvalidHeaderWidth(u32),
    /// The payload bit-length cannot be represented in the header width.
    HeaderOverflow,
    /// Header plus payload exceeds the carrier's capacity.
    CapacityExceeded,
    /// Extraction could not establish a valid header and payload.
    ///
    /// This is the only failure extraction reports about the carrier's
    /// content, so probing an image reveals nothing about how close the
    /// attempt came.
    NoHiddenMessage,
    /// A codec-layer failure, surfaced where the extraction boundary has not
    /// collapsed it into [`StegoError::NoHiddenMessage`].
    Codec(CodecError),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions => write!(f, "pixel buffer does not match width*height*4"),
            Self::InvalidHeaderWidth(bits) => write!(f, "unsupported header width: {bits} bits"),
            Self::HeaderOverflow => write!(f, "payload length does not fit the header width"),
            Self::CapacityExceeded => write!(f, "message too large for this image"),
            Self::NoHiddenMessage => write!(f, "there is no hidden message"),
            Self::Codec(e) => write!(f, "codec error: {e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for StegoError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}
