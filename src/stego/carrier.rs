// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! The RGBA pixel buffer that carries a hidden message.
//!
//! A [`Carrier`] is a fully materialized pixel buffer handed in by the
//! caller — this layer never performs file I/O, image format decoding, or
//! color-space conversion. One bit can be hidden per R, G, and B channel;
//! the alpha channel is never used for data.

use super::error::StegoError;

/// Channels per pixel: R, G, B, A.
pub const CHANNELS_PER_PIXEL: usize = 4;

/// Usable data channels per pixel (alpha carries no data).
pub const DATA_CHANNELS_PER_PIXEL: usize = 3;

/// An RGBA pixel buffer, `width * height * 4` channel bytes in row-major
/// pixel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Carrier {
    /// Wrap a caller-supplied RGBA buffer.
    ///
    /// # Errors
    /// [`StegoError::InvalidDimensions`] if `data.len()` is not exactly
    /// `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, StegoError> {
        let expected = width as u64 * height as u64 * CHANNELS_PER_PIXEL as u64;
        if data.len() as u64 != expected {
            return Err(StegoError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a carrier from already-validated parts. Caller guarantees the
    /// buffer length matches the dimensions.
    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len() as u64,
            width as u64 * height as u64 * CHANNELS_PER_PIXEL as u64
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maximum number of hidden bits this carrier can hold:
    /// one per R, G, and B channel of every pixel.
    pub fn capacity(&self) -> u64 {
        self.width as u64 * self.height as u64 * DATA_CHANNELS_PER_PIXEL as u64
    }

    /// The raw RGBA channel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the carrier and return the RGBA buffer, ready for the caller
    /// to re-encode into an image container.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
