// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end conceal/reveal pipeline: text codec + LSB embed/extract.

use super::carrier::Carrier;
use super::embed::embed;
use super::error::StegoError;
use super::extract::extract;
use super::TextCodec;
use crate::codec::bits;

/// Hide a text message in the cover image.
///
/// The message is converted to a byte-aligned bitstream — UTF-8 bits
/// directly, or through the Huffman codec, per `codec` — and embedded with a
/// `header_bits`-wide length header. The same `header_bits` and `codec` must
/// be used to reveal it.
///
/// # Errors
/// - [`StegoError::InvalidHeaderWidth`] if `header_bits` is not in 1–64.
/// - [`StegoError::HeaderOverflow`] if the message bit-length does not fit
///   in the header.
/// - [`StegoError::CapacityExceeded`] if the message exceeds the image's
///   capacity.
pub fn conceal(
    cover: &Carrier,
    message: &str,
    header_bits: u32,
    codec: TextCodec,
) -> Result<Carrier, StegoError> {
    let payload_bits = match codec {
        TextCodec::Plain => bits::text_to_bits(message),
        TextCodec::Huffman => bits::text_to_bits_compressed(message),
    };
    embed(cover, &payload_bits, header_bits)
}

/// Recover a text message hidden by [`conceal`] with the same parameters.
///
/// # Errors
/// [`StegoError::NoHiddenMessage`] if no valid header/payload is present or
/// the extracted bits do not decode as a message under `codec`. Codec-level
/// detail is collapsed into this single category at the boundary, so callers
/// probing arbitrary images learn nothing beyond "no message".
pub fn reveal(
    carrier: &Carrier,
    header_bits: u32,
    codec: TextCodec,
) -> Result<String, StegoError> {
    let payload_bits = extract(carrier, header_bits)?;
    match codec {
        TextCodec::Plain => bits::bits_to_text(&payload_bits),
        TextCodec::Huffman => bits::bits_to_text_compressed(&payload_bits),
    }
    .map_err(|_| StegoError::NoHiddenMessage)
}
