// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Capacity and message-size arithmetic.
//!
//! Pure functions relating image dimensions, header width, and prospective
//! message size, so callers can reject infeasible embeds before touching any
//! pixel data.

use super::TextCodec;
use crate::codec::bits;

/// Utilization (header + message, as a share of total capacity) above which
/// an embed is worth warning about, in percent.
pub const TIGHT_CAPACITY_PERCENT: f64 = 80.0;

/// Capacity report for a carrier of the given dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityInfo {
    pub width: u32,
    pub height: u32,
    /// Header width the report was computed against.
    pub header_bits: u32,
    /// Total hideable bits: `width * height * 3`.
    pub total_bits: u64,
    /// Total capacity in whole bytes.
    pub total_bytes: u64,
    /// Bits left for payload once the header is subtracted.
    pub usable_bits: u64,
    /// Rough character estimate at 8 bits per character. Multi-byte UTF-8
    /// characters consume more.
    pub estimated_chars: u64,
}

/// Compute the capacity report for a `width` x `height` carrier and the
/// given header width.
pub fn capacity_info(width: u32, height: u32, header_bits: u32) -> CapacityInfo {
    let total_bits = width as u64 * height as u64 * 3;
    let usable_bits = total_bits.saturating_sub(header_bits as u64);
    CapacityInfo {
        width,
        height,
        header_bits,
        total_bits,
        total_bytes: total_bits / 8,
        usable_bits,
        estimated_chars: usable_bits / 8,
    }
}

impl CapacityInfo {
    /// Would a payload of `message_bits` fit alongside the header?
    pub fn fits(&self, message_bits: u64) -> bool {
        message_bits <= self.usable_bits
    }

    /// Share of total capacity a `message_bits` payload would use,
    /// header included, in percent. Exceeds 100 when the message does not fit.
    pub fn utilization_percent(&self, message_bits: u64) -> f64 {
        if self.total_bits == 0 {
            return 100.0;
        }
        (self.header_bits as u64 + message_bits) as f64 / self.total_bits as f64 * 100.0
    }

    /// True when the message fits but uses more than
    /// [`TIGHT_CAPACITY_PERCENT`] of the capacity.
    pub fn is_tight(&self, message_bits: u64) -> bool {
        self.fits(message_bits) && self.utilization_percent(message_bits) > TIGHT_CAPACITY_PERCENT
    }
}

/// The exact payload size, in bits, that embedding `text` with the given
/// codec would produce (header not included).
pub fn message_size_bits(text: &str, codec: TextCodec) -> u64 {
    let bits = match codec {
        TextCodec::Plain => bits::text_to_bits(text),
        TextCodec::Huffman => bits::text_to_bits_compressed(text),
    };
    bits.len() as u64
}
