// Copyright (c) 2026 veil-core contributors
// SPDX-License-Identifier: GPL-3.0-only

//! Huffman codec with a self-describing serialized tree.
//!
//! Symbols are raw bytes (0–255); Unicode text is handled upstream by
//! compressing its UTF-8 byte stream. The compressed payload is:
//!
//! ```text
//! [4 bytes ] bit-length of the serialized tree (big-endian u32)
//! [T bytes ] serialized tree, one ASCII b'0'/b'1' byte per bit
//! [N bytes ] codewords of every input symbol in order, same ASCII bits
//! ```
//!
//! The tree serialization is a pre-order walk with a tag bit per node:
//! `1` + 8 symbol bits for a leaf, `0` then left then right for an internal
//! node. Empty input compresses to the fixed all-zero 4-byte sentinel.
//!
//! The tree is stored as an arena (nodes in a flat vector, children as
//! indices) and every walk uses an explicit stack, so skewed frequency
//! distributions cannot exhaust the call stack.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::error::{CodecError, Result};

/// Width of the tree bit-length prefix, in bytes.
const LEN_PREFIX_BYTES: usize = 4;

/// A node in the arena-backed Huffman tree.
///
/// Every internal node has exactly two children; the tree is always full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Leaf(u8),
    Internal { left: usize, right: usize },
}

/// Huffman tree in a flat arena. `root` indexes into `nodes`.
#[derive(Debug, PartialEq, Eq)]
struct Tree {
    nodes: Vec<Node>,
    root: usize,
}

impl Tree {
    /// Build a tree from a byte frequency table. At least one frequency
    /// must be non-zero.
    ///
    /// Ties between equal weights are broken by insertion order: leaves are
    /// inserted in ascending symbol value, merged nodes afterwards in
    /// creation order. This is deterministic within this implementation but
    /// not a portable wire contract — decompression never depends on it.
    fn build(freq: &[u64; 256]) -> Self {
        let mut nodes = Vec::new();
        let mut heap: BinaryHeap<Reverse<(u64, u64, usize)>> = BinaryHeap::new();
        let mut seq = 0u64;

        for sym in 0..=255u8 {
            let f = freq[sym as usize];
            if f > 0 {
                let idx = nodes.len();
                nodes.push(Node::Leaf(sym));
                heap.push(Reverse((f, seq, idx)));
                seq += 1;
            }
        }

        // Non-empty input guarantees at least one entry, so the pops below
        // never see an empty heap.
        while heap.len() > 1 {
            let Reverse((wl, _, left)) = heap.pop().unwrap();
            let Reverse((wr, _, right)) = heap.pop().unwrap();
            let idx = nodes.len();
            nodes.push(Node::Internal { left, right });
            heap.push(Reverse((wl + wr, seq, idx)));
            seq += 1;
        }

        let Reverse((_, _, root)) = heap.pop().unwrap();
        Tree { nodes, root }
    }

    /// Derive the codeword for each symbol: left edge 0, right edge 1.
    ///
    /// Symbols absent from the tree get an empty entry. A one-leaf tree has
    /// an empty root path; that leaf gets the single-bit code `0` so the
    /// payload still carries one bit per input symbol.
    fn code_table(&self) -> Vec<Vec<u8>> {
        let mut codes = vec![Vec::new(); 256];
        let mut stack = vec![(self.root, Vec::new())];
        while let Some((idx, path)) = stack.pop() {
            match self.nodes[idx] {
                Node::Leaf(sym) => {
                    codes[sym as usize] = if path.is_empty() { vec![0] } else { path };
                }
                Node::Internal { left, right } => {
                    let mut l = path.clone();
                    l.push(0);
                    let mut r = path;
                    r.push(1);
                    stack.push((right, r));
                    stack.push((left, l));
                }
            }
        }
        codes
    }

    /// Serialize the tree shape to bit values, pre-order.
    fn serialize(&self) -> Vec<u8> {
        let mut bits = Vec::new();
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            match self.nodes[idx] {
                Node::Leaf(sym) => {
                    bits.push(1);
                    for bit_pos in (0..8).rev() {
                        bits.push((sym >> bit_pos) & 1);
                    }
                }
                Node::Internal { left, right } => {
                    bits.push(0);
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        bits
    }

    /// Rebuild a tree from its serialized bits.
    ///
    /// Exact inverse of [`Tree::serialize`]: the bits must describe one
    /// complete tree and nothing else. Running out of bits, or bits left
    /// over after the tree closes, is [`CodecError::CorruptTree`].
    fn deserialize(bits: &[u8]) -> Result<Self> {
        let mut nodes: Vec<Node> = Vec::new();
        // Internal nodes still waiting for a child, innermost last.
        // The left slot is filled first; the node is popped once the right
        // slot fills.
        let mut pending: Vec<usize> = Vec::new();
        let mut pos = 0usize;

        loop {
            let tag = *bits.get(pos).ok_or(CodecError::CorruptTree)?;
            pos += 1;

            let idx = nodes.len();
            let node = match tag {
                1 => {
                    if pos + 8 > bits.len() {
                        return Err(CodecError::CorruptTree);
                    }
                    let mut sym = 0u8;
                    for &bit in &bits[pos..pos + 8] {
                        if bit > 1 {
                            return Err(CodecError::NonBinaryDigit);
                        }
                        sym = (sym << 1) | bit;
                    }
                    pos += 8;
                    Node::Leaf(sym)
                }
                0 => Node::Internal {
                    left: usize::MAX,
                    right: usize::MAX,
                },
                _ => return Err(CodecError::NonBinaryDigit),
            };
            nodes.push(node);

            if idx > 0 {
                let parent = *pending.last().ok_or(CodecError::CorruptTree)?;
                match &mut nodes[parent] {
                    Node::Internal { left, right } => {
                        if *left == usize::MAX {
                            *left = idx;
                        } else {
                            *right = idx;
                            pending.pop();
                        }
                    }
                    Node::Leaf(_) => return Err(CodecError::CorruptTree),
                }
            }

            if matches!(nodes[idx], Node::Internal { .. }) {
                pending.push(idx);
            }

            if pending.is_empty() {
                if pos != bits.len() {
                    // The declared tree region holds bits past the root's close.
                    return Err(CodecError::CorruptTree);
                }
                return Ok(Tree { nodes, root: 0 });
            }
        }
    }
}

/// Compress a byte sequence into a self-describing Huffman payload.
///
/// Empty input yields exactly `[0, 0, 0, 0]` — the all-zero sentinel with no
/// tree and no data. Output is deterministic for a given input.
pub fn compress(input: &[u8]) -> Vec<u8> {
    if input.is_empty() {
        return vec![0; LEN_PREFIX_BYTES];
    }

    let mut freq = [0u64; 256];
    for &byte in input {
        freq[byte as usize] += 1;
    }

    let tree = Tree::build(&freq);
    let codes = tree.code_table();
    let tree_bits = tree.serialize();

    let mut payload = Vec::with_capacity(LEN_PREFIX_BYTES + tree_bits.len() + input.len());
    payload.extend_from_slice(&(tree_bits.len() as u32).to_be_bytes());
    payload.extend(tree_bits.iter().map(|&bit| b'0' + bit));
    for &byte in input {
        payload.extend(codes[byte as usize].iter().map(|&bit| b'0' + bit));
    }
    payload
}

/// Decompress a payload produced by [`compress`].
///
/// Payloads of 4 bytes or fewer (the sentinel and anything shorter) decode
/// to the empty sequence. A degenerate one-leaf tree emits its symbol once
/// per remaining data bit.
///
/// # Errors
/// - [`CodecError::CorruptTree`] if the tree bit-length prefix is zero or
///   exceeds the remaining payload, or the tree region does not describe
///   exactly one tree.
/// - [`CodecError::NonBinaryDigit`] if a tree or data byte is not an ASCII
///   `0`/`1`.
/// - [`CodecError::TruncatedPayload`] if the data ends mid-codeword.
pub fn decompress(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() <= LEN_PREFIX_BYTES {
        return Ok(Vec::new());
    }

    let tree_len =
        u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]) as usize;
    let rest = &payload[LEN_PREFIX_BYTES..];
    if tree_len == 0 || tree_len > rest.len() {
        return Err(CodecError::CorruptTree);
    }

    let tree_bits = ascii_bits(&rest[..tree_len])?;
    let tree = Tree::deserialize(&tree_bits)?;
    let data = &rest[tree_len..];

    if let Node::Leaf(sym) = tree.nodes[tree.root] {
        for &byte in data {
            if byte != b'0' && byte != b'1' {
                return Err(CodecError::NonBinaryDigit);
            }
        }
        return Ok(vec![sym; data.len()]);
    }

    let mut output = Vec::new();
    let mut cursor = tree.root;
    for &byte in data {
        let bit = match byte {
            b'0' => 0,
            b'1' => 1,
            _ => return Err(CodecError::NonBinaryDigit),
        };
        cursor = match tree.nodes[cursor] {
            Node::Internal { left, right } => {
                if bit == 0 {
                    left
                } else {
                    right
                }
            }
            Node::Leaf(_) => return Err(CodecError::CorruptTree),
        };
        if let Node::Leaf(sym) = tree.nodes[cursor] {
            output.push(sym);
            cursor = tree.root;
        }
    }

    if cursor != tree.root {
        return Err(CodecError::TruncatedPayload);
    }
    Ok(output)
}

/// Map ASCII `b'0'`/`b'1'` bytes to bit values.
fn ascii_bits(bytes: &[u8]) -> Result<Vec<u8>> {
    bytes
        .iter()
        .map(|&byte| match byte {
            b'0' => Ok(0),
            b'1' => Ok(1),
            _ => Err(CodecError::NonBinaryDigit),
        })
        .collect()
}
