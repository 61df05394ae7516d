//! Message packing: bytes to 56-bit field-element blocks.
//!
//! The message is read as a base-2^56 number, least-significant block
//! first: block `j` is the little-endian value of bytes `7j..7j+7`, and a
//! trailing group of fewer than seven bytes forms one final short block.
//! Packing is byte-defined, so output is identical on every host and for
//! every alignment of the message slice.

/// Lazy iterator over the 56-bit blocks of a message.
///
/// Decodes four blocks at a time while at least 28 bytes remain, using
/// overlapping little-endian word reads; the tail falls back to a byte
/// loop. Never reads past the end of the message.
pub struct Blocks<'a> {
    rest: &'a [u8],
    buf: [u64; 4],
    head: usize,
    filled: usize,
}

const MASK56: u64 = (1 << 56) - 1;

impl<'a> Blocks<'a> {
    pub fn new(msg: &'a [u8]) -> Self {
        Blocks {
            rest: msg,
            buf: [0; 4],
            head: 0,
            filled: 0,
        }
    }

    #[inline]
    fn word(chunk: &[u8], at: usize) -> u64 {
        u64::from_le_bytes(chunk[at..at + 8].try_into().unwrap())
    }
}

impl Iterator for Blocks<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.head < self.filled {
            let b = self.buf[self.head];
            self.head += 1;
            return Some(b);
        }

        if self.rest.len() >= 28 {
            let (quad, rest) = self.rest.split_at(28);
            self.rest = rest;
            // Blocks start at offsets 0, 7, 14, 21; the last read is
            // pulled back one byte to stay inside the chunk.
            self.buf = [
                Self::word(quad, 0) & MASK56,
                Self::word(quad, 7) & MASK56,
                Self::word(quad, 14) & MASK56,
                Self::word(quad, 20) >> 8,
            ];
            self.head = 1;
            self.filled = 4;
            return Some(self.buf[0]);
        }

        if self.rest.is_empty() {
            return None;
        }

        let take = self.rest.len().min(7);
        let (chunk, rest) = self.rest.split_at(take);
        self.rest = rest;
        let mut b = 0u64;
        for (i, &byte) in chunk.iter().enumerate() {
            b |= (byte as u64) << (8 * i);
        }
        Some(b)
    }
}
