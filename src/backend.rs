//! Multiplication backends for the polynomial hash.
//!
//! Every Horner step multiplies the accumulator by the current hash
//! sub-key. How that multiply is carried out is the one part of MAC611
//! that differs between host classes, so it sits behind [`MulBackend`]
//! and is chosen when the context is built, never switched globally.
//!
//! The three scalar backends hold the sub-key as a single `u64` and defer
//! to the scalar field routines. [`TableMul`] instead precomputes,
//! for the fixed sub-key, eight rows of 256 field elements so that a
//! multiply becomes eight table reads and additions; this is the backend
//! for cores without a usable hardware multiplier, at the price of a
//! 16 KiB table that must be rebuilt on every sub-key rotation.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec};

use crate::field::{mul_karatsuba, mul_split, mul_wide, reduce, reduce_mini};
use crate::params::{TABLE_COLS, TABLE_ROWS};

/// Multiplication by an installed hash sub-key.
///
/// `h` is always fully reduced. `mul` accepts any value below 2^62 and
/// returns a partially reduced result in `[0, 2^61 + 6]`.
pub trait MulBackend {
    /// Build the backend state for sub-key `h`.
    fn for_subkey(h: u64) -> Self;

    /// Replace the installed sub-key, reusing the existing storage.
    fn rekey(&mut self, h: u64);

    /// `x * h mod P`, partially reduced.
    fn mul(&self, x: u64) -> u64;
}

/// 64x64->128 multiply, the reference backend on 64-bit hosts.
#[derive(Clone, Copy)]
pub struct WideMul(u64);

impl MulBackend for WideMul {
    fn for_subkey(h: u64) -> Self {
        WideMul(h)
    }

    fn rekey(&mut self, h: u64) {
        self.0 = h;
    }

    #[inline(always)]
    fn mul(&self, x: u64) -> u64 {
        mul_wide(x, self.0)
    }
}

/// Schoolbook multiply on 32-bit halves, for 32-bit hosts.
#[derive(Clone, Copy)]
pub struct SplitMul(u64);

impl MulBackend for SplitMul {
    fn for_subkey(h: u64) -> Self {
        SplitMul(h)
    }

    fn rekey(&mut self, h: u64) {
        self.0 = h;
    }

    #[inline(always)]
    fn mul(&self, x: u64) -> u64 {
        mul_split(x, self.0)
    }
}

/// Base-2^31 Karatsuba multiply, three products per step.
#[derive(Clone, Copy)]
pub struct KaratsubaMul(u64);

impl MulBackend for KaratsubaMul {
    fn for_subkey(h: u64) -> Self {
        KaratsubaMul(h)
    }

    fn rekey(&mut self, h: u64) {
        self.0 = h;
    }

    #[inline(always)]
    fn mul(&self, x: u64) -> u64 {
        mul_karatsuba(x, self.0)
    }
}

/// Digit-table multiply for cores without a fast multiplier.
///
/// Row `i` maps an 8-bit digit `d` to `d * 2^(8i) * h mod P`, so the sum
/// of the eight row lookups for the byte digits of `x` equals `x * h`.
/// Entries are kept in `[0, P]` (P aliases zero), which keeps the row
/// recurrence to a single conditional subtraction and bounds the digit
/// sum below 2^64.
#[derive(Clone)]
pub struct TableMul {
    rows: Box<[[u64; TABLE_COLS]]>,
}

impl TableMul {
    fn build(rows: &mut [[u64; TABLE_COLS]], h: u64) {
        // Row base starts at h and gains a factor 2^8 per row, maintained
        // as 2 * rows[i][128] with one conditional subtraction.
        let mut base = h;
        for row in rows.iter_mut() {
            row[0] = 0;
            row[1] = base;
            for j in 2..TABLE_COLS {
                row[j] = reduce_mini(row[j - 1] + base);
            }
            base = reduce_mini(2 * row[128]);
        }
    }
}

impl MulBackend for TableMul {
    fn for_subkey(h: u64) -> Self {
        let mut rows = vec![[0u64; TABLE_COLS]; TABLE_ROWS].into_boxed_slice();
        Self::build(&mut rows, h);
        TableMul { rows }
    }

    fn rekey(&mut self, h: u64) {
        Self::build(&mut self.rows, h);
    }

    #[inline(always)]
    fn mul(&self, x: u64) -> u64 {
        let mut acc = 0u64;
        for (i, row) in self.rows.iter().enumerate() {
            acc += row[((x >> (8 * i)) & 0xff) as usize];
        }
        reduce(acc)
    }
}
