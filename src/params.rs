//! MAC611 algorithm parameters.
//!
//! The construction authenticates 56-bit message blocks with a polynomial
//! hash over the prime field of order 2^61 - 1 and refreshes the hash
//! sub-key every LAMBDA blocks to bound the forgery advantage.

/// The Mersenne prime 2^61 - 1, modulus of the hash field.
pub const P: u64 = (1 << 61) - 1;

/// Number of Horner steps between sub-key rotations.
pub const LAMBDA: u32 = 1024;

/// Message bytes packed into one field element (56 bits).
pub const BLOCK_BYTES: usize = 7;

/// Master key size in bytes (one Noekeon key).
pub const KEY_SIZE: usize = 16;

/// Nonce size in bytes.
pub const NONCE_SIZE: usize = 8;

/// Authentication tag size in bytes.
pub const TAG_SIZE: usize = 8;

/// Rows of the digit-multiplication table: one per byte of a 64-bit value.
pub const TABLE_ROWS: usize = 8;

/// Entries per table row: one per 8-bit digit value.
pub const TABLE_COLS: usize = 256;
