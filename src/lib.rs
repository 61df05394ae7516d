//! # MAC611
//!
//! A nonce-based Wegman-Carter message authentication code built for
//! constrained microcontrollers: a polynomial hash over the prime field
//! of order 2^61 - 1 authenticates the message, and one Noekeon call
//! binds the hash to the nonce.
//!
//! ## Features
//!
//! - **64-bit tags** from a 128-bit key and a 64-bit nonce
//! - **Selectable arithmetic**: multiplication backends for 64-bit hosts,
//!   32-bit hosts, and multiplier-less cores (8-bit digit tables)
//! - **Byte-exact everywhere**: message parsing and tag extraction are
//!   defined in little-endian byte order, independent of host endianness
//!   and alignment
//! - **Pluggable cipher**: any 16-byte-block [`cipher::BlockEncrypt`]
//!   implementation can replace the bundled Noekeon
//!
//! ## Algorithm parameters
//!
//! - Field modulus p = 2^61 - 1
//! - 56-bit message blocks (seven bytes per field element)
//! - Sub-key rotation every LAMBDA = 1024 blocks
//! - Length padding block and a 2^63 finalization separator
//!
//! ## Example
//!
//! ```rust
//! use mac611::{Mac611, TableMul};
//!
//! let key = [0x42u8; 16];
//! let nonce = 1u64.to_le_bytes();
//!
//! // Single-shot tagging
//! let tag = mac611::tag(&key, b"message", &nonce);
//! assert!(mac611::verify(&key, b"message", &nonce, &tag));
//!
//! // Reusable context (skips re-deriving the first sub-key per call)
//! let mut mac: Mac611 = Mac611::new(&key);
//! assert_eq!(mac.tag(b"message", &nonce), tag);
//!
//! // Table backend for cores without a fast multiplier
//! let mut mac: Mac611<TableMul> = Mac611::new(&key);
//! assert_eq!(mac.tag(b"message", &nonce), tag);
//! ```
//!
//! ## no_std support
//!
//! The crate is `no_std` with `alloc` (the table backend owns a 16 KiB
//! heap table):
//!
//! ```toml
//! [dependencies]
//! mac611 = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod backend;
mod field;
mod mac;
mod noekeon;
mod pack;
mod params;

#[cfg(feature = "std")]
mod ffi;

pub use backend::{KaratsubaMul, MulBackend, SplitMul, TableMul, WideMul};
pub use mac::{Mac611, TagCipher, tag, verify};
pub use noekeon::Noekeon;
pub use params::*;

#[cfg(test)]
mod tests;
