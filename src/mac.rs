//! The MAC611 context and tag computation.
//!
//! A tag is one pass of a Horner-rule polynomial hash over the message
//! blocks under a rotating sub-key, one extra step for the message
//! length, and one block-cipher call binding the hash to the nonce.

use cipher::consts::U16;
use cipher::{Block, BlockEncrypt, BlockSizeUser, Key, KeyInit, KeySizeUser};
use subtle::ConstantTimeEq;

use crate::backend::{MulBackend, WideMul};
use crate::field::reduce_full;
use crate::noekeon::Noekeon;
use crate::pack::Blocks;
use crate::params::{KEY_SIZE, LAMBDA, NONCE_SIZE, TAG_SIZE};

/// A 128-bit block cipher usable for sub-key derivation and finalization.
///
/// Blanket-implemented for every cipher with 16-byte key and block, so an
/// alternative implementation can be substituted when the context is
/// built. Both sides of a connection must use the same cipher.
pub trait TagCipher:
    BlockEncrypt + BlockSizeUser<BlockSize = U16> + KeyInit + KeySizeUser<KeySize = U16>
{
}

impl<T> TagCipher for T where
    T: BlockEncrypt + BlockSizeUser<BlockSize = U16> + KeyInit + KeySizeUser<KeySize = U16>
{
}

/// Single-block encrypt-in-place over a plain byte array.
#[inline]
fn encrypt16<C: TagCipher>(cipher: &C, block: &mut [u8; 16]) {
    let mut b = Block::<C>::default();
    b.copy_from_slice(block);
    cipher.encrypt_block(&mut b);
    block.copy_from_slice(&b);
}

/// Derive the hash sub-key `h_k`.
///
/// Encrypts the 128-bit little-endian encoding of `k` placed in the high
/// 64 bits (the low 64 bits are zero) and fully reduces the low 64 bits
/// of the ciphertext. Every plaintext used here carries a zero top bit in
/// its low half, which the finalization's 2^63 separator relies on.
pub(crate) fn subkey<C: TagCipher>(cipher: &C, k: u64) -> u64 {
    let mut block = [0u8; 16];
    block[8..].copy_from_slice(&k.to_le_bytes());
    encrypt16(cipher, &mut block);
    reduce_full(u64::from_le_bytes(block[..8].try_into().unwrap()))
}

/// A keyed MAC611 context.
///
/// Generic over the multiplication backend `M` and the block cipher `C`;
/// both are fixed when the context is built, there is no global switch.
/// [`tag`](Mac611::tag) borrows the context exclusively because the table
/// backend rebuilds its table in place across sub-key rotations; clone
/// the context when tagging from several threads.
#[derive(Clone)]
pub struct Mac611<M = WideMul, C = Noekeon> {
    cipher: C,
    mul: M,
    h0: u64,
}

impl<M: MulBackend, C: TagCipher> Mac611<M, C> {
    /// Build a context from a 16-byte master key.
    ///
    /// Keys the cipher, derives the first sub-key `h_0` and installs it
    /// in the multiplication backend; for [`TableMul`] this is where the
    /// 16 KiB digit table is allocated and filled.
    ///
    /// [`TableMul`]: crate::TableMul
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        let mut k = Key::<C>::default();
        k.copy_from_slice(key);
        let cipher = C::new(&k);
        let h0 = subkey(&cipher, 0);
        Mac611 {
            mul: M::for_subkey(h0),
            cipher,
            h0,
        }
    }

    /// Compute the 64-bit tag of `msg` under `nonce`.
    ///
    /// The nonce is consumed as raw bytes; callers exchanging tags across
    /// architectures must agree on its byte order. Runs in O(len) with no
    /// allocation.
    pub fn tag(&mut self, msg: &[u8], nonce: &[u8; NONCE_SIZE]) -> [u8; TAG_SIZE] {
        let mut state = 0u64;
        let mut cnt = LAMBDA;
        let mut index = 0u64;
        let mut rotated = false;

        for block in Blocks::new(msg) {
            // Horner step. state stays below 2^61 + 7 between steps, so
            // adding a 56-bit block keeps the product input below 2^62.
            state = self.mul.mul(state + block);
            cnt -= 1;
            if cnt == 0 {
                index += 1;
                self.mul.rekey(subkey(&self.cipher, index));
                cnt = LAMBDA;
                rotated = true;
            }
        }

        // Length padding: one further Horner step under the sub-key left
        // active by the final message block.
        state = self.mul.mul(state + msg.len() as u64);

        // Finalization: encrypt hash || nonce. The forced top bit keeps
        // this plaintext disjoint from every sub-key derivation input.
        let s = reduce_full(state) | 1 << 63;
        let mut block = [0u8; 16];
        block[..8].copy_from_slice(&s.to_le_bytes());
        block[8..].copy_from_slice(nonce);
        encrypt16(&self.cipher, &mut block);

        if rotated {
            self.mul.rekey(self.h0);
        }

        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(&block[..TAG_SIZE]);
        tag
    }

    /// Recompute the tag for `msg` and compare it against `expected` in
    /// constant time.
    pub fn verify(
        &mut self,
        msg: &[u8],
        nonce: &[u8; NONCE_SIZE],
        expected: &[u8; TAG_SIZE],
    ) -> bool {
        let tag = self.tag(msg, nonce);
        tag[..].ct_eq(&expected[..]).into()
    }
}

/// One-shot tag with the default wide-multiplier backend.
///
/// For repeated tagging under one key, build a [`Mac611`] once and reuse
/// it: that skips re-keying the cipher and re-deriving `h_0` per call.
pub fn tag(key: &[u8; KEY_SIZE], msg: &[u8], nonce: &[u8; NONCE_SIZE]) -> [u8; TAG_SIZE] {
    let mut mac: Mac611 = Mac611::new(key);
    mac.tag(msg, nonce)
}

/// One-shot tag verification in constant time.
pub fn verify(
    key: &[u8; KEY_SIZE],
    msg: &[u8],
    nonce: &[u8; NONCE_SIZE],
    expected: &[u8; TAG_SIZE],
) -> bool {
    let tag = tag(key, msg, nonce);
    tag[..].ct_eq(&expected[..]).into()
}
