//! Noekeon block cipher (direct-key mode).
//!
//! 128-bit blocks and keys, 16 rounds plus a final theta. State and key
//! load big-endian per the NESSIE convention, so byte-level test vectors
//! match the published ones. The MAC treats the cipher as byte-in,
//! byte-out; tagger and verifier only have to agree on one
//! implementation.

use cipher::{
    consts::{U1, U16},
    inout::InOut,
    Block, BlockBackend, BlockCipher, BlockClosure, BlockEncrypt, BlockSizeUser, Key, KeyInit,
    KeySizeUser, ParBlocksSizeUser,
};

/// Round constants: the AES Rcon sequence, one per round plus the output
/// transform.
const RC: [u32; 17] = [
    0x80, 0x1b, 0x36, 0x6c, 0xd8, 0xab, 0x4d, 0x9a, 0x2f, 0x5e, 0xbc, 0x63, 0xc6, 0x97, 0x35,
    0x6a, 0xd4,
];

/// Noekeon keyed for encryption.
#[derive(Clone)]
pub struct Noekeon {
    k: [u32; 4],
}

/// Linear layer: two mixing phases around the round-key addition.
#[inline(always)]
fn theta(k: &[u32; 4], a: &mut [u32; 4]) {
    let mut t = a[0] ^ a[2];
    t ^= t.rotate_left(8) ^ t.rotate_right(8);
    a[1] ^= t;
    a[3] ^= t;

    for (ai, ki) in a.iter_mut().zip(k) {
        *ai ^= ki;
    }

    let mut t = a[1] ^ a[3];
    t ^= t.rotate_left(8) ^ t.rotate_right(8);
    a[0] ^= t;
    a[2] ^= t;
}

/// Nonlinear layer: an involutive 4-bit S-box applied bitslice-wise.
#[inline(always)]
fn gamma(a: &mut [u32; 4]) {
    a[1] ^= !a[3] & !a[2];
    a[0] ^= a[2] & a[1];
    a.swap(0, 3);
    a[2] ^= a[0] ^ a[1] ^ a[3];
    a[1] ^= !a[3] & !a[2];
    a[0] ^= a[2] & a[1];
}

#[inline(always)]
fn pi1(a: &mut [u32; 4]) {
    a[1] = a[1].rotate_left(1);
    a[2] = a[2].rotate_left(5);
    a[3] = a[3].rotate_left(2);
}

#[inline(always)]
fn pi2(a: &mut [u32; 4]) {
    a[1] = a[1].rotate_right(1);
    a[2] = a[2].rotate_right(5);
    a[3] = a[3].rotate_right(2);
}

impl Noekeon {
    #[inline(always)]
    fn encrypt_words(&self, a: &mut [u32; 4]) {
        for &rc in &RC[..16] {
            a[0] ^= rc;
            theta(&self.k, a);
            pi1(a);
            gamma(a);
            pi2(a);
        }
        a[0] ^= RC[16];
        theta(&self.k, a);
    }
}

impl KeySizeUser for Noekeon {
    type KeySize = U16;
}

impl KeyInit for Noekeon {
    fn new(key: &Key<Self>) -> Self {
        let mut k = [0u32; 4];
        for (w, chunk) in k.iter_mut().zip(key.chunks_exact(4)) {
            *w = u32::from_be_bytes(chunk.try_into().unwrap());
        }
        Noekeon { k }
    }
}

impl BlockSizeUser for Noekeon {
    type BlockSize = U16;
}

impl BlockCipher for Noekeon {}

impl BlockEncrypt for Noekeon {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut EncBackend(self))
    }
}

struct EncBackend<'a>(&'a Noekeon);

impl BlockSizeUser for EncBackend<'_> {
    type BlockSize = U16;
}

impl ParBlocksSizeUser for EncBackend<'_> {
    type ParBlocksSize = U1;
}

impl BlockBackend for EncBackend<'_> {
    #[inline(always)]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut a = [0u32; 4];
        for (w, chunk) in a.iter_mut().zip(block.get_in().chunks_exact(4)) {
            *w = u32::from_be_bytes(chunk.try_into().unwrap());
        }
        self.0.encrypt_words(&mut a);
        for (chunk, w) in block.get_out().chunks_exact_mut(4).zip(&a) {
            chunk.copy_from_slice(&w.to_be_bytes());
        }
    }
}
