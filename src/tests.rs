//! End-to-end tests for MAC611.
//!
//! The wide-multiplier backend is the reference: every scenario computes
//! its tag there and asserts bit-equality against the other backends.

use cipher::KeyInit;

use crate::backend::{KaratsubaMul, SplitMul, TableMul};
use crate::mac::{subkey, tag, verify, Mac611};
use crate::noekeon::Noekeon;
use crate::params::{BLOCK_BYTES, LAMBDA, P};

/// Canonical test key.
const KEY: [u8; 16] = [
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32,
    0x10,
];

/// Message bytes follow the index.
fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

fn nonce_for(i: usize) -> [u8; 8] {
    let b = i as u8;
    [b, b, b, b, !b, !b, !b, !b]
}

/// Tag with the reference backend and assert the others agree.
fn tag_all_backends(key: &[u8; 16], msg: &[u8], nonce: &[u8; 8]) -> [u8; 8] {
    let mut wide: Mac611 = Mac611::new(key);
    let reference = wide.tag(msg, nonce);

    let mut split: Mac611<SplitMul> = Mac611::new(key);
    assert_eq!(
        split.tag(msg, nonce),
        reference,
        "split backend, len={}",
        msg.len()
    );

    let mut kara: Mac611<KaratsubaMul> = Mac611::new(key);
    assert_eq!(
        kara.tag(msg, nonce),
        reference,
        "karatsuba backend, len={}",
        msg.len()
    );

    let mut table: Mac611<TableMul> = Mac611::new(key);
    assert_eq!(
        table.tag(msg, nonce),
        reference,
        "table backend, len={}",
        msg.len()
    );

    reference
}

#[test]
fn determinism() {
    let msg = message(100);
    let nonce = nonce_for(3);
    let mut mac: Mac611 = Mac611::new(&KEY);
    let t1 = mac.tag(&msg, &nonce);
    let t2 = mac.tag(&msg, &nonce);
    assert_eq!(t1, t2);
    assert_eq!(tag(&KEY, &msg, &nonce), t1);
}

#[test]
fn backend_equivalence_scenarios() {
    let lambda = LAMBDA as usize;

    // Zero-length message: the hash is one Horner step over the length
    // block 0 before finalization.
    tag_all_backends(&KEY, &[], &[0; 8]);

    // One full block, the shortest partial tail, exactly eight blocks.
    tag_all_backends(&KEY, &message(7), &[7; 8]);
    tag_all_backends(&KEY, &message(8), &8u64.to_le_bytes());
    tag_all_backends(&KEY, &message(56), &56u64.to_le_bytes());

    // Exactly one rotation boundary, and one extra block past it.
    let len = BLOCK_BYTES * lambda;
    tag_all_backends(&KEY, &message(len), &(len as u64).to_le_bytes());
    let len = BLOCK_BYTES * lambda + 7;
    tag_all_backends(&KEY, &message(len), &(len as u64).to_le_bytes());
}

#[test]
fn backend_equivalence_sweep() {
    for len in 0..=16 {
        tag_all_backends(&KEY, &message(len), &nonce_for(len));
    }
    for len in [56usize, 896, 7000] {
        tag_all_backends(&KEY, &message(len), &(len as u64).to_le_bytes());
    }
}

#[test]
fn rotation_boundary_scan() {
    // Lengths around 7 * LAMBDA, including 7164 where a partial block is
    // the 1024th block and the rotation lands just before the length
    // padding. Each length gets its own key.
    let boundary = BLOCK_BYTES * LAMBDA as usize;
    let mut tags = Vec::new();
    for len in boundary - 8..=boundary + 16 {
        let mut key = KEY;
        key[0] = len as u8;
        let nonce = (len as u64).to_le_bytes();
        tags.push(tag_all_backends(&key, &message(len), &nonce));
    }
    for pair in tags.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn multiple_rotations() {
    let len = 3 * BLOCK_BYTES * LAMBDA as usize + 11;
    tag_all_backends(&KEY, &message(len), &(len as u64).to_le_bytes());
}

#[test]
fn length_sensitivity() {
    // A trailing zero byte extends the message without changing any
    // block value except the length block.
    let msg = message(21);
    let mut extended = msg.clone();
    extended.push(0);
    let nonce = nonce_for(0);
    assert_ne!(tag(&KEY, &msg, &nonce), tag(&KEY, &extended, &nonce));

    let empty = tag(&KEY, &[], &nonce);
    let one_zero = tag(&KEY, &[0], &nonce);
    assert_ne!(empty, one_zero);
}

#[test]
fn nonce_separation() {
    let msg = message(33);
    let t1 = tag(&KEY, &msg, &1u64.to_le_bytes());
    let t2 = tag(&KEY, &msg, &2u64.to_le_bytes());
    assert_ne!(t1, t2);
}

#[test]
fn key_separation() {
    let msg = message(33);
    let mut other = KEY;
    other[15] ^= 1;
    let nonce = nonce_for(1);
    assert_ne!(tag(&KEY, &msg, &nonce), tag(&other, &msg, &nonce));
}

#[test]
fn unaligned_input() {
    let msg = message(201);
    let nonce = nonce_for(9);
    let reference = tag(&KEY, &msg, &nonce);
    for offset in 1..8 {
        let mut shifted = vec![0u8; offset + msg.len()];
        shifted[offset..].copy_from_slice(&msg);
        assert_eq!(tag(&KEY, &shifted[offset..], &nonce), reference);
    }
}

#[test]
fn table_restored_after_rotation() {
    let long = message(2 * BLOCK_BYTES * LAMBDA as usize + 3);
    let short = message(40);
    let nonce = nonce_for(5);

    let mut fresh: Mac611<TableMul> = Mac611::new(&KEY);
    let expected_short = fresh.tag(&short, &nonce);

    // A rotating tag must leave the context as it found it.
    let mut reused: Mac611<TableMul> = Mac611::new(&KEY);
    reused.tag(&long, &nonce);
    assert_eq!(reused.tag(&short, &nonce), expected_short);

    let mut wide: Mac611 = Mac611::new(&KEY);
    wide.tag(&long, &nonce);
    assert_eq!(wide.tag(&short, &nonce), expected_short);
}

#[test]
fn verify_roundtrip() {
    let msg = message(77);
    let nonce = nonce_for(2);
    let t = tag(&KEY, &msg, &nonce);
    assert!(verify(&KEY, &msg, &nonce, &t));

    let mut bad = t;
    bad[0] ^= 1;
    assert!(!verify(&KEY, &msg, &nonce, &bad));
    assert!(!verify(&KEY, &msg, &nonce_for(3), &t));

    let mut mac: Mac611<TableMul> = Mac611::new(&KEY);
    assert!(mac.verify(&msg, &nonce, &t));
}

#[test]
fn subkeys_fully_reduced_and_distinct() {
    let cipher = Noekeon::new(&KEY.into());
    let mut seen = std::collections::BTreeSet::new();
    for k in 0..32u64 {
        let h = subkey(&cipher, k);
        assert!(h < P);
        seen.insert(h);
    }
    assert_eq!(seen.len(), 32);
}

#[test]
fn cloned_context_tags_identically() {
    let mut mac: Mac611<TableMul> = Mac611::new(&KEY);
    let mut copy = mac.clone();
    let msg = message(500);
    let nonce = nonce_for(4);
    assert_eq!(mac.tag(&msg, &nonce), copy.tag(&msg, &nonce));
}

/// Print the scenario vectors for cross-platform comparison
/// (run with --nocapture).
#[test]
fn print_reference_vectors() {
    for len in [0usize, 7, 8, 56, 7168, 7175] {
        let nonce = (len as u64).to_le_bytes();
        let t = tag(&KEY, &message(len), &nonce);
        println!("len={len:5}  tag={}", hex::encode(t));
    }
}
