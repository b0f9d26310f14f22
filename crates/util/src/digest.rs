//! Digest functions consumed as pure `bytes -> hash` functions.
//!
//! [`hash64`] keys the hash index. It is a djb-style multiply-add over the
//! bytes followed by a 64-bit avalanche so that short keys spread across the
//! whole range. It is not cryptographic; [`md5`] and [`sha256`] are provided
//! for callers that need real digests.

use md5::Md5;
use sha2::{Digest, Sha256};

const START_STATE: u64 = 5381;

/// Mix a single integer into the hash state.
///
/// `state = (state << 5) + state + num` with wrapping semantics.
#[inline]
fn update_num(state: u64, num: u64) -> u64 {
    state.wrapping_shl(5).wrapping_add(state).wrapping_add(num)
}

#[inline]
fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

/// Stable 64-bit hash of a byte string.
///
/// ```
/// use tagtree_util::digest::hash64;
///
/// assert_eq!(hash64(b"key"), hash64(b"key"));
/// assert_ne!(hash64(b"key"), hash64(b"kez"));
/// ```
pub fn hash64(bytes: &[u8]) -> u64 {
    let mut state = update_num(START_STATE, bytes.len() as u64);
    for &b in bytes {
        state = update_num(state, u64::from(b));
    }
    avalanche(state)
}

/// 128-bit MD5 digest.
pub fn md5(bytes: &[u8]) -> [u8; 16] {
    let digest = Md5::digest(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&digest);
    out
}

/// 256-bit SHA-256 digest.
pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    let digest = Sha256::digest(bytes);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Lowercase hex rendering of a digest.
pub fn to_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
}
