//! Compact difficulty encoding
//!
//! Targets are 256-bit big-endian byte arrays. The compact form is
//! `exponent << 24 | mantissa`, with bit 23 reserved as a sign bit.

use crate::crypto::Hash256;

/// 256-bit target, big-endian
pub type Target = [u8; 32];

/// Decode compact bits into a full target.
///
/// Returns `None` for negative or overflowing encodings.
pub fn compact_to_target(compact: u32) -> Option<Target> {
    let exponent = (compact >> 24) as isize;
    let mantissa = compact & 0x007f_ffff;

    if mantissa != 0 && compact & 0x0080_0000 != 0 {
        return None;
    }

    let mut target = [0u8; 32];
    for k in 0..3isize {
        let byte = ((mantissa >> (8 * (2 - k))) & 0xff) as u8;
        let pos = 32 - exponent + k;
        if pos < 0 {
            if byte != 0 {
                return None;
            }
        } else if pos < 32 {
            target[pos as usize] = byte;
        }
    }

    Some(target)
}

/// Encode a target in compact form (inverse of [`compact_to_target`], lossy
/// beyond the three most significant bytes)
pub fn target_to_compact(target: &Target) -> u32 {
    let Some(first_nonzero) = target.iter().position(|b| *b != 0) else {
        return 0;
    };

    let mut size = (32 - first_nonzero) as u32;
    let mut mantissa: u32 = 0;
    for k in 0..3 {
        let byte = target.get(first_nonzero + k).copied().unwrap_or(0);
        mantissa |= (byte as u32) << (8 * (2 - k));
    }

    // Keep the sign bit clear
    if mantissa & 0x0080_0000 != 0 {
        mantissa >>= 8;
        size += 1;
    }

    (size << 24) | mantissa
}

/// Check that a block hash satisfies its compact target and the target is
/// within the network's PoW limit
pub fn check_proof_of_work(hash: &Hash256, bits: u32, pow_limit: &Hash256) -> bool {
    let Some(target) = compact_to_target(bits) else {
        return false;
    };

    if target == [0u8; 32] || target > pow_limit.to_be_bytes() {
        return false;
    }

    hash.to_be_bytes() <= target
}
