//! Merkle tree implementation
//!
//! Used for computing transaction merkle roots in blocks.

use super::{hash_pair, Hash256};

/// Compute the merkle root of a list of hashes
///
/// If the list is empty, returns zero hash.
/// If odd number of elements, duplicates the last element.
pub fn compute_merkle_root(hashes: &[Hash256]) -> Hash256 {
    let mut current_level: Vec<Hash256> = match hashes {
        [] => return Hash256::zero(),
        [single] => return *single,
        _ => hashes.to_vec(),
    };

    while current_level.len() > 1 {
        // Odd level: duplicate the last hash
        if current_level.len() % 2 == 1 {
            let last = current_level[current_level.len() - 1];
            current_level.push(last);
        }

        current_level = current_level
            .chunks(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
    }

    current_level[0]
}
