//! Published secp256k1 public keys (alert, spork, masternode payments)

use k256::PublicKey;

/// Decode a hex public key literal and check it is a valid SEC1 secp256k1 point
pub fn parse_public_key(hex_key: &str) -> Option<Vec<u8>> {
    let bytes = hex::decode(hex_key).ok()?;
    PublicKey::from_sec1_bytes(&bytes).ok()?;
    Some(bytes)
}
