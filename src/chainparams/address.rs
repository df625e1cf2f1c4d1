//! Base58 address prefixes
//!
//! Each network uses its own prefix bytes so that addresses and keys are
//! visibly distinct across networks.

use serde::Serialize;
use std::fmt;
use std::ops::Index;

use crate::error::{ChainParamsError, Result};

/// Kinds of base58-encoded data that carry a network prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

impl AddressKind {
    pub const ALL: [AddressKind; 6] = [
        AddressKind::PubkeyAddress,
        AddressKind::ScriptAddress,
        AddressKind::SecretKey,
        AddressKind::ExtPublicKey,
        AddressKind::ExtSecretKey,
        AddressKind::ExtCoinType,
    ];
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressKind::PubkeyAddress => "pubkey address",
            AddressKind::ScriptAddress => "script address",
            AddressKind::SecretKey => "secret key",
            AddressKind::ExtPublicKey => "extended public key",
            AddressKind::ExtSecretKey => "extended secret key",
            AddressKind::ExtCoinType => "extended coin type",
        };
        f.write_str(name)
    }
}

/// Prefix bytes for every [`AddressKind`] on one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressPrefixTable {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
    /// BIP44 coin type, hardened
    pub ext_coin_type: Vec<u8>,
}

impl AddressPrefixTable {
    pub fn prefix(&self, kind: AddressKind) -> &[u8] {
        match kind {
            AddressKind::PubkeyAddress => &self.pubkey_address,
            AddressKind::ScriptAddress => &self.script_address,
            AddressKind::SecretKey => &self.secret_key,
            AddressKind::ExtPublicKey => &self.ext_public_key,
            AddressKind::ExtSecretKey => &self.ext_secret_key,
            AddressKind::ExtCoinType => &self.ext_coin_type,
        }
    }

    /// First pair of kinds sharing identical prefix bytes, if any
    pub fn find_collision(&self) -> Option<(AddressKind, AddressKind)> {
        AddressKind::ALL.iter().enumerate().find_map(|(i, a)| {
            AddressKind::ALL[i + 1..]
                .iter()
                .find(|b| self.prefix(*a) == self.prefix(**b))
                .map(|b| (*a, *b))
        })
    }

    pub fn has_empty_prefix(&self) -> bool {
        AddressKind::ALL.iter().any(|kind| self.prefix(*kind).is_empty())
    }

    /// Base58check-encode `payload` behind the prefix for `kind`
    pub fn encode(&self, kind: AddressKind, payload: &[u8]) -> String {
        let prefix = self.prefix(kind);
        let mut data = Vec::with_capacity(prefix.len() + payload.len());
        data.extend_from_slice(prefix);
        data.extend_from_slice(payload);
        bs58::encode(data).with_check().into_string()
    }

    /// Decode a base58check string and strip the prefix for `kind`
    pub fn decode(&self, kind: AddressKind, encoded: &str) -> Result<Vec<u8>> {
        let data = bs58::decode(encoded)
            .with_check(None)
            .into_vec()
            .map_err(|e| ChainParamsError::InvalidAddress(e.to_string()))?;

        data.strip_prefix(self.prefix(kind))
            .map(<[u8]>::to_vec)
            .ok_or_else(|| ChainParamsError::InvalidAddress(format!("not a {} on this network", kind)))
    }
}

impl Index<AddressKind> for AddressPrefixTable {
    type Output = [u8];

    fn index(&self, kind: AddressKind) -> &[u8] {
        self.prefix(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AddressPrefixTable {
        AddressPrefixTable {
            pubkey_address: vec![23],
            script_address: vec![63],
            secret_key: vec![79],
            ext_public_key: vec![0x04, 0x88, 0xb2, 0x1e],
            ext_secret_key: vec![0x04, 0x88, 0xad, 0xe4],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x05],
        }
    }

    #[test]
    fn test_index_by_kind() {
        let table = table();
        assert_eq!(table[AddressKind::PubkeyAddress], [23]);
        assert_eq!(table[AddressKind::ExtCoinType], [0x80, 0x00, 0x00, 0x05]);
    }

    #[test]
    fn test_encode_known_address() {
        let address = table().encode(AddressKind::PubkeyAddress, &[0u8; 20]);
        assert_eq!(address, "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM");
    }

    #[test]
    fn test_decode_checks_prefix() {
        let table = table();
        let address = table.encode(AddressKind::ScriptAddress, &[7u8; 20]);

        assert_eq!(table.decode(AddressKind::ScriptAddress, &address).unwrap(), vec![7u8; 20]);
        assert!(table.decode(AddressKind::PubkeyAddress, &address).is_err());
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let table = table();
        let mut address = table.encode(AddressKind::PubkeyAddress, &[0u8; 20]);
        address.pop();
        address.push('1');
        assert!(table.decode(AddressKind::PubkeyAddress, &address).is_err());
    }

    #[test]
    fn test_collision_detection() {
        let mut table = table();
        assert_eq!(table.find_collision(), None);

        table.secret_key = vec![23];
        assert_eq!(
            table.find_collision(),
            Some((AddressKind::PubkeyAddress, AddressKind::SecretKey))
        );
    }
}
