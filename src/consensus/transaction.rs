//! Transaction structure and wire serialization

use serde::Serialize;

use super::Script;
use crate::crypto::{sha256d, Hash256};
use crate::Amount;

/// Reference to a previous transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs
    pub const fn null() -> Self {
        Self {
            txid: Hash256::zero(),
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

/// A transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxOut {
    /// Amount in base units
    pub value: Amount,
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Create a coinbase transaction paying `value` to `script_pubkey`
    pub fn coinbase(script_sig: Script, value: Amount, script_pubkey: Script) -> Self {
        Self {
            version: 1,
            inputs: vec![TxIn {
                prevout: OutPoint::null(),
                script_sig,
                sequence: u32::MAX,
            }],
            outputs: vec![TxOut {
                value,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// Transaction id (SHA-256d of the serialized transaction)
    pub fn txid(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }

    /// Serialize in network format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(input.prevout.txid.as_bytes());
            bytes.extend_from_slice(&input.prevout.vout.to_le_bytes());
            write_var_bytes(&mut bytes, input.script_sig.as_bytes());
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_var_bytes(&mut bytes, output.script_pubkey.as_bytes());
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());

        bytes
    }

    pub fn total_output_value(&self) -> Amount {
        self.outputs.iter().map(|o| o.value).sum()
    }
}

/// Variable-length integer prefix
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn write_var_bytes(out: &mut Vec<u8>, data: &[u8]) {
    write_compact_size(out, data.len() as u64);
    out.extend_from_slice(data);
}
