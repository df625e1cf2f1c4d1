//! Genesis block generation
//!
//! Every network's first block is assembled here from a handful of literals.
//! The result must reproduce the hard-coded genesis hash bit for bit.

use crate::consensus::{opcodes::OP_CHECKSIG, Block, BlockHeader, Script, Transaction};
use crate::crypto::Hash256;
use crate::Amount;

/// Headline embedded in the genesis coinbase
pub const GENESIS_MESSAGE: &str =
    "New York Times 31/01/2018 President issues appeal for unity in state of union";

/// Public key the genesis reward is paid to
pub const GENESIS_OUTPUT_PUBKEY: &str = "042ca677fc77f936ac22a4bc7084ec941afc15eeb8a1af3dcf6fedc09b0a8462870c08c0a9c7112516f6393fc5b08d6527a2a6f80a87d1d2373c9c5ad5512515f7";

/// Legacy height-like marker at the start of the genesis scriptSig
const GENESIS_SCRIPT_SIG_MARKER: i64 = 486604799;

/// Create a genesis block
///
/// Deterministic: identical inputs always produce an identical block.
pub fn create_genesis_block(
    message: &[u8],
    output_script: &Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    let script_sig = Script::new()
        .push_int(GENESIS_SCRIPT_SIG_MARKER)
        .push_num(4)
        .push_slice(message);

    let coinbase = Transaction::coinbase(script_sig, reward, output_script.clone());

    // Merkle root of a single transaction is its txid
    let header = BlockHeader {
        version,
        prev_hash: Hash256::zero(),
        merkle_root: coinbase.txid(),
        time,
        bits,
        nonce,
    };

    Block::new(header, vec![coinbase])
}

/// Pay-to-pubkey output script for a raw public key
pub fn pay_to_pubkey_script(pubkey: &[u8]) -> Script {
    Script::new().push_slice(pubkey).push_opcode(OP_CHECKSIG)
}

/// Create a genesis block with the chain's standard message and output key
pub fn create_default_genesis_block(
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Result<Block, hex::FromHexError> {
    let output_script = pay_to_pubkey_script(&hex::decode(GENESIS_OUTPUT_PUBKEY)?);
    Ok(create_genesis_block(
        GENESIS_MESSAGE.as_bytes(),
        &output_script,
        time,
        nonce,
        bits,
        version,
        reward,
    ))
}
