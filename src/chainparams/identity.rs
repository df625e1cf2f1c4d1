//! Network identity values used on the wire

use serde::Serialize;

/// Values that identify a network to its peers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkIdentity {
    /// Message-start marker prefixed to every P2P message
    pub message_start: [u8; 4],
    pub default_port: u16,
    /// Maximum tip age in seconds before the node considers itself out of sync
    pub max_tip_age: i64,
    /// Height after which block pruning may discard spent data
    pub prune_after_height: u64,
    /// Legacy alert key, unused by current protocol logic
    pub alert_pubkey: Option<Vec<u8>>,
}

impl NetworkIdentity {
    /// Whether `bytes` begins with this network's message-start marker
    pub fn matches_message_start(&self, bytes: &[u8]) -> bool {
        bytes.starts_with(&self.message_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_start_prefix() {
        let identity = NetworkIdentity {
            message_start: [0x4c, 0x61, 0xc5, 0x11],
            default_port: 23100,
            max_tip_age: 0,
            prune_after_height: 0,
            alert_pubkey: None,
        };
        assert!(identity.matches_message_start(&[0x4c, 0x61, 0xc5, 0x11, 0x76, 0x65]));
        assert!(!identity.matches_message_start(&[0x4f, 0xd1, 0x6d, 0xee]));
        assert!(!identity.matches_message_start(&[0x4c, 0x61]));
    }
}
