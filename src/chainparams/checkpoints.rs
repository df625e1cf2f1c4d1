//! Hard-coded checkpoints and sync-progress statistics

use serde::Serialize;
use std::collections::BTreeMap;

use crate::crypto::Hash256;

const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

/// Known (height, hash) anchors plus chain statistics at the last anchor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointSet {
    pub checkpoints: BTreeMap<u32, Hash256>,
    /// Timestamp of the last checkpoint block, epoch seconds
    pub last_checkpoint_time: i64,
    /// Total transactions up to the last checkpoint
    pub transactions_at_checkpoint: u64,
    /// Expected transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointSet {
    /// Build from literal entries.
    ///
    /// Returns the offending height if the entries are not strictly ascending.
    pub fn new(
        entries: &[(u32, Hash256)],
        last_checkpoint_time: i64,
        transactions_at_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Result<Self, u32> {
        if let Some(pair) = entries.windows(2).find(|pair| pair[1].0 <= pair[0].0) {
            return Err(pair[1].0);
        }

        Ok(Self {
            checkpoints: entries.iter().copied().collect(),
            last_checkpoint_time,
            transactions_at_checkpoint,
            transactions_per_day,
        })
    }

    pub fn get(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    pub fn last_height(&self) -> Option<u32> {
        self.checkpoints.keys().next_back().copied()
    }

    /// A block at a checkpointed height must carry the checkpoint hash
    pub fn check_block(&self, height: u32, hash: &Hash256) -> bool {
        self.get(height).map_or(true, |expected| expected == hash)
    }

    /// Estimated total transactions by `time`, extrapolated from the anchor
    pub fn estimated_transactions_at(&self, time: i64) -> f64 {
        let elapsed_days = time.saturating_sub(self.last_checkpoint_time).max(0) as f64 / SECONDS_PER_DAY;
        self.transactions_at_checkpoint as f64 + elapsed_days * self.transactions_per_day
    }
}
