//! Serializable game snapshots.
//!
//! A snapshot is everything needed to resume a game: the config, the seed
//! it was dealt from (if any), and the board. Observers and undo history
//! belong to the running engine and are not part of it.

use serde::{Deserialize, Serialize};

use crate::core::KlondikeConfig;
use crate::error::SetupError;
use crate::rules::Board;

/// A saved game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: KlondikeConfig,
    /// Seed of the shuffle, when the game was dealt from one.
    pub seed: Option<u64>,
    pub board: Board,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SetupError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode. The result is not validated; load it through
    /// [`crate::rules::Solitaire::from_snapshot`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SetupError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check the config and every board invariant.
    pub fn validate(&self) -> Result<(), SetupError> {
        self.config.validate()?;
        self.board.check_invariants()
    }
}
