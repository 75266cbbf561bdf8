//! Game configuration.
//!
//! Klondike has little to configure, but what it has is fixed for the whole
//! game and saved with it:
//! - how many cards a deal moves from stock to waste
//! - in which order the waste becomes the new stock when stock runs out
//! - how many moves can be undone

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Order in which the waste becomes the stock on recycle.
///
/// Stock is drawn from the front and waste grows at the back, so `AsIs`
/// makes the earliest-drawn waste card the next one dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecycleOrder {
    /// Stock takes the waste sequence unchanged.
    #[default]
    AsIs,
    /// Stock takes the waste sequence reversed; the newest waste card is
    /// dealt first.
    Reversed,
}

/// Configuration for a game of Klondike.
///
/// ## Example
///
/// ```
/// use klondike_engine::core::{KlondikeConfig, RecycleOrder};
///
/// let config = KlondikeConfig::default()
///     .with_draw_step(1)
///     .with_recycle(RecycleOrder::Reversed)
///     .with_undo_limit(None);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlondikeConfig {
    /// Cards moved from stock to waste per deal. Must be positive.
    pub draw_step: usize,

    /// Recycle order when dealing from an empty stock.
    #[serde(default)]
    pub recycle: RecycleOrder,

    /// Maximum number of undo snapshots kept. `None` = unbounded.
    #[serde(default = "default_undo_limit")]
    pub undo_limit: Option<usize>,
}

fn default_undo_limit() -> Option<usize> {
    Some(KlondikeConfig::DEFAULT_UNDO_LIMIT)
}

impl KlondikeConfig {
    /// Draw step used by the classic "draw three" game.
    pub const DEFAULT_DRAW_STEP: usize = 3;

    /// Undo depth used unless configured otherwise.
    pub const DEFAULT_UNDO_LIMIT: usize = 256;

    /// Create a config with the given draw step and defaults otherwise.
    #[must_use]
    pub fn new(draw_step: usize) -> Self {
        Self {
            draw_step,
            ..Self::default()
        }
    }

    /// Set the draw step (builder pattern).
    #[must_use]
    pub fn with_draw_step(mut self, draw_step: usize) -> Self {
        self.draw_step = draw_step;
        self
    }

    /// Set the recycle order (builder pattern).
    #[must_use]
    pub fn with_recycle(mut self, recycle: RecycleOrder) -> Self {
        self.recycle = recycle;
        self
    }

    /// Set the undo depth (builder pattern).
    #[must_use]
    pub fn with_undo_limit(mut self, undo_limit: Option<usize>) -> Self {
        self.undo_limit = undo_limit;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.draw_step == 0 {
            return Err(SetupError::InvalidDrawStep(self.draw_step));
        }
        Ok(())
    }
}

impl Default for KlondikeConfig {
    fn default() -> Self {
        Self {
            draw_step: Self::DEFAULT_DRAW_STEP,
            recycle: RecycleOrder::default(),
            undo_limit: default_undo_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KlondikeConfig::default();
        assert_eq!(config.draw_step, 3);
        assert_eq!(config.recycle, RecycleOrder::AsIs);
        assert_eq!(config.undo_limit, Some(256));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_draw_step_rejected() {
        let config = KlondikeConfig::new(0);
        assert_eq!(config.validate(), Err(SetupError::InvalidDrawStep(0)));
    }

    #[test]
    fn test_builder() {
        let config = KlondikeConfig::new(1)
            .with_recycle(RecycleOrder::Reversed)
            .with_undo_limit(Some(3));

        assert_eq!(config.draw_step, 1);
        assert_eq!(config.recycle, RecycleOrder::Reversed);
        assert_eq!(config.undo_limit, Some(3));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: KlondikeConfig = serde_json::from_str(r#"{"draw_step":1}"#).unwrap();
        assert_eq!(config.recycle, RecycleOrder::AsIs);
        assert_eq!(config.undo_limit, Some(KlondikeConfig::DEFAULT_UNDO_LIMIT));
    }

    #[test]
    fn test_config_serialization() {
        let config = KlondikeConfig::new(1).with_recycle(RecycleOrder::Reversed);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: KlondikeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
