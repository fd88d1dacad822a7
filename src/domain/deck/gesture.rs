use serde::{Deserialize, Serialize};

/// Horizontal drag distance a card must exceed to commit a decision
pub const SWIPE_THRESHOLD: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDecision {
    Like,
    Pass,
}

impl SwipeDecision {
    /// Resolves a finished drag. Returns `None` when the card should snap back.
    pub fn from_drag(dx: f64) -> Option<Self> {
        if dx > SWIPE_THRESHOLD {
            Some(Self::Like)
        } else if dx < -SWIPE_THRESHOLD {
            Some(Self::Pass)
        } else {
            None
        }
    }
}
