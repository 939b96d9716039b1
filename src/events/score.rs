//! Score update event.
//!
//! Emitted by [`GameSession::add_score`](crate::game::GameSession::add_score)
//! after the running score changes. The score board widget renders from it.

use serde::Serialize;

use super::{EventName, GameEvent};

/// The player's score changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreChanged {
    /// Score after the change.
    pub score: u64,
    /// Points added by this change.
    pub delta: u64,
}

impl super::sealed::Sealed for ScoreChanged {}

impl GameEvent for ScoreChanged {
    const NAME: EventName = EventName::ScoreChanged;
}
