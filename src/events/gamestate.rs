//! Game state transition event.
//!
//! [`GameSession::transition`](crate::game::GameSession::transition) updates
//! the authoritative [`GameStates`] value and then emits a
//! [`GameStateChanged`] carrying both ends of the transition. Widgets use it
//! to show or hide themselves (the loading screen closes on leaving
//! [`GameStates::Loading`]) without holding a reference to the session.
//!
//! Transitions to the current state are not emitted.

use serde::Serialize;

use super::{EventName, GameEvent};
use crate::resources::gamestate::GameStates;

/// The high-level game state moved from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameStateChanged {
    pub from: GameStates,
    pub to: GameStates,
}

impl super::sealed::Sealed for GameStateChanged {}

impl GameEvent for GameStateChanged {
    const NAME: EventName = EventName::GameStateChanged;
}
