//! High-level game state.
//!
//! The authoritative current value lives in
//! [`GameSession`](crate::game::GameSession); every change is announced
//! through a [`GameStateChanged`](crate::events::gamestate::GameStateChanged)
//! event so widgets never read the session directly.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Discrete high-level states the game can be in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GameStates {
    #[default]
    Loading,
    Lobby,
    Playing,
    GameOver,
}

impl GameStates {
    /// Whether combat actions (taking or dealing hits) are accepted.
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStates::Playing)
    }
}
