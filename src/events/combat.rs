//! Combat events: hits on the player, hits on enemies, and healing.
//!
//! [`PlayerHit`] and [`EnemyHit`] carry the same kind of data but travel on
//! separate channels; a listener registered for one never sees the other.

use serde::Serialize;

use super::{EventName, GameEvent};

/// The player took damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerHit {
    pub damage: u32,
    /// Health left after the hit.
    pub health: u32,
}

impl super::sealed::Sealed for PlayerHit {}

impl GameEvent for PlayerHit {
    const NAME: EventName = EventName::PlayerHit;
}

/// An enemy medabot took damage from the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnemyHit {
    pub enemy: String,
    pub damage: u32,
}

impl super::sealed::Sealed for EnemyHit {}

impl GameEvent for EnemyHit {
    const NAME: EventName = EventName::EnemyHit;
}

/// Health was restored. Drives the healing indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealingApplied {
    /// Amount actually restored, after capping at max health.
    pub amount: u32,
    pub health: u32,
}

impl super::sealed::Sealed for HealingApplied {}

impl GameEvent for HealingApplied {
    const NAME: EventName = EventName::HealingApplied;
}
