//! Game session: the producer side of the event flow.
//!
//! A [`GameSession`] owns the authoritative game counters (health, score,
//! wallet) and the high-level [`GameStates`] value. Every mutation is
//! announced on the injected [`EventDispatcher`]; the session never knows
//! who is listening.
//!
//! The dispatcher is passed in as `Rc<EventDispatcher>` by whoever composes
//! the session with its consumers (see `main.rs`).

use std::rc::Rc;

use log::{debug, info};

use crate::error::SessionError;
use crate::events::combat::{EnemyHit, HealingApplied, PlayerHit};
use crate::events::gamestate::GameStateChanged;
use crate::events::loading::LoadingProgress;
use crate::events::score::ScoreChanged;
use crate::events::shop::PurchaseCompleted;
use crate::resources::dispatcher::EventDispatcher;
use crate::resources::gamestate::GameStates;

pub const DEFAULT_MAX_HEALTH: u32 = 100;
pub const DEFAULT_CREDITS: u64 = 500;

/// Authoritative game state that emits an event for every change.
#[derive(Debug)]
pub struct GameSession {
    dispatcher: Rc<EventDispatcher>,
    state: GameStates,
    health: u32,
    max_health: u32,
    score: u64,
    credits: u64,
}

impl GameSession {
    /// Create a session in [`GameStates::Loading`] with full health.
    pub fn new(dispatcher: Rc<EventDispatcher>) -> Self {
        Self::with_stats(dispatcher, DEFAULT_MAX_HEALTH, DEFAULT_CREDITS)
    }

    pub fn with_stats(dispatcher: Rc<EventDispatcher>, max_health: u32, credits: u64) -> Self {
        Self {
            dispatcher,
            state: GameStates::default(),
            health: max_health,
            max_health,
            score: 0,
            credits,
        }
    }

    pub fn dispatcher(&self) -> &Rc<EventDispatcher> {
        &self.dispatcher
    }

    pub fn state(&self) -> GameStates {
        self.state
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn credits(&self) -> u64 {
        self.credits
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Move to `to` and announce it. Transitions to the current state are
    /// ignored and emit nothing.
    pub fn transition(&mut self, to: GameStates) -> Result<(), SessionError> {
        let from = self.state;
        if from == to {
            debug!("Ignoring transition to current state {}", to);
            return Ok(());
        }
        info!("Transitioning from {} to {}", from, to);
        self.state = to;
        self.dispatcher.emit(&GameStateChanged { from, to })?;
        Ok(())
    }

    /// Report loading progress; values above 100 are clamped.
    pub fn report_loading(&mut self, percent: u8) -> Result<(), SessionError> {
        let percent = percent.min(100);
        self.dispatcher.emit(&LoadingProgress { percent })?;
        Ok(())
    }

    pub fn add_score(&mut self, points: u64) -> Result<(), SessionError> {
        self.score = self.score.saturating_add(points);
        self.dispatcher.emit(&ScoreChanged {
            score: self.score,
            delta: points,
        })?;
        Ok(())
    }

    fn ensure_playing(&self) -> Result<(), SessionError> {
        if self.state.is_playing() {
            Ok(())
        } else {
            Err(SessionError::NotPlaying { state: self.state })
        }
    }

    /// Apply damage to the player. Reaching zero health ends the game.
    ///
    /// Only accepted while playing. The transition to
    /// [`GameStates::GameOver`] happens even when announcing the hit fails;
    /// the first error is returned.
    pub fn take_damage(&mut self, damage: u32) -> Result<(), SessionError> {
        self.ensure_playing()?;
        self.health = self.health.saturating_sub(damage);
        let announced = self.dispatcher.emit(&PlayerHit {
            damage,
            health: self.health,
        });
        let transitioned = if self.is_defeated() {
            self.transition(GameStates::GameOver)
        } else {
            Ok(())
        };
        announced?;
        transitioned
    }

    /// Only accepted while playing.
    pub fn hit_enemy(&mut self, enemy: &str, damage: u32) -> Result<(), SessionError> {
        self.ensure_playing()?;
        self.dispatcher.emit(&EnemyHit {
            enemy: enemy.to_string(),
            damage,
        })?;
        Ok(())
    }

    /// Restore health, capped at max health. Emits the amount actually
    /// restored; nothing is emitted when already at full health.
    pub fn heal(&mut self, amount: u32) -> Result<u32, SessionError> {
        let restored = amount.min(self.max_health - self.health);
        if restored == 0 {
            return Ok(0);
        }
        self.health += restored;
        self.dispatcher.emit(&HealingApplied {
            amount: restored,
            health: self.health,
        })?;
        Ok(restored)
    }

    /// Buy `item` for `price` credits.
    ///
    /// The debit is committed before the purchase is announced. If the
    /// announcement fails the credits stay spent and
    /// [`SessionError::PurchaseUnannounced`] is returned.
    pub fn purchase(&mut self, item: &str, price: u64) -> Result<(), SessionError> {
        if price > self.credits {
            return Err(SessionError::InsufficientFunds {
                needed: price,
                available: self.credits,
            });
        }
        self.credits -= price;
        info!("Purchased {} for {} credits", item, price);
        self.dispatcher
            .emit(&PurchaseCompleted {
                item: item.to_string(),
                price,
                balance: self.credits,
            })
            .map_err(|source| SessionError::PurchaseUnannounced {
                item: item.to_string(),
                source,
            })?;
        Ok(())
    }
}
