//! Consumers that react to game events.
//!
//! Submodules overview
//! - [`hud`] – bind HUD widgets to score, combat, shop, loading and state events
pub mod hud;
