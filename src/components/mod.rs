//! Widget state owned by consumers of game events.
//!
//! - [`hud`] – health bar, score board, purchase toast and loading screen
pub mod hud;
