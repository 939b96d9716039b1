//! Medabot event dispatch library.
//!
//! A typed, synchronous event dispatcher that decouples game-state producers
//! from UI consumers, together with the game's event catalogue, a session
//! that produces events and HUD widgets that consume them.
//!
//! - [`events`] – event names and payload types
//! - [`resources`] – the dispatcher, its configuration and game state values
//! - [`game`] – the producing game session
//! - [`components`] / [`systems`] – HUD widget state and the listeners that
//!   update it
//! - [`error`] – error types

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
