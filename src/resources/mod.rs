//! Long-lived state shared by producers and consumers.
//!
//! Overview
//! - `dispatcher` – the event registry and delivery loop
//! - `dispatcherconfig` – INI-backed settings (failure policy, log level)
//! - `gamestate` – high-level game state values
pub mod dispatcher;
pub mod dispatcherconfig;
pub mod gamestate;
