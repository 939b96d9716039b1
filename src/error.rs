//! Error types shared by the dispatcher, the game session and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::events::EventName;
use crate::resources::gamestate::GameStates;

/// Error returned by a fallible listener.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single listener failure recorded while delivering an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    /// Position of the failing registration in the delivery snapshot.
    pub index: usize,
    pub error: ListenerError,
}

/// Failure surfaced by [`emit`](crate::resources::dispatcher::EventDispatcher::emit).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Fail-fast policy: delivery stopped at the first failing listener.
    #[error("listener #{index} for '{event}' failed: {source}")]
    ListenerFailed {
        event: EventName,
        index: usize,
        #[source]
        source: ListenerError,
    },
    /// Isolate policy: every listener ran, some of them failed.
    #[error("{} of the listeners for '{event}' failed ({delivered} delivered)", .failures.len())]
    ListenersFailed {
        event: EventName,
        delivered: usize,
        failures: Vec<ListenerFailure>,
    },
}

impl DispatchError {
    pub fn event(&self) -> EventName {
        match self {
            DispatchError::ListenerFailed { event, .. } => *event,
            DispatchError::ListenersFailed { event, .. } => *event,
        }
    }
}

/// Errors raised by [`GameSession`](crate::game::GameSession) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },
    /// Combat actions are only accepted while [`GameStates::Playing`].
    #[error("not in play (current state: {state})")]
    NotPlaying { state: GameStates },
    /// The wallet was debited but announcing the purchase failed.
    #[error("purchase of '{item}' went through but was not announced: {source}")]
    PurchaseUnannounced {
        item: String,
        #[source]
        source: DispatchError,
    },
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Errors raised while loading or saving the dispatcher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file {path:?}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("failed to save config file {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value '{value}' for [{section}] {key}")]
    InvalidValue {
        section: &'static str,
        key: &'static str,
        value: String,
    },
}
