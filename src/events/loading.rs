//! Loading progress event consumed by the loading screen.

use serde::Serialize;

use super::{EventName, GameEvent};

/// Progress of the asset loading phase, in percent (0..=100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadingProgress {
    pub percent: u8,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }
}

impl super::sealed::Sealed for LoadingProgress {}

impl GameEvent for LoadingProgress {
    const NAME: EventName = EventName::LoadingProgress;
}
