//! HUD widget state.
//!
//! Each widget is plain data updated by the listeners in
//! [`crate::systems::hud`]. Widgets never reference the game session; they
//! only learn about it through events.
//!
//! Text output follows a format string with a single `{}` placeholder, e.g.
//! `"HP: {}"`.

use std::collections::VecDeque;

/// Player health bar with hit flash and healing indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthBar {
    pub health: u32,
    pub max_health: u32,
    /// Set by a hit, cleared by [`HealthBar::settle`].
    pub flashing: bool,
    /// Amount shown by the healing indicator, cleared by [`HealthBar::settle`].
    pub healing: Option<u32>,
    pub format: String,
}

impl HealthBar {
    pub fn new(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            flashing: false,
            healing: None,
            format: "HP: {}".to_string(),
        }
    }

    /// Clear transient indicators once they have been shown.
    pub fn settle(&mut self) {
        self.flashing = false;
        self.healing = None;
    }

    pub fn text(&self) -> String {
        let value = format!("{}/{}", self.health, self.max_health);
        let mut text = self.format.replace("{}", &value);
        if let Some(amount) = self.healing {
            text.push_str(&format!(" (+{})", amount));
        }
        if self.flashing {
            text.push_str(" !");
        }
        text
    }
}

/// Running score display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u64,
    /// Number of score updates received.
    pub updates: u32,
    pub format: String,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self {
            score: 0,
            updates: 0,
            format: "Score: {}".to_string(),
        }
    }
}

impl ScoreBoard {
    pub fn text(&self) -> String {
        self.format.replace("{}", &self.score.to_string())
    }
}

/// Queue of purchase notifications, oldest first.
///
/// Holds at most `capacity` messages; the oldest is dropped on overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseToast {
    pub messages: VecDeque<String>,
    pub capacity: usize,
}

impl PurchaseToast {
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: String) {
        if self.capacity == 0 {
            return;
        }
        while self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    /// Take the oldest pending notification.
    pub fn pop(&mut self) -> Option<String> {
        self.messages.pop_front()
    }
}

/// Loading screen overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingScreen {
    pub percent: u8,
    pub visible: bool,
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self {
            percent: 0,
            visible: true,
        }
    }
}

impl LoadingScreen {
    pub fn text(&self) -> String {
        format!("Loading... {}%", self.percent)
    }
}
