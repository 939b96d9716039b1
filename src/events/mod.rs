//! Event names and payload types exchanged between game code and widgets.
//!
//! Every notification channel is identified by an [`EventName`] from a closed
//! set. Each name has exactly one payload type implementing [`GameEvent`], so
//! the compiler rejects a callback or payload of the wrong shape for a given
//! channel.
//!
//! Submodules:
//! - [`combat`] – damage dealt to the player or to enemies, and healing
//! - [`gamestate`] – high-level game flow transitions
//! - [`loading`] – asset loading progress for the loading screen
//! - [`score`] – score updates
//! - [`shop`] – completed purchases for the notification toast
//!
//! See [`crate::resources::dispatcher::EventDispatcher`] for subscription and
//! delivery semantics.
use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

pub mod combat;
pub mod gamestate;
pub mod loading;
pub mod score;
pub mod shop;

/// Closed set of notification channels.
///
/// Names render and parse in kebab-case (`"score-changed"`, `"player-hit"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EventName {
    ScoreChanged,
    PlayerHit,
    EnemyHit,
    HealingApplied,
    PurchaseCompleted,
    LoadingProgress,
    GameStateChanged,
}

mod sealed {
    pub trait Sealed {}
}

/// Payload type bound to a single [`EventName`].
///
/// Implementors are plain data; listeners receive them by shared reference.
/// The trait is sealed: only the payloads in this module implement it, so
/// every name has exactly one payload type.
///
/// ```compile_fail
/// use medabot_events::events::{EventName, GameEvent};
///
/// #[derive(Debug, serde::Serialize)]
/// struct Lookalike;
///
/// impl GameEvent for Lookalike {
///     const NAME: EventName = EventName::ScoreChanged;
/// }
/// ```
pub trait GameEvent: sealed::Sealed + Debug + Serialize + 'static {
    /// Channel this payload is delivered on.
    const NAME: EventName;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_event_names_are_kebab_case() {
        assert_eq!(EventName::ScoreChanged.to_string(), "score-changed");
        assert_eq!(EventName::PlayerHit.to_string(), "player-hit");
        assert_eq!(EventName::GameStateChanged.to_string(), "game-state-changed");
    }

    #[test]
    fn test_event_names_parse_back() {
        for name in EventName::iter() {
            let text: &'static str = name.into();
            assert_eq!(EventName::from_str(text).unwrap(), name);
        }
        assert!(EventName::from_str("unknown-event").is_err());
    }

    #[test]
    fn test_event_names_serialize_like_display() {
        let json = serde_json::to_string(&EventName::EnemyHit).unwrap();
        assert_eq!(json, "\"enemy-hit\"");
    }
}
