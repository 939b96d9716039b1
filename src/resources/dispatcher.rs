//! Typed, synchronous event dispatcher.
//!
//! The [`EventDispatcher`] keeps a registry from [`EventName`] to an ordered
//! list of registrations. Producers call [`EventDispatcher::emit`] with a
//! payload implementing [`GameEvent`]; every listener registered for that
//! payload's channel is invoked in registration order before `emit` returns.
//!
//! # Semantics
//!
//! - Registrations are never deduplicated. The same [`Listener`] subscribed
//!   twice is invoked twice per emit.
//! - [`EventDispatcher::off`] and [`EventDispatcher::unsubscribe`] remove at
//!   most one registration per call (the earliest match). Unknown channels or
//!   listeners are a silent no-op.
//! - `emit` snapshots the subscriber list before delivering. Listeners added
//!   during delivery are not called in that round, listeners removed during
//!   delivery still are. The registry is never borrowed while a listener
//!   runs, so listeners may subscribe, unsubscribe, emit or clear.
//! - An emptied subscriber list stays keyed in the registry until
//!   [`EventDispatcher::clear`].
//!
//! # Failures
//!
//! Listeners registered with [`EventDispatcher::try_on`] or
//! [`EventDispatcher::subscribe`] may return a [`ListenerError`]. What `emit`
//! does with it depends on the [`FailurePolicy`]:
//!
//! - [`FailurePolicy::FailFast`] (default) stops at the first failure and
//!   returns [`DispatchError::ListenerFailed`]. Later listeners are not called.
//! - [`FailurePolicy::Isolate`] logs each failure, keeps delivering, and
//!   returns [`DispatchError::ListenersFailed`] once the round is over.
//!
//! Panics are never caught and unwind through `emit` under both policies.
//!
//! # Threading
//!
//! The dispatcher is single-threaded (`!Send`, `!Sync`). Share it with
//! `Rc<EventDispatcher>` between the component that composes producers and
//! consumers.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use medabot_events::events::score::ScoreChanged;
//! use medabot_events::resources::dispatcher::EventDispatcher;
//!
//! let dispatcher = EventDispatcher::new();
//! let last = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&last);
//! let sub = dispatcher.on(move |e: &ScoreChanged| seen.set(e.score));
//!
//! assert_eq!(dispatcher.emit(&ScoreChanged { score: 10, delta: 10 }), Ok(1));
//! assert_eq!(last.get(), 10);
//!
//! assert!(dispatcher.off(sub));
//! assert_eq!(dispatcher.emit(&ScoreChanged { score: 20, delta: 10 }), Ok(0));
//! ```

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::{debug, trace, warn};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use strum::{Display, EnumString};

use crate::error::{DispatchError, ListenerError, ListenerFailure};
use crate::events::{EventName, GameEvent};

/// Shared, fallible listener handle.
///
/// Keep a clone of the handle to remove the registration by identity with
/// [`EventDispatcher::unsubscribe`].
pub type Listener<E> = Rc<dyn Fn(&E) -> Result<(), ListenerError>>;

/// Wrap a fallible closure into a [`Listener`] handle.
pub fn listener<E, F>(callback: F) -> Listener<E>
where
    E: GameEvent,
    F: Fn(&E) -> Result<(), ListenerError> + 'static,
{
    Rc::new(callback)
}

/// What [`EventDispatcher::emit`] does when a listener returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum FailurePolicy {
    /// Abort delivery at the first failing listener.
    #[default]
    #[strum(to_string = "fail_fast", serialize = "fail-fast")]
    FailFast,
    /// Deliver to every listener and report all failures afterwards.
    #[strum(to_string = "isolate")]
    Isolate,
}

/// Token naming exactly one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    event: EventName,
    id: u64,
}

impl Subscription {
    /// Channel the registration belongs to.
    pub fn event(&self) -> EventName {
        self.event
    }
}

struct Registration<E> {
    id: u64,
    once: bool,
    listener: Listener<E>,
}

type SubscriberList<E> = SmallVec<[Registration<E>; 4]>;

/// Type-erased view of one channel's `SubscriberList<E>`.
trait Channel {
    fn len(&self) -> usize;
    fn remove_id(&mut self, id: u64) -> bool;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<E: GameEvent> Channel for SubscriberList<E> {
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn remove_id(&mut self, id: u64) -> bool {
        match self.iter().position(|registration| registration.id == id) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// `GameEvent` is sealed and every `EventName` has exactly one payload type,
// so a channel keyed by `E::NAME` always holds a `SubscriberList<E>`.
fn typed<E: GameEvent>(channel: &dyn Channel) -> &SubscriberList<E> {
    match channel.as_any().downcast_ref::<SubscriberList<E>>() {
        Some(list) => list,
        None => unreachable!("channel '{}' holds another payload type", E::NAME),
    }
}

fn typed_mut<E: GameEvent>(channel: &mut dyn Channel) -> &mut SubscriberList<E> {
    match channel.as_any_mut().downcast_mut::<SubscriberList<E>>() {
        Some(list) => list,
        None => unreachable!("channel '{}' holds another payload type", E::NAME),
    }
}

/// Registry of listeners keyed by [`EventName`].
pub struct EventDispatcher {
    registry: RefCell<FxHashMap<EventName, Box<dyn Channel>>>,
    next_id: Cell<u64>,
    policy: Cell<FailurePolicy>,
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDispatcher {
    /// Create an empty dispatcher with the [`FailurePolicy::FailFast`] policy.
    pub fn new() -> Self {
        Self::with_policy(FailurePolicy::default())
    }

    /// Create an empty dispatcher with the given failure policy.
    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self {
            registry: RefCell::new(FxHashMap::default()),
            next_id: Cell::new(1),
            policy: Cell::new(policy),
        }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy.get()
    }

    /// Change the failure policy. Takes effect on the next `emit`.
    pub fn set_policy(&self, policy: FailurePolicy) {
        debug!("Dispatcher failure policy set to {}", policy);
        self.policy.set(policy);
    }

    /// Subscribe an infallible callback to `E`'s channel.
    pub fn on<E, F>(&self, callback: F) -> Subscription
    where
        E: GameEvent,
        F: Fn(&E) + 'static,
    {
        let listener: Listener<E> = Rc::new(move |payload: &E| {
            callback(payload);
            Ok(())
        });
        self.register(listener, false)
    }

    /// Subscribe a fallible callback to `E`'s channel.
    pub fn try_on<E, F>(&self, callback: F) -> Subscription
    where
        E: GameEvent,
        F: Fn(&E) -> Result<(), ListenerError> + 'static,
    {
        self.register(listener(callback), false)
    }

    /// Subscribe a shared listener handle to `E`'s channel.
    ///
    /// The same handle may be subscribed several times; each subscription is
    /// a separate registration.
    pub fn subscribe<E: GameEvent>(&self, listener: Listener<E>) -> Subscription {
        self.register(listener, false)
    }

    /// Subscribe a callback that runs for at most one emit.
    ///
    /// The registration is removed right before its first invocation. If it
    /// was already removed (by [`off`](Self::off), [`clear`](Self::clear) or
    /// an earlier delivery) it is skipped, even if the round's snapshot still
    /// holds it.
    pub fn once<E, F>(&self, callback: F) -> Subscription
    where
        E: GameEvent,
        F: FnOnce(&E) + 'static,
    {
        let slot = RefCell::new(Some(callback));
        let listener: Listener<E> = Rc::new(move |payload: &E| {
            let callback = slot.borrow_mut().take();
            if let Some(callback) = callback {
                callback(payload);
            }
            Ok(())
        });
        self.register(listener, true)
    }

    fn register<E: GameEvent>(&self, listener: Listener<E>, once: bool) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let mut registry = self.registry.borrow_mut();
        let channel = registry
            .entry(E::NAME)
            .or_insert_with(|| Box::new(SubscriberList::<E>::new()) as Box<dyn Channel>);
        let list = typed_mut::<E>(channel.as_mut());
        list.push(Registration { id, once, listener });
        debug!(
            "Subscribed listener {} to '{}' ({} registered)",
            id,
            E::NAME,
            list.len()
        );
        Subscription { event: E::NAME, id }
    }

    /// Remove the registration named by `subscription`.
    ///
    /// Returns `false` when it is no longer registered.
    pub fn off(&self, subscription: Subscription) -> bool {
        let removed = self.remove_id(subscription.event, subscription.id);
        if removed {
            debug!(
                "Removed listener {} from '{}'",
                subscription.id, subscription.event
            );
        }
        removed
    }

    /// Remove the earliest registration of `listener` (by pointer identity)
    /// from `E`'s channel.
    ///
    /// Returns `false` when the listener is not registered there.
    pub fn unsubscribe<E: GameEvent>(&self, listener: &Listener<E>) -> bool {
        let mut registry = self.registry.borrow_mut();
        let Some(channel) = registry.get_mut(&E::NAME) else {
            return false;
        };
        let list = typed_mut::<E>(channel.as_mut());
        let position = list
            .iter()
            .position(|registration| same_listener(&registration.listener, listener));
        match position {
            Some(index) => {
                let registration = list.remove(index);
                debug!(
                    "Unsubscribed listener {} from '{}'",
                    registration.id,
                    E::NAME
                );
                true
            }
            None => false,
        }
    }

    fn remove_id(&self, event: EventName, id: u64) -> bool {
        self.registry
            .borrow_mut()
            .get_mut(&event)
            .is_some_and(|channel| channel.remove_id(id))
    }

    /// Deliver `payload` to every listener of `E`'s channel, in registration
    /// order.
    ///
    /// Returns the number of listeners that ran successfully. Emitting on a
    /// channel with no listeners returns `Ok(0)`.
    pub fn emit<E: GameEvent>(&self, payload: &E) -> Result<usize, DispatchError> {
        let snapshot = self.snapshot::<E>();
        if snapshot.is_empty() {
            trace!("No listeners for '{}'", E::NAME);
            return Ok(0);
        }

        let policy = self.policy.get();
        let mut delivered = 0;
        let mut failures = Vec::new();

        for (index, pending) in snapshot.into_iter().enumerate() {
            if pending.once && !self.remove_id(E::NAME, pending.id) {
                continue;
            }
            trace!(
                "Delivering '{}' to listener {}: {:?}",
                E::NAME,
                pending.id,
                payload
            );
            match (pending.listener)(payload) {
                Ok(()) => delivered += 1,
                Err(error) => match policy {
                    FailurePolicy::FailFast => {
                        debug!(
                            "Listener {} for '{}' failed, aborting delivery: {}",
                            pending.id,
                            E::NAME,
                            error
                        );
                        return Err(DispatchError::ListenerFailed {
                            event: E::NAME,
                            index,
                            source: error,
                        });
                    }
                    FailurePolicy::Isolate => {
                        warn!(
                            "Listener {} for '{}' failed: {}",
                            pending.id,
                            E::NAME,
                            error
                        );
                        failures.push(ListenerFailure { index, error });
                    }
                },
            }
        }

        if failures.is_empty() {
            Ok(delivered)
        } else {
            Err(DispatchError::ListenersFailed {
                event: E::NAME,
                delivered,
                failures,
            })
        }
    }

    fn snapshot<E: GameEvent>(&self) -> SubscriberList<E> {
        let registry = self.registry.borrow();
        let Some(channel) = registry.get(&E::NAME) else {
            return SmallVec::new();
        };
        typed::<E>(channel.as_ref())
            .iter()
            .map(|registration| Registration {
                id: registration.id,
                once: registration.once,
                listener: Rc::clone(&registration.listener),
            })
            .collect()
    }

    /// Drop every registration on every channel.
    pub fn clear(&self) {
        let mut registry = self.registry.borrow_mut();
        debug!("Clearing {} event channels", registry.len());
        registry.clear();
    }

    /// Number of registrations on `event`.
    pub fn listener_count(&self, event: EventName) -> usize {
        self.registry
            .borrow()
            .get(&event)
            .map_or(0, |channel| channel.len())
    }

    pub fn has_listeners(&self, event: EventName) -> bool {
        self.listener_count(event) > 0
    }

    /// Channels currently keyed in the registry, sorted. Includes channels
    /// whose subscriber list has been emptied.
    pub fn event_names(&self) -> Vec<EventName> {
        let mut names: Vec<EventName> = self.registry.borrow().keys().copied().collect();
        names.sort();
        names
    }

    /// True when no channel has a registration.
    pub fn is_empty(&self) -> bool {
        self.registry.borrow().values().all(|channel| channel.len() == 0)
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<(EventName, usize)> = self
            .event_names()
            .into_iter()
            .map(|name| (name, self.listener_count(name)))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("policy", &self.policy.get())
            .field("listeners", &counts)
            .finish()
    }
}

fn same_listener<E>(a: &Listener<E>, b: &Listener<E>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::combat::{EnemyHit, PlayerHit};
    use crate::events::score::ScoreChanged;

    fn score(score: u64) -> ScoreChanged {
        ScoreChanged { score, delta: 0 }
    }

    fn recorder() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_new_dispatcher_is_empty() {
        let dispatcher = EventDispatcher::new();
        assert!(dispatcher.is_empty());
        assert!(dispatcher.event_names().is_empty());
        assert_eq!(dispatcher.policy(), FailurePolicy::FailFast);
    }

    #[test]
    fn test_emit_calls_listeners_in_registration_order() {
        let dispatcher = EventDispatcher::new();
        let log = recorder();
        let a = Rc::clone(&log);
        let b = Rc::clone(&log);
        dispatcher.on(move |e: &ScoreChanged| a.borrow_mut().push(format!("a{}", e.score)));
        dispatcher.on(move |e: &ScoreChanged| b.borrow_mut().push(format!("b{}", e.score)));

        assert_eq!(dispatcher.emit(&score(7)), Ok(2));
        assert_eq!(*log.borrow(), vec!["a7", "b7"]);
    }

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let dispatcher = EventDispatcher::new();
        assert_eq!(dispatcher.emit(&score(1)), Ok(0));
        assert!(dispatcher.event_names().is_empty());
    }

    #[test]
    fn test_off_removes_only_named_registration() {
        let dispatcher = EventDispatcher::new();
        let log = recorder();
        let a = Rc::clone(&log);
        let b = Rc::clone(&log);
        let sub_a = dispatcher.on(move |_: &ScoreChanged| a.borrow_mut().push("a".into()));
        dispatcher.on(move |_: &ScoreChanged| b.borrow_mut().push("b".into()));

        assert!(dispatcher.off(sub_a));
        assert!(!dispatcher.off(sub_a));
        dispatcher.emit(&score(1)).unwrap();
        assert_eq!(*log.borrow(), vec!["b"]);
    }

    #[test]
    fn test_duplicate_listener_is_called_per_registration() {
        let dispatcher = EventDispatcher::new();
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let handle = listener(move |_: &ScoreChanged| {
            seen.set(seen.get() + 1);
            Ok(())
        });
        dispatcher.subscribe(Rc::clone(&handle));
        dispatcher.subscribe(Rc::clone(&handle));

        dispatcher.emit(&score(1)).unwrap();
        assert_eq!(count.get(), 2);

        assert!(dispatcher.unsubscribe(&handle));
        assert_eq!(dispatcher.listener_count(EventName::ScoreChanged), 1);
        dispatcher.emit(&score(2)).unwrap();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_unsubscribe_matches_identity_not_behaviour() {
        let dispatcher = EventDispatcher::new();
        let first = listener(|_: &ScoreChanged| Ok(()));
        let lookalike = listener(|_: &ScoreChanged| Ok(()));
        dispatcher.subscribe(Rc::clone(&first));

        assert!(!dispatcher.unsubscribe(&lookalike));
        assert_eq!(dispatcher.listener_count(EventName::ScoreChanged), 1);
        assert!(dispatcher.unsubscribe(&first));
        assert_eq!(dispatcher.listener_count(EventName::ScoreChanged), 0);
    }

    #[test]
    fn test_unsubscribe_unknown_channel_is_noop() {
        let dispatcher = EventDispatcher::new();
        let handle = listener(|_: &PlayerHit| Ok(()));
        assert!(!dispatcher.unsubscribe(&handle));
        assert!(dispatcher.event_names().is_empty());
    }

    #[test]
    fn test_empty_list_stays_keyed() {
        let dispatcher = EventDispatcher::new();
        let sub = dispatcher.on(|_: &ScoreChanged| {});
        dispatcher.off(sub);
        assert_eq!(dispatcher.event_names(), vec![EventName::ScoreChanged]);
        assert!(dispatcher.is_empty());
        assert!(!dispatcher.has_listeners(EventName::ScoreChanged));
    }

    #[test]
    fn test_clear_drops_everything() {
        let dispatcher = EventDispatcher::new();
        let count = Rc::new(Cell::new(0));
        let c1 = Rc::clone(&count);
        let c2 = Rc::clone(&count);
        dispatcher.on(move |_: &ScoreChanged| c1.set(c1.get() + 1));
        dispatcher.on(move |_: &PlayerHit| c2.set(c2.get() + 1));

        dispatcher.clear();
        assert_eq!(dispatcher.emit(&score(1)), Ok(0));
        assert_eq!(dispatcher.emit(&PlayerHit { damage: 1, health: 9 }), Ok(0));
        assert_eq!(count.get(), 0);
        assert!(dispatcher.event_names().is_empty());
    }

    #[test]
    fn test_channels_are_isolated() {
        let dispatcher = EventDispatcher::new();
        let enemy_hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&enemy_hits);
        dispatcher.on(|_: &PlayerHit| {});
        dispatcher.on(move |_: &EnemyHit| seen.set(seen.get() + 1));

        dispatcher.emit(&PlayerHit { damage: 3, health: 7 }).unwrap();
        assert_eq!(enemy_hits.get(), 0);
    }

    #[test]
    fn test_fail_fast_aborts_remaining_listeners() {
        let dispatcher = EventDispatcher::new();
        let log = recorder();
        let a = Rc::clone(&log);
        let c = Rc::clone(&log);
        dispatcher.on(move |_: &ScoreChanged| a.borrow_mut().push("a".into()));
        dispatcher.try_on(|_: &ScoreChanged| Err(ListenerError::new("boom")));
        dispatcher.on(move |_: &ScoreChanged| c.borrow_mut().push("c".into()));

        let err = dispatcher.emit(&score(1)).unwrap_err();
        assert_eq!(
            err,
            DispatchError::ListenerFailed {
                event: EventName::ScoreChanged,
                index: 1,
                source: ListenerError::new("boom"),
            }
        );
        assert_eq!(*log.borrow(), vec!["a"]);
    }

    #[test]
    fn test_isolate_delivers_to_everyone_and_reports() {
        let dispatcher = EventDispatcher::with_policy(FailurePolicy::Isolate);
        let log = recorder();
        let a = Rc::clone(&log);
        let c = Rc::clone(&log);
        dispatcher.on(move |_: &ScoreChanged| a.borrow_mut().push("a".into()));
        dispatcher.try_on(|_: &ScoreChanged| Err(ListenerError::new("boom")));
        dispatcher.on(move |_: &ScoreChanged| c.borrow_mut().push("c".into()));

        let err = dispatcher.emit(&score(1)).unwrap_err();
        match err {
            DispatchError::ListenersFailed {
                event,
                delivered,
                failures,
            } => {
                assert_eq!(event, EventName::ScoreChanged);
                assert_eq!(delivered, 2);
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].index, 1);
                assert_eq!(failures[0].error.message(), "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(*log.borrow(), vec!["a", "c"]);
    }

    #[test]
    fn test_set_policy_applies_to_next_emit() {
        let dispatcher = EventDispatcher::new();
        dispatcher.try_on(|_: &ScoreChanged| Err(ListenerError::new("nope")));
        assert!(matches!(
            dispatcher.emit(&score(1)),
            Err(DispatchError::ListenerFailed { .. })
        ));
        dispatcher.set_policy(FailurePolicy::Isolate);
        assert!(matches!(
            dispatcher.emit(&score(1)),
            Err(DispatchError::ListenersFailed { delivered: 0, .. })
        ));
    }

    #[test]
    fn test_once_runs_a_single_time() {
        let dispatcher = EventDispatcher::new();
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        dispatcher.once(move |_: &ScoreChanged| seen.set(seen.get() + 1));

        assert_eq!(dispatcher.emit(&score(1)), Ok(1));
        assert_eq!(dispatcher.emit(&score(2)), Ok(0));
        assert_eq!(count.get(), 1);
        assert_eq!(dispatcher.listener_count(EventName::ScoreChanged), 0);
    }

    #[test]
    fn test_listener_added_during_emit_waits_for_next_round() {
        let dispatcher = Rc::new(EventDispatcher::new());
        let late_calls = Rc::new(Cell::new(0));
        let inner = Rc::clone(&dispatcher);
        let calls = Rc::clone(&late_calls);
        dispatcher.once(move |_: &ScoreChanged| {
            let calls = Rc::clone(&calls);
            inner.on(move |_: &ScoreChanged| calls.set(calls.get() + 1));
        });

        assert_eq!(dispatcher.emit(&score(1)), Ok(1));
        assert_eq!(late_calls.get(), 0);
        assert_eq!(dispatcher.emit(&score(2)), Ok(1));
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_listener_removed_during_emit_still_called_that_round() {
        let dispatcher = Rc::new(EventDispatcher::new());
        let log = recorder();
        let victim_log = Rc::clone(&log);
        let victim: Rc<Cell<Option<Subscription>>> = Rc::new(Cell::new(None));

        let inner = Rc::clone(&dispatcher);
        let target = Rc::clone(&victim);
        dispatcher.on(move |_: &ScoreChanged| {
            if let Some(sub) = target.get() {
                inner.off(sub);
            }
        });
        let victim_sub =
            dispatcher.on(move |_: &ScoreChanged| victim_log.borrow_mut().push("victim".into()));
        victim.set(Some(victim_sub));

        assert_eq!(dispatcher.emit(&score(1)), Ok(2));
        assert_eq!(dispatcher.emit(&score(2)), Ok(1));
        assert_eq!(*log.borrow(), vec!["victim"]);
    }

    #[test]
    fn test_clear_from_listener_does_not_panic() {
        let dispatcher = Rc::new(EventDispatcher::new());
        let inner = Rc::clone(&dispatcher);
        dispatcher.on(move |_: &ScoreChanged| inner.clear());
        dispatcher.on(|_: &ScoreChanged| {});

        assert_eq!(dispatcher.emit(&score(1)), Ok(2));
        assert_eq!(dispatcher.emit(&score(2)), Ok(0));
    }

    #[test]
    fn test_listener_count_matches_deliveries() {
        let dispatcher = EventDispatcher::new();
        dispatcher.on(|_: &ScoreChanged| {});
        dispatcher.try_on(|_: &ScoreChanged| Ok(()));
        dispatcher.once(|_: &ScoreChanged| {});
        dispatcher.on(|_: &PlayerHit| {});

        assert_eq!(dispatcher.listener_count(EventName::ScoreChanged), 3);
        assert_eq!(dispatcher.emit(&score(1)), Ok(3));
        assert_eq!(dispatcher.listener_count(EventName::ScoreChanged), 2);
        assert_eq!(dispatcher.emit(&score(2)), Ok(2));
        assert_eq!(dispatcher.listener_count(EventName::PlayerHit), 1);
    }

    #[test]
    fn test_failure_policy_parses_config_spellings() {
        assert_eq!("fail_fast".parse::<FailurePolicy>().unwrap(), FailurePolicy::FailFast);
        assert_eq!("fail-fast".parse::<FailurePolicy>().unwrap(), FailurePolicy::FailFast);
        assert_eq!("isolate".parse::<FailurePolicy>().unwrap(), FailurePolicy::Isolate);
        assert_eq!(FailurePolicy::FailFast.to_string(), "fail_fast");
        assert!("retry".parse::<FailurePolicy>().is_err());
    }
}
