//! Listeners that keep HUD widgets in sync with game events.
//!
//! Each `bind_*` function subscribes one widget to the channels it renders
//! and returns the resulting subscriptions. [`Hud`] bundles the four widgets
//! and can detach them all at once.
//!
//! Widgets are shared as `Rc<RefCell<..>>`; listeners only borrow them for
//! the duration of one update.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::components::hud::{HealthBar, LoadingScreen, PurchaseToast, ScoreBoard};
use crate::error::ListenerError;
use crate::events::combat::{HealingApplied, PlayerHit};
use crate::events::gamestate::GameStateChanged;
use crate::events::loading::LoadingProgress;
use crate::events::score::ScoreChanged;
use crate::events::shop::PurchaseCompleted;
use crate::resources::dispatcher::{EventDispatcher, Subscription};
use crate::resources::gamestate::GameStates;

const TOAST_CAPACITY: usize = 4;

/// Subscribe a health bar to hits and healing.
pub fn bind_health_bar(
    dispatcher: &EventDispatcher,
    bar: &Rc<RefCell<HealthBar>>,
) -> Vec<Subscription> {
    let on_hit = Rc::clone(bar);
    let on_heal = Rc::clone(bar);
    vec![
        dispatcher.on(move |event: &PlayerHit| {
            let mut bar = on_hit.borrow_mut();
            bar.health = event.health.min(bar.max_health);
            bar.flashing = true;
        }),
        dispatcher.on(move |event: &HealingApplied| {
            let mut bar = on_heal.borrow_mut();
            bar.health = event.health.min(bar.max_health);
            bar.healing = Some(bar.healing.unwrap_or(0) + event.amount);
        }),
    ]
}

/// Subscribe a score board to score updates.
pub fn bind_score_board(
    dispatcher: &EventDispatcher,
    board: &Rc<RefCell<ScoreBoard>>,
) -> Vec<Subscription> {
    let board = Rc::clone(board);
    vec![dispatcher.on(move |event: &ScoreChanged| {
        let mut board = board.borrow_mut();
        board.score = event.score;
        board.updates += 1;
    })]
}

/// Subscribe a purchase toast to completed purchases.
pub fn bind_purchase_toast(
    dispatcher: &EventDispatcher,
    toast: &Rc<RefCell<PurchaseToast>>,
) -> Vec<Subscription> {
    let toast = Rc::clone(toast);
    vec![dispatcher.on(move |event: &PurchaseCompleted| {
        toast.borrow_mut().push(format!(
            "Purchased {} for {} credits ({} left)",
            event.item, event.price, event.balance
        ));
    })]
}

/// Subscribe a loading screen to loading progress and state changes.
///
/// Progress that goes backwards is rejected with a [`ListenerError`] and
/// leaves the screen unchanged.
pub fn bind_loading_screen(
    dispatcher: &EventDispatcher,
    screen: &Rc<RefCell<LoadingScreen>>,
) -> Vec<Subscription> {
    let on_progress = Rc::clone(screen);
    let on_state = Rc::clone(screen);
    vec![
        dispatcher.try_on(move |event: &LoadingProgress| {
            let mut screen = on_progress.borrow_mut();
            if event.percent < screen.percent {
                return Err(ListenerError::new(format!(
                    "loading progress went backwards: {}% -> {}%",
                    screen.percent, event.percent
                )));
            }
            screen.percent = event.percent;
            if event.is_complete() {
                screen.visible = false;
            }
            Ok(())
        }),
        dispatcher.on(move |event: &GameStateChanged| {
            let mut screen = on_state.borrow_mut();
            screen.visible = event.to == GameStates::Loading;
        }),
    ]
}

/// The full set of HUD widgets and their subscriptions.
#[derive(Debug)]
pub struct Hud {
    pub health_bar: Rc<RefCell<HealthBar>>,
    pub score_board: Rc<RefCell<ScoreBoard>>,
    pub purchase_toast: Rc<RefCell<PurchaseToast>>,
    pub loading_screen: Rc<RefCell<LoadingScreen>>,
    subscriptions: Vec<Subscription>,
}

impl Hud {
    /// Create the widgets and subscribe them to `dispatcher`.
    pub fn attach(dispatcher: &EventDispatcher, max_health: u32) -> Self {
        let health_bar = Rc::new(RefCell::new(HealthBar::new(max_health)));
        let score_board = Rc::new(RefCell::new(ScoreBoard::default()));
        let purchase_toast = Rc::new(RefCell::new(PurchaseToast::new(TOAST_CAPACITY)));
        let loading_screen = Rc::new(RefCell::new(LoadingScreen::default()));

        let mut subscriptions = bind_health_bar(dispatcher, &health_bar);
        subscriptions.extend(bind_score_board(dispatcher, &score_board));
        subscriptions.extend(bind_purchase_toast(dispatcher, &purchase_toast));
        subscriptions.extend(bind_loading_screen(dispatcher, &loading_screen));
        debug!("HUD attached with {} subscriptions", subscriptions.len());

        Self {
            health_bar,
            score_board,
            purchase_toast,
            loading_screen,
            subscriptions,
        }
    }

    /// Remove every subscription made by [`Hud::attach`]. Returns how many
    /// were still registered.
    pub fn detach(&mut self, dispatcher: &EventDispatcher) -> usize {
        let removed = self
            .subscriptions
            .drain(..)
            .filter(|subscription| dispatcher.off(*subscription))
            .count();
        debug!("HUD detached, {} subscriptions removed", removed);
        removed
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Current HUD lines, top to bottom. Transient indicators are cleared
    /// after being rendered.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let loading = self.loading_screen.borrow();
        if loading.visible {
            lines.push(loading.text());
        }
        let mut bar = self.health_bar.borrow_mut();
        lines.push(bar.text());
        bar.settle();
        lines.push(self.score_board.borrow().text());
        let mut toast = self.purchase_toast.borrow_mut();
        while let Some(message) = toast.pop() {
            lines.push(message);
        }
        lines
    }
}
