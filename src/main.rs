//! Medabot event dispatch demo.
//!
//! Wires a [`GameSession`] producer and the [`Hud`] widgets to a shared
//! [`EventDispatcher`] and plays a short match, printing the HUD after every
//! step. The producer and the widgets only meet through the dispatcher.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --policy isolate --seed 42 --rounds 8 --json
//! ```
//!
//! `RUST_LOG` overrides the log level from the config file.

use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use log::{error, info, warn};
use serde_json::json;

use medabot_events::error::{ListenerError, SessionError};
use medabot_events::events::GameEvent;
use medabot_events::events::combat::{EnemyHit, HealingApplied, PlayerHit};
use medabot_events::events::gamestate::GameStateChanged;
use medabot_events::events::loading::LoadingProgress;
use medabot_events::events::score::ScoreChanged;
use medabot_events::events::shop::PurchaseCompleted;
use medabot_events::game::GameSession;
use medabot_events::resources::dispatcher::{EventDispatcher, FailurePolicy};
use medabot_events::resources::dispatcherconfig::DispatcherConfig;
use medabot_events::resources::gamestate::GameStates;
use medabot_events::systems::hud::Hud;

const ENEMIES: [&str; 3] = ["Metabee", "Rokusho", "Arcbeetle"];
const SHOP: [(&str, u64); 3] = [("repair kit", 60), ("armor plate", 150), ("medal", 400)];

/// Medabot event dispatch demo
#[derive(Parser)]
#[command(version, about = "Plays a short Medabot match over the event dispatcher.")]
struct Cli {
    /// INI configuration file. Missing files fall back to defaults.
    #[arg(long, value_name = "PATH", default_value = "./events.ini")]
    config: PathBuf,

    /// Listener failure policy (fail-fast or isolate); overrides the config.
    #[arg(long, value_name = "POLICY")]
    policy: Option<FailurePolicy>,

    /// Play a random match with this seed instead of the scripted one.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Rounds in a random match.
    #[arg(
        long,
        value_name = "N",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    rounds: u32,

    /// Print every dispatched event as a JSON line.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = DispatcherConfig::with_path(&cli.config);
    let load_result = if cli.config.exists() {
        Some(config.load_from_file())
    } else {
        None
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.to_string()),
    )
    .init();

    match load_result {
        Some(Ok(())) => info!("Using config {:?}", config.path()),
        Some(Err(e)) => warn!("{e}; using defaults"),
        None => info!("No config at {:?}; using defaults", config.path()),
    }
    if let Some(policy) = cli.policy {
        config.failure_policy = policy;
    }

    let dispatcher = Rc::new(config.build_dispatcher());
    info!("Dispatcher ready with {} policy", dispatcher.policy());

    if cli.json {
        trace_json::<ScoreChanged>(&dispatcher);
        trace_json::<PlayerHit>(&dispatcher);
        trace_json::<EnemyHit>(&dispatcher);
        trace_json::<HealingApplied>(&dispatcher);
        trace_json::<PurchaseCompleted>(&dispatcher);
        trace_json::<LoadingProgress>(&dispatcher);
        trace_json::<GameStateChanged>(&dispatcher);
    }

    let mut session = GameSession::new(Rc::clone(&dispatcher));
    let mut hud = Hud::attach(&dispatcher, session.max_health());

    let result = match cli.seed {
        Some(seed) => play_random(&mut session, &hud, seed, cli.rounds),
        None => play_scripted(&mut session, &hud),
    };

    hud.detach(&dispatcher);
    if let Err(e) = result {
        error!("Match aborted: {e}");
        std::process::exit(1);
    }
    info!(
        "Match over: state={}, score={}, health={}/{}, credits={}",
        session.state(),
        session.score(),
        session.health(),
        session.max_health(),
        session.credits()
    );
}

/// Print each `E` as `{"event": ..., "payload": ...}` on stdout.
fn trace_json<E: GameEvent>(dispatcher: &EventDispatcher) {
    dispatcher.try_on(|event: &E| {
        let payload =
            serde_json::to_value(event).map_err(|e| ListenerError::new(e.to_string()))?;
        println!("{}", json!({ "event": E::NAME, "payload": payload }));
        Ok(())
    });
}

fn show(step: &str, hud: &Hud) {
    println!("-- {step}");
    for line in hud.render() {
        println!("   {line}");
    }
}

fn play_scripted(session: &mut GameSession, hud: &Hud) -> Result<(), SessionError> {
    for percent in [0, 35, 70, 100] {
        session.report_loading(percent)?;
    }
    show("assets loaded", hud);

    session.transition(GameStates::Lobby)?;
    session.purchase("repair kit", 60)?;
    show("lobby", hud);

    session.transition(GameStates::Playing)?;
    session.hit_enemy("Rokusho", 25)?;
    session.add_score(10)?;
    show("first strike", hud);

    session.take_damage(45)?;
    show("counter attack", hud);

    session.heal(30)?;
    session.hit_enemy("Rokusho", 40)?;
    session.add_score(20)?;
    show("recovered", hud);

    session.take_damage(90)?;
    show("knocked out", hud);
    Ok(())
}

fn play_random(
    session: &mut GameSession,
    hud: &Hud,
    seed: u64,
    rounds: u32,
) -> Result<(), SessionError> {
    let mut rng = fastrand::Rng::with_seed(seed);
    session.report_loading(100)?;
    session.transition(GameStates::Lobby)?;
    let (item, price) = SHOP[rng.usize(..SHOP.len())];
    match session.purchase(item, price) {
        Err(SessionError::InsufficientFunds { needed, available }) => {
            warn!("Cannot afford {item}: need {needed}, have {available}")
        }
        other => other?,
    }
    session.transition(GameStates::Playing)?;

    for round in 1..=rounds {
        let enemy = ENEMIES[rng.usize(..ENEMIES.len())];
        session.hit_enemy(enemy, rng.u32(5..=40))?;
        session.add_score(rng.u64(1..=25))?;
        match rng.u8(0..4) {
            0 => {
                session.heal(rng.u32(10..=30))?;
            }
            _ => session.take_damage(rng.u32(0..=35))?,
        }
        show(&format!("round {round}"), hud);
        if session.is_defeated() {
            break;
        }
    }
    if !session.is_defeated() {
        session.transition(GameStates::GameOver)?;
    }
    Ok(())
}
