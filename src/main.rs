//! Tank Arena headless runner
//!
//! Usage: `tank-arena [config.json] [ticks]`
//!
//! Plays one match with the autopilot, logs what happens (`RUST_LOG=debug` for
//! per-entity events) and prints the final snapshot as JSON.

use std::process::ExitCode;

use tank_arena::SimConfig;
use tank_arena::demo::Autopilot;
use tank_arena::sim::{MatchEvent, MatchPhase, MatchState, Snapshot, tick};

/// Default run length (30 s at the reference cadence)
const DEFAULT_TICKS: u64 = 3000;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Tank Arena (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load(&path)?,
        None => SimConfig::default(),
    };
    let ticks = match args.next() {
        Some(n) => n.parse::<u64>()?,
        None => DEFAULT_TICKS,
    };

    let mut state = MatchState::new(&config)?;
    let mut pilot = Autopilot::default();
    let mut kills = 0u32;
    let mut hits = 0u32;

    for _ in 0..ticks {
        let input = pilot.input(&state);
        tick(&mut state, &input);

        for event in &state.events {
            match event {
                MatchEvent::OpponentDestroyed { .. } => kills += 1,
                MatchEvent::PlayerHit { .. } => hits += 1,
                _ => {}
            }
        }

        if state.phase == MatchPhase::GameOver || state.quit_requested {
            break;
        }
    }

    log::info!(
        "Finished after {} ticks: score {}, lives {}, {} kills, {} hits taken",
        state.time_ticks,
        state.score,
        state.lives,
        kills,
        hits
    );

    println!("{}", Snapshot::capture(&state).to_json()?);
    Ok(())
}
