//! Breaker Nano entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively this runs a headless attract-mode session: the autopilot plays
//! for a fixed number of ticks and the run is logged.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use anyhow::Context;
    use clap::Parser;

    use breaker_nano::sim::{GameEvent, GamePhase, autopilot_intent};
    use breaker_nano::{Session, Tuning};

    /// Headless Breaker Nano runner
    #[derive(Debug, Parser)]
    #[command(name = "breaker-nano", version, about)]
    struct Args {
        /// RNG seed for launch angles
        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// Ticks to simulate (60 per second of game time)
        #[arg(long, default_value_t = 60 * 60 * 5)]
        ticks: u64,

        /// JSON tuning file; missing fields use defaults
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Leave the paddle still instead of letting the autopilot play
        #[arg(long)]
        no_autopilot: bool,
    }

    #[derive(Debug, Default)]
    struct RunStats {
        games: u32,
        best_score: u64,
        best_level: u32,
        level_ups: u32,
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();
        let args = Args::parse();

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)
                .with_context(|| format!("loading tuning from {}", path.display()))?,
            None => Tuning::default(),
        };

        log::info!("Breaker Nano (native) starting with seed {}", args.seed);
        let mut session = Session::new(tuning, args.seed);

        let stats = Rc::new(RefCell::new(RunStats::default()));
        let sink = Rc::clone(&stats);
        session.subscribe(move |event| {
            let mut stats = sink.borrow_mut();
            match *event {
                GameEvent::Started => stats.games += 1,
                GameEvent::LeveledUp { level, rows } => {
                    stats.level_ups += 1;
                    stats.best_level = stats.best_level.max(level);
                    log::debug!("Reached level {} with {} rows", level, rows);
                }
                GameEvent::GameOver { final_score } => {
                    stats.best_score = stats.best_score.max(final_score);
                }
                _ => {}
            }
        });

        session.new_game();
        for _ in 0..args.ticks {
            if session.phase() == GamePhase::GameOver {
                session.new_game();
            }
            if !args.no_autopilot {
                if let Some(intent) = autopilot_intent(session.state()) {
                    session.set_paddle_intent(intent);
                }
            }
            session.tick();
        }

        let stats = stats.borrow();
        let best_score = stats.best_score.max(session.score());
        let best_level = stats.best_level.max(session.level());
        log::info!(
            "Ran {} ticks: {} game(s), {} level-up(s), best score {}, best level {}",
            args.ticks,
            stats.games,
            stats.level_ups,
            best_score,
            best_level
        );
        println!("games={} best_score={} best_level={}", stats.games, best_score, best_level);

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
