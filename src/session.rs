//! Session facade for UI layers
//!
//! Wraps a [`GameState`] with the three inbound actions a host needs
//! (`new_game`, `tick`, `set_paddle_intent`), read accessors for drawing,
//! and listeners that hear about phase transitions. Every call is safe in
//! every phase; out-of-phase calls do nothing.

use crate::sim::{self, Ball, BrickGrid, GameEvent, GamePhase, GameState, Paddle, PaddleIntent, Rect};
use crate::tuning::Tuning;

/// Callback invoked with each event after the action that produced it
pub type Listener = Box<dyn FnMut(&GameEvent)>;

/// A brick cell as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickView {
    pub row: u32,
    pub column: u32,
    pub rect: Rect,
    pub active: bool,
}

/// One player's game session
pub struct Session {
    state: GameState,
    listeners: Vec<Listener>,
}

impl Session {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(tuning, seed),
            listeners: Vec::new(),
        }
    }

    /// Resume from a snapshot (e.g. a deserialized [`GameState`])
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for game events
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Start (or restart) a game
    pub fn new_game(&mut self) {
        self.state.new_game();
        self.dispatch();
    }

    /// Advance one step; no-op unless playing
    pub fn tick(&mut self) {
        sim::tick(&mut self.state);
        self.dispatch();
    }

    /// Record the latest paddle intent; ignored unless playing
    pub fn set_paddle_intent(&mut self, intent: PaddleIntent) {
        self.state.set_paddle_intent(intent);
    }

    fn dispatch(&mut self) {
        let events = self.state.drain_events();
        for event in &events {
            for listener in &mut self.listeners {
                listener(event);
            }
        }
    }

    // === Read access ===

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Score frozen at the last game over, if the session is over
    pub fn final_score(&self) -> Option<u64> {
        self.state.final_score
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn paddle(&self) -> &Paddle {
        &self.state.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    /// Every brick cell with its screen rectangle
    pub fn bricks(&self) -> impl Iterator<Item = BrickView> + '_ {
        let tuning = &self.state.tuning;
        self.state.bricks.iter().map(move |brick| BrickView {
            row: brick.row,
            column: brick.column,
            rect: BrickGrid::rect(tuning, brick.row, brick.column),
            active: brick.active,
        })
    }

    /// Message offered by the game-over screen's share button
    pub fn share_text(&self, url: &str) -> String {
        let score = self.state.final_score.unwrap_or(self.state.score);
        format!("I scored {score} at Breaker Nano! Try to beat it: {url}")
    }
}
