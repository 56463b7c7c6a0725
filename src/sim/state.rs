//! Game state and core simulation types
//!
//! Everything a session needs lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::progression;
use crate::consts::MAX_QUEUED_EVENTS;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, no game has been played yet
    #[default]
    NotStarted,
    /// Active gameplay, ticks advance the simulation
    Playing,
    /// Ball escaped; score is frozen until the next new game
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "not-started",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game-over",
        }
    }
}

/// Latest paddle movement requested by input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PaddleIntent {
    /// Held arrow keys; both held cancel out
    Keys { left: bool, right: bool },
    /// Absolute pointer/touch x the paddle centers on
    Pointer { x: f32 },
}

impl Default for PaddleIntent {
    fn default() -> Self {
        PaddleIntent::Keys {
            left: false,
            right: false,
        }
    }
}

/// Something observable happened during an action or tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game entered `Playing`
    Started,
    /// All bricks cleared; `level` and `rows` are the new values
    LeveledUp { level: u32, rows: u32 },
    /// Ball escaped the bottom of the playfield
    GameOver { final_score: u64 },
    BrickDestroyed { row: u32, column: u32 },
    PaddleHit,
    WallHit,
}

impl GameEvent {
    /// Name hosts use for phase transitions; contact events have none
    pub fn phase_name(&self) -> Option<&'static str> {
        match self {
            GameEvent::Started => Some("started"),
            GameEvent::LeveledUp { .. } => Some("leveled-up"),
            GameEvent::GameOver { .. } => Some("game-over"),
            _ => None,
        }
    }

    /// Number that travels with a phase transition: new level or final score
    pub fn value(&self) -> Option<u64> {
        match *self {
            GameEvent::LeveledUp { level, .. } => Some(u64::from(level)),
            GameEvent::GameOver { final_score } => Some(final_score),
            _ => None,
        }
    }

    pub fn is_phase_change(&self) -> bool {
        self.phase_name().is_some()
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Keyboard movement per tick
    pub speed: f32,
}

impl Paddle {
    /// Paddle at base width, centered horizontally
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: (tuning.playfield_width - tuning.paddle_base_width) / 2.0,
            y: tuning.paddle_y(),
            width: tuning.paddle_base_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Largest legal left edge for this width
    #[inline]
    pub fn max_x(&self, playfield_width: f32) -> f32 {
        (playfield_width - self.width).max(0.0)
    }

    /// Keep the paddle fully inside the playfield
    pub fn clamp_to(&mut self, playfield_width: f32) {
        self.x = self.x.clamp(0.0, self.max_x(playfield_width));
    }

    /// Move according to input intent, then clamp
    pub fn apply_intent(&mut self, intent: PaddleIntent, playfield_width: f32) {
        match intent {
            PaddleIntent::Keys { left, right } => {
                if left {
                    self.x -= self.speed;
                }
                if right {
                    self.x += self.speed;
                }
            }
            PaddleIntent::Pointer { x } => {
                self.x = x - self.width / 2.0;
            }
        }
        self.clamp_to(playfield_width);
    }

    /// Strike offset from the paddle center, normalized to [-1, 1]
    pub fn hit_position(&self, ball_x: f32) -> f32 {
        let half = self.width / 2.0;
        ((ball_x - self.center_x()) / half).clamp(-1.0, 1.0)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Stationary ball at its launch point
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: launch_point(tuning),
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }
}

fn launch_point(tuning: &Tuning) -> Vec2 {
    Vec2::new(
        tuning.playfield_width / 2.0,
        tuning.playfield_height - tuning.ball_launch_offset,
    )
}

/// One cell of the brick grid
///
/// Screen position is not stored; it derives from (row, column) and the
/// layout via [`BrickGrid::rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub row: u32,
    pub column: u32,
    pub active: bool,
}

/// Row-major grid of bricks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: u32,
    columns: u32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Fresh grid with every brick active
    pub fn new(rows: u32, columns: u32) -> Self {
        let bricks = (0..rows)
            .flat_map(|row| {
                (0..columns).map(move |column| Brick {
                    row,
                    column,
                    active: true,
                })
            })
            .collect();
        Self {
            rows,
            columns,
            bricks,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Total cell count, active or not
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    pub fn get(&self, row: u32, column: u32) -> Option<&Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get((row * self.columns + column) as usize)
    }

    /// Cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Screen rectangle of a cell under the given layout
    pub fn rect(tuning: &Tuning, row: u32, column: u32) -> Rect {
        let x = tuning.brick_offset_left() + column as f32 * (tuning.brick_width + tuning.brick_padding);
        let y = tuning.brick_offset_top + row as f32 * (tuning.brick_height + tuning.brick_padding);
        Rect::new(x, y, tuning.brick_width, tuning.brick_height)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Layout and physics parameters
    pub tuning: Tuning,
    /// Seed the launch-angle RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Current level (1-based)
    pub level: u32,
    pub score: u64,
    /// Score frozen at game over, cleared by the next new game
    pub final_score: Option<u64>,
    /// Ticks simulated in the current game
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// Latest input intent, applied at the start of each tick
    pub intent: PaddleIntent,
    /// Events not yet handed to listeners
    ///
    /// [`crate::Session`] drains this after every action. Callers driving
    /// [`crate::sim::tick`] directly should call [`GameState::drain_events`];
    /// undrained contact events stop queueing at [`MAX_QUEUED_EVENTS`].
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the start screen
    ///
    /// Entities are laid out for level 1 so the start screen has something
    /// to draw, but nothing moves until a new game begins.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let bricks = BrickGrid::new(tuning.brick_base_rows, tuning.brick_columns);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            level: 1,
            score: 0,
            final_score: None,
            time_ticks: 0,
            paddle: Paddle::new(&tuning),
            ball: Ball::new(&tuning),
            bricks,
            intent: PaddleIntent::default(),
            events: Vec::new(),
            tuning,
        }
    }

    /// Number of brick rows at the current level
    pub fn rows(&self) -> u32 {
        self.bricks.rows()
    }

    /// Rebuild the brick grid for the current row count
    pub fn init_bricks(&mut self, rows: u32) {
        self.bricks = BrickGrid::new(rows, self.tuning.brick_columns);
    }

    /// Put the ball back at its launch point with a fresh upward velocity
    ///
    /// Speed follows the level; the launch angle is uniform in [45°, 135°]
    /// from horizontal, so the ball always starts upward.
    pub fn reset_ball(&mut self) {
        let speed = progression::ball_speed(&self.tuning, self.level);
        let angle = self
            .rng
            .random_range(progression::LAUNCH_ANGLE_MIN..=progression::LAUNCH_ANGLE_MAX);
        self.ball.pos = launch_point(&self.tuning);
        self.ball.vel = progression::launch_velocity(speed, angle);
        self.ball.radius = self.tuning.ball_radius;
    }

    /// Screen rectangle of a brick cell
    pub fn brick_rect(&self, row: u32, column: u32) -> Rect {
        BrickGrid::rect(&self.tuning, row, column)
    }

    /// Record the latest paddle intent
    ///
    /// Ignored outside `Playing`. Non-finite pointer positions are dropped.
    pub fn set_paddle_intent(&mut self, intent: PaddleIntent) {
        if self.phase != GamePhase::Playing {
            log::debug!("Ignoring paddle intent in phase {}", self.phase.as_str());
            return;
        }
        if matches!(intent, PaddleIntent::Pointer { x } if !x.is_finite()) {
            log::debug!("Ignoring non-finite pointer x");
            return;
        }
        self.intent = intent;
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if !event.is_phase_change() && self.events.len() >= MAX_QUEUED_EVENTS {
            return;
        }
        self.events.push(event);
    }

    /// Events recorded since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
