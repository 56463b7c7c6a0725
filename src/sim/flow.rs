//! Game flow: phase transitions and the resets they perform
//!
//! ```text
//! NotStarted --new_game--> Playing --ball escapes--> GameOver
//!                          |     ^                      |
//!                          +-----+ level_up             |
//!                          ^----------new_game----------+
//! ```

use super::progression;
use super::state::{GameEvent, GamePhase, GameState, Paddle, PaddleIntent};

impl GameState {
    /// Start a fresh game from any phase
    ///
    /// Resets score, level, rows and paddle width, recenters the paddle,
    /// rebuilds the bricks and relaunches the ball.
    pub fn new_game(&mut self) {
        self.score = 0;
        self.level = 1;
        self.final_score = None;
        self.time_ticks = 0;
        self.intent = PaddleIntent::default();
        self.paddle = Paddle::new(&self.tuning);
        self.init_bricks(self.tuning.brick_base_rows);
        self.reset_ball();
        self.phase = GamePhase::Playing;

        log::info!("New game started (seed {})", self.seed);
        self.push_event(GameEvent::Started);
    }

    /// Advance to the next level
    ///
    /// Phase stays `Playing`; every entity is reinitialized for the harder
    /// level.
    pub fn level_up(&mut self) {
        self.level += 1;
        let rows = self.rows() + 1;
        self.paddle.width = progression::shrink_paddle(&self.tuning, self.paddle.width);
        self.paddle.clamp_to(self.tuning.playfield_width);
        self.init_bricks(rows);
        self.reset_ball();

        log::info!(
            "Level {}: rows={}, paddle width={}, ball speed={}",
            self.level,
            rows,
            self.paddle.width,
            self.ball.speed()
        );
        self.push_event(GameEvent::LeveledUp {
            level: self.level,
            rows,
        });
    }

    /// Freeze the score and stop the session
    pub fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.final_score = Some(self.score);

        log::info!("Game over at level {} with score {}", self.level, self.score);
        self.push_event(GameEvent::GameOver {
            final_score: self.score,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::sim::state::{GameEvent, GamePhase, GameState};
    use crate::tuning::Tuning;

    #[test]
    fn test_new_game_resets() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.new_game();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.rows(), 3);
        assert_eq!(state.paddle.width, 80.0);
        assert_eq!(state.bricks.active_count(), 18);
        assert_eq!(state.score, 0);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_level_up_from_one() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.new_game();
        state.drain_events();

        state.level_up();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 2);
        assert_eq!(state.rows(), 4);
        assert_eq!(state.bricks.len(), 24);
        assert_eq!(state.bricks.active_count(), 24);
        assert_eq!(state.paddle.width, 72.0);
        assert!((state.ball.speed() - 4.0).abs() < 1e-4);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::LeveledUp { level: 2, rows: 4 }]
        );
    }

    #[test]
    fn test_paddle_width_floor() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.new_game();
        for _ in 0..5 {
            state.level_up();
        }
        assert_eq!(state.paddle.width, 40.0);
        for _ in 0..3 {
            state.level_up();
        }
        assert_eq!(state.paddle.width, 40.0);
        assert_eq!(state.level, 9);
        assert_eq!(state.rows(), 11);
    }

    #[test]
    fn test_level_up_keeps_paddle_inside() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.new_game();
        state.paddle.x = 400.0;
        state.level_up();
        assert!(state.paddle.x <= 480.0 - state.paddle.width);
    }

    #[test]
    fn test_end_game_freezes_score() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.new_game();
        state.score = 12;
        state.end_game();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.final_score, Some(12));

        // Restart clears the frozen score
        state.new_game();
        assert_eq!(state.final_score, None);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_new_game_after_level_ups_restores_base() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.new_game();
        state.level_up();
        state.level_up();
        state.paddle.x = 0.0;
        state.new_game();
        assert_eq!(state.level, 1);
        assert_eq!(state.rows(), 3);
        assert_eq!(state.paddle.width, 80.0);
        assert_eq!(state.paddle.x, 200.0);
    }
}
