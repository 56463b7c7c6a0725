//! Simulation tick
//!
//! Advances the session by exactly one step. Units are per tick; hosts with
//! variable frame times drive this at a fixed rate (see [`crate::consts::SIM_DT`]).

use super::collision::{circle_hits_bounds, circle_reaches_top};
use super::state::{BrickGrid, GameEvent, GamePhase, GameState};

/// Advance the game state by one tick
///
/// A no-op unless the phase is `Playing`. Step order is fixed so runs are
/// reproducible: paddle, ball motion, walls, ceiling, paddle bounce,
/// escape, bricks, level clear.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    let width = state.tuning.playfield_width;
    let height = state.tuning.playfield_height;

    // 1. Paddle follows the latest intent
    let intent = state.intent;
    state.paddle.apply_intent(intent, width);

    // 2. Ball motion
    state.ball.pos += state.ball.vel;

    let (x, y, r) = (state.ball.pos.x, state.ball.pos.y, state.ball.radius);

    // 3. Side walls
    if circle_hits_bounds(x, r, 0.0, width) {
        state.ball.vel.x = -state.ball.vel.x;
        state.push_event(GameEvent::WallHit);
    }

    // 4. Ceiling
    if y - r < 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
        state.push_event(GameEvent::WallHit);
    }

    // 5. Paddle: flip vertically, bias horizontally by strike offset
    let paddle = &state.paddle;
    if circle_reaches_top(x, y, r, paddle.x, paddle.y, paddle.width) {
        let hit_pos = paddle.hit_position(x);
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.vel.x += hit_pos * state.tuning.paddle_english;
        state.push_event(GameEvent::PaddleHit);
    }

    // 6. Escape through the bottom ends the session
    if state.ball.top() > height {
        state.end_game();
        return;
    }

    // 7. Bricks: full scan, every overlapping brick counts
    let mut destroyed = Vec::new();
    for brick in state.bricks.iter_mut().filter(|b| b.active) {
        let rect = BrickGrid::rect(&state.tuning, brick.row, brick.column);
        if rect.hit_by_circle(x, y, r) {
            brick.active = false;
            state.ball.vel.y = -state.ball.vel.y;
            state.score += 1;
            destroyed.push((brick.row, brick.column));
        }
    }
    for (row, column) in destroyed {
        state.push_event(GameEvent::BrickDestroyed { row, column });
    }

    // 8. Level clear
    if state.bricks.active_count() == 0 {
        state.level_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PaddleIntent;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(Tuning::default(), 12345);
        state.new_game();
        state.drain_events();
        state
    }

    /// Park the ball mid-field where nothing collides
    fn park_ball(state: &mut GameState, vel: Vec2) {
        state.ball.pos = Vec2::new(240.0, 400.0);
        state.ball.vel = vel;
    }

    #[test]
    fn test_tick_noop_unless_playing() {
        let mut state = GameState::new(Tuning::default(), 1);
        let before = state.ball.pos;
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.ball.pos, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut state = playing_state();
        park_ball(&mut state, Vec2::new(1.5, -2.0));
        tick(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(241.5, 398.0));
        assert_eq!(state.ball.vel, Vec2::new(1.5, -2.0));
    }

    #[test]
    fn test_paddle_moves_with_keys() {
        let mut state = playing_state();
        park_ball(&mut state, Vec2::new(0.0, -1.0));
        state.set_paddle_intent(PaddleIntent::Keys {
            left: true,
            right: false,
        });
        tick(&mut state);
        assert_eq!(state.paddle.x, 195.0);
        tick(&mut state);
        assert_eq!(state.paddle.x, 190.0);
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(470.0, 400.0);
        state.ball.vel = Vec2::new(3.0, -1.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.x, -3.0);
        assert_eq!(state.ball.vel.y, -1.0);
        assert!(state.drain_events().contains(&GameEvent::WallHit));
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut state = playing_state();
        // Above the brick grid
        state.ball.pos = Vec2::new(240.0, 9.0);
        state.ball.vel = Vec2::new(0.5, -2.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, 2.0);
    }

    #[test]
    fn test_paddle_bounce_center() {
        let mut state = playing_state();
        // Paddle spans x in (200, 280), top edge at 615
        state.ball.pos = Vec2::new(240.0, 605.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, -3.0);
        assert_eq!(state.ball.vel.x, 0.0);
        assert!(state.drain_events().contains(&GameEvent::PaddleHit));
    }

    #[test]
    fn test_paddle_bounce_english() {
        let mut state = playing_state();
        // Lands 20px right of center: hit_pos = 0.5
        state.ball.pos = Vec2::new(259.0, 605.0);
        state.ball.vel = Vec2::new(1.0, 3.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, -3.0);
        assert!((state.ball.vel.x - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_miss_outside_span() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(100.0, 605.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, 3.0);
    }

    #[test]
    fn test_escape_ends_game() {
        let mut state = playing_state();
        state.score = 5;
        state.ball.pos = Vec2::new(100.0, 645.0);
        state.ball.vel = Vec2::new(0.0, 4.0);
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.final_score, Some(5));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver { final_score: 5 }]
        );

        // Further ticks do nothing
        let pos = state.ball.pos;
        tick(&mut state);
        assert_eq!(state.ball.pos, pos);
        assert_eq!(state.score, 5);
    }

    #[test]
    fn test_brick_hit_scores() {
        let mut state = playing_state();
        // Brick (2, 0) spans x in (40, 100), y in (106, 126)
        state.ball.pos = Vec2::new(70.0, 136.0);
        state.ball.vel = Vec2::new(0.0, -3.0);
        tick(&mut state);
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel.y, 3.0);
        assert!(!state.bricks.get(2, 0).unwrap().active);
        assert_eq!(state.bricks.active_count(), 17);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::BrickDestroyed { row: 2, column: 0 })
        );
    }

    #[test]
    fn test_double_brick_hit_counts_both() {
        let mut state = playing_state();
        // Ball straddling rows 1 and 2 of column 0 (gap y in (98, 106))
        state.ball.pos = Vec2::new(70.0, 105.0);
        state.ball.vel = Vec2::new(0.0, -3.0);
        tick(&mut state);
        assert_eq!(state.score, 2);
        // Two flips cancel out
        assert_eq!(state.ball.vel.y, -3.0);
        assert!(!state.bricks.get(1, 0).unwrap().active);
        assert!(!state.bricks.get(2, 0).unwrap().active);
    }

    #[test]
    fn test_clearing_last_brick_levels_up() {
        let mut state = playing_state();
        for brick in state.bricks.iter_mut() {
            brick.active = brick.row == 2 && brick.column == 0;
        }
        state.score = 17;
        state.ball.pos = Vec2::new(70.0, 136.0);
        state.ball.vel = Vec2::new(0.0, -3.0);
        tick(&mut state);

        assert_eq!(state.score, 18);
        assert_eq!(state.level, 2);
        assert_eq!(state.rows(), 4);
        assert_eq!(state.bricks.active_count(), 24);
        assert_eq!(state.paddle.width, 72.0);
        assert!((state.ball.speed() - 4.0).abs() < 1e-4);
        assert_eq!(state.phase, GamePhase::Playing);

        let level_ups = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::LeveledUp { .. }))
            .count();
        assert_eq!(level_ups, 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(Tuning::default(), 99999);
        let mut state2 = GameState::new(Tuning::default(), 99999);
        state1.new_game();
        state2.new_game();

        let intents = [
            PaddleIntent::Pointer { x: 120.0 },
            PaddleIntent::Keys {
                left: false,
                right: true,
            },
            PaddleIntent::default(),
        ];

        for i in 0..600 {
            let intent = intents[(i / 50) % intents.len()];
            state1.set_paddle_intent(intent);
            state2.set_paddle_intent(intent);
            tick(&mut state1);
            tick(&mut state2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.paddle, state2.paddle);
        assert_eq!(state1.bricks, state2.bricks);
    }
}
