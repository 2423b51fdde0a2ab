//! Fixed timestep simulation tick
//!
//! Advances a match by exactly one step. The order of the phases below is
//! part of the game's observable behavior and must not change.

use serde::{Deserialize, Serialize};

use super::collision::{hits_wall, paddle_contact, scoring_side};
use super::serve::ServeRandom;
use super::state::{MatchState, Side};

/// Held movement keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

impl TickInput {
    pub fn from_flags(left_up: bool, left_down: bool, right_up: bool, right_down: bool) -> Self {
        Self {
            left: PaddleInput {
                up: left_up,
                down: left_down,
            },
            right: PaddleInput {
                up: right_up,
                down: right_down,
            },
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Ball bounced off this side's paddle
    pub paddle_bounce: Option<Side>,
    /// This side scored and the ball was re-served
    pub scored: Option<Side>,
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut MatchState, input: &TickInput, rng: &mut impl ServeRandom) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Paddles
    let field_height = state.field_height;
    state.left.apply_input(input.left.up, input.left.down, field_height);
    state.right.apply_input(input.right.up, input.right.down, field_height);

    // Ball integration
    state.ball.pos += state.ball.vel;

    // Top/bottom walls; overshoot is left for the flipped velocity to undo
    if hits_wall(&state.ball, field_height) {
        state.ball.vel.y = -state.ball.vel.y;
        outcome.wall_bounce = true;
    }

    if let Some(side) = paddle_contact(&state.ball, &state.left, &state.right) {
        state.ball.vel.x = -state.ball.vel.x;
        outcome.paddle_bounce = Some(side);
    }

    if let Some(side) = scoring_side(&state.ball, state.field_width) {
        state.score.award(side);
        state.serve(rng);
        outcome.scored = Some(side);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PongSettings;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Serve source that replays a fixed list of flips, then repeats `true`
    struct Scripted(Vec<bool>);

    impl ServeRandom for Scripted {
        fn coin_flip(&mut self) -> bool {
            if self.0.is_empty() { true } else { self.0.remove(0) }
        }
    }

    fn new_match() -> MatchState {
        MatchState::new(&PongSettings::default(), &mut Scripted(vec![true, true]))
    }

    #[test]
    fn test_score_on_right_exit() {
        let mut state = new_match();
        state.ball.pos = Vec2::new(795.0, 300.0);
        state.ball.vel = Vec2::new(7.0, 0.0);

        let mut rng = Scripted(vec![false, true]);
        let outcome = tick(&mut state, &TickInput::default(), &mut rng);

        assert_eq!(outcome.scored, Some(Side::Left));
        assert_eq!(state.score.left, 1);
        assert_eq!(state.score.right, 0);
        assert_eq!(state.ball.pos, Vec2::new(395.0, 295.0));
        assert_eq!(state.ball.vel, Vec2::new(-7.0, 7.0));
    }

    #[test]
    fn test_score_on_left_exit() {
        let mut state = new_match();
        state.ball.pos = Vec2::new(3.0, 100.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);

        let outcome = tick(&mut state, &TickInput::default(), &mut Scripted(vec![true, false]));

        assert_eq!(outcome.scored, Some(Side::Right));
        assert_eq!(state.score.right, 1);
        assert_eq!(state.ball.pos, state.ball_home());
        assert_eq!(state.ball.vel, Vec2::new(7.0, -7.0));
    }

    #[test]
    fn test_wall_bounce_flips_only_vertical_velocity() {
        let mut state = new_match();
        state.ball.pos = Vec2::new(400.0, 5.0);
        state.ball.vel = Vec2::new(7.0, -7.0);
        let before = state;

        let outcome = tick(&mut state, &TickInput::default(), &mut Scripted(vec![]));

        assert!(outcome.wall_bounce);
        assert_eq!(outcome.paddle_bounce, None);
        assert_eq!(outcome.scored, None);
        // Overshoot is not corrected
        assert_eq!(state.ball.pos, Vec2::new(407.0, -2.0));
        assert_eq!(state.ball.vel, Vec2::new(7.0, 7.0));
        assert_eq!(state.left, before.left);
        assert_eq!(state.right, before.right);
        assert_eq!(state.score, before.score);

        // Next tick comes back into the field without a second flip
        let outcome = tick(&mut state, &TickInput::default(), &mut Scripted(vec![]));
        assert!(!outcome.wall_bounce);
        assert_eq!(state.ball.pos.y, 5.0);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = new_match();
        state.ball.pos = Vec2::new(400.0, 585.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);

        let outcome = tick(&mut state, &TickInput::default(), &mut Scripted(vec![]));
        assert!(outcome.wall_bounce);
        assert_eq!(state.ball.vel, Vec2::new(-7.0, -7.0));
    }

    #[test]
    fn test_left_paddle_bounce_keeps_speed() {
        let mut state = new_match();
        state.ball.pos = Vec2::new(66.0, 295.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);

        let outcome = tick(&mut state, &TickInput::default(), &mut Scripted(vec![]));

        assert_eq!(outcome.paddle_bounce, Some(Side::Left));
        assert_eq!(state.ball.pos, Vec2::new(59.0, 302.0));
        assert_eq!(state.ball.vel, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_ball_misses_paddle_outside_span() {
        let mut state = new_match();
        state.ball.pos = Vec2::new(66.0, 100.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);

        let outcome = tick(&mut state, &TickInput::default(), &mut Scripted(vec![]));
        assert_eq!(outcome.paddle_bounce, None);
        assert_eq!(state.ball.vel.x, -7.0);
    }

    #[test]
    fn test_paddles_move_before_ball() {
        let mut state = new_match();
        // Paddle moves down to 260 first, so a ball centre of 255 misses it
        state.ball.pos = Vec2::new(66.0, 243.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);
        let input = TickInput::from_flags(false, true, false, false);

        let outcome = tick(&mut state, &input, &mut Scripted(vec![]));

        assert_eq!(state.left.pos.y, 260.0);
        assert_eq!(outcome.paddle_bounce, None);
    }

    #[test]
    fn test_right_paddle_input() {
        let mut state = new_match();
        let input = TickInput::from_flags(false, false, true, false);
        tick(&mut state, &input, &mut Scripted(vec![]));
        assert_eq!(state.right.pos.y, 240.0);
        assert_eq!(state.left.pos.y, 250.0);
    }

    #[test]
    fn test_paddle_stops_at_top() {
        let mut state = new_match();
        let input = TickInput::from_flags(true, false, false, false);
        for _ in 0..40 {
            tick(&mut state, &input, &mut Scripted(vec![]));
        }
        assert_eq!(state.left.pos.y, 0.0);
    }

    #[test]
    fn test_determinism() {
        let settings = PongSettings::default();
        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);
        let mut state1 = MatchState::new(&settings, &mut rng1);
        let mut state2 = MatchState::new(&settings, &mut rng2);

        let inputs = [
            TickInput::from_flags(true, false, false, true),
            TickInput::default(),
            TickInput::from_flags(false, true, true, false),
        ];

        for i in 0..2000 {
            let input = &inputs[i % inputs.len()];
            let a = tick(&mut state1, input, &mut rng1);
            let b = tick(&mut state2, input, &mut rng2);
            assert_eq!(a, b);
        }

        assert_eq!(state1, state2);
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_every_tick(
            seed in any::<u64>(),
            keys in proptest::collection::vec(any::<[bool; 4]>(), 1..600),
        ) {
            let settings = PongSettings::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = MatchState::new(&settings, &mut rng);

            for k in keys {
                let before = state.score;
                let input = TickInput::from_flags(k[0], k[1], k[2], k[3]);
                let outcome = tick(&mut state, &input, &mut rng);

                for paddle in [&state.left, &state.right] {
                    prop_assert!(paddle.pos.y >= 0.0);
                    prop_assert!(paddle.pos.y <= settings.field_height - paddle.height);
                }

                prop_assert_eq!(state.ball.vel.x.abs(), settings.ball_speed);
                prop_assert_eq!(state.ball.vel.y.abs(), settings.ball_speed);

                let gained = (state.score.left - before.left) + (state.score.right - before.right);
                prop_assert!(gained <= 1);
                prop_assert_eq!(gained == 1, outcome.scored.is_some());
                prop_assert!(state.score.left >= before.left);
                prop_assert!(state.score.right >= before.right);

                // No externally observed tick leaves the ball past a side line
                prop_assert!(state.ball.pos.x >= 0.0 && state.ball.pos.x <= state.field_width);
                if outcome.scored.is_some() {
                    prop_assert_eq!(state.ball.pos, state.ball_home());
                }
            }
        }
    }
}
