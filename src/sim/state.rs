//! Match state and core simulation types
//!
//! Everything a Pong match needs between ticks lives in `MatchState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::serve::{ServeRandom, serve_velocity};
use crate::settings::PongSettings;

/// Which player a paddle or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels moved per tick while a key is held
    pub speed: f32,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    /// Lowest valid `pos.y` for a field of the given height
    #[inline]
    pub fn max_y(&self, field_height: f32) -> f32 {
        field_height - self.height
    }

    /// Apply one tick of held movement keys.
    ///
    /// Up and down are independent checks against the position the paddle
    /// had before this call, so holding both cancels out mid-field.
    pub fn apply_input(&mut self, up: bool, down: bool, field_height: f32) {
        let start_y = self.pos.y;
        let max_y = self.max_y(field_height);
        if up && start_y > 0.0 {
            self.pos.y -= self.speed;
        }
        if down && start_y < max_y {
            self.pos.y += self.speed;
        }
        self.pos.y = self.pos.y.clamp(0.0, max_y.max(0.0));
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Complete state of one Pong match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub field_width: f32,
    pub field_height: f32,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
    /// Per-axis speed given to the ball on every serve
    pub serve_speed: f32,
}

impl MatchState {
    /// Fresh match: paddles vertically centred, ball centred and served
    pub fn new(settings: &PongSettings, rng: &mut impl ServeRandom) -> Self {
        let paddle_y = settings.field_height / 2.0 - settings.paddle_height / 2.0;
        let paddle = |x: f32| Paddle {
            pos: Vec2::new(x, paddle_y),
            width: settings.paddle_width,
            height: settings.paddle_height,
            speed: settings.paddle_speed,
        };

        let mut state = Self {
            field_width: settings.field_width,
            field_height: settings.field_height,
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                width: settings.ball_width,
                height: settings.ball_height,
            },
            left: paddle(settings.paddle_margin),
            right: paddle(settings.field_width - settings.paddle_margin - settings.paddle_width),
            score: Score::default(),
            serve_speed: settings.ball_speed,
        };
        state.serve(rng);
        state
    }

    pub fn field(&self) -> Rect {
        Rect::new(Vec2::ZERO, self.field_width, self.field_height)
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Field centre position for the ball's top-left corner
    pub fn ball_home(&self) -> Vec2 {
        self.field().centered_origin(self.ball.width, self.ball.height)
    }

    /// Re-centre the ball and give it a freshly randomized velocity
    pub fn serve(&mut self, rng: &mut impl ServeRandom) {
        self.ball.pos = self.ball_home();
        self.ball.vel = serve_velocity(self.serve_speed, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_match_layout() {
        let mut rng = Pcg32::seed_from_u64(1);
        let state = MatchState::new(&PongSettings::default(), &mut rng);

        assert_eq!(state.left.pos, Vec2::new(50.0, 250.0));
        assert_eq!(state.right.pos, Vec2::new(740.0, 250.0));
        assert_eq!(state.ball.pos, Vec2::new(395.0, 295.0));
        assert_eq!(state.ball.vel.x.abs(), 7.0);
        assert_eq!(state.ball.vel.y.abs(), 7.0);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_paddle_independent_checks() {
        let mut paddle = Paddle {
            pos: Vec2::new(50.0, 250.0),
            width: 10.0,
            height: 100.0,
            speed: 10.0,
        };

        paddle.apply_input(true, false, 600.0);
        assert_eq!(paddle.pos.y, 240.0);
        paddle.apply_input(false, true, 600.0);
        assert_eq!(paddle.pos.y, 250.0);

        // Both held mid-field: each check fires and they cancel
        paddle.apply_input(true, true, 600.0);
        assert_eq!(paddle.pos.y, 250.0);
    }

    #[test]
    fn test_paddle_both_keys_at_edges() {
        let mut paddle = Paddle {
            pos: Vec2::new(50.0, 0.0),
            width: 10.0,
            height: 100.0,
            speed: 10.0,
        };
        // Up check fails at the top, down still fires
        paddle.apply_input(true, true, 600.0);
        assert_eq!(paddle.pos.y, 10.0);

        paddle.pos.y = 500.0;
        paddle.apply_input(true, true, 600.0);
        assert_eq!(paddle.pos.y, 490.0);
    }

    #[test]
    fn test_paddle_clamped_with_uneven_speed() {
        let mut paddle = Paddle {
            pos: Vec2::new(50.0, 4.0),
            width: 10.0,
            height: 100.0,
            speed: 10.0,
        };
        paddle.apply_input(true, false, 600.0);
        assert_eq!(paddle.pos.y, 0.0);

        paddle.pos.y = 495.0;
        paddle.apply_input(false, true, 600.0);
        assert_eq!(paddle.pos.y, 500.0);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Left);
        score.award(Side::Right);
        score.award(Side::Right);
        assert_eq!(score.get(Side::Left), 1);
        assert_eq!(score.get(Side::Right), 2);
        assert_eq!(Side::Left.opponent(), Side::Right);
    }
}
