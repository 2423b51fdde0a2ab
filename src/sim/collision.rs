//! Collision and boundary checks
//!
//! All checks are flat reflections: they report whether a velocity component
//! should flip and never change its magnitude.

use super::state::{Ball, Paddle, Side};

/// True if the ball touches or passes the top or bottom wall
pub fn hits_wall(ball: &Ball, field_height: f32) -> bool {
    ball.pos.y <= 0.0 || ball.pos.y >= field_height - ball.height
}

/// Paddle whose front edge the ball's leading edge has reached, if any.
///
/// The ball's vertical centre must lie strictly within the paddle's span.
/// The left paddle is checked first.
pub fn paddle_contact(ball: &Ball, left: &Paddle, right: &Paddle) -> Option<Side> {
    let ball_rect = ball.rect();
    let center_y = ball_rect.center().y;

    let left_rect = left.rect();
    if ball_rect.left() <= left_rect.right() && left_rect.spans_y(center_y) {
        return Some(Side::Left);
    }

    let right_rect = right.rect();
    if ball_rect.right() >= right_rect.left() && right_rect.spans_y(center_y) {
        return Some(Side::Right);
    }

    None
}

/// Side that scores if the ball has left the field horizontally
pub fn scoring_side(ball: &Ball, field_width: f32) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > field_width {
        Some(Side::Left)
    } else {
        None
    }
}
