//! Collision predicates for the rectangular arena
//!
//! Pure geometry: each check reports whether a contact happened and leaves
//! the response (velocity flips, scoring) to the caller. No check corrects
//! position, so a ball may sit past a boundary for a frame before bouncing.

use glam::Vec2;

/// Ball touches the top or bottom edge of an arena `height` tall
#[inline]
pub fn touches_top_or_bottom(pos: Vec2, radius: f32, height: f32) -> bool {
    pos.y + radius >= height || pos.y - radius <= 0.0
}

/// Ball's vertical extent intersects the paddle span `[paddle_y, paddle_y + height)`
#[inline]
pub fn overlaps_paddle_span(pos: Vec2, radius: f32, paddle_y: f32, paddle_height: f32) -> bool {
    if pos.y + radius <= paddle_y {
        // Above
        return false;
    }
    if pos.y - radius >= paddle_y + paddle_height {
        // Below
        return false;
    }
    true
}

/// Ball centre is within `radius` of the paddle's x coordinate, on either side
#[inline]
pub fn within_paddle_reach(pos: Vec2, radius: f32, paddle_x: f32) -> bool {
    if pos.x >= paddle_x {
        pos.x - paddle_x <= radius
    } else {
        paddle_x - pos.x <= radius
    }
}

/// Ball contacts a paddle whose top-left corner is `paddle_pos`
///
/// The horizontal test only measures distance to the paddle's x coordinate;
/// the paddle width does not widen the hit span.
pub fn ball_paddle_contact(pos: Vec2, radius: f32, paddle_pos: Vec2, paddle_height: f32) -> bool {
    overlaps_paddle_span(pos, radius, paddle_pos.y, paddle_height)
        && within_paddle_reach(pos, radius, paddle_pos.x)
}

/// Ball has reached the left scoring edge
#[inline]
pub fn past_left_wall(pos: Vec2, radius: f32) -> bool {
    pos.x - radius <= 0.0
}

/// Ball has reached the right scoring edge of an arena `width` wide
#[inline]
pub fn past_right_wall(pos: Vec2, radius: f32, width: f32) -> bool {
    pos.x + radius >= width
}
