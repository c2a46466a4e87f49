//! Collision detection and response against static platforms
//!
//! Axis-separated: the x pass and the y pass each walk every platform and push
//! the player out along one axis only. Each overlapping platform applies its
//! own correction in list order, so corrections from several platforms in the
//! same pass stack on top of each other.

use glam::Vec2;

use super::rect::Rect;

/// Result of resolving the y axis against the platform list
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisResolution {
    /// Whether a downward overlap snapped the player onto a platform top
    pub landed: bool,
}

/// Push the player out of every overlapping platform along x.
///
/// Direction comes from the sign of `vel.x`. Any overlap zeroes `vel.x`,
/// including a zero-velocity overlap which leaves position untouched.
pub fn resolve_x(pos: &mut Vec2, vel: &mut Vec2, size: Vec2, platforms: &[Rect]) {
    for plat in platforms {
        if Rect::from_pos_size(*pos, size).overlaps(plat) {
            if vel.x > 0.0 {
                pos.x = plat.x - size.x;
            } else if vel.x < 0.0 {
                pos.x = plat.right();
            }
            vel.x = 0.0;
        }
    }
}

/// Push the player out of every overlapping platform along y.
///
/// Falling snaps to the platform top and reports a landing; rising snaps to
/// the platform bottom.
pub fn resolve_y(pos: &mut Vec2, vel: &mut Vec2, size: Vec2, platforms: &[Rect]) -> AxisResolution {
    let mut result = AxisResolution::default();
    for plat in platforms {
        if Rect::from_pos_size(*pos, size).overlaps(plat) {
            if vel.y > 0.0 {
                pos.y = plat.y - size.y;
                vel.y = 0.0;
                result.landed = true;
            } else if vel.y < 0.0 {
                pos.y = plat.bottom();
                vel.y = 0.0;
            }
        }
    }
    result
}
