use crate::core::point::Point2;

/// Reflects the axes that a tile collision zeroed or altered.
///
/// `current` is the velocity after collision resolution, `old` the velocity before it.
/// Any axis that changed is replaced by the negated old value times its multiplier.
pub fn bounce_off_tiles(current: Point2, old: Point2, x_mult: f32, y_mult: f32) -> Point2 {
    let mut result = current;

    if current.x != old.x {
        result.x = -old.x * x_mult;
    }

    if current.y != old.y {
        result.y = -old.y * y_mult;
    }

    result
}
