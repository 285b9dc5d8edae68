// Angles are radians throughout.

pub const PI: f32 = std::f32::consts::PI;
pub const PI_OVER_2: f32 = PI / 2.0;
pub const PI_OVER_4: f32 = PI / 4.0;
pub const TWO_PI: f32 = PI * 2.0;

/// Wraps `angle` into (-PI, PI].
pub fn wrap_angle(angle: f32) -> f32 {
    if angle > -PI && angle <= PI {
        return angle;
    }

    let wrapped = angle - TWO_PI * (angle / TWO_PI).round();
    if wrapped <= -PI {
        wrapped + TWO_PI
    } else if wrapped > PI {
        wrapped - TWO_PI
    } else {
        wrapped
    }
}

/// Turns from `current` towards `target` along the shorter arc, never by more than `max_step`.
pub fn smooth_rotate(current: f32, target: f32, max_step: f32) -> f32 {
    let current = wrap_angle(current);
    let target = wrap_angle(target);
    let delta = wrap_angle(target - current).clamp(-max_step, max_step);
    wrap_angle(current + delta)
}

/// Clamps `angle` into the arc running from `min` to `max`.
///
/// All three are wrapped first. When `min > max` after wrapping the arc crosses
/// the PI boundary; angles outside it snap to whichever bound is nearer.
pub fn clamp_angle(angle: f32, min: f32, max: f32) -> f32 {
    let angle = wrap_angle(angle);
    let min = wrap_angle(min);
    let max = wrap_angle(max);

    if min == max {
        return min;
    }

    if min < max {
        return angle.clamp(min, max);
    }

    if angle > max && angle < min {
        return if (angle - min).abs() < (angle - max).abs() { min } else { max };
    }

    angle
}
