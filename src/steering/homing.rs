use serde::{Serialize, Deserialize};
use crate::core::point::Point2;

/// Position and velocity of something that steers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematic {
    pub position: Point2,
    pub velocity: Point2,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct HomingParams {
    pub acceleration: f32,
    pub top_speed: f32,
    // Velocity of the target, if it should be led.
    pub target_velocity: Option<Point2>,
    // Inside this distance the actor brakes. Zero disables braking.
    pub buffer_distance: f32,
    pub buffer_strength: f32,
}

impl Default for HomingParams {
    fn default() -> Self {
        HomingParams {
            acceleration: 0.5,
            top_speed: 12.0,
            target_velocity: None,
            buffer_distance: 0.0,
            buffer_strength: 0.0,
        }
    }
}

/// Predicts where the target will be when reached under constant acceleration
/// and applies one step of acceleration towards that point.
///
/// Speed is capped at `top_speed`, then scaled by
/// `(distance / buffer_distance)^buffer_strength` when inside the buffer.
/// `acceleration` must be positive.
pub fn smooth_homing(actor: &mut Kinematic, target: Point2, params: &HomingParams) {
    let target_velocity = params.target_velocity.unwrap_or(Point2::ZERO);
    let acceleration = params.acceleration;

    let to_target = actor.position.direction_to(target);
    let distance_to_target = actor.position.distance(target);
    let relative_velocity = target_velocity - actor.velocity;

    let closing_speed = (-relative_velocity).dot(to_target);
    let eta = -closing_speed / acceleration
        + (closing_speed * closing_speed / (acceleration * acceleration) + 2.0 * distance_to_target / acceleration).sqrt();

    let impact = target + relative_velocity * eta;
    actor.velocity += actor.position.direction_to(impact) * acceleration;

    if actor.velocity.length() > params.top_speed {
        actor.velocity = actor.velocity.normalize_or_zero() * params.top_speed;
    }

    if params.buffer_distance > 0.0 && distance_to_target < params.buffer_distance {
        actor.velocity *= (distance_to_target / params.buffer_distance).powf(params.buffer_strength);
    }
}
