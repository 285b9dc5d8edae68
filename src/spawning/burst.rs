use serde::{Serialize, Deserialize};
use crate::core::bolt_error::BoltError;
use crate::core::point::Point2;
use crate::random::helpers::RandomExt;
use crate::random::unit_source::UnitSource;
use crate::spawning::particle::Particle;

/// A radial explosion of particles.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BurstParams {
    pub amount: u32,
    pub spawn_radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_alpha: u8,
    pub max_alpha: u8,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for BurstParams {
    fn default() -> Self {
        BurstParams {
            amount: 20,
            spawn_radius: 8.0,
            min_speed: 1.0,
            max_speed: 4.0,
            min_alpha: 0,
            max_alpha: 0,
            min_scale: 1.0,
            max_scale: 1.0,
        }
    }
}

impl BurstParams {
    pub fn validate(&self) -> Result<(), BoltError> {
        if !self.spawn_radius.is_finite() || self.spawn_radius < 0.0 {
            return Err(BoltError::InvalidParams(format!("spawn_radius must be non-negative, got {}", self.spawn_radius)));
        }
        if !(self.min_speed <= self.max_speed) {
            return Err(BoltError::InvalidParams(format!("speed range {}..{} is inverted", self.min_speed, self.max_speed)));
        }
        if self.min_alpha > self.max_alpha {
            return Err(BoltError::InvalidParams(format!("alpha range {}..{} is inverted", self.min_alpha, self.max_alpha)));
        }
        if !(self.min_scale <= self.max_scale) {
            return Err(BoltError::InvalidParams(format!("scale range {}..{} is inverted", self.min_scale, self.max_scale)));
        }
        Ok(())
    }
}

/// Spawns `amount` particles around `center`, each flying off in a random direction.
///
/// Ranges are half-open; an empty range yields its lower bound.
pub fn burst<R: UnitSource + ?Sized>(center: Point2, params: &BurstParams, rng: &mut R) -> Vec<Particle> {
    (0..params.amount)
        .map(|_| {
            let position = center + rng.next_vector_circular(params.spawn_radius, params.spawn_radius);
            let velocity = rng.next_unit_vector() * rng.next_range(params.min_speed, params.max_speed);
            let alpha_span = params.max_alpha.saturating_sub(params.min_alpha) as usize;
            let alpha = params.min_alpha + rng.next_index(alpha_span) as u8;
            let scale = rng.next_range(params.min_scale, params.max_scale);
            Particle { position, velocity, alpha, scale }
        })
        .collect()
}
