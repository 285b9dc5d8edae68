use serde::{Serialize, Deserialize};
use crate::core::bolt_error::BoltError;
use crate::core::bolt_params::BoltParams;
use crate::core::point::Point2;
use crate::core::rand_data::RandData;
use crate::random::helpers::RandomExt;
use crate::random::unit_source::UnitSource;
use crate::spawning::lightning::create_lightning_bolt;
use crate::spawning::particle::Particle;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TrailParams {
    // Particles per world unit of path.
    pub density: f32,
    // Half extent of the circular velocity jitter, used when `velocity` is None.
    pub jitter: f32,
    // Per-axis velocity model overriding `jitter`.
    pub velocity: Option<RandData>,
    pub scale: f32,
}

impl Default for TrailParams {
    fn default() -> Self {
        TrailParams {
            density: 0.4,
            jitter: 0.3,
            velocity: None,
            scale: 1.0,
        }
    }
}

impl TrailParams {
    pub fn validate(&self) -> Result<(), BoltError> {
        if !self.density.is_finite() || self.density < 0.0 {
            return Err(BoltError::InvalidParams(format!("trail density must be non-negative, got {}", self.density)));
        }
        if !self.jitter.is_finite() || !self.scale.is_finite() {
            return Err(BoltError::InvalidParams("trail jitter and scale must be finite".to_string()));
        }
        Ok(())
    }
}

/// Scatters particles evenly along every segment of `path`.
///
/// A segment of length `d` receives `ceil(d * density)` particles, the first one
/// sitting on the segment's start point. Degenerate segments get none.
pub fn lightning_trail<R: UnitSource + ?Sized>(
    path: &[Point2],
    params: &TrailParams,
    rng: &mut R,
) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(path.len());
    if !(params.density > 0.0) {
        return particles;
    }

    for segment in path.windows(2) {
        let (start, end) = (segment[0], segment[1]);
        let count = (end - start).length() * params.density;

        let mut j = 0u32;
        while (j as f32) < count {
            let position = start.lerp(end, j as f32 / count);
            let velocity = match params.velocity {
                Some(model) => Point2::new(model.sample(rng), model.sample(rng)),
                None => rng.next_vector_circular(params.jitter, params.jitter),
            };
            particles.push(Particle {
                position,
                velocity,
                alpha: 0,
                scale: params.scale,
            });
            j += 1;
        }
    }

    particles
}

/// Generates a bolt from `source` to `dest` and lays a particle trail along it.
pub fn lightning_particles<R: UnitSource + ?Sized>(
    source: Point2,
    dest: Point2,
    bolt: &BoltParams,
    trail: &TrailParams,
    rng: &mut R,
) -> Vec<Particle> {
    let path = create_lightning_bolt(source, dest, bolt, rng);
    lightning_trail(&path, trail, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::unit_source::SequenceSource;

    #[test]
    fn counts_round_up_per_segment() {
        let path = [Point2::ZERO, Point2::new(10.0, 0.0), Point2::new(10.0, 0.0), Point2::new(10.0, 2.0)];
        let mut rng = SequenceSource::new(vec![0.5]);
        let particles = lightning_trail(&path, &TrailParams::default(), &mut rng);
        // 10 * 0.4 = 4 exactly, then nothing, then 2 * 0.4 = 0.8 -> 1.
        assert_eq!(particles.len(), 5);
        assert_eq!(particles[0].position, Point2::ZERO);
        assert!((particles[1].position.x - 2.5).abs() < 1e-5);
        assert_eq!(particles[4].position, Point2::new(10.0, 0.0));
    }

    #[test]
    fn jitter_is_bounded() {
        let path = [Point2::ZERO, Point2::new(50.0, 50.0)];
        let mut rng = SequenceSource::new(vec![0.13, 0.97, 0.41, 0.66, 0.02]);
        for particle in lightning_trail(&path, &TrailParams::default(), &mut rng) {
            assert!(particle.velocity.length() <= 0.3 + 1e-6);
            assert_eq!(particle.scale, 1.0);
        }
    }

    #[test]
    fn velocity_model_overrides_jitter() {
        let path = [Point2::ZERO, Point2::new(5.0, 0.0)];
        let params = TrailParams { velocity: Some(RandData::Linear(2.0)), ..Default::default() };
        let mut rng = SequenceSource::new(vec![1.0, 0.0]);
        let particles = lightning_trail(&path, &params, &mut rng);
        assert_eq!(particles.len(), 2);
        assert!((particles[0].velocity.x - 1.0).abs() < 1e-5);
        assert_eq!(particles[0].velocity.y, -1.0);
    }

    #[test]
    fn zero_density_places_nothing() {
        let path = [Point2::ZERO, Point2::new(500.0, 0.0)];
        let params = TrailParams { density: 0.0, ..Default::default() };
        assert!(lightning_trail(&path, &params, &mut SequenceSource::default()).is_empty());
    }
}
