use serde::{Serialize, Deserialize};
use crate::random::helpers::RandomExt;
use crate::random::unit_source::UnitSource;

/// How a jitter value is drawn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum RandData {
    // Uniform in [-spread / 2, spread / 2).
    Linear(f32),
    // Normal with mean 0 and this standard deviation.
    Gaussian(f32),
}

impl RandData {
    pub fn sample<R: UnitSource + ?Sized>(&self, rng: &mut R) -> f32 {
        match *self {
            RandData::Linear(spread) => rng.next_unit() * spread - spread / 2.0,
            RandData::Gaussian(standard_deviation) => rng.next_gaussian(0.0, standard_deviation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::unit_source::SequenceSource;

    #[test]
    fn linear_is_centred_on_zero() {
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.75]);
        let spread = RandData::Linear(4.0);
        assert_eq!(spread.sample(&mut rng), -2.0);
        assert_eq!(spread.sample(&mut rng), 0.0);
        assert_eq!(spread.sample(&mut rng), 1.0);
    }

    #[test]
    fn gaussian_with_zero_deviation_is_zero() {
        let mut rng = SequenceSource::new(vec![0.3, 0.8]);
        assert_eq!(RandData::Gaussian(0.0).sample(&mut rng), 0.0);
    }
}
