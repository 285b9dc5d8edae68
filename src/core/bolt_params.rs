use serde::{Serialize, Deserialize};
use crate::core::bolt_error::BoltError;

/// Length of path, in world units, covered by each random sample of a bolt.
pub const SAMPLE_SPACING: f32 = 16.0;

/// Shape of a lightning bolt.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BoltParams {
    // Maximum perpendicular offset of an interior point, in world units.
    pub sway: f32,
    // Higher values decorrelate neighbouring offsets faster. [0..2] looks sane.
    pub jaggedness_numerator: f32,
}

impl Default for BoltParams {
    fn default() -> Self {
        BoltParams {
            sway: 80.0,
            jaggedness_numerator: 1.0,
        }
    }
}

impl BoltParams {
    pub fn new(sway: f32, jaggedness_numerator: f32) -> Self {
        BoltParams { sway, jaggedness_numerator }
    }

    /// Checks the generator's preconditions. The generator itself never does.
    pub fn validate(&self) -> Result<(), BoltError> {
        if !self.sway.is_finite() || self.sway < 0.0 {
            return Err(BoltError::InvalidParams(format!(
                "sway must be finite and non-negative, got {}",
                self.sway
            )));
        }
        if !self.jaggedness_numerator.is_finite() || self.jaggedness_numerator < 0.0 {
            return Err(BoltError::InvalidParams(format!(
                "jaggedness_numerator must be finite and non-negative, got {}",
                self.jaggedness_numerator
            )));
        }
        Ok(())
    }
}
