use serde::{Serialize, Deserialize};
use crate::core::point::Point2;

/// A particle placement handed back to the caller, who owns spawning and drawing it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point2,
    pub velocity: Point2,
    // 0 is opaque.
    pub alpha: u8,
    pub scale: f32,
}
