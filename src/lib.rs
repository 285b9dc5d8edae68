pub mod core;
pub mod random;
pub mod spawning;
pub mod steering;
pub mod targeting;
pub mod management;

#[cfg(feature = "bevy")]
pub mod plugin;

pub use crate::core::bolt_params::BoltParams;
pub use crate::core::point::Point2;
pub use crate::random::unit_source::{GenRng, SequenceSource, UnitSource};
pub use crate::spawning::lightning::create_lightning_bolt;
