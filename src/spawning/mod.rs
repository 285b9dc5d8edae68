pub mod lightning;
pub mod trail;
pub mod burst;
pub mod particle;
