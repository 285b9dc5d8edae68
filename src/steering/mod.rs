pub mod homing;
pub mod bounce;
