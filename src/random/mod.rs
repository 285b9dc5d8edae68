pub mod unit_source;
pub mod helpers;
pub mod weighted;
