pub mod common;
pub mod u501_calculate_targets;
