pub mod config;
pub mod export;
pub mod number_format;
