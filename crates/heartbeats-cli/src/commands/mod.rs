pub mod config;
pub mod gallery;
pub mod preview;
pub mod sample;
