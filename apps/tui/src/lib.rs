// Export our modules for use in the binary and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod format;
pub mod geocoder;
pub mod map;
pub mod parties;
pub mod pipeline;
pub mod terminal;
pub mod ui;

pub use domain::{Dataset, DifClass};
