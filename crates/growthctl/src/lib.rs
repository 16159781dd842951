//! growthctl - command-line front end for growth analytics
//!
//! Reads exported growth history and prints trend, forecast and
//! correlation reports.

pub mod commands;
pub mod config;
pub mod display;

pub use config::GrowthConfig;
