#![warn(clippy::pedantic)]

pub mod config_error;
pub mod logging;
pub mod plate;
pub mod plate_config;
pub mod settings;
pub mod solution;
pub mod solver;
pub mod target;
pub mod weight;
pub mod weight_unit;
