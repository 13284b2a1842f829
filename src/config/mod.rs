//! Configuration management for the terminal Game of Life simulator

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
};
