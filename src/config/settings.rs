//! Configuration settings for the terminal Game of Life simulator

use crate::game_of_life::StartingPattern;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Side length of the square board.
    pub board_size: usize,
    pub pattern: StartingPattern,
    /// Generations advanced per batch before the continue prompt.
    pub generations_per_batch: usize,
    pub prompt_between_batches: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Pause between generation frames, in milliseconds.
    pub delay_ms: u64,
    /// How long the starting state stays on screen before the first tick.
    pub initial_pause_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub save_final_state: bool,
    pub format: OutputFormat,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                board_size: 6,
                pattern: StartingPattern::Beacon,
                generations_per_batch: 50,
                prompt_between_batches: true,
            },
            display: DisplayConfig {
                delay_ms: 250,
                initial_pause_ms: 1500,
            },
            output: OutputConfig {
                save_final_state: false,
                format: OutputFormat::Text,
                output_directory: PathBuf::from("output/final_states"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.board_size == 0 {
            anyhow::bail!("Board size must be at least 1");
        }

        if self.simulation.generations_per_batch == 0 {
            anyhow::bail!("Generations per batch must be positive");
        }

        // The named catalog templates are fixed 6x6 boards; any other size
        // can only be seeded randomly.
        if self.simulation.pattern != StartingPattern::Random
            && self.simulation.board_size != StartingPattern::template_size()
        {
            anyhow::bail!(
                "Pattern '{}' requires a board size of {}; size {} only supports 'random'",
                self.simulation.pattern.name(),
                StartingPattern::template_size(),
                self.simulation.board_size
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(board_size) = cli_overrides.board_size {
            self.simulation.board_size = board_size;
        }
        if let Some(pattern) = cli_overrides.pattern {
            self.simulation.pattern = pattern;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations_per_batch = generations;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.display.delay_ms = delay_ms;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
            self.output.save_final_state = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub board_size: Option<usize>,
    pub pattern: Option<StartingPattern>,
    pub generations: Option<usize>,
    pub delay_ms: Option<u64>,
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.simulation.board_size, 6);
        assert_eq!(settings.display.delay_ms, 250);
    }

    #[test]
    fn test_validation_rejects_zero_board() {
        let mut settings = Settings::default();
        settings.simulation.board_size = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_named_pattern_off_catalog_size() {
        let mut settings = Settings::default();
        settings.simulation.board_size = 10;
        assert!(settings.validate().is_err());

        settings.simulation.pattern = StartingPattern::Random;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.pattern = StartingPattern::Glider;
        settings.display.delay_ms = 100;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.pattern, StartingPattern::Glider);
        assert_eq!(loaded.display.delay_ms, 100);
        assert_eq!(loaded.simulation.generations_per_batch, 50);
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            board_size: Some(12),
            pattern: Some(StartingPattern::Random),
            generations: Some(10),
            delay_ms: Some(0),
            output_dir: None,
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.board_size, 12);
        assert_eq!(settings.simulation.pattern, StartingPattern::Random);
        assert_eq!(settings.simulation.generations_per_batch, 10);
        assert_eq!(settings.display.delay_ms, 0);
        assert!(settings.validate().is_ok());
    }
}
