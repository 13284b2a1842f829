//! CLI for the toroidal Game of Life terminal simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_term::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, load_grid_from_file, save_grid_to_file, StartingPattern},
    simulation::Simulation,
    utils::{BoardRenderer, ColorOutput},
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_term")]
#[command(about = "Conway's Game of Life on a toroidal terminal board")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board size (overrides config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Starting pattern: beacon, blinker, toad, glider or random (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Generations per batch (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Delay between frames in milliseconds (overrides config)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Seed from a grid file instead of a named pattern
        #[arg(long)]
        grid_file: Option<PathBuf>,

        /// Save the final state to this directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run a single batch without the continue prompt
        #[arg(long)]
        no_prompt: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Show a starting state without running the simulation
    Preview {
        /// Starting pattern: beacon, blinker, toad, glider or random
        #[arg(short, long, default_value = "beacon")]
        pattern: String,

        /// Board size
        #[arg(short, long, default_value_t = 6)]
        size: usize,

        /// Preview a grid file instead of a named pattern
        #[arg(long)]
        grid_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            size,
            pattern,
            generations,
            delay_ms,
            grid_file,
            output,
            no_prompt,
            verbose,
        } => run_command(
            config, size, pattern, generations, delay_ms, grid_file, output, no_prompt, verbose,
        ),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Preview {
            pattern,
            size,
            grid_file,
        } => preview_command(pattern, size, grid_file),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_command(
    config_path: PathBuf,
    size: Option<usize>,
    pattern: Option<String>,
    generations: Option<usize>,
    delay_ms: Option<u64>,
    grid_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    no_prompt: bool,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("WELCOME TO THE GAME OF LIFE"));

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    let pattern = pattern
        .as_deref()
        .map(StartingPattern::from_name)
        .transpose()?;
    let cli_overrides = CliOverrides {
        board_size: size,
        pattern,
        generations,
        delay_ms,
        output_dir,
    };
    settings.merge_with_cli(&cli_overrides);

    if no_prompt {
        settings.simulation.prompt_between_batches = false;
    }

    if verbose {
        println!("Configuration:");
        println!("  Board size: {}", settings.simulation.board_size);
        println!("  Pattern: {}", settings.simulation.pattern.name());
        println!(
            "  Generations per batch: {}",
            settings.simulation.generations_per_batch
        );
        println!("  Delay: {}ms", settings.display.delay_ms);
        println!();
    }

    // Seed the simulation
    let mut simulation = match grid_file {
        Some(ref path) => {
            let grid = load_grid_from_file(path)
                .with_context(|| format!("Failed to load grid from {}", path.display()))?;
            Simulation::with_grid(settings.clone(), grid)?
        }
        None => {
            settings
                .validate()
                .context("Configuration validation failed")?;
            Simulation::new(settings.clone())?
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    simulation.render_initial(&mut out)?;

    // Batches of generations, continuing on request
    loop {
        simulation.run_batch(&mut out)?;

        if !settings.simulation.prompt_between_batches {
            break;
        }
        if !ask_continue(settings.simulation.generations_per_batch)? {
            break;
        }
    }

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Simulation ended after {} generations ({} cells living)",
            simulation.generation(),
            simulation.grid().living_count()
        ))
    );

    if settings.output.save_final_state {
        save_final_state(&simulation, &settings)?;
    }

    Ok(())
}

/// Ask whether to run another batch, V2-console style
fn ask_continue(batch_length: usize) -> Result<bool> {
    print!("(y or n) {} more turns?: ", batch_length);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read from stdin")?;

    Ok(answer.trim() == "y")
}

fn save_final_state(simulation: &Simulation, settings: &Settings) -> Result<()> {
    let dir = &settings.output.output_directory;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let path = match settings.output.format {
        OutputFormat::Text => {
            let path = dir.join("final_state.txt");
            save_grid_to_file(simulation.grid(), &path)?;
            path
        }
        OutputFormat::Json => {
            let path = dir.join("final_state.json");
            let content = serde_json::to_string_pretty(simulation.grid())
                .context("Failed to serialize final state")?;
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path
        }
    };

    println!(
        "{}",
        ColorOutput::success(&format!("Final state saved to {}", path.display()))
    );
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");
    let output_dir = directory.join("output/final_states");

    for dir in [&config_dir, &patterns_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create the catalog patterns as grid files
    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // Create example configuration variants
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut quick_config = Settings::default();
    quick_config.simulation.pattern = StartingPattern::Blinker;
    quick_config.simulation.generations_per_batch = 10;
    quick_config.display.delay_ms = 100;
    quick_config.to_file(&examples_dir.join("quick.yaml"))?;

    let mut soup_config = Settings::default();
    soup_config.simulation.board_size = 20;
    soup_config.simulation.pattern = StartingPattern::Random;
    soup_config.display.initial_pause_ms = 500;
    soup_config.to_file(&examples_dir.join("random_soup.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn preview_command(pattern: String, size: usize, grid_file: Option<PathBuf>) -> Result<()> {
    let grid = match grid_file {
        Some(ref path) => load_grid_from_file(path)
            .with_context(|| format!("Failed to load grid from {}", path.display()))?,
        None => StartingPattern::from_name(&pattern)?.seed_grid(size)?,
    };

    println!("Starting state ({}x{}):", grid.size, grid.size);
    println!("{}", BoardRenderer::render(&grid));

    println!("Living cells: {}", grid.living_count());
    println!(
        "Density: {:.1}%",
        (grid.living_count() as f64 / (grid.size * grid.size) as f64) * 100.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_term",
            "run",
            "--config",
            "test.yaml",
            "--pattern",
            "blinker",
            "--generations",
            "5",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/patterns/beacon.txt").exists());
        assert!(temp_dir.path().join("config/examples/quick.yaml").exists());
    }

    #[test]
    fn test_preview_command() {
        assert!(preview_command("toad".to_string(), 6, None).is_ok());
        assert!(preview_command("gosper".to_string(), 6, None).is_err());
    }
}
