//! Main CLI application for the N-Queens solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use n_queens_solver::{
    board::{create_example_placements, load_placement_from_file},
    config::{CliOverrides, SearchEngine, Settings},
    queens::{QueensProblem, SolutionValidator},
    search::SolveError,
    utils::{ColorOutput, SolutionFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "n_queens_solver")]
#[command(about = "N-Queens Backtracking Solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an N-Queens problem
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board size (overrides config)
        #[arg(short, long)]
        size: Option<i64>,

        /// Search engine (overrides config)
        #[arg(short, long, value_enum)]
        engine: Option<SearchEngine>,

        /// Output directory (overrides config, implies saving)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show the board with coordinate rulers
        #[arg(long)]
        show_board: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and placement files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a placement file against the N-Queens constraints
    Validate {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Placement file (comma-separated column indices)
        #[arg(short, long)]
        placement: PathBuf,
    },

    /// Analyze a board size for solvability and expected effort
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board size (overrides config)
        #[arg(short, long)]
        size: Option<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config, size, engine, output, show_board, verbose,
        } => {
            solve_command(config, size, engine, output, show_board, verbose)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
        Commands::Validate { config, placement } => {
            validate_command(config, placement)
        }
        Commands::Analyze { config, size } => {
            analyze_command(config, size)
        }
    }
}

/// Board sizes below 1 are representable on the command line but never
/// reach the search; they are rejected here as a contract violation.
fn resolve_size_override(size: Option<i64>) -> Result<Option<usize>> {
    match size {
        None => Ok(None),
        Some(s) if s < 1 => Err(SolveError::InvalidSize(s).into()),
        Some(s) => Ok(Some(s as usize)),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Ok(Settings::default())
    }
}

fn solve_command(
    config_path: PathBuf,
    size: Option<i64>,
    engine: Option<SearchEngine>,
    output_dir: Option<PathBuf>,
    show_board: bool,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("👑 Starting N-Queens Solver"));

    let mut settings = load_settings(&config_path)?;

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        size: resolve_size_override(size)?,
        engine,
        output_dir: output_dir.clone(),
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Board size: {}", settings.board.size);
        println!("  Engine: {:?}", settings.solver.engine);
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
    }

    // Validate settings
    settings.validate()
        .context("Configuration validation failed")?;

    let mut problem = QueensProblem::new(settings.clone())
        .context("Failed to create queens problem")?;

    if verbose {
        let estimate = problem.estimate_solvability();
        println!("{}", estimate);
    }

    println!("{}", ColorOutput::info("🧮 Searching for a conflict-free placement..."));
    let solution = match problem.solve().context("Failed to solve queens problem")? {
        Some(solution) => solution,
        None => {
            println!("{}", ColorOutput::warning(&format!(
                "❌ No solution exists for a {0}×{0} board",
                settings.board.size
            )));
            return Ok(());
        }
    };

    println!("{}", ColorOutput::success(&format!(
        "✅ Found a solution in {:.3}s",
        solution.solve_time.as_secs_f64()
    )));

    println!("\n{}", SolutionFormatter::format_solution(&solution, show_board));

    // Save the solution
    if settings.output.save_solution {
        SolutionFormatter::save_solution(
            &solution,
            &settings.output.output_directory,
            &settings.output.format,
        ).context("Failed to save solution")?;

        println!("{}", ColorOutput::success(&format!(
            "💾 Solution saved to {}",
            settings.output.output_directory.display()
        )));
    }

    if verbose {
        println!("\n{}", problem.statistics());
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    // Create directories
    let config_dir = directory.join("config");
    let placements_dir = directory.join("input/placements");
    let output_dir = directory.join("output/solutions");

    for dir in [&config_dir, &placements_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create example placements
    create_example_placements(&placements_dir)
        .context("Failed to create example placements")?;
    println!("Created example placements in: {}", placements_dir.display());

    // Create example configuration variants
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // Smallest solvable board
    let mut small_config = Settings::default();
    small_config.board.size = 4;
    small_config.to_file(&examples_dir.join("small.yaml"))?;

    // Large board on the iterative engine
    let mut large_config = Settings::default();
    large_config.board.size = 24;
    large_config.solver.engine = SearchEngine::Iterative;
    large_config.to_file(&examples_dir.join("large.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- solve --config config/default.yaml");
    println!("3. Check a placement: cargo run -- validate --placement input/placements/classic_8.txt");

    Ok(())
}

fn validate_command(config_path: PathBuf, placement_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("🔍 Validating placement..."));

    let settings = load_settings(&config_path)?;

    let placement = load_placement_from_file(&placement_path)
        .with_context(|| format!("Failed to load placement from {}", placement_path.display()))?;

    println!("Placement ({} rows):", placement.size);
    println!("{}", SolutionFormatter::format_board_compact(&placement));

    let validator = SolutionValidator::new(settings);
    let result = validator.validate(&placement)
        .context("Validation failed")?;

    println!("{}", result);

    if result.is_valid {
        println!("{}", ColorOutput::success("✅ Placement is valid!"));
    } else {
        println!("{}", ColorOutput::error("❌ Placement is invalid"));
    }

    Ok(())
}

fn analyze_command(config_path: PathBuf, size: Option<i64>) -> Result<()> {
    println!("{}", ColorOutput::info("🔬 Analyzing board size..."));

    let mut settings = load_settings(&config_path)?;

    if let Some(size) = resolve_size_override(size)? {
        settings.board.size = size;
    }

    let problem = QueensProblem::new(settings.clone())
        .context("Failed to create problem for analysis")?;

    println!("Board: {0}×{0}", settings.board.size);
    println!("\n{}", problem.estimate_solvability());

    Ok(())
}
