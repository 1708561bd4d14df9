//! N-puzzle Solver - CLI
//!
//! Solves a sliding-tile board with bfs, dfs or ast and writes the search report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use npuzzle_search::{
    commands::{
        BenchmarkConfig, ScrambleConfig, SolveConfig, generate, run_benchmark, solve_board,
    },
    output::{format_report, print_benchmark_result, print_board, print_solve_report},
    solver::SearchConfig,
};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser)]
#[command(
    name = "npuzzle",
    about = "N-puzzle solver using breadth-first, depth-first and A* search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); `RUST_LOG` overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board and write the report
    Solve {
        /// Strategy: bfs, dfs or ast
        strategy: String,

        /// Comma-separated tiles, row-major, 0 for the blank (e.g. 1,2,5,3,4,0,6,7,8)
        board: String,

        /// File to write the report to
        #[arg(short, long, default_value = "output.txt")]
        output: PathBuf,

        /// Only print the report, don't write a file
        #[arg(long)]
        no_output: bool,

        /// Give up after expanding this many nodes
        #[arg(long)]
        max_nodes: Option<usize>,

        /// Print the plain report instead of the formatted one
        #[arg(long)]
        plain: bool,
    },

    /// Print a random solvable board
    Scramble {
        /// Side length of the board
        #[arg(short = 'n', long, default_value = "3")]
        size: usize,

        /// Number of random blank moves away from the goal
        #[arg(short, long, default_value = "30")]
        moves: usize,

        /// Seed for reproducible boards
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compare all strategies on scrambled boards
    Benchmark {
        /// Side length of the boards
        #[arg(short = 'n', long, default_value = "3")]
        size: usize,

        /// Number of boards
        #[arg(short, long, default_value = "20")]
        count: usize,

        /// Number of random blank moves per board
        #[arg(short, long, default_value = "20")]
        moves: usize,

        /// Seed for the scrambles
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Per-search expansion limit
        #[arg(long, default_value = "200000")]
        max_nodes: usize,
    },
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_micros()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Solve {
            strategy,
            board,
            output,
            no_output,
            max_nodes,
            plain,
        } => {
            let mut config = SolveConfig::new(strategy, board);
            config.output = (!no_output).then_some(output);
            config.search = SearchConfig {
                node_limit: max_nodes,
            };
            run_solve_command(&config, plain)
        }
        Commands::Scramble { size, moves, seed } => {
            run_scramble_command(&ScrambleConfig {
                dimension: size,
                moves,
                seed,
            })
        }
        Commands::Benchmark {
            size,
            count,
            moves,
            seed,
            max_nodes,
        } => {
            let mut config = BenchmarkConfig::new(size, count);
            config.scramble_moves = moves;
            config.seed = seed;
            config.search = SearchConfig::with_node_limit(max_nodes);
            run_benchmark_command(&config)
        }
    }
}

fn run_solve_command(config: &SolveConfig, plain: bool) -> Result<()> {
    let report = solve_board(config)?;
    if plain {
        print!("{}", format_report(&report.result));
    } else {
        print_solve_report(&report);
    }
    Ok(())
}

fn run_scramble_command(config: &ScrambleConfig) -> Result<()> {
    let board = generate(config)?;
    print_board(&board);
    let tiles: Vec<String> = board.tiles().iter().map(ToString::to_string).collect();
    println!("\n{}", tiles.join(","));
    Ok(())
}

fn run_benchmark_command(config: &BenchmarkConfig) -> Result<()> {
    println!(
        "Running benchmark on {} boards ({} scramble moves each)...",
        config.count, config.scramble_moves
    );
    let result = run_benchmark(config)?;
    print_benchmark_result(&result);
    Ok(())
}
