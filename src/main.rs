use clap::Parser;
use log::info;
use maze_3d_generator::error::MazeError;
use maze_3d_generator::gen::{Maze, MazeConfig};

/// Generates a 3D maze and prints every floor, lowest first.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of columns
    #[arg(short, long, default_value_t = 10)]
    length: usize,

    /// Number of rows
    #[arg(short, long, default_value_t = 5)]
    width: usize,

    /// Number of floors
    #[arg(short = 'H', long, default_value_t = 4)]
    height: usize,

    /// Likelihood of a passage between rooms on the same row, between 0 and 1 exclusive
    #[arg(long, default_value_t = 0.5)]
    horizontal_bias: f64,

    /// Likelihood of a passage between rooms in the same column, between 0 and 1 exclusive
    #[arg(long, default_value_t = 0.5)]
    vertical_bias: f64,

    /// Seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also print the wall mask of every cell
    #[arg(short, long)]
    masks: bool,
}

fn main() -> Result<(), MazeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut maze = Maze::from_config(MazeConfig {
        length: args.length,
        width: args.width,
        height: args.height,
        horizontal_bias: args.horizontal_bias,
        vertical_bias: args.vertical_bias,
        seed: args.seed,
    })?;
    info!(
        "generating {}x{}x{} maze (bias {} / {}, seed {:?})",
        maze.length(),
        maze.width(),
        maze.height(),
        args.horizontal_bias,
        args.vertical_bias,
        args.seed
    );
    maze.build();

    print!("{}", maze);
    if args.masks {
        print!("{}", maze.format_masks());
    }
    Ok(())
}
