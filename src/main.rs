use clap::Parser;

use beamcube::error::Error;
use beamcube::facelet::FaceCube;
use beamcube::scramble::scramble_to_str;
use beamcube::solver::{solver, SolverConfig};

/// Beam-search a scrambled cube and print the full search progress.
///
/// The cube must be arranged so that the white face is front and the top
/// face is red. Without `--facelet` a built-in reference scramble is solved.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 54-character facelet string, face order front/back/up/down/left/right.
    #[arg(short, long)]
    facelet: Option<String>,

    #[arg(short, long, default_value_t = 20)]
    beam: usize,

    #[arg(short, long, default_value_t = 9)]
    depth: u8,

    #[arg(long, default_value_t = 8)]
    redepth: u8,

    #[arg(short, long, default_value_t = 5)]
    rounds: usize,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let initial = match &cli.facelet {
        Some(facelet) => FaceCube::try_from(facelet.as_str())?,
        None => FaceCube::from_color_strs(
            "RWOWWWBWW",
            "YYYYYYYYY",
            "RRRRRRWRB",
            "ROOOOOOOO",
            "BBGBBBBBW",
            "WGGGGGGGG",
        )?,
    };
    println!("{}", initial);
    println!(
        "Initial cost: Cube={}, Naive={}",
        initial.cube_cost(),
        initial.naive_cost()
    );

    let config = SolverConfig {
        expansion_depth: cli.depth,
        recrawl_depth: cli.redepth,
        beam_width: cli.beam,
        rounds: cli.rounds,
    };
    let result = solver(&initial, &config)?;

    println!("Solution: {}", scramble_to_str(&result.solution));
    println!("Final cost: {}", result.cost);
    println!("Solve time: {:?}", result.solve_time);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("Error: {error}");
    }
}
