use clap::{arg, command, Parser, Subcommand};
use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveUp},
    execute,
    style::{Attribute, Color as TermColor, SetBackgroundColor, Stylize},
};

use beamcube::error::Error;
use beamcube::facelet::{Color, FaceCube};
use beamcube::scramble::{gen_scramble, scramble_from_str, scramble_to_str};
use beamcube::solver::{solver, SolverConfig};
use spinners::Spinner;
use std::{
    io::{self, stdout},
    time::Instant,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "solves the cube using multi-round beam search")]
    #[clap(group(
    clap::ArgGroup::new("state")
        .required(true)
        .args(&["scramble", "facelet"]),
    ))]
    Solve {
        #[arg(short, long)]
        scramble: Option<String>,

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

        #[arg(short, long)]
        preview: bool,
    },

    #[command(about = "generates scramble")]
    Scramble {
        #[arg(short, long, default_value_t = 20)]
        length: usize,
        #[arg(short, long)]
        preview: bool,
    },
}

fn solve(
    scramble: &Option<String>,
    facelet: &Option<String>,
    config: &SolverConfig,
    preview: bool,
) -> Result<(), Error> {
    let initial = if let Some(scramble) = scramble {
        let scramble = scramble_from_str(scramble)?;
        FaceCube::solved().apply_moves(&scramble)
    } else if let Some(facelet) = facelet {
        FaceCube::try_from(facelet.as_str())?
    } else {
        return Ok(());
    };
    if preview {
        print_facelet(&initial)?;
    }
    solve_state(&initial, config)
}

fn solve_state(initial: &FaceCube, config: &SolverConfig) -> Result<(), Error> {
    let start = Instant::now();
    let mut spinner = Spinner::new(spinners::Spinners::Dots, "Solving".to_owned());
    let result = solver(initial, config)?;
    let end = Instant::now();

    spinner.stop_with_newline();

    println!("Solution: {}", scramble_to_str(&result.solution));
    println!("Move count: {}", result.solution.len());
    println!("Final cost: {}", result.cost);
    println!("Recurse calls: {}", result.recurse_calls);
    println!("Solve time: {:?}", result.solve_time);
    println!("Total time: {:?}", end - start);

    Ok(())
}

fn color_to_termcolor(color: Color) -> TermColor {
    match color {
        Color::W => TermColor::White,
        Color::R => TermColor::Red,
        Color::G => TermColor::Green,
        Color::B => TermColor::Blue,
        Color::Y => TermColor::Yellow,
        Color::O => TermColor::DarkYellow,
    }
}

fn print_face(face: &[Color], offset: u16) -> Result<(), io::Error> {
    for i in 0..3 {
        let layer = format!(
            "{}  {}  {}  {}",
            SetBackgroundColor(color_to_termcolor(face[3 * i])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 1])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 2])),
            SetBackgroundColor(TermColor::Reset)
        );

        println!("{layer}");

        if offset != 0 {
            execute!(stdout(), MoveRight(offset))?;
        }
    }

    Ok(())
}

fn print_facelet(facelet: &FaceCube) -> Result<(), io::Error> {
    let stdout = stdout();

    println!();
    execute!(&stdout, MoveRight(6))?;
    print_face(&facelet.up, 6)?; // up (red)
    execute!(&stdout, MoveLeft(6))?;
    print_face(&facelet.left, 0)?; // left (blue)
    execute!(&stdout, MoveRight(6), MoveUp(3))?;
    print_face(&facelet.front, 6)?; // front (white)
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(12))?;
    print_face(&facelet.right, 12)?; // right (green)
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(18))?;
    print_face(&facelet.back, 18)?; // back (yellow)
    execute!(&stdout, MoveLeft(12))?;
    print_face(&facelet.down, 6)?; // down (orange)
    execute!(&stdout, MoveLeft(12))?;
    println!();

    Ok(())
}

fn scramble(length: usize, preview: bool) -> Result<(), Error> {
    let ss = gen_scramble(length);
    let fc = FaceCube::solved().apply_moves(&ss);
    println!("Scramble: {}", scramble_to_str(&ss));
    if preview {
        print_facelet(&fc)?;
    }
    Ok(())
}

fn main() {
    let program = Cli::parse();

    let result = match &program.command {
        Some(Commands::Solve {
            scramble,
            facelet,
            beam,
            depth,
            redepth,
            rounds,
            preview,
        }) => {
            let config = SolverConfig {
                expansion_depth: *depth,
                recrawl_depth: *redepth,
                beam_width: *beam,
                rounds: *rounds,
            };
            solve(scramble, facelet, &config, *preview)
        }
        Some(Commands::Scramble { length, preview }) => scramble(*length, *preview),
        _ => Ok(()),
    };

    if let Err(error) = result {
        let styled = "Error:".with(TermColor::Red).attribute(Attribute::Bold);
        println!("{styled} {error}");
    }
}
