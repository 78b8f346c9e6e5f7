//! Example demonstrating puzzle generation.
//!
//! Generates one or more puzzles and prints the seed, problem, and solution
//! of each, both as 81-character strings and as a readable 9×9 block.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a specific puzzle by passing its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```

use clap::Parser;
use ninegrid_core::{DigitGrid, Position};
use ninegrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of the generated puzzles.
    #[arg(long, value_name = "LEVEL", default_value = "easy")]
    difficulty: Difficulty,

    /// Seed to reproduce (64 hexadecimal characters). Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new();

    for i in 0..args.count {
        let puzzle = match args.seed {
            Some(seed) => generator.generate_with_seed(args.difficulty, seed),
            None => generator.generate(args.difficulty),
        };

        if i > 0 {
            println!();
        }
        println!("Seed:");
        println!("  {}", puzzle.seed);
        println!("Problem ({} clues):", puzzle.problem.filled_count());
        println!("  {}", puzzle.problem);
        print_block(&puzzle.problem);
        println!("Solution:");
        println!("  {}", puzzle.solution);
        print_block(&puzzle.solution);
    }
}

fn print_block(grid: &DigitGrid) {
    for y in 0..9 {
        print!("  ");
        for x in 0..9 {
            match grid[Position::new(x, y)] {
                Some(digit) => print!("{digit} "),
                None => print!(". "),
            }
        }
        println!();
    }
}
