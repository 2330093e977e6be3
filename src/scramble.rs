use std::str::FromStr;

use rand::random;

use crate::constants::{ALL_MOVES, N_PLANES};
use crate::pruning;
use crate::{error::Error, Move};

pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

pub fn scramble_to_str(s: &[Move]) -> String {
    let result: String = s
        .iter()
        .map(|m| Move::to_string(m))
        .fold("".to_string(), |acc, x| format!("{} {}", acc, x));
    result.trim_start().to_string()
}

/// Generates a random quarter-turn scramble, never emitting a fourth
/// consecutive turn of the same plane.
pub fn gen_scramble(length: usize) -> Vec<Move> {
    let mut scramble = Vec::with_capacity(length);
    while scramble.len() < length {
        let plane = ALL_MOVES[random::<u16>() as usize % N_PLANES];
        if pruning::fourth_repeat(&scramble, plane) {
            continue;
        }
        scramble.push(plane);
    }
    scramble
}
