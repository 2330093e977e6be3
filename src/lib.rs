//! A crate for manipulating and solving the 3x3 Rubik's cube with a
//! depth-bounded, multi-round beam search.

/// Module containing functions for scrambling the cube.

#[macro_use]
extern crate lazy_static;
pub mod scramble;

pub mod error;

/// Module containing 3x3 cube constants.
pub mod constants;
pub mod facelet;
pub mod kbest;
pub mod moves;
pub mod pruning;
pub mod solver;

pub use crate::error::Error;
pub use crate::moves::Move;
