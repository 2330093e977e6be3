use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Plane moves, Up, Down, Left, Right, Front, Back.
///
/// Each move is a 90° clockwise turn of its plane as viewed from outside that
/// face. The discriminants 0..=5 are the plane numbering used in search paths;
/// half-turns are represented as two consecutive entries of the same plane.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Move {
    U, D, L, R, F, B,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Move::U),
            "D" => Ok(Move::D),
            "L" => Ok(Move::L),
            "R" => Ok(Move::R),
            "F" => Ok(Move::F),
            "B" => Ok(Move::B),
            _ => Err(Error::InvalidScramble),
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = Error;

    fn try_from(plane: u8) -> Result<Self, Self::Error> {
        match plane {
            0 => Ok(Move::U),
            1 => Ok(Move::D),
            2 => Ok(Move::L),
            3 => Ok(Move::R),
            4 => Ok(Move::F),
            5 => Ok(Move::B),
            _ => Err(Error::InvalidPlane(plane)),
        }
    }
}
