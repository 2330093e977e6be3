use thiserror::Error;

use crate::facelet::Color;

/// Errors raised for malformed cube states, plane indices and scrambles.
///
/// All of these indicate bad input or a caller bug and are raised at the
/// point of violation; none of them is a retryable runtime condition.
#[derive(Error, Debug)]
pub enum Error {
    /// The center facelet of a face holds the wrong color. Centers never
    /// move, so this can only come from a malformed input state.
    #[error("center of the {0} face must be {1}")]
    InvalidCenter(&'static str, Color),
    /// A color appears more or fewer than nine times across the 54 facelets.
    #[error("color {0} appears {1} times, expected 9")]
    InvalidColorCount(Color, u8),
    /// A facelet character outside the WRGBYO alphabet.
    #[error("invalid facelet color {0:?}")]
    InvalidColor(char),
    /// A raw color index outside 0..=5.
    #[error("invalid color index {0}")]
    InvalidColorIndex(u8),
    /// A face or facelet string of the wrong length.
    #[error("invalid facelet string")]
    InvalidFaceletString,
    /// A raw plane index outside 0..=5.
    #[error("invalid plane index {0}")]
    InvalidPlane(u8),
    /// A scramble token that is not one of the six plane letters.
    #[error("invalid scramble string")]
    InvalidScramble,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
