use crate::facelet::Color;
use crate::moves::Move;

/// Number of facelet colors.
pub const N_COLORS: usize = 6;
/// Number of rotatable planes.
pub const N_PLANES: usize = 6;
/// Number of facelets on the whole cube.
pub const N_FACELETS: usize = 54;
/// Number of corner pieces.
pub const N_CORNERS: usize = 8;
/// Number of edge pieces.
pub const N_EDGES: usize = 12;
/// Index of the fixed center facelet within a face.
pub const CENTER: usize = 4;
/// Sentinel cost held by unfilled [`KBest`](crate::kbest::KBest) slots.
pub const MAX_COST: u32 = 1000;
/// Piece score of a fully solved cube: 8 corners and 12 edges, 2 points each.
pub const MAX_PIECE_SCORE: u32 = 40;

/// The six facelet colors in index order.
pub const ALL_COLORS: [Color; N_COLORS] = [
    Color::W,
    Color::R,
    Color::G,
    Color::B,
    Color::Y,
    Color::O,
];

/// The six planes in search branch order (plane indices 0..=5).
pub const ALL_MOVES: [Move; N_PLANES] = [Move::U, Move::D, Move::L, Move::R, Move::F, Move::B];
