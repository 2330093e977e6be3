use std::fmt;

use self::Color::*;
use crate::constants::*;
use crate::error::Error;
use crate::moves::Move;

/// The six facelet colors: White, Red, Green, Blue, Yellow, Orange.
///
/// The discriminants 0..=5 are the raw color indices of the encoded form.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    W, R, G, B, Y, O,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<char> for Color {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'W' => Ok(W),
            'R' => Ok(R),
            'G' => Ok(G),
            'B' => Ok(B),
            'Y' => Ok(Y),
            'O' => Ok(O),
            _ => Err(Error::InvalidColor(c)),
        }
    }
}

impl From<Color> for char {
    fn from(color: Color) -> Self {
        match color {
            W => 'W',
            R => 'R',
            G => 'G',
            B => 'B',
            Y => 'Y',
            O => 'O',
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(W),
            1 => Ok(R),
            2 => Ok(G),
            3 => Ok(B),
            4 => Ok(Y),
            5 => Ok(O),
            _ => Err(Error::InvalidColorIndex(index)),
        }
    }
}

/// Canonical flattened encoding of a cube state, in the fixed face order
/// front, back, up, down, left, right. Used as a hashable fingerprint for
/// deduplication; it carries no normalization beyond flattening.
pub type Encoded = [Color; N_FACELETS];

/// Cube state at the facelet level.
///
/// Each face is 9 colors ordered lexicographically when looking directly at
/// that face. The center facelet of each face is fixed: front=W, up=R,
/// right=G, left=B, back=Y, down=O (see [`FaceCube::validate`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceCube {
    pub front: [Color; 9],
    pub back: [Color; 9],
    pub up: [Color; 9],
    pub down: [Color; 9],
    pub left: [Color; 9],
    pub right: [Color; 9],
}

/// Number of positions at which two faces differ.
pub fn hamming_dist(a: &[Color; 9], b: &[Color; 9]) -> u32 {
    a.iter().zip(b).filter(|(x, y)| x != y).count() as u32
}

/// The 90° clockwise permutation of a single face, fixing the center.
fn rotate_clockwise(face: [Color; 9]) -> [Color; 9] {
    [
        face[6], face[3], face[0], face[7], face[4], face[1], face[8], face[5], face[2],
    ]
}

fn face_from_str(s: &str) -> Result<[Color; 9], Error> {
    if s.chars().count() != 9 {
        return Err(Error::InvalidFaceletString);
    }
    let mut face = [W; 9];
    for (i, c) in s.chars().enumerate() {
        face[i] = Color::try_from(c)?;
    }
    Ok(face)
}

fn face_from_indices(indices: &[u8; 9]) -> Result<[Color; 9], Error> {
    let mut face = [W; 9];
    for (i, &v) in indices.iter().enumerate() {
        face[i] = Color::try_from(v)?;
    }
    Ok(face)
}

fn face_to_str(face: &[Color; 9]) -> String {
    face.iter().map(|&c| char::from(c)).collect()
}

/// The unique correct facelet triple of each corner location, in the order
/// front-up-left, front-up-right, front-down-left, front-down-right,
/// up-left-back, up-right-back, back-right-down, back-left-down.
#[rustfmt::skip]
const CORRECT_CORNERS: [[Color; 3]; N_CORNERS] = [
    [W, R, B],
    [W, R, G],
    [W, O, B],
    [W, O, G],
    [R, B, Y],
    [R, G, Y],
    [Y, G, O],
    [Y, B, O],
];

/// All non-identity arrangements of a corner triple, in lexicographic index
/// order.
fn permutations(vals: [Color; 3]) -> Vec<[Color; 3]> {
    const ORDERS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    ORDERS[1..]
        .iter()
        .map(|p| [vals[p[0]], vals[p[1]], vals[p[2]]])
        .collect()
}

lazy_static! {
    /// For each corner location, the 5 arrangements of its correct triple
    /// that mean the piece is in place but misoriented.
    static ref MISORIENTED_CORNERS: [Vec<[Color; 3]>; N_CORNERS] =
        CORRECT_CORNERS.map(permutations);
}

impl FaceCube {
    /// A solved cube: every face monochrome in its center color.
    pub fn solved() -> Self {
        Self {
            front: [W; 9],
            back: [Y; 9],
            up: [R; 9],
            down: [O; 9],
            left: [B; 9],
            right: [G; 9],
        }
    }

    /// Builds a state from six 9-character color strings (alphabet WRGBYO).
    pub fn from_color_strs(
        front: &str,
        back: &str,
        up: &str,
        down: &str,
        left: &str,
        right: &str,
    ) -> Result<Self, Error> {
        let fc = Self {
            front: face_from_str(front)?,
            back: face_from_str(back)?,
            up: face_from_str(up)?,
            down: face_from_str(down)?,
            left: face_from_str(left)?,
            right: face_from_str(right)?,
        };
        fc.validate()?;
        Ok(fc)
    }

    /// Builds a state from six 9-element raw color index sequences (0..=5).
    pub fn from_indices(
        front: &[u8; 9],
        back: &[u8; 9],
        up: &[u8; 9],
        down: &[u8; 9],
        left: &[u8; 9],
        right: &[u8; 9],
    ) -> Result<Self, Error> {
        let fc = Self {
            front: face_from_indices(front)?,
            back: face_from_indices(back)?,
            up: face_from_indices(up)?,
            down: face_from_indices(down)?,
            left: face_from_indices(left)?,
            right: face_from_indices(right)?,
        };
        fc.validate()?;
        Ok(fc)
    }

    /// Flattens the state to its canonical encoding.
    pub fn encode(&self) -> Encoded {
        let mut encoded = [W; N_FACELETS];
        encoded[0..9].copy_from_slice(&self.front);
        encoded[9..18].copy_from_slice(&self.back);
        encoded[18..27].copy_from_slice(&self.up);
        encoded[27..36].copy_from_slice(&self.down);
        encoded[36..45].copy_from_slice(&self.left);
        encoded[45..54].copy_from_slice(&self.right);
        encoded
    }

    /// Opposite of [`FaceCube::encode`]; re-validates the state.
    pub fn decode(encoded: &Encoded) -> Result<Self, Error> {
        let mut fc = Self::solved();
        fc.front.copy_from_slice(&encoded[0..9]);
        fc.back.copy_from_slice(&encoded[9..18]);
        fc.up.copy_from_slice(&encoded[18..27]);
        fc.down.copy_from_slice(&encoded[27..36]);
        fc.left.copy_from_slice(&encoded[36..45]);
        fc.right.copy_from_slice(&encoded[45..54]);
        fc.validate()?;
        Ok(fc)
    }

    fn named_faces(&self) -> [(&'static str, &[Color; 9]); N_PLANES] {
        [
            ("front", &self.front),
            ("back", &self.back),
            ("up", &self.up),
            ("down", &self.down),
            ("left", &self.left),
            ("right", &self.right),
        ]
    }

    /// Checks the state invariants: fixed center colors and exactly 9
    /// facelets of each color.
    pub fn validate(&self) -> Result<(), Error> {
        let centers = [
            ("front", self.front[CENTER], W),
            ("up", self.up[CENTER], R),
            ("right", self.right[CENTER], G),
            ("left", self.left[CENTER], B),
            ("back", self.back[CENTER], Y),
            ("down", self.down[CENTER], O),
        ];
        for (name, actual, expected) in centers {
            if actual != expected {
                return Err(Error::InvalidCenter(name, expected));
            }
        }
        let mut counts = [0u8; N_COLORS];
        for color in self.encode() {
            counts[color as usize] += 1;
        }
        for (&color, count) in ALL_COLORS.iter().zip(counts) {
            if count != 9 {
                return Err(Error::InvalidColorCount(color, count));
            }
        }
        Ok(())
    }

    /// Rotates a plane 90° clockwise, as viewed from outside that face.
    ///
    /// Permutes the face's own 9 facelets and cycles the three adjacent
    /// facelets on each of the four neighboring faces. Rotating any plane
    /// four times is the identity.
    pub fn rotate(&mut self, plane: Move) {
        match plane {
            Move::U => {
                self.up = rotate_clockwise(self.up);
                for i in 0..3 {
                    let tmp = self.front[i];
                    self.front[i] = self.right[i];
                    self.right[i] = self.back[i];
                    self.back[i] = self.left[i];
                    self.left[i] = tmp;
                }
            }
            Move::D => {
                self.down = rotate_clockwise(self.down);
                for i in 6..9 {
                    let tmp = self.front[i];
                    self.front[i] = self.left[i];
                    self.left[i] = self.back[i];
                    self.back[i] = self.right[i];
                    self.right[i] = tmp;
                }
            }
            Move::L => {
                self.left = rotate_clockwise(self.left);
                for (f, u, b, d) in [(0, 0, 8, 0), (3, 3, 5, 3), (6, 6, 2, 6)] {
                    let tmp = self.front[f];
                    self.front[f] = self.up[u];
                    self.up[u] = self.back[b];
                    self.back[b] = self.down[d];
                    self.down[d] = tmp;
                }
            }
            Move::R => {
                self.right = rotate_clockwise(self.right);
                for (f, d, b, u) in [(2, 2, 6, 2), (5, 5, 3, 5), (8, 8, 0, 8)] {
                    let tmp = self.front[f];
                    self.front[f] = self.down[d];
                    self.down[d] = self.back[b];
                    self.back[b] = self.up[u];
                    self.up[u] = tmp;
                }
            }
            Move::F => {
                self.front = rotate_clockwise(self.front);
                for (u, l, d, r) in [(6, 8, 2, 0), (7, 5, 1, 3), (8, 2, 0, 6)] {
                    let tmp = self.up[u];
                    self.up[u] = self.left[l];
                    self.left[l] = self.down[d];
                    self.down[d] = self.right[r];
                    self.right[r] = tmp;
                }
            }
            Move::B => {
                self.back = rotate_clockwise(self.back);
                for (u, r, d, l) in [(0, 2, 8, 6), (1, 5, 7, 3), (2, 8, 6, 0)] {
                    let tmp = self.up[u];
                    self.up[u] = self.right[r];
                    self.right[r] = self.down[d];
                    self.down[d] = self.left[l];
                    self.left[l] = tmp;
                }
            }
        }
    }

    /// Folds a move sequence over a copy of the state.
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        let mut fc = *self;
        for &m in moves {
            fc.rotate(m);
        }
        fc
    }

    /// Number of facelets at which two states differ.
    pub fn hamming_dist(&self, other: &Self) -> u32 {
        hamming_dist(&self.front, &other.front)
            + hamming_dist(&self.back, &other.back)
            + hamming_dist(&self.up, &other.up)
            + hamming_dist(&self.down, &other.down)
            + hamming_dist(&self.left, &other.left)
            + hamming_dist(&self.right, &other.right)
    }

    /// Number of facelets with the wrong color for their face.
    pub fn naive_cost(&self) -> u32 {
        hamming_dist(&self.front, &[W; 9])
            + hamming_dist(&self.up, &[R; 9])
            + hamming_dist(&self.right, &[G; 9])
            + hamming_dist(&self.left, &[B; 9])
            + hamming_dist(&self.back, &[Y; 9])
            + hamming_dist(&self.down, &[O; 9])
    }

    /// Piece-aware cost: pieces in the wrong location count full, corners in
    /// the correct location with the wrong orientation count half. 0 means
    /// solved, 40 is the worst score.
    ///
    /// This is the primary cost used for search pruning; it tracks physical
    /// move distance better than [`FaceCube::naive_cost`].
    pub fn cube_cost(&self) -> u32 {
        let mut n_correct = 0;
        let mut n_half = 0;

        let actuals: [[Color; 3]; N_CORNERS] = [
            [self.front[0], self.up[6], self.left[2]],
            [self.front[2], self.up[8], self.right[0]],
            [self.front[6], self.down[0], self.left[8]],
            [self.front[8], self.down[2], self.right[6]],
            [self.up[0], self.left[0], self.back[2]],
            [self.up[2], self.right[2], self.back[0]],
            [self.back[6], self.right[8], self.down[8]],
            [self.back[8], self.left[6], self.down[6]],
        ];
        for ((actual, correct), half) in actuals
            .iter()
            .zip(&CORRECT_CORNERS)
            .zip(MISORIENTED_CORNERS.iter())
        {
            if actual == correct {
                n_correct += 1;
            } else if half.contains(actual) {
                n_half += 1;
            }
        }

        // Edges get no partial-orientation credit.
        let edges: [(Color, Color, Color, Color); N_EDGES] = [
            (self.front[1], W, self.up[7], R),
            (self.front[3], W, self.left[5], B),
            (self.front[5], W, self.right[3], G),
            (self.front[7], W, self.down[1], O),
            (self.up[3], R, self.left[1], B),
            (self.up[5], R, self.right[1], G),
            (self.down[3], O, self.left[7], B),
            (self.down[5], O, self.right[7], G),
            (self.back[1], Y, self.up[1], R),
            (self.back[5], Y, self.left[3], B),
            (self.back[3], Y, self.right[5], G),
            (self.back[7], Y, self.down[7], O),
        ];
        for (a, want_a, b, want_b) in edges {
            if a == want_a && b == want_b {
                n_correct += 1;
            }
        }

        MAX_PIECE_SCORE - 2 * n_correct - n_half
    }
}

impl Default for FaceCube {
    fn default() -> Self {
        Self::solved()
    }
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;

    /// Parses a 54-character facelet string in canonical face order
    /// (front, back, up, down, left, right).
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.chars().count() != N_FACELETS {
            return Err(Error::InvalidFaceletString);
        }
        let mut encoded = [W; N_FACELETS];
        for (i, c) in s.chars().enumerate() {
            encoded[i] = Color::try_from(c)?;
        }
        Self::decode(&encoded)
    }
}

impl fmt::Display for FaceCube {
    /// Human-readable dump: one line per face with the colors grouped in
    /// rows of 3 and a count of facelets matching that face's center.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, face) in self.named_faces() {
            let s = face_to_str(face);
            let matches = face.iter().filter(|&&c| c == face[CENTER]).count();
            writeln!(
                f,
                "{:>6}: {} {} {} ({} matches)",
                name,
                &s[0..3],
                &s[3..6],
                &s[6..9],
                matches
            )?;
        }
        Ok(())
    }
}

impl fmt::Debug for FaceCube {
    /// Machine-reconstructable representation:
    /// `FaceCube(front='...', back='...', ...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self
            .named_faces()
            .iter()
            .map(|(name, face)| format!("{}='{}'", name, face_to_str(face)))
            .collect();
        write!(f, "FaceCube({})", faces.join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn scrambled() -> FaceCube {
        FaceCube::from_color_strs(
            "OORYWRRGY",
            "WBRRYWWOW",
            "YOOGRYYWB",
            "WOOWOGBYR",
            "GWGRBBOBB",
            "YRGBGGBYG",
        )
        .unwrap()
    }

    #[test]
    fn test_validate() {
        let mut cube = FaceCube::solved();
        cube.validate().unwrap();
        for plane in ALL_MOVES {
            for _ in 0..4 {
                cube.rotate(plane);
                cube.validate().unwrap();
            }
        }
    }

    #[test]
    fn test_four_rotations_do_nothing() {
        let solved = FaceCube::solved();
        for plane in ALL_MOVES {
            let mut cube = FaceCube::solved();
            for i in 0..4 {
                cube.rotate(plane);
                if i == 3 {
                    assert_eq!(cube, solved);
                } else {
                    assert_ne!(cube, solved);
                }
            }
        }
    }

    #[test]
    fn test_hamming() {
        let solved = FaceCube::solved();
        for plane in ALL_MOVES {
            let mut rotated = FaceCube::solved();
            rotated.rotate(plane);
            assert_eq!(rotated.hamming_dist(&solved), 12);
            assert_eq!(solved.hamming_dist(&rotated), 12);
            assert_eq!(rotated.naive_cost(), 12);
        }
        assert_eq!(solved.hamming_dist(&solved), 0);
    }

    #[test]
    fn test_zero_cost() {
        let solved = FaceCube::solved();
        assert_eq!(solved.naive_cost(), 0);
        assert_eq!(solved.cube_cost(), 0);
    }

    #[test]
    fn test_worst_cost() {
        let s = scrambled();
        assert_eq!(s.naive_cost(), 40);
        assert_eq!(s.cube_cost(), 40);
    }

    #[test]
    fn test_rotate_back() {
        let mut rotated = scrambled();
        rotated.rotate(Move::B);
        let expected = FaceCube::from_color_strs(
            "OORYWRRGY",
            "WRWOYBWWR",
            "GGGGRYYWB",
            "WOOWOGGRO",
            "OWGOBBYBB",
            "YRRBGYBYB",
        )
        .unwrap();
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_rotate_down() {
        let mut rotated = FaceCube::from_color_strs(
            "OORYWRRGY",
            "WRWOYBWWR",
            "GGGGRYYWB",
            "WOOWOGGRO",
            "OWGOBBYBB",
            "YRRBGYBYB",
        )
        .unwrap();
        rotated.rotate(Move::D);
        let expected = FaceCube::from_color_strs(
            "OORYWRYBB",
            "WRWOYBBYB",
            "GGGGRYYWB",
            "GWWROOOGO",
            "OWGOBBWWR",
            "YRRBGYRGY",
        )
        .unwrap();
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_encode_decode() {
        let start = scrambled();
        assert_eq!(start, FaceCube::decode(&start.encode()).unwrap());
        let by_string: String = start.encode().iter().map(|&c| char::from(c)).collect();
        assert_eq!(start, FaceCube::try_from(by_string.as_str()).unwrap());
    }

    #[test]
    fn test_from_indices() {
        let solved = FaceCube::from_indices(
            &[0; 9], &[4; 9], &[1; 9], &[5; 9], &[3; 9], &[2; 9],
        )
        .unwrap();
        assert_eq!(solved, FaceCube::solved());
        assert!(matches!(
            FaceCube::from_indices(&[6; 9], &[4; 9], &[1; 9], &[5; 9], &[3; 9], &[2; 9]),
            Err(Error::InvalidColorIndex(6))
        ));
    }

    #[test]
    fn test_invalid_center() {
        // Swapping the front and up centers keeps the color counts balanced.
        let result = FaceCube::from_color_strs(
            "WWWWRWWWW",
            "YYYYYYYYY",
            "RRRRWRRRR",
            "OOOOOOOOO",
            "BBBBBBBBB",
            "GGGGGGGGG",
        );
        assert!(matches!(result, Err(Error::InvalidCenter("front", W))));
    }

    #[test]
    fn test_invalid_color_count() {
        let result = FaceCube::from_color_strs(
            "WWWWWWWWW",
            "YYYYYYYYY",
            "RRRRRRRRW",
            "OOOOOOOOO",
            "BBBBBBBBB",
            "GGGGGGGGG",
        );
        assert!(matches!(result, Err(Error::InvalidColorCount(W, 10))));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            FaceCube::from_color_strs("XWWWWWWWW", "", "", "", "", ""),
            Err(Error::InvalidColor('X')) | Err(Error::InvalidFaceletString)
        ));
        assert!(matches!(
            FaceCube::try_from("WWW"),
            Err(Error::InvalidFaceletString)
        ));
        assert!(matches!(
            Color::try_from('X'),
            Err(Error::InvalidColor('X'))
        ));
    }

    #[test]
    fn test_permutations() {
        let perm = permutations([W, R, G]);
        assert_eq!(perm.len(), 5);
        assert!(!perm.contains(&[W, R, G]));
        for expected in [[W, G, R], [R, W, G], [R, G, W], [G, W, R], [G, R, W]] {
            assert!(perm.contains(&expected));
        }
    }

    #[test]
    fn test_dump_formats() {
        let solved = FaceCube::solved();
        let dump = solved.to_string();
        assert!(dump.starts_with(" front: WWW WWW WWW (9 matches)\n"));
        assert_eq!(dump.lines().count(), 6);
        let debug = format!("{:?}", solved);
        assert!(debug.starts_with("FaceCube(front='WWWWWWWWW', back='YYYYYYYYY'"));
    }
}
