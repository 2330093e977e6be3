//! Branch predicates that cut the search tree before a quarter-turn descent.

use crate::moves::Move;

/// True if the previous three path entries all equal `plane`. A fourth
/// consecutive turn of the same plane is a no-op given the order-4 rotation
/// group, so the branch is redundant with an already-explored state.
pub fn fourth_repeat(path: &[Move], plane: Move) -> bool {
    path.len() >= 3 && path[path.len() - 3..].iter().all(|&m| m == plane)
}

/// The DANGEROUS HEURISTIC: true if the path has at least 10 entries,
/// `plane` does not appear among the last 10, and the last 10 entries use
/// exactly 5 distinct planes.
///
/// This assumes a late path that has settled into a narrow rotation of
/// planes is unlikely to benefit from introducing a 6th, and discards such
/// branches outright. It is an unproven approximation that can eliminate
/// valid improving paths; changing it changes which solutions the search
/// can find at all.
pub fn sixth_plane(path: &[Move], plane: Move) -> bool {
    if path.len() < 10 {
        return false;
    }
    let tail = &path[path.len() - 10..];
    if tail.contains(&plane) {
        return false;
    }
    let planes = tail.iter().fold(0u8, |acc, &m| acc | 1 << m as u8);
    planes.count_ones() == 5
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn test_fourth_repeat() {
        assert!(fourth_repeat(&[U, U, U], U));
        assert!(fourth_repeat(&[D, U, U, U], U));
        assert!(!fourth_repeat(&[U, U], U));
        assert!(!fourth_repeat(&[D, U, U], U));
        assert!(!fourth_repeat(&[U, U, U], D));
        assert!(!fourth_repeat(&[], U));
    }

    #[test]
    fn test_sixth_plane() {
        let five_planes = [U, D, L, R, F, U, D, L, R, F];
        assert!(sixth_plane(&five_planes, B));
        // The candidate plane already appears in the tail.
        assert!(!sixth_plane(&five_planes, U));
        // Too short.
        assert!(!sixth_plane(&five_planes[1..], B));
        // Fewer than 5 distinct planes in the tail.
        let four_planes = [U, D, L, R, U, D, L, R, U, D];
        assert!(!sixth_plane(&four_planes, B));
        // Only the last 10 entries count.
        let with_prefix = [B, U, D, L, R, F, U, D, L, R, F];
        assert!(sixth_plane(&with_prefix, B));
    }
}
