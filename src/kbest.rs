use crate::constants::MAX_COST;
use crate::facelet::{Encoded, FaceCube};
use crate::moves::Move;

/// One slot of a [`KBest`] collection: the move path from the search root,
/// an owned state snapshot with its fingerprint, and the state's cube cost.
///
/// Unfilled sentinel slots hold an empty path, no state and cost
/// [`MAX_COST`].
#[derive(Debug, Clone)]
pub struct Item {
    pub path: Vec<Move>,
    pub state: Option<FaceCube>,
    pub encoded_state: Option<Encoded>,
    pub cost: u32,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            path: Vec::new(),
            state: None,
            encoded_state: None,
            cost: MAX_COST,
        }
    }
}

/// Fixed-capacity collection of the k cheapest states seen so far.
///
/// Always holds exactly k entries, kept sorted ascending by cost, with no
/// two entries sharing a state fingerprint.
#[derive(Debug, Clone)]
pub struct KBest {
    items: Vec<Item>,
}

impl KBest {
    pub fn new(k: usize) -> Self {
        Self {
            items: vec![Item::default(); k],
        }
    }

    /// Offers a state to the collection. Rejected if its cost is strictly
    /// worse than the current worst entry (equal cost is accepted), or if an
    /// entry with the same fingerprint is already present. Otherwise the
    /// worst entry is overwritten and the collection re-sorted; the prior
    /// cost ceiling check guarantees the new entry is not worse than what it
    /// replaces.
    pub fn maybe_add(&mut self, path: Vec<Move>, state: &FaceCube, cost: u32) {
        if self.worst_cost() < cost {
            return; // Cost too high
        }
        let encoded_state = state.encode();
        if self
            .items
            .iter()
            .any(|item| item.encoded_state == Some(encoded_state))
        {
            return; // Item already exists
        }
        let Some(worst) = self.items.last_mut() else {
            return;
        };
        worst.path = path;
        worst.state = Some(*state);
        worst.encoded_state = Some(encoded_state);
        worst.cost = cost;
        // Stable sort keeps earlier entries ahead on cost ties.
        self.items.sort_by_key(|item| item.cost);
    }

    pub fn best_cost(&self) -> u32 {
        self.items.first().map_or(MAX_COST, |item| item.cost)
    }

    pub fn worst_cost(&self) -> u32 {
        self.items.last().map_or(MAX_COST, |item| item.cost)
    }

    pub fn k(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// Merges a sequence of [`KBest`] collections into a fresh capacity-k one.
///
/// Entries are offered round-robin by rank: rank 0 of every input (in input
/// order), then rank 1 of every input, and so on. This interleaving keeps
/// representation from all inputs even when one input's costs dominate;
/// earlier inputs and earlier ranks win cost ties.
pub fn merge_kbests(seq: &[KBest], k: usize) -> KBest {
    let mut res = KBest::new(k);
    let max_k = seq.iter().map(|kbest| kbest.k()).max().unwrap_or(0);
    for i in 0..max_k {
        for kbest in seq {
            if let Some(item) = kbest.items.get(i) {
                if let Some(state) = &item.state {
                    res.maybe_add(item.path.clone(), state, item.cost);
                }
            }
        }
    }
    res
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    /// Distinct states keyed by how far the up face has been turned.
    fn turned(n: usize) -> FaceCube {
        FaceCube::solved().apply_moves(&vec![U; n])
    }

    fn costs(kbest: &KBest) -> Vec<u32> {
        kbest.items().iter().map(|item| item.cost).collect()
    }

    #[test]
    fn test_maybe_add_keeps_sorted() {
        let mut kbest = KBest::new(3);
        kbest.maybe_add(vec![U], &turned(1), 7);
        kbest.maybe_add(vec![U, U], &turned(2), 3);
        kbest.maybe_add(vec![U, U, U], &turned(3), 5);
        assert_eq!(kbest.k(), 3);
        assert_eq!(costs(&kbest), vec![3, 5, 7]);
        assert_eq!(kbest.best_cost(), 3);
        assert_eq!(kbest.worst_cost(), 7);
    }

    #[test]
    fn test_maybe_add_rejects_too_high_cost() {
        let mut kbest = KBest::new(2);
        kbest.maybe_add(vec![U], &turned(1), 3);
        kbest.maybe_add(vec![U, U], &turned(2), 5);
        kbest.maybe_add(vec![U, U, U], &turned(3), 6);
        assert_eq!(costs(&kbest), vec![3, 5]);
        // Equal to the worst cost is accepted and evicts the worst entry.
        kbest.maybe_add(vec![U, U, U], &turned(3), 5);
        assert_eq!(costs(&kbest), vec![3, 5]);
        assert_eq!(kbest.items()[1].path, vec![U, U, U]);
    }

    #[test]
    fn test_maybe_add_rejects_duplicate_state() {
        let mut kbest = KBest::new(3);
        kbest.maybe_add(vec![U], &turned(1), 3);
        kbest.maybe_add(vec![D], &turned(1), 2);
        assert_eq!(costs(&kbest), vec![3, MAX_COST, MAX_COST]);
        assert_eq!(kbest.items()[0].path, vec![U]);
    }

    #[test]
    fn test_merge() {
        let mut k1 = KBest::new(3);
        k1.maybe_add(vec![U], &turned(1), 3);
        k1.maybe_add(vec![U, U], &turned(2), 5);
        k1.maybe_add(vec![U, U, U], &turned(3), 7);
        let mut k2 = KBest::new(3);
        let down = |n| FaceCube::solved().apply_moves(&vec![D; n]);
        k2.maybe_add(vec![D], &down(1), 2);
        k2.maybe_add(vec![D, D], &down(2), 4);
        k2.maybe_add(vec![D, D, D], &down(3), 6);

        let merged = merge_kbests(&[k1, k2], 3);
        let paths: Vec<Vec<Move>> = merged.items().iter().map(|item| item.path.clone()).collect();
        assert_eq!(paths, vec![vec![D], vec![U], vec![D, D]]);
        assert_eq!(costs(&merged), vec![2, 3, 4]);
    }

    #[test]
    fn test_merge_skips_sentinels() {
        let mut k1 = KBest::new(3);
        k1.maybe_add(vec![U], &turned(1), 3);
        let merged = merge_kbests(&[k1, KBest::new(3)], 2);
        assert_eq!(costs(&merged), vec![3, MAX_COST]);
        assert!(merged.items()[1].state.is_none());
    }
}
