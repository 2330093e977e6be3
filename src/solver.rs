use std::collections::HashSet;
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::Error;
use crate::facelet::{Encoded, FaceCube};
use crate::kbest::{merge_kbests, KBest};
use crate::moves::Move;
use crate::pruning;
use crate::scramble::scramble_to_str;

/// Tuning of the beam search.
///
/// * `expansion_depth`: depth budget of the initial expansion crawl.
/// * `recrawl_depth`: depth budget of each per-beam-entry re-crawl.
/// * `beam_width`: capacity of the beam carried between rounds.
/// * `rounds`: number of re-crawl rounds after the expansion crawl.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub expansion_depth: u8,
    pub recrawl_depth: u8,
    pub beam_width: usize,
    pub rounds: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            expansion_depth: 9,
            recrawl_depth: 8,
            beam_width: 20,
            rounds: 5,
        }
    }
}

/// Observational search counters, threaded through every crawl.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    pub recurse_calls: u64,
}

/// Solve result:
/// * solution: the best move path found, applied left-to-right.
/// * cost: the cube cost reached by that path (0 means solved).
/// * solve_time: total search time.
/// * recurse_calls: number of explorer invocations.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SolveResult {
    pub solution: Vec<Move>,
    pub cost: u32,
    pub solve_time: Duration,
    pub recurse_calls: u64,
}

impl Default for SolveResult {
    fn default() -> Self {
        Self {
            solution: Vec::new(),
            cost: MAX_COST,
            solve_time: Duration::from_secs(0),
            recurse_calls: 0,
        }
    }
}

/// Depth-bounded DFS over the rotation tree from `state`.
///
/// Reports every visited state cheaper than the collection's worst entry
/// (except `reference` itself) into `best`. Explores the six quarter-turn
/// branches in plane order, then a half-turn continuation of the most recent
/// plane when the last two path entries differ.
fn crawl(
    state: &mut FaceCube,
    reference: &FaceCube,
    depth: u8,
    path: &mut Vec<Move>,
    best: &mut KBest,
    stats: &mut SearchStats,
) {
    stats.recurse_calls += 1;

    let cost = state.cube_cost();
    if cost < best.worst_cost() && *state != *reference {
        best.maybe_add(path.clone(), state, cost);
    }

    if depth == 0 {
        return;
    }

    for plane in ALL_MOVES {
        if pruning::fourth_repeat(path, plane) {
            continue;
        }
        if pruning::sixth_plane(path, plane) {
            continue;
        }
        descend(state, reference, depth, path, best, stats, plane, 1);
    }
    if path.len() > 1 && path[path.len() - 1] != path[path.len() - 2] {
        // Turn the prior quarter-turn into a half-turn.
        let plane = path[path.len() - 1];
        descend(state, reference, depth, path, best, stats, plane, 2);
    }
}

/// Pushes `twists` turns of `plane`, recurses one level deeper, then pops
/// the path entries and completes the four-turn cycle, so the shared state
/// is restored on the single exit path.
#[allow(clippy::too_many_arguments)]
fn descend(
    state: &mut FaceCube,
    reference: &FaceCube,
    depth: u8,
    path: &mut Vec<Move>,
    best: &mut KBest,
    stats: &mut SearchStats,
    plane: Move,
    twists: u8,
) {
    for _ in 0..twists {
        path.push(plane);
        state.rotate(plane);
    }
    crawl(state, reference, depth - 1, path, best, stats);
    for _ in 0..twists {
        path.pop();
    }
    for _ in twists..4 {
        state.rotate(plane);
    }
}

/// Beam search over crawl rounds: one deep expansion crawl from `initial`,
/// then `rounds` re-crawl rounds which re-expand every beam entry and
/// diversity-merge the results into the next beam.
///
/// Per-entry re-crawls run on scoped threads, one per beam entry; each
/// worker owns its own state copy and fresh collection, and results are
/// joined and merged in beam order so retained states on cost ties match a
/// sequential run. The best entry of the final beam is replayed from
/// `initial`, validating after every rotation.
pub fn solver(initial: &FaceCube, config: &SolverConfig) -> Result<SolveResult, Error> {
    initial.validate()?;

    let start_time = Instant::now();
    let mut stats = SearchStats::default();
    // Fingerprints which have run through the crawler already.
    let mut already_crawled: HashSet<Encoded> = HashSet::new();

    let mut best = KBest::new(config.beam_width);
    let mut state = *initial;
    let mut path = Vec::new();
    crawl(
        &mut state,
        initial,
        config.expansion_depth,
        &mut path,
        &mut best,
        &mut stats,
    );
    println!(
        "Finished expansion crawl in {:.2} sec. Best so far: {}",
        start_time.elapsed().as_secs_f64(),
        best.best_cost()
    );

    for ncrawl in 0..config.rounds {
        let results: Vec<(KBest, SearchStats, Option<Encoded>)> = thread::scope(|s| {
            let already_crawled = &already_crawled;
            let handles: Vec<_> = best
                .items()
                .iter()
                .map(|item| {
                    s.spawn(move || {
                        let mut fresh = KBest::new(config.beam_width);
                        let mut local = SearchStats::default();
                        // Never lose the seed entry, even if its
                        // sub-expansion finds nothing better.
                        let Some(seed) = item.state else {
                            return (fresh, local, None);
                        };
                        fresh.maybe_add(item.path.clone(), &seed, item.cost);
                        let fingerprint = seed.encode();
                        if already_crawled.contains(&fingerprint) {
                            return (fresh, local, None);
                        }
                        let mut state = seed;
                        let mut path = item.path.clone();
                        crawl(
                            &mut state,
                            initial,
                            config.recrawl_depth,
                            &mut path,
                            &mut fresh,
                            &mut local,
                        );
                        (fresh, local, Some(fingerprint))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let mut new_bests = Vec::with_capacity(results.len());
        for (nitem, ((fresh, local, crawled), item)) in
            results.into_iter().zip(best.items()).enumerate()
        {
            stats.recurse_calls += local.recurse_calls;
            match crawled {
                Some(fingerprint) => {
                    already_crawled.insert(fingerprint);
                    println!(
                        "Finished level {} crawl #{}, elapsed: {:.2} sec, best here: {}",
                        ncrawl,
                        nitem + 1,
                        start_time.elapsed().as_secs_f64(),
                        fresh.best_cost()
                    );
                }
                None => println!(
                    "Skipped level {} crawl #{}: cost {}",
                    ncrawl,
                    nitem + 1,
                    item.cost
                ),
            }
            new_bests.push(fresh);
        }
        best = merge_kbests(&new_bests, config.beam_width);
        let costs: Vec<u32> = best.items().iter().map(|item| item.cost).collect();
        println!("End of level {}: Best costs {:?}", ncrawl, costs);
    }

    for item in best.items() {
        println!("Cost {:2}: Path={}", item.cost, scramble_to_str(&item.path));
    }

    let Some(top) = best.items().first().cloned() else {
        return Ok(SolveResult::default());
    };
    let mut end_state = *initial;
    for &plane in &top.path {
        end_state.rotate(plane);
        end_state.validate()?;
    }
    println!("end_state cube cost: {}", end_state.cube_cost());
    println!("end_state naive cost: {}", end_state.naive_cost());
    println!("best_cost: {}", best.best_cost());

    // The extra millisecond guards the rate computation against a zero
    // elapsed time.
    let solve_time = start_time.elapsed() + Duration::from_millis(1);
    println!(
        "{} recurse calls in {:.2} sec ({:.0} calls/sec)",
        stats.recurse_calls,
        solve_time.as_secs_f64(),
        stats.recurse_calls as f64 / solve_time.as_secs_f64()
    );
    println!("{}", end_state);
    println!("{:?}", end_state);

    Ok(SolveResult {
        solution: top.path,
        cost: top.cost,
        solve_time,
        recurse_calls: stats.recurse_calls,
    })
}

/// Solve a cube defined by its 54-character facelet string (face order
/// front, back, up, down, left, right) with the default tuning.
///
/// # Examples
/// ```no_run
/// use beamcube::solver::solve;
///
/// fn main() {
///     let result = solve(
///         "RWOWWWBWWYYYYYYYYYRRRRRRWRBROOOOOOOOBBGBBBBBWWGGGGGGGG",
///     ).unwrap();
///     println!("{:?} ({}), {:?}", result.solution, result.cost, result.solve_time);
/// }
/// ```
pub fn solve(cubestring: &str) -> Result<SolveResult, Error> {
    let fc = FaceCube::try_from(cubestring)?;
    solver(&fc, &SolverConfig::default())
}
