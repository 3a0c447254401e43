//! Root-level parallel search driver (spec §4.6 "Root-level
//! parallelism", spec §5).
//!
//! The root move list is split round-robin across `worker_count`
//! scoped threads, each owning its own `Position` clone — no board is
//! ever shared. The only cross-worker state is a [`DashMap`] of
//! `worker_id -> (best_score, best_move)` with last-writer-wins
//! semantics; a worker peeks at its peers' published bests and raises
//! its own α when one of them is higher. That can only sharpen
//! pruning, never change the result, since α only ever increases.
//!
//! Grounded on the teacher's `search/threading.rs` (one thread per
//! search slice, reporting back over a shared channel) and on
//! `other_examples/fa9231ab_Bytestorm5-ChessBot-Thunderdome`'s use of
//! `dashmap` for exactly this kind of lock-free shared best-move map.

use dashmap::DashMap;

use crate::eval;
use crate::movegen;
use crate::position::{Move, Position};
use crate::search::{self, BETA_SENTINEL};
use crate::types::Color;

/// Searches `depth` plies from `root_position` for `side`, splitting
/// the root move list across `worker_count` threads.
pub fn search_root(root_position: &Position, depth: u32, side: Color, worker_count: usize) -> (i32, Option<Move>) {
    let mut probe = root_position.clone();
    let root_moves = movegen::list_moves(&mut probe, side);
    if root_moves.is_empty() {
        log::warn!("search called on a terminal position for {side}; returning alpha sentinel with no move");
        return (-BETA_SENTINEL, None);
    }

    let worker_count = worker_count.max(1);
    let mut slices: Vec<Vec<Move>> = vec![Vec::new(); worker_count];
    for (i, mv) in root_moves.into_iter().enumerate() {
        slices[i % worker_count].push(mv);
    }

    let shared: DashMap<usize, (i32, Option<Move>)> = DashMap::new();

    std::thread::scope(|scope| {
        for (worker_id, slice) in slices.into_iter().enumerate() {
            log::debug!("worker {worker_id} searching {} root moves to depth {depth}", slice.len());
            let mut worker_position = root_position.clone();
            let shared_ref = &shared;
            scope.spawn(move || {
                run_worker(&mut worker_position, slice, depth, side, worker_id, shared_ref);
            });
        }
    });

    let result = shared
        .iter()
        .filter_map(|entry| {
            let (score, mv) = *entry.value();
            mv.map(|mv| (score, mv))
        })
        .max_by_key(|(score, _)| *score);
    log::debug!("root search for {side} settled on {result:?}");
    result
        .map(|(score, mv)| (score, Some(mv)))
        .unwrap_or_else(|| (eval::evaluate(root_position, side), None))
}

/// One worker's root-level alpha-beta loop (spec §4.6, mirroring
/// `maximize` but reading/publishing into `shared` as it goes).
fn run_worker(
    position: &mut Position,
    moves: Vec<Move>,
    depth: u32,
    side: Color,
    worker_id: usize,
    shared: &DashMap<usize, (i32, Option<Move>)>,
) {
    let opponent = side.opponent();
    let beta = BETA_SENTINEL;
    let mut alpha = -BETA_SENTINEL;
    let mut best_move: Option<Move> = None;

    for mv in moves {
        for entry in shared.iter() {
            let (other_score, other_move) = *entry.value();
            if other_move.is_some() && other_score > alpha {
                alpha = other_score;
                best_move = other_move;
            }
        }

        position.try_move(mv.0, mv.1, mv.2, mv.3);
        let depth_left = depth.saturating_sub(1);
        let (score, _) = search::minimize(position, alpha, beta, depth_left, opponent);
        position.unmake();

        if score >= beta {
            shared.insert(worker_id, (beta, best_move));
            return;
        }
        if score > alpha {
            alpha = score;
            best_move = Some(mv);
            shared.insert(worker_id, (alpha, best_move));
        }
    }
    shared.insert(worker_id, (alpha, best_move));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_legal_move_from_the_opening_position() {
        let pos = Position::new();
        let (_, mv) = search_root(&pos, 2, Color::White, 4);
        let mv = mv.expect("search should return a move");
        let mut probe = pos.clone();
        assert!(movegen::list_moves(&mut probe, Color::White).contains(&mv));
    }

    #[test]
    fn single_worker_matches_multi_worker_move_count_invariant() {
        let pos = Position::new();
        let (_, one) = search_root(&pos, 2, Color::White, 1);
        let (_, four) = search_root(&pos, 2, Color::White, 4);
        assert!(one.is_some());
        assert!(four.is_some());
    }
}
