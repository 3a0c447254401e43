//! Alpha-beta negamax search (spec §4.6).
//!
//! `maximize`/`minimize` are mutually recursive; the root itself is
//! driven separately (see [`parallel`]) so root moves can be split
//! across workers. Grounded on the teacher's `search/mod.rs`, which
//! likewise keeps a plain alpha-beta core and layers the worker split
//! on top rather than parallelising inside the recursion.

pub mod parallel;

use crate::eval;
use crate::movegen;
use crate::position::{Move, Position};
use crate::terminal;
use crate::types::Color;

/// `minimize`'s sentinel for "no legal reply has been found yet"
/// (spec §4.6).
pub const BETA_SENTINEL: i32 = 1_000_000;

/// `evaluate(side)` at `depth_left == 0`, and the maximizing half of
/// the alpha-beta loop otherwise.
pub fn maximize(position: &mut Position, mut alpha: i32, beta: i32, depth_left: u32, side: Color) -> (i32, Option<Move>) {
    if depth_left == 0 {
        return (eval::evaluate(position, side), None);
    }
    let opponent = side.opponent();
    let moves = movegen::list_moves(position, side);
    let mut best_move = None;
    for mv in moves {
        position.try_move(mv.0, mv.1, mv.2, mv.3);
        let (score, _) = minimize(position, alpha, beta, depth_left - 1, opponent);
        position.unmake();
        if score >= beta {
            return (beta, best_move);
        }
        if score > alpha {
            alpha = score;
            best_move = Some(mv);
            log::trace!("maximize({side}, depth_left={depth_left}): alpha -> {alpha} via {mv:?}");
        }
    }
    (alpha, best_move)
}

/// `-evaluate(side)` at `depth_left == 0`, and the minimizing half of
/// the alpha-beta loop otherwise, with the terminal scoring tweak
/// (spec §4.6) applied when the side to move has no legal reply.
pub fn minimize(position: &mut Position, alpha: i32, mut beta: i32, depth_left: u32, side: Color) -> (i32, Option<Move>) {
    if depth_left == 0 {
        return (-eval::evaluate(position, side), None);
    }
    let opponent = side.opponent();
    let moves = movegen::list_moves(position, side);
    let mut best_move = None;
    for mv in moves {
        position.try_move(mv.0, mv.1, mv.2, mv.3);
        let (score, _) = maximize(position, alpha, beta, depth_left - 1, opponent);
        position.unmake();
        if score <= alpha {
            return (alpha, best_move);
        }
        if score < beta {
            beta = score;
            best_move = Some(mv);
            log::trace!("minimize({side}, depth_left={depth_left}): beta -> {beta} via {mv:?}");
        }
    }
    if best_move.is_none() && beta == BETA_SENTINEL {
        if terminal::in_stalemate(position, side) {
            return (alpha, best_move);
        }
        beta -= 10 - depth_left as i32;
    }
    (beta, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_contract_matches_evaluate() {
        let mut pos = Position::new();
        let (score, mv) = maximize(&mut pos, -BETA_SENTINEL, BETA_SENTINEL, 0, Color::White);
        assert_eq!(score, eval::evaluate(&pos, Color::White));
        assert!(mv.is_none());
    }

    #[test]
    fn one_ply_search_picks_a_legal_move() {
        let mut pos = Position::new();
        let (_, mv) = maximize(&mut pos, -BETA_SENTINEL, BETA_SENTINEL, 2, Color::White);
        let mv = mv.expect("search should find a move from the opening position");
        let legal = movegen::list_moves(&mut pos, Color::White);
        assert!(legal.contains(&mv));
    }

    #[test]
    fn search_leaves_position_untouched() {
        let mut pos = Position::new();
        let ply_before = pos.ply();
        maximize(&mut pos, -BETA_SENTINEL, BETA_SENTINEL, 2, Color::White);
        assert_eq!(pos.ply(), ply_before);
    }
}
