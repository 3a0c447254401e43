//! Legal move enumeration (spec §4.3).
//!
//! There is no separate "generate pseudo-legal, then filter" pass
//! here — `Position::try_move` already folds legality into a single
//! trial-apply-and-check-own-king step (spec §4.1's design note), so
//! the generator is just every `(from, to)` pair brute-forced through
//! that same gate and immediately unmade. Grounded on the teacher's
//! `move_generator.rs`, which likewise drives generation off the same
//! move-application primitive the rest of the engine uses rather than
//! a bespoke attack-table pass.

use crate::position::{Move, Position};
use crate::types::Color;

/// All legal moves for `color` in `position`, in ascending
/// `(from_file, from_rank, to_file, to_rank)` order. Leaves `position`
/// exactly as it found it.
pub fn list_moves(position: &mut Position, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for x1 in 0..8u8 {
        for y1 in 0..8u8 {
            if position.board().at(x1, y1).color != color {
                continue;
            }
            for x2 in 0..8u8 {
                for y2 in 0..8u8 {
                    if position.try_move(x1, y1, x2, y2) {
                        moves.push((x1, y1, x2, y2));
                        position.unmake();
                    }
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let mut pos = Position::new();
        assert_eq!(list_moves(&mut pos, Color::White).len(), 20);
        assert_eq!(list_moves(&mut pos, Color::Black).len(), 20);
    }

    #[test]
    fn listing_moves_leaves_position_untouched() {
        let mut pos = Position::new();
        let ply_before = pos.ply();
        let side_before = pos.side_to_move();
        list_moves(&mut pos, Color::White);
        assert_eq!(pos.ply(), ply_before);
        assert_eq!(pos.side_to_move(), side_before);
        assert_eq!(pos.board().at(4, 6).kind, crate::types::PieceKind::Pawn);
    }
}
