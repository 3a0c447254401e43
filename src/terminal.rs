//! Checkmate and stalemate detection (spec §4.4).
//!
//! Both conditions reduce to the same test — `color` has no legal
//! moves — distinguished only by whether `color`'s king is currently
//! attacked. No independent "mating net" logic; it rides entirely on
//! `movegen::list_moves` and `rules::in_check`, per spec §4.1's
//! single-mechanism design.

use crate::movegen;
use crate::position::Position;
use crate::rules;
use crate::types::Color;

/// `color` has no legal moves and its king is in check.
pub fn in_checkmate(position: &mut Position, color: Color) -> bool {
    let king = *position.board().king(color);
    if !rules::in_check(&king, position.board(), position.ply()) {
        return false;
    }
    movegen::list_moves(position, color).is_empty()
}

/// `color` has no legal moves and its king is not in check.
pub fn in_stalemate(position: &mut Position, color: Color) -> bool {
    let king = *position.board().king(color);
    if rules::in_check(&king, position.board(), position.ply()) {
        return false;
    }
    movegen::list_moves(position, color).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Piece, PieceKind};

    #[test]
    fn starting_position_is_neither_checkmate_nor_stalemate() {
        let mut pos = Position::new();
        assert!(!in_checkmate(&mut pos, Color::White));
        assert!(!in_stalemate(&mut pos, Color::White));
    }

    #[test]
    fn back_rank_mate() {
        let mut board = Board::empty();
        board.place(6, 7, Piece::new(Color::White, PieceKind::King, 6, 7));
        board.place(5, 6, Piece::new(Color::White, PieceKind::Pawn, 5, 6));
        board.place(6, 6, Piece::new(Color::White, PieceKind::Pawn, 6, 6));
        board.place(7, 6, Piece::new(Color::White, PieceKind::Pawn, 7, 6));
        board.place(4, 0, Piece::new(Color::Black, PieceKind::King, 4, 0));
        board.place(0, 7, Piece::new(Color::Black, PieceKind::Rook, 0, 7));
        let mut pos = Position::from_board(board, Color::White, 0);
        assert!(in_checkmate(&mut pos, Color::White));
    }

    #[test]
    fn stalemate_with_no_legal_moves_but_no_check() {
        let mut board = Board::empty();
        board.place(0, 7, Piece::new(Color::White, PieceKind::King, 0, 7));
        board.place(2, 6, Piece::new(Color::Black, PieceKind::King, 2, 6));
        board.place(1, 5, Piece::new(Color::Black, PieceKind::Queen, 1, 5));
        let mut pos = Position::from_board(board, Color::White, 0);
        assert!(in_stalemate(&mut pos, Color::White));
        assert!(!in_checkmate(&mut pos, Color::White));
    }
}
