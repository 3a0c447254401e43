//! Pseudo-legal move predicates and check detection (spec §4.1).
//!
//! Every predicate here is *pseudo-legal*: it ignores whether the
//! move would leave the mover's own king in check. The `position`
//! module enforces that filter by trial-applying the move and
//! inspecting the result.
//!
//! Grounded on the teacher's dispatch style (a tag `PieceType` rather
//! than a class hierarchy — see `basetypes.rs`), and on
//! `original_source/src/ordinary_engine.py`'s `Piece` subclasses for
//! the exact predicate semantics, translated from a Rook-Bishop-Queen
//! inheritance chain into free functions composed by disjunction, per
//! spec §9's design note: "the queen's predicate is literally
//! `rook_predicate ∨ bishop_predicate`".

use crate::board::Board;
use crate::types::{Color, Piece, PieceKind};

/// Is `mover`'s pseudo-legal move set able to reach `target`'s square?
///
/// `target` is usually `board.at(tx, ty)` — the real occupant of the
/// destination square — but callers checking whether a square is
/// merely *attacked* (for castling's transit-square rule) pass a
/// synthetic piece standing in for "whatever is there", per spec
/// §4.1's "ephemeral king" design.
pub fn valid_move(mover: &Piece, target: &Piece, board: &Board, ply: u32) -> bool {
    match mover.kind {
        PieceKind::Rook => valid_rook_move(mover, target, board),
        PieceKind::Bishop => valid_bishop_move(mover, target, board),
        PieceKind::Queen => valid_rook_move(mover, target, board) || valid_bishop_move(mover, target, board),
        PieceKind::Knight => valid_knight_move(mover, target),
        PieceKind::Pawn => valid_pawn_move(mover, target, board, ply),
        PieceKind::King => valid_king_move(mover, target, board, ply),
        PieceKind::None => false,
    }
}

fn dx(a: &Piece, b: &Piece) -> i32 {
    a.x as i32 - b.x as i32
}

fn dy(a: &Piece, b: &Piece) -> i32 {
    a.y as i32 - b.y as i32
}

/// Walks the open squares strictly between `(x1, y1)` and `(x2, y2)`
/// along a rank, file, or diagonal, returning `false` as soon as one
/// is occupied. The destination square itself is not inspected here.
fn path_clear(x1: i32, y1: i32, x2: i32, y2: i32, board: &Board) -> bool {
    let step_x = (x2 - x1).signum();
    let step_y = (y2 - y1).signum();
    let mut cx = x1 + step_x;
    let mut cy = y1 + step_y;
    while (cx, cy) != (x2, y2) {
        if !board.at(cx as u8, cy as u8).is_empty() {
            return false;
        }
        cx += step_x;
        cy += step_y;
    }
    true
}

pub fn valid_rook_move(mover: &Piece, target: &Piece, board: &Board) -> bool {
    if target.color == mover.color {
        return false;
    }
    if mover.x != target.x && mover.y != target.y {
        return false;
    }
    path_clear(mover.x as i32, mover.y as i32, target.x as i32, target.y as i32, board)
}

pub fn valid_bishop_move(mover: &Piece, target: &Piece, board: &Board) -> bool {
    if target.color == mover.color {
        return false;
    }
    let (ddx, ddy) = (dx(target, mover), dy(target, mover));
    if ddx == 0 || ddx.abs() != ddy.abs() {
        return false;
    }
    path_clear(mover.x as i32, mover.y as i32, target.x as i32, target.y as i32, board)
}

fn valid_knight_move(mover: &Piece, target: &Piece) -> bool {
    if target.color == mover.color {
        return false;
    }
    dx(target, mover).abs() * dy(target, mover).abs() == 2
}

fn valid_pawn_move(mover: &Piece, target: &Piece, board: &Board, ply: u32) -> bool {
    if valid_pawn_capture(mover, target, board, ply) {
        return true;
    }
    if !target.is_empty() || mover.x != target.x {
        return false;
    }
    let forward: i32 = if mover.color == Color::White { -1 } else { 1 };
    let single = mover.y as i32 + forward;
    if target.y as i32 == single {
        return true;
    }
    let home_rank: u8 = if mover.color == Color::White { 6 } else { 1 };
    let double = mover.y as i32 + 2 * forward;
    if mover.y == home_rank && target.y as i32 == double {
        let mid = (mover.y as i32 + forward) as u8;
        return board.at(mover.x, mid).is_empty();
    }
    false
}

fn valid_pawn_capture(mover: &Piece, target: &Piece, board: &Board, ply: u32) -> bool {
    if can_en_passant(mover, target, board, ply) {
        return true;
    }
    if target.is_empty() || target.color == mover.color {
        return false;
    }
    let ddx = dx(target, mover).abs();
    let ddy = dy(target, mover);
    match mover.color {
        Color::Black => ddx == 1 && ddy == 1,
        Color::White => ddx == 1 && ddy == -1,
        Color::Empty => false,
    }
}

/// Spec §4.1's en-passant predicate: the destination is a diagonal
/// step forward onto an *empty* square, and the square directly
/// behind it holds an opposing pawn that double-advanced on the
/// immediately preceding ply.
pub(crate) fn can_en_passant(mover: &Piece, target: &Piece, board: &Board, ply: u32) -> bool {
    if target.color == mover.color || mover.kind != PieceKind::Pawn {
        return false;
    }
    let ddx = dx(target, mover).abs();
    let ddy = dy(target, mover);
    let expected = if mover.color == Color::White { -1 } else { 1 };
    if ddx != 1 || ddy != expected {
        return false;
    }
    let captured_y = match mover.color {
        Color::White => target.y + 1,
        Color::Black => target.y - 1,
        Color::Empty => return false,
    };
    let captured = board.at(target.x, captured_y);
    captured.color == mover.color.opponent()
        && captured.kind == PieceKind::Pawn
        && captured.moved_double
        && ply > 0
        && captured.double_move_ply == ply - 1
}

fn valid_king_move(mover: &Piece, target: &Piece, board: &Board, ply: u32) -> bool {
    if target.color == mover.color {
        return false;
    }
    if valid_kingside_castle(mover, target, board, ply) || valid_queenside_castle(mover, target, board, ply) {
        return true;
    }
    let ddx = dx(target, mover).abs();
    let ddy = dy(target, mover).abs();
    ddx <= 1 && ddy <= 1 && (ddx != 0 || ddy != 0)
}

fn valid_kingside_castle(mover: &Piece, target: &Piece, board: &Board, ply: u32) -> bool {
    if mover.has_moved || !target.is_empty() || target.x != 6 || target.y != mover.y {
        return false;
    }
    if !board.at(5, mover.y).is_empty() || !board.at(6, mover.y).is_empty() {
        return false;
    }
    if in_check(mover, board, ply) {
        return false;
    }
    if square_attacked(board, mover.color, 5, mover.y, ply) || square_attacked(board, mover.color, 6, mover.y, ply) {
        return false;
    }
    let rook = board.at(7, mover.y);
    rook.kind == PieceKind::Rook && rook.color == mover.color && !rook.has_moved
}

fn valid_queenside_castle(mover: &Piece, target: &Piece, board: &Board, ply: u32) -> bool {
    if mover.has_moved || !target.is_empty() || target.x != 2 || target.y != mover.y {
        return false;
    }
    if !board.at(1, mover.y).is_empty() || !board.at(2, mover.y).is_empty() || !board.at(3, mover.y).is_empty() {
        return false;
    }
    if in_check(mover, board, ply) {
        return false;
    }
    if square_attacked(board, mover.color, 3, mover.y, ply) || square_attacked(board, mover.color, 2, mover.y, ply) {
        return false;
    }
    let rook = board.at(0, mover.y);
    rook.kind == PieceKind::Rook && rook.color == mover.color && !rook.has_moved
}

/// True iff any opposing piece's `valid_move` accepts `(x, y)` as a
/// target, standing in `defender_color`'s king on that square if
/// nothing real occupies it (spec §4.1's "ephemeral king").
pub fn square_attacked(board: &Board, defender_color: Color, x: u8, y: u8, ply: u32) -> bool {
    let stand_in = Piece::new(defender_color, PieceKind::King, x, y);
    for ax in 0..8u8 {
        for ay in 0..8u8 {
            let attacker = board.at(ax, ay);
            if attacker.color == defender_color.opponent() && valid_move(attacker, &stand_in, board, ply) {
                return true;
            }
        }
    }
    false
}

/// True iff `king` is attacked by any opposing piece.
pub fn in_check(king: &Piece, board: &Board, ply: u32) -> bool {
    square_attacked(board, king.color, king.x, king.y, ply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn rook_blocked_by_intervening_piece() {
        let board = Board::new();
        let rook = *board.at(0, 7);
        let target = *board.at(0, 3);
        assert!(!valid_move(&rook, &target, &board, 0));
    }

    #[test]
    fn bishop_cannot_jump_own_pawn() {
        let board = Board::new();
        let bishop = *board.at(5, 7);
        let target = *board.at(2, 4);
        assert!(!valid_move(&bishop, &target, &board, 0));
    }

    #[test]
    fn knight_opens_from_starting_position() {
        let board = Board::new();
        let knight = *board.at(1, 7);
        let target = *board.at(2, 5);
        assert!(valid_move(&knight, &target, &board, 0));
    }

    #[test]
    fn pawn_double_push_from_home_rank() {
        let board = Board::new();
        let pawn = *board.at(4, 6);
        let target = *board.at(4, 4);
        assert!(valid_move(&pawn, &target, &board, 0));
    }

    #[test]
    fn pawn_cannot_double_push_off_home_rank() {
        let mut board = Board::empty();
        let pawn = Piece::new(Color::White, PieceKind::Pawn, 4, 5);
        board.place(4, 5, pawn);
        let target = *board.at(4, 3);
        assert!(!valid_move(&pawn, &target, &board, 0));
    }

    #[test]
    fn king_cannot_move_onto_own_piece() {
        let board = Board::new();
        let king = *board.at(4, 7);
        let target = *board.at(4, 6);
        assert!(!valid_move(&king, &target, &board, 0));
    }

    #[test]
    fn starting_position_has_no_checks() {
        let board = Board::new();
        assert!(!in_check(board.king(Color::White), &board, 0));
        assert!(!in_check(board.king(Color::Black), &board, 0));
    }
}
