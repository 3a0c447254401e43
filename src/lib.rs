//! A mailbox-board chess core: rules, move generation, static
//! evaluation, and a parallel alpha-beta search, with an opening book
//! layered on top of search (spec §1, §2).
//!
//! [`Engine`] is the facade collaborators reach for; everything else
//! in this crate is exposed for callers that want finer-grained
//! control (driving `Position` directly, reusing `eval::evaluate` for
//! analysis, and so on).

pub mod board;
pub mod book;
pub mod config;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod notation;
pub mod position;
pub mod rules;
pub mod search;
pub mod terminal;
pub mod types;

use rand::{thread_rng, Rng};

use book::OpeningBook;
use config::EngineConfig;
use position::{Move, MoveResult, Position};
use types::Color;

/// Ties a [`Position`], an [`OpeningBook`], and an [`EngineConfig`]
/// together behind the one operation collaborators actually want:
/// "what should I play here" (spec §6).
///
/// Book progress is tracked as a plain `Vec<Move>` trail from the book
/// root rather than a live cursor borrowing `book`, so `Engine` can
/// own both without a self-referential struct.
pub struct Engine {
    position: Position,
    book: OpeningBook,
    book_trail: Vec<Move>,
    book_active: bool,
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Engine {
        log::debug!("starting new engine with {config:?}");
        Engine {
            position: Position::new(),
            book: OpeningBook::new(),
            book_trail: Vec::new(),
            book_active: true,
            config,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Applies the opponent's move and returns the result, exactly as
    /// [`Position::make_move`] would.
    pub fn receive_move(&mut self, x1: u8, y1: u8, x2: u8, y2: u8) -> MoveResult {
        self.position.make_move(x1, y1, x2, y2)
    }

    /// Picks the engine's next move: an opening-book move if one is
    /// available, otherwise the result of a full search (spec §4.6).
    ///
    /// Returns `None` only if `side_to_move` has no legal moves at
    /// all (checkmate or stalemate).
    pub fn best_move(&mut self, opponent_reply: Option<Move>) -> Option<Move> {
        let side = self.position.side_to_move();
        if let Some(mv) = self.book_move(opponent_reply) {
            log::trace!("book move for {side}: {mv:?}");
            return Some(mv);
        }

        log::trace!("out of book, searching to depth {}", self.config.max_depth);
        let (score, mv) = search::parallel::search_root(&self.position, self.config.max_depth as u32, side, self.config.worker_count);
        log::debug!("search returned {score} for {mv:?}");
        mv
    }

    fn book_move(&mut self, opponent_reply: Option<Move>) -> Option<Move> {
        if !self.book_active {
            return None;
        }
        let mut trail = self.book_trail.clone();
        if let Some(reply) = opponent_reply {
            trail.push(reply);
        }
        let node = match self.book.node_at(&trail) {
            Some(node) if !node.children.is_empty() => node,
            _ => {
                log::debug!("opponent reply {opponent_reply:?} left the book; disengaging");
                self.book_active = false;
                return None;
            }
        };
        let choice = &node.children[thread_rng().gen_range(0..node.children.len())];
        let mv = choice.mv.expect("non-root book nodes always carry a move");
        log::debug!("book advance: {mv:?}");
        trail.push(mv);
        self.book_trail = trail;
        Some(mv)
    }

    /// Plays `best_move`'s result for the side to move, returning the
    /// same [`MoveResult`] `make_move` would.
    pub fn play_best_move(&mut self, opponent_reply: Option<Move>) -> Option<MoveResult> {
        let mv = self.best_move(opponent_reply)?;
        Some(self.position.make_move(mv.0, mv.1, mv.2, mv.3))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_opens_with_a_book_move() {
        let mut engine = Engine::default();
        let mv = engine.best_move(None).expect("book should supply an opening move");
        assert!(mv == (4, 6, 4, 4) || mv == (3, 6, 3, 4));
    }

    #[test]
    fn engine_plays_a_legal_move_when_out_of_book() {
        let mut board = board::Board::empty();
        board.place(4, 7, types::Piece::new(Color::White, types::PieceKind::King, 4, 7));
        board.place(4, 0, types::Piece::new(Color::Black, types::PieceKind::King, 4, 0));
        board.place(0, 6, types::Piece::new(Color::White, types::PieceKind::Pawn, 0, 6));
        let mut config = EngineConfig::default();
        config.max_depth = 2;
        let mut engine = Engine::new(config);
        engine.position = Position::from_board(board, Color::White, 0);
        let mv = engine.best_move(Some((0, 0, 0, 0))).expect("a legal move should exist");
        let mut probe = engine.position().clone();
        assert!(movegen::list_moves(&mut probe, Color::White).contains(&mv));
    }
}
