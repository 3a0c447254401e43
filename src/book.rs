//! The opening book: a rooted tree of pre-scripted lines (spec §4.6
//! "Opening book").
//!
//! Grounded on `original_source/src/ordinary_engine.py`'s
//! `init_opening_book`, which wires up the same lines (Ruy Lopez/Four
//! Knights, the Sicilian, the Caro-Kann, and several Queen's Gambit
//! branches) as a tree of `Node` objects built by hand; transcribed
//! here as nested struct literals instead of a sequence of
//! `add_child` calls.

use lazy_static::lazy_static;
use rand::Rng;

use crate::position::Move;

lazy_static! {
    /// The book is pure data with no per-engine state, so it is built
    /// once and cloned out rather than re-walking every `add_child`
    /// call on every `OpeningBook::new()`.
    static ref BOOK_ROOT: OpeningBookNode = build_book();
}

/// One ply in a scripted opening line. The root node carries no move
/// (`mv: None`); every other node's `mv` is the move that leads into
/// it from its parent.
#[derive(Debug, Clone)]
pub struct OpeningBookNode {
    pub mv: Option<Move>,
    pub children: Vec<OpeningBookNode>,
}

impl OpeningBookNode {
    fn leaf(mv: Move) -> OpeningBookNode {
        OpeningBookNode { mv: Some(mv), children: Vec::new() }
    }

    fn branch(mv: Move, children: Vec<OpeningBookNode>) -> OpeningBookNode {
        OpeningBookNode { mv: Some(mv), children }
    }
}

/// A read-only opening book (spec §5: "the opening book is read-only
/// after construction and may be shared safely").
#[derive(Debug, Clone)]
pub struct OpeningBook {
    root: OpeningBookNode,
}

impl OpeningBook {
    pub fn new() -> OpeningBook {
        OpeningBook { root: BOOK_ROOT.clone() }
    }

    pub fn root(&self) -> &OpeningBookNode {
        &self.root
    }

    /// Walks `trail` (the moves played so far, by both sides, since
    /// the book root) and returns the node reached, or `None` if
    /// `trail` strays off the book. Lets a caller keep book position
    /// as plain data (`Vec<Move>`) instead of a live borrow, so it can
    /// sit in a long-lived struct like [`crate::Engine`].
    pub fn node_at(&self, trail: &[Move]) -> Option<&OpeningBookNode> {
        let mut node = &self.root;
        for &mv in trail {
            node = node.children.iter().find(|c| c.mv == Some(mv))?;
        }
        Some(node)
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        OpeningBook::new()
    }
}

/// Tracks where a game currently stands within [`OpeningBook`]. Once
/// the opponent strays from the current node's children, the book
/// disengages for the rest of the game (spec §4.6).
pub struct BookCursor<'a> {
    node: &'a OpeningBookNode,
    active: bool,
}

impl<'a> BookCursor<'a> {
    pub fn new(book: &'a OpeningBook) -> BookCursor<'a> {
        BookCursor { node: book.root(), active: true }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the engine's next book move, or `None` if the book has
    /// disengaged. `opponent_reply` is the move the opponent just
    /// played, or `None` on the very first ply of the game (when the
    /// engine itself is choosing the opening).
    pub fn next_move(&mut self, opponent_reply: Option<Move>, rng: &mut impl Rng) -> Option<Move> {
        if !self.active {
            return None;
        }
        let candidates: &[OpeningBookNode] = match opponent_reply {
            None => &self.node.children,
            Some(reply) => match self.node.children.iter().find(|c| c.mv == Some(reply)) {
                Some(matched) => &matched.children,
                None => {
                    self.active = false;
                    return None;
                }
            },
        };
        if candidates.is_empty() {
            self.active = false;
            return None;
        }
        let choice = &candidates[rng.gen_range(0..candidates.len())];
        self.node = choice;
        choice.mv
    }
}

fn build_book() -> OpeningBookNode {
    use OpeningBookNode as N;

    // Sicilian: 1. e4 c5 2. Nf3 d6 3. Nc3
    let sicilian = N::branch(
        (2, 1, 2, 3),
        vec![N::branch((6, 7, 5, 5), vec![N::branch((3, 1, 3, 2), vec![N::leaf((1, 7, 2, 5))])])],
    );

    // Queen's Gambit Accepted, with a knight development sub-line.
    let qga_knight = N::branch(
        (4, 4, 4, 3),
        vec![N::branch((5, 2, 3, 3), vec![N::leaf((1, 7, 2, 5))])],
    );
    let qga = N::branch(
        (3, 3, 2, 4),
        vec![N::branch(
            (4, 6, 4, 4),
            vec![N::branch(
                (4, 1, 4, 2),
                vec![N::branch((5, 7, 2, 4), vec![N::branch((6, 0, 5, 2), vec![qga_knight])])],
            )],
        )],
    );

    // Queen's Gambit Declined, with pawn-takes and knight-takes sub-lines.
    let qgd_pawn_takes = N::branch((4, 2, 3, 3), vec![N::leaf((2, 7, 6, 3))]);
    let qgd_knight_takes = N::branch((5, 2, 3, 3), vec![N::leaf((6, 7, 5, 5))]);
    let qgd = N::branch(
        (4, 1, 4, 2),
        vec![N::branch(
            (1, 7, 2, 5),
            vec![N::branch((6, 0, 5, 2), vec![N::branch((2, 4, 3, 3), vec![qgd_pawn_takes, qgd_knight_takes])])],
        )],
    );

    // Slav: 1. d4 d5 2. c4 c6 3. Nf3 Nf6 4. Nc3
    let slav = N::branch(
        (2, 1, 2, 2),
        vec![N::branch(
            (6, 7, 5, 5),
            vec![N::branch((6, 0, 5, 2), vec![N::leaf((1, 7, 2, 5))])],
        )],
    );

    let d2d4 = N::branch(
        (3, 6, 3, 4),
        vec![N::branch((3, 1, 3, 3), vec![N::branch((2, 6, 2, 4), vec![qga, qgd, slav])])],
    );

    // Four Knights proper: 1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. O-O Nf6 5. Re1
    let four_knights = N::branch(
        (5, 7, 2, 4),
        vec![N::branch(
            (5, 0, 2, 3),
            vec![N::branch((4, 7, 6, 7), vec![N::branch((6, 0, 5, 2), vec![N::leaf((5, 7, 4, 7))])])],
        )],
    );

    // Four Knights, Bishop pin: 3. Bb5 Nf6 4. d3 Bc5 5. c3 O-O 6. O-O
    let four_knights_pin = N::branch(
        (5, 7, 1, 3),
        vec![N::branch(
            (6, 0, 5, 2),
            vec![N::branch(
                (3, 6, 3, 5),
                vec![N::branch(
                    (5, 0, 2, 3),
                    vec![N::branch((2, 6, 2, 5), vec![N::branch((4, 0, 6, 0), vec![N::leaf((4, 7, 6, 7))])])],
                )],
            )],
        )],
    );

    let e7e5 = N::branch(
        (4, 1, 4, 3),
        vec![N::branch((6, 7, 5, 5), vec![N::branch((1, 0, 2, 2), vec![four_knights, four_knights_pin])])],
    );

    // Caro-Kann: 1. e4 c6 2. d4 d5 3. exd5 cxd5 4. Bd3 Nc6 5. c3 Nf6 6. Bf4
    let caro_kann = N::branch(
        (2, 1, 2, 2),
        vec![N::branch(
            (3, 6, 3, 4),
            vec![N::branch(
                (3, 1, 3, 3),
                vec![N::branch(
                    (4, 4, 3, 3),
                    vec![N::branch(
                        (2, 2, 3, 3),
                        vec![N::branch(
                            (5, 7, 3, 5),
                            vec![N::branch(
                                (1, 0, 2, 2),
                                vec![N::branch((2, 6, 2, 5), vec![N::branch((6, 0, 5, 2), vec![N::leaf((2, 7, 5, 4))])])],
                            )],
                        )],
                    )],
                )],
            )],
        )],
    );

    let e2e4 = N::branch((4, 6, 4, 4), vec![sicilian, e7e5, caro_kann]);

    OpeningBookNode { mv: None, children: vec![e2e4, d2d4] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn root_offers_two_openings() {
        let book = OpeningBook::new();
        assert_eq!(book.root().children.len(), 2);
    }

    #[test]
    fn cursor_picks_one_of_the_two_first_moves() {
        let book = OpeningBook::new();
        let mut cursor = BookCursor::new(&book);
        let mut rng = StdRng::seed_from_u64(1);
        let mv = cursor.next_move(None, &mut rng).expect("book should offer a first move");
        assert!(mv == (4, 6, 4, 4) || mv == (3, 6, 3, 4));
    }

    #[test]
    fn off_book_reply_disengages_the_cursor() {
        let book = OpeningBook::new();
        let mut cursor = BookCursor::new(&book);
        let mut rng = StdRng::seed_from_u64(1);
        cursor.next_move(None, &mut rng);
        let off_book_reply = (0, 1, 0, 2);
        assert!(cursor.next_move(Some(off_book_reply), &mut rng).is_none());
        assert!(!cursor.is_active());
    }

    #[test]
    fn sicilian_line_follows_the_script() {
        let book = OpeningBook::new();
        let e2e4 = book
            .root()
            .children
            .iter()
            .find(|n| n.mv == Some((4, 6, 4, 4)))
            .expect("e2e4 should be a root opening");
        let sicilian = e2e4
            .children
            .iter()
            .find(|n| n.mv == Some((2, 1, 2, 3)))
            .expect("the Sicilian should follow 1. e4");
        assert_eq!(sicilian.children.len(), 1);
        assert_eq!(sicilian.children[0].mv, Some((6, 7, 5, 5)));
    }
}
