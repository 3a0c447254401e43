//! Piece-square tables, transcribed from
//! `https://www.chessprogramming.org/Simplified_Evaluation_Function`
//! via `original_source/src/ordinary_engine.py`'s `w_*_table`/`b_*_table`
//! literals (spec §B.2). Indexed `[file][rank]`, matching `Board`'s own
//! `[x][y]` layout so lookups need no transposition.

pub const PAWN: [[i32; 8]; 8] = [
    [0, 50, 10, 5, 0, 5, 5, 0],
    [0, 50, 10, 5, 0, -5, 10, 0],
    [0, 50, 20, 10, 0, -10, 10, 0],
    [0, 50, 30, 25, 24, 0, -20, 0],
    [0, 50, 30, 25, 24, 0, -20, 0],
    [0, 50, 20, 10, 0, -10, 10, 0],
    [0, 50, 10, 5, 0, -5, 10, 0],
    [0, 50, 10, 5, 0, 5, 5, 0],
];

pub const PAWN_BLACK: [[i32; 8]; 8] = [
    [0, 5, 5, 0, 5, 10, 50, 0],
    [0, 10, -5, 0, 5, 10, 50, 0],
    [0, 10, -10, 0, 10, 20, 50, 0],
    [0, -20, 0, 24, 25, 30, 50, 0],
    [0, -20, 0, 24, 25, 30, 50, 0],
    [0, 10, -10, 0, 10, 20, 50, 0],
    [0, 10, -5, 0, 5, 10, 50, 0],
    [0, 5, 5, 0, 5, 10, 50, 0],
];

pub const KNIGHT: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 5, 0, 5, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 0, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 5, -30],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-40, -20, 0, 5, 0, 5, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

pub const KNIGHT_BLACK: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 5, 0, 5, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 0, -30],
    [-30, 5, 15, 20, 20, 15, 0, -30],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-40, -20, 5, 0, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

pub const BISHOP: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 5, 0, 10, 5, -10],
    [-10, 0, 5, 5, 10, 10, 0, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 0, 5, 5, 10, 10, 0, -10],
    [-10, 0, 0, 5, 0, 10, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

pub const BISHOP_BLACK: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 5, 10, 0, 5, 0, 0, -10],
    [-10, 0, 10, 10, 5, 5, 0, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 0, 10, 10, 5, 5, 0, -10],
    [-10, 5, 10, 0, 5, 0, 0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

pub const ROOK: [[i32; 8]; 8] = [
    [0, 5, -5, -5, -5, -5, -5, 0],
    [0, 10, 0, 0, 0, 0, 0, 0],
    [0, 10, 0, 0, 0, 0, 0, 0],
    [0, 10, 0, 0, 0, 0, 0, 5],
    [0, 10, 0, 0, 0, 0, 0, 5],
    [0, 10, 0, 0, 0, 0, 0, 0],
    [0, 10, 0, 0, 0, 0, 0, 0],
    [0, 5, -5, -5, -5, -5, -5, 0],
];

pub const ROOK_BLACK: [[i32; 8]; 8] = [
    [0, 5, -5, -5, -5, -5, -5, 0],
    [0, 0, 0, 0, 0, 0, 10, 0],
    [0, 0, 0, 0, 0, 0, 10, 0],
    [5, 0, 0, 0, 0, 0, 10, 0],
    [5, 0, 0, 0, 0, 0, 10, 0],
    [0, 0, 0, 0, 0, 0, 10, 0],
    [0, 0, 0, 0, 0, 0, 10, 0],
    [0, 5, -5, -5, -5, -5, -5, 0],
];

pub const QUEEN: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, 0, -10, -10, -20],
    [-10, 0, 0, 0, 0, 5, 0, -10],
    [-10, 0, 5, 5, 5, 5, 5, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

pub const QUEEN_BLACK: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [-10, 0, 5, 5, 5, 5, 5, -10],
    [-10, 0, 0, 0, 0, 5, 0, -10],
    [-20, -10, -10, -5, 0, -10, -10, -20],
];

pub const KING: [[i32; 8]; 8] = [
    [-30, -30, -30, -30, -20, -10, 20, 20],
    [-40, -40, -40, -40, -30, -20, 20, 30],
    [-40, -40, -40, -40, -30, -20, 0, 10],
    [-50, -50, -50, -50, -40, -20, 0, 0],
    [-50, -50, -50, -50, -40, -20, 0, 0],
    [-40, -40, -40, -40, -30, -20, 0, 10],
    [-40, -40, -40, -40, -30, -20, 20, 30],
    [-30, -30, -30, -30, -20, -10, 20, 20],
];

pub const KING_BLACK: [[i32; 8]; 8] = [
    [20, 20, -10, -20, -30, -30, -30, -30],
    [30, 20, -20, -30, -40, -40, -40, -40],
    [10, 0, -20, -30, -40, -40, -40, -40],
    [0, 0, -20, -40, -50, -50, -50, -50],
    [0, 0, -20, -40, -50, -50, -50, -50],
    [10, 0, -20, -30, -40, -40, -40, -40],
    [30, 20, -20, -30, -40, -40, -40, -40],
    [20, 20, -10, -20, -30, -30, -30, -30],
];

pub const KING_END: [[i32; 8]; 8] = [
    [-50, -30, -30, -30, -30, -30, -30, -50],
    [-40, -20, -10, -10, -10, -10, -30, -30],
    [-30, -10, 20, 30, 30, 20, 0, -30],
    [-20, 0, 30, 40, 40, 30, 0, -30],
    [-20, 0, 30, 40, 40, 30, 0, -30],
    [-30, -10, 20, 30, 30, 20, 0, -30],
    [-40, -20, -10, -10, -10, -10, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

pub const KING_END_BLACK: [[i32; 8]; 8] = [
    [-50, -30, -30, -30, -30, -30, -30, -50],
    [-30, -30, -10, -10, -10, -10, -20, -40],
    [-30, 0, 20, 30, 30, 20, -10, -30],
    [-30, 0, 30, 40, 40, 30, 0, -20],
    [-30, 0, 30, 40, 40, 30, 0, -20],
    [-30, 0, 20, 30, 30, 20, -10, -30],
    [-30, -30, -10, -10, -10, -10, -20, -40],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];
