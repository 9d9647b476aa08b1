//! Implementation of the chess board, its rules and move generation.

pub mod board;
pub mod core;
pub mod movegen;
pub mod position;
