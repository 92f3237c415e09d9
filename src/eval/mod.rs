//! Evaluation module for Gomoku positions
//!
//! This module provides pattern scoring for single cells and whole boards.
//! The evaluation considers:
//! - Directional runs (twos, threes, fours, fives) and their open ends
//! - Defensive weighting of the opponent's runs
//! - Positional bonus (center proximity)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{
    evaluate_board, evaluate_direction, evaluate_position, scan_direction, DirectionScan,
};
pub use patterns::{line_score, PatternScore};
