//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation with heuristic pre-ranking
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use movegen::{best_cell, candidate_cells, generate_moves, ScoredMove, MAX_CANDIDATES};
