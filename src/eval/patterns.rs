//! Pattern scores for Gomoku evaluation
//!
//! A directional run is scored from its length and the number of open ends
//! found directly beyond it.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row, regardless of ends
    pub const FIVE: f64 = 10_000.0;

    /// Four with at least one open end
    pub const OPEN_FOUR: f64 = 1_000.0;
    /// Four blocked on both sides
    pub const DEAD_FOUR: f64 = 100.0;

    /// Open three: _OOO_
    pub const OPEN_THREE: f64 = 500.0;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: f64 = 50.0;
    /// Three blocked on both sides
    pub const DEAD_THREE: f64 = 10.0;

    /// Open two: _OO_
    pub const OPEN_TWO: f64 = 50.0;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: f64 = 10.0;
    /// Two blocked on both sides
    pub const DEAD_TWO: f64 = 1.0;
}

/// Score a run of `consecutive` stones with `open_ends` empty cells beyond it.
#[must_use]
pub fn line_score(consecutive: u32, open_ends: u32) -> f64 {
    match (consecutive, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 1..) => PatternScore::OPEN_FOUR,
        (4, 0) => PatternScore::DEAD_FOUR,
        (3, 2..) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (3, 0) => PatternScore::DEAD_THREE,
        (2, 2..) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (2, 0) => PatternScore::DEAD_TWO,
        _ => 0.0,
    }
}
