//! Pattern weights for Gomoku evaluation
//!
//! A pattern is a run of same-colored stones seen from one cell along one
//! direction, classified by its length and by how many of its two ends are
//! empty.

use serde::{Deserialize, Serialize};

/// Run length that always scores as a five, whatever the configured
/// winning length.
pub const FIVE_RUN: usize = 5;

/// Pattern category of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Five or more in a row
    Five,
    /// Open four: _OOOO_
    OpenFour,
    /// Closed four: XOOOO_ or _OOOOX
    Four,
    /// Open three: _OOO_
    OpenThree,
    /// Closed three: XOOO_ or _OOOX
    Three,
    /// Open two: _OO_
    OpenTwo,
    /// Closed two: XOO_ or _OOX
    Two,
}

impl Pattern {
    /// Classify a run of `count` stones by its open ends.
    ///
    /// Returns `None` for singletons and for runs shorter than five with
    /// both ends blocked; those contribute nothing.
    pub fn classify(count: usize, open_start: bool, open_end: bool) -> Option<Pattern> {
        let both = open_start && open_end;
        let either = open_start || open_end;
        match count {
            c if c >= FIVE_RUN => Some(Pattern::Five),
            4 if both => Some(Pattern::OpenFour),
            4 if either => Some(Pattern::Four),
            3 if both => Some(Pattern::OpenThree),
            3 if either => Some(Pattern::Three),
            2 if both => Some(Pattern::OpenTwo),
            2 if either => Some(Pattern::Two),
            _ => None,
        }
    }
}

/// Score attached to each pattern category.
///
/// Immutable once handed to the evaluator; loaded from the `[search.weights]`
/// table of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternWeights {
    pub five: i64,
    pub open_four: i64,
    pub four: i64,
    pub open_three: i64,
    pub three: i64,
    pub open_two: i64,
    pub two: i64,
}

impl Default for PatternWeights {
    fn default() -> Self {
        Self {
            five: 100_000,
            open_four: 10_000,
            four: 1_000,
            open_three: 500,
            three: 100,
            open_two: 50,
            two: 10,
        }
    }
}

impl PatternWeights {
    #[inline]
    pub fn weight(&self, pattern: Pattern) -> i64 {
        match pattern {
            Pattern::Five => self.five,
            Pattern::OpenFour => self.open_four,
            Pattern::Four => self.four,
            Pattern::OpenThree => self.open_three,
            Pattern::Three => self.three,
            Pattern::OpenTwo => self.open_two,
            Pattern::Two => self.two,
        }
    }

    /// Weight of a run of `count` stones with the given open ends, 0 when
    /// the run does not form a scoring pattern.
    #[inline]
    pub fn score_run(&self, count: usize, open_start: bool, open_end: bool) -> i64 {
        Pattern::classify(count, open_start, open_end).map_or(0, |p| self.weight(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        let w = PatternWeights::default();
        assert!(w.five > w.open_four);
        assert!(w.open_four > w.four);
        assert!(w.four > w.open_three);
        assert!(w.open_three > w.three);
        assert!(w.three > w.open_two);
        assert!(w.open_two > w.two);
    }

    #[test]
    fn test_classify_five_ignores_ends() {
        assert_eq!(Pattern::classify(5, false, false), Some(Pattern::Five));
        assert_eq!(Pattern::classify(7, true, false), Some(Pattern::Five));
    }

    #[test]
    fn test_classify_by_open_ends() {
        assert_eq!(Pattern::classify(4, true, true), Some(Pattern::OpenFour));
        assert_eq!(Pattern::classify(4, false, true), Some(Pattern::Four));
        assert_eq!(Pattern::classify(3, true, true), Some(Pattern::OpenThree));
        assert_eq!(Pattern::classify(3, true, false), Some(Pattern::Three));
        assert_eq!(Pattern::classify(2, true, true), Some(Pattern::OpenTwo));
        assert_eq!(Pattern::classify(2, false, true), Some(Pattern::Two));
    }

    #[test]
    fn test_classify_dead_runs() {
        assert_eq!(Pattern::classify(4, false, false), None);
        assert_eq!(Pattern::classify(3, false, false), None);
        assert_eq!(Pattern::classify(2, false, false), None);
        assert_eq!(Pattern::classify(1, true, true), None);
    }

    #[test]
    fn test_score_run_uses_configured_weights() {
        let w = PatternWeights {
            three: 7,
            ..PatternWeights::default()
        };
        assert_eq!(w.score_run(3, false, true), 7);
        assert_eq!(w.score_run(4, true, true), 10_000);
        assert_eq!(w.score_run(1, true, true), 0);
    }
}
