//! Search score with decisive sentinels

use std::fmt;

/// Totally ordered evaluation score.
///
/// Variant order gives the ordering: a decided loss for the maximizer is
/// below every finite value, a decided win above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// The minimizing stone has a winning run (-inf)
    MinimizerWin,
    /// Finite pattern score, positive favours the maximizer
    Value(i64),
    /// The maximizing stone has a winning run (+inf)
    MaximizerWin,
}

impl Score {
    pub const NEG_INFINITY: Score = Score::MinimizerWin;
    pub const INFINITY: Score = Score::MaximizerWin;

    /// Either side has already won
    #[inline]
    pub fn is_decisive(self) -> bool {
        !matches!(self, Score::Value(_))
    }

    /// Finite value, `None` for the sentinels
    #[inline]
    pub fn value(self) -> Option<i64> {
        match self {
            Score::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Score::Value(0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::MinimizerWin => write!(f, "-inf"),
            Score::Value(v) => write!(f, "{v}"),
            Score::MaximizerWin => write!(f, "+inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_bound_all_values() {
        for v in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert!(Score::NEG_INFINITY < Score::Value(v));
            assert!(Score::Value(v) < Score::INFINITY);
        }
    }

    #[test]
    fn test_values_ordered_numerically() {
        assert!(Score::Value(-50) < Score::Value(10));
        assert_eq!(Score::Value(3).max(Score::Value(-3)), Score::Value(3));
    }

    #[test]
    fn test_decisive() {
        assert!(Score::INFINITY.is_decisive());
        assert!(Score::NEG_INFINITY.is_decisive());
        assert!(!Score::Value(100_000).is_decisive());
        assert_eq!(Score::INFINITY.value(), None);
        assert_eq!(Score::Value(12).value(), Some(12));
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::INFINITY.to_string(), "+inf");
        assert_eq!(Score::NEG_INFINITY.to_string(), "-inf");
        assert_eq!(Score::Value(-40).to_string(), "-40");
    }
}
