use std::cmp::Ordering;
use std::fmt;

/// A scored record: an identifier plus an integer score.
///
/// Containers order records by `score` only. Two records are `==` when both
/// fields match; use [`Record::cmp_score`] for the container ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Record {
    pub id: String,
    pub score: i64,
}

impl Record {
    pub fn new(id: impl Into<String>, score: i64) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }

    /// Orders two records by score, ignoring their ids.
    #[inline]
    pub fn cmp_score(&self, other: &Record) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.score)
    }
}

impl<S: Into<String>> From<(S, i64)> for Record {
    fn from((id, score): (S, i64)) -> Self {
        Record::new(id, score)
    }
}
