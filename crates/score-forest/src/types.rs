//! Node trait and the concrete arena node.
//!
//! Nodes live in a caller-owned `Vec<N>` arena. Each child "pointer" is an
//! `Option<u32>` index into that arena. There is no parent link: every
//! operation that needs a path re-derives it from the root.

use crate::record::Record;

/// Child links (`l`, `r`) of an arena node.
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Nodes that carry a score the splay engine can descend by.
pub trait ScoredNode: Node {
    fn score(&self) -> i64;
}

/// Arena node holding one [`Record`].
#[derive(Clone, Debug, Default)]
pub struct ScoreNode {
    pub l: Option<u32>,
    pub r: Option<u32>,
    // Freed slots keep an empty record until they are reused.
    pub rec: Record,
}

impl ScoreNode {
    pub fn new(rec: Record) -> Self {
        Self {
            l: None,
            r: None,
            rec,
        }
    }
}

impl Node for ScoreNode {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl ScoredNode for ScoreNode {
    fn score(&self) -> i64 {
        self.rec.score
    }
}
