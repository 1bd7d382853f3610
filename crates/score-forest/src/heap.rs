use std::collections::HashMap;

use crate::container::ScoreContainer;
use crate::record::Record;

/// Array-backed binary max-heap of [`Record`]s keyed by score.
///
/// Keeps an `id → slot` index next to the array so updates and removals by
/// id do not scan. `search` still scans, in level order.
#[derive(Debug, Default)]
pub struct MaxHeap {
    slots: Vec<Record>,
    index: HashMap<String, usize>,
}

impl MaxHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest-scored record without removing it.
    pub fn peek(&self) -> Option<&Record> {
        self.slots.first()
    }

    /// Records in array (level) order.
    pub fn as_slice(&self) -> &[Record] {
        &self.slots
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.index.insert(self.slots[a].id.clone(), a);
        self.index.insert(self.slots[b].id.clone(), b);
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.slots[parent].score >= self.slots[pos].score {
                break;
            }
            self.swap(parent, pos);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.slots.len();
        loop {
            let l = 2 * pos + 1;
            let r = l + 1;
            let mut top = pos;
            if l < len && self.slots[l].score > self.slots[top].score {
                top = l;
            }
            if r < len && self.slots[r].score > self.slots[top].score {
                top = r;
            }
            if top == pos {
                return;
            }
            self.swap(pos, top);
            pos = top;
        }
    }

    /// Move the record at `pos` to wherever its score now belongs.
    fn restore(&mut self, pos: usize) {
        if self.sift_up(pos) == pos {
            self.sift_down(pos);
        }
    }

    /// Take the record at `pos` out, filling the hole with the last record.
    fn take(&mut self, pos: usize) -> Record {
        let last = self.slots.len() - 1;
        if pos != last {
            self.swap(pos, last);
        }
        let rec = self.slots.pop().unwrap_or_default();
        self.index.remove(&rec.id);
        if pos < self.slots.len() {
            self.restore(pos);
        }
        rec
    }
}

impl ScoreContainer for MaxHeap {
    fn build(&mut self, records: Vec<Record>) {
        self.slots.reserve(records.len());
        for rec in records {
            self.insert(rec);
        }
        log::debug!("max heap built, {} stored", self.slots.len());
    }

    fn insert(&mut self, record: Record) {
        if let Some(&pos) = self.index.get(&record.id) {
            self.slots[pos].score = record.score;
            self.restore(pos);
            return;
        }
        let pos = self.slots.len();
        self.index.insert(record.id.clone(), pos);
        self.slots.push(record);
        self.sift_up(pos);
    }

    fn remove(&mut self, id: &str) -> bool {
        match self.index.get(id) {
            Some(&pos) => {
                self.take(pos);
                true
            }
            None => false,
        }
    }

    fn search(&mut self, score: i64) -> Option<Record> {
        self.slots.iter().find(|r| r.score == score).cloned()
    }

    fn extract_max(&mut self) -> Option<Record> {
        if self.slots.is_empty() {
            return None;
        }
        Some(self.take(0))
    }

    fn size(&self) -> usize {
        self.slots.len()
    }
}
