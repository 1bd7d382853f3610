use std::collections::HashSet;

use crate::container::ScoreContainer;
use crate::record::Record;
use crate::splay::splay;
use crate::types::ScoreNode;
use crate::util::{find_by_score, first, height, inorder, last, preorder};

/// Self-adjusting binary search tree of [`Record`]s ordered by score.
///
/// Nodes live in an arena; freed slots are recycled. Ties in score go to the
/// right on insert. Every access through the [`ScoreContainer`] methods
/// splays the touched node to the root.
#[derive(Debug, Default)]
pub struct SplayTree {
    root: Option<u32>,
    size: usize,
    arena: Vec<ScoreNode>,
    free: Vec<u32>,
    // Ids currently stored, so inserts can tell a new id from an existing one
    // that is not on the descent path.
    ids: HashSet<String>,
}

/// Outcome of one descent in [`SplayTree::locate_or_insert`].
enum Descent {
    /// A node with the record's id was met on the path.
    Hit { node: u32, low: Option<i64>, high: Option<i64> },
    /// The descent ran off the tree below `parent`.
    Vacant { parent: Option<u32>, left: bool },
}

impl SplayTree {
    pub fn new() -> Self {
        Self::default()
    }

    // ── arena ─────────────────────────────────────────────────────────────

    fn alloc(&mut self, rec: Record) -> u32 {
        let node = ScoreNode::new(rec);
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize] = node;
                idx
            }
            None => {
                self.arena.push(node);
                (self.arena.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, idx: u32) -> Record {
        let node = std::mem::take(&mut self.arena[idx as usize]);
        self.free.push(idx);
        node.rec
    }

    #[inline]
    fn rec(&self, idx: u32) -> &Record {
        &self.arena[idx as usize].rec
    }

    // ── tree operations ───────────────────────────────────────────────────

    fn descend(&self, rec: &Record) -> Descent {
        let mut low = None;
        let mut high = None;
        let mut parent = None;
        let mut left = false;
        let mut curr = self.root;
        while let Some(idx) = curr {
            let node = &self.arena[idx as usize];
            if node.rec.id == rec.id {
                return Descent::Hit { node: idx, low, high };
            }
            parent = Some(idx);
            left = rec.score < node.rec.score;
            if left {
                high = Some(node.rec.score);
                curr = node.l;
            } else {
                low = Some(node.rec.score);
                curr = node.r;
            }
        }
        Descent::Vacant { parent, left }
    }

    /// Whether `score` can replace the score of `node` without breaking the
    /// in-order sequence. `low`/`high` bound the node from its ancestors.
    fn fits(&self, node: u32, score: i64, low: Option<i64>, high: Option<i64>) -> bool {
        let n = &self.arena[node as usize];
        let below = last(&self.arena, n.l).map(|i| self.rec(i).score).or(low);
        let above = first(&self.arena, n.r).map(|i| self.rec(i).score).or(high);
        below.map_or(true, |b| b <= score) && above.map_or(true, |a| score <= a)
    }

    /// Find the node for `rec.id`, or link a new one, and return its index.
    ///
    /// Descends by score (ties right). An id met on the path is updated in
    /// place when the new score keeps the in-order sequence sorted; otherwise
    /// the old node is removed and the record is inserted afresh. An id stored
    /// off the path is found by a preorder scan and removed first.
    /// The returned node is not splayed.
    pub fn locate_or_insert(&mut self, rec: Record) -> u32 {
        loop {
            match self.descend(&rec) {
                Descent::Hit { node, low, high } => {
                    if self.fits(node, rec.score, low, high) {
                        self.arena[node as usize].rec.score = rec.score;
                        return node;
                    }
                    log::trace!("relocating {} to score {}", rec.id, rec.score);
                    self.remove_node(node);
                }
                Descent::Vacant { .. } if self.ids.contains(&rec.id) => {
                    if let Some(stale) = self.find_by_id(&rec.id) {
                        log::trace!("replacing off-path node for {}", rec.id);
                        self.remove_node(stale);
                    } else {
                        self.ids.remove(&rec.id);
                    }
                }
                Descent::Vacant { parent, left } => {
                    self.ids.insert(rec.id.clone());
                    let node = self.alloc(rec);
                    match parent {
                        None => self.root = Some(node),
                        Some(p) if left => self.arena[p as usize].l = Some(node),
                        Some(p) => self.arena[p as usize].r = Some(node),
                    }
                    self.size += 1;
                    return node;
                }
            }
        }
    }

    /// First node met with `score` on a plain descent from the root. Does
    /// not splay.
    pub fn locate_by_score(&self, score: i64) -> Option<u32> {
        find_by_score(&self.arena, self.root, score)
    }

    /// Node holding `id`. O(n): the tree is not ordered by id.
    pub fn find_by_id(&self, id: &str) -> Option<u32> {
        self.preorder_collect()
            .into_iter()
            .find(|&idx| self.rec(idx).id == id)
    }

    /// Splay `node` to the root, then join its two subtrees: the maximum of
    /// the left subtree is splayed to the top of that subtree and takes the
    /// right subtree as its right child.
    pub fn remove_node(&mut self, node: u32) -> Record {
        self.root = splay(&mut self.arena, self.root, node);
        debug_assert_eq!(self.root, Some(node));

        let (l, r) = {
            let n = &self.arena[node as usize];
            (n.l, n.r)
        };
        self.root = match last(&self.arena, l) {
            Some(pred) => {
                let joined = splay(&mut self.arena, l, pred);
                self.arena[pred as usize].r = r;
                joined
            }
            None => r,
        };

        self.size -= 1;
        let rec = self.release(node);
        self.ids.remove(&rec.id);
        rec
    }

    pub fn max_node(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    pub fn min_node(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    /// Preorder listing of all nodes. O(n).
    pub fn preorder_collect(&self) -> Vec<u32> {
        preorder(&self.arena, self.root)
    }

    fn splay_to_root(&mut self, node: u32) {
        self.root = splay(&mut self.arena, self.root, node);
    }

    // ── inspection ────────────────────────────────────────────────────────

    pub fn root_record(&self) -> Option<&Record> {
        self.root.map(|r| self.rec(r))
    }

    /// Copies of all records in ascending score order. Does not splay.
    pub fn records(&self) -> Vec<Record> {
        inorder(&self.arena, self.root)
            .into_iter()
            .map(|i| self.rec(i).clone())
            .collect()
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn max(&self) -> Option<&Record> {
        self.max_node().map(|i| self.rec(i))
    }

    pub fn min(&self) -> Option<&Record> {
        self.min_node().map(|i| self.rec(i))
    }

    fn to_string_node(&self, node: u32, tab: &str, side: &str) -> String {
        let n = &self.arena[node as usize];
        let mut s = format!("\n{tab}{side} {}", n.rec);
        if let Some(l) = n.l {
            s.push_str(&self.to_string_node(l, &format!("{tab}  "), "←"));
        }
        if let Some(r) = n.r {
            s.push_str(&self.to_string_node(r, &format!("{tab}  "), "→"));
        }
        s
    }

    /// Renders the tree shape, one node per line.
    pub fn to_string(&self, tab: &str) -> String {
        match self.root {
            Some(root) => format!("SplayTree{}", self.to_string_node(root, tab, "└─")),
            None => "SplayTree ∅".to_string(),
        }
    }
}

impl ScoreContainer for SplayTree {
    fn build(&mut self, records: Vec<Record>) {
        let count = records.len();
        for rec in records {
            self.insert(rec);
        }
        log::debug!("splay tree built from {count} records, {} stored", self.size);
    }

    fn insert(&mut self, record: Record) {
        let node = self.locate_or_insert(record);
        self.splay_to_root(node);
    }

    fn remove(&mut self, id: &str) -> bool {
        if !self.ids.contains(id) {
            return false;
        }
        match self.find_by_id(id) {
            Some(node) => {
                self.remove_node(node);
                true
            }
            None => false,
        }
    }

    fn search(&mut self, score: i64) -> Option<Record> {
        let node = self.locate_by_score(score)?;
        self.splay_to_root(node);
        Some(self.rec(node).clone())
    }

    fn extract_max(&mut self) -> Option<Record> {
        let node = self.max_node()?;
        Some(self.remove_node(node))
    }

    fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::size;

    fn tree_of(records: &[(&str, i64)]) -> SplayTree {
        let mut tree = SplayTree::new();
        tree.build(records.iter().map(|&(id, s)| Record::new(id, s)).collect());
        tree
    }

    fn scores(tree: &SplayTree) -> Vec<i64> {
        tree.records().iter().map(|r| r.score).collect()
    }

    #[test]
    fn locate_or_insert_links_without_splaying() {
        let mut tree = SplayTree::new();
        let a = tree.locate_or_insert(Record::new("a", 5));
        let b = tree.locate_or_insert(Record::new("b", 3));
        let c = tree.locate_or_insert(Record::new("c", 5));
        assert_eq!(tree.root, Some(a));
        assert_eq!(tree.arena[a as usize].l, Some(b));
        // ties go right
        assert_eq!(tree.arena[a as usize].r, Some(c));
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn update_in_place_when_order_holds() {
        let mut tree = SplayTree::new();
        let a = tree.locate_or_insert(Record::new("a", 5));
        tree.locate_or_insert(Record::new("b", 1));
        tree.locate_or_insert(Record::new("c", 9));
        let again = tree.locate_or_insert(Record::new("a", 7));
        assert_eq!(again, a);
        assert_eq!(tree.size(), 3);
        assert_eq!(scores(&tree), vec![1, 7, 9]);
    }

    #[test]
    fn update_that_breaks_order_relocates() {
        let mut tree = tree_of(&[("a", 5), ("b", 1), ("c", 9)]);
        tree.insert(Record::new("b", 20));
        assert_eq!(tree.size(), 3);
        assert_eq!(scores(&tree), vec![5, 9, 20]);
        assert_eq!(tree.root_record(), Some(&Record::new("b", 20)));
    }

    #[test]
    fn update_of_off_path_id_does_not_duplicate() {
        // "low" sits in the left subtree; a new high score descends right.
        let mut tree = SplayTree::new();
        tree.locate_or_insert(Record::new("mid", 50));
        tree.locate_or_insert(Record::new("low", 10));
        tree.locate_or_insert(Record::new("high", 90));
        tree.insert(Record::new("low", 95));
        assert_eq!(tree.size(), 3);
        assert_eq!(scores(&tree), vec![50, 90, 95]);
        assert_eq!(size(&tree.arena, tree.root), 3);
    }

    #[test]
    fn remove_node_joins_subtrees() {
        let mut tree = tree_of(&[("a", 50), ("b", 30), ("c", 70), ("d", 20), ("e", 40), ("f", 60)]);
        let node = tree.find_by_id("a").unwrap();
        let rec = tree.remove_node(node);
        assert_eq!(rec, Record::new("a", 50));
        // predecessor becomes the root
        assert_eq!(tree.root_record().map(|r| r.score), Some(40));
        assert_eq!(scores(&tree), vec![20, 30, 40, 60, 70]);
        assert_eq!(tree.size(), 5);
    }

    #[test]
    fn remove_minimum_promotes_right_subtree() {
        let mut tree = tree_of(&[("a", 10), ("b", 20), ("c", 30)]);
        let node = tree.find_by_id("a").unwrap();
        tree.remove_node(node);
        assert_eq!(scores(&tree), vec![20, 30]);
        assert!(tree.root.is_some());
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut tree = tree_of(&[("a", 1), ("b", 2)]);
        assert!(tree.remove("a"));
        tree.insert(Record::new("c", 3));
        assert_eq!(tree.arena.len(), 2);
        assert_eq!(scores(&tree), vec![2, 3]);
    }

    #[test]
    fn min_max_and_empty_tree() {
        let tree = SplayTree::new();
        assert_eq!(tree.max_node(), None);
        assert_eq!(tree.min_node(), None);
        assert_eq!(tree.to_string(""), "SplayTree ∅");

        let tree = tree_of(&[("a", 4), ("b", 8), ("c", 2)]);
        assert_eq!(tree.max().map(|r| r.score), Some(8));
        assert_eq!(tree.min().map(|r| r.score), Some(2));
    }

    #[test]
    fn to_string_renders_shape() {
        let mut tree = SplayTree::new();
        tree.locate_or_insert(Record::new("a", 5));
        tree.locate_or_insert(Record::new("b", 3));
        tree.locate_or_insert(Record::new("c", 8));
        assert_eq!(
            tree.to_string(""),
            "SplayTree\n└─ a (5)\n  ← b (3)\n  → c (8)"
        );
    }
}
