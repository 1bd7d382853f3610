//! Arena traversal helpers shared by the splay engine and the tree.
//!
//! All helpers take the arena slice and node indices; none of them
//! restructure the tree.

use crate::types::{Node, ScoredNode};

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

#[inline]
pub(crate) fn score_of<N: ScoredNode>(arena: &[N], idx: u32) -> i64 {
    arena[idx as usize].score()
}

/// Leftmost (minimum-score) node of the subtree, `None` for an empty subtree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost (maximum-score) node of the subtree, `None` for an empty subtree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// Plain BST descent by score. Returns the first node met whose score equals
/// `score`; among duplicates, which one is met depends on the tree shape.
pub fn find_by_score<N: ScoredNode>(arena: &[N], root: Option<u32>, score: i64) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let s = score_of(arena, i);
        if score == s {
            return Some(i);
        }
        curr = if score < s {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Preorder (node, left, right) listing of the subtree.
///
/// O(n): this is the only way to look a node up by anything other than score.
pub fn preorder<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(idx) = stack.pop() {
        out.push(idx);
        if let Some(r) = get_r(arena, idx) {
            stack.push(r);
        }
        if let Some(l) = get_l(arena, idx) {
            stack.push(l);
        }
    }
    out
}

/// In-order (left, node, right) listing of the subtree.
pub fn inorder<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(idx) = curr {
            stack.push(idx);
            curr = get_l(arena, idx);
        }
        let Some(idx) = stack.pop() else {
            return out;
        };
        out.push(idx);
        curr = get_r(arena, idx);
    }
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    preorder(arena, root).len()
}

/// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut best = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((idx, depth)) = stack.pop() {
        best = best.max(depth);
        if let Some(l) = get_l(arena, idx) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, idx) {
            stack.push((r, depth + 1));
        }
    }
    best
}
