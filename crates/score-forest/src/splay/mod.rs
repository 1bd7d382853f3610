//! Splay-tree rotations and the splay engine.
//!
//! All functions take the arena and node indices (u32). Rotations return the
//! new local root; it is up to the caller to hook that root back into
//! whatever pointed at the old one.
//!
//! Naming follows the direction the *root* turns:
//! [`rotate_right`] promotes a left child, [`zig_zig_right`] handles the
//! left-left case, [`zig_zag_left_right`] the left-right case, and so on.

use std::cmp::Ordering;

use crate::types::{Node, ScoredNode};
use crate::util::{get_l, get_r, score_of, set_l, set_r};

// ── single rotations ──────────────────────────────────────────────────────

/// Promote the left child of `node`.
///
/// ```text
///     node          a
///    /    \        / \
///   a      c  →   x   node
///  / \               /    \
/// x   b             b      c
/// ```
///
/// Panics if `node` has no left child.
pub fn rotate_right<N: Node>(arena: &mut [N], node: u32) -> u32 {
    let Some(a) = get_l(arena, node) else {
        panic!("rotate_right: node {node} has no left child");
    };
    let b = get_r(arena, a);
    set_l(arena, node, b);
    set_r(arena, a, Some(node));
    a
}

/// Promote the right child of `node`. Mirror of [`rotate_right`].
///
/// Panics if `node` has no right child.
pub fn rotate_left<N: Node>(arena: &mut [N], node: u32) -> u32 {
    let Some(a) = get_r(arena, node) else {
        panic!("rotate_left: node {node} has no right child");
    };
    let b = get_l(arena, a);
    set_r(arena, node, b);
    set_l(arena, a, Some(node));
    a
}

// ── double rotations ──────────────────────────────────────────────────────

/// Zig-zig for a target that is the left child of a left child of `grand`.
/// Rotates about the grandparent, then about the parent.
pub fn zig_zig_right<N: Node>(arena: &mut [N], grand: u32) -> u32 {
    let grandchild = get_l(arena, grand).and_then(|p| get_l(arena, p));
    if grandchild.is_none() {
        panic!("zig_zig_right: node {grand} has no left-left grandchild");
    }
    let top = rotate_right(arena, grand);
    rotate_right(arena, top)
}

/// Zig-zig for a target that is the right child of a right child of `grand`.
pub fn zig_zig_left<N: Node>(arena: &mut [N], grand: u32) -> u32 {
    let grandchild = get_r(arena, grand).and_then(|p| get_r(arena, p));
    if grandchild.is_none() {
        panic!("zig_zig_left: node {grand} has no right-right grandchild");
    }
    let top = rotate_left(arena, grand);
    rotate_left(arena, top)
}

/// Zig-zag for a target that is the right child of a left child of `grand`.
/// Rotates about the parent, then the opposite way about the grandparent.
pub fn zig_zag_left_right<N: Node>(arena: &mut [N], grand: u32) -> u32 {
    let Some(parent) = get_l(arena, grand).filter(|&p| get_r(arena, p).is_some()) else {
        panic!("zig_zag_left_right: node {grand} has no left-right grandchild");
    };
    let mid = rotate_left(arena, parent);
    set_l(arena, grand, Some(mid));
    rotate_right(arena, grand)
}

/// Zig-zag for a target that is the left child of a right child of `grand`.
pub fn zig_zag_right_left<N: Node>(arena: &mut [N], grand: u32) -> u32 {
    let Some(parent) = get_r(arena, grand).filter(|&p| get_l(arena, p).is_some()) else {
        panic!("zig_zag_right_left: node {grand} has no right-left grandchild");
    };
    let mid = rotate_right(arena, parent);
    set_r(arena, grand, Some(mid));
    rotate_left(arena, grand)
}

// ── splay ─────────────────────────────────────────────────────────────────

/// Root-to-`target` path, found by descending on `target`'s score.
///
/// Arrival is detected by index, not by score. Rotations can leave a node
/// with an equal score on either side of another, so at an equal-score node
/// that is not the target both subtrees are searched (right first).
/// Returns `None` if `target` is not reachable from `root`.
pub fn path_to<N: ScoredNode>(arena: &[N], root: u32, target: u32) -> Option<Vec<u32>> {
    let score = score_of(arena, target);
    let mut path = Vec::new();
    let mut stack = vec![(root, 0usize)];
    while let Some((idx, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(idx);
        if idx == target {
            return Some(path);
        }
        let l = get_l(arena, idx);
        let r = get_r(arena, idx);
        match score.cmp(&score_of(arena, idx)) {
            Ordering::Less => stack.extend(l.map(|l| (l, depth + 1))),
            Ordering::Greater => stack.extend(r.map(|r| (r, depth + 1))),
            Ordering::Equal => {
                stack.extend(l.map(|l| (l, depth + 1)));
                stack.extend(r.map(|r| (r, depth + 1)));
            }
        }
    }
    None
}

/// Move `target` to the root of the subtree rooted at `root`, keeping the
/// in-order sequence intact. Returns the new subtree root.
///
/// If `target` cannot be reached from `root` the subtree is left as it was
/// and `root` is returned unchanged.
pub fn splay<N: ScoredNode>(arena: &mut [N], root: Option<u32>, target: u32) -> Option<u32> {
    let top = root?;
    if top == target {
        return root;
    }
    let Some(mut path) = path_to(arena, top, target) else {
        log::trace!("splay: node {target} not reachable from {top}");
        return root;
    };
    path.pop();

    while path.len() > 1 {
        let n = path.len();
        let (grand, parent) = (path[n - 2], path[n - 1]);
        path.truncate(n - 2);

        let lower_left = get_l(arena, parent) == Some(target);
        let upper_left = get_l(arena, grand) == Some(parent);
        let subtree = match (upper_left, lower_left) {
            (true, true) => zig_zig_right(arena, grand),
            (false, false) => zig_zig_left(arena, grand),
            (true, false) => zig_zag_left_right(arena, grand),
            (false, true) => zig_zag_right_left(arena, grand),
        };

        if let Some(&above) = path.last() {
            if get_l(arena, above) == Some(grand) {
                set_l(arena, above, Some(subtree));
            } else {
                set_r(arena, above, Some(subtree));
            }
        }
    }

    if let Some(&parent) = path.last() {
        if get_l(arena, parent) == Some(target) {
            rotate_right(arena, parent);
        } else {
            rotate_left(arena, parent);
        }
    }

    Some(target)
}
