//! Containers for scored records, built around an arena-based splay tree.
//!
//! A [`SplayTree`] keeps [`Record`]s ordered by score and moves every node it
//! touches to the root, giving amortised O(log n) insert, search, removal
//! and max extraction. A [`MaxHeap`] implements the same
//! [`ScoreContainer`] contract for comparison.
//!
//! Nodes are not heap-allocated individually: they live in a `Vec` arena
//! owned by the tree, and every "pointer" is an `Option<u32>` index into
//! it. Nodes carry no parent link; paths are re-derived from the root.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`record`] | [`Record`] value type |
//! [`types`] | [`Node`] / [`ScoredNode`] traits, [`ScoreNode`] |
//! [`splay`] | single and double rotations, [`splay()`] |
//! [`util`] | traversal helpers (`first`, `last`, `preorder`, …) |
//! [`tree`] | [`SplayTree`] |
//! [`heap`] | [`MaxHeap`] |
//! [`container`] | [`ScoreContainer`] trait |
//!
//! # Example
//!
//! ```
//! use score_forest::{Record, ScoreContainer, SplayTree};
//!
//! let mut tree = SplayTree::new();
//! tree.build(vec![Record::new("A", 5), Record::new("B", 3), Record::new("C", 8)]);
//! assert_eq!(tree.extract_max(), Some(Record::new("C", 8)));
//! assert_eq!(tree.search(3), Some(Record::new("B", 3)));
//! assert!(tree.remove("B"));
//! assert_eq!(tree.search(3), None);
//! assert_eq!(tree.size(), 1);
//! ```

pub mod container;
pub mod heap;
pub mod record;
pub mod splay;
pub mod tree;
pub mod types;
pub mod util;

pub use container::ScoreContainer;
pub use heap::MaxHeap;
pub use record::Record;
pub use splay::{
    rotate_left, rotate_right, splay, zig_zag_left_right, zig_zag_right_left, zig_zig_left,
    zig_zig_right,
};
pub use tree::SplayTree;
pub use types::{Node, ScoreNode, ScoredNode};
