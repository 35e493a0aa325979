//! Static 3D R-tree built top-down with the OMT bulk-loading algorithm.
//!
//! The tree is built once from a complete item collection and is read-only
//! afterwards. Every level of the tree is sorted along a different spatial
//! axis in rotation, which keeps sibling boxes compact and makes query
//! pruning effective.

use thiserror::Error;

use crate::bounds::{Aabb, SpatialObject};

/// Error returned by [`RTree::new`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RTreeError {
    /// The branching factor must be at least 2; the tree height formula is
    /// undefined below that.
    #[error("branching factor must be at least 2, got {0}")]
    InvalidMaxEntries(usize),
}

/// Sort axis for one tree level, rotated X -> Y -> Z -> X at each level.
#[derive(Clone, Copy, Debug)]
enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::Z,
            Self::Z => Self::X,
        }
    }

    fn min_coord(self, bounds: &Aabb) -> f64 {
        match self {
            Self::X => bounds.min_x,
            Self::Y => bounds.min_y,
            Self::Z => bounds.min_z,
        }
    }
}

/// Tree node: either a leaf holding items or an internal node holding child
/// nodes. The bounding box is the union of the children's boxes, computed
/// once at construction.
#[derive(Clone, Debug)]
pub(crate) enum Node<T> {
    Leaf {
        bounds: Aabb,
        items: Vec<T>,
    },
    Internal {
        bounds: Aabb,
        height: usize,
        children: Vec<Node<T>>,
    },
}

impl<T> Node<T> {
    pub(crate) fn bounds(&self) -> &Aabb {
        match self {
            Self::Leaf { bounds, .. } | Self::Internal { bounds, .. } => bounds,
        }
    }

    /// Leaves have height 1; an internal node of height h holds children of
    /// height h - 1.
    pub(crate) fn height(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { height, .. } => *height,
        }
    }
}

/// Static 3D R-tree over objects reporting an [`Aabb`].
///
/// Built in a single pass with the OMT (Overlap Minimizing Top-down)
/// bulk-loading algorithm and immutable afterwards, so any number of threads
/// may query it concurrently. There is no incremental insert or delete;
/// rebuild the tree when the item set changes.
///
/// # Examples
/// ```
/// use rtree3d::prelude::*;
///
/// let boxes = vec![
///     Aabb::new(0.0, 0.0, 0.0, 2.0, 2.0, 2.0),
///     Aabb::new(1.0, 1.0, 1.0, 3.0, 3.0, 3.0),
///     Aabb::new(5.0, 5.0, 5.0, 6.0, 6.0, 6.0),
/// ];
/// let tree = RTree::new(boxes, 16).unwrap();
///
/// let hits = tree.search(&Aabb::new(0.5, 0.5, 0.5, 1.5, 1.5, 1.5));
/// assert_eq!(hits.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct RTree<T> {
    pub(crate) root: Node<T>,
    max_entries: usize,
    count: usize,
}

impl<T: SpatialObject> RTree<T> {
    /// Builds an index over `items` with at most `max_entries` entries per
    /// node.
    ///
    /// An empty `items` collection is valid and produces an empty index.
    /// Construction consumes the collection; the tree owns the items for its
    /// whole lifetime.
    ///
    /// # Errors
    /// Returns [`RTreeError::InvalidMaxEntries`] if `max_entries < 2`.
    pub fn new(items: Vec<T>, max_entries: usize) -> Result<Self, RTreeError> {
        if max_entries < 2 {
            return Err(RTreeError::InvalidMaxEntries(max_entries));
        }
        let (root, count) = bulk_load(items, max_entries);
        Ok(Self { root, max_entries, count })
    }

    /// Number of indexed items.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns whether the tree indexes no items.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The configured branching factor.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Bounding box of everything in the tree; [`Aabb::EMPTY`] for an empty
    /// tree.
    pub fn bounds(&self) -> Aabb {
        *self.root.bounds()
    }

    /// Height of the tree: 1 for a tree whose root is a leaf, and
    /// ceil(log_M(N)) for N items at branching factor M otherwise.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns every indexed item, in unspecified order.
    pub fn all_items(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.count);
        collect_items(&self.root, &mut items);
        items
    }

    /// Returns every indexed item whose box intersects `query`, in
    /// unspecified order.
    ///
    /// Subtrees whose box is disjoint from `query` are skipped entirely.
    pub fn search(&self, query: &Aabb) -> Vec<&T> {
        let mut results = Vec::new();
        if !self.root.bounds().intersects(query) {
            return results;
        }

        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { items, .. } => {
                    results.extend(items.iter().filter(|item| item.bounds().intersects(query)));
                }
                Node::Internal { children, .. } => {
                    stack.extend(children.iter().filter(|child| child.bounds().intersects(query)));
                }
            }
        }
        results
    }
}

/// Builds the whole tree, returning the root and the number of leaf items.
fn bulk_load<T: SpatialObject>(items: Vec<T>, max_entries: usize) -> (Node<T>, usize) {
    let n = items.len();
    if n <= max_entries {
        // Covers the empty and single-item cases
        return make_leaf(items);
    }

    // Smallest height with capacity M^height >= n, i.e. ceil(log_M(n)),
    // computed in integer arithmetic so exact powers of M do not round up
    let mut height = 1usize;
    let mut capacity = max_entries;
    while capacity < n {
        height += 1;
        capacity = capacity.saturating_mul(max_entries);
    }

    // The root fan-out is sized so its children split n as evenly as the
    // target height allows; every deeper level uses max_entries
    let subtree_capacity = capacity / max_entries;
    let root_max = n.div_ceil(subtree_capacity);

    partition(items, height, root_max, Axis::X, max_entries)
}

/// Recursively partitions `items` into a node of the given height.
///
/// `level_max` bounds this level's chunk size: the root fan-out on the first
/// call, `max_entries` everywhere below. Returns the node and the number of
/// leaf items it contains.
fn partition<T: SpatialObject>(
    mut items: Vec<T>,
    height: usize,
    level_max: usize,
    axis: Axis,
    max_entries: usize,
) -> (Node<T>, usize) {
    if items.len() <= level_max {
        return make_leaf(items);
    }

    items.sort_by(|a, b| {
        axis.min_coord(&a.bounds())
            .total_cmp(&axis.min_coord(&b.bounds()))
    });

    let next_axis = axis.next();
    let mut children = Vec::with_capacity(items.len().div_ceil(level_max));
    let mut count = 0;

    // Split the sorted run into contiguous chunks, packing all but the last
    while !items.is_empty() {
        let chunk = if items.len() > level_max {
            let tail = items.split_off(level_max);
            std::mem::replace(&mut items, tail)
        } else {
            std::mem::take(&mut items)
        };
        let (child, child_count) = partition(chunk, height - 1, max_entries, next_axis, max_entries);
        count += child_count;
        children.push(child);
    }

    let bounds = Aabb::enclosing(children.iter().map(|child| *child.bounds()));
    (Node::Internal { bounds, height, children }, count)
}

fn make_leaf<T: SpatialObject>(items: Vec<T>) -> (Node<T>, usize) {
    let bounds = Aabb::enclosing(items.iter().map(SpatialObject::bounds));
    let count = items.len();
    (Node::Leaf { bounds, items }, count)
}

fn collect_items<'a, T>(node: &'a Node<T>, out: &mut Vec<&'a T>) {
    match node {
        Node::Leaf { items, .. } => out.extend(items.iter()),
        Node::Internal { children, .. } => {
            for child in children {
                collect_items(child, out);
            }
        }
    }
}
