//! # rtree3d - Static 3D R-tree Spatial Index
//!
//! A Rust library providing a bulk-loaded R-tree for range queries over 3D
//! axis-aligned bounding boxes (AABBs).
//!
//! ## Features
//!
//! - **OMT Bulk Loading**: The whole tree is packed top-down in one pass,
//!   rotating the sort axis per level for balanced spatial distribution
//! - **AABB Intersection Queries**: Fast box-overlap search with subtree
//!   pruning
//! - **Bring Your Own Items**: Index any type that reports a bounding box
//!   via the [`SpatialObject`] trait
//! - **Static Optimization**: Build once, query from any number of threads
//!
//! ## Quick Start
//!
//! ```rust
//! use rtree3d::prelude::*;
//!
//! // Boxes are (min_x, min_y, min_z, max_x, max_y, max_z)
//! let boxes = vec![
//!     Aabb::new(0.0, 0.0, 0.0, 2.0, 2.0, 2.0),   // Box 0: large box
//!     Aabb::new(1.0, 1.0, 1.0, 3.0, 3.0, 3.0),   // Box 1: overlapping box
//!     Aabb::new(5.0, 5.0, 5.0, 6.0, 6.0, 6.0),   // Box 2: distant box
//!     Aabb::new(1.5, 1.5, 1.5, 2.5, 2.5, 2.5),   // Box 3: small box inside others
//! ];
//!
//! // Build the index in one shot (max 16 entries per node)
//! let tree = RTree::new(boxes, 16).unwrap();
//! assert_eq!(tree.count(), 4);
//!
//! // Query for boxes intersecting a region
//! let results = tree.search(&Aabb::new(1.2, 1.2, 1.2, 2.8, 2.8, 2.8));
//! println!("Found {} intersecting boxes", results.len());
//! // Output: Found 3 intersecting boxes
//! ```
//!
//! ## How It Works
//!
//! The tree is built with the OMT (Overlap Minimizing Top-down) bulk-loading
//! algorithm: items are recursively sorted and split into chunks, with the
//! sort axis rotating X -> Y -> Z -> X at each tree level so no single
//! dimension dominates the partitioning. Each node caches the union of its
//! children's boxes, letting a search skip entire subtrees whose box is
//! disjoint from the query.
//!
//! The tree is immutable once built. There is no incremental insert or
//! delete; rebuild the index when the item set changes.

pub mod bounds;
pub mod prelude;
pub mod rtree;

pub use bounds::{Aabb, SpatialObject};
pub use rtree::{RTree, RTreeError};
