//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use rtree3d::prelude::*;
//! ```

pub use crate::bounds::{Aabb, SpatialObject};
pub use crate::rtree::{RTree, RTreeError};
