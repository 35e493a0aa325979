//! Axis-aligned bounding boxes and the capability trait for indexable objects.

/// 3D axis-aligned bounding box: minimum and maximum coordinate per axis.
///
/// Plain value type with exact structural equality; callers needing tolerance
/// must snap coordinates before comparing. The min <= max invariant is
/// expected but not enforced; a box with min == max represents a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum x coordinate
    pub min_x: f64,
    /// Minimum y coordinate
    pub min_y: f64,
    /// Minimum z coordinate
    pub min_z: f64,
    /// Maximum x coordinate
    pub max_x: f64,
    /// Maximum y coordinate
    pub max_y: f64,
    /// Maximum z coordinate
    pub max_z: f64,
}

impl Aabb {
    /// The union seed: min at +infinity, max at -infinity per axis.
    ///
    /// Covers nothing and intersects nothing; it is the result of
    /// [`Aabb::enclosing`] over an empty sequence and the bounds of an empty
    /// tree.
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        min_z: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
        max_z: f64::NEG_INFINITY,
    };

    /// Creates a box from its six bounds.
    pub fn new(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Self {
        Self { min_x, min_y, min_z, max_x, max_y, max_z }
    }

    /// Returns true if the two boxes overlap on all three axes.
    ///
    /// Closed-interval test: boxes that merely touch on a face, edge or
    /// corner count as intersecting. Symmetric by construction.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.min_y <= other.max_y
            && self.min_z <= other.max_z
            && self.max_x >= other.min_x
            && self.max_y >= other.min_y
            && self.max_z >= other.min_z
    }

    /// Returns the smallest box covering both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            min_z: self.min_z.min(other.min_z),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
            max_z: self.max_z.max(other.max_z),
        }
    }

    /// Returns the smallest box covering every box in the sequence.
    ///
    /// An empty sequence yields [`Aabb::EMPTY`].
    pub fn enclosing<I>(boxes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        boxes.into_iter().fold(Self::EMPTY, |acc, b| acc.union(&b))
    }
}

/// Capability required of anything stored in an [`RTree`](crate::RTree):
/// report an axis-aligned bounding box.
///
/// The tree only reads the box, once per item during construction and once
/// per candidate during a query; it never mutates the object.
pub trait SpatialObject {
    /// The bounding box of this object.
    fn bounds(&self) -> Aabb;
}

impl SpatialObject for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}
