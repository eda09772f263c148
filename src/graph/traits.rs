use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;
use num_traits::{CheckedAdd, Zero};

/// Identifier of a vertex.
///
/// Only equality and hashing are required; the algorithms never rely on an
/// ordering between vertices.
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Debug {}

/// Edge weight. Signed types are allowed, the algorithms decide in their
/// validation step whether negative weights are acceptable.
///
/// Path costs are summed with `checked_add`, so a sum that does not fit the
/// type is reported as [`Error::WeightOverflow`](crate::Error::WeightOverflow).
pub trait Weight: Copy + Ord + Zero + Add<Output = Self> + CheckedAdd + Debug {}

impl<T> Weight for T where T: Copy + Ord + Zero + Add<Output = T> + CheckedAdd + Debug {}
