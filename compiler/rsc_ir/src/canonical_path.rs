//! Canonical paths.
//!
//! A canonical path is the fully-qualified, order-significant list of named
//! segments that identifies an item (`crate::module::Item`). Each segment
//! remembers the `NodeId` that introduced it, but equality, ordering and
//! hashing look at segment names only.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::{CrateNum, Identifier, NodeId};

/// Segment storage: most paths have at most four segments.
type Segments = SmallVec<[(NodeId, Identifier); 4]>;

/// Fully-qualified item path.
#[derive(Clone, Debug, Default)]
pub struct CanonicalPath {
    segments: Segments,
    crate_num: CrateNum,
}

impl CanonicalPath {
    /// Create a single-segment path.
    pub fn new_segment(id: NodeId, name: impl Into<Identifier>) -> Self {
        let mut segments = Segments::new();
        segments.push((id, name.into()));
        CanonicalPath {
            segments,
            crate_num: CrateNum::UNKNOWN,
        }
    }

    /// Create a path with no segments.
    pub fn empty() -> Self {
        CanonicalPath {
            segments: Segments::new(),
            crate_num: CrateNum::UNKNOWN,
        }
    }

    /// The `Self` type path.
    pub fn big_self(id: NodeId) -> Self {
        Self::new_segment(id, "Self")
    }

    /// The `self` value / module path.
    pub fn small_self(id: NodeId) -> Self {
        Self::new_segment(id, "self")
    }

    /// `<Type as Trait>` projection segment used for trait impls.
    pub fn trait_impl_projection_segment(
        id: NodeId,
        trait_segment: &CanonicalPath,
        impl_type_segment: &CanonicalPath,
    ) -> Self {
        Self::new_segment(
            id,
            format!("<{impl_type_segment} as {trait_segment}>"),
        )
    }

    /// Append `other`'s segments to a copy of this path.
    ///
    /// Appending to an empty path yields `other` with this path's crate.
    #[must_use]
    pub fn append(&self, other: &CanonicalPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        CanonicalPath {
            segments,
            crate_num: self.crate_num,
        }
    }

    /// The node id of the last segment.
    pub fn node_id(&self) -> Option<NodeId> {
        self.segments.last().map(|(id, _)| *id)
    }

    /// The name of the last segment.
    pub fn last_name(&self) -> Option<&Identifier> {
        self.segments.last().map(|(_, name)| name)
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The crate this path belongs to.
    #[inline]
    pub fn crate_num(&self) -> CrateNum {
        self.crate_num
    }

    /// Set the crate this path belongs to.
    pub fn set_crate_num(&mut self, crate_num: CrateNum) {
        self.crate_num = crate_num;
    }

    /// Iterate over `(node id, name)` segments.
    pub fn segments(&self) -> impl Iterator<Item = (NodeId, &Identifier)> {
        self.segments.iter().map(|(id, name)| (*id, name))
    }

    /// Compare segment names, ignoring node ids.
    pub fn is_equal_by_name(&self, other: &CanonicalPath) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(other.segments.iter())
                .all(|((_, a), (_, b))| a == b)
    }
}

impl PartialEq for CanonicalPath {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_by_name(other)
    }
}

impl Eq for CanonicalPath {}

impl Hash for CanonicalPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.len().hash(state);
        for (_, name) in &self.segments {
            name.hash(state);
        }
    }
}

impl PartialOrd for CanonicalPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shorter paths sort first; equal lengths compare names segment by segment.
impl Ord for CanonicalPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments.len().cmp(&other.segments.len()).then_with(|| {
            self.segments
                .iter()
                .map(|(_, name)| name)
                .cmp(other.segments.iter().map(|(_, name)| name))
        })
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, name)) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("::")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}
