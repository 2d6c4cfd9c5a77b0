//! Trait-bound predicates attached to types.

use rsc_ir::{CanonicalPath, Location, NodeId};

/// A `T: Trait` predicate, identified by the node id of the bound.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeBoundPredicate {
    id: NodeId,
    path: CanonicalPath,
    location: Location,
}

impl TypeBoundPredicate {
    pub fn new(id: NodeId, path: CanonicalPath, location: Location) -> Self {
        TypeBoundPredicate { id, path, location }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Path of the bounding trait.
    #[inline]
    pub fn path(&self) -> &CanonicalPath {
        &self.path
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }
}

/// Ordered, id-deduplicated list of bounds.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TypeBoundsMappings {
    specified: Vec<TypeBoundPredicate>,
}

impl TypeBoundsMappings {
    pub fn new(bounds: impl IntoIterator<Item = TypeBoundPredicate>) -> Self {
        let mut mappings = TypeBoundsMappings::default();
        mappings.inherit_bounds(bounds);
        mappings
    }

    /// Add `predicate` unless a bound with the same id is already present.
    pub fn add_bound(&mut self, predicate: TypeBoundPredicate) {
        if self.specified.iter().any(|b| b.id == predicate.id) {
            return;
        }
        self.specified.push(predicate);
    }

    /// Add every bound in `bounds`, in order.
    pub fn inherit_bounds(&mut self, bounds: impl IntoIterator<Item = TypeBoundPredicate>) {
        for bound in bounds {
            self.add_bound(bound);
        }
    }

    pub fn specified_bounds(&self) -> &[TypeBoundPredicate] {
        &self.specified
    }

    pub fn len(&self) -> usize {
        self.specified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specified.is_empty()
    }
}
