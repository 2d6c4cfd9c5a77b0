//! Type identity: the canonical path and location a type was declared at.

use rsc_ir::{CanonicalPath, Location};

/// Source-location and canonical-path tag of a type. Empty for builtins.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TypeIdentity {
    path: CanonicalPath,
    location: Location,
}

impl TypeIdentity {
    pub fn new(path: CanonicalPath, location: Location) -> Self {
        TypeIdentity { path, location }
    }

    /// No path, no location.
    pub fn empty() -> Self {
        TypeIdentity {
            path: CanonicalPath::empty(),
            location: Location::Empty,
        }
    }

    /// Location only, for anonymous types (tuples, inference variables).
    pub fn from_location(location: Location) -> Self {
        TypeIdentity {
            path: CanonicalPath::empty(),
            location,
        }
    }

    #[inline]
    pub fn path(&self) -> &CanonicalPath {
        &self.path
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }
}
