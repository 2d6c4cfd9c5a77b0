//! Node and crate identities.
//!
//! `NodeId` correlates AST nodes, type instances and every side-table entry
//! in the type context. `CrateNum` identifies one compilation unit.

use std::fmt;

/// Opaque identity of one semantic position in the AST / type universe.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a node id from a raw value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        NodeId(raw)
    }
}

/// Identity of one crate in the crate graph.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct CrateNum(u32);

impl CrateNum {
    /// Crate number used before the current crate is known.
    pub const UNKNOWN: CrateNum = CrateNum(u32::MAX);

    /// Create a crate number from a raw value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        CrateNum(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is the `UNKNOWN` sentinel.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for CrateNum {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Debug for CrateNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            write!(f, "CrateNum(unknown)")
        } else {
            write!(f, "CrateNum({})", self.0)
        }
    }
}

/// Monotonic source of fresh `NodeId`s.
///
/// One allocator belongs to one compilation session. Ids are never reused.
#[derive(Clone, Debug)]
pub struct NodeIdAllocator {
    next: u32,
}

impl NodeIdAllocator {
    /// Create an allocator whose first id is `first`.
    pub const fn starting_at(first: u32) -> Self {
        NodeIdAllocator { next: first }
    }

    /// Mint the next id.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Peek at the id the next call to `next_id` will return.
    pub fn peek(&self) -> NodeId {
        NodeId(self.next)
    }
}
