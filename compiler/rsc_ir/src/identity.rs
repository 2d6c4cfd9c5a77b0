//! Node identity: a node id bound to its crate and source location.

use crate::{CrateNum, Location, NodeId};

/// Identity of one AST node, as handed to the type context by the checker.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeIdentity {
    node_id: NodeId,
    crate_num: CrateNum,
    location: Location,
}

impl NodeIdentity {
    /// Create a node identity.
    pub const fn new(node_id: NodeId, crate_num: CrateNum, location: Location) -> Self {
        NodeIdentity {
            node_id,
            crate_num,
            location,
        }
    }

    #[inline]
    pub const fn node_id(&self) -> NodeId {
        self.node_id
    }

    #[inline]
    pub const fn crate_num(&self) -> CrateNum {
        self.crate_num
    }

    #[inline]
    pub const fn location(&self) -> Location {
        self.location
    }
}
