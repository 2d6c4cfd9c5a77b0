//! Lazy by-id type references.

use rsc_ir::NodeId;

use crate::{BaseType, Idx, InternalError, TyCtx, TyResult};

/// A reference to "whatever type is registered for this node".
///
/// Holds only a `NodeId`. Every access goes through `TyCtx::lookup_type`,
/// so re-registering the node swaps the type seen by every composite that
/// refers to it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TypeVariable(NodeId);

impl TypeVariable {
    /// Refer to the type registered for `id`.
    ///
    /// Fails if nothing is registered for `id` yet.
    pub fn new(ctx: &TyCtx, id: NodeId) -> TyResult<Self> {
        if ctx.lookup_type(id).is_none() {
            tracing::error!(%id, "type variable created for unregistered node");
            return Err(InternalError::UnknownType(id));
        }
        Ok(TypeVariable(id))
    }

    /// Refer to the type at `idx` through its reference id.
    pub fn of(ctx: &TyCtx, idx: Idx) -> TyResult<Self> {
        Self::new(ctx, ctx.ty(idx).reference())
    }

    /// Wrap an id the caller has already checked.
    #[inline]
    pub(crate) const fn from_raw(id: NodeId) -> Self {
        TypeVariable(id)
    }

    #[inline]
    pub const fn id(self) -> NodeId {
        self.0
    }

    /// Current type for the referenced node.
    pub fn get(self, ctx: &TyCtx) -> TyResult<Idx> {
        ctx.lookup_type(self.0)
            .ok_or(InternalError::UnknownType(self.0))
    }

    /// Current type for the referenced node, by reference.
    pub fn ty(self, ctx: &TyCtx) -> TyResult<&BaseType> {
        self.get(ctx).map(|idx| ctx.ty(idx))
    }
}
