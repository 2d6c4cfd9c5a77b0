//! Autoderef adjustments recorded per expression.

use rsc_ir::NodeId;

/// One implicit coercion step applied to an expression.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AdjustmentKind {
    Error,
    ImmRef,
    MutRef,
    Deref,
    DerefMut,
    Indirection,
    Unsize,
}

impl AdjustmentKind {
    /// Steps that go through a user `Deref`/`DerefMut` impl.
    pub const fn is_deref_op(self) -> bool {
        matches!(self, AdjustmentKind::Deref | AdjustmentKind::DerefMut)
    }
}

/// An adjustment step and the type it produces.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Adjustment {
    kind: AdjustmentKind,
    /// Node id of the type after this step.
    expected: NodeId,
    /// Node id of the `deref`/`deref_mut` method used, for overloaded steps.
    deref_operator_fn: Option<NodeId>,
}

impl Adjustment {
    pub const fn new(kind: AdjustmentKind, expected: NodeId) -> Self {
        Adjustment {
            kind,
            expected,
            deref_operator_fn: None,
        }
    }

    /// An overloaded deref step through `operator_fn`.
    pub const fn with_deref_operator(
        kind: AdjustmentKind,
        expected: NodeId,
        operator_fn: NodeId,
    ) -> Self {
        Adjustment {
            kind,
            expected,
            deref_operator_fn: Some(operator_fn),
        }
    }

    #[inline]
    pub const fn kind(&self) -> AdjustmentKind {
        self.kind
    }

    #[inline]
    pub const fn expected(&self) -> NodeId {
        self.expected
    }

    #[inline]
    pub const fn deref_operator_fn(&self) -> Option<NodeId> {
        self.deref_operator_fn
    }
}
