//! Inference variables and default-type hints.
//!
//! An unconstrained inference variable still has to become *some* type
//! eventually. `InferState` tracks what that default should be: the
//! category (`InferKind`) and a `TypeHint` narrowed each time the
//! variable meets a concrete scalar. Transitions are pure
//! (`InferState::with_scalar_hint`); `TyCtx::apply_scalar_type_hint`
//! writes the result back into the arena.

use rsc_ir::Location;

use crate::{FloatKind, Idx, IntKind, InternalError, TyCtx, TyResult, TypeData, TypeKind, UintKind};

/// Category of an inference variable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InferKind {
    /// Integer literal: `{integer}`.
    Integral,
    /// Float literal: `{float}`.
    Float,
    /// Anything: `_`.
    General,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SignedHint {
    Signed,
    Unsigned,
    Unknown,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SizeHint {
    S8,
    S16,
    S32,
    S64,
    S128,
    Unknown,
}

impl SizeHint {
    const fn from_bits(bits: u32) -> Self {
        match bits {
            8 => SizeHint::S8,
            16 => SizeHint::S16,
            32 => SizeHint::S32,
            64 => SizeHint::S64,
            128 => SizeHint::S128,
            _ => SizeHint::Unknown,
        }
    }
}

/// What the default for an inference variable should look like.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeHint {
    pub kind: TypeKind,
    pub sign: SignedHint,
    pub size: SizeHint,
}

impl TypeHint {
    /// Nothing known yet.
    pub const fn unknown() -> Self {
        TypeHint {
            kind: TypeKind::Error,
            sign: SignedHint::Unknown,
            size: SizeHint::Unknown,
        }
    }
}

impl Default for TypeHint {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Category and default hint of one inference variable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InferState {
    pub kind: InferKind,
    pub hint: TypeHint,
}

impl InferState {
    pub const fn new(kind: InferKind) -> Self {
        InferState {
            kind,
            hint: TypeHint::unknown(),
        }
    }

    /// State after meeting the scalar type `hint`.
    ///
    /// Non-scalar hints leave the state unchanged. `usize`/`isize` only
    /// record the kind; sign and size keep whatever an earlier hint set.
    #[must_use]
    pub fn with_scalar_hint(self, hint: &TypeData) -> Self {
        let mut next = self;
        match hint {
            TypeData::USize | TypeData::ISize => {
                next.kind = InferKind::Integral;
                next.hint.kind = hint.kind();
            }
            TypeData::Int(int) => {
                next.kind = InferKind::Integral;
                next.hint = TypeHint {
                    kind: TypeKind::Int,
                    sign: SignedHint::Signed,
                    size: SizeHint::from_bits(int.bits()),
                };
            }
            TypeData::Uint(uint) => {
                next.kind = InferKind::Integral;
                next.hint = TypeHint {
                    kind: TypeKind::Uint,
                    sign: SignedHint::Unsigned,
                    size: SizeHint::from_bits(uint.bits()),
                };
            }
            TypeData::Float(float) => {
                next.kind = InferKind::Float;
                next.hint = TypeHint {
                    kind: TypeKind::Float,
                    sign: SignedHint::Signed,
                    size: SizeHint::from_bits(float.bits()),
                };
            }
            _ => {}
        }
        next
    }

    /// Name of the builtin this variable defaults to, if any.
    pub fn default_type_name(&self) -> Option<&'static str> {
        match self.kind {
            InferKind::General => None,
            InferKind::Float => Some(match self.hint.size {
                SizeHint::S32 => FloatKind::F32.name(),
                _ => FloatKind::F64.name(),
            }),
            InferKind::Integral => Some(match self.hint.kind {
                TypeKind::Int => match self.hint.size {
                    SizeHint::S8 => IntKind::I8.name(),
                    SizeHint::S16 => IntKind::I16.name(),
                    SizeHint::S64 => IntKind::I64.name(),
                    SizeHint::S128 => IntKind::I128.name(),
                    SizeHint::S32 | SizeHint::Unknown => IntKind::I32.name(),
                },
                TypeKind::Uint => match self.hint.size {
                    SizeHint::S8 => UintKind::U8.name(),
                    SizeHint::S16 => UintKind::U16.name(),
                    SizeHint::S64 => UintKind::U64.name(),
                    SizeHint::S128 => UintKind::U128.name(),
                    SizeHint::S32 | SizeHint::Unknown => UintKind::U32.name(),
                },
                TypeKind::USize => "usize",
                TypeKind::ISize => "isize",
                _ => IntKind::I32.name(),
            }),
        }
    }
}

/// Payload of an inference variable.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct InferType {
    state: InferState,
    location: Location,
}

impl InferType {
    pub fn new(kind: InferKind, location: Location) -> Self {
        InferType {
            state: InferState::new(kind),
            location,
        }
    }

    pub fn with_state(state: InferState, location: Location) -> Self {
        InferType { state, location }
    }

    #[inline]
    pub fn state(&self) -> InferState {
        self.state
    }

    #[inline]
    pub fn kind(&self) -> InferKind {
        self.state.kind
    }

    #[inline]
    pub fn hint(&self) -> TypeHint {
        self.state.hint
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }
}

impl TyCtx {
    /// Narrow the default of the inference variable at `infer` by the
    /// scalar type at `hint`. Later calls overwrite earlier ones.
    pub fn apply_scalar_type_hint(&mut self, infer: Idx, hint: Idx) -> TyResult<()> {
        let next = match &self.ty(infer).data {
            TypeData::Infer(var) => var.state.with_scalar_hint(&self.ty(hint).data),
            _ => {
                return Err(InternalError::Unreachable {
                    node: self.ty(infer).reference(),
                    what: "scalar hint applied to a non-inference type",
                })
            }
        };
        if let TypeData::Infer(var) = &mut self.ty_mut(infer).data {
            tracing::debug!(from = ?var.state, to = ?next, "apply scalar type hint");
            var.state = next;
        }
        Ok(())
    }

    /// The builtin an unconstrained inference variable defaults to.
    ///
    /// `None` for general variables, which have no default.
    pub fn infer_default_type(&self, infer: Idx) -> TyResult<Option<Idx>> {
        match &self.ty(infer).data {
            TypeData::Infer(var) => Ok(var
                .state
                .default_type_name()
                .and_then(|name| self.lookup_builtin(name))),
            _ => Err(InternalError::Unreachable {
                node: self.ty(infer).reference(),
                what: "default requested for a non-inference type",
            }),
        }
    }
}
