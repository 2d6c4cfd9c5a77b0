//! Type representation.
//!
//! A `BaseType` is one type instance: the attributes every type carries
//! (identity ids, declaration identity, bounds, absorbed references) plus
//! a `TypeData` payload with one variant per `TypeKind`. Children are
//! `TypeVariable`s resolved through the owning `TyCtx`.

mod adt;
mod callable;

use std::collections::BTreeSet;

use rsc_ir::{Identifier, Location, NodeId};

use crate::{
    FloatKind, GenericParameters, InferType, IntKind, TypeBoundPredicate, TypeBoundsMappings,
    TypeIdentity, TypeKind, TypeVariable, UintKind,
};

pub use adt::{AdtKind, AdtType, StructFieldType, VariantDef, VariantKind};
pub use callable::{ClosureType, FnParam, FunctionPointerType, FunctionType};

/// Whether a reference or raw pointer permits mutation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Mutability {
    Imm,
    Mut,
}

impl Mutability {
    #[inline]
    pub const fn is_mut(self) -> bool {
        matches!(self, Mutability::Mut)
    }
}

/// `(A, B, ...)`. Zero fields is the unit type.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TupleType {
    pub fields: Vec<TypeVariable>,
}

impl TupleType {
    pub fn new(fields: Vec<TypeVariable>) -> Self {
        TupleType { fields }
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        self.fields.is_empty()
    }
}

/// `[T; N]`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ArrayType {
    pub element: TypeVariable,
    /// Node id of the capacity expression.
    pub capacity: NodeId,
}

/// `[T]`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SliceType {
    pub element: TypeVariable,
}

/// `&T` / `&mut T`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ReferenceType {
    pub base: TypeVariable,
    pub mutability: Mutability,
}

/// `*const T` / `*mut T`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RawPointerType {
    pub base: TypeVariable,
    pub mutability: Mutability,
}

/// A generic type parameter.
///
/// The substitutable slot is the owning type's `type_reference`: a
/// parameter whose `type_reference` differs from its `reference` has been
/// bound to whatever is registered for that id.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParamType {
    pub identifier: Identifier,
    pub location: Location,
}

/// An associated type not yet known; resolved through the context's
/// associated-type mappings.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PlaceholderType {
    pub identifier: Identifier,
}

/// `<Base as Trait>::Item`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ProjectionType {
    pub base: TypeVariable,
    /// Node id of the trait.
    pub trait_ref: NodeId,
    /// Node id of the associated item.
    pub item: NodeId,
    pub generics: GenericParameters,
}

/// Variant payload of a `BaseType`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeData {
    Bool,
    Char,
    Int(IntKind),
    Uint(UintKind),
    Float(FloatKind),
    USize,
    ISize,
    Never,
    Str,
    Error,
    Tuple(TupleType),
    Function(FunctionType),
    Closure(ClosureType),
    Adt(AdtType),
    Array(ArrayType),
    Slice(SliceType),
    Reference(ReferenceType),
    RawPointer(RawPointerType),
    Parameter(ParamType),
    Placeholder(PlaceholderType),
    Projection(ProjectionType),
    FunctionPointer(FunctionPointerType),
    /// `dyn A + B`; the traits are the owning type's bounds.
    Dynamic,
    Infer(InferType),
}

impl TypeData {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeData::Bool => TypeKind::Bool,
            TypeData::Char => TypeKind::Char,
            TypeData::Int(_) => TypeKind::Int,
            TypeData::Uint(_) => TypeKind::Uint,
            TypeData::Float(_) => TypeKind::Float,
            TypeData::USize => TypeKind::USize,
            TypeData::ISize => TypeKind::ISize,
            TypeData::Never => TypeKind::Never,
            TypeData::Str => TypeKind::Str,
            TypeData::Error => TypeKind::Error,
            TypeData::Tuple(_) => TypeKind::Tuple,
            TypeData::Function(_) => TypeKind::Function,
            TypeData::Closure(_) => TypeKind::Closure,
            TypeData::Adt(_) => TypeKind::Adt,
            TypeData::Array(_) => TypeKind::Array,
            TypeData::Slice(_) => TypeKind::Slice,
            TypeData::Reference(_) => TypeKind::Reference,
            TypeData::RawPointer(_) => TypeKind::RawPointer,
            TypeData::Parameter(_) => TypeKind::Parameter,
            TypeData::Placeholder(_) => TypeKind::Placeholder,
            TypeData::Projection(_) => TypeKind::Projection,
            TypeData::FunctionPointer(_) => TypeKind::FunctionPointer,
            TypeData::Dynamic => TypeKind::Dynamic,
            TypeData::Infer(_) => TypeKind::Inferred,
        }
    }
}

/// One type instance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseType {
    reference: NodeId,
    type_reference: NodeId,
    identity: TypeIdentity,
    bounds: TypeBoundsMappings,
    combined: BTreeSet<NodeId>,
    pub(crate) data: TypeData,
}

impl BaseType {
    /// A type answering for its own node (`type_reference == reference`).
    pub fn new(reference: NodeId, data: TypeData) -> Self {
        Self::with_type_reference(reference, reference, data)
    }

    /// A type whose queries are answered for `type_reference`.
    pub fn with_type_reference(reference: NodeId, type_reference: NodeId, data: TypeData) -> Self {
        BaseType {
            reference,
            type_reference,
            identity: TypeIdentity::empty(),
            bounds: TypeBoundsMappings::default(),
            combined: BTreeSet::new(),
            data,
        }
    }

    #[must_use]
    pub fn with_identity(mut self, identity: TypeIdentity) -> Self {
        self.identity = identity;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: impl IntoIterator<Item = TypeBoundPredicate>) -> Self {
        self.bounds.inherit_bounds(bounds);
        self
    }

    #[must_use]
    pub fn with_combined(mut self, refs: impl IntoIterator<Item = NodeId>) -> Self {
        self.combined.extend(refs);
        self
    }

    // Leaf constructors

    pub fn bool(id: NodeId) -> Self {
        Self::new(id, TypeData::Bool)
    }

    pub fn char(id: NodeId) -> Self {
        Self::new(id, TypeData::Char)
    }

    pub fn int(id: NodeId, kind: IntKind) -> Self {
        Self::new(id, TypeData::Int(kind))
    }

    pub fn uint(id: NodeId, kind: UintKind) -> Self {
        Self::new(id, TypeData::Uint(kind))
    }

    pub fn float(id: NodeId, kind: FloatKind) -> Self {
        Self::new(id, TypeData::Float(kind))
    }

    pub fn usize(id: NodeId) -> Self {
        Self::new(id, TypeData::USize)
    }

    pub fn isize(id: NodeId) -> Self {
        Self::new(id, TypeData::ISize)
    }

    pub fn never(id: NodeId) -> Self {
        Self::new(id, TypeData::Never)
    }

    pub fn str(id: NodeId) -> Self {
        Self::new(id, TypeData::Str)
    }

    pub fn error(id: NodeId) -> Self {
        Self::new(id, TypeData::Error)
    }

    /// A tuple declared at `location`.
    pub fn tuple(id: NodeId, location: Location, fields: Vec<TypeVariable>) -> Self {
        Self::new(id, TypeData::Tuple(TupleType::new(fields)))
            .with_identity(TypeIdentity::from_location(location))
    }

    /// The `()` type.
    pub fn unit(id: NodeId) -> Self {
        Self::tuple(id, Location::Builtin, Vec::new())
    }

    /// A generic parameter bound to the slot `type_reference`.
    pub fn param(
        reference: NodeId,
        type_reference: NodeId,
        identifier: impl Into<Identifier>,
        location: Location,
    ) -> Self {
        Self::with_type_reference(
            reference,
            type_reference,
            TypeData::Parameter(ParamType {
                identifier: identifier.into(),
                location,
            }),
        )
    }

    // Accessors

    #[inline]
    pub fn reference(&self) -> NodeId {
        self.reference
    }

    #[inline]
    pub fn type_reference(&self) -> NodeId {
        self.type_reference
    }

    pub fn set_reference(&mut self, reference: NodeId) {
        self.reference = reference;
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        self.data.kind()
    }

    #[inline]
    pub fn data(&self) -> &TypeData {
        &self.data
    }

    #[inline]
    pub fn identity(&self) -> &TypeIdentity {
        &self.identity
    }

    pub fn bounds(&self) -> &TypeBoundsMappings {
        &self.bounds
    }

    pub fn specified_bounds(&self) -> &[TypeBoundPredicate] {
        self.bounds.specified_bounds()
    }

    pub fn add_bound(&mut self, predicate: TypeBoundPredicate) {
        self.bounds.add_bound(predicate);
    }

    pub fn inherit_bounds(&mut self, bounds: impl IntoIterator<Item = TypeBoundPredicate>) {
        self.bounds.inherit_bounds(bounds);
    }

    /// Node ids this instance has absorbed.
    pub fn combined_references(&self) -> &BTreeSet<NodeId> {
        &self.combined
    }

    pub fn append_reference(&mut self, reference: NodeId) {
        self.combined.insert(reference);
    }

    /// `true` for the instances `Parameter` resolution follows.
    ///
    /// A parameter whose slot is itself has nothing to follow.
    #[inline]
    pub fn can_resolve_param(&self) -> bool {
        matches!(self.data, TypeData::Parameter(_)) && self.reference != self.type_reference
    }
}
