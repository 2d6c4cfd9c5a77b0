//! Functions, closures and function pointers.

use std::collections::BTreeSet;

use rsc_ir::{Identifier, NodeId};

use crate::{GenericParameters, TypeVariable};

/// One function parameter: the pattern it binds and its type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FnParam {
    /// Node id of the parameter pattern.
    pub pattern: NodeId,
    pub ty: TypeVariable,
}

/// A function item.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FunctionType {
    pub name: Identifier,
    pub params: Vec<FnParam>,
    pub return_type: TypeVariable,
    pub generics: GenericParameters,
}

impl FunctionType {
    pub fn new(
        name: impl Into<Identifier>,
        params: Vec<FnParam>,
        return_type: TypeVariable,
        generics: GenericParameters,
    ) -> Self {
        FunctionType {
            name: name.into(),
            params,
            return_type,
            generics,
        }
    }
}

/// A closure expression's type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ClosureType {
    /// A tuple of the parameter types.
    pub parameters: TypeVariable,
    pub result: TypeVariable,
    pub generics: GenericParameters,
    /// Node ids of captured bindings.
    pub captures: BTreeSet<NodeId>,
}

impl ClosureType {
    pub fn new(
        parameters: TypeVariable,
        result: TypeVariable,
        generics: GenericParameters,
        captures: BTreeSet<NodeId>,
    ) -> Self {
        ClosureType {
            parameters,
            result,
            generics,
            captures,
        }
    }
}

/// `fn(A, B) -> R`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FunctionPointerType {
    pub params: Vec<TypeVariable>,
    pub return_type: TypeVariable,
}
