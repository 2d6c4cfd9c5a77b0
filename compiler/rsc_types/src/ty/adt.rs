//! Algebraic data types: structs, tuple structs, unions and enums.

use rsc_ir::{Identifier, Location, NodeId};

use crate::{GenericParameters, TypeIdentity, TypeVariable};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AdtKind {
    Struct,
    TupleStruct,
    Union,
    Enum,
}

/// Shape of one variant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VariantKind {
    /// `Name { a: A }`
    Struct,
    /// `Name(A)`
    Tuple,
    /// Fieldless enum variant, possibly with a discriminant.
    Enum,
}

/// A named (or positional) field.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StructFieldType {
    pub reference: NodeId,
    pub identifier: Identifier,
    pub field_type: TypeVariable,
    pub location: Location,
}

impl StructFieldType {
    pub fn new(
        reference: NodeId,
        identifier: impl Into<Identifier>,
        field_type: TypeVariable,
        location: Location,
    ) -> Self {
        StructFieldType {
            reference,
            identifier: identifier.into(),
            field_type,
            location,
        }
    }
}

/// One variant of an ADT. Structs and unions have exactly one.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct VariantDef {
    pub id: NodeId,
    pub identifier: Identifier,
    pub identity: TypeIdentity,
    pub kind: VariantKind,
    /// Node id of the discriminant expression.
    pub discriminant: Option<NodeId>,
    pub fields: Vec<StructFieldType>,
}

impl VariantDef {
    pub fn new(
        id: NodeId,
        identifier: impl Into<Identifier>,
        identity: TypeIdentity,
        kind: VariantKind,
        discriminant: Option<NodeId>,
        fields: Vec<StructFieldType>,
    ) -> Self {
        VariantDef {
            id,
            identifier: identifier.into(),
            identity,
            kind,
            discriminant,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<(usize, &StructFieldType)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.identifier.as_str() == name)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AdtType {
    pub identifier: Identifier,
    pub kind: AdtKind,
    pub variants: Vec<VariantDef>,
    pub generics: GenericParameters,
}

impl AdtType {
    pub fn new(
        identifier: impl Into<Identifier>,
        kind: AdtKind,
        variants: Vec<VariantDef>,
        generics: GenericParameters,
    ) -> Self {
        AdtType {
            identifier: identifier.into(),
            kind,
            variants,
            generics,
        }
    }

    /// No variants, or a single variant without fields.
    pub fn is_unit(&self) -> bool {
        match self.variants.as_slice() {
            [] => true,
            [only] => only.fields.is_empty(),
            _ => false,
        }
    }

    pub fn is_enum(&self) -> bool {
        self.kind == AdtKind::Enum
    }

    pub fn variant(&self, name: &str) -> Option<&VariantDef> {
        self.variants.iter().find(|v| v.identifier.as_str() == name)
    }
}
