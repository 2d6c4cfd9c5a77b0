//! Item descriptors.
//!
//! The type context records facts about crates, modules and items by
//! `NodeId`. The front end owns the real AST; these descriptors carry the
//! parts of it later passes query through the context.

use crate::{Identifier, Location, NodeId};

/// A crate registered with the context.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CrateInfo {
    /// Node id of the crate root.
    pub node_id: NodeId,
    /// Crate name as passed to the driver.
    pub name: Identifier,
}

/// A module (inline or file-backed).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModuleInfo {
    pub node_id: NodeId,
    pub name: Identifier,
    pub location: Location,
}

/// Kind of a top-level or module-level item.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ItemKind {
    Module,
    ExternCrate,
    UseDeclaration,
    Function,
    TypeAlias,
    Struct,
    Enumeration,
    Union,
    ConstantItem,
    StaticItem,
    Trait,
    Implementation,
    ExternBlock,
    MacroRules,
}

/// Any item visible to path resolution.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ItemInfo {
    pub node_id: NodeId,
    pub kind: ItemKind,
    /// `None` for unnamed items (impls, extern blocks, use declarations).
    pub name: Option<Identifier>,
    pub location: Location,
}

/// An `enum` declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumInfo {
    pub node_id: NodeId,
    pub name: Identifier,
    pub location: Location,
}

/// One variant of an `enum`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumItemInfo {
    pub node_id: NodeId,
    pub name: Identifier,
    /// Node id of the explicit discriminant expression, if any.
    pub discriminant: Option<NodeId>,
    pub location: Location,
}

/// An `impl` block.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImplInfo {
    pub node_id: NodeId,
    /// Node id of the implementing type.
    pub self_type: NodeId,
    /// Node id of the implemented trait path, for trait impls.
    pub trait_ref: Option<NodeId>,
    pub location: Location,
}

/// Kind of an item inside an `extern` block.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExternalItemKind {
    Function,
    Static,
}

/// An item declared inside an `extern` block.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExternalItemInfo {
    pub node_id: NodeId,
    pub kind: ExternalItemKind,
    pub name: Identifier,
    /// Node id of the enclosing `extern` block.
    pub parent_block: NodeId,
    pub location: Location,
}

/// Kind of an item inside a trait or impl.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssociatedItemKind {
    Function,
    Constant,
    TypeAlias,
}

/// An item declared inside a trait or an impl block.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AssociatedItemInfo {
    pub node_id: NodeId,
    pub kind: AssociatedItemKind,
    pub name: Identifier,
    /// Node id of the owning impl or trait.
    pub owner: NodeId,
    pub location: Location,
}
