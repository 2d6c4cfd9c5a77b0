//! rsc IR - identities and front-end facts.
//!
//! This crate holds the plain value types the semantic core consumes from
//! the lexer, parser and resolver:
//! - `NodeId` / `CrateNum` handles and the `NodeIdAllocator` that mints them
//! - `Location` for source positions
//! - `Identifier` and `CanonicalPath` for item naming
//! - `NodeIdentity` tying a node to its crate and location
//! - Item descriptors (`ItemInfo`, `ModuleInfo`, ...) stored by the type
//!   context in place of AST references
//!
//! # Design Philosophy
//!
//! - **Handles, not pointers**: every cross-reference is a `NodeId`
//! - **Cheap values**: ids are `Copy`, paths and identifiers are `Clone`
//! - **No behaviour**: the crate carries data; the algorithms live in
//!   `rsc_types`

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod canonical_path;
mod ident;
mod ids;
mod identity;
pub mod item;
mod location;

pub use canonical_path::CanonicalPath;
pub use ident::Identifier;
pub use identity::NodeIdentity;
pub use ids::{CrateNum, NodeId, NodeIdAllocator};
pub use item::{
    AssociatedItemInfo, AssociatedItemKind, CrateInfo, EnumInfo, EnumItemInfo, ExternalItemInfo,
    ExternalItemKind, ImplInfo, ItemInfo, ItemKind, ModuleInfo,
};
pub use location::Location;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{CrateNum, NodeId};
    static_assert_size!(NodeId, 4);
    static_assert_size!(CrateNum, 4);
}
