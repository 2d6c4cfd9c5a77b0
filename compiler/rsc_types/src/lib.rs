//! Type system core for rsc.
//!
//! This crate owns the representation of semantic types and the type
//! context that binds them to AST nodes:
//! - `BaseType`: one tagged-variant type instance (`TypeData` payload)
//! - `TyCtx`: the per-session arena and fact store
//! - `TypeVariable`: a lazy, by-`NodeId` reference to a type, re-resolved
//!   through the context on every access
//!
//! # Arena Design
//!
//! Every `BaseType` lives in the context's arena and is addressed by an
//! `Idx`. Composite types never hold child types directly; they hold
//! `TypeVariable`s, so the context stays the single source of truth and
//! a child can be swapped by re-registering its node id. Nothing is freed
//! before the context is dropped.
//!
//! # Errors
//!
//! Invariant violations come back as `InternalError` instead of aborting.
//! States that are merely "not known yet" (an unresolved placeholder, an
//! unconstrained inference variable) are ordinary values.

mod adjust;
mod bounds;
mod clone;
mod concrete;
mod config;
mod ctx;
mod error;
mod format;
mod generics;
mod identity;
mod idx;
mod infer;
mod kind;
mod resolve;
mod stack;
mod ty;
mod var;

pub use adjust::{Adjustment, AdjustmentKind};
pub use bounds::{TypeBoundPredicate, TypeBoundsMappings};
pub use config::{TyCtxConfig, DEFAULT_RECURSION_LIMIT};
pub use ctx::TyCtx;
pub use error::{InternalError, TyResult};
pub use generics::{GenericParam, GenericParamKind, GenericParameters, GenericParams};
pub use identity::TypeIdentity;
pub use idx::Idx;
pub use infer::{InferKind, InferState, InferType, SignedHint, SizeHint, TypeHint};
pub use kind::{FloatKind, IntKind, TypeKind, UintKind};
pub use ty::{
    AdtKind, AdtType, ArrayType, BaseType, ClosureType, FnParam, FunctionPointerType,
    FunctionType, Mutability, ParamType, PlaceholderType, ProjectionType, RawPointerType,
    ReferenceType, SliceType, StructFieldType, TupleType, TypeData, VariantDef, VariantKind,
};
pub use var::TypeVariable;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=rsc_types=debug` or `RUST_LOG=rsc_types=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Idx, TypeVariable};
    rsc_ir::static_assert_size!(Idx, 4);
    rsc_ir::static_assert_size!(TypeVariable, 4);
}
