//! The type context.
//!
//! `TyCtx` is the single authoritative store for one compilation session.
//! It owns every `BaseType` (in an append-only arena) and maps `NodeId`s
//! to the facts later passes ask about: resolved types, canonical paths,
//! module structure, item descriptors, autoderef chains, closure captures.
//!
//! # Design
//!
//! - Arena: `Vec<BaseType>` addressed by `Idx`, never shrunk
//! - Type table: `resolved` maps a node to an arena slot; re-registering
//!   a node overwrites silently
//! - Side tables: `FxHashMap` keyed by `NodeId`, except the closure
//!   captures which use `BTreeSet` for ordered, deduplicated output
//!
//! The impl is split by concern: builtins (`builtins.rs`), crate/module/item
//! descriptors (`items.rs`) and per-node semantic facts (`facts.rs`).

mod builtins;
mod facts;
mod items;

use std::collections::BTreeSet;

use rsc_diagnostic::{Diagnostic, DiagnosticQueue};
use rsc_ir::{
    AssociatedItemInfo, CanonicalPath, CrateInfo, CrateNum, EnumInfo, EnumItemInfo,
    ExternalItemInfo, Identifier, ImplInfo, ItemInfo, Location, ModuleInfo, NodeId,
    NodeIdAllocator, NodeIdentity,
};
use rustc_hash::FxHashMap;

use crate::{Adjustment, BaseType, Idx, TyCtxConfig, TypeBoundPredicate};

/// Per-session type table and fact store.
#[derive(Debug)]
pub struct TyCtx {
    config: TyCtxConfig,
    node_ids: NodeIdAllocator,
    current_crate: CrateNum,

    /// Every type instance ever created in this session.
    arena: Vec<BaseType>,
    /// Node -> type. The principal type table.
    resolved: FxHashMap<NodeId, Idx>,

    /// Builtin singletons, in generation order.
    builtins: Vec<Idx>,
    /// Surface type-path node -> builtin type node.
    node_id_refs: FxHashMap<NodeId, NodeId>,
    /// `(surface name, type-path node)` for every builtin, for the resolver.
    builtin_type_paths: Vec<(Identifier, NodeId)>,
    unit_type_node_id: Option<NodeId>,

    paths: FxHashMap<NodeId, CanonicalPath>,
    locations: FxHashMap<NodeId, Location>,

    crates: FxHashMap<CrateNum, CrateInfo>,
    modules: FxHashMap<NodeId, ModuleInfo>,
    module_child_items: FxHashMap<NodeId, Vec<CanonicalPath>>,
    child_to_parent_module: FxHashMap<NodeId, NodeId>,
    items: FxHashMap<NodeId, ItemInfo>,
    enumerations: FxHashMap<NodeId, EnumInfo>,
    enum_items: FxHashMap<NodeId, (EnumInfo, EnumItemInfo)>,
    variant_definitions: FxHashMap<NodeId, NodeId>,
    implementations: FxHashMap<NodeId, ImplInfo>,
    external_items: FxHashMap<NodeId, ExternalItemInfo>,
    associated_items: FxHashMap<NodeId, AssociatedItemInfo>,

    resolved_names: FxHashMap<NodeId, NodeId>,
    predicates: FxHashMap<NodeId, TypeBoundPredicate>,
    associated_type_mappings: FxHashMap<NodeId, NodeId>,
    autoderef_mappings: FxHashMap<NodeId, Vec<Adjustment>>,
    closure_captures: FxHashMap<NodeId, BTreeSet<NodeId>>,

    diagnostics: DiagnosticQueue,
}

impl Default for TyCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl TyCtx {
    /// Create a context with default configuration and all builtins.
    pub fn new() -> Self {
        Self::with_config(TyCtxConfig::default())
    }

    /// Create a context with `config` and all builtins.
    pub fn with_config(config: TyCtxConfig) -> Self {
        let mut ctx = TyCtx {
            node_ids: NodeIdAllocator::starting_at(config.first_node_id),
            current_crate: config.current_crate,
            diagnostics: DiagnosticQueue::with_config(config.diagnostics.clone()),
            config,
            arena: Vec::new(),
            resolved: FxHashMap::default(),
            builtins: Vec::new(),
            node_id_refs: FxHashMap::default(),
            builtin_type_paths: Vec::new(),
            unit_type_node_id: None,
            paths: FxHashMap::default(),
            locations: FxHashMap::default(),
            crates: FxHashMap::default(),
            modules: FxHashMap::default(),
            module_child_items: FxHashMap::default(),
            child_to_parent_module: FxHashMap::default(),
            items: FxHashMap::default(),
            enumerations: FxHashMap::default(),
            enum_items: FxHashMap::default(),
            variant_definitions: FxHashMap::default(),
            implementations: FxHashMap::default(),
            external_items: FxHashMap::default(),
            associated_items: FxHashMap::default(),
            resolved_names: FxHashMap::default(),
            predicates: FxHashMap::default(),
            associated_type_mappings: FxHashMap::default(),
            autoderef_mappings: FxHashMap::default(),
            closure_captures: FxHashMap::default(),
        };
        ctx.generate_builtins();
        ctx
    }

    pub fn config(&self) -> &TyCtxConfig {
        &self.config
    }

    /// Mint a fresh node id.
    pub fn next_node_id(&mut self) -> NodeId {
        self.node_ids.next_id()
    }

    #[inline]
    pub fn current_crate(&self) -> CrateNum {
        self.current_crate
    }

    pub fn set_current_crate(&mut self, crate_num: CrateNum) {
        self.current_crate = crate_num;
    }

    // Arena

    /// Move `ty` into the arena without registering it for any node.
    pub fn alloc(&mut self, ty: BaseType) -> Idx {
        let idx = Idx::from_raw(
            u32::try_from(self.arena.len()).unwrap_or(u32::MAX),
        );
        self.arena.push(ty);
        idx
    }

    /// Allocate `ty` and register it for its own reference id.
    pub fn register(&mut self, ty: BaseType) -> Idx {
        let reference = ty.reference();
        let idx = self.alloc(ty);
        self.insert_implicit_type(reference, idx);
        idx
    }

    #[inline]
    pub fn ty(&self, idx: Idx) -> &BaseType {
        &self.arena[idx.index()]
    }

    #[inline]
    pub fn ty_mut(&mut self, idx: Idx) -> &mut BaseType {
        &mut self.arena[idx.index()]
    }

    /// Number of type instances allocated so far.
    pub fn type_count(&self) -> usize {
        self.arena.len()
    }

    // Type table

    /// Register `idx` as the type of `identity`'s node. Overwrites.
    pub fn insert_type(&mut self, identity: &NodeIdentity, idx: Idx) {
        self.resolved.insert(identity.node_id(), idx);
    }

    /// Register `idx` as the type of `id`. Overwrites.
    pub fn insert_implicit_type(&mut self, id: NodeId, idx: Idx) {
        self.resolved.insert(id, idx);
    }

    pub fn lookup_type(&self, id: NodeId) -> Option<Idx> {
        self.resolved.get(&id).copied()
    }

    // Diagnostics

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.add(diagnostic);
    }

    /// Queued diagnostics, without draining them.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.peek()
    }

    /// Drain queued diagnostics, sorted by location.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.flush()
    }
}
