//! Per-node semantic facts: paths, locations, names and the auxiliary
//! tables expression lowering reads.

use std::collections::BTreeSet;

use rsc_ir::{CanonicalPath, Location, NodeId};

use crate::{Adjustment, InternalError, TyCtx, TyResult, TypeBoundPredicate};

impl TyCtx {
    // Canonical paths

    /// Record the canonical path of `id`.
    ///
    /// A node keeps the first path it was given. Re-inserting a name-equal
    /// path, or one no longer than the existing path, is a no-op; a longer,
    /// different path is rejected.
    pub fn insert_canonical_path(&mut self, id: NodeId, path: CanonicalPath) -> TyResult<()> {
        if let Some(existing) = self.paths.get(&id) {
            if existing.is_equal_by_name(&path) || existing.len() >= path.len() {
                return Ok(());
            }
            tracing::error!(%id, %existing, attempted = %path, "canonical path conflict");
            return Err(InternalError::CanonicalPathConflict {
                node: id,
                existing: existing.to_string(),
                attempted: path.to_string(),
            });
        }
        self.paths.insert(id, path);
        Ok(())
    }

    pub fn lookup_canonical_path(&self, id: NodeId) -> Option<&CanonicalPath> {
        self.paths.get(&id)
    }

    // Locations

    pub fn insert_location(&mut self, id: NodeId, location: Location) {
        self.locations.insert(id, location);
    }

    pub fn lookup_location(&self, id: NodeId) -> Option<Location> {
        self.locations.get(&id).copied()
    }

    // Name resolution results

    /// Record that the use at `reference` resolves to the definition `def`.
    pub fn insert_resolved_name(&mut self, reference: NodeId, def: NodeId) {
        self.resolved_names.insert(reference, def);
    }

    pub fn lookup_name(&self, reference: NodeId) -> Option<NodeId> {
        self.resolved_names.get(&reference).copied()
    }

    pub fn insert_predicate(&mut self, id: NodeId, predicate: TypeBoundPredicate) {
        self.predicates.insert(id, predicate);
    }

    pub fn lookup_predicate(&self, id: NodeId) -> Option<&TypeBoundPredicate> {
        self.predicates.get(&id)
    }

    // Associated types

    /// Bind the placeholder answering for `placeholder` to the type of `ty`.
    pub fn insert_associated_type_mapping(&mut self, placeholder: NodeId, ty: NodeId) {
        self.associated_type_mappings.insert(placeholder, ty);
    }

    pub fn lookup_associated_type_mapping(&self, placeholder: NodeId) -> Option<NodeId> {
        self.associated_type_mappings.get(&placeholder).copied()
    }

    pub fn clear_associated_type_mapping(&mut self, placeholder: NodeId) {
        self.associated_type_mappings.remove(&placeholder);
    }

    // Autoderef

    /// Record the adjustments applied to the expression `id`.
    ///
    /// An expression's chain is computed once; a second insert is an error.
    pub fn insert_autoderef_mapping(
        &mut self,
        id: NodeId,
        adjustments: Vec<Adjustment>,
    ) -> TyResult<()> {
        if self.autoderef_mappings.contains_key(&id) {
            tracing::error!(%id, "autoderef adjustments recorded twice");
            return Err(InternalError::DuplicateAutoderef(id));
        }
        tracing::debug!(%id, steps = adjustments.len(), "autoderef mapping");
        self.autoderef_mappings.insert(id, adjustments);
        Ok(())
    }

    pub fn lookup_autoderef_mapping(&self, id: NodeId) -> Option<&[Adjustment]> {
        self.autoderef_mappings.get(&id).map(Vec::as_slice)
    }

    // Closure captures

    /// Record that `closure` captures `captured`. Idempotent.
    pub fn insert_closure_capture(&mut self, closure: NodeId, captured: NodeId) {
        self.closure_captures
            .entry(closure)
            .or_default()
            .insert(captured);
    }

    /// Captures of `closure`; empty for unknown closures.
    pub fn get_captures(&self, closure: NodeId) -> BTreeSet<NodeId> {
        self.closure_captures
            .get(&closure)
            .cloned()
            .unwrap_or_default()
    }
}
