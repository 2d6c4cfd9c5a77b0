//! Type cloning.
//!
//! A clone is a new arena slot with the same reference ids, identity,
//! bounds and absorbed references as the original. Tuple fields, function
//! parameters and return type, closure parameter tuples and ADT field
//! types are cloned recursively, each child clone re-registered under its
//! own reference. Other children are shared.
//!
//! Inference variables are the exception: their clone gets a fresh node
//! id so the two stay distinguishable in a new inference context.
//!
//! Registrations are staged and applied only after the whole clone
//! succeeds. Arena slots allocated by a failed clone stay unreachable.

use rsc_ir::{Location, NodeId, NodeIdentity};

use crate::stack::with_headroom;
use crate::{
    AdtType, BaseType, ClosureType, FnParam, FunctionType, Idx, InferType, InternalError,
    StructFieldType, TupleType, TyCtx, TyResult, TypeData, TypeIdentity, TypeVariable, VariantDef,
};

/// Registrations produced while cloning, applied only once the whole
/// clone has succeeded.
#[derive(Default)]
struct Rebinds {
    types: Vec<(NodeIdentity, Idx)>,
    locations: Vec<(NodeId, Location)>,
}

impl TyCtx {
    /// Clone the type at `idx` into a new arena slot.
    ///
    /// The clone is not registered for its reference, except for
    /// inference variables which are registered under their new id.
    /// On error no registration changes.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn clone_type(&mut self, idx: Idx) -> TyResult<Idx> {
        let mut rebinds = Rebinds::default();
        let cloned = self.clone_at_depth(idx, 0, &mut rebinds)?;
        self.commit(rebinds);
        Ok(cloned)
    }

    /// Clone what `var` refers to and register the clone for its reference.
    fn clone_var_committed(&mut self, var: TypeVariable) -> TyResult<TypeVariable> {
        let mut rebinds = Rebinds::default();
        let cloned = self.clone_var(var, 0, &mut rebinds)?;
        self.commit(rebinds);
        Ok(cloned)
    }

    fn commit(&mut self, rebinds: Rebinds) {
        for (identity, idx) in &rebinds.types {
            self.insert_type(identity, *idx);
        }
        for (id, location) in rebinds.locations {
            self.insert_location(id, location);
        }
    }

    fn clone_at_depth(&mut self, idx: Idx, depth: u32, rebinds: &mut Rebinds) -> TyResult<Idx> {
        if depth > self.config().recursion_limit {
            let node = self.ty(idx).reference();
            tracing::warn!(%node, "clone exceeded recursion limit");
            return Err(InternalError::RecursionLimit {
                node,
                limit: self.config().recursion_limit,
            });
        }
        with_headroom(|| self.clone_inner(idx, depth, rebinds))
    }

    /// Clone the type `var` refers to and stage the clone for its
    /// reference. Builtin singletons are shared, never cloned.
    fn clone_var(
        &mut self,
        var: TypeVariable,
        depth: u32,
        rebinds: &mut Rebinds,
    ) -> TyResult<TypeVariable> {
        let idx = self.staged_lookup(var, rebinds)?;
        if self.is_builtin(idx) {
            return Ok(var);
        }
        let cloned = self.clone_at_depth(idx, depth + 1, rebinds)?;
        let reference = self.ty(cloned).reference();
        let identity = NodeIdentity::new(reference, self.current_crate(), Location::Empty);
        rebinds.types.push((identity, cloned));
        Ok(TypeVariable::from_raw(reference))
    }

    /// Resolve `var`, seeing registrations staged earlier in this clone.
    fn staged_lookup(&self, var: TypeVariable, rebinds: &Rebinds) -> TyResult<Idx> {
        match rebinds.types.iter().rev().find(|(identity, _)| identity.node_id() == var.id()) {
            Some((_, idx)) => Ok(*idx),
            None => var.get(self),
        }
    }

    fn clone_vars(
        &mut self,
        vars: &[TypeVariable],
        depth: u32,
        rebinds: &mut Rebinds,
    ) -> TyResult<Vec<TypeVariable>> {
        vars.iter()
            .map(|var| self.clone_var(*var, depth, rebinds))
            .collect()
    }

    fn clone_inner(&mut self, idx: Idx, depth: u32, rebinds: &mut Rebinds) -> TyResult<Idx> {
        let original = self.ty(idx).clone();

        let data = match &original.data {
            TypeData::Infer(var) => return Ok(self.clone_infer(&original, var, rebinds)),

            TypeData::Tuple(tuple) => TypeData::Tuple(TupleType::new(
                self.clone_vars(&tuple.fields, depth, rebinds)?,
            )),
            TypeData::Function(function) => {
                let mut params = Vec::with_capacity(function.params.len());
                for p in &function.params {
                    params.push(FnParam {
                        pattern: p.pattern,
                        ty: self.clone_var(p.ty, depth, rebinds)?,
                    });
                }
                let return_type = self.clone_var(function.return_type, depth, rebinds)?;
                TypeData::Function(FunctionType {
                    name: function.name.clone(),
                    params,
                    return_type,
                    generics: function.generics.clone(),
                })
            }
            TypeData::Closure(closure) => TypeData::Closure(ClosureType {
                parameters: self.clone_var(closure.parameters, depth, rebinds)?,
                result: closure.result,
                generics: closure.generics.clone(),
                captures: closure.captures.clone(),
            }),
            TypeData::Adt(adt) => {
                let mut variants = Vec::with_capacity(adt.variants.len());
                for variant in &adt.variants {
                    let mut fields = Vec::with_capacity(variant.fields.len());
                    for f in &variant.fields {
                        fields.push(StructFieldType {
                            field_type: self.clone_var(f.field_type, depth, rebinds)?,
                            ..f.clone()
                        });
                    }
                    variants.push(VariantDef {
                        fields,
                        ..variant.clone()
                    });
                }
                TypeData::Adt(AdtType {
                    variants,
                    ..adt.clone()
                })
            }
            other => other.clone(),
        };

        let cloned = BaseType::with_type_reference(original.reference(), original.type_reference(), data)
            .with_identity(original.identity().clone())
            .with_bounds(original.specified_bounds().iter().cloned())
            .with_combined(original.combined_references().iter().copied());
        Ok(self.alloc(cloned))
    }

    /// Clone an inference variable under a fresh node id.
    fn clone_infer(&mut self, original: &BaseType, var: &InferType, rebinds: &mut Rebinds) -> Idx {
        let id = self.next_node_id();
        let location = var.location();
        let cloned = BaseType::new(id, TypeData::Infer(InferType::with_state(var.state(), location)))
            .with_identity(TypeIdentity::from_location(location))
            .with_combined(original.combined_references().iter().copied())
            .with_combined([original.reference()]);
        let idx = self.alloc(cloned);
        rebinds
            .types
            .push((NodeIdentity::new(id, self.current_crate(), location), idx));
        if let Some(loc) = self.lookup_location(original.reference()) {
            rebinds.locations.push((id, loc));
        }
        tracing::debug!(from = %original.reference(), to = %id, "cloned inference variable");
        idx
    }
}

impl TypeVariable {
    /// Clone the referenced type and re-register it under its reference.
    ///
    /// Builtins come back unchanged. An inference variable comes back
    /// under its new id.
    pub fn clone_in(self, ctx: &mut TyCtx) -> TyResult<TypeVariable> {
        ctx.clone_var_committed(self)
    }
}

#[cfg(test)]
mod tests;
