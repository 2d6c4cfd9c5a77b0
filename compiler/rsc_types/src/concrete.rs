//! Structural queries: concreteness, substitution need, bound counts.

use rsc_ir::NodeId;
use rustc_hash::FxHashSet;

use crate::stack::with_headroom;
use crate::{Idx, InternalError, TyCtx, TyResult, TypeData, TypeVariable, VariantKind};

/// State of one concreteness walk.
#[derive(Default)]
struct Walk {
    depth: u32,
    /// ADTs whose fields are being checked.
    entered: FxHashSet<NodeId>,
}

impl TyCtx {
    /// Check that the type at `idx` contains no unresolved parameter or
    /// projection.
    ///
    /// Two rules differ from plain structural recursion: fields of enum
    /// variants are not inspected, and a closure is concrete only when its
    /// parameter tuple is *not* concrete and its result is.
    ///
    /// An ADT reached again through its own fields counts as concrete.
    /// Other cycles end in `InternalError::RecursionLimit`.
    pub fn is_concrete(&self, idx: Idx) -> TyResult<bool> {
        self.is_concrete_at(idx, &mut Walk::default())
    }

    fn is_concrete_at(&self, idx: Idx, walk: &mut Walk) -> TyResult<bool> {
        if walk.depth > self.config().recursion_limit {
            let node = self.ty(idx).reference();
            tracing::warn!(%node, "concreteness check exceeded recursion limit");
            return Err(InternalError::RecursionLimit {
                node,
                limit: self.config().recursion_limit,
            });
        }
        walk.depth += 1;
        let result = with_headroom(|| self.is_concrete_inner(idx, walk));
        walk.depth -= 1;
        result
    }

    fn is_var_concrete(&self, var: TypeVariable, walk: &mut Walk) -> TyResult<bool> {
        self.is_concrete_at(var.get(self)?, walk)
    }

    fn all_concrete<'a>(
        &self,
        vars: impl Iterator<Item = &'a TypeVariable>,
        walk: &mut Walk,
    ) -> TyResult<bool> {
        for var in vars {
            if !self.is_var_concrete(*var, walk)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn is_concrete_inner(&self, idx: Idx, walk: &mut Walk) -> TyResult<bool> {
        match &self.ty(idx).data {
            TypeData::Parameter(_) | TypeData::Projection(_) => Ok(false),
            TypeData::Placeholder(_) => Ok(true),

            TypeData::Function(function) => {
                if !self.all_concrete(function.params.iter().map(|p| &p.ty), walk)? {
                    return Ok(false);
                }
                self.is_var_concrete(function.return_type, walk)
            }
            TypeData::FunctionPointer(fn_ptr) => {
                if !self.all_concrete(fn_ptr.params.iter(), walk)? {
                    return Ok(false);
                }
                self.is_var_concrete(fn_ptr.return_type, walk)
            }
            TypeData::Adt(adt) => {
                if adt.is_unit() {
                    return Ok(!adt.generics.needs_substitution());
                }
                // Re-entering an ADT through its own fields adds nothing.
                let reference = self.ty(idx).reference();
                if !walk.entered.insert(reference) {
                    return Ok(true);
                }
                for variant in &adt.variants {
                    if variant.kind == VariantKind::Enum {
                        continue;
                    }
                    if !self.all_concrete(variant.fields.iter().map(|f| &f.field_type), walk)? {
                        walk.entered.remove(&reference);
                        return Ok(false);
                    }
                }
                walk.entered.remove(&reference);
                Ok(true)
            }
            TypeData::Closure(closure) => {
                if self.is_var_concrete(closure.parameters, walk)? {
                    return Ok(false);
                }
                self.is_var_concrete(closure.result, walk)
            }
            TypeData::Tuple(tuple) => self.all_concrete(tuple.fields.iter(), walk),
            TypeData::Array(array) => self.is_var_concrete(array.element, walk),
            TypeData::Slice(slice) => self.is_var_concrete(slice.element, walk),
            TypeData::Reference(reference) => self.is_var_concrete(reference.base, walk),
            TypeData::RawPointer(ptr) => self.is_var_concrete(ptr.base, walk),

            TypeData::Bool
            | TypeData::Char
            | TypeData::Int(_)
            | TypeData::Uint(_)
            | TypeData::Float(_)
            | TypeData::USize
            | TypeData::ISize
            | TypeData::Never
            | TypeData::Str
            | TypeData::Error
            | TypeData::Dynamic
            | TypeData::Infer(_) => Ok(true),
        }
    }

    /// Check if the type at `idx` declares generics that must be
    /// substituted before use.
    ///
    /// Projections never reach this query.
    pub fn needs_generic_substitutions(&self, idx: Idx) -> TyResult<bool> {
        let ty = self.ty(idx);
        match &ty.data {
            TypeData::Function(function) => Ok(function.generics.needs_substitution()),
            TypeData::Adt(adt) => Ok(adt.generics.needs_substitution()),
            TypeData::Closure(closure) => Ok(closure.generics.needs_substitution()),
            TypeData::Projection(_) => {
                tracing::error!(node = %ty.reference(), "substitution query on a projection");
                Err(InternalError::Unreachable {
                    node: ty.reference(),
                    what: "generic substitution query on a projection",
                })
            }
            _ => Ok(false),
        }
    }

    /// Number of trait bounds written on a generic parameter. Zero for
    /// every other kind.
    pub fn number_of_specified_bounds(&self, idx: Idx) -> usize {
        let ty = self.ty(idx);
        match ty.data {
            TypeData::Parameter(_) => ty.bounds().len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests;
