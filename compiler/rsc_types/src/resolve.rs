//! Resolution of indirect types.
//!
//! Parameters, placeholders and projections stand for some other type.
//! `destructure` follows that indirection to the first type that is not
//! one of them. Every hop spends one step of a shared budget
//! (`TyCtxConfig::recursion_limit`), so cyclic bindings terminate.

use rsc_diagnostic::recursion_limit_exceeded;

use crate::{BaseType, Idx, InternalError, TyCtx, TyResult, TypeData, TypeVariable};

/// Outcome of a bounded walk.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Walk {
    Done(Idx),
    Exhausted,
}

/// Remaining indirection hops.
struct Budget(u32);

impl Budget {
    /// Spend one step. `false` once nothing is left.
    fn take(&mut self) -> bool {
        match self.0.checked_sub(1) {
            Some(rest) => {
                self.0 = rest;
                true
            }
            None => false,
        }
    }
}

impl TyCtx {
    /// Follow indirection from `idx` to a terminal type.
    ///
    /// A placeholder without an associated-type mapping and a parameter
    /// bound to itself are terminal. When the step budget runs out the
    /// result is a fresh error type carrying the original reference, and
    /// a diagnostic is queued.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn destructure(&mut self, idx: Idx) -> TyResult<Idx> {
        match self.walk(idx)? {
            Walk::Done(result) => Ok(result),
            Walk::Exhausted => {
                let reference = self.ty(idx).reference();
                let limit = self.config().recursion_limit;
                let location = self
                    .lookup_location(reference)
                    .unwrap_or_else(|| self.ty(idx).identity().location());
                tracing::warn!(node = %reference, limit, "type resolution exceeded recursion limit");
                self.report(recursion_limit_exceeded(reference, location, limit));
                Ok(self.alloc(BaseType::error(reference)))
            }
        }
    }

    /// `destructure` without mutation: running out of budget is an error.
    pub fn destructure_readonly(&self, idx: Idx) -> TyResult<Idx> {
        match self.walk(idx)? {
            Walk::Done(result) => Ok(result),
            Walk::Exhausted => Err(self.recursion_limit_error(idx)),
        }
    }

    /// Resolve the generic parameter at `idx` through its slot.
    ///
    /// Follows chains of bound parameters. A parameter bound to itself
    /// resolves to whatever is registered for its slot.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve_param(&self, idx: Idx) -> TyResult<Idx> {
        let mut budget = Budget(self.config().recursion_limit);
        match self.resolve_param_within(idx, &mut budget)? {
            Walk::Done(result) => Ok(result),
            Walk::Exhausted => Err(self.recursion_limit_error(idx)),
        }
    }

    /// Check if the placeholder at `idx` has an associated type yet.
    pub fn placeholder_can_resolve(&self, idx: Idx) -> TyResult<bool> {
        let ty = self.expect_placeholder(idx)?;
        Ok(self
            .lookup_associated_type_mapping(ty.type_reference())
            .is_some())
    }

    /// The associated type the placeholder at `idx` stands for.
    pub fn resolve_placeholder(&self, idx: Idx) -> TyResult<Idx> {
        let ty = self.expect_placeholder(idx)?;
        match self.lookup_associated_type_mapping(ty.type_reference()) {
            Some(mapped) => TypeVariable::from_raw(mapped).get(self),
            None => Err(InternalError::UnresolvedPlaceholder(ty.reference())),
        }
    }

    fn expect_placeholder(&self, idx: Idx) -> TyResult<&BaseType> {
        let ty = self.ty(idx);
        match ty.data {
            TypeData::Placeholder(_) => Ok(ty),
            _ => Err(InternalError::Unreachable {
                node: ty.reference(),
                what: "placeholder resolution on a non-placeholder type",
            }),
        }
    }

    fn recursion_limit_error(&self, idx: Idx) -> InternalError {
        InternalError::RecursionLimit {
            node: self.ty(idx).reference(),
            limit: self.config().recursion_limit,
        }
    }

    fn walk(&self, start: Idx) -> TyResult<Walk> {
        let mut budget = Budget(self.config().recursion_limit);
        let mut current = start;
        loop {
            let ty = self.ty(current);
            let next = match &ty.data {
                TypeData::Parameter(_) => {
                    if !budget.take() {
                        return Ok(Walk::Exhausted);
                    }
                    match self.resolve_param_within(current, &mut budget)? {
                        Walk::Exhausted => return Ok(Walk::Exhausted),
                        Walk::Done(resolved) if resolved == current => {
                            return Ok(Walk::Done(resolved))
                        }
                        Walk::Done(resolved) => resolved,
                    }
                }
                TypeData::Placeholder(_) => {
                    if !budget.take() {
                        return Ok(Walk::Exhausted);
                    }
                    match self.lookup_associated_type_mapping(ty.type_reference()) {
                        None => return Ok(Walk::Done(current)),
                        Some(mapped) => TypeVariable::from_raw(mapped).get(self)?,
                    }
                }
                TypeData::Projection(projection) => {
                    if !budget.take() {
                        return Ok(Walk::Exhausted);
                    }
                    projection.base.get(self)?
                }
                _ => return Ok(Walk::Done(current)),
            };
            current = next;
        }
    }

    fn resolve_param_within(&self, idx: Idx, budget: &mut Budget) -> TyResult<Walk> {
        let param = self.ty(idx);
        if !matches!(param.data, TypeData::Parameter(_)) {
            return Err(InternalError::Unreachable {
                node: param.reference(),
                what: "parameter resolution on a non-parameter type",
            });
        }

        let mut resolved = TypeVariable::from_raw(param.type_reference()).get(self)?;
        while self.ty(resolved).can_resolve_param() {
            if !budget.take() {
                return Ok(Walk::Exhausted);
            }
            let next = TypeVariable::from_raw(self.ty(resolved).type_reference()).get(self)?;
            if next == resolved {
                break;
            }
            resolved = next;
        }

        let last = self.ty(resolved);
        if matches!(last.data, TypeData::Parameter(_)) && last.reference() == last.type_reference() {
            return TypeVariable::from_raw(last.type_reference())
                .get(self)
                .map(Walk::Done);
        }
        Ok(Walk::Done(resolved))
    }
}
