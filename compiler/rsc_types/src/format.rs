//! Type rendering for diagnostics and builtin lookup by name.

use crate::stack::with_headroom;
use crate::{Idx, InferKind, InternalError, Mutability, TyCtx, TyResult, TypeData, TypeVariable};

impl TyCtx {
    /// Render the type at `idx` (`(i32, bool)`, `&mut [u8]`, ...).
    ///
    /// Function items have no rendering and return `Unimplemented`.
    pub fn type_to_string(&self, idx: Idx) -> TyResult<String> {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf)?;
        Ok(buf)
    }

    /// Render the type at `idx` into an existing buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) -> TyResult<()> {
        with_headroom(|| self.format_inner(idx, buf))
    }

    fn format_var(&self, var: TypeVariable, buf: &mut String) -> TyResult<()> {
        self.format_type_into(var.get(self)?, buf)
    }

    fn format_list(&self, vars: &[TypeVariable], buf: &mut String) -> TyResult<()> {
        for (i, var) in vars.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.format_var(*var, buf)?;
        }
        Ok(())
    }

    fn format_inner(&self, idx: Idx, buf: &mut String) -> TyResult<()> {
        let ty = self.ty(idx);
        match &ty.data {
            TypeData::Bool => buf.push_str("bool"),
            TypeData::Char => buf.push_str("char"),
            TypeData::Int(kind) => buf.push_str(kind.name()),
            TypeData::Uint(kind) => buf.push_str(kind.name()),
            TypeData::Float(kind) => buf.push_str(kind.name()),
            TypeData::USize => buf.push_str("usize"),
            TypeData::ISize => buf.push_str("isize"),
            TypeData::Never => buf.push('!'),
            TypeData::Str => buf.push_str("str"),
            TypeData::Error => buf.push_str("error"),

            TypeData::Tuple(tuple) => {
                buf.push('(');
                self.format_list(&tuple.fields, buf)?;
                buf.push(')');
            }
            TypeData::Array(array) => {
                // The capacity is an unevaluated expression.
                buf.push('[');
                self.format_var(array.element, buf)?;
                buf.push_str(":CAPACITY]");
            }
            TypeData::Slice(slice) => {
                buf.push('[');
                self.format_var(slice.element, buf)?;
                buf.push(']');
            }
            TypeData::Reference(reference) => {
                buf.push_str(match reference.mutability {
                    Mutability::Imm => "&",
                    Mutability::Mut => "&mut ",
                });
                self.format_var(reference.base, buf)?;
            }
            TypeData::RawPointer(ptr) => {
                buf.push_str(match ptr.mutability {
                    Mutability::Imm => "*const ",
                    Mutability::Mut => "*mut ",
                });
                self.format_var(ptr.base, buf)?;
            }

            TypeData::Adt(adt) => {
                buf.push_str(adt.identifier.as_str());
                buf.push_str(&adt.generics.subst_to_string());
                buf.push('{');
                for (i, variant) in adt.variants.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    buf.push_str(variant.identifier.as_str());
                }
                buf.push('}');
            }
            TypeData::Closure(closure) => {
                buf.push('|');
                self.format_var(closure.parameters, buf)?;
                buf.push_str("| {");
                self.format_var(closure.result, buf)?;
                buf.push('}');
            }
            TypeData::FunctionPointer(fn_ptr) => {
                buf.push_str("fn(");
                self.format_list(&fn_ptr.params, buf)?;
                buf.push_str(") -> ");
                self.format_var(fn_ptr.return_type, buf)?;
            }
            TypeData::Function(_) => {
                tracing::error!(node = %ty.reference(), "function types have no rendering");
                return Err(InternalError::Unimplemented {
                    node: ty.reference(),
                    what: "function type rendering",
                });
            }

            TypeData::Parameter(param) => buf.push_str(param.identifier.as_str()),
            TypeData::Placeholder(placeholder) => {
                buf.push_str("<placeholder:");
                buf.push_str(placeholder.identifier.as_str());
                buf.push('>');
            }
            TypeData::Projection(projection) => self.format_var(projection.base, buf)?,
            TypeData::Dynamic => {
                buf.push_str("dyn ");
                for (i, bound) in ty.specified_bounds().iter().enumerate() {
                    if i > 0 {
                        buf.push_str(" + ");
                    }
                    buf.push_str(&bound.path().to_string());
                }
            }
            TypeData::Infer(var) => buf.push_str(match var.kind() {
                InferKind::Integral => "<integer>",
                InferKind::Float => "<float>",
                InferKind::General => "T?",
            }),
        }
        Ok(())
    }
}
