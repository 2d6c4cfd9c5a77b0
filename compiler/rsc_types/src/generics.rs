//! Generic parameter lists of functions, ADTs and closures.

use std::fmt::Write as _;

use rsc_ir::{Identifier, NodeId};

/// What a generic parameter abstracts over.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GenericParamKind {
    Lifetime,
    Type,
    Const,
}

/// One declared generic parameter.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GenericParam {
    pub node_id: NodeId,
    pub name: Identifier,
    pub kind: GenericParamKind,
}

impl GenericParam {
    pub fn new(node_id: NodeId, name: impl Into<Identifier>, kind: GenericParamKind) -> Self {
        GenericParam {
            node_id,
            name: name.into(),
            kind,
        }
    }
}

/// A `<...>` parameter list as written at the declaration.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct GenericParams {
    params: Vec<GenericParam>,
}

impl GenericParams {
    pub fn new(params: Vec<GenericParam>) -> Self {
        GenericParams { params }
    }

    pub fn params(&self) -> &[GenericParam] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Optional generic parameter list carried by substitutable types.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct GenericParameters {
    generics: Option<GenericParams>,
}

impl GenericParameters {
    pub fn new(generics: Option<GenericParams>) -> Self {
        GenericParameters { generics }
    }

    /// No generic list at all.
    pub fn none() -> Self {
        GenericParameters { generics: None }
    }

    pub fn generic_params(&self) -> Option<&GenericParams> {
        self.generics.as_ref()
    }

    /// True iff a non-empty generic list was declared.
    pub fn needs_substitution(&self) -> bool {
        self.generics.as_ref().is_some_and(|g| !g.is_empty())
    }

    /// `<A, B>` for a declared list, the empty string otherwise.
    pub fn subst_to_string(&self) -> String {
        let Some(generics) = self.generics.as_ref().filter(|g| !g.is_empty()) else {
            return String::new();
        };
        let mut buf = String::from("<");
        for (i, param) in generics.params.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            match param.kind {
                GenericParamKind::Lifetime => {
                    let _ = write!(buf, "'{}", param.name);
                }
                GenericParamKind::Type => buf.push_str(param.name.as_str()),
                GenericParamKind::Const => {
                    let _ = write!(buf, "const {}", param.name);
                }
            }
        }
        buf.push('>');
        buf
    }
}
