#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{
    AdtKind, AdtType, ArrayType, BaseType, ClosureType, FnParam, FunctionPointerType,
    FunctionType, GenericParam, GenericParamKind, GenericParameters, GenericParams, InferKind,
    InferType, Mutability, PlaceholderType, ProjectionType, ReferenceType, SliceType,
    StructFieldType, TupleType, TypeBoundPredicate, TypeIdentity, VariantDef,
};
use pretty_assertions::assert_eq;
use rsc_ir::{CanonicalPath, Location, NodeId};

struct Fixture {
    ctx: TyCtx,
}

impl Fixture {
    fn new() -> Self {
        Fixture { ctx: TyCtx::new() }
    }

    fn builtin(&self, name: &str) -> TypeVariable {
        TypeVariable::of(&self.ctx, self.ctx.lookup_builtin(name).unwrap()).unwrap()
    }

    fn add(&mut self, data: TypeData) -> Idx {
        let id = self.ctx.next_node_id();
        self.ctx.register(BaseType::new(id, data))
    }

    fn var(&self, idx: Idx) -> TypeVariable {
        TypeVariable::of(&self.ctx, idx).unwrap()
    }

    /// An unbound generic parameter `T`.
    fn param(&mut self) -> TypeVariable {
        let id = self.ctx.next_node_id();
        let idx = self.ctx.register(BaseType::param(id, id, "T", Location::Empty));
        self.var(idx)
    }

    fn tuple(&mut self, fields: Vec<TypeVariable>) -> Idx {
        self.add(TypeData::Tuple(TupleType::new(fields)))
    }

    fn struct_of(&mut self, kind: VariantKind, fields: Vec<TypeVariable>) -> Idx {
        let fields = fields
            .into_iter()
            .enumerate()
            .map(|(i, ty)| StructFieldType::new(NodeId::new(i as u32), format!("f{i}"), ty, Location::Empty))
            .collect();
        let variant = VariantDef::new(NodeId::new(0), "V", TypeIdentity::empty(), kind, None, fields);
        self.add(TypeData::Adt(AdtType::new(
            "S",
            AdtKind::Struct,
            vec![variant],
            GenericParameters::none(),
        )))
    }

    fn concrete(&self, idx: Idx) -> bool {
        self.ctx.is_concrete(idx).unwrap()
    }
}

fn generics(names: &[&str]) -> GenericParameters {
    GenericParameters::new(Some(GenericParams::new(
        names
            .iter()
            .map(|n| GenericParam::new(NodeId::new(0), *n, GenericParamKind::Type))
            .collect(),
    )))
}

#[test]
fn scalars_are_concrete() {
    let f = Fixture::new();
    for &idx in f.ctx.builtins() {
        assert!(f.concrete(idx));
    }
}

#[test]
fn parameters_and_projections_are_not() {
    let mut f = Fixture::new();
    let param = f.param();
    assert!(!f.ctx.is_concrete(param.get(&f.ctx).unwrap()).unwrap());

    let trait_ref = f.ctx.next_node_id();
    let item = f.ctx.next_node_id();
    let base = f.builtin("i32");
    let projection = f.add(TypeData::Projection(ProjectionType {
        base,
        trait_ref,
        item,
        generics: GenericParameters::none(),
    }));
    assert!(!f.concrete(projection));
}

#[test]
fn placeholder_and_inference_are_concrete() {
    let mut f = Fixture::new();
    let placeholder = f.add(TypeData::Placeholder(PlaceholderType {
        identifier: "Item".into(),
    }));
    let infer = f.add(TypeData::Infer(InferType::new(InferKind::General, Location::Empty)));
    assert!(f.concrete(placeholder));
    assert!(f.concrete(infer));
}

#[test]
fn tuple_follows_its_fields() {
    let mut f = Fixture::new();
    let i32_var = f.builtin("i32");
    let param = f.param();

    let with_param = f.tuple(vec![i32_var, param]);
    let substituted = f.tuple(vec![i32_var, f.builtin("bool")]);
    assert!(!f.concrete(with_param));
    assert!(f.concrete(substituted));
}

#[test]
fn containers_defer_to_their_element() {
    let mut f = Fixture::new();
    let param = f.param();
    let capacity = f.ctx.next_node_id();
    for element in [param, f.builtin("u8")] {
        let expected = element != param;
        let array = f.add(TypeData::Array(ArrayType { element, capacity }));
        let slice = f.add(TypeData::Slice(SliceType { element }));
        let reference = f.add(TypeData::Reference(ReferenceType {
            base: element,
            mutability: Mutability::Mut,
        }));
        assert_eq!(f.concrete(array), expected);
        assert_eq!(f.concrete(slice), expected);
        assert_eq!(f.concrete(reference), expected);
    }
}

#[test]
fn callables_check_params_and_return() {
    let mut f = Fixture::new();
    let param = f.param();
    let i32_var = f.builtin("i32");
    let pattern = f.ctx.next_node_id();

    let generic_arg = f.add(TypeData::Function(FunctionType::new(
        "f",
        vec![FnParam { pattern, ty: param }],
        i32_var,
        GenericParameters::none(),
    )));
    let generic_ret = f.add(TypeData::FunctionPointer(FunctionPointerType {
        params: vec![i32_var],
        return_type: param,
    }));
    let plain = f.add(TypeData::FunctionPointer(FunctionPointerType {
        params: vec![i32_var],
        return_type: i32_var,
    }));

    assert!(!f.concrete(generic_arg));
    assert!(!f.concrete(generic_ret));
    assert!(f.concrete(plain));
}

#[test]
fn closure_rule_is_inverted_on_parameters() {
    let mut f = Fixture::new();
    let param = f.param();
    let i32_var = f.builtin("i32");
    let concrete_params = f.tuple(vec![i32_var]);
    let generic_params = f.tuple(vec![param]);

    let with_concrete_params = f.add(TypeData::Closure(ClosureType::new(
        f.var(concrete_params),
        i32_var,
        GenericParameters::none(),
        Default::default(),
    )));
    let with_generic_params = f.add(TypeData::Closure(ClosureType::new(
        f.var(generic_params),
        i32_var,
        GenericParameters::none(),
        Default::default(),
    )));

    assert!(!f.concrete(with_concrete_params));
    assert!(f.concrete(with_generic_params));
}

#[test]
fn adt_fields_decide_except_for_enum_variants() {
    let mut f = Fixture::new();
    let param = f.param();
    let i32_var = f.builtin("i32");

    let generic_struct = f.struct_of(VariantKind::Struct, vec![i32_var, param]);
    let concrete_struct = f.struct_of(VariantKind::Tuple, vec![i32_var, i32_var]);
    let enum_variant = f.struct_of(VariantKind::Enum, vec![param]);

    assert!(!f.concrete(generic_struct));
    assert!(f.concrete(concrete_struct));
    // Enum-kind variants are not inspected.
    assert!(f.concrete(enum_variant));
}

#[test]
fn unit_adt_depends_on_generics() {
    let mut f = Fixture::new();
    let plain = f.add(TypeData::Adt(AdtType::new(
        "Marker",
        AdtKind::Struct,
        vec![],
        GenericParameters::none(),
    )));
    let phantom = f.add(TypeData::Adt(AdtType::new(
        "Phantom",
        AdtKind::Struct,
        vec![],
        generics(&["T"]),
    )));
    assert!(f.concrete(plain));
    assert!(!f.concrete(phantom));
}

#[test]
fn substitution_needs() {
    let mut f = Fixture::new();
    let i32_var = f.builtin("i32");
    let generic_fn = f.add(TypeData::Function(FunctionType::new(
        "id",
        vec![],
        i32_var,
        generics(&["T"]),
    )));
    let empty_list = f.add(TypeData::Adt(AdtType::new(
        "S",
        AdtKind::Struct,
        vec![],
        generics(&[]),
    )));
    let tuple = f.tuple(vec![i32_var]);

    assert!(f.ctx.needs_generic_substitutions(generic_fn).unwrap());
    assert!(!f.ctx.needs_generic_substitutions(empty_list).unwrap());
    assert!(!f.ctx.needs_generic_substitutions(tuple).unwrap());

    let trait_ref = f.ctx.next_node_id();
    let item = f.ctx.next_node_id();
    let projection = f.add(TypeData::Projection(ProjectionType {
        base: i32_var,
        trait_ref,
        item,
        generics: GenericParameters::none(),
    }));
    assert!(matches!(
        f.ctx.needs_generic_substitutions(projection),
        Err(InternalError::Unreachable { .. })
    ));
}

#[test]
fn bound_counts() {
    let mut f = Fixture::new();
    let id = f.ctx.next_node_id();
    let bounds = (1..=3).map(|n| {
        TypeBoundPredicate::new(
            NodeId::new(n),
            CanonicalPath::new_segment(NodeId::new(n), "Tr"),
            Location::Empty,
        )
    });
    let param = f
        .ctx
        .register(BaseType::param(id, id, "T", Location::Empty).with_bounds(bounds));
    assert_eq!(f.ctx.number_of_specified_bounds(param), 3);

    let i32_ty = f.ctx.lookup_builtin("i32").unwrap();
    assert_eq!(f.ctx.number_of_specified_bounds(i32_ty), 0);
}

/// `struct Node { next: &Node, value: <field> }`.
fn linked_node(f: &mut Fixture, value: TypeVariable) -> Idx {
    let node_id = f.ctx.next_node_id();
    let next = f.add(TypeData::Reference(ReferenceType {
        base: TypeVariable::from_raw(node_id),
        mutability: Mutability::Imm,
    }));
    let fields = vec![
        StructFieldType::new(NodeId::new(1), "next", f.var(next), Location::Empty),
        StructFieldType::new(NodeId::new(2), "value", value, Location::Empty),
    ];
    let variant = VariantDef::new(NodeId::new(0), "Node", TypeIdentity::empty(), VariantKind::Struct, None, fields);
    f.ctx.register(BaseType::new(
        node_id,
        TypeData::Adt(AdtType::new("Node", AdtKind::Struct, vec![variant], GenericParameters::none())),
    ))
}

#[test]
fn self_referential_adt_terminates() {
    let mut f = Fixture::new();
    let int = f.builtin("i32");
    let node = linked_node(&mut f, int);
    assert_eq!(f.ctx.is_concrete(node), Ok(true));

    let param = f.param();
    let generic_node = linked_node(&mut f, param);
    assert_eq!(f.ctx.is_concrete(generic_node), Ok(false));
}

#[test]
fn entered_adt_is_released_between_siblings() {
    let mut f = Fixture::new();
    let int = f.builtin("i32");
    let node = linked_node(&mut f, int);
    let pair = f.tuple(vec![f.var(node), f.var(node)]);
    assert!(f.concrete(pair));
}

#[test]
fn structural_cycle_hits_the_recursion_limit() {
    let mut ctx = TyCtx::with_config(crate::TyCtxConfig::default().with_recursion_limit(32));
    let id = ctx.next_node_id();
    let cyclic = ctx.register(BaseType::new(
        id,
        TypeData::Tuple(TupleType::new(vec![TypeVariable::from_raw(id)])),
    ));
    assert_eq!(
        ctx.is_concrete(cyclic),
        Err(InternalError::RecursionLimit { node: id, limit: 32 })
    );
}
