#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{
    AdtKind, GenericParameters, InferKind, Mutability, ReferenceType, TyCtxConfig, TypeKind,
    VariantKind,
};
use pretty_assertions::assert_eq;
use rsc_ir::{CrateNum, Location, NodeId};

fn builtin(ctx: &TyCtx, name: &str) -> TypeVariable {
    TypeVariable::of(ctx, ctx.lookup_builtin(name).unwrap()).unwrap()
}

fn add(ctx: &mut TyCtx, data: TypeData) -> Idx {
    let id = ctx.next_node_id();
    ctx.register(BaseType::new(id, data))
}

fn infer(ctx: &mut TyCtx, kind: InferKind) -> Idx {
    add(ctx, TypeData::Infer(InferType::new(kind, Location::source(0, 2, 9))))
}

#[test]
fn leaf_clone_preserves_identity() {
    let mut ctx = TyCtx::new();
    let original = ctx.lookup_builtin("u64").unwrap();
    let cloned = ctx.clone_type(original).unwrap();

    assert_ne!(cloned, original);
    assert_eq!(ctx.ty(cloned), ctx.ty(original));
    assert_eq!(ctx.type_to_string(cloned).unwrap(), "u64");
    // The clone is not registered; the builtin still answers.
    assert_eq!(ctx.lookup_type(ctx.ty(original).reference()), Some(original));
}

#[test]
fn clone_keeps_references_bounds_and_combined() {
    let mut ctx = TyCtx::new();
    let id = ctx.next_node_id();
    let slot = ctx.next_node_id();
    let ty = BaseType::param(id, slot, "T", Location::Empty)
        .with_combined([NodeId::new(3), NodeId::new(1)])
        .with_bounds([crate::TypeBoundPredicate::new(
            NodeId::new(50),
            rsc_ir::CanonicalPath::new_segment(NodeId::new(50), "Copy"),
            Location::Empty,
        )]);
    let original = ctx.register(ty);
    let cloned = ctx.clone_type(original).unwrap();

    let (a, b) = (ctx.ty(original), ctx.ty(cloned));
    assert_eq!(b.reference(), a.reference());
    assert_eq!(b.type_reference(), a.type_reference());
    assert_eq!(b.kind(), a.kind());
    assert_eq!(b.combined_references(), a.combined_references());
    assert_eq!(b.specified_bounds(), a.specified_bounds());
}

#[test]
fn tuple_fields_are_cloned_and_reregistered() {
    let mut ctx = TyCtx::new();
    let inner = add(&mut ctx, TypeData::Tuple(TupleType::new(vec![])));
    let data = TypeData::Tuple(TupleType::new(vec![
        builtin(&ctx, "i32"),
        TypeVariable::of(&ctx, inner).unwrap(),
    ]));
    let outer = add(&mut ctx, data);

    let cloned = ctx.clone_type(outer).unwrap();
    assert_eq!(ctx.type_to_string(cloned).unwrap(), ctx.type_to_string(outer).unwrap());

    let TypeData::Tuple(tuple) = ctx.ty(cloned).data() else {
        panic!("expected a tuple");
    };
    // Same ids: child clones answer for the original nodes.
    assert_eq!(tuple.fields[1].id(), ctx.ty(inner).reference());
    let inner_now = tuple.fields[1].get(&ctx).unwrap();
    assert_ne!(inner_now, inner);
    // Builtins are shared.
    assert_eq!(tuple.fields[0].get(&ctx).unwrap(), ctx.lookup_builtin("i32").unwrap());
}

#[test]
fn reference_children_are_shared() {
    let mut ctx = TyCtx::new();
    let inner = add(&mut ctx, TypeData::Tuple(TupleType::new(vec![])));
    let data = TypeData::Reference(ReferenceType {
        base: TypeVariable::of(&ctx, inner).unwrap(),
        mutability: Mutability::Imm,
    });
    let reference = add(&mut ctx, data);

    let cloned = ctx.clone_type(reference).unwrap();
    assert_eq!(ctx.type_to_string(cloned).unwrap(), "&()");
    assert_eq!(ctx.lookup_type(ctx.ty(inner).reference()), Some(inner));
}

#[test]
fn adt_fields_are_cloned() {
    let mut ctx = TyCtx::new();
    let field_ty = add(&mut ctx, TypeData::Tuple(TupleType::new(vec![])));
    let field = StructFieldType::new(
        NodeId::new(1),
        "x",
        TypeVariable::of(&ctx, field_ty).unwrap(),
        Location::Empty,
    );
    let variant = VariantDef::new(
        NodeId::new(2),
        "S",
        TypeIdentity::empty(),
        VariantKind::Struct,
        None,
        vec![field],
    );
    let adt = add(
        &mut ctx,
        TypeData::Adt(AdtType::new("S", AdtKind::Struct, vec![variant], GenericParameters::none())),
    );

    let cloned = ctx.clone_type(adt).unwrap();
    assert_eq!(ctx.type_to_string(cloned).unwrap(), "S{S}");
    assert_ne!(ctx.lookup_type(ctx.ty(field_ty).reference()), Some(field_ty));
}

#[test]
fn function_and_closure_clone() {
    let mut ctx = TyCtx::new();
    let params = add(&mut ctx, TypeData::Tuple(TupleType::new(vec![])));
    let data = TypeData::Closure(ClosureType::new(
        TypeVariable::of(&ctx, params).unwrap(),
        builtin(&ctx, "bool"),
        GenericParameters::none(),
        [NodeId::new(77)].into_iter().collect(),
    ));
    let closure = add(&mut ctx, data);
    let cloned = ctx.clone_type(closure).unwrap();
    assert_eq!(ctx.type_to_string(cloned).unwrap(), "|()| {bool}");
    let TypeData::Closure(c) = ctx.ty(cloned).data() else {
        panic!("expected a closure");
    };
    assert!(c.captures.contains(&NodeId::new(77)));

    let pattern = ctx.next_node_id();
    let data = TypeData::Function(FunctionType::new(
        "f",
        vec![FnParam {
            pattern,
            ty: builtin(&ctx, "i32"),
        }],
        builtin(&ctx, "()"),
        GenericParameters::none(),
    ));
    let function = add(&mut ctx, data);
    let cloned = ctx.clone_type(function).unwrap();
    assert_eq!(ctx.ty(cloned).kind(), TypeKind::Function);
    assert_eq!(ctx.ty(cloned).reference(), ctx.ty(function).reference());
}

#[test]
fn infer_clone_mints_a_new_identity() {
    let mut ctx = TyCtx::with_config(TyCtxConfig::default().with_current_crate(CrateNum::new(0)));
    let original = infer(&mut ctx, InferKind::Integral);
    let original_ref = ctx.ty(original).reference();
    ctx.insert_location(original_ref, Location::source(0, 2, 9));

    let cloned = ctx.clone_type(original).unwrap();
    let clone_ref = ctx.ty(cloned).reference();

    assert_ne!(clone_ref, original_ref);
    assert_eq!(ctx.lookup_type(clone_ref), Some(cloned));
    assert!(ctx.ty(cloned).combined_references().contains(&original_ref));
    assert_eq!(ctx.lookup_location(clone_ref), Some(Location::source(0, 2, 9)));
    assert_eq!(ctx.type_to_string(cloned).unwrap(), "<integer>");
    // The original is untouched.
    assert_eq!(ctx.lookup_type(original_ref), Some(original));
}

#[test]
fn infer_clone_keeps_hints() {
    let mut ctx = TyCtx::new();
    let original = infer(&mut ctx, InferKind::General);
    let hint = ctx.lookup_builtin("f32").unwrap();
    ctx.apply_scalar_type_hint(original, hint).unwrap();

    let cloned = ctx.clone_type(original).unwrap();
    let (TypeData::Infer(a), TypeData::Infer(b)) = (ctx.ty(original).data(), ctx.ty(cloned).data()) else {
        panic!("expected inference variables");
    };
    assert_eq!(a.state(), b.state());
}

#[test]
fn nested_infer_fields_are_renamed() {
    let mut ctx = TyCtx::new();
    let var = infer(&mut ctx, InferKind::Float);
    let data = TypeData::Tuple(TupleType::new(vec![TypeVariable::of(&ctx, var).unwrap()]));
    let tuple = add(&mut ctx, data);

    let cloned = ctx.clone_type(tuple).unwrap();
    let TypeData::Tuple(fields) = ctx.ty(cloned).data() else {
        panic!("expected a tuple");
    };
    assert_ne!(fields.fields[0].id(), ctx.ty(var).reference());
    assert_eq!(ctx.type_to_string(cloned).unwrap(), "(<float>)");
}

#[test]
fn clone_depth_is_bounded() {
    let mut ctx = TyCtx::with_config(TyCtxConfig::default().with_recursion_limit(4));
    let mut current = add(&mut ctx, TypeData::Tuple(TupleType::new(vec![])));
    for _ in 0..8 {
        let data = TypeData::Tuple(TupleType::new(vec![TypeVariable::of(&ctx, current).unwrap()]));
        current = add(&mut ctx, data);
    }
    assert!(matches!(
        ctx.clone_type(current),
        Err(InternalError::RecursionLimit { limit: 4, .. })
    ));
}

#[test]
fn clone_in_rebinds_the_node() {
    let mut ctx = TyCtx::new();
    let original = add(&mut ctx, TypeData::Tuple(TupleType::new(vec![])));
    let var = TypeVariable::of(&ctx, original).unwrap();

    let cloned = var.clone_in(&mut ctx).unwrap();
    assert_eq!(cloned, var);
    assert_ne!(cloned.get(&ctx).unwrap(), original);

    let int = builtin(&ctx, "i32");
    assert_eq!(int.clone_in(&mut ctx).unwrap().get(&ctx).unwrap(), ctx.lookup_builtin("i32").unwrap());

    let unknown = infer(&mut ctx, InferKind::Integral);
    let unknown = TypeVariable::of(&ctx, unknown).unwrap();
    assert_ne!(unknown.clone_in(&mut ctx).unwrap(), unknown);
}

#[test]
fn failed_clone_leaves_registrations_alone() {
    let mut ctx = TyCtx::new();
    let inner = add(&mut ctx, TypeData::Tuple(TupleType::new(vec![])));
    let var = infer(&mut ctx, InferKind::Integral);
    let missing = ctx.next_node_id();
    let data = TypeData::Tuple(TupleType::new(vec![
        TypeVariable::of(&ctx, inner).unwrap(),
        TypeVariable::of(&ctx, var).unwrap(),
        TypeVariable::from_raw(missing),
    ]));
    let outer = add(&mut ctx, data);
    let next_id = ctx.next_node_id().raw();

    assert_eq!(ctx.clone_type(outer), Err(InternalError::UnknownType(missing)));
    assert_eq!(ctx.lookup_type(ctx.ty(inner).reference()), Some(inner));
    // The inference clone minted an id but never registered it.
    let minted = NodeId::new(next_id + 1);
    assert_eq!(ctx.lookup_type(minted), None);
    assert_eq!(ctx.lookup_location(minted), None);
}
