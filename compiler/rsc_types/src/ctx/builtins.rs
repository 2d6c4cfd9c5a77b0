//! Builtin primitive types.

use rsc_ir::{CanonicalPath, Identifier, NodeId};

use crate::{BaseType, FloatKind, Idx, IntKind, TyCtx, UintKind};

impl TyCtx {
    /// Create one singleton per primitive, plus `()`.
    ///
    /// Each primitive also gets a surface type-path node carrying a
    /// one-segment canonical path, so the resolver can bind `u8` in
    /// source to the builtin.
    pub(super) fn generate_builtins(&mut self) {
        let primitives: [(&str, fn(NodeId) -> BaseType); 18] = [
            ("u8", |id| BaseType::uint(id, UintKind::U8)),
            ("u16", |id| BaseType::uint(id, UintKind::U16)),
            ("u32", |id| BaseType::uint(id, UintKind::U32)),
            ("u64", |id| BaseType::uint(id, UintKind::U64)),
            ("u128", |id| BaseType::uint(id, UintKind::U128)),
            ("i8", |id| BaseType::int(id, IntKind::I8)),
            ("i16", |id| BaseType::int(id, IntKind::I16)),
            ("i32", |id| BaseType::int(id, IntKind::I32)),
            ("i64", |id| BaseType::int(id, IntKind::I64)),
            ("i128", |id| BaseType::int(id, IntKind::I128)),
            ("f32", |id| BaseType::float(id, FloatKind::F32)),
            ("f64", |id| BaseType::float(id, FloatKind::F64)),
            ("bool", BaseType::bool),
            ("usize", BaseType::usize),
            ("isize", BaseType::isize),
            ("char", BaseType::char),
            ("str", BaseType::str),
            ("!", BaseType::never),
        ];

        for (name, make) in primitives {
            let ty_id = self.next_node_id();
            let idx = self.alloc(make(ty_id));
            self.setup_builtin(name, idx);
        }

        let unit_id = self.next_node_id();
        let unit = self.alloc(BaseType::unit(unit_id));
        let unit_path = self.next_node_id();
        self.builtin_type_paths.push((Identifier::from("()"), unit_path));
        self.insert_builtin(unit_id, unit_path, unit);
        self.set_unit_type_node_id(unit_path);

        tracing::debug!(count = self.builtins.len(), "generated builtin types");
    }

    fn setup_builtin(&mut self, name: &str, idx: Idx) {
        let path_node = self.next_node_id();
        self.builtin_type_paths.push((Identifier::from(name), path_node));
        let ty_id = self.ty(idx).reference();
        self.insert_builtin(ty_id, path_node, idx);
        // Builtin paths never conflict: the path node is fresh.
        self.paths
            .insert(path_node, CanonicalPath::new_segment(path_node, name));
    }

    /// Register a builtin under its own id and the surface node `alias`.
    pub fn insert_builtin(&mut self, id: NodeId, alias: NodeId, idx: Idx) {
        self.node_id_refs.insert(alias, id);
        self.resolved.insert(id, idx);
        self.builtins.push(idx);
    }

    /// Find a builtin by its rendered name (`"i32"`, `"!"`, `"()"`).
    pub fn lookup_builtin(&self, name: &str) -> Option<Idx> {
        self.builtins
            .iter()
            .copied()
            .find(|&idx| self.type_to_string(idx).is_ok_and(|s| s == name))
    }

    /// Check if `idx` is one of the builtin singletons.
    pub fn is_builtin(&self, idx: Idx) -> bool {
        self.builtins.contains(&idx)
    }

    /// Builtin singletons, in generation order.
    pub fn builtins(&self) -> &[Idx] {
        &self.builtins
    }

    /// `(surface name, type-path node)` pairs for every builtin.
    pub fn builtin_type_paths(&self) -> &[(Identifier, NodeId)] {
        &self.builtin_type_paths
    }

    /// The builtin type node a surface type-path node stands for.
    pub fn lookup_node_to_type_ref(&self, alias: NodeId) -> Option<NodeId> {
        self.node_id_refs.get(&alias).copied()
    }

    pub fn set_unit_type_node_id(&mut self, id: NodeId) {
        self.unit_type_node_id = Some(id);
    }

    /// Surface node id of the `()` type path.
    pub fn unit_type_node_id(&self) -> Option<NodeId> {
        self.unit_type_node_id
    }
}
