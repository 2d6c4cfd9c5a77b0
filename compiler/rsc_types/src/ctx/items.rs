//! Crates, modules and item descriptors.

use rsc_ir::{
    AssociatedItemInfo, CanonicalPath, CrateInfo, CrateNum, EnumInfo, EnumItemInfo,
    ExternalItemInfo, Identifier, ImplInfo, ItemInfo, ModuleInfo, NodeId,
};

use crate::{InternalError, TyCtx, TyResult};

impl TyCtx {
    // Crates

    pub fn insert_ast_crate(&mut self, info: CrateInfo, crate_num: CrateNum) {
        self.crates.insert(crate_num, info);
    }

    pub fn crate_name(&self, crate_num: CrateNum) -> Option<&Identifier> {
        self.crates.get(&crate_num).map(|c| &c.name)
    }

    /// Check if `id` is the root node of a registered crate.
    ///
    /// Linear in the number of crates.
    pub fn is_crate(&self, id: NodeId) -> bool {
        self.crates.values().any(|c| c.node_id == id)
    }

    // Modules

    pub fn insert_module(&mut self, info: ModuleInfo) {
        self.modules.insert(info.node_id, info);
    }

    pub fn lookup_module(&self, id: NodeId) -> Option<&ModuleInfo> {
        self.modules.get(&id)
    }

    /// Check if `id` names a module that has registered children.
    pub fn is_module(&self, id: NodeId) -> bool {
        self.module_child_items.contains_key(&id)
    }

    pub fn insert_module_child_item(&mut self, module: NodeId, child: CanonicalPath) {
        self.module_child_items.entry(module).or_default().push(child);
    }

    pub fn lookup_module_children_items(&self, module: NodeId) -> Option<&[CanonicalPath]> {
        self.module_child_items.get(&module).map(Vec::as_slice)
    }

    /// The child of `module` whose path is name-equal to `item`.
    pub fn lookup_module_child(&self, module: NodeId, item: &CanonicalPath) -> Option<&CanonicalPath> {
        self.lookup_module_children_items(module)?
            .iter()
            .find(|child| child.is_equal_by_name(item))
    }

    pub fn insert_child_item_to_parent_module_mapping(&mut self, child: NodeId, parent: NodeId) {
        self.child_to_parent_module.entry(child).or_insert(parent);
    }

    pub fn lookup_parent_module(&self, child: NodeId) -> Option<NodeId> {
        self.child_to_parent_module.get(&child).copied()
    }

    // Items

    pub fn insert_item(&mut self, info: ItemInfo) {
        self.items.insert(info.node_id, info);
    }

    pub fn lookup_item(&self, id: NodeId) -> Option<&ItemInfo> {
        self.items.get(&id)
    }

    pub fn insert_enumeration(&mut self, info: EnumInfo) {
        self.enumerations.insert(info.node_id, info);
    }

    pub fn lookup_enumeration(&self, id: NodeId) -> Option<&EnumInfo> {
        self.enumerations.get(&id)
    }

    /// Register `item` as a variant of `parent`.
    ///
    /// Enum item ids are unique across the whole crate graph, so a second
    /// registration of the same id is an error even under another enum.
    pub fn insert_enum_item(&mut self, parent: EnumInfo, item: EnumItemInfo) -> TyResult<()> {
        let id = item.node_id;
        if self.enum_items.contains_key(&id) {
            tracing::error!(%id, "enum item registered twice");
            return Err(InternalError::DuplicateEnumItem(id));
        }
        self.enum_items.insert(id, (parent, item));
        Ok(())
    }

    pub fn lookup_enum_item(&self, id: NodeId) -> Option<(&EnumInfo, &EnumItemInfo)> {
        self.enum_items
            .get(&id)
            .map(|(parent, item)| (parent, item))
    }

    /// Record that the node `id` refers to the variant `variant`.
    pub fn insert_variant_definition(&mut self, id: NodeId, variant: NodeId) {
        self.variant_definitions.insert(id, variant);
    }

    pub fn lookup_variant_definition(&self, id: NodeId) -> Option<NodeId> {
        self.variant_definitions.get(&id).copied()
    }

    pub fn insert_implementation(&mut self, info: ImplInfo) {
        self.implementations.insert(info.node_id, info);
    }

    pub fn lookup_implementation(&self, id: NodeId) -> Option<&ImplInfo> {
        self.implementations.get(&id)
    }

    pub fn insert_external_item(&mut self, info: ExternalItemInfo) {
        self.external_items.insert(info.node_id, info);
    }

    pub fn lookup_external_item(&self, id: NodeId) -> Option<&ExternalItemInfo> {
        self.external_items.get(&id)
    }

    pub fn insert_associated_item(&mut self, info: AssociatedItemInfo) {
        self.associated_items.insert(info.node_id, info);
    }

    pub fn lookup_associated_item(&self, id: NodeId) -> Option<&AssociatedItemInfo> {
        self.associated_items.get(&id)
    }
}
