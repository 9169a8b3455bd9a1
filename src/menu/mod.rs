mod price;
mod records;

use std::collections::HashSet;

use crate::export::ExportDocument;

pub use price::Price;
pub use records::{MenuItemRecord, ModifierRecord};

/// Deduplicated record sets accumulated while scraping. Insertion order never
/// matters; sorting happens once in [`MenuExport::into_document`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuExport {
    items: HashSet<MenuItemRecord>,
    modifiers: HashSet<ModifierRecord>,
}

impl MenuExport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, record: MenuItemRecord) {
        self.items.insert(record);
    }

    pub fn merge_modifiers(&mut self, records: impl IntoIterator<Item = ModifierRecord>) {
        self.modifiers.extend(records);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    pub fn into_document(self) -> ExportDocument {
        let mut items: Vec<_> = self.items.into_iter().collect();
        let mut modifiers: Vec<_> = self.modifiers.into_iter().collect();
        items.sort_unstable();
        modifiers.sort_unstable();
        ExportDocument { items, modifiers }
    }
}
