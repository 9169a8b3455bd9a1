mod csv;

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{
    menu::{MenuItemRecord, ModifierRecord},
    parse::RestaurantId,
};

/// The two sorted sections of the export, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportDocument {
    pub items: Vec<MenuItemRecord>,
    pub modifiers: Vec<ModifierRecord>,
}

impl ExportDocument {
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        csv::write_row(&mut out, MenuItemRecord::HEADER);
        for item in &self.items {
            csv::write_row(&mut out, item.fields());
        }
        csv::write_row(&mut out, ModifierRecord::HEADER);
        for modifier in &self.modifiers {
            csv::write_row(&mut out, modifier.fields());
        }
        out
    }

    /// Writes `{id}.csv` into `dir`, replacing any existing file. The content
    /// goes to a sibling temp file first so a reader never sees a partial export.
    pub async fn write(&self, dir: impl AsRef<Path>, id: RestaurantId) -> crate::Result<PathBuf> {
        let dir = dir.as_ref();
        let path = dir.join(file_name(id));
        let tmp = dir.join(format!(".{}.tmp", file_name(id)));
        fs::write(&tmp, self.to_csv()).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        log::info!(
            "Wrote {} items and {} modifiers to {}",
            self.items.len(),
            self.modifiers.len(),
            path.display()
        );
        Ok(path)
    }
}

pub fn file_name(id: RestaurantId) -> String {
    format!("{id}.csv")
}
