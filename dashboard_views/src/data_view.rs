//! Raw price history preview

use forecast_data::{Asset, LoadedBundle, Table};
use serde::Serialize;

/// Rows shown in table previews
pub const PREVIEW_ROWS: usize = 50;

/// The first rows of one asset's price history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataView {
    pub asset: Asset,
    /// Rows in the full table
    pub total_rows: usize,
    pub preview: Table,
}

impl DataView {
    pub fn build(bundle: &LoadedBundle, asset: Asset) -> Self {
        let table = bundle.price_history(asset);
        Self {
            asset,
            total_rows: table.len(),
            preview: table.head(PREVIEW_ROWS),
        }
    }
}
