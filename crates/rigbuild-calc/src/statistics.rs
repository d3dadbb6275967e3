//! 庫存統計

use rigbuild_core::{ComponentStockRecord, StockStatus, StockThresholds};
use rust_decimal::Decimal;
use serde::Serialize;

/// 庫存統計結果
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InventoryStatistics {
    /// 記錄筆數
    pub record_count: usize,
    /// 總庫存數量
    pub total_units: u64,
    /// 庫存金額（庫存 × 進貨價）
    pub stock_value: Decimal,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// 需要補貨的元件（缺貨或低庫存，依ID排序）
    pub restock_ids: Vec<String>,
}

impl InventoryStatistics {
    /// 彙總庫存記錄
    pub fn collect<'a>(
        records: impl IntoIterator<Item = &'a ComponentStockRecord>,
        thresholds: &StockThresholds,
    ) -> Self {
        let mut stats = Self::default();

        for record in records {
            stats.record_count += 1;
            stats.total_units += u64::from(record.stock_on_hand);
            stats.stock_value += record.stock_value();

            let status = record.status(thresholds);
            match status {
                StockStatus::InStock => stats.in_stock += 1,
                StockStatus::LowStock => stats.low_stock += 1,
                StockStatus::OutOfStock => stats.out_of_stock += 1,
            }
            if status.needs_restock() {
                stats.restock_ids.push(record.id.clone());
            }
        }

        stats.restock_ids.sort();
        stats
    }
}
