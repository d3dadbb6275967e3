//! 組裝耗用規劃

use chrono::{DateTime, Utc};
use rigbuild_core::{BillOfMaterialsLine, ComponentStockRecord, StockMovement, StoreError};
use std::collections::HashMap;

/// 組裝規劃器
pub struct AssemblyPlanner;

impl AssemblyPlanner {
    /// 產生組裝指定台數所需的出庫異動
    ///
    /// 每個元件產生一筆出庫，耗用量 = 各行所需數量合計 × 組裝台數。
    /// 任一元件庫存不足以支應合計耗用量時回傳
    /// [`StoreError::BuildExceedsStock`]，不產生任何異動。
    pub fn plan(
        lines: &[BillOfMaterialsLine],
        stock: &HashMap<String, ComponentStockRecord>,
        units: u32,
        at: DateTime<Utc>,
    ) -> rigbuild_core::Result<Vec<StockMovement>> {
        if units == 0 {
            return Ok(Vec::new());
        }

        // 同一元件出現在多行時合併耗用量，依首次出現順序
        let mut per_unit: Vec<(&str, u64)> = Vec::new();
        for line in lines {
            let quantity = u64::from(line.quantity());
            match per_unit.iter_mut().find(|(id, _)| *id == line.component_id) {
                Some((_, total)) => *total += quantity,
                None => per_unit.push((line.component_id.as_str(), quantity)),
            }
        }

        let buildable = per_unit
            .iter()
            .map(|&(id, quantity)| {
                stock
                    .get(id)
                    .map_or(0, |record| u64::from(record.stock_on_hand) / quantity)
            })
            .min()
            .unwrap_or(0);
        let buildable = u32::try_from(buildable).unwrap_or(u32::MAX);
        if units > buildable {
            return Err(StoreError::BuildExceedsStock {
                requested: units,
                buildable,
            });
        }

        let mut movements = Vec::with_capacity(per_unit.len());
        for (component_id, quantity) in per_unit {
            // 不會溢位：consumed <= stock_on_hand
            let consumed = u32::try_from(quantity * u64::from(units)).map_err(|_| {
                StoreError::InvalidQuantity(format!("元件 {} 耗用量超出範圍", component_id))
            })?;
            tracing::debug!(
                "組裝耗用: {} x {} 台 = {}",
                component_id,
                units,
                consumed
            );
            movements.push(
                StockMovement::outbound(component_id, consumed, at)
                    .with_note(format!("assembly of {} unit(s)", units)),
            );
        }

        Ok(movements)
    }
}
