//! 組裝可行性計算（限制元件）

use rigbuild_core::{BillOfMaterialsLine, ComponentRole, ComponentStockRecord, FeasibilityResult};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// 單行可行性明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFeasibility {
    /// 元件ID
    pub component_id: String,
    /// 元件角色
    pub role: ComponentRole,
    /// 每台所需數量
    pub quantity_required: u32,
    /// 現有庫存（找不到記錄時為 None）
    pub stock_on_hand: Option<u32>,
    /// 此行可支撐的台數
    pub line_buildable: Option<u32>,
    /// 此行的單台成本
    pub line_cost: Option<Decimal>,
}

impl LineFeasibility {
    /// 是否找到庫存記錄
    pub fn is_resolved(&self) -> bool {
        self.stock_on_hand.is_some()
    }
}

/// 可行性分析報告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeasibilityReport {
    /// 各行明細（保持輸入順序）
    pub lines: Vec<LineFeasibility>,
    /// 找不到庫存記錄的元件
    pub unresolved: Vec<String>,
    /// 限制元件（可組裝台數最小的行）
    pub limiting_component: Option<String>,
}

impl FeasibilityReport {
    /// 彙總為可行性結果
    ///
    /// 與 [`FeasibilityCalculator::compute_feasibility`] 的結果一致：
    /// 任一元件缺少記錄時台數與成本皆為 0。
    pub fn result(&self) -> FeasibilityResult {
        if self.lines.is_empty() || !self.unresolved.is_empty() {
            return FeasibilityResult::zero();
        }

        let buildable_units = self
            .lines
            .iter()
            .filter_map(|l| l.line_buildable)
            .min()
            .unwrap_or(0);
        let unit_cost = self.lines.iter().filter_map(|l| l.line_cost).sum();

        FeasibilityResult {
            buildable_units,
            unit_cost,
        }
    }
}

/// 可行性計算器
pub struct FeasibilityCalculator;

impl FeasibilityCalculator {
    /// 計算可組裝台數與單台成本
    ///
    /// 可組裝台數為各行 `floor(庫存 / 所需數量)` 的最小值；
    /// 物料清單為空或任一元件找不到庫存記錄時回傳 0 台、成本 0。
    pub fn compute_feasibility(
        lines: &[BillOfMaterialsLine],
        stock: &HashMap<String, ComponentStockRecord>,
    ) -> FeasibilityResult {
        if lines.is_empty() {
            return FeasibilityResult::zero();
        }

        // None 代表尚無限制
        let mut max_buildable: Option<u32> = None;
        let mut unit_cost = Decimal::ZERO;

        for line in lines {
            let Some(record) = stock.get(&line.component_id) else {
                tracing::debug!("元件 {} 沒有庫存記錄，無法組裝", line.component_id);
                return FeasibilityResult::zero();
            };

            let quantity = line.quantity_required.get();
            let line_buildable = record.stock_on_hand / quantity;

            max_buildable = Some(match max_buildable {
                Some(current) => current.min(line_buildable),
                None => line_buildable,
            });
            unit_cost += record.purchase_price * Decimal::from(quantity);
        }

        FeasibilityResult {
            buildable_units: max_buildable.unwrap_or(0),
            unit_cost,
        }
    }

    /// 逐行分析可行性
    ///
    /// 不會因缺少記錄而中斷，所有行都會列出；限制元件取輸入順序中
    /// 第一個達到最小台數的行。
    pub fn analyze(
        lines: &[BillOfMaterialsLine],
        stock: &HashMap<String, ComponentStockRecord>,
    ) -> FeasibilityReport {
        let mut details = Vec::with_capacity(lines.len());
        let mut unresolved = Vec::new();
        let mut limiting: Option<(u32, &str)> = None;

        for line in lines {
            let quantity = line.quantity_required.get();
            let record = stock.get(&line.component_id);

            let line_buildable = record.map(|r| r.stock_on_hand / quantity);
            if let Some(units) = line_buildable {
                if limiting.map_or(true, |(min, _)| units < min) {
                    limiting = Some((units, line.component_id.as_str()));
                }
            } else if !unresolved.contains(&line.component_id) {
                unresolved.push(line.component_id.clone());
            }

            details.push(LineFeasibility {
                component_id: line.component_id.clone(),
                role: line.component_role,
                quantity_required: quantity,
                stock_on_hand: record.map(|r| r.stock_on_hand),
                line_buildable,
                line_cost: record.map(|r| r.purchase_price * Decimal::from(quantity)),
            });
        }

        FeasibilityReport {
            lines: details,
            unresolved,
            limiting_component: limiting.map(|(_, id)| id.to_string()),
        }
    }
}
