//! 配置草稿驗證

use rigbuild_core::{ComponentRole, ComponentStockRecord, ConfigurationDraft, Result, StoreError};
use std::collections::{HashMap, HashSet};

/// 配置草稿驗證器
///
/// 可行性計算本身把找不到的元件視為 0 台；需要嚴格檢查的呼叫端
/// 在儲存草稿前使用此驗證器。
pub struct DraftValidator;

impl DraftValidator {
    /// 驗證草稿
    ///
    /// 依序檢查：物料清單非空、元件不重複、唯一必選元件數量為 1、
    /// 必選元件都有庫存記錄（選配元件可缺）。
    pub fn validate(
        draft: &ConfigurationDraft,
        stock: &HashMap<String, ComponentStockRecord>,
    ) -> Result<()> {
        if draft.lines.is_empty() {
            return Err(StoreError::EmptyBillOfMaterials);
        }

        let mut seen = HashSet::new();
        for line in &draft.lines {
            if !seen.insert(line.component_id.as_str()) {
                return Err(StoreError::DuplicateComponent(line.component_id.clone()));
            }
        }

        for line in &draft.lines {
            if line.component_role == ComponentRole::RequiredUnique && line.quantity() != 1 {
                return Err(StoreError::UniqueRoleQuantity {
                    component_id: line.component_id.clone(),
                    quantity: line.quantity(),
                });
            }
        }

        let unresolved: Vec<String> = draft
            .lines
            .iter()
            .filter(|l| l.component_role.is_required() && !stock.contains_key(&l.component_id))
            .map(|l| l.component_id.clone())
            .collect();
        if !unresolved.is_empty() {
            return Err(StoreError::UnresolvedComponents(unresolved));
        }

        Ok(())
    }
}
