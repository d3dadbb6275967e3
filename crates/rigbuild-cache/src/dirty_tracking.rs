//! 髒標記追蹤（庫存有變動的元件）

use std::collections::HashSet;

/// 髒標記追蹤器
#[derive(Debug, Default)]
pub struct DirtyTracker {
    dirty_components: HashSet<String>,
}

impl DirtyTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記元件庫存已變動
    pub fn mark_dirty(&mut self, component_id: impl Into<String>) {
        self.dirty_components.insert(component_id.into());
    }

    /// 檢查元件是否為髒
    pub fn is_dirty(&self, component_id: &str) -> bool {
        self.dirty_components.contains(component_id)
    }

    /// 檢查任一元件是否為髒
    pub fn any_dirty<'a>(&self, mut component_ids: impl Iterator<Item = &'a str>) -> bool {
        component_ids.any(|id| self.is_dirty(id))
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_components.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.dirty_components.is_empty()
    }

    /// 獲取所有髒元件（依ID排序）
    pub fn dirty_components(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.dirty_components.iter().cloned().collect();
        ids.sort();
        ids
    }
}
