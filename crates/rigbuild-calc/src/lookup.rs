//! 庫存查詢介面

use rigbuild_core::{ComponentStockRecord, Result, StockMovement, StoreError};
use std::collections::HashMap;

/// 庫存查詢能力（由呼叫端注入，隔離後端實作）
pub trait StockLookup {
    /// 取得指定元件的最新庫存快照
    ///
    /// 找不到記錄的元件不會出現在回傳結果中。
    fn fetch_stock(&self, component_ids: &[String]) -> Result<HashMap<String, ComponentStockRecord>>;
}

impl<T: StockLookup + ?Sized> StockLookup for &T {
    fn fetch_stock(&self, component_ids: &[String]) -> Result<HashMap<String, ComponentStockRecord>> {
        (**self).fetch_stock(component_ids)
    }
}

/// 記憶體內的庫存查詢
#[derive(Debug, Clone, Default)]
pub struct InMemoryStockLookup {
    records: HashMap<String, ComponentStockRecord>,
}

impl InMemoryStockLookup {
    /// 創建空的查詢
    pub fn new() -> Self {
        Self::default()
    }

    /// 由庫存記錄建立
    pub fn from_records(records: impl IntoIterator<Item = ComponentStockRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    /// 新增或覆寫記錄
    pub fn upsert(&mut self, record: ComponentStockRecord) {
        self.records.insert(record.id.clone(), record);
    }

    /// 移除記錄
    pub fn remove(&mut self, component_id: &str) -> Option<ComponentStockRecord> {
        self.records.remove(component_id)
    }

    /// 套用庫存異動
    pub fn apply_movement(&mut self, movement: &StockMovement) -> Result<()> {
        let record = self
            .records
            .get_mut(&movement.component_id)
            .ok_or_else(|| StoreError::ComponentNotFound(movement.component_id.clone()))?;
        record.apply_movement(movement)
    }

    /// 查詢單一記錄
    pub fn get(&self, component_id: &str) -> Option<&ComponentStockRecord> {
        self.records.get(component_id)
    }

    /// 所有記錄
    pub fn records(&self) -> impl Iterator<Item = &ComponentStockRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StockLookup for InMemoryStockLookup {
    fn fetch_stock(&self, component_ids: &[String]) -> Result<HashMap<String, ComponentStockRecord>> {
        Ok(component_ids
            .iter()
            .filter_map(|id| self.records.get(id).map(|r| (id.clone(), r.clone())))
            .collect())
    }
}
