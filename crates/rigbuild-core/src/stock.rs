//! 元件庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StockThresholds;
use crate::movement::{MovementKind, StockMovement};
use crate::{Result, StoreError};

/// 元件庫存記錄（由庫存系統擁有）
///
/// 反序列化時拒絕負的進貨單價。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StockRecordData")]
pub struct ComponentStockRecord {
    /// 元件ID
    pub id: String,

    /// 現有庫存
    pub stock_on_hand: u32,

    /// 進貨單價
    pub purchase_price: Decimal,
}

/// 未經驗證的庫存記錄資料
#[derive(Deserialize)]
struct StockRecordData {
    id: String,
    stock_on_hand: u32,
    purchase_price: Decimal,
}

impl TryFrom<StockRecordData> for ComponentStockRecord {
    type Error = StoreError;

    fn try_from(data: StockRecordData) -> Result<Self> {
        Self::try_new(data.id, data.stock_on_hand, data.purchase_price)
    }
}

impl ComponentStockRecord {
    /// 創建新的庫存記錄（進貨單價必須 >= 0）
    pub fn new(id: impl Into<String>, stock_on_hand: u32, purchase_price: Decimal) -> Self {
        debug_assert!(purchase_price >= Decimal::ZERO);
        Self {
            id: id.into(),
            stock_on_hand,
            purchase_price,
        }
    }

    /// 創建新的庫存記錄，進貨單價為負時回傳 [`StoreError::InvalidPrice`]
    pub fn try_new(id: impl Into<String>, stock_on_hand: u32, purchase_price: Decimal) -> Result<Self> {
        let id = id.into();
        if purchase_price < Decimal::ZERO {
            return Err(StoreError::InvalidPrice(format!(
                "元件 {} 的進貨單價不可為負: {}",
                id, purchase_price
            )));
        }
        Ok(Self {
            id,
            stock_on_hand,
            purchase_price,
        })
    }

    /// 庫存金額（現有庫存 × 進貨單價）
    pub fn stock_value(&self) -> Decimal {
        self.purchase_price * Decimal::from(self.stock_on_hand)
    }

    /// 依門檻判斷庫存狀態
    pub fn status(&self, thresholds: &StockThresholds) -> StockStatus {
        StockStatus::classify(self.stock_on_hand, thresholds)
    }

    /// 套用庫存異動
    ///
    /// 出庫數量超過現有庫存時回傳 [`StoreError::InsufficientStock`]，
    /// 庫存記錄保持不變。
    pub fn apply_movement(&mut self, movement: &StockMovement) -> Result<()> {
        if movement.component_id != self.id {
            return Err(StoreError::ComponentNotFound(movement.component_id.clone()));
        }

        self.stock_on_hand = match movement.kind {
            MovementKind::Inbound => self
                .stock_on_hand
                .checked_add(movement.quantity)
                .ok_or_else(|| {
                    StoreError::InvalidQuantity(format!(
                        "入庫後庫存溢出: {} + {}",
                        self.stock_on_hand, movement.quantity
                    ))
                })?,
            MovementKind::Outbound => self
                .stock_on_hand
                .checked_sub(movement.quantity)
                .ok_or_else(|| StoreError::InsufficientStock {
                    component_id: self.id.clone(),
                    requested: movement.quantity,
                    available: self.stock_on_hand,
                })?,
            MovementKind::Adjustment => movement.quantity,
        };

        Ok(())
    }
}

/// 庫存狀態標籤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// 缺貨
    OutOfStock,
    /// 庫存偏低
    LowStock,
    /// 有庫存
    InStock,
}

impl StockStatus {
    /// 依數量與門檻分類
    pub fn classify(quantity: u32, thresholds: &StockThresholds) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= thresholds.low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// 顯示用標籤
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out of stock",
            StockStatus::LowStock => "low stock",
            StockStatus::InStock => "in stock",
        }
    }

    /// 是否需要補貨
    pub fn needs_restock(&self) -> bool {
        !matches!(self, StockStatus::InStock)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    #[test]
    fn test_create_record() {
        let record = ComponentStockRecord::new("CPU-R7-7800X3D", 12, Decimal::from(320));

        assert_eq!(record.id, "CPU-R7-7800X3D");
        assert_eq!(record.stock_on_hand, 12);
        assert_eq!(record.stock_value(), Decimal::from(3840));
    }

    #[test]
    fn test_negative_purchase_price_rejected() {
        let err = ComponentStockRecord::try_new("FAN-120", 3, Decimal::new(-150, 2)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidPrice(_)));
        assert!(ComponentStockRecord::try_new("FAN-120", 3, Decimal::ZERO).is_ok());

        let json = r#"{"id":"FAN-120","stock_on_hand":3,"purchase_price":"-1.50"}"#;
        assert!(serde_json::from_str::<ComponentStockRecord>(json).is_err());

        let json = r#"{"id":"FAN-120","stock_on_hand":3,"purchase_price":"1.50"}"#;
        let record: ComponentStockRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.purchase_price, Decimal::new(150, 2));
    }

    #[rstest]
    #[case(0, StockStatus::OutOfStock)]
    #[case(1, StockStatus::LowStock)]
    #[case(5, StockStatus::LowStock)]
    #[case(6, StockStatus::InStock)]
    fn test_classify_status(#[case] quantity: u32, #[case] expected: StockStatus) {
        let thresholds = StockThresholds::default();
        assert_eq!(StockStatus::classify(quantity, &thresholds), expected);
    }

    #[test]
    fn test_apply_movements() {
        let mut record = ComponentStockRecord::new("RAM-32G-DDR5", 10, Decimal::from(95));

        // 入庫
        record
            .apply_movement(&StockMovement::inbound("RAM-32G-DDR5", 5, Utc::now()))
            .unwrap();
        assert_eq!(record.stock_on_hand, 15);

        // 出庫
        record
            .apply_movement(&StockMovement::outbound("RAM-32G-DDR5", 4, Utc::now()))
            .unwrap();
        assert_eq!(record.stock_on_hand, 11);

        // 盤點調整
        record
            .apply_movement(&StockMovement::adjustment("RAM-32G-DDR5", 9, Utc::now()))
            .unwrap();
        assert_eq!(record.stock_on_hand, 9);
    }

    #[test]
    fn test_outbound_exceeding_stock_fails() {
        let mut record = ComponentStockRecord::new("GPU-RTX-4070", 2, Decimal::from(540));

        let err = record
            .apply_movement(&StockMovement::outbound("GPU-RTX-4070", 3, Utc::now()))
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::InsufficientStock {
                requested: 3,
                available: 2,
                ..
            }
        ));
        // 失敗時庫存不變
        assert_eq!(record.stock_on_hand, 2);
    }

    #[test]
    fn test_movement_for_other_component_rejected() {
        let mut record = ComponentStockRecord::new("PSU-750W", 4, Decimal::from(80));
        let result = record.apply_movement(&StockMovement::inbound("PSU-850W", 1, Utc::now()));
        assert!(matches!(result, Err(StoreError::ComponentNotFound(_))));
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"out-of-stock\"");
    }
}
