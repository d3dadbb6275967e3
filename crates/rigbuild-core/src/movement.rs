//! 庫存異動模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 異動類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// 入庫（進貨、退貨）
    Inbound,
    /// 出庫（銷售、組裝耗用）
    Outbound,
    /// 盤點調整（直接設定為指定數量）
    Adjustment,
}

/// 庫存異動
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    /// 異動ID
    pub id: Uuid,

    /// 元件ID
    pub component_id: String,

    /// 異動類型
    pub kind: MovementKind,

    /// 數量（調整時為調整後數量）
    pub quantity: u32,

    /// 發生時間
    pub occurred_at: DateTime<Utc>,

    /// 備註（如來源單據）
    pub note: Option<String>,
}

impl StockMovement {
    /// 創建新的異動
    pub fn new(
        component_id: impl Into<String>,
        kind: MovementKind,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            component_id: component_id.into(),
            kind,
            quantity,
            occurred_at,
            note: None,
        }
    }

    pub fn inbound(component_id: impl Into<String>, quantity: u32, at: DateTime<Utc>) -> Self {
        Self::new(component_id, MovementKind::Inbound, quantity, at)
    }

    pub fn outbound(component_id: impl Into<String>, quantity: u32, at: DateTime<Utc>) -> Self {
        Self::new(component_id, MovementKind::Outbound, quantity, at)
    }

    pub fn adjustment(component_id: impl Into<String>, quantity: u32, at: DateTime<Utc>) -> Self {
        Self::new(component_id, MovementKind::Adjustment, quantity, at)
    }

    /// 建構器模式：設置備註
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// 對庫存的淨影響（調整類型無法單獨判斷，回傳 None）
    pub fn signed_delta(&self) -> Option<i64> {
        match self.kind {
            MovementKind::Inbound => Some(i64::from(self.quantity)),
            MovementKind::Outbound => Some(-i64::from(self.quantity)),
            MovementKind::Adjustment => None,
        }
    }
}
