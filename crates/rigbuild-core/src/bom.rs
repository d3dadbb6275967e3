//! 物料清單與組裝配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use uuid::Uuid;

use crate::{Result, StoreError};

/// 元件在配置中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentRole {
    /// 必選且唯一（如 CPU、主機板）
    RequiredUnique,
    /// 必選可多件（如記憶體、硬碟）
    RequiredMulti,
    /// 選配
    Optional,
}

impl ComponentRole {
    /// 是否為必選
    pub fn is_required(&self) -> bool {
        !matches!(self, ComponentRole::Optional)
    }
}

/// 物料清單行（只存在於編輯中的配置草稿）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillOfMaterialsLine {
    /// 元件ID
    pub component_id: String,

    /// 每台所需數量（至少 1）
    pub quantity_required: NonZeroU32,

    /// 元件角色
    pub component_role: ComponentRole,
}

impl BillOfMaterialsLine {
    /// 創建新的物料清單行
    pub fn new(
        component_id: impl Into<String>,
        quantity_required: NonZeroU32,
        component_role: ComponentRole,
    ) -> Self {
        Self {
            component_id: component_id.into(),
            quantity_required,
            component_role,
        }
    }

    /// 從整數數量創建（數量為 0 時回傳錯誤）
    pub fn try_new(
        component_id: impl Into<String>,
        quantity_required: u32,
        component_role: ComponentRole,
    ) -> Result<Self> {
        let component_id = component_id.into();
        let quantity = NonZeroU32::new(quantity_required).ok_or_else(|| {
            StoreError::InvalidQuantity(format!("元件 {} 的所需數量必須至少為 1", component_id))
        })?;
        Ok(Self::new(component_id, quantity, component_role))
    }

    /// 必選且唯一的單件行
    pub fn unique(component_id: impl Into<String>) -> Self {
        Self::new(component_id, NonZeroU32::MIN, ComponentRole::RequiredUnique)
    }

    /// 所需數量（整數）
    pub fn quantity(&self) -> u32 {
        self.quantity_required.get()
    }
}

/// 可行性計算結果（即時計算，不儲存）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeasibilityResult {
    /// 目前庫存可組裝的完整台數
    pub buildable_units: u32,

    /// 單台元件成本
    pub unit_cost: Decimal,
}

impl FeasibilityResult {
    /// 不可組裝的結果
    pub fn zero() -> Self {
        Self::default()
    }

    /// 是否至少可組裝一台
    pub fn is_buildable(&self) -> bool {
        self.buildable_units > 0
    }
}

/// PC 組裝配置草稿
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationDraft {
    /// 草稿ID
    pub id: Uuid,

    /// 配置名稱
    pub name: String,

    /// 售價
    pub sale_price: Decimal,

    /// 物料清單
    pub lines: Vec<BillOfMaterialsLine>,
}

impl ConfigurationDraft {
    /// 創建新的配置草稿
    pub fn new(name: impl Into<String>, sale_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sale_price,
            lines: Vec::new(),
        }
    }

    /// 建構器模式：添加物料清單行
    pub fn with_line(mut self, line: BillOfMaterialsLine) -> Self {
        self.lines.push(line);
        self
    }

    /// 建構器模式：設置物料清單
    pub fn with_lines(mut self, lines: Vec<BillOfMaterialsLine>) -> Self {
        self.lines = lines;
        self
    }

    /// 引用的元件ID（去重，保持順序）
    pub fn component_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            if !ids.contains(&line.component_id) {
                ids.push(line.component_id.clone());
            }
        }
        ids
    }

    /// 檢查是否引用某元件
    pub fn references(&self, component_id: &str) -> bool {
        self.lines.iter().any(|l| l.component_id == component_id)
    }
}
