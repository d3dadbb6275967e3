//! 門市配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, StoreError};

/// 門市整體配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 門市名稱（顯示在發票/報價單）
    pub store_name: String,

    /// 庫存狀態門檻
    pub stock: StockThresholds,

    /// 文件設定
    pub documents: DocumentSettings,
}

impl StoreConfig {
    /// 創建新的門市配置
    pub fn new(store_name: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            stock: StockThresholds::default(),
            documents: DocumentSettings::default(),
        }
    }

    /// 從 JSON 載入配置（未提供的欄位使用預設值）
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StoreConfig =
            serde_json::from_str(json).map_err(|e| StoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置低庫存門檻
    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.stock.low_stock_threshold = threshold;
        self
    }

    /// 建構器模式：設置稅率
    pub fn with_tax_rate(mut self, rate: Decimal) -> Self {
        self.documents.tax_rate = rate;
        self
    }

    /// 建構器模式：設置幣別
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.documents.currency = currency.into();
        self
    }

    /// 建構器模式：設置報價單有效天數
    pub fn with_quote_validity_days(mut self, days: u32) -> Self {
        self.documents.quote_validity_days = days;
        self
    }

    /// 檢查配置值是否合理
    pub fn validate(&self) -> Result<()> {
        let rate = self.documents.tax_rate;
        if rate < Decimal::ZERO || rate >= Decimal::ONE {
            return Err(StoreError::Config(format!("稅率必須介於 0 與 1 之間: {}", rate)));
        }
        if self.documents.currency.trim().is_empty() {
            return Err(StoreError::Config("幣別不可為空".to_string()));
        }
        if self.documents.invoice_prefix.is_empty() || self.documents.quote_prefix.is_empty() {
            return Err(StoreError::Config("文件編號前綴不可為空".to_string()));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("Rigbuild Hardware Store")
    }
}

/// 庫存狀態門檻
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockThresholds {
    /// 數量小於等於此值（且大於 0）視為低庫存
    pub low_stock_threshold: u32,
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            low_stock_threshold: 5,
        }
    }
}

/// 發票/報價單設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// 稅率（0.2 = 20%）
    pub tax_rate: Decimal,

    /// 幣別代碼
    pub currency: String,

    /// 發票編號前綴
    pub invoice_prefix: String,

    /// 報價單編號前綴
    pub quote_prefix: String,

    /// 報價單有效天數
    pub quote_validity_days: u32,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(20, 2),
            currency: "EUR".to_string(),
            invoice_prefix: "INV".to_string(),
            quote_prefix: "QUO".to_string(),
            quote_validity_days: 30,
        }
    }
}
