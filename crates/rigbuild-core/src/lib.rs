//! # Rigbuild Core
//!
//! 核心資料模型與類型定義（商品、庫存、物料清單、配置）

pub mod bom;
pub mod config;
pub mod movement;
pub mod product;
pub mod stock;

// Re-export 主要類型
pub use bom::{BillOfMaterialsLine, ComponentRole, ConfigurationDraft, FeasibilityResult};
pub use config::{DocumentSettings, StockThresholds, StoreConfig};
pub use movement::{MovementKind, StockMovement};
pub use product::{
    ComponentKind, GamingChair, Laptop, Monitor, PcComponent, PcGamer, Peripheral, Product,
    ProductCategory, ProductInfo,
};
pub use stock::{ComponentStockRecord, StockStatus};

/// 門市系統錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("找不到元件: {0}")]
    ComponentNotFound(String),

    #[error("庫存不足：元件 {component_id} 需要 {requested}, 可用 {available}")]
    InsufficientStock {
        component_id: String,
        requested: u32,
        available: u32,
    },

    #[error("無效的數量: {0}")]
    InvalidQuantity(String),

    #[error("無效的價格: {0}")]
    InvalidPrice(String),

    #[error("物料清單為空，請選擇元件")]
    EmptyBillOfMaterials,

    #[error("元件重複出現在物料清單中: {0}")]
    DuplicateComponent(String),

    #[error("唯一必選元件 {component_id} 的數量必須為 1，目前為 {quantity}")]
    UniqueRoleQuantity { component_id: String, quantity: u32 },

    #[error("必選元件沒有庫存記錄: {}", .0.join(", "))]
    UnresolvedComponents(Vec<String>),

    #[error("組裝數量 {requested} 超過可組裝數量 {buildable}")]
    BuildExceedsStock { requested: u32, buildable: u32 },

    #[error("庫存查詢失敗: {0}")]
    Lookup(String),

    #[error("配置錯誤: {0}")]
    Config(String),

    #[error("文件產生錯誤: {0}")]
    Render(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
