//! 商品模型（依類別區分的標記聯合）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bom::BillOfMaterialsLine;
use crate::config::StockThresholds;
use crate::stock::{ComponentStockRecord, StockStatus};

/// 商品類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Laptop,
    Monitor,
    Peripheral,
    GamingChair,
    PcGamer,
    PcComponent,
}

impl ProductCategory {
    /// 顯示用名稱
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Laptop => "Laptop",
            ProductCategory::Monitor => "Monitor",
            ProductCategory::Peripheral => "Peripheral",
            ProductCategory::GamingChair => "Gaming chair",
            ProductCategory::PcGamer => "PC gamer",
            ProductCategory::PcComponent => "PC component",
        }
    }
}

/// 所有商品共用的欄位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// 商品ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 品牌
    pub brand: Option<String>,

    /// 售價
    pub sale_price: Decimal,

    /// 進貨價
    pub purchase_price: Decimal,

    /// 現有庫存
    pub stock: u32,
}

impl ProductInfo {
    /// 創建新的商品資訊
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sale_price: Decimal,
        purchase_price: Decimal,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: None,
            sale_price,
            purchase_price,
            stock,
        }
    }

    /// 建構器模式：設置品牌
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laptop {
    #[serde(flatten)]
    pub info: ProductInfo,
    pub processor: String,
    pub ram_gb: u32,
    pub storage: String,
    pub screen_inches: Decimal,
    pub graphics: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    #[serde(flatten)]
    pub info: ProductInfo,
    pub size_inches: Decimal,
    pub resolution: String,
    pub refresh_rate_hz: u32,
    pub panel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peripheral {
    #[serde(flatten)]
    pub info: ProductInfo,
    /// 周邊類型（鍵盤、滑鼠、耳機…）
    pub peripheral_type: String,
    pub connectivity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamingChair {
    #[serde(flatten)]
    pub info: ProductInfo,
    pub material: String,
    pub color: String,
    pub max_load_kg: u32,
}

/// 組裝電腦（由元件物料清單組成）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcGamer {
    #[serde(flatten)]
    pub info: ProductInfo,
    pub lines: Vec<BillOfMaterialsLine>,
}

/// 電腦元件種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Storage,
    PowerSupply,
    Case,
    Cooler,
}

impl ComponentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Cpu => "Processor",
            ComponentKind::Gpu => "Graphics card",
            ComponentKind::Motherboard => "Motherboard",
            ComponentKind::Ram => "Memory",
            ComponentKind::Storage => "Storage",
            ComponentKind::PowerSupply => "Power supply",
            ComponentKind::Case => "Case",
            ComponentKind::Cooler => "Cooling",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcComponent {
    #[serde(flatten)]
    pub info: ProductInfo,
    pub kind: ComponentKind,
    /// 自由格式的規格描述（如 "8 cores / 16 threads"）
    pub specs: Vec<String>,
}

impl PcComponent {
    /// 轉換為可行性計算所需的庫存記錄
    pub fn to_stock_record(&self) -> ComponentStockRecord {
        ComponentStockRecord::new(
            self.info.id.clone(),
            self.info.stock,
            self.info.purchase_price,
        )
    }
}

/// 商品（依類別區分）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Product {
    Laptop(Laptop),
    Monitor(Monitor),
    Peripheral(Peripheral),
    GamingChair(GamingChair),
    PcGamer(PcGamer),
    PcComponent(PcComponent),
}

impl Product {
    /// 商品類別
    pub fn category(&self) -> ProductCategory {
        match self {
            Product::Laptop(_) => ProductCategory::Laptop,
            Product::Monitor(_) => ProductCategory::Monitor,
            Product::Peripheral(_) => ProductCategory::Peripheral,
            Product::GamingChair(_) => ProductCategory::GamingChair,
            Product::PcGamer(_) => ProductCategory::PcGamer,
            Product::PcComponent(_) => ProductCategory::PcComponent,
        }
    }

    /// 共用欄位
    pub fn info(&self) -> &ProductInfo {
        match self {
            Product::Laptop(p) => &p.info,
            Product::Monitor(p) => &p.info,
            Product::Peripheral(p) => &p.info,
            Product::GamingChair(p) => &p.info,
            Product::PcGamer(p) => &p.info,
            Product::PcComponent(p) => &p.info,
        }
    }

    pub fn id(&self) -> &str {
        &self.info().id
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    /// 依類別產生規格說明行（用於發票/報價單）
    pub fn spec_lines(&self) -> Vec<String> {
        match self {
            Product::Laptop(p) => {
                let mut lines = vec![
                    format!("Processor: {}", p.processor),
                    format!("Memory: {} GB", p.ram_gb),
                    format!("Storage: {}", p.storage),
                    format!("Screen: {}\"", p.screen_inches),
                ];
                if let Some(graphics) = &p.graphics {
                    lines.push(format!("Graphics: {}", graphics));
                }
                lines
            }
            Product::Monitor(p) => vec![
                format!("Size: {}\"", p.size_inches),
                format!("Resolution: {}", p.resolution),
                format!("Refresh rate: {} Hz", p.refresh_rate_hz),
                format!("Panel: {}", p.panel),
            ],
            Product::Peripheral(p) => vec![
                format!("Type: {}", p.peripheral_type),
                format!("Connectivity: {}", p.connectivity),
            ],
            Product::GamingChair(p) => vec![
                format!("Material: {}", p.material),
                format!("Color: {}", p.color),
                format!("Max load: {} kg", p.max_load_kg),
            ],
            Product::PcGamer(p) => p
                .lines
                .iter()
                .map(|line| format!("{} x {}", line.quantity(), line.component_id))
                .collect(),
            Product::PcComponent(p) => std::iter::once(format!("Type: {}", p.kind.label()))
                .chain(p.specs.iter().cloned())
                .collect(),
        }
    }

    /// 依門檻判斷庫存狀態
    pub fn stock_status(&self, thresholds: &StockThresholds) -> StockStatus {
        StockStatus::classify(self.info().stock, thresholds)
    }
}
