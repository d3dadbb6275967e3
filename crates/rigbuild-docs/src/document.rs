//! 發票/報價單模型

use chrono::{Datelike, Days, NaiveDate};
use rigbuild_core::{DocumentSettings, Product, StoreConfig, StoreError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::Client;
use crate::totals::DocumentTotals;

/// 文件類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// 發票
    Invoice,
    /// 報價單
    Quote,
}

impl DocumentKind {
    /// 文件標題
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "Invoice",
            DocumentKind::Quote => "Quote",
        }
    }
}

/// 文件明細行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLine {
    /// 品名
    pub description: String,

    /// 規格說明
    pub spec_lines: Vec<String>,

    /// 數量
    pub quantity: u32,

    /// 單價（未稅）
    pub unit_price: Decimal,
}

impl DocumentLine {
    /// 創建新的明細行
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            spec_lines: Vec::new(),
            quantity,
            unit_price,
        }
    }

    /// 由商品建立明細行（品名與規格依商品類別產生）
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        let info = product.info();
        let description = match &info.brand {
            Some(brand) => format!("{} {}", brand, info.name),
            None => info.name.clone(),
        };
        Self {
            description,
            spec_lines: product.spec_lines(),
            quantity,
            unit_price: info.sale_price,
        }
    }

    /// 建構器模式：設置規格說明
    pub fn with_spec_lines(mut self, spec_lines: Vec<String>) -> Self {
        self.spec_lines = spec_lines;
        self
    }

    /// 小計（不四捨五入）
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// 發票或報價單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// 文件ID
    pub id: Uuid,

    /// 文件類型
    pub kind: DocumentKind,

    /// 文件編號
    pub number: String,

    /// 客戶
    pub client: Client,

    /// 開立日期
    pub issued_on: NaiveDate,

    /// 有效期限（僅報價單）
    pub valid_until: Option<NaiveDate>,

    /// 明細
    pub lines: Vec<DocumentLine>,

    /// 備註
    pub notes: Option<String>,
}

impl Document {
    /// 依稅率彙總金額
    pub fn totals(&self, tax_rate: Decimal) -> DocumentTotals {
        DocumentTotals::compute(&self.lines, tax_rate)
    }

    /// 報價單在指定日期是否已過期（發票永不過期）
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.valid_until.is_some_and(|until| today > until)
    }
}

/// 文件編號產生器
///
/// 格式：`<前綴>-<年份>-<五位流水號>`，發票與報價單各自編號。
#[derive(Debug, Clone)]
pub struct DocumentNumbering {
    invoice_prefix: String,
    quote_prefix: String,
    next_invoice: u32,
    next_quote: u32,
}

impl DocumentNumbering {
    /// 由文件設定建立（流水號從 1 開始）
    pub fn new(settings: &DocumentSettings) -> Self {
        Self {
            invoice_prefix: settings.invoice_prefix.clone(),
            quote_prefix: settings.quote_prefix.clone(),
            next_invoice: 1,
            next_quote: 1,
        }
    }

    /// 建構器模式：從既有流水號接續
    pub fn starting_at(mut self, next_invoice: u32, next_quote: u32) -> Self {
        self.next_invoice = next_invoice.max(1);
        self.next_quote = next_quote.max(1);
        self
    }

    /// 取得下一個編號
    pub fn next(&mut self, kind: DocumentKind, issued_on: NaiveDate) -> String {
        let (prefix, counter) = match kind {
            DocumentKind::Invoice => (&self.invoice_prefix, &mut self.next_invoice),
            DocumentKind::Quote => (&self.quote_prefix, &mut self.next_quote),
        };
        let number = format!("{}-{}-{:05}", prefix, issued_on.year(), counter);
        *counter += 1;
        number
    }
}

/// 文件建構器
pub struct DocumentBuilder {
    kind: DocumentKind,
    client: Client,
    issued_on: NaiveDate,
    quote_validity_days: u32,
    lines: Vec<DocumentLine>,
    notes: Option<String>,
}

impl DocumentBuilder {
    /// 創建新的建構器
    pub fn new(kind: DocumentKind, client: Client, issued_on: NaiveDate, config: &StoreConfig) -> Self {
        Self {
            kind,
            client,
            issued_on,
            quote_validity_days: config.documents.quote_validity_days,
            lines: Vec::new(),
            notes: None,
        }
    }

    /// 添加明細行
    pub fn line(mut self, line: DocumentLine) -> Self {
        self.lines.push(line);
        self
    }

    /// 添加商品
    pub fn product(self, product: &Product, quantity: u32) -> Self {
        self.line(DocumentLine::from_product(product, quantity))
    }

    /// 設置備註
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// 產生文件
    pub fn build(self, numbering: &mut DocumentNumbering) -> rigbuild_core::Result<Document> {
        if self.lines.is_empty() {
            return Err(StoreError::Render(format!(
                "{} 沒有任何明細行",
                self.kind.title()
            )));
        }
        if let Some(line) = self.lines.iter().find(|l| l.quantity == 0) {
            return Err(StoreError::InvalidQuantity(format!(
                "明細 {} 的數量必須至少為 1",
                line.description
            )));
        }

        let valid_until = match self.kind {
            DocumentKind::Invoice => None,
            DocumentKind::Quote => Some(
                self.issued_on
                    .checked_add_days(Days::new(u64::from(self.quote_validity_days)))
                    .ok_or_else(|| StoreError::Render("報價單有效期限超出日期範圍".to_string()))?,
            ),
        };

        let number = numbering.next(self.kind, self.issued_on);
        tracing::info!("產生{} {}：{} 行明細", self.kind.title(), number, self.lines.len());

        Ok(Document {
            id: Uuid::new_v4(),
            kind: self.kind,
            number,
            client: self.client,
            issued_on: self.issued_on,
            valid_until,
            lines: self.lines,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigbuild_core::{GamingChair, ProductInfo};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn chair() -> Product {
        Product::GamingChair(GamingChair {
            info: ProductInfo::new("CHAIR-01", "Titan Evo", Decimal::from(499), Decimal::from(320), 6)
                .with_brand("Secretlab"),
            material: "Leatherette".to_string(),
            color: "Black".to_string(),
            max_load_kg: 130,
        })
    }

    #[test]
    fn test_line_from_product() {
        let line = DocumentLine::from_product(&chair(), 2);

        assert_eq!(line.description, "Secretlab Titan Evo");
        assert_eq!(line.spec_lines.len(), 3);
        assert_eq!(line.line_total(), Decimal::from(998));
    }

    #[test]
    fn test_numbering_per_kind() {
        let mut numbering = DocumentNumbering::new(&DocumentSettings::default());
        let today = date(2025, 3, 14);

        assert_eq!(numbering.next(DocumentKind::Invoice, today), "INV-2025-00001");
        assert_eq!(numbering.next(DocumentKind::Invoice, today), "INV-2025-00002");
        assert_eq!(numbering.next(DocumentKind::Quote, today), "QUO-2025-00001");

        let mut resumed = DocumentNumbering::new(&DocumentSettings::default()).starting_at(42, 0);
        assert_eq!(resumed.next(DocumentKind::Invoice, today), "INV-2025-00042");
        assert_eq!(resumed.next(DocumentKind::Quote, today), "QUO-2025-00001");
    }

    #[test]
    fn test_build_quote_sets_validity() {
        let config = StoreConfig::default().with_quote_validity_days(30);
        let mut numbering = DocumentNumbering::new(&config.documents);

        let quote = DocumentBuilder::new(DocumentKind::Quote, Client::new("Léo"), date(2025, 1, 10), &config)
            .product(&chair(), 1)
            .notes("Delivery included")
            .build(&mut numbering)
            .unwrap();

        assert_eq!(quote.number, "QUO-2025-00001");
        assert_eq!(quote.valid_until, Some(date(2025, 2, 9)));
        assert!(!quote.is_expired(date(2025, 2, 9)));
        assert!(quote.is_expired(date(2025, 2, 10)));
    }

    #[test]
    fn test_build_invoice_has_no_validity() {
        let config = StoreConfig::default();
        let mut numbering = DocumentNumbering::new(&config.documents);

        let invoice = DocumentBuilder::new(DocumentKind::Invoice, Client::new("Léo"), date(2025, 1, 10), &config)
            .line(DocumentLine::new("Assembly service", 1, Decimal::from(49)))
            .build(&mut numbering)
            .unwrap();

        assert_eq!(invoice.valid_until, None);
        assert!(!invoice.is_expired(date(2030, 1, 1)));
    }

    #[test]
    fn test_build_rejects_empty_or_zero_quantity() {
        let config = StoreConfig::default();
        let mut numbering = DocumentNumbering::new(&config.documents);

        let empty = DocumentBuilder::new(DocumentKind::Invoice, Client::new("A"), date(2025, 1, 1), &config)
            .build(&mut numbering);
        assert!(matches!(empty, Err(StoreError::Render(_))));

        let zero = DocumentBuilder::new(DocumentKind::Invoice, Client::new("A"), date(2025, 1, 1), &config)
            .line(DocumentLine::new("Mouse", 0, Decimal::from(30)))
            .build(&mut numbering);
        assert!(matches!(zero, Err(StoreError::InvalidQuantity(_))));

        // 失敗時不消耗編號
        let mut check = numbering.clone();
        assert_eq!(check.next(DocumentKind::Invoice, date(2025, 1, 1)), "INV-2025-00001");
    }
}
