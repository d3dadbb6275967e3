//! HTML 輸出（列印/PDF/下載用）

use minijinja::{context, Environment};
use rigbuild_core::{StoreConfig, StoreError};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::client::Client;
use crate::document::Document;
use crate::totals::round_money;

const HTML_TEMPLATE: &str = include_str!("../templates/document.html.jinja");
const CSS_STYLES: &str = include_str!("../templates/style.css");

/// 模板名稱以 .html 結尾，啟用自動跳脫
const TEMPLATE_NAME: &str = "document.html";

#[derive(Serialize)]
struct LineView {
    description: String,
    spec_lines: Vec<String>,
    quantity: u32,
    unit_price: String,
    total: String,
}

/// 產生發票/報價單的完整 HTML 頁面
pub fn render_html(document: &Document, config: &StoreConfig) -> rigbuild_core::Result<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, HTML_TEMPLATE)
        .map_err(|e| StoreError::Render(format!("無法載入模板: {}", e)))?;
    let template = env
        .get_template(TEMPLATE_NAME)
        .map_err(|e| StoreError::Render(e.to_string()))?;

    let currency = config.documents.currency.as_str();
    let totals = document.totals(config.documents.tax_rate);

    let lines: Vec<LineView> = document
        .lines
        .iter()
        .map(|line| LineView {
            description: line.description.clone(),
            spec_lines: line.spec_lines.clone(),
            quantity: line.quantity,
            unit_price: format_money(line.unit_price, currency),
            total: format_money(line.line_total(), currency),
        })
        .collect();

    let client: &Client = &document.client;
    let html = template
        .render(context! {
            css_styles => CSS_STYLES,
            store_name => &config.store_name,
            title => document.kind.title(),
            number => &document.number,
            issued_on => document.issued_on.format("%Y-%m-%d").to_string(),
            valid_until => document.valid_until.map(|d| d.format("%Y-%m-%d").to_string()),
            client => client,
            lines => lines,
            subtotal => format_money(totals.subtotal, currency),
            tax => format_money(totals.tax, currency),
            tax_rate => (config.documents.tax_rate * Decimal::ONE_HUNDRED).normalize().to_string(),
            total => format_money(totals.total, currency),
            notes => &document.notes,
        })
        .map_err(|e| StoreError::Render(format!("模板渲染失敗: {}", e)))?;

    tracing::debug!("文件 {} 已輸出 HTML（{} bytes）", document.number, html.len());
    Ok(html)
}

/// 金額格式：四捨五入到小數兩位 + 幣別
fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{:.2} {}", round_money(amount), currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentBuilder, DocumentKind, DocumentLine, DocumentNumbering};
    use chrono::NaiveDate;
    use rigbuild_core::{Monitor, Product, ProductInfo};

    fn monitor() -> Product {
        Product::Monitor(Monitor {
            info: ProductInfo::new("MON-24", "G24 Pro", Decimal::from(189), Decimal::from(130), 9),
            size_inches: Decimal::from(24),
            resolution: "1920x1080".to_string(),
            refresh_rate_hz: 144,
            panel: "IPS".to_string(),
        })
    }

    fn build(kind: DocumentKind, client: Client) -> Document {
        let config = StoreConfig::default();
        let mut numbering = DocumentNumbering::new(&config.documents);
        DocumentBuilder::new(kind, client, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(), &config)
            .product(&monitor(), 2)
            .line(DocumentLine::new("Assembly service", 1, Decimal::new(4990, 2)))
            .build(&mut numbering)
            .unwrap()
    }

    #[test]
    fn test_render_invoice() {
        let invoice = build(DocumentKind::Invoice, Client::new("Camille R.").with_email("c@example.com"));
        let html = render_html(&invoice, &StoreConfig::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("INV-2025-00001"));
        assert!(html.contains("Camille R."));
        assert!(html.contains("Refresh rate: 144 Hz"));
        // 2 x 189 + 49.90 = 427.90，稅 20% = 85.58
        assert!(html.contains("427.90 EUR"));
        assert!(html.contains("85.58 EUR"));
        assert!(html.contains("513.48 EUR"));
        assert!(html.contains("Tax (20%)"));
        assert!(!html.contains("Valid until"));
    }

    #[test]
    fn test_render_quote_shows_validity() {
        let quote = build(DocumentKind::Quote, Client::new("Camille R."));
        let html = render_html(&quote, &StoreConfig::default()).unwrap();

        assert!(html.contains("QUO-2025-00001"));
        assert!(html.contains("Valid until: 2025-07-02"));
    }

    #[test]
    fn test_render_escapes_user_text() {
        let invoice = build(DocumentKind::Invoice, Client::new("Smith & Sons <script>"));
        let html = render_html(&invoice, &StoreConfig::default()).unwrap();

        assert!(html.contains("Smith &amp; Sons &lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(5, 1), "USD"), "0.50 USD");
        assert_eq!(format_money(Decimal::from(1200), "EUR"), "1200.00 EUR");
        assert_eq!(format_money(Decimal::new(999, 3), "EUR"), "1.00 EUR");
        assert_eq!(format_money(Decimal::new(125, 3), "EUR"), "0.13 EUR");
    }

    #[test]
    fn test_render_line_total_matches_subtotal() {
        let config = StoreConfig::default().with_tax_rate(Decimal::ZERO);
        let mut numbering = DocumentNumbering::new(&config.documents);
        let invoice = DocumentBuilder::new(
            DocumentKind::Invoice,
            Client::new("Camille R."),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            &config,
        )
        .line(DocumentLine::new("Thermal pad", 3, Decimal::new(333, 3)))
        .build(&mut numbering)
        .unwrap();

        let html = render_html(&invoice, &config).unwrap();

        // 3 x 0.333 = 0.999：明細與合計都顯示 1.00
        assert!(html.contains("0.33 EUR"));
        assert!(html.contains("1.00 EUR"));
        assert!(!html.contains("0.99 EUR"));
    }
}
