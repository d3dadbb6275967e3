//! PC Gamer 組裝示例

use chrono::{NaiveDate, Utc};
use rigbuild::calc::{
    AssemblyPlanner, ConfigurationEvaluator, DraftValidator, InMemoryStockLookup, InventoryStatistics,
    StockLookup,
};
use rigbuild::docs::{render_html, Client, DocumentBuilder, DocumentKind, DocumentNumbering};
use rigbuild::models::{
    BillOfMaterialsLine, ComponentKind, ComponentRole, ConfigurationDraft, PcComponent, PcGamer, Product,
    ProductInfo, StoreConfig,
};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn component(id: &str, name: &str, kind: ComponentKind, stock: u32, purchase: i64, sale: i64) -> PcComponent {
    PcComponent {
        info: ProductInfo::new(id, name, Decimal::from(sale), Decimal::from(purchase), stock),
        kind,
        specs: Vec::new(),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== PC Gamer 組裝示例 ===\n");

    let config = StoreConfig::new("Rigbuild Lyon").with_low_stock_threshold(3);

    // 元件目錄
    let catalogue = vec![
        component("CPU-R5-7600", "Ryzen 5 7600", ComponentKind::Cpu, 12, 190, 229),
        component("MB-B650M", "B650M Gaming", ComponentKind::Motherboard, 8, 120, 149),
        component("RAM-16G-DDR5", "16 GB DDR5-6000", ComponentKind::Ram, 14, 48, 65),
        component("GPU-RX-7800", "Radeon RX 7800 XT", ComponentKind::Gpu, 4, 450, 529),
        component("SSD-1TB", "NVMe 1 TB", ComponentKind::Storage, 25, 62, 85),
        component("PSU-750W", "750 W Gold", ComponentKind::PowerSupply, 9, 85, 109),
        component("CASE-AIR", "Airflow Mid Tower", ComponentKind::Case, 0, 70, 95),
    ];

    let mut lookup = InMemoryStockLookup::from_records(catalogue.iter().map(PcComponent::to_stock_record));

    let draft = ConfigurationDraft::new("Nova 7800", Decimal::from(1399)).with_lines(vec![
        BillOfMaterialsLine::unique("CPU-R5-7600"),
        BillOfMaterialsLine::unique("MB-B650M"),
        BillOfMaterialsLine::try_new("RAM-16G-DDR5", 2, ComponentRole::RequiredMulti)?,
        BillOfMaterialsLine::unique("GPU-RX-7800"),
        BillOfMaterialsLine::try_new("SSD-1TB", 1, ComponentRole::RequiredMulti)?,
        BillOfMaterialsLine::unique("PSU-750W"),
        BillOfMaterialsLine::unique("CASE-AIR"),
    ]);

    // 驗證並評估
    let snapshot = lookup.fetch_stock(&draft.component_ids())?;
    DraftValidator::validate(&draft, &snapshot)?;

    let evaluator = ConfigurationEvaluator::new(lookup.clone(), config.stock);
    let evaluation = evaluator.evaluate(&draft)?;
    print_evaluation(&draft, &evaluation);

    // 機殼補貨後重新評估
    println!("\n補貨：CASE-AIR +6\n");
    lookup.apply_movement(&rigbuild::models::StockMovement::inbound("CASE-AIR", 6, Utc::now()))?;
    let evaluator = ConfigurationEvaluator::new(lookup, config.stock);
    let evaluation = evaluator.evaluate(&draft)?;
    print_evaluation(&draft, &evaluation);

    // 組裝計畫
    let snapshot = evaluator.lookup().fetch_stock(&draft.component_ids())?;
    let movements = AssemblyPlanner::plan(&draft.lines, &snapshot, 2, Utc::now())?;
    println!("\n組裝 2 台需出庫:");
    for movement in &movements {
        println!("  - {} x {}", movement.quantity, movement.component_id);
    }

    let stats = InventoryStatistics::collect(evaluator.lookup().records(), &config.stock);
    println!(
        "\n庫存: {} 項，總值 {}，需補貨 {:?}",
        stats.record_count, stats.stock_value, stats.restock_ids
    );

    // 報價單
    let product = Product::PcGamer(PcGamer {
        info: ProductInfo::new(
            "PCG-NOVA",
            draft.name.clone(),
            draft.sale_price,
            evaluation.feasibility.unit_cost,
            evaluation.feasibility.buildable_units,
        ),
        lines: draft.lines.clone(),
    });

    let mut numbering = DocumentNumbering::new(&config.documents);
    let issued_on = NaiveDate::from_ymd_opt(2025, 11, 3).ok_or_else(|| anyhow::anyhow!("無效日期"))?;
    let quote = DocumentBuilder::new(DocumentKind::Quote, Client::new("Walk-in customer"), issued_on, &config)
        .product(&product, 1)
        .notes("Assembly and testing included")
        .build(&mut numbering)?;

    let html = render_html(&quote, &config)?;
    println!("\n報價單 {} 已產生（{} bytes HTML）", quote.number, html.len());

    Ok(())
}

fn print_evaluation(draft: &ConfigurationDraft, evaluation: &rigbuild::calc::DraftEvaluation) {
    println!("配置: {} (售價 {})", draft.name, draft.sale_price);
    println!("  可組裝數量: {}", evaluation.feasibility.buildable_units);
    println!("  單位成本: {}", evaluation.feasibility.unit_cost);
    match &evaluation.margin {
        Some(margin) => println!("  毛利: {}", margin.amount),
        None => println!("  毛利: 無法計算（元件缺少庫存記錄: {:?}）", evaluation.unresolved),
    }
    println!("  狀態: {}", evaluation.status);
    if let Some(limiting) = &evaluation.limiting_component {
        println!("  瓶頸元件: {}", limiting);
    }
}
