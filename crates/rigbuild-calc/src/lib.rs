//! # Rigbuild Calculation Engine
//!
//! 組裝可行性、毛利與庫存相關計算

pub mod assembly;
pub mod evaluator;
pub mod feasibility;
pub mod lookup;
pub mod margin;
pub mod statistics;
pub mod validation;

// Re-export 主要類型
pub use assembly::AssemblyPlanner;
pub use evaluator::{ConfigurationEvaluator, DraftEvaluation};
pub use feasibility::{FeasibilityCalculator, FeasibilityReport, LineFeasibility};
pub use lookup::{InMemoryStockLookup, StockLookup};
pub use margin::{Margin, MarginCalculator};
pub use statistics::InventoryStatistics;
pub use validation::DraftValidator;

/// 計算可組裝台數與單台成本
///
/// 等同 [`FeasibilityCalculator::compute_feasibility`]。
pub fn compute_feasibility(
    lines: &[rigbuild_core::BillOfMaterialsLine],
    stock: &std::collections::HashMap<String, rigbuild_core::ComponentStockRecord>,
) -> rigbuild_core::FeasibilityResult {
    FeasibilityCalculator::compute_feasibility(lines, stock)
}
