//! 配置草稿評估器

use rayon::prelude::*;
use rigbuild_core::{ConfigurationDraft, FeasibilityResult, StockStatus, StockThresholds};
use serde::Serialize;
use uuid::Uuid;

use crate::feasibility::FeasibilityCalculator;
use crate::lookup::StockLookup;
use crate::margin::{Margin, MarginCalculator};

/// 草稿評估結果（即時計算，不儲存）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftEvaluation {
    /// 草稿ID
    pub draft_id: Uuid,
    /// 可行性結果
    pub feasibility: FeasibilityResult,
    /// 毛利（有元件找不到庫存記錄時無法計算成本，為 None）
    pub margin: Option<Margin>,
    /// 找不到庫存記錄的元件
    pub unresolved: Vec<String>,
    /// 限制元件
    pub limiting_component: Option<String>,
    /// 可組裝台數的庫存狀態
    pub status: StockStatus,
}

/// 配置草稿評估器
pub struct ConfigurationEvaluator<L> {
    /// 庫存查詢（由呼叫端注入）
    lookup: L,

    /// 庫存狀態門檻
    thresholds: StockThresholds,
}

impl<L: StockLookup> ConfigurationEvaluator<L> {
    /// 創建新的評估器
    pub fn new(lookup: L, thresholds: StockThresholds) -> Self {
        Self { lookup, thresholds }
    }

    /// 評估單一草稿
    pub fn evaluate(&self, draft: &ConfigurationDraft) -> rigbuild_core::Result<DraftEvaluation> {
        tracing::debug!(
            "評估配置 {} ({})：物料清單 {} 行",
            draft.name,
            draft.id,
            draft.lines.len()
        );

        let stock = self.lookup.fetch_stock(&draft.component_ids())?;

        let feasibility = FeasibilityCalculator::compute_feasibility(&draft.lines, &stock);
        let report = FeasibilityCalculator::analyze(&draft.lines, &stock);
        let margin = report
            .unresolved
            .is_empty()
            .then(|| MarginCalculator::compute(draft.sale_price, feasibility.unit_cost));

        if !report.unresolved.is_empty() {
            tracing::warn!(
                "配置 {} 有 {} 個元件找不到庫存記錄: {:?}",
                draft.id,
                report.unresolved.len(),
                report.unresolved
            );
        }

        tracing::debug!(
            "配置 {} 可組裝 {} 台，單台成本 {}",
            draft.id,
            feasibility.buildable_units,
            feasibility.unit_cost
        );

        Ok(DraftEvaluation {
            draft_id: draft.id,
            feasibility,
            margin,
            unresolved: report.unresolved,
            limiting_component: report.limiting_component,
            status: StockStatus::classify(feasibility.buildable_units, &self.thresholds),
        })
    }

    /// 批次評估（平行計算，保持輸入順序）
    pub fn evaluate_all(
        &self,
        drafts: &[ConfigurationDraft],
    ) -> rigbuild_core::Result<Vec<DraftEvaluation>>
    where
        L: Sync,
    {
        tracing::info!("開始批次評估配置：{} 筆", drafts.len());
        let start_time = std::time::Instant::now();

        let results = drafts
            .par_iter()
            .map(|draft| self.evaluate(draft))
            .collect::<rigbuild_core::Result<Vec<_>>>()?;

        tracing::info!("批次評估完成，耗時 {:?}", start_time.elapsed());
        Ok(results)
    }

    /// 獲取庫存查詢引用
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// 獲取可變的庫存查詢引用
    pub fn lookup_mut(&mut self) -> &mut L {
        &mut self.lookup
    }

    /// 獲取庫存門檻
    pub fn thresholds(&self) -> &StockThresholds {
        &self.thresholds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::InMemoryStockLookup;
    use rigbuild_core::{
        BillOfMaterialsLine, ComponentRole, ComponentStockRecord, StoreError,
    };
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn lookup() -> InMemoryStockLookup {
        InMemoryStockLookup::from_records(vec![
            ComponentStockRecord::new("CPU-R5", 8, Decimal::from(150)),
            ComponentStockRecord::new("MB-B650", 3, Decimal::from(140)),
            ComponentStockRecord::new("RAM-16G", 20, Decimal::from(45)),
        ])
    }

    fn draft() -> ConfigurationDraft {
        ConfigurationDraft::new("Starter", Decimal::from(900))
            .with_line(BillOfMaterialsLine::unique("CPU-R5"))
            .with_line(BillOfMaterialsLine::unique("MB-B650"))
            .with_line(BillOfMaterialsLine::try_new("RAM-16G", 2, ComponentRole::RequiredMulti).unwrap())
    }

    #[test]
    fn test_evaluate_draft() {
        let evaluator = ConfigurationEvaluator::new(lookup(), StockThresholds::default());
        let draft = draft();

        let evaluation = evaluator.evaluate(&draft).unwrap();

        assert_eq!(evaluation.draft_id, draft.id);
        // 主機板只有 3 片
        assert_eq!(evaluation.feasibility.buildable_units, 3);
        assert_eq!(evaluation.limiting_component.as_deref(), Some("MB-B650"));
        // 150 + 140 + 45 * 2
        assert_eq!(evaluation.feasibility.unit_cost, Decimal::from(380));
        assert_eq!(evaluation.margin.unwrap().amount, Decimal::from(520));
        assert_eq!(evaluation.status, StockStatus::LowStock);
        assert!(evaluation.unresolved.is_empty());
    }

    #[test]
    fn test_evaluate_unresolved_component() {
        let evaluator = ConfigurationEvaluator::new(lookup(), StockThresholds::default());
        let draft = draft().with_line(BillOfMaterialsLine::unique("GPU-7800XT"));

        let evaluation = evaluator.evaluate(&draft).unwrap();

        assert_eq!(evaluation.feasibility, FeasibilityResult::zero());
        assert_eq!(evaluation.unresolved, vec!["GPU-7800XT".to_string()]);
        assert_eq!(evaluation.status, StockStatus::OutOfStock);
        // 成本未知，不回報毛利
        assert_eq!(evaluation.margin, None);
    }

    #[test]
    fn test_evaluate_all_preserves_order() {
        let evaluator = ConfigurationEvaluator::new(lookup(), StockThresholds::default());
        let drafts = vec![
            draft(),
            ConfigurationDraft::new("RAM only", Decimal::from(100)).with_line(
                BillOfMaterialsLine::try_new("RAM-16G", 4, ComponentRole::RequiredMulti).unwrap(),
            ),
            ConfigurationDraft::new("Empty", Decimal::from(10)),
        ];

        let results = evaluator.evaluate_all(&drafts).unwrap();

        assert_eq!(results.len(), 3);
        for (draft, result) in drafts.iter().zip(&results) {
            assert_eq!(draft.id, result.draft_id);
        }
        assert_eq!(results[1].feasibility.buildable_units, 5);
        assert_eq!(results[2].feasibility.buildable_units, 0);
    }

    struct FailingLookup;

    impl StockLookup for FailingLookup {
        fn fetch_stock(
            &self,
            _component_ids: &[String],
        ) -> rigbuild_core::Result<HashMap<String, ComponentStockRecord>> {
            Err(StoreError::Lookup("backend unavailable".to_string()))
        }
    }

    #[test]
    fn test_lookup_failure_propagates() {
        let evaluator = ConfigurationEvaluator::new(FailingLookup, StockThresholds::default());
        assert!(matches!(evaluator.evaluate(&draft()), Err(StoreError::Lookup(_))));
        assert!(evaluator.evaluate_all(&[draft()]).is_err());
    }
}
