//! 增量評估

use rigbuild_calc::{ConfigurationEvaluator, DraftEvaluation, InMemoryStockLookup, StockLookup};
use rigbuild_core::{ConfigurationDraft, StockMovement};
use std::collections::HashMap;
use uuid::Uuid;

use crate::dirty_tracking::DirtyTracker;

/// 增量評估器
///
/// 快取每個草稿最近一次的評估結果，只重新計算尚未評估過或引用
/// 髒元件的草稿。元件被標記為髒時，所有引用它的快取結果立即移除，
/// 因此未傳入 [`refresh`](Self::refresh) 的草稿也不會保留過期結果。
/// 草稿內容被編輯後需由呼叫端 [`invalidate`](Self::invalidate)。
pub struct IncrementalEvaluator<L> {
    evaluator: ConfigurationEvaluator<L>,
    tracker: DirtyTracker,
    cache: HashMap<Uuid, CachedEvaluation>,
}

/// 快取項目：評估結果與計算時引用的元件
struct CachedEvaluation {
    evaluation: DraftEvaluation,
    components: Vec<String>,
}

impl<L: StockLookup> IncrementalEvaluator<L> {
    /// 創建新的增量評估器
    pub fn new(evaluator: ConfigurationEvaluator<L>) -> Self {
        Self {
            evaluator,
            tracker: DirtyTracker::new(),
            cache: HashMap::new(),
        }
    }

    /// 標記元件庫存已變動
    pub fn mark_dirty(&mut self, component_id: impl Into<String>) {
        let component_id = component_id.into();
        self.cache
            .retain(|_, cached| !cached.components.contains(&component_id));
        self.tracker.mark_dirty(component_id);
    }

    /// 移除草稿的快取結果
    pub fn invalidate(&mut self, draft_id: &Uuid) -> Option<DraftEvaluation> {
        self.cache.remove(draft_id).map(|cached| cached.evaluation)
    }

    /// 獲取快取的評估結果
    pub fn cached(&self, draft_id: &Uuid) -> Option<&DraftEvaluation> {
        self.cache.get(draft_id).map(|cached| &cached.evaluation)
    }

    /// 重新評估需要更新的草稿，回傳重新計算的草稿ID
    pub fn refresh(&mut self, drafts: &[ConfigurationDraft]) -> rigbuild_core::Result<Vec<Uuid>> {
        let mut recomputed = Vec::new();

        for draft in drafts {
            let stale = !self.cache.contains_key(&draft.id)
                || self
                    .tracker
                    .any_dirty(draft.lines.iter().map(|l| l.component_id.as_str()));
            if !stale {
                continue;
            }

            let evaluation = self.evaluator.evaluate(draft)?;
            self.cache.insert(
                draft.id,
                CachedEvaluation {
                    evaluation,
                    components: draft.component_ids(),
                },
            );
            recomputed.push(draft.id);
        }

        tracing::debug!(
            "增量評估：{} 筆草稿中重新計算 {} 筆，髒元件 {:?}",
            drafts.len(),
            recomputed.len(),
            self.tracker.dirty_components()
        );

        self.tracker.clear();
        Ok(recomputed)
    }

    /// 獲取評估器引用
    pub fn evaluator(&self) -> &ConfigurationEvaluator<L> {
        &self.evaluator
    }

    /// 獲取髒標記追蹤器引用
    pub fn tracker(&self) -> &DirtyTracker {
        &self.tracker
    }
}

impl IncrementalEvaluator<InMemoryStockLookup> {
    /// 套用庫存異動並標記元件為髒
    pub fn apply_movement(&mut self, movement: &StockMovement) -> rigbuild_core::Result<()> {
        self.evaluator.lookup_mut().apply_movement(movement)?;
        self.mark_dirty(movement.component_id.clone());
        Ok(())
    }
}
