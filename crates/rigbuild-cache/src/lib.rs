//! # Rigbuild Cache
//!
//! 庫存異動後的增量重新評估模組

pub mod dirty_tracking;
pub mod incremental;

// Re-export 主要類型
pub use dirty_tracking::DirtyTracker;
pub use incremental::IncrementalEvaluator;
