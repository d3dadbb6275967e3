//! # Rigbuild Documents
//!
//! 發票與報價單：文件模型、金額彙總與 HTML 輸出

pub mod client;
pub mod document;
pub mod render;
pub mod totals;

// Re-export 主要類型
pub use client::Client;
pub use document::{Document, DocumentBuilder, DocumentKind, DocumentLine, DocumentNumbering};
pub use render::render_html;
pub use totals::DocumentTotals;
