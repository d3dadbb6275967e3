//! # Rigbuild
//!
//! 電腦門市後台：組裝配置可行性、庫存、毛利與發票/報價單
//!
//! 此 crate 只是各子 crate 的統一入口。

pub use rigbuild_cache as cache;
pub use rigbuild_calc as calc;
pub use rigbuild_core as models;
pub use rigbuild_docs as docs;

pub use rigbuild_calc::compute_feasibility;
pub use rigbuild_core::{Result, StoreError};
