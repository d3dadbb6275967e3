//! 客戶模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 客戶
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// 客戶ID
    pub id: Uuid,

    /// 名稱（個人或公司）
    pub name: String,

    pub email: Option<String>,

    pub phone: Option<String>,

    /// 帳單地址
    pub address: Option<String>,
}

impl Client {
    /// 創建新的客戶
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: None,
            phone: None,
            address: None,
        }
    }

    /// 建構器模式：設置電子郵件
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// 建構器模式：設置電話
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// 建構器模式：設置地址
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}
