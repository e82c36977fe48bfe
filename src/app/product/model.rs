//! 产品数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::validation::FieldErrors;

pub const NAME_MANDATORY: &str = "Name is Mandatory";
pub const PRICE_POSITIVE: &str = "Price must be positive";
pub const PRICE_MISSING: &str = "Price must be provided";
pub const PRICE_NOT_A_NUMBER: &str = "Price must be a number";

/// 产品实体，`id` 在首次保存时由数据库分配
#[derive(Debug, Clone, Default, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }

    /// 用校验过的字段覆盖名称和价格，`id` 不变
    pub fn apply(&mut self, update: NewProduct) {
        self.name = update.name;
        self.price = update.price;
    }
}

impl From<NewProduct> for Product {
    fn from(new: NewProduct) -> Self {
        Product::new(new.name, new.price)
    }
}

/// 校验通过的产品字段
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// POST / PUT 的 JSON 请求体
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProductPayload {
    #[serde(default)]
    #[validate(required(message = "Name is Mandatory"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Price must be provided"),
        range(exclusive_min = 0.0, message = "Price must be positive")
    )]
    pub price: Option<f64>,
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
        }
    }

    /// 校验全部字段，返回所有违规字段
    pub fn validated(&self) -> Result<NewProduct, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(err) => FieldErrors::from(err),
        };

        // 空白名称
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            errors.add("name", NAME_MANDATORY);
        }

        errors.into_result()?;

        // required 校验通过后两个字段都存在
        Ok(NewProduct {
            name: self.name.clone().unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        })
    }
}

/// HTML 表单提交的字段，价格保持原始文本以便回显
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
}

impl ProductForm {
    /// 以已有产品预填表单
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
        }
    }

    pub fn validated(&self) -> Result<NewProduct, FieldErrors> {
        let mut errors = FieldErrors::new();
        let text = self.price.trim();

        let price = if text.is_empty() {
            errors.add("price", PRICE_MISSING);
            None
        } else {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => {
                    errors.add("price", PRICE_NOT_A_NUMBER);
                    None
                }
            }
        };

        let payload = ProductPayload {
            name: Some(self.name.clone()),
            price,
        };

        // 价格解析失败时保留更具体的信息
        payload.validated().map_err(|field_errors| {
            errors.merge(field_errors);
            errors
        })
    }
}
