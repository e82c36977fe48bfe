//! 字段校验错误

use std::collections::BTreeMap;

use serde::Serialize;

/// 字段名到错误信息的映射，每个字段只保留第一条信息
///
/// 序列化为 `{"name": "Name is Mandatory", "price": "Price must be positive"}`，
/// 键按字段名排序。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条违规；字段已有信息时保留原有的
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// 合并另一组错误，已有字段不被覆盖
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.add(field, message);
        }
    }

    /// 无错误时返回 `Ok(())`
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut errors = FieldErrors::new();
        for (field, field_errors) in err.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                errors.add(field.to_string(), message);
            }
        }
        errors
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.add("price", "Price must be provided");
        errors.add("price", "Price must be positive");
        assert_eq!(errors.get("price"), Some("Price must be provided"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut errors = FieldErrors::new();
        errors.add("price", "Price must be positive");
        errors.add("name", "Name is Mandatory");

        let body = serde_json::to_string(&errors).unwrap();
        assert_eq!(
            body,
            r#"{"name":"Name is Mandatory","price":"Price must be positive"}"#
        );
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.add("name", "Name is Mandatory");
        let err = errors.into_result().unwrap_err();
        assert!(err.contains("name"));
    }
}
