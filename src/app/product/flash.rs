//! 一次性提示信息
//!
//! 重定向时写入 `flash` cookie，列表页读取后立即在同一响应中清除。

use axum::http::{header, HeaderMap, HeaderValue};

const COOKIE_NAME: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Created,
    Updated,
    Deleted,
}

impl Flash {
    pub fn message(self) -> &'static str {
        match self {
            Flash::Created => "Product created successfully!",
            Flash::Updated => "Product updated successfully!",
            Flash::Deleted => "Product deleted successfully!",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "created" => Some(Flash::Created),
            "updated" => Some(Flash::Updated),
            "deleted" => Some(Flash::Deleted),
            _ => None,
        }
    }

    /// 从请求的 `Cookie` 头读取
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .and_then(|(_, value)| Self::from_code(value.trim()))
    }

    pub fn set_cookie(self) -> HeaderValue {
        HeaderValue::from_static(match self {
            Flash::Created => "flash=created; Path=/products; HttpOnly; SameSite=Lax",
            Flash::Updated => "flash=updated; Path=/products; HttpOnly; SameSite=Lax",
            Flash::Deleted => "flash=deleted; Path=/products; HttpOnly; SameSite=Lax",
        })
    }

    pub fn clear_cookie() -> HeaderValue {
        HeaderValue::from_static("flash=; Path=/products; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie_headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_set_cookie_matches_code() {
        for (flash, code) in [
            (Flash::Created, "created"),
            (Flash::Updated, "updated"),
            (Flash::Deleted, "deleted"),
        ] {
            let value = flash.set_cookie();
            let text = value.to_str().unwrap();
            assert!(text.starts_with(&format!("{}={};", COOKIE_NAME, code)));
            assert_eq!(Flash::from_code(code), Some(flash));
            assert!(text.contains("Path=/products"));
            assert!(text.contains("HttpOnly"));
        }
    }

    #[test]
    fn test_reads_flash_among_other_cookies() {
        let headers = cookie_headers("theme=dark; flash=updated; lang=en");
        assert_eq!(Flash::from_headers(&headers), Some(Flash::Updated));
    }

    #[test]
    fn test_ignores_empty_or_unknown_values() {
        assert_eq!(Flash::from_headers(&cookie_headers("flash=")), None);
        assert_eq!(Flash::from_headers(&cookie_headers("flash=hacked")), None);
        assert_eq!(Flash::from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Flash::Created.message(), "Product created successfully!");
        assert_eq!(Flash::Deleted.message(), "Product deleted successfully!");
    }
}
