//! HTML 模板，编译期嵌入

use std::sync::Arc;

use axum::response::Html;
use tera::{Context, Tera};

pub const PRODUCTS: &str = "products.html";
pub const PRODUCT_FORM: &str = "product_form.html";
pub const ERROR: &str = "error.html";

#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", include_str!("../../templates/layout.html")),
            (PRODUCTS, include_str!("../../templates/products.html")),
            (PRODUCT_FORM, include_str!("../../templates/product_form.html")),
            (ERROR, include_str!("../../templates/error.html")),
        ])?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<Html<String>, tera::Error> {
        self.tera.render(name, context).map(Html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::product::model::Product;

    #[test]
    fn test_products_page_escapes_names() {
        let templates = Templates::new().unwrap();
        let mut context = Context::new();
        context.insert(
            "products",
            &vec![Product {
                id: Some(1),
                name: "<b>Lamp</b>".to_string(),
                price: 12.5,
            }],
        );
        context.insert("message", &Option::<String>::None);

        let html = templates.render(PRODUCTS, &context).unwrap().0;
        assert!(html.contains("&lt;b&gt;Lamp&lt;&#x2F;b&gt;"));
        assert!(html.contains("/products/edit/1"));
        assert!(!html.contains("class=\"flash\""));
    }

    #[test]
    fn test_error_page() {
        let templates = Templates::new().unwrap();
        let mut context = Context::new();
        context.insert("status", &404);
        context.insert("message", "Product not found with ID: 5");

        let html = templates.render(ERROR, &context).unwrap().0;
        assert!(html.contains("Product not found with ID: 5"));
    }
}
