//! 产品 HTML 页面处理器
//!
//! 提交成功后重定向到列表页，并通过 [`Flash`] 附带一次性提示。
//! 校验失败时直接重新渲染表单。

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use tera::Context;
use thiserror::Error;
use tracing::error;

use super::{
    error::ProductError,
    flash::Flash,
    model::{Product, ProductForm},
};
use crate::app::AppState;
use crate::core::validation::FieldErrors;
use crate::infrastructure::templates::{self, Templates};

const LIST_PATH: &str = "/products";

/// 页面错误，渲染为 HTML 错误页
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Product(#[from] ProductError),

    #[error("{0}")]
    BadRequest(String),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// 携带模板的错误，用于渲染错误页
pub struct PageError {
    templates: Templates,
    error: WebError,
}

impl WebError {
    fn with(self, templates: &Templates) -> PageError {
        PageError {
            templates: templates.clone(),
            error: self,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            WebError::Product(ProductError::NotFound { .. }) => StatusCode::NOT_FOUND,
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Product(ProductError::Storage(_)) | WebError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Page error: {}", self.error);
            "Internal server error".to_string()
        } else {
            self.error.to_string()
        };

        let mut context = Context::new();
        context.insert("status", &status.as_u16());
        context.insert("message", &message);

        match self.templates.render(templates::ERROR, &context) {
            Ok(page) => (status, page).into_response(),
            Err(e) => {
                error!("Failed to render error page: {}", e);
                (status, message).into_response()
            }
        }
    }
}

type PageResult<T> = Result<T, PageError>;

/// `/products` 路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_page).post(create_submit))
        .route("/products/new", get(new_form))
        .route("/products/edit/:id", get(edit_form))
        .route("/products/update/:id", post(update_submit))
        .route("/products/delete/:id", get(delete_action))
}

fn redirect_with(flash: Flash) -> Response {
    (
        AppendHeaders([(header::SET_COOKIE, flash.set_cookie())]),
        Redirect::to(LIST_PATH),
    )
        .into_response()
}

fn render_form(
    templates: &Templates,
    product_id: Option<i64>,
    form: &ProductForm,
    errors: &FieldErrors,
) -> Result<Html<String>, WebError> {
    let action = match product_id {
        Some(id) => format!("/products/update/{}", id),
        None => LIST_PATH.to_string(),
    };

    let mut context = Context::new();
    context.insert("product_id", &product_id);
    context.insert("action", &action);
    context.insert("form", form);
    context.insert("errors", errors);
    Ok(templates.render(templates::PRODUCT_FORM, &context)?)
}

fn parse_id(raw: &str) -> Result<i64, WebError> {
    raw.trim()
        .parse()
        .map_err(|_| WebError::BadRequest(format!("Invalid product ID: {}", raw)))
}

fn form_body(form: Result<Form<ProductForm>, FormRejection>) -> Result<ProductForm, WebError> {
    form.map(|Form(form)| form)
        .map_err(|rejection| WebError::BadRequest(rejection.body_text()))
}

pub async fn list_page(State(state): State<AppState>, headers: HeaderMap) -> PageResult<Response> {
    let templates = &state.templates;
    let products: Vec<Product> = state
        .products
        .list()
        .await
        .map_err(|e| WebError::from(e).with(templates))?;

    let flash = Flash::from_headers(&headers);
    let mut context = Context::new();
    context.insert("products", &products);
    context.insert("message", &flash.map(Flash::message));

    let page = templates
        .render(templates::PRODUCTS, &context)
        .map_err(|e| WebError::from(e).with(templates))?;

    Ok(match flash {
        Some(_) => (AppendHeaders([(header::SET_COOKIE, Flash::clear_cookie())]), page).into_response(),
        None => page.into_response(),
    })
}

pub async fn new_form(State(state): State<AppState>) -> PageResult<Html<String>> {
    render_form(
        &state.templates,
        None,
        &ProductForm::default(),
        &FieldErrors::new(),
    )
    .map_err(|e| e.with(&state.templates))
}

pub async fn create_submit(
    State(state): State<AppState>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> PageResult<Response> {
    let templates = &state.templates;
    let form = form_body(form).map_err(|e| e.with(templates))?;

    let new = match form.validated() {
        Ok(new) => new,
        Err(errors) => {
            return render_form(templates, None, &form, &errors)
                .map(IntoResponse::into_response)
                .map_err(|e| e.with(templates));
        }
    };

    state
        .products
        .create(new)
        .await
        .map_err(|e| WebError::from(e).with(templates))?;
    Ok(redirect_with(Flash::Created))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> PageResult<Html<String>> {
    let templates = &state.templates;
    let id = parse_id(&raw_id).map_err(|e| e.with(templates))?;
    let product = state
        .products
        .require(id)
        .await
        .map_err(|e| WebError::from(e).with(templates))?;

    render_form(
        templates,
        product.id,
        &ProductForm::from_product(&product),
        &FieldErrors::new(),
    )
    .map_err(|e| e.with(templates))
}

/// 先校验表单，再检查记录是否存在
pub async fn update_submit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> PageResult<Response> {
    let templates = &state.templates;
    let id = parse_id(&raw_id).map_err(|e| e.with(templates))?;
    let form = form_body(form).map_err(|e| e.with(templates))?;

    let update = match form.validated() {
        Ok(update) => update,
        Err(errors) => {
            return render_form(templates, Some(id), &form, &errors)
                .map(IntoResponse::into_response)
                .map_err(|e| e.with(templates));
        }
    };

    state
        .products
        .replace(id, update)
        .await
        .map_err(|e| WebError::from(e).with(templates))?;
    Ok(redirect_with(Flash::Updated))
}

pub async fn delete_action(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> PageResult<Response> {
    let templates = &state.templates;
    let id = parse_id(&raw_id).map_err(|e| e.with(templates))?;
    state
        .products
        .remove(id)
        .await
        .map_err(|e| WebError::from(e).with(templates))?;
    Ok(redirect_with(Flash::Deleted))
}
