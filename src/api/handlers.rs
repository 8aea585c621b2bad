use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::logic::{catalog, orders, DEFAULT_ARTICLE_PAGE_SIZE};
use crate::model::{
    Article, Brand, Category, NewArticle, NewBrand, NewCategory, NewOrder, NewProduct, Order,
    OrderUpdate, Page, Product, ProductQuery,
};
use crate::store::{Store, StoreError};

pub type AppState<S> = Arc<S>;

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Single record envelope: the original returns one-element arrays for
/// lookups (`{"data": [record]}`).
#[derive(Debug, Serialize)]
pub struct RecordResponse<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct BrandsResponse {
    pub brands: Vec<Brand>,
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub data: Vec<Order>,
    pub meta: OrderListMeta,
}

#[derive(Debug, Serialize)]
pub struct OrderListMeta {
    pub total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmitResponse {
    pub success: bool,
    pub order_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct OrderUpdateResponse {
    pub success: bool,
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct OrderDeleteResponse {
    pub success: bool,
    pub message: String,
}

fn error_response(err: StoreError) -> ApiError {
    let status = match &err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::DuplicateSlug { .. } | StoreError::Validation(_) => StatusCode::BAD_REQUEST,
        StoreError::Read { .. } | StoreError::Write { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("storage failure: {err}");
    }
    (status, Json(ErrorResponse::new(&err.to_string())))
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// ---------------------------------------------------------------------------
// Products

pub async fn list_products<S: Store>(
    State(store): State<AppState<S>>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Page<Product>>, ApiError> {
    catalog::list_products(&*store, &query)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn get_product<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<RecordResponse<Product>>, ApiError> {
    catalog::get_product(&*store, &key)
        .await
        .map(|product| Json(RecordResponse { data: vec![product] }))
        .map_err(error_response)
}

pub async fn create_product<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(new): RequestJson<NewProduct>,
) -> Result<(StatusCode, Json<DataResponse<Product>>), ApiError> {
    catalog::create_product(&*store, new)
        .await
        .map(|product| (StatusCode::CREATED, Json(DataResponse { data: product })))
        .map_err(error_response)
}

pub async fn update_product<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
    RequestJson(patch): RequestJson<serde_json::Value>,
) -> Result<Json<DataResponse<Product>>, ApiError> {
    catalog::update_product(&*store, &key, patch)
        .await
        .map(|product| Json(DataResponse { data: product }))
        .map_err(error_response)
}

pub async fn delete_product<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    catalog::delete_product(&*store, &key)
        .await
        .map(|_| {
            Json(MessageResponse {
                message: "Product deleted successfully".to_string(),
            })
        })
        .map_err(error_response)
}

// ---------------------------------------------------------------------------
// Categories

pub async fn list_categories<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    catalog::list_categories(&*store)
        .await
        .map(|categories| Json(CategoriesResponse { categories }))
        .map_err(error_response)
}

pub async fn get_category<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<RecordResponse<Category>>, ApiError> {
    catalog::get_category(&*store, &key)
        .await
        .map(|category| Json(RecordResponse { data: vec![category] }))
        .map_err(error_response)
}

pub async fn create_category<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(new): RequestJson<NewCategory>,
) -> Result<(StatusCode, Json<DataResponse<Category>>), ApiError> {
    catalog::create_category(&*store, new)
        .await
        .map(|category| (StatusCode::CREATED, Json(DataResponse { data: category })))
        .map_err(error_response)
}

pub async fn update_category<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
    RequestJson(patch): RequestJson<serde_json::Value>,
) -> Result<Json<DataResponse<Category>>, ApiError> {
    catalog::update_category(&*store, &key, patch)
        .await
        .map(|category| Json(DataResponse { data: category }))
        .map_err(error_response)
}

pub async fn delete_category<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    catalog::delete_category(&*store, &key)
        .await
        .map(|_| {
            Json(MessageResponse {
                message: "Category deleted successfully".to_string(),
            })
        })
        .map_err(error_response)
}

// ---------------------------------------------------------------------------
// Brands

#[derive(Debug, Deserialize)]
pub struct BrandListQuery {
    /// Category slug; narrows to brands with products in that category.
    pub category: Option<String>,
}

pub async fn list_brands<S: Store>(
    State(store): State<AppState<S>>,
    Query(query): Query<BrandListQuery>,
) -> Result<Json<BrandsResponse>, ApiError> {
    catalog::list_brands(&*store, query.category.as_deref())
        .await
        .map(|brands| Json(BrandsResponse { brands }))
        .map_err(error_response)
}

pub async fn get_brand<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<RecordResponse<Brand>>, ApiError> {
    catalog::get_brand(&*store, &key)
        .await
        .map(|brand| Json(RecordResponse { data: vec![brand] }))
        .map_err(error_response)
}

pub async fn create_brand<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(new): RequestJson<NewBrand>,
) -> Result<(StatusCode, Json<DataResponse<Brand>>), ApiError> {
    catalog::create_brand(&*store, new)
        .await
        .map(|brand| (StatusCode::CREATED, Json(DataResponse { data: brand })))
        .map_err(error_response)
}

pub async fn update_brand<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
    RequestJson(patch): RequestJson<serde_json::Value>,
) -> Result<Json<DataResponse<Brand>>, ApiError> {
    catalog::update_brand(&*store, &key, patch)
        .await
        .map(|brand| Json(DataResponse { data: brand }))
        .map_err(error_response)
}

pub async fn delete_brand<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    catalog::delete_brand(&*store, &key)
        .await
        .map(|_| {
            Json(MessageResponse {
                message: "Brand deleted successfully".to_string(),
            })
        })
        .map_err(error_response)
}

// ---------------------------------------------------------------------------
// Articles

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

pub async fn list_articles<S: Store>(
    State(store): State<AppState<S>>,
    Query(query): Query<ArticleListQuery>,
) -> Result<Json<Page<Article>>, ApiError> {
    catalog::list_articles(
        &*store,
        query.page.unwrap_or(1),
        query.page_size.unwrap_or(DEFAULT_ARTICLE_PAGE_SIZE),
    )
    .await
    .map(Json)
    .map_err(error_response)
}

pub async fn get_article<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<RecordResponse<Article>>, ApiError> {
    catalog::get_article(&*store, &key)
        .await
        .map(|article| Json(RecordResponse { data: vec![article] }))
        .map_err(error_response)
}

pub async fn create_article<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(new): RequestJson<NewArticle>,
) -> Result<(StatusCode, Json<DataResponse<Article>>), ApiError> {
    catalog::create_article(&*store, new)
        .await
        .map(|article| (StatusCode::CREATED, Json(DataResponse { data: article })))
        .map_err(error_response)
}

pub async fn update_article<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
    RequestJson(patch): RequestJson<serde_json::Value>,
) -> Result<Json<DataResponse<Article>>, ApiError> {
    catalog::update_article(&*store, &key, patch)
        .await
        .map(|article| Json(DataResponse { data: article }))
        .map_err(error_response)
}

pub async fn delete_article<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    catalog::delete_article(&*store, &key)
        .await
        .map(|_| {
            Json(MessageResponse {
                message: "Article deleted successfully".to_string(),
            })
        })
        .map_err(error_response)
}

// ---------------------------------------------------------------------------
// Orders

pub async fn list_orders<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<OrderListResponse>, ApiError> {
    orders::list_orders(&*store)
        .await
        .map(|orders| {
            let total = orders.len();
            Json(OrderListResponse {
                data: orders,
                meta: OrderListMeta { total },
            })
        })
        .map_err(error_response)
}

pub async fn get_order<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<RecordResponse<Order>>, ApiError> {
    orders::get_order(&*store, &key)
        .await
        .map(|order| Json(RecordResponse { data: vec![order] }))
        .map_err(error_response)
}

pub async fn submit_order<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(new): RequestJson<NewOrder>,
) -> Result<(StatusCode, Json<OrderSubmitResponse>), ApiError> {
    orders::submit_order(&*store, new)
        .await
        .map(|order| {
            (
                StatusCode::CREATED,
                Json(OrderSubmitResponse {
                    success: true,
                    order_id: order.order_id,
                    message: "Order placed successfully".to_string(),
                }),
            )
        })
        .map_err(error_response)
}

pub async fn update_order<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
    RequestJson(update): RequestJson<OrderUpdate>,
) -> Result<Json<OrderUpdateResponse>, ApiError> {
    orders::update_order(&*store, &key, update)
        .await
        .map(|order| {
            Json(OrderUpdateResponse {
                success: true,
                order,
            })
        })
        .map_err(error_response)
}

pub async fn delete_order<S: Store>(
    State(store): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<Json<OrderDeleteResponse>, ApiError> {
    orders::delete_order(&*store, &key)
        .await
        .map(|_| {
            Json(OrderDeleteResponse {
                success: true,
                message: "Order deleted successfully".to_string(),
            })
        })
        .map_err(error_response)
}
