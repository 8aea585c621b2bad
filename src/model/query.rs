use crate::model::ProductStatus;
use serde::{Deserialize, Serialize};

/// Sort orders accepted by the product listing. `Newest` orders by creation
/// timestamp descending and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Newest,
    PriceAsc,
    PriceDesc,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Newest
    }
}

/// Named price buckets with fixed bounds in the smallest currency unit.
/// A bucket combines with explicit `priceMin`/`priceMax` bounds: both
/// restrict the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBucket {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "under-50")]
    Under50,
    #[serde(rename = "50-100")]
    From50To100,
    #[serde(rename = "100-200")]
    From100To200,
    #[serde(rename = "above-200")]
    Above200,
}

impl PriceBucket {
    pub fn contains(self, price: i64) -> bool {
        match self {
            PriceBucket::All => true,
            PriceBucket::Under50 => price < 5_000_000,
            PriceBucket::From50To100 => (5_000_000..=10_000_000).contains(&price),
            PriceBucket::From100To200 => (10_000_000..=20_000_000).contains(&price),
            PriceBucket::Above200 => price > 20_000_000,
        }
    }
}

/// Filter + sort + page parameters for the product listing. Every filter is
/// optional; supplied filters are conjunctive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
    /// Category slug of the embedded category snapshot.
    #[serde(default)]
    pub category: Option<String>,
    /// Brand identifier or slug of the embedded brand snapshot.
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price_min: Option<i64>,
    #[serde(default)]
    pub price_max: Option<i64>,
    #[serde(default)]
    pub price_range: Option<PriceBucket>,
    #[serde(default)]
    pub sort_by: Option<SortKey>,
    /// Case-insensitive token matched against name and description.
    #[serde(default)]
    pub search: Option<String>,
    /// When absent all products are listed; the storefront passes `active`.
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

/// A validated page request: both fields are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    /// `ceil(total / pageSize)`; an empty result set yields 0.
    pub page_count: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub pagination: Pagination,
}

/// One page of records plus pagination metadata, serialized in the
/// `{data, meta: {pagination}}` envelope the storefront expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}
