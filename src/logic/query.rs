use crate::model::{Page, PageMeta, PageRequest, Pagination, Product, ProductQuery, SortKey};

pub const DEFAULT_PRODUCT_PAGE_SIZE: usize = 12;
pub const DEFAULT_ARTICLE_PAGE_SIZE: usize = 9;

/// Applies every supplied constraint conjunctively; omitted constraints
/// impose no restriction. A price bucket and explicit min/max bounds both
/// restrict the set when supplied together.
pub fn filter_products(products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| matches_query(p, query))
        .collect()
}

fn matches_query(product: &Product, query: &ProductQuery) -> bool {
    if let Some(status) = query.status {
        if product.status != status {
            return false;
        }
    }
    if let Some(category) = &query.category {
        match &product.category {
            Some(c) if c.slug == *category => {}
            _ => return false,
        }
    }
    if let Some(brand) = &query.brand {
        // The embedded brand snapshot matches on either identifier.
        match &product.brand {
            Some(b) if b.document_id == *brand || b.slug == *brand => {}
            _ => return false,
        }
    }
    if let Some(min) = query.price_min {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = query.price_max {
        if product.price > max {
            return false;
        }
    }
    if let Some(bucket) = query.price_range {
        if !bucket.contains(product.price) {
            return false;
        }
    }
    if let Some(token) = &query.search {
        let token = token.to_lowercase();
        if !token.is_empty()
            && !product.name.to_lowercase().contains(&token)
            && !product.description.to_lowercase().contains(&token)
        {
            return false;
        }
    }
    true
}

/// Stable sort; records comparing equal keep their insertion order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

/// Slices one page out of an already filtered and sorted array. An
/// out-of-range page yields an empty slice, never an error; an empty input
/// yields `pageCount = 0`.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let page_count = total.div_ceil(request.page_size);
    let start = (request.page - 1).saturating_mul(request.page_size);
    let data = if start >= total {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(start)
            .take(request.page_size)
            .collect()
    };
    Page {
        data,
        meta: PageMeta {
            pagination: Pagination {
                page: request.page,
                page_size: request.page_size,
                page_count,
                total,
            },
        },
    }
}

/// Full listing pipeline: filter, sort, then slice the requested page.
pub fn query_products(products: Vec<Product>, query: &ProductQuery) -> Page<Product> {
    let mut matched = filter_products(products, query);
    sort_products(&mut matched, query.sort_by.unwrap_or_default());
    paginate(
        matched,
        PageRequest::new(
            query.page.unwrap_or(1),
            query.page_size.unwrap_or(DEFAULT_PRODUCT_PAGE_SIZE),
        ),
    )
}
