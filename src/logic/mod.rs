pub mod catalog;
pub mod ids;
pub mod orders;
pub mod query;
pub mod records;
pub mod slug;

pub use ids::{generate_order_id, next_document_id};
pub use query::{
    filter_products, paginate, query_products, sort_products, DEFAULT_ARTICLE_PAGE_SIZE,
    DEFAULT_PRODUCT_PAGE_SIZE,
};
pub use records::{find_record, merge_patch, position_of};
pub use slug::{resolve_slug, slug_taken, slugify};
