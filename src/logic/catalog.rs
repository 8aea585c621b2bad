use crate::logic::{ids, query, records, slug};
use crate::model::{
    Article, Brand, Category, CatalogRecord, Id, NewArticle, NewBrand, NewCategory, NewProduct,
    Page, PageRequest, Product, ProductQuery,
};
use crate::store::{Store, StoreError, StoreResult};
use chrono::Utc;
use itertools::Itertools;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Products

pub async fn list_products<S: Store>(store: &S, q: &ProductQuery) -> StoreResult<Page<Product>> {
    let products = store.load_products().await?;
    Ok(query::query_products(products, q))
}

pub async fn get_product<S: Store>(store: &S, key: &str) -> StoreResult<Product> {
    let products = store.load_products().await?;
    records::find_record(&products, key)
        .cloned()
        .ok_or_else(|| StoreError::not_found(Product::KIND, key))
}

pub async fn create_product<S: Store>(store: &S, new: NewProduct) -> StoreResult<Product> {
    store
        .update_products(move |mut products| {
            let document_id = ids::next_document_id(&products);
            let slug_value = slug::resolve_slug(new.slug.clone(), &new.name);
            if slug::slug_taken(&products, &slug_value) {
                return Err(StoreError::duplicate_slug(Product::KIND, slug_value));
            }
            let product = Product::from_new(new, document_id, slug_value, Utc::now());
            products.push(product.clone());
            Ok((products, product))
        })
        .await
}

pub async fn update_product<S: Store>(store: &S, key: &str, patch: Value) -> StoreResult<Product> {
    let key = key.to_string();
    store
        .update_products(move |mut products| {
            let index = records::position_of(&products, &key)
                .ok_or_else(|| StoreError::not_found(Product::KIND, key.clone()))?;
            let merged = records::merge_patch(&products[index], &patch, Utc::now())?;
            products[index] = merged.clone();
            Ok((products, merged))
        })
        .await
}

pub async fn delete_product<S: Store>(store: &S, key: &str) -> StoreResult<()> {
    let key = key.to_string();
    store
        .update_products(move |mut products| {
            let index = records::position_of(&products, &key)
                .ok_or_else(|| StoreError::not_found(Product::KIND, key.clone()))?;
            products.remove(index);
            Ok((products, ()))
        })
        .await
}

// ---------------------------------------------------------------------------
// Categories

pub async fn list_categories<S: Store>(store: &S) -> StoreResult<Vec<Category>> {
    store.load_categories().await
}

pub async fn get_category<S: Store>(store: &S, key: &str) -> StoreResult<Category> {
    let categories = store.load_categories().await?;
    records::find_record(&categories, key)
        .cloned()
        .ok_or_else(|| StoreError::not_found(Category::KIND, key))
}

pub async fn create_category<S: Store>(store: &S, new: NewCategory) -> StoreResult<Category> {
    store
        .update_categories(move |mut categories| {
            let document_id = ids::next_document_id(&categories);
            let slug_value = slug::resolve_slug(new.slug.clone(), &new.name);
            if slug::slug_taken(&categories, &slug_value) {
                return Err(StoreError::duplicate_slug(Category::KIND, slug_value));
            }
            let category = Category::from_new(new, document_id, slug_value, Utc::now());
            categories.push(category.clone());
            Ok((categories, category))
        })
        .await
}

pub async fn update_category<S: Store>(store: &S, key: &str, patch: Value) -> StoreResult<Category> {
    let key = key.to_string();
    store
        .update_categories(move |mut categories| {
            let index = records::position_of(&categories, &key)
                .ok_or_else(|| StoreError::not_found(Category::KIND, key.clone()))?;
            let merged = records::merge_patch(&categories[index], &patch, Utc::now())?;
            categories[index] = merged.clone();
            Ok((categories, merged))
        })
        .await
}

pub async fn delete_category<S: Store>(store: &S, key: &str) -> StoreResult<()> {
    let key = key.to_string();
    store
        .update_categories(move |mut categories| {
            let index = records::position_of(&categories, &key)
                .ok_or_else(|| StoreError::not_found(Category::KIND, key.clone()))?;
            categories.remove(index);
            Ok((categories, ()))
        })
        .await
}

// ---------------------------------------------------------------------------
// Brands

/// When a category slug is given, only brands with at least one product in
/// that category are returned. Products embed their brand as a snapshot, so
/// membership is decided by the snapshot's document id.
pub async fn list_brands<S: Store>(store: &S, category_slug: Option<&str>) -> StoreResult<Vec<Brand>> {
    let brands = store.load_brands().await?;
    let Some(category_slug) = category_slug else {
        return Ok(brands);
    };
    let products = store.load_products().await?;
    let brand_ids: Vec<Id> = products
        .iter()
        .filter(|p| {
            p.category
                .as_ref()
                .map(|c| c.slug == category_slug)
                .unwrap_or(false)
        })
        .filter_map(|p| p.brand.as_ref().map(|b| b.document_id.clone()))
        .unique()
        .collect();
    Ok(brands
        .into_iter()
        .filter(|b| brand_ids.contains(&b.document_id))
        .collect())
}

pub async fn get_brand<S: Store>(store: &S, key: &str) -> StoreResult<Brand> {
    let brands = store.load_brands().await?;
    records::find_record(&brands, key)
        .cloned()
        .ok_or_else(|| StoreError::not_found(Brand::KIND, key))
}

pub async fn create_brand<S: Store>(store: &S, new: NewBrand) -> StoreResult<Brand> {
    store
        .update_brands(move |mut brands| {
            let document_id = ids::next_document_id(&brands);
            let slug_value = slug::resolve_slug(new.slug.clone(), &new.name);
            if slug::slug_taken(&brands, &slug_value) {
                return Err(StoreError::duplicate_slug(Brand::KIND, slug_value));
            }
            let brand = Brand::from_new(new, document_id, slug_value, Utc::now());
            brands.push(brand.clone());
            Ok((brands, brand))
        })
        .await
}

pub async fn update_brand<S: Store>(store: &S, key: &str, patch: Value) -> StoreResult<Brand> {
    let key = key.to_string();
    store
        .update_brands(move |mut brands| {
            let index = records::position_of(&brands, &key)
                .ok_or_else(|| StoreError::not_found(Brand::KIND, key.clone()))?;
            let merged = records::merge_patch(&brands[index], &patch, Utc::now())?;
            brands[index] = merged.clone();
            Ok((brands, merged))
        })
        .await
}

pub async fn delete_brand<S: Store>(store: &S, key: &str) -> StoreResult<()> {
    let key = key.to_string();
    store
        .update_brands(move |mut brands| {
            let index = records::position_of(&brands, &key)
                .ok_or_else(|| StoreError::not_found(Brand::KIND, key.clone()))?;
            brands.remove(index);
            Ok((brands, ()))
        })
        .await
}

// ---------------------------------------------------------------------------
// Articles

pub async fn list_articles<S: Store>(
    store: &S,
    page: usize,
    page_size: usize,
) -> StoreResult<Page<Article>> {
    let articles = store.load_articles().await?;
    Ok(query::paginate(articles, PageRequest::new(page, page_size)))
}

pub async fn get_article<S: Store>(store: &S, key: &str) -> StoreResult<Article> {
    let articles = store.load_articles().await?;
    records::find_record(&articles, key)
        .cloned()
        .ok_or_else(|| StoreError::not_found(Article::KIND, key))
}

pub async fn create_article<S: Store>(store: &S, new: NewArticle) -> StoreResult<Article> {
    store
        .update_articles(move |mut articles| {
            let document_id = ids::next_document_id(&articles);
            let slug_value = slug::resolve_slug(new.slug.clone(), &new.title);
            if slug::slug_taken(&articles, &slug_value) {
                return Err(StoreError::duplicate_slug(Article::KIND, slug_value));
            }
            let article = Article::from_new(new, document_id, slug_value, Utc::now());
            articles.push(article.clone());
            Ok((articles, article))
        })
        .await
}

pub async fn update_article<S: Store>(store: &S, key: &str, patch: Value) -> StoreResult<Article> {
    let key = key.to_string();
    store
        .update_articles(move |mut articles| {
            let index = records::position_of(&articles, &key)
                .ok_or_else(|| StoreError::not_found(Article::KIND, key.clone()))?;
            let merged = records::merge_patch(&articles[index], &patch, Utc::now())?;
            articles[index] = merged.clone();
            Ok((articles, merged))
        })
        .await
}

pub async fn delete_article<S: Store>(store: &S, key: &str) -> StoreResult<()> {
    let key = key.to_string();
    store
        .update_articles(move |mut articles| {
            let index = records::position_of(&articles, &key)
                .ok_or_else(|| StoreError::not_found(Article::KIND, key.clone()))?;
            articles.remove(index);
            Ok((articles, ()))
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, ProductStore};
    use serde_json::json;

    fn new_product(name: &str, price: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            slug: None,
            price: Some(price),
            description: None,
            short_description: None,
            content: None,
            status: None,
            category: None,
            brand: None,
            images: None,
        }
    }

    fn new_category(name: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            slug: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn creates_assign_distinct_sequential_ids() {
        let store = MemoryStore::new();
        for i in 0..5 {
            create_product(&store, new_product(&format!("Product {i}"), 100)).await.unwrap();
        }
        let products = store.load_products().await.unwrap();
        let mut ids: Vec<&str> = products.iter().map(|p| p.document_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn air_max_scenario() {
        let store = MemoryStore::new();

        let created = create_product(&store, new_product("Air Max", 2_000_000)).await.unwrap();
        assert_eq!(created.document_id, "1");
        assert_eq!(created.slug, "air-max");
        assert_eq!(created.status, crate::model::ProductStatus::Active);

        // Same name derives the same slug and must be rejected.
        let err = create_product(&store, new_product("Air Max", 3_000_000)).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug { .. }));

        delete_product(&store, "1").await.unwrap();
        let page = list_products(&store, &ProductQuery::default()).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.pagination.total, 0);
    }

    #[tokio::test]
    async fn duplicate_slug_leaves_collection_unchanged() {
        let store = MemoryStore::new();
        create_product(&store, new_product("Air Max", 100)).await.unwrap();
        let before = store.load_products().await.unwrap();

        let err = create_product(&store, new_product("Air Max", 200)).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug { .. }));

        let after = store.load_products().await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn update_retains_identifier_despite_conflicting_payload() {
        let store = MemoryStore::new();
        create_product(&store, new_product("Air Max", 100)).await.unwrap();

        let updated = update_product(
            &store,
            "air-max",
            json!({"documentId": "42", "price": 500}),
        )
        .await
        .unwrap();
        assert_eq!(updated.document_id, "1");
        assert_eq!(updated.price, 500);
    }

    #[tokio::test]
    async fn lookup_accepts_id_or_slug() {
        let store = MemoryStore::new();
        create_product(&store, new_product("Air Max", 100)).await.unwrap();

        assert_eq!(get_product(&store, "1").await.unwrap().slug, "air-max");
        assert_eq!(get_product(&store, "air-max").await.unwrap().document_id, "1");
        let err = get_product(&store, "missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn category_and_brand_ids_carry_their_prefix() {
        let store = MemoryStore::new();
        let category = create_category(&store, new_category("Shoes")).await.unwrap();
        assert_eq!(category.document_id, "cat1");
        assert_eq!(category.slug, "shoes");

        let brand = create_brand(
            &store,
            NewBrand {
                name: "Nike".to_string(),
                slug: None,
                description: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(brand.document_id, "brand1");
    }

    #[tokio::test]
    async fn brand_listing_narrows_to_categories_with_products() {
        let store = MemoryStore::new();
        let shoes = create_category(&store, new_category("Shoes")).await.unwrap();
        let nike = create_brand(
            &store,
            NewBrand { name: "Nike".to_string(), slug: None, description: None },
        )
        .await
        .unwrap();
        create_brand(
            &store,
            NewBrand { name: "Adidas".to_string(), slug: None, description: None },
        )
        .await
        .unwrap();

        let mut new = new_product("Air Max", 100);
        new.category = Some(shoes);
        new.brand = Some(nike);
        create_product(&store, new).await.unwrap();

        let brands = list_brands(&store, Some("shoes")).await.unwrap();
        assert_eq!(brands.len(), 1);
        assert_eq!(brands[0].name, "Nike");

        let all = list_brands(&store, None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn article_ids_and_slug_rejection() {
        let store = MemoryStore::new();
        let article = create_article(
            &store,
            NewArticle {
                title: "Summer Sale".to_string(),
                slug: None,
                content: Some("Everything must go".to_string()),
                description: None,
                cover: None,
                author: None,
                category: None,
                published_at: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(article.document_id, "art1");
        assert_eq!(article.slug, "summer-sale");
        // Description defaulted from content.
        assert_eq!(article.description, "Everything must go");

        let err = create_article(
            &store,
            NewArticle {
                title: "Summer Sale".to_string(),
                slug: None,
                content: None,
                description: None,
                cover: None,
                author: None,
                category: None,
                published_at: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug { .. }));
    }
}
