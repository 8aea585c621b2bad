use crate::logic::catalog;
use crate::model::{NewArticle, NewBrand, NewCategory, NewProduct};
use crate::store::Store;
use anyhow::Result;

/// Loads a small demonstration catalog through the regular create paths, so
/// seeded records get real ids, slugs and timestamps. Skipped when products
/// already exist.
pub async fn load_seed_data<S: Store>(store: &S) -> Result<()> {
    if !store.load_products().await?.is_empty() {
        log::info!("seed skipped: products collection is not empty");
        return Ok(());
    }

    let shoes = catalog::create_category(
        store,
        NewCategory {
            name: "Shoes".to_string(),
            slug: None,
            description: Some("Footwear for every day".to_string()),
        },
    )
    .await?;
    let apparel = catalog::create_category(
        store,
        NewCategory {
            name: "Apparel".to_string(),
            slug: None,
            description: Some("Shirts, jackets and more".to_string()),
        },
    )
    .await?;

    let nike = catalog::create_brand(
        store,
        NewBrand {
            name: "Nike".to_string(),
            slug: None,
            description: None,
        },
    )
    .await?;
    let adidas = catalog::create_brand(
        store,
        NewBrand {
            name: "Adidas".to_string(),
            slug: None,
            description: None,
        },
    )
    .await?;

    let products = [
        ("Air Max 90", 2_500_000, Some(&shoes), Some(&nike)),
        ("Ultraboost Light", 4_200_000, Some(&shoes), Some(&adidas)),
        ("Club Fleece Hoodie", 1_100_000, Some(&apparel), Some(&nike)),
        ("Essentials Tee", 450_000, Some(&apparel), None),
    ];
    for (name, price, category, brand) in products {
        catalog::create_product(
            store,
            NewProduct {
                name: name.to_string(),
                slug: None,
                price: Some(price),
                description: Some(format!("{name} from the demonstration catalog.")),
                short_description: None,
                content: None,
                status: None,
                category: category.cloned(),
                brand: brand.cloned(),
                images: None,
            },
        )
        .await?;
    }

    let articles = [
        (
            "Welcome to the store",
            "A quick tour of the catalog and how ordering works.",
        ),
        (
            "Choosing the right running shoe",
            "Cushioning, drop and fit explained without the jargon.",
        ),
    ];
    for (title, content) in articles {
        catalog::create_article(
            store,
            NewArticle {
                title: title.to_string(),
                slug: None,
                content: Some(content.to_string()),
                description: None,
                cover: None,
                author: None,
                category: None,
                published_at: None,
            },
        )
        .await?;
    }

    log::info!("seed data loaded");
    Ok(())
}
