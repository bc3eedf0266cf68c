//! Initial catalog and the routine that loads it.
//!
//! Records are keyed by application `id`; any that already exist are left
//! alone, so seeding an already seeded store is a no-op.

use tracing::{info, warn};

use crate::core::models::{NewCategory, NewProduct};
use crate::errors::StoreResult;
use crate::storage::Storage;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub categories_created: usize,
    pub products_created: usize,
    pub skipped: usize,
}

pub fn initial_categories() -> Vec<NewCategory> {
    [
        (
            "silk-sarees",
            "Silk Sarees",
            "Pure silk sarees woven for occasions",
        ),
        (
            "cotton-sarees",
            "Cotton Sarees",
            "Breathable handloom cotton for everyday wear",
        ),
        (
            "designer-sarees",
            "Designer Sarees",
            "Contemporary drapes with hand embellishment",
        ),
        (
            "bridal-collection",
            "Bridal Collection",
            "Heavy zari and heirloom weaves",
        ),
    ]
    .into_iter()
    .map(|(id, name, description)| NewCategory::new(id, name, description))
    .collect()
}

// (id, category, name, price, featured, description)
const PRODUCTS: &[(&str, &str, &str, f64, bool, &str)] = &[
    (
        "kanjivaram-maroon",
        "silk-sarees",
        "Maroon Kanjivaram Silk Saree",
        12500.0,
        true,
        "Temple border with contrast pallu",
    ),
    (
        "banarasi-gold",
        "silk-sarees",
        "Gold Banarasi Silk Saree",
        9800.0,
        false,
        "Brocade weave with zari buttis",
    ),
    (
        "paithani-peacock",
        "silk-sarees",
        "Peacock Paithani Saree",
        15400.0,
        false,
        "Yeola paithani with peacock motifs",
    ),
    (
        "chanderi-mint",
        "cotton-sarees",
        "Mint Chanderi Cotton Saree",
        2400.0,
        false,
        "Lightweight chanderi with silver border",
    ),
    (
        "ilkal-indigo",
        "cotton-sarees",
        "Indigo Ilkal Cotton Saree",
        1850.0,
        false,
        "Ilkal weave with tope teni pallu",
    ),
    (
        "organza-blush",
        "designer-sarees",
        "Blush Organza Saree",
        5600.0,
        true,
        "Sheer organza with floral embroidery",
    ),
    (
        "georgette-sequin",
        "designer-sarees",
        "Midnight Sequin Georgette Saree",
        6900.0,
        false,
        "All-over sequin work",
    ),
    (
        "nauvari-bridal",
        "bridal-collection",
        "Bridal Nauvari Saree",
        18500.0,
        true,
        "Nine-yard Maharashtrian drape in silk",
    ),
];

pub fn initial_products() -> Vec<NewProduct> {
    PRODUCTS
        .iter()
        .map(|&(id, category_id, name, price, featured, description)| NewProduct {
            description: Some(description.to_string()),
            images: vec![format!("/images/products/{id}.jpg")],
            featured,
            ..NewProduct::new(id, category_id, name, price)
        })
        .collect()
}

/// Inserts the initial categories, then the initial products.
///
/// # Errors
///
/// Propagates the first storage failure; records inserted before it stay.
pub async fn seed_database(storage: &dyn Storage) -> StoreResult<SeedReport> {
    let mut report = SeedReport::default();

    for category in initial_categories() {
        if storage.get_category_by_id(&category.id).await?.is_some() {
            report.skipped += 1;
            continue;
        }
        storage.create_category(category).await?;
        report.categories_created += 1;
    }

    for product in initial_products() {
        if storage.get_product_by_id(&product.id).await?.is_some() {
            report.skipped += 1;
            continue;
        }
        if storage
            .get_category_by_id(&product.category_id)
            .await?
            .is_none()
        {
            warn!(
                id = %product.id,
                category_id = %product.category_id,
                "Seeding product with unknown category"
            );
        }
        storage.create_product(product).await?;
        report.products_created += 1;
    }

    info!(
        categories_created = report.categories_created,
        products_created = report.products_created,
        skipped = report.skipped,
        "Catalog seeded"
    );
    Ok(report)
}
