//! Shared test support: database setup and a product factory.

use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use catalog_store::{Category, Product, StoreConfig, db};

/// Names drawn by the product factory.
const PRODUCT_NAMES: &[&str] = &[
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

/// Connect to the test database and apply migrations.
///
/// Each call returns its own pool; with the default `sqlite::memory:` URL
/// that means a fresh, empty database per test. Set `DATABASE_URL` to point
/// the suite at a different database.
pub async fn test_pool() -> SqlitePool {
    init_tracing();

    let config = StoreConfig::from_env().expect("load test configuration");
    let pool = db::connect(&config.database_url)
        .await
        .expect("connect to test database");
    db::migrate(&pool).await.expect("run migrations");
    pool
}

/// Install a fmt subscriber once per process; later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a random, schema-valid, unpersisted product.
pub fn random_product(rng: &mut impl Rng) -> Product {
    let name = *PRODUCT_NAMES.choose(rng).expect("name list is non-empty");
    // Price between 0.50 and 2000.00 with two decimal places.
    let cents = rng.random_range(50..=200_000i64);

    Product::new(
        name,
        format!("A {}", name.to_lowercase()),
        Decimal::new(cents, 2),
        rng.random_bool(0.5),
        *Category::ALL.choose(rng).expect("category list is non-empty"),
    )
}

/// Build a batch of random unpersisted products.
pub fn random_products(rng: &mut impl Rng, count: usize) -> Vec<Product> {
    (0..count).map(|_| random_product(rng)).collect()
}
