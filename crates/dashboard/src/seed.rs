//! Catalog seeding: turn photo records into proper product entities.
//!
//! The mock API has no product resource, so the catalog is synthesized from
//! photo records: stable picsum image URLs derived from the photo id, plus
//! a pseudo-random price and stock level. Demo data only - two clients (or
//! two runs) see different prices unless `RETAIL_SEED` pins the RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use retail_admin_core::{Price, ProductId};
use rust_decimal::Decimal;

use crate::gateway::PhotoRecord;
use crate::models::Product;

/// Price range in cents: [10.00, 99.99].
const MIN_PRICE_CENTS: i64 = 1000;
const MAX_PRICE_CENTS: i64 = 9999;

/// Stock range: [1, 100].
const MIN_STOCK: u32 = 1;
const MAX_STOCK: u32 = 100;

/// Build products from photo records, synthesizing price and stock.
pub fn seed_products<R: Rng>(photos: &[PhotoRecord], rng: &mut R) -> Vec<Product> {
    photos
        .iter()
        .map(|photo| Product {
            id: ProductId::new(photo.id),
            title: photo.title.clone(),
            image_url: format!("https://picsum.photos/seed/{}/600/400", photo.id),
            thumbnail_url: format!("https://picsum.photos/seed/{}/150/150", photo.id),
            price: Price::usd(Decimal::new(
                rng.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS),
                2,
            )),
            stock: rng.random_range(MIN_STOCK..=MAX_STOCK),
        })
        .collect()
}

/// RNG for catalog synthesis: pinned when a seed is configured, OS-seeded
/// otherwise.
#[must_use]
pub fn seed_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
