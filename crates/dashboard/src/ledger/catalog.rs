//! Catalog ledger: the in-memory product list and its stock bookkeeping.
//!
//! [`CatalogLedger::try_reserve`] is the single check-and-decrement
//! operation callers use before committing a cart mutation, so there is no
//! window between "check the stock" and "take the stock". The clamped
//! [`decrement_stock`](CatalogLedger::decrement_stock) and
//! [`restore_stock`](CatalogLedger::restore_stock) remain for compensating
//! adjustments and never fail on a missing id.

use retail_admin_core::ProductId;
use thiserror::Error;
use tracing::debug;

use crate::models::Product;

/// Errors from stock reservation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// The requested quantity exceeds what is on hand.
    #[error("not enough stock for {title}: requested {requested}, available {available}")]
    Exceeded {
        title: String,
        requested: u32,
        available: u32,
    },

    /// The product id is not in the catalog.
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),
}

/// Ordered product records.
#[derive(Debug, Default)]
pub struct CatalogLedger {
    products: Vec<Product>,
}

impl CatalogLedger {
    /// An empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in seeded order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Replace the contents with a seeded list, only if currently empty.
    pub fn hydrate(&mut self, list: Vec<Product>) {
        if self.products.is_empty() {
            self.products = list;
        } else {
            debug!("catalog ledger already populated, skipping hydrate");
        }
    }

    /// Atomically check and take `quantity` units of a product's stock.
    ///
    /// # Errors
    ///
    /// [`StockError::Exceeded`] when the request is larger than the current
    /// stock (nothing is taken), [`StockError::UnknownProduct`] for an
    /// unknown id.
    pub fn try_reserve(&mut self, id: ProductId, quantity: u32) -> Result<(), StockError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StockError::UnknownProduct(id))?;

        if quantity > product.stock {
            return Err(StockError::Exceeded {
                title: product.title.clone(),
                requested: quantity,
                available: product.stock,
            });
        }

        product.stock -= quantity;
        Ok(())
    }

    /// Decrement a product's stock, clamping at zero. No-op on a missing id.
    pub fn decrement_stock(&mut self, id: ProductId, quantity: u32) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            product.stock = product.stock.saturating_sub(quantity);
        }
    }

    /// Add stock back (released reservation, cancelled order). No-op on a
    /// missing id.
    pub fn restore_stock(&mut self, id: ProductId, quantity: u32) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            product.stock = product.stock.saturating_add(quantity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    fn catalog() -> CatalogLedger {
        let mut ledger = CatalogLedger::new();
        ledger.hydrate(vec![
            testutil::product(1, "first", 1000, 3),
            testutil::product(2, "second", 550, 10),
        ]);
        ledger
    }

    fn stock_of(ledger: &CatalogLedger, id: i64) -> u32 {
        ledger.get(ProductId::new(id)).unwrap().stock
    }

    #[test]
    fn test_try_reserve_takes_stock() {
        let mut ledger = catalog();
        ledger.try_reserve(ProductId::new(1), 2).unwrap();
        assert_eq!(stock_of(&ledger, 1), 1);
    }

    #[test]
    fn test_try_reserve_rejects_excess_without_mutation() {
        let mut ledger = catalog();
        let err = ledger.try_reserve(ProductId::new(1), 4).unwrap_err();
        assert_eq!(
            err,
            StockError::Exceeded {
                title: "first".into(),
                requested: 4,
                available: 3,
            }
        );
        assert_eq!(stock_of(&ledger, 1), 3);
    }

    #[test]
    fn test_try_reserve_unknown_product() {
        let mut ledger = catalog();
        assert_eq!(
            ledger.try_reserve(ProductId::new(99), 1),
            Err(StockError::UnknownProduct(ProductId::new(99)))
        );
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut ledger = catalog();
        ledger.decrement_stock(ProductId::new(1), 5);
        assert_eq!(stock_of(&ledger, 1), 0);
        ledger.decrement_stock(ProductId::new(1), 1);
        assert_eq!(stock_of(&ledger, 1), 0);
    }

    #[test]
    fn test_stock_adjustments_ignore_missing_ids() {
        let mut ledger = catalog();
        ledger.decrement_stock(ProductId::new(99), 1);
        ledger.restore_stock(ProductId::new(99), 1);
        assert_eq!(ledger.products().len(), 2);
    }

    #[test]
    fn test_restore_adds_back() {
        let mut ledger = catalog();
        ledger.try_reserve(ProductId::new(2), 4).unwrap();
        ledger.restore_stock(ProductId::new(2), 4);
        assert_eq!(stock_of(&ledger, 2), 10);
    }

    #[test]
    fn test_hydrate_only_when_empty() {
        let mut ledger = catalog();
        ledger.hydrate(vec![testutil::product(9, "stale", 100, 1)]);
        assert_eq!(ledger.products().len(), 2);
    }
}
