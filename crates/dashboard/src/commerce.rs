//! Commerce state machine: cart composition, order staging, checkout.
//!
//! The cart is an ordered sequence of product snapshots with at most one
//! line per product id. Every cart mutation that changes a quantity goes
//! through [`CatalogLedger::try_reserve`] (or releases a prior
//! reservation), so cart contents and catalog stock can never disagree -
//! there is no separate "check the stock first" step for callers to forget.
//!
//! Checkout is two-phase: it stages an [`Order`] locally (status
//! `Pending`) and clears the cart; the application layer then attempts the
//! remote submission and marks the order `Confirmed` or
//! `FailedNeedsRetry`. A failed sync keeps the order visible for an
//! explicit retry instead of silently diverging from the remote side.

use chrono::{DateTime, Utc};
use retail_admin_core::{OrderId, OrderStatus, Price, ProductId};
use thiserror::Error;

use crate::ledger::{CatalogLedger, StockError};
use crate::models::{CartItem, Customer, Order};

/// Errors from cart mutation and checkout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Stock reservation failed; nothing changed.
    #[error(transparent)]
    Stock(#[from] StockError),

    /// Checkout preconditions not met; nothing changed.
    #[error("checkout rejected: {0}")]
    Checkout(#[from] CheckoutRejected),
}

/// Why a checkout was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutRejected {
    /// No customer is selected for the sale.
    #[error("no customer selected")]
    NoCustomer,

    /// The cart has no items.
    #[error("cart is empty")]
    EmptyCart,
}

/// Cart, customer selection, and session-scoped order history.
#[derive(Debug, Default)]
pub struct CommerceState {
    cart: Vec<CartItem>,
    selected_customer: Option<Customer>,
    orders: Vec<Order>,
}

impl CommerceState {
    /// Current cart lines in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Customer selected for checkout, if any.
    #[must_use]
    pub const fn selected_customer(&self) -> Option<&Customer> {
        self.selected_customer.as_ref()
    }

    /// All orders staged this session, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Choose (or clear) the customer for the sale.
    pub fn set_customer(&mut self, customer: Option<Customer>) {
        self.selected_customer = customer;
    }

    /// Add one unit of a product to the cart.
    ///
    /// Reserves the unit in the catalog first; an existing line is
    /// incremented, otherwise a new line with a product snapshot is
    /// appended.
    ///
    /// # Errors
    ///
    /// [`CommerceError::Stock`] when the product is unknown or out of
    /// stock; the cart is unchanged.
    pub fn add_to_cart(
        &mut self,
        catalog: &mut CatalogLedger,
        product_id: ProductId,
    ) -> Result<(), CommerceError> {
        let snapshot = catalog
            .get(product_id)
            .cloned()
            .ok_or(StockError::UnknownProduct(product_id))?;
        catalog.try_reserve(product_id, 1)?;

        if let Some(item) = self.cart.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity += 1;
        } else {
            self.cart.push(CartItem {
                product: snapshot,
                quantity: 1,
            });
        }
        Ok(())
    }

    /// Set a cart line to an absolute quantity.
    ///
    /// Zero removes the line (releasing its reservation); growing a line
    /// reserves the difference; shrinking releases it. No-op when the
    /// product is not in the cart.
    ///
    /// # Errors
    ///
    /// [`CommerceError::Stock`] when growing past the available stock;
    /// cart and catalog are unchanged.
    pub fn set_quantity(
        &mut self,
        catalog: &mut CatalogLedger,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), CommerceError> {
        let Some(position) = self.cart.iter().position(|i| i.product.id == product_id) else {
            return Ok(());
        };

        if quantity == 0 {
            let item = self.cart.remove(position);
            catalog.restore_stock(product_id, item.quantity);
            return Ok(());
        }

        let Some(item) = self.cart.get_mut(position) else {
            return Ok(());
        };
        if quantity > item.quantity {
            catalog.try_reserve(product_id, quantity - item.quantity)?;
        } else if quantity < item.quantity {
            catalog.restore_stock(product_id, item.quantity - quantity);
        }
        item.quantity = quantity;
        Ok(())
    }

    /// Remove a cart line, releasing its reservation. No-op if absent.
    pub fn remove_from_cart(&mut self, catalog: &mut CatalogLedger, product_id: ProductId) {
        if let Some(position) = self.cart.iter().position(|i| i.product.id == product_id) {
            let item = self.cart.remove(position);
            catalog.restore_stock(product_id, item.quantity);
        }
    }

    /// Abandon the cart: release every reservation, clear items and the
    /// customer selection.
    pub fn clear_cart(&mut self, catalog: &mut CatalogLedger) {
        for item in self.cart.drain(..) {
            catalog.restore_stock(item.product.id, item.quantity);
        }
        self.selected_customer = None;
    }

    /// Running total, recomputed from current cart contents on every read.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart
            .iter()
            .fold(Price::zero(), |total, item| total.plus(&item.line_total()))
    }

    /// Total unit count across all cart lines.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    /// Stage an order from the current cart.
    ///
    /// Requires a selected customer and a non-empty cart. On success the
    /// order (id = previous order count + 1, deep item snapshot, computed
    /// total, status `Pending`) is appended to the history and the cart
    /// and selection are cleared. Stock was reserved as the cart was
    /// built, so checkout touches no catalog state.
    ///
    /// # Errors
    ///
    /// [`CheckoutRejected::NoCustomer`] or [`CheckoutRejected::EmptyCart`];
    /// no state changes on either.
    pub fn checkout(&mut self, now: DateTime<Utc>) -> Result<Order, CommerceError> {
        let customer = self
            .selected_customer
            .as_ref()
            .ok_or(CheckoutRejected::NoCustomer)?;
        if self.cart.is_empty() {
            return Err(CheckoutRejected::EmptyCart.into());
        }

        let next_id = i64::try_from(self.orders.len()).unwrap_or(0) + 1;
        let order = Order {
            id: OrderId::new(next_id),
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            items: self.cart.clone(),
            total: self.cart_total(),
            created_at: now,
            status: OrderStatus::Pending,
        };

        self.orders.push(order.clone());
        self.cart.clear();
        self.selected_customer = None;
        Ok(order)
    }

    /// Record a successful remote sync.
    pub fn mark_confirmed(&mut self, id: OrderId) {
        self.set_status(id, OrderStatus::Confirmed);
    }

    /// Record a failed remote sync; the order stays eligible for retry.
    pub fn mark_sync_failed(&mut self, id: OrderId) {
        self.set_status(id, OrderStatus::FailedNeedsRetry);
    }

    /// Orders still awaiting a successful remote sync.
    pub fn pending_sync(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|o| o.status.needs_sync())
    }

    fn set_status(&mut self, id: OrderId, status: OrderStatus) {
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
            order.status = status;
        }
    }
}
