//! Customer ledger: the in-memory list of customer records.

use retail_admin_core::CustomerId;
use tracing::debug;

use crate::models::{Customer, CustomerDraft};

/// Ordered customer records plus the current selection (the record being
/// edited, or the customer chosen for checkout).
#[derive(Debug, Default)]
pub struct CustomerLedger {
    customers: Vec<Customer>,
    selected: Option<CustomerId>,
}

impl CustomerLedger {
    /// An empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customers: Vec::new(),
            selected: None,
        }
    }

    /// Whether the ledger holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// All records, most recently created first.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Replace the contents with a fetched list, only if currently empty.
    pub fn hydrate(&mut self, list: Vec<Customer>) {
        if self.customers.is_empty() {
            self.customers = list;
        } else {
            debug!("customer ledger already populated, skipping hydrate");
        }
    }

    /// Create a record from a draft.
    ///
    /// The new id is max existing id + 1 (1 when empty); the record is
    /// inserted at the front so the list stays most-recent-first.
    pub fn create(&mut self, draft: CustomerDraft) -> Customer {
        let next_id = self
            .customers
            .iter()
            .map(|c| c.id.as_i64())
            .max()
            .unwrap_or(0)
            + 1;
        let customer = draft.into_customer(CustomerId::new(next_id));
        self.customers.insert(0, customer.clone());
        customer
    }

    /// Replace the record with a matching id in place; no-op if absent.
    pub fn update(&mut self, record: Customer) {
        if let Some(slot) = self.customers.iter_mut().find(|c| c.id == record.id) {
            *slot = record;
        }
    }

    /// Remove the record with a matching id; no-op if absent. Clears the
    /// selection when it pointed at the removed record.
    pub fn remove(&mut self, id: CustomerId) {
        self.customers.retain(|c| c.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Track which customer is being edited or chosen.
    pub fn select(&mut self, id: Option<CustomerId>) {
        self.selected = id;
    }

    /// The currently selected record, if it still exists.
    #[must_use]
    pub fn selected(&self) -> Option<&Customer> {
        self.selected.and_then(|id| self.get(id))
    }
}
