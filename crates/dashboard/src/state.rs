//! Application state: the single root that owns every subsystem.
//!
//! Constructed once at startup and passed by reference to command
//! handlers; there are no module-level statics anywhere in the dashboard.
//! All mutation happens on the caller's single thread between gateway
//! await points, so no locking is needed or used.

use chrono::Utc;
use tracing::{info, warn};

use crate::commerce::CommerceState;
use crate::config::DashboardConfig;
use crate::error::AppError;
use crate::gateway::ApiClient;
use crate::ledger::{CatalogLedger, CustomerLedger};
use crate::models::{Customer, Order};
use crate::seed;
use crate::session::SessionStore;

/// Everything the dashboard owns.
pub struct AppState {
    pub config: DashboardConfig,
    pub gateway: ApiClient,
    pub session: SessionStore,
    pub customers: CustomerLedger,
    pub catalog: CatalogLedger,
    pub commerce: CommerceState,
}

impl AppState {
    /// Build the application state from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or client setup fails.
    pub fn from_env() -> Result<Self, AppError> {
        let config = DashboardConfig::from_env()?;
        Self::new(config)
    }

    /// Build the application state and restore any persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: DashboardConfig) -> Result<Self, AppError> {
        let gateway = ApiClient::new(&config)?;
        let session = SessionStore::restore(&config.session_file);
        Ok(Self {
            config,
            gateway,
            session,
            customers: CustomerLedger::new(),
            catalog: CatalogLedger::new(),
            commerce: CommerceState::default(),
        })
    }

    /// Fetch the user list and hydrate the customer ledger (guarded; a
    /// populated ledger is left alone).
    ///
    /// # Errors
    ///
    /// Returns a gateway error if the fetch fails.
    pub async fn hydrate_customers(&mut self) -> Result<(), AppError> {
        if !self.customers.is_empty() {
            return Ok(());
        }
        let users = self.gateway.get_users().await?;
        self.customers.hydrate(users);
        Ok(())
    }

    /// Fetch photo records and hydrate the catalog through the seeding
    /// step (guarded; a populated catalog is left alone).
    ///
    /// # Errors
    ///
    /// Returns a gateway error if the fetch fails.
    pub async fn hydrate_catalog(&mut self) -> Result<(), AppError> {
        if !self.catalog.is_empty() {
            return Ok(());
        }
        let photos = self.gateway.get_photos(self.config.catalog_limit).await?;
        let mut rng = seed::seed_rng(self.config.catalog_seed);
        self.catalog.hydrate(seed::seed_products(&photos, &mut rng));
        Ok(())
    }

    /// Run the checkout transaction: stage the order locally, then attempt
    /// the remote submission best-effort.
    ///
    /// The local commit always wins; a failed submission marks the order
    /// `FailedNeedsRetry` instead of rolling anything back or silently
    /// diverging.
    ///
    /// # Errors
    ///
    /// Propagates checkout precondition failures; sync failures are not
    /// errors here.
    pub async fn place_order(&mut self) -> Result<Order, AppError> {
        let mut order = self.commerce.checkout(Utc::now())?;
        match self.gateway.submit_order(&order).await {
            Ok(()) => {
                self.commerce.mark_confirmed(order.id);
                order.status = retail_admin_core::OrderStatus::Confirmed;
                info!(order_id = %order.id, "order placed and synced");
            }
            Err(e) => {
                warn!(order_id = %order.id, "order sync failed, kept for retry: {e}");
                self.commerce.mark_sync_failed(order.id);
                order.status = retail_admin_core::OrderStatus::FailedNeedsRetry;
            }
        }
        Ok(order)
    }

    /// Re-submit every order still awaiting sync. Returns how many were
    /// confirmed this pass; failures stay eligible for the next retry.
    pub async fn retry_sync(&mut self) -> usize {
        let pending: Vec<Order> = self.commerce.pending_sync().cloned().collect();
        let mut confirmed = 0;
        for order in pending {
            match self.gateway.submit_order(&order).await {
                Ok(()) => {
                    self.commerce.mark_confirmed(order.id);
                    confirmed += 1;
                }
                Err(e) => {
                    warn!(order_id = %order.id, "order sync failed again: {e}");
                    self.commerce.mark_sync_failed(order.id);
                }
            }
        }
        confirmed
    }

    /// The logged-in operator, or [`AppError::NotAuthenticated`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] when no session is active.
    pub fn require_login(&self) -> Result<&Customer, AppError> {
        self.session.current_user().ok_or(AppError::NotAuthenticated)
    }
}
