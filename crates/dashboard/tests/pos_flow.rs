//! End-to-end POS scenarios against the public dashboard API.
//!
//! These run entirely locally: ledgers are hydrated with fixture data
//! instead of a live mock API, exercising the same paths the CLI drives.

use chrono::Utc;
use retail_admin_core::{CustomerId, Email, OrderId, OrderStatus, Price, ProductId};
use retail_admin_dashboard::commerce::{CheckoutRejected, CommerceError, CommerceState};
use retail_admin_dashboard::ledger::{CatalogLedger, CustomerLedger, StockError};
use retail_admin_dashboard::models::{Address, Company, Customer, CustomerDraft, Product};
use rust_decimal::Decimal;

fn customer(id: i64, name: &str, email: &str) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_owned(),
        username: String::new(),
        email: Email::parse(email).expect("valid fixture email"),
        address: Address::default(),
        phone: String::new(),
        website: String::new(),
        company: Company::default(),
    }
}

fn product(id: i64, title: &str, price_cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        image_url: String::new(),
        thumbnail_url: String::new(),
        price: Price::usd(Decimal::new(price_cents, 2)),
        stock,
    }
}

fn seeded_world() -> (CustomerLedger, CatalogLedger, CommerceState) {
    let mut customers = CustomerLedger::new();
    customers.hydrate(vec![
        customer(1, "Leanne Graham", "Sincere@april.biz"),
        customer(2, "Ervin Howell", "Shanna@melissa.tv"),
    ]);

    let mut catalog = CatalogLedger::new();
    catalog.hydrate(vec![
        product(1, "accusamus beatae", 1000, 3),
        product(2, "reprehenderit est", 550, 10),
    ]);

    (customers, catalog, CommerceState::default())
}

#[test]
fn full_sale_reserves_stock_and_stages_a_pending_order() {
    let (customers, mut catalog, mut commerce) = seeded_world();

    commerce.set_customer(customers.get(CustomerId::new(1)).cloned());
    commerce.add_to_cart(&mut catalog, ProductId::new(1)).unwrap();
    commerce.add_to_cart(&mut catalog, ProductId::new(1)).unwrap();
    commerce.add_to_cart(&mut catalog, ProductId::new(2)).unwrap();

    assert_eq!(commerce.cart_total().amount, Decimal::new(2550, 2));
    assert_eq!(commerce.cart_item_count(), 3);

    let order = commerce.checkout(Utc::now()).unwrap();
    assert_eq!(order.id, OrderId::new(1));
    assert_eq!(order.customer_name, "Leanne Graham");
    assert_eq!(order.status, OrderStatus::Pending);

    // Reservation already took the stock; checkout changed no catalog state.
    assert_eq!(catalog.get(ProductId::new(1)).unwrap().stock, 1);
    assert_eq!(catalog.get(ProductId::new(2)).unwrap().stock, 9);

    // The next sale starts from a clean slate but keeps the history.
    assert!(commerce.cart().is_empty());
    assert!(commerce.selected_customer().is_none());
    assert_eq!(commerce.orders().len(), 1);
}

#[test]
fn oversell_is_rejected_at_the_ledger_not_the_ui() {
    let (_, mut catalog, mut commerce) = seeded_world();

    for _ in 0..3 {
        commerce.add_to_cart(&mut catalog, ProductId::new(1)).unwrap();
    }

    // The fourth unit does not exist; the refusal is atomic.
    let err = commerce
        .add_to_cart(&mut catalog, ProductId::new(1))
        .unwrap_err();
    assert!(matches!(
        err,
        CommerceError::Stock(StockError::Exceeded {
            requested: 1,
            available: 0,
            ..
        })
    ));
    assert_eq!(commerce.cart_item_count(), 3);
}

#[test]
fn abandoning_a_cart_returns_every_unit() {
    let (customers, mut catalog, mut commerce) = seeded_world();

    commerce.set_customer(customers.get(CustomerId::new(2)).cloned());
    commerce.add_to_cart(&mut catalog, ProductId::new(1)).unwrap();
    commerce
        .set_quantity(&mut catalog, ProductId::new(1), 3)
        .unwrap();
    assert_eq!(catalog.get(ProductId::new(1)).unwrap().stock, 0);

    commerce.clear_cart(&mut catalog);
    assert_eq!(catalog.get(ProductId::new(1)).unwrap().stock, 3);
    assert!(commerce.selected_customer().is_none());
}

#[test]
fn all_four_checkout_states_behave() {
    let (customers, mut catalog, mut commerce) = seeded_world();
    let buyer = customers.get(CustomerId::new(1)).cloned();

    // cart-empty / no-customer
    assert_eq!(
        commerce.checkout(Utc::now()).unwrap_err(),
        CommerceError::Checkout(CheckoutRejected::NoCustomer)
    );

    // cart-empty / customer-selected
    commerce.set_customer(buyer.clone());
    assert_eq!(
        commerce.checkout(Utc::now()).unwrap_err(),
        CommerceError::Checkout(CheckoutRejected::EmptyCart)
    );

    // cart-nonempty / no-customer
    commerce.set_customer(None);
    commerce.add_to_cart(&mut catalog, ProductId::new(2)).unwrap();
    assert_eq!(
        commerce.checkout(Utc::now()).unwrap_err(),
        CommerceError::Checkout(CheckoutRejected::NoCustomer)
    );

    // cart-nonempty / customer-selected: the only state where checkout runs.
    commerce.set_customer(buyer);
    assert!(commerce.checkout(Utc::now()).is_ok());
}

#[test]
fn failed_sync_keeps_the_order_retryable() {
    let (customers, mut catalog, mut commerce) = seeded_world();

    commerce.set_customer(customers.get(CustomerId::new(1)).cloned());
    commerce.add_to_cart(&mut catalog, ProductId::new(2)).unwrap();
    let order = commerce.checkout(Utc::now()).unwrap();

    commerce.mark_sync_failed(order.id);
    let pending: Vec<OrderId> = commerce.pending_sync().map(|o| o.id).collect();
    assert_eq!(pending, vec![order.id]);

    commerce.mark_confirmed(order.id);
    assert_eq!(commerce.pending_sync().count(), 0);
}

#[test]
fn customer_crud_staging_matches_the_ledger_contract() {
    let mut customers = CustomerLedger::new();

    let draft = |name: &str, email: &str| CustomerDraft {
        name: name.to_owned(),
        username: String::new(),
        email: Email::parse(email).expect("valid fixture email"),
        phone: String::new(),
        website: String::new(),
        company_name: "Romaguera-Crona".to_owned(),
    };

    let a = customers.create(draft("A", "a@example.com"));
    let b = customers.create(draft("B", "b@example.com"));
    assert_eq!((a.id.as_i64(), b.id.as_i64()), (1, 2));
    assert_eq!(customers.customers()[0].name, "B");

    customers.select(Some(b.id));
    customers.remove(b.id);
    assert!(customers.selected().is_none());
    assert_eq!(customers.customers().len(), 1);
}
