//! Shared fixtures for unit tests.

use retail_admin_core::{CustomerId, Email, Price, ProductId};
use rust_decimal::Decimal;

use crate::models::{Address, CartItem, Company, Customer, Product};

/// A customer with the given id, name, and email; everything else default.
pub fn customer(id: i64, name: &str, email: &str) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_owned(),
        username: String::new(),
        email: Email::parse(email).expect("test email must be valid"),
        address: Address::default(),
        phone: String::new(),
        website: String::new(),
        company: Company::default(),
    }
}

/// A product priced in cents with the given stock level.
pub fn product(id: i64, title: &str, price_cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        image_url: format!("https://picsum.photos/seed/{id}/600/400"),
        thumbnail_url: format!("https://picsum.photos/seed/{id}/150/150"),
        price: Price::usd(Decimal::new(price_cents, 2)),
        stock,
    }
}

/// A cart line for the given product.
pub fn cart_item(product: Product, quantity: u32) -> CartItem {
    CartItem { product, quantity }
}
