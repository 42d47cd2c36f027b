//! Domain entities shared across the dashboard.
//!
//! [`Customer`] matches the wire shape of the mock API's user records, so it
//! deserializes straight off `GET /users`. [`Product`] is a proper entity of
//! its own, populated by the catalog seeding step rather than by reusing a
//! foreign record type. [`Order`] is the serialization format submitted to
//! the remote API inside a post body, hence the camelCase field names.

use chrono::{DateTime, Utc};
use retail_admin_core::{CustomerId, Email, OrderId, OrderStatus, Price, ProductId};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Owned by the catalog ledger; `stock` is mutated only through its
/// stock-adjustment operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub thumbnail_url: String,
    pub price: Price,
    pub stock: u32,
}

/// A customer record, wire-compatible with the mock API's `/users` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub email: Email,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
}

/// Postal address of a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

/// Geographic coordinates, kept as strings like the wire format does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
}

/// Company a customer belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "catchPhrase", default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

/// Operator input for creating or staging a customer record.
///
/// The customer ledger assigns the id; the draft carries everything else
/// the form collects.
#[derive(Debug, Clone)]
pub struct CustomerDraft {
    pub name: String,
    pub username: String,
    pub email: Email,
    pub phone: String,
    pub website: String,
    pub company_name: String,
}

impl CustomerDraft {
    /// Materialize the draft into a full record with the given id.
    #[must_use]
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
            address: Address::default(),
            phone: self.phone,
            website: self.website,
            company: Company {
                name: self.company_name,
                ..Company::default()
            },
        }
    }
}

/// A cart line: a value snapshot of the product plus a quantity.
///
/// A cart holds at most one line per product id; quantity is always >= 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// An order staged at checkout.
///
/// Items, total, and timestamp are immutable once staged; only `status`
/// advances as remote sync attempts succeed or fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub items: Vec<CartItem>,
    pub total: Price,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_customer_deserializes_from_wire_shape() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, CustomerId::new(1));
        assert_eq!(customer.email.as_str(), "Sincere@april.biz");
        assert_eq!(customer.company.catch_phrase, "Multi-layered client-server neural-net");
        assert_eq!(customer.address.geo.lat, "-37.3159");
    }

    #[test]
    fn test_customer_tolerates_sparse_records() {
        // A POST echo from the mock backend only carries what was sent.
        let json = r#"{ "id": 11, "name": "New Customer", "email": "new@example.com" }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, CustomerId::new(11));
        assert!(customer.phone.is_empty());
    }

    #[test]
    fn test_cart_item_line_total() {
        let item = CartItem {
            product: Product {
                id: ProductId::new(1),
                title: "widget".into(),
                image_url: String::new(),
                thumbnail_url: String::new(),
                price: Price::usd(Decimal::new(1050, 2)),
                stock: 5,
            },
            quantity: 3,
        };
        assert_eq!(item.line_total().amount, Decimal::new(3150, 2));
    }
}
