//! The transaction wire model.

use serde::Deserialize;
use time::OffsetDateTime;

/// A product sale transaction as returned by the transaction query service.
///
/// Transactions are read-only to this application: they are deserialized
/// from the service response and rendered, never created or modified.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The service's unique identifier for the transaction.
    #[serde(rename = "_id")]
    pub id: String,
    /// When the sale happened.
    #[serde(rename = "dateOfSale", with = "time::serde::rfc3339")]
    pub date_of_sale: OffsetDateTime,
    /// The title of the product that was sold.
    #[serde(rename = "productTitle")]
    pub product_title: String,
    /// A text description of the product.
    pub description: String,
    /// The sale price.
    pub price: f64,
    /// The product category.
    pub category: String,
    /// Whether the sale completed.
    pub sold: bool,
}
