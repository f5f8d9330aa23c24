use rust_decimal::Decimal;
use serde::Deserialize;

/// Product card from the input dataset
/// Only the fields the analysis needs are kept, the rest of the card is ignored
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Product {
    pub sku: String,
    pub purchase_price: Decimal,
}
