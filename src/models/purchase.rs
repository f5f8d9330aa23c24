use rust_decimal::Decimal;
use serde::Deserialize;

/// One product entry of a purchase record
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    pub sale_price: Decimal,
    /// Discount in percent (0-100)
    pub discount: Decimal,
}

/// Purchase record (receipt) from the input dataset
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PurchaseRecord {
    pub seller_id: String,
    /// Absent and `null` are both accepted and mean "no items"
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
}

impl PurchaseRecord {
    /// Line items of the record, empty when the record carries none
    pub fn line_items(&self) -> &[LineItem] {
        self.items.as_deref().unwrap_or_default()
    }
}
