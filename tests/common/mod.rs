#![allow(dead_code)]

use rust_decimal::Decimal;
use sales_analytics::models::{Dataset, LineItem, Product, PurchaseRecord, Seller};

/// Helper to create a seller card
pub fn make_seller(id: &str, first_name: &str, last_name: &str) -> Seller {
    Seller {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

/// Helper to create a product card
pub fn make_product(sku: &str, purchase_price: Decimal) -> Product {
    Product {
        sku: sku.to_string(),
        purchase_price,
    }
}

/// Helper to create a line item
pub fn make_item(sku: &str, quantity: u32, sale_price: Decimal, discount: Decimal) -> LineItem {
    LineItem {
        sku: sku.to_string(),
        quantity,
        sale_price,
        discount,
    }
}

/// Helper to create a purchase record with items
pub fn make_record(seller_id: &str, items: Vec<LineItem>) -> PurchaseRecord {
    PurchaseRecord {
        seller_id: seller_id.to_string(),
        items: Some(items),
    }
}

/// Helper to create a purchase record without an items field
pub fn make_empty_record(seller_id: &str) -> PurchaseRecord {
    PurchaseRecord {
        seller_id: seller_id.to_string(),
        items: None,
    }
}

/// Assemble a dataset with no customers
pub fn make_dataset(
    sellers: Vec<Seller>,
    products: Vec<Product>,
    purchase_records: Vec<PurchaseRecord>,
) -> Dataset {
    Dataset {
        sellers,
        products,
        purchase_records,
        customers: Vec::new(),
    }
}

/// Run a JSON string through the library and return the output
pub fn process_json_string(
    json_input: &str,
    format: sales_analytics::output::OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    sales_analytics::process_sales_data(
        json_input.as_bytes(),
        &mut output,
        &sales_analytics::strategy::AnalyzeOptions::standard(),
        format,
    )?;
    Ok(String::from_utf8(output)?)
}

/// Path of a file under tests/fixtures
pub fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_make_record() {
        let record = make_record("seller_1", vec![make_item("SKU_001", 2, dec!(100), dec!(10))]);
        assert_eq!(record.seller_id, "seller_1");
        assert_eq!(record.line_items().len(), 1);
        assert_eq!(record.line_items()[0].quantity, 2);
    }

    #[test]
    fn test_make_empty_record() {
        let record = make_empty_record("seller_2");
        assert!(record.items.is_none());
        assert!(record.line_items().is_empty());
    }
}
