use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::report::TopProduct;
use super::Seller;

/// Running statistics for one seller during a single analysis pass
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    pub id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: usize,
    /// sku -> cumulative quantity sold, wider than a single line's quantity
    pub products_sold: BTreeMap<String, u64>,
}

impl SellerStat {
    /// Create empty statistics for a seller
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.full_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: BTreeMap::new(),
        }
    }

    /// Count one purchase record, regardless of how many items it has
    pub fn record_sale(&mut self) {
        self.sales_count += 1;
    }

    /// Accumulate one line item
    /// Profit is `revenue - cost`; zero quantities leave `products_sold` untouched
    pub fn add_line(&mut self, sku: &str, quantity: u32, revenue: Decimal, cost: Decimal) {
        self.revenue += revenue;
        self.profit += revenue - cost;

        if quantity == 0 {
            return;
        }
        *self.products_sold.entry(sku.to_string()).or_insert(0) += u64::from(quantity);
    }

    /// Best-selling products, quantity descending, at most `limit` entries
    /// Equal quantities are ordered by sku
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut products: Vec<TopProduct> = self
            .products_sold
            .iter()
            .map(|(sku, &quantity)| TopProduct {
                sku: sku.clone(),
                quantity,
            })
            .collect();

        // Stable sort keeps the sku order of the BTreeMap for ties
        products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        products.truncate(limit);
        products
    }
}
