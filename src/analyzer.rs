use std::collections::HashMap;

use log::{debug, info};
use rust_decimal::Decimal;

use crate::error::{AnalysisError, Result};
use crate::models::{round_money, Dataset, Product, PurchaseRecord, SellerReport, SellerStat};
use crate::strategy::{AnalyzeOptions, RevenueStrategy};

/// Maximum number of best-selling products reported per seller
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Per-seller accumulation state for one analysis pass
pub struct SalesLedger<'a> {
    /// Statistics in input order until ranking
    stats: Vec<SellerStat>,
    /// Map of seller ID to position in `stats`
    seller_index: HashMap<&'a str, usize>,
    /// Map of sku to product card
    product_index: HashMap<&'a str, &'a Product>,
}

impl<'a> SalesLedger<'a> {
    /// Create one empty stat per seller and index sellers and products
    /// Duplicate seller IDs or skus resolve to the last entry
    pub fn new(data: &'a Dataset) -> Self {
        let stats: Vec<SellerStat> = data.sellers.iter().map(SellerStat::new).collect();

        let seller_index = data
            .sellers
            .iter()
            .enumerate()
            .map(|(position, seller)| (seller.id.as_str(), position))
            .collect();

        let product_index = data
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        Self {
            stats,
            seller_index,
            product_index,
        }
    }

    /// Apply one purchase record to its seller's statistics
    ///
    /// Every record counts as a sale, even one without items. Records that
    /// reference an unknown seller or product fail the whole analysis.
    pub fn record_purchase(
        &mut self,
        record: &PurchaseRecord,
        revenue_strategy: &dyn RevenueStrategy,
    ) -> Result<()> {
        let position = *self
            .seller_index
            .get(record.seller_id.as_str())
            .ok_or_else(|| AnalysisError::UnknownSeller(record.seller_id.clone()))?;

        let stat = &mut self.stats[position];
        stat.record_sale();

        for item in record.line_items() {
            let product = self
                .product_index
                .get(item.sku.as_str())
                .ok_or_else(|| AnalysisError::UnknownProduct(item.sku.clone()))?;

            let cost = product.purchase_price * Decimal::from(item.quantity);
            let revenue = revenue_strategy.revenue(item);
            stat.add_line(&item.sku, item.quantity, revenue, cost);
        }

        Ok(())
    }

    /// Get statistics in their current order
    pub fn stats(&self) -> &[SellerStat] {
        &self.stats
    }

    /// Consume the ledger and return the statistics ranked by profit
    /// Sellers with equal profit keep their input order
    pub fn into_ranked(self) -> Vec<SellerStat> {
        let mut stats = self.stats;
        stats.sort_by(|a, b| b.profit.cmp(&a.profit));
        stats
    }
}

/// Compute the ranked per-seller report for a dataset
///
/// Validation happens before any accumulation: an empty seller list is
/// [`AnalysisError::InvalidInput`], an unset strategy is
/// [`AnalysisError::MissingStrategy`].
pub fn analyze_sales_data(data: &Dataset, options: &AnalyzeOptions) -> Result<Vec<SellerReport>> {
    if data.sellers.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "'sellers' must not be empty".into(),
        ));
    }

    let (revenue_strategy, bonus_strategy) = options.strategies()?;

    let mut ledger = SalesLedger::new(data);
    debug!(
        "Indexed {} sellers and {} products",
        data.sellers.len(),
        data.products.len()
    );

    for record in &data.purchase_records {
        ledger.record_purchase(record, revenue_strategy)?;
    }
    debug!("Accumulated {} purchase records", data.purchase_records.len());

    let ranked = ledger.into_ranked();
    let total = ranked.len();

    let reports: Vec<SellerReport> = ranked
        .iter()
        .enumerate()
        .map(|(rank, stat)| {
            let bonus = bonus_strategy.bonus(rank, total, stat);
            SellerReport {
                seller_id: stat.id.clone(),
                name: stat.name.clone(),
                revenue: round_money(stat.revenue),
                profit: round_money(stat.profit),
                sales_count: stat.sales_count,
                top_products: stat.top_products(TOP_PRODUCTS_LIMIT),
                bonus: round_money(bonus),
            }
        })
        .collect();

    info!(
        "Analyzed {} sellers across {} purchase records",
        reports.len(),
        data.purchase_records.len()
    );

    Ok(reports)
}
