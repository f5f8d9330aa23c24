use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

/// Number of decimal places money values are reported with
pub const MONEY_DP: u32 = 2;

/// Round a money value for reporting (half away from zero)
/// Not `round_dp`: its banker's rounding reports 180.005 as 180.00
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// One entry of a seller's best-selling products
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Final per-seller result of the analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: usize,
    pub top_products: Vec<TopProduct>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}

// Flat row for CSV output, top products folded into one column
#[derive(Serialize)]
struct SellerReportRow<'a> {
    seller_id: &'a str,
    name: &'a str,
    revenue: Decimal,
    profit: Decimal,
    sales_count: usize,
    bonus: Decimal,
    top_products: String,
}

/// Serializes a report as a flat CSV row
pub struct CsvRow<'a>(pub &'a SellerReport);

impl Serialize for CsvRow<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let report = self.0;
        let top_products = report
            .top_products
            .iter()
            .map(|p| format!("{}:{}", p.sku, p.quantity))
            .collect::<Vec<_>>()
            .join(";");

        let row = SellerReportRow {
            seller_id: &report.seller_id,
            name: &report.name,
            revenue: report.revenue,
            profit: report.profit,
            sales_count: report.sales_count,
            bonus: report.bonus,
            top_products,
        };
        row.serialize(serializer)
    }
}
