//! Pluggable revenue and bonus policies.
//!
//! The analyzer never hard-codes how a line item turns into revenue or how a
//! ranked seller turns into a bonus; both are supplied through
//! [`AnalyzeOptions`]. Plain functions and closures with the right signature
//! implement the traits automatically.

use rust_decimal::Decimal;

use crate::error::{AnalysisError, Result};
use crate::models::{LineItem, SellerStat};

/// Computes the revenue contribution of a single line item
pub trait RevenueStrategy {
    fn revenue(&self, item: &LineItem) -> Decimal;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem) -> Decimal,
{
    fn revenue(&self, item: &LineItem) -> Decimal {
        self(item)
    }
}

/// Computes a seller's bonus from its zero-based profit rank
pub trait BonusStrategy {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> Decimal;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> Decimal,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> Decimal {
        self(rank, total, seller)
    }
}

/// Standard revenue policy: `sale_price * quantity * (1 - discount / 100)`
pub fn calculate_simple_revenue(item: &LineItem) -> Decimal {
    let discount = Decimal::ONE - item.discount / Decimal::ONE_HUNDRED;
    item.sale_price * Decimal::from(item.quantity) * discount
}

/// Standard bonus policy by profit rank
///
/// | rank          | bonus          |
/// |---------------|----------------|
/// | 0             | profit * 0.15  |
/// | 1 or 2        | profit * 0.10  |
/// | total - 1     | 0              |
/// | anything else | profit * 0.05  |
///
/// The branches are checked top to bottom, so a lone seller (rank 0 of 1)
/// gets the top-rank bonus.
pub fn calculate_bonus_by_profit(rank: usize, total: usize, seller: &SellerStat) -> Decimal {
    let profit = seller.profit;
    if rank == 0 {
        profit * Decimal::new(15, 2)
    } else if rank == 1 || rank == 2 {
        profit * Decimal::new(10, 2)
    } else if rank + 1 == total {
        Decimal::ZERO
    } else {
        profit * Decimal::new(5, 2)
    }
}

/// Resolve a revenue policy by its configured name
pub fn revenue_strategy(name: &str) -> Result<Box<dyn RevenueStrategy>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "simple" => Ok(Box::new(calculate_simple_revenue)),
        _ => Err(AnalysisError::InvalidStrategyType(name.to_string())),
    }
}

/// Resolve a bonus policy by its configured name
pub fn bonus_strategy(name: &str) -> Result<Box<dyn BonusStrategy>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "profit" => Ok(Box::new(calculate_bonus_by_profit)),
        _ => Err(AnalysisError::InvalidStrategyType(name.to_string())),
    }
}

/// Strategies handed to the analyzer
///
/// Either slot may be left empty; the analyzer rejects such options with
/// [`AnalysisError::MissingStrategy`] before doing any work.
#[derive(Default)]
pub struct AnalyzeOptions {
    pub calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalyzeOptions {
    /// Options with no strategies set
    pub fn new() -> Self {
        Self::default()
    }

    /// Options using the standard revenue and bonus policies
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(calculate_simple_revenue)
            .with_bonus(calculate_bonus_by_profit)
    }

    pub fn with_revenue<S: RevenueStrategy + 'static>(mut self, strategy: S) -> Self {
        self.calculate_revenue = Some(Box::new(strategy));
        self
    }

    pub fn with_bonus<S: BonusStrategy + 'static>(mut self, strategy: S) -> Self {
        self.calculate_bonus = Some(Box::new(strategy));
        self
    }

    /// Both strategies, or the error naming what is missing
    pub fn strategies(&self) -> Result<(&dyn RevenueStrategy, &dyn BonusStrategy)> {
        match (&self.calculate_revenue, &self.calculate_bonus) {
            (Some(revenue), Some(bonus)) => Ok((revenue.as_ref(), bonus.as_ref())),
            (None, Some(_)) => Err(AnalysisError::MissingStrategy(
                "calculate_revenue is not set".into(),
            )),
            (Some(_), None) => Err(AnalysisError::MissingStrategy(
                "calculate_bonus is not set".into(),
            )),
            (None, None) => Err(AnalysisError::MissingStrategy(
                "calculate_revenue and calculate_bonus are not set".into(),
            )),
        }
    }
}
