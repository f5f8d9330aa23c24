mod common;

use common::make_seller;
use rust_decimal_macros::dec;
use sales_analytics::models::{SellerStat, TopProduct};

fn new_stat() -> SellerStat {
    SellerStat::new(&make_seller("seller_1", "Alexey", "Petrov"))
}

#[test]
fn test_stat_creation() {
    let stat = new_stat();

    assert_eq!(stat.id, "seller_1");
    assert_eq!(stat.name, "Alexey Petrov");
    assert_eq!(stat.revenue, dec!(0));
    assert_eq!(stat.profit, dec!(0));
    assert_eq!(stat.sales_count, 0);
    assert!(stat.products_sold.is_empty());
}

#[test]
fn test_record_sale_counts_records() {
    let mut stat = new_stat();

    stat.record_sale();
    stat.record_sale();

    assert_eq!(stat.sales_count, 2);
    // Counting a sale does not touch the money accumulators
    assert_eq!(stat.revenue, dec!(0));
    assert_eq!(stat.profit, dec!(0));
}

#[test]
fn test_add_line_accumulates_revenue_and_profit() {
    let mut stat = new_stat();

    stat.add_line("SKU_001", 2, dec!(180), dec!(100));
    stat.add_line("SKU_002", 3, dec!(90), dec!(60));

    assert_eq!(stat.revenue, dec!(270));
    assert_eq!(stat.profit, dec!(110));
}

#[test]
fn test_add_line_can_produce_loss() {
    let mut stat = new_stat();

    stat.add_line("SKU_001", 1, dec!(30), dec!(50));

    assert_eq!(stat.profit, dec!(-20));
}

#[test]
fn test_products_sold_sums_quantities_per_sku() {
    let mut stat = new_stat();

    stat.add_line("SKU_001", 2, dec!(10), dec!(5));
    stat.add_line("SKU_002", 1, dec!(10), dec!(5));
    stat.add_line("SKU_001", 4, dec!(10), dec!(5));

    assert_eq!(stat.products_sold.len(), 2);
    assert_eq!(stat.products_sold["SKU_001"], 6);
    assert_eq!(stat.products_sold["SKU_002"], 1);
}

#[test]
fn test_zero_quantity_not_recorded_as_sold() {
    let mut stat = new_stat();

    stat.add_line("SKU_001", 0, dec!(0), dec!(0));

    assert!(stat.products_sold.is_empty());
}

#[test]
fn test_top_products_sorted_by_quantity() {
    let mut stat = new_stat();

    stat.add_line("SKU_A", 1, dec!(1), dec!(0));
    stat.add_line("SKU_B", 7, dec!(1), dec!(0));
    stat.add_line("SKU_C", 3, dec!(1), dec!(0));

    let top = stat.top_products(10);
    let quantities: Vec<u64> = top.iter().map(|p| p.quantity).collect();

    assert_eq!(quantities, vec![7, 3, 1]);
    assert_eq!(top[0].sku, "SKU_B");
}

#[test]
fn test_top_products_ties_ordered_by_sku() {
    let mut stat = new_stat();

    stat.add_line("SKU_Z", 5, dec!(1), dec!(0));
    stat.add_line("SKU_A", 5, dec!(1), dec!(0));
    stat.add_line("SKU_M", 9, dec!(1), dec!(0));

    let top = stat.top_products(10);

    assert_eq!(
        top,
        vec![
            TopProduct { sku: "SKU_M".into(), quantity: 9 },
            TopProduct { sku: "SKU_A".into(), quantity: 5 },
            TopProduct { sku: "SKU_Z".into(), quantity: 5 },
        ]
    );
}

#[test]
fn test_top_products_truncated_to_limit() {
    let mut stat = new_stat();

    for i in 1..=12u32 {
        stat.add_line(&format!("SKU_{:03}", i), i, dec!(1), dec!(0));
    }

    let top = stat.top_products(10);

    assert_eq!(top.len(), 10);
    assert_eq!(top[0].quantity, 12);
    assert_eq!(top[9].quantity, 3);

    // The two smallest sellers are cut: 1 + 2 units
    let reported: u64 = top.iter().map(|p| p.quantity).sum();
    let sold: u64 = stat.products_sold.values().sum();
    assert_eq!(sold - reported, 3);
}

#[test]
fn test_products_sold_does_not_overflow_line_quantity_range() {
    let mut stat = new_stat();

    stat.add_line("SKU_001", 3_000_000_000, dec!(0), dec!(0));
    stat.add_line("SKU_001", 3_000_000_000, dec!(0), dec!(0));

    assert_eq!(stat.products_sold["SKU_001"], 6_000_000_000);
    assert_eq!(stat.top_products(10)[0].quantity, 6_000_000_000);
}
