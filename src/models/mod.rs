pub mod dataset;
pub mod product;
pub mod purchase;
pub mod report;
pub mod seller;
pub mod seller_stat;

pub use dataset::{load_dataset, Dataset};
pub use product::Product;
pub use purchase::{LineItem, PurchaseRecord};
pub use report::{round_money, SellerReport, TopProduct};
pub use seller::Seller;
pub use seller_stat::SellerStat;
