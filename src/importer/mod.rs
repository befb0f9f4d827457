// ==========================================
// 涂装报价系统 - 价格来源层
// ==========================================
// 职责: 油漆报价查询（内置目录价 / CSV 价目表）
// ==========================================

pub mod csv_price_list;
pub mod error;
pub mod price_source;

// 重导出核心类型
pub use csv_price_list::CsvPriceList;
pub use error::{PriceSourceError, PriceSourceResult};
pub use price_source::{CatalogPriceSource, PriceSource};
