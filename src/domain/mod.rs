// ==========================================
// 库存阈值计算器 - 领域模型层
// ==========================================
// 职责: 定义上传行、销售记录、产品聚合与计算结果
// 红线: 不含文件解析逻辑,不含计算逻辑
// ==========================================

pub mod row;
pub mod sales;
pub mod types;

// 重导出核心类型
pub use row::RawRow;
pub use sales::{ProductAggregate, ProductResult, SalesEntry, SalesRecord, Thresholds};
pub use types::{CellValue, StockZone};
