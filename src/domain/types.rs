// ==========================================
// 库存阈值计算器 - 领域类型定义
// ==========================================
// 职责: 单元格值、库存区间等基础类型
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 单元格值 (Cell Value)
// ==========================================
// 解析器输出的无类型单元格，空单元格不会出现在行映射中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl CellValue {
    /// 类型名称（用于校验报告）
    pub fn kind_name(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "text",
            CellValue::Number(_) => "number",
            CellValue::Bool(_) => "bool",
            CellValue::Date(_) => "date",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Date(d) => write!(f, "{}", d),
        }
    }
}

// ==========================================
// 库存区间 (Stock Zone)
// ==========================================
// 以 low / medium / high 三条阈值线划分四个区间
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockZone {
    Critical, // 低于 low，立即补货
    Low,      // [low, medium)
    Moderate, // [medium, high)
    Healthy,  // >= high
}

impl fmt::Display for StockZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockZone::Critical => write!(f, "CRITICAL"),
            StockZone::Low => write!(f, "LOW"),
            StockZone::Moderate => write!(f, "MODERATE"),
            StockZone::Healthy => write!(f, "HEALTHY"),
        }
    }
}
