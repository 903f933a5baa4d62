// ==========================================
// 库存阈值计算器 - 销售领域模型
// ==========================================
// 数据流: SalesRecord（行） → ProductAggregate（按产品累计） → ProductResult（输出）
// ==========================================

use crate::domain::types::StockZone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// SalesRecord - 已校验的销售记录
// ==========================================
// 用途: 行校验器输出，每行一条
// 生命周期: 仅在一次计算流程内
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub product_id: String,   // 产品编号（非空）
    pub product_name: String, // 产品名称
    pub date: NaiveDate,      // 日期
    pub inventory_level: f64, // 库存水平（原样保留，允许负数）
    pub orders: f64,          // 当日订单量
    pub lead_time_days: f64,  // 补货提前期（天）
}

impl SalesRecord {
    /// 拆出聚合所需的日明细
    pub fn to_entry(&self) -> SalesEntry {
        SalesEntry {
            date: self.date,
            inventory_level: self.inventory_level,
            orders: self.orders,
            lead_time_days: self.lead_time_days,
        }
    }
}

// ==========================================
// SalesEntry - 产品日明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesEntry {
    pub date: NaiveDate,
    pub inventory_level: f64,
    pub orders: f64,
    pub lead_time_days: f64,
}

// ==========================================
// ProductAggregate - 产品累计状态
// ==========================================
// 不变量: days_count == sales_data.len()
// 所有权: 聚合器独占，计算完成后丢弃
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAggregate {
    pub product_id: String,
    pub product_name: String, // 取首次出现的记录
    pub sales_data: Vec<SalesEntry>,
    pub total_daily_sales: f64,    // Σ orders
    pub total_lead_time_days: f64, // Σ lead_time_days
    pub days_count: usize,
}

impl ProductAggregate {
    /// 以首条记录创建空聚合
    pub fn new(product_id: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            sales_data: Vec::new(),
            total_daily_sales: 0.0,
            total_lead_time_days: 0.0,
            days_count: 0,
        }
    }

    /// 累加一条记录
    pub fn push(&mut self, record: &SalesRecord) {
        self.sales_data.push(record.to_entry());
        self.total_daily_sales += record.orders;
        self.total_lead_time_days += record.lead_time_days;
        self.days_count += 1;
    }
}

// ==========================================
// Thresholds - 三档补货阈值
// ==========================================
// medium 为名义补货点；low/high 以需求极值给出上下界
// 注意: 不保证 low <= medium <= high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
}

impl Thresholds {
    /// 判断库存水平所处区间
    pub fn zone_of(&self, inventory_level: f64) -> StockZone {
        if inventory_level < self.low as f64 {
            StockZone::Critical
        } else if inventory_level < self.medium as f64 {
            StockZone::Low
        } else if inventory_level < self.high as f64 {
            StockZone::Moderate
        } else {
            StockZone::Healthy
        }
    }
}

// ==========================================
// ProductResult - 产品计算结果
// ==========================================
// 用途: 一次计算的最终产物，生成后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResult {
    pub product_id: String,
    pub product_name: String,
    pub sales_data: Vec<SalesEntry>, // 按日期升序
    pub total_daily_sales: f64,
    pub total_lead_time_days: f64,
    pub days_count: usize,

    // ===== 派生指标 =====
    pub avg_daily_sales: i64,
    pub avg_lead_time_days: i64,
    pub minimum_daily_sales: f64,
    pub maximum_daily_sales: f64,
    pub safety_stock: i64,
    pub thresholds: Thresholds,
}

impl ProductResult {
    /// 最新一天的库存所处区间
    pub fn latest_zone(&self) -> Option<StockZone> {
        self.sales_data
            .last()
            .map(|entry| self.thresholds.zone_of(entry.inventory_level))
    }
}
