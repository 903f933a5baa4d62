// ==========================================
// 库存阈值计算器 - 聚合器
// ==========================================
// 职责: 按 product_id 分组，单遍累计订单量、提前期与天数
// 规则: product_name 取首次出现的记录；不产生错误
// ==========================================

use crate::domain::{ProductAggregate, SalesRecord};
use std::collections::HashMap;
use tracing::debug;

pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    /// 分组累计（O(n)，产品之间互不影响）
    ///
    /// # 参数
    /// - records: 已校验记录（按原始行序）
    ///
    /// # 返回
    /// - product_id → ProductAggregate；空输入返回空映射
    pub fn aggregate<'a, I>(&self, records: I) -> HashMap<String, ProductAggregate>
    where
        I: IntoIterator<Item = &'a SalesRecord>,
    {
        let mut groups: HashMap<String, ProductAggregate> = HashMap::new();

        for record in records {
            groups
                .entry(record.product_id.clone())
                .or_insert_with(|| {
                    ProductAggregate::new(record.product_id.clone(), record.product_name.clone())
                })
                .push(record);
        }

        debug!(products = groups.len(), "分组累计完成");
        groups
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
