// ==========================================
// 库存阈值计算器 - 阈值计算引擎
// ==========================================
// 职责: ProductAggregate → ProductResult
// 顺序: 排序 → 均值取整 → 极值 → 安全库存 → 三档阈值
// 红线: 安全库存与阈值使用已取整的均值计算（先取整后相乘）
// ==========================================

use crate::domain::{ProductAggregate, ProductResult, Thresholds};
use crate::engine::error::{EngineError, EngineResult};
use tracing::debug;

/// 四舍五入（0.5 向正无穷进位）
///
/// 结果超出 i64 范围或非有限值时返回 None
pub fn round_half_up(value: f64) -> Option<i64> {
    let rounded = (value + 0.5).floor();
    // i64::MAX as f64 == 2^63，本身已越界
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Some(rounded as i64)
    } else {
        None
    }
}

/// 取整，越界时报告所在产品与指标
fn round_checked(value: f64, product_id: &str, metric: &'static str) -> EngineResult<i64> {
    round_half_up(value).ok_or_else(|| EngineError::Overflow {
        product_id: product_id.to_string(),
        metric,
    })
}

/// 阈值 = 取整项 + 安全库存（溢出检查）
fn add_checked(
    base: i64,
    safety_stock: i64,
    product_id: &str,
    metric: &'static str,
) -> EngineResult<i64> {
    base.checked_add(safety_stock)
        .ok_or_else(|| EngineError::Overflow {
            product_id: product_id.to_string(),
            metric,
        })
}

pub struct ThresholdCalculator;

impl ThresholdCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 计算单个产品的统计指标与阈值
    ///
    /// # 参数
    /// - aggregate: 产品累计状态（被消费）
    ///
    /// # 返回
    /// - Ok(ProductResult)
    /// - Err(EngineError::EmptyGroup): 无日明细
    /// - Err(EngineError::Overflow): 指标超出 i64 范围
    pub fn calculate(&self, aggregate: ProductAggregate) -> EngineResult<ProductResult> {
        let ProductAggregate {
            product_id,
            product_name,
            mut sales_data,
            total_daily_sales,
            total_lead_time_days,
            days_count,
        } = aggregate;

        if sales_data.is_empty() || days_count == 0 {
            return Err(EngineError::EmptyGroup { product_id });
        }

        // 1. 按日期升序（稳定排序，同日保持原行序）
        sales_data.sort_by_key(|entry| entry.date);

        // 2-3. 均值取整
        let days = days_count as f64;
        let avg_daily_sales =
            round_checked(total_daily_sales / days, &product_id, "avg_daily_sales")?;
        let avg_lead_time_days =
            round_checked(total_lead_time_days / days, &product_id, "avg_lead_time_days")?;

        // 4. 日销量极值
        let (minimum_daily_sales, maximum_daily_sales) = sales_data.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), entry| (min.min(entry.orders), max.max(entry.orders)),
        );

        // 5. 安全库存（基于已取整的均值）
        let lead = avg_lead_time_days as f64;
        let safety_stock = round_checked(
            (maximum_daily_sales - avg_daily_sales as f64) * lead,
            &product_id,
            "safety_stock",
        )?;

        // 6. 三档阈值，各自取整后叠加安全库存
        let low = round_checked(minimum_daily_sales * lead, &product_id, "low")?;
        let medium = round_checked(avg_daily_sales as f64 * lead, &product_id, "medium")?;
        let high = round_checked(maximum_daily_sales * lead, &product_id, "high")?;
        let thresholds = Thresholds {
            low: add_checked(low, safety_stock, &product_id, "low")?,
            medium: add_checked(medium, safety_stock, &product_id, "medium")?,
            high: add_checked(high, safety_stock, &product_id, "high")?,
        };

        debug!(
            product_id = %product_id,
            avg_daily_sales,
            avg_lead_time_days,
            safety_stock,
            low = thresholds.low,
            medium = thresholds.medium,
            high = thresholds.high,
            "阈值计算完成"
        );

        Ok(ProductResult {
            product_id,
            product_name,
            sales_data,
            total_daily_sales,
            total_lead_time_days,
            days_count,
            avg_daily_sales,
            avg_lead_time_days,
            minimum_daily_sales,
            maximum_daily_sales,
            safety_stock,
            thresholds,
        })
    }
}

impl Default for ThresholdCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SalesRecord;
    use chrono::NaiveDate;

    fn aggregate_of(rows: &[(u32, f64, f64)]) -> ProductAggregate {
        let mut agg = ProductAggregate::new("P001", "Widget");
        for (day, orders, lead) in rows {
            agg.push(&SalesRecord {
                product_id: "P001".to_string(),
                product_name: "Widget".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, *day).unwrap(),
                inventory_level: 40.0 + *day as f64,
                orders: *orders,
                lead_time_days: *lead,
            });
        }
        agg
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(10.0 / 3.0), Some(3));
        assert_eq!(round_half_up(5.5), Some(6));
        assert_eq!(round_half_up(2.4999), Some(2));
        assert_eq!(round_half_up(-2.5), Some(-2));
        assert_eq!(round_half_up(-2.6), Some(-3));
    }

    #[test]
    fn test_round_half_up_out_of_range() {
        assert_eq!(round_half_up(1e19), None);
        assert_eq!(round_half_up(-1e19), None);
        assert_eq!(round_half_up(f64::INFINITY), None);
        assert_eq!(round_half_up(f64::NAN), None);
        assert_eq!(round_half_up(9.0e18), Some(9_000_000_000_000_000_000));
    }

    #[test]
    fn test_huge_orders_report_overflow() {
        // 均值与安全库存均为 5e18，medium = 5e18 + 5e18 越界
        let agg = aggregate_of(&[(1, 0.0, 1.0), (2, 1e19, 1.0)]);

        let err = ThresholdCalculator::new().calculate(agg).unwrap_err();

        assert!(matches!(
            err,
            EngineError::Overflow { ref product_id, .. } if product_id == "P001"
        ));
    }

    #[test]
    fn test_threshold_sum_overflow_detected() {
        // 安全库存 4e18；medium = 8e18 仍可表示，high = 8e18 + 4e18 越界
        let agg = aggregate_of(&[(1, 0.0, 1.0), (2, 8e18, 1.0)]);

        let err = ThresholdCalculator::new().calculate(agg).unwrap_err();

        assert_eq!(
            err,
            EngineError::Overflow {
                product_id: "P001".to_string(),
                metric: "high"
            }
        );
    }

    #[test]
    fn test_threshold_formula_reference_scenario() {
        let agg = aggregate_of(&[(1, 2.0, 3.0), (2, 5.0, 3.0), (3, 8.0, 3.0)]);

        let result = ThresholdCalculator::new().calculate(agg).unwrap();

        assert_eq!(result.avg_daily_sales, 5);
        assert_eq!(result.avg_lead_time_days, 3);
        assert_eq!(result.minimum_daily_sales, 2.0);
        assert_eq!(result.maximum_daily_sales, 8.0);
        assert_eq!(result.safety_stock, 9);
        assert_eq!(
            result.thresholds,
            Thresholds {
                low: 15,
                medium: 24,
                high: 33
            }
        );
        assert_eq!(result.total_daily_sales, 15.0);
        assert_eq!(result.total_lead_time_days, 9.0);
        assert_eq!(result.days_count, 3);
    }

    #[test]
    fn test_averages_rounded_before_multiplying() {
        // 订单 [1, 2] → 均值 1.5 → 2；提前期 [2, 3] → 2.5 → 3
        // 安全库存 = round((2 - 2) * 3) = 0；若用未取整均值则为 round(0.5 * 2.5) = 1
        let agg = aggregate_of(&[(1, 1.0, 2.0), (2, 2.0, 3.0)]);

        let result = ThresholdCalculator::new().calculate(agg).unwrap();

        assert_eq!(result.avg_daily_sales, 2);
        assert_eq!(result.avg_lead_time_days, 3);
        assert_eq!(result.safety_stock, 0);
        assert_eq!(result.thresholds.low, 3);
        assert_eq!(result.thresholds.medium, 6);
        assert_eq!(result.thresholds.high, 6);
    }

    #[test]
    fn test_sorts_sales_data_by_date_stably() {
        let mut agg = aggregate_of(&[(5, 1.0, 1.0), (2, 2.0, 1.0)]);
        // 同日两条记录，保持原有顺序
        agg.push(&SalesRecord {
            product_id: "P001".to_string(),
            product_name: "Widget".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            inventory_level: 0.0,
            orders: 9.0,
            lead_time_days: 1.0,
        });

        let result = ThresholdCalculator::new().calculate(agg).unwrap();

        let orders: Vec<f64> = result.sales_data.iter().map(|e| e.orders).collect();
        assert_eq!(orders, vec![2.0, 9.0, 1.0]);
    }

    #[test]
    fn test_constant_demand_thresholds_coincide() {
        let agg = aggregate_of(&[(1, 4.0, 2.0), (2, 4.0, 2.0)]);

        let result = ThresholdCalculator::new().calculate(agg).unwrap();

        assert_eq!(result.safety_stock, 0);
        assert_eq!(result.thresholds.low, result.thresholds.medium);
        assert_eq!(result.thresholds.medium, result.thresholds.high);
    }

    #[test]
    fn test_empty_group_rejected() {
        let agg = ProductAggregate::new("P404", "Ghost");

        let err = ThresholdCalculator::new().calculate(agg).unwrap_err();

        assert_eq!(
            err,
            EngineError::EmptyGroup {
                product_id: "P404".to_string()
            }
        );
    }
}
