// ==========================================
// 库存阈值计算器 - 文本报告
// ==========================================
// 职责: 将计算结果渲染为终端可读文本（标签随语言切换）
// 注意: 仅用于展示，JSON 输出不经过此模块
// ==========================================

use crate::domain::ProductResult;
use crate::i18n;

/// 以当前语言渲染结果
pub fn render_text(results: &[ProductResult]) -> String {
    render_text_in(&i18n::current_locale(), results)
}

/// 以指定语言渲染结果（按 product_id 排序）
pub fn render_text_in(locale: &str, results: &[ProductResult]) -> String {
    let label = |key: &str| i18n::t_in(locale, key);
    let units = label("report.units");
    let days = label("report.days");

    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", label("report.title")));

    if results.is_empty() {
        out.push_str(&label("report.empty"));
        out.push('\n');
        return out;
    }

    let mut sorted: Vec<&ProductResult> = results.iter().collect();
    sorted.sort_by(|a, b| a.product_id.cmp(&b.product_id));

    for r in sorted {
        out.push('\n');
        out.push_str(&format!(
            "{}: {} ({})\n",
            label("report.product_id"),
            r.product_id,
            r.product_name
        ));
        out.push_str(&format!(
            "  {}: {} {}\n",
            label("report.avg_daily_sales"),
            r.avg_daily_sales,
            units
        ));
        out.push_str(&format!(
            "  {}: {} {}\n",
            label("report.minimum_daily_sales"),
            r.minimum_daily_sales,
            units
        ));
        out.push_str(&format!(
            "  {}: {} {}\n",
            label("report.maximum_daily_sales"),
            r.maximum_daily_sales,
            units
        ));
        out.push_str(&format!(
            "  {}: {}\n",
            label("report.total_days"),
            r.days_count
        ));
        out.push_str(&format!(
            "  {}: {} {}\n",
            label("report.avg_lead_time"),
            r.avg_lead_time_days,
            days
        ));
        out.push_str(&format!(
            "  {}: {} {}\n",
            label("report.safety_stock"),
            r.safety_stock,
            units
        ));
        out.push_str(&format!("  {}:\n", label("report.thresholds")));
        out.push_str(&format!(
            "    {}: {}\n",
            label("report.low"),
            r.thresholds.low
        ));
        out.push_str(&format!(
            "    {}: {}\n",
            label("report.medium"),
            r.thresholds.medium
        ));
        out.push_str(&format!(
            "    {}: {}\n",
            label("report.high"),
            r.thresholds.high
        ));

        if let Some(zone) = r.latest_zone() {
            out.push_str(&format!("  {}: {}\n", label("report.latest_zone"), zone));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SalesEntry, Thresholds};
    use chrono::NaiveDate;

    fn result(product_id: &str, inventory_level: f64) -> ProductResult {
        ProductResult {
            product_id: product_id.to_string(),
            product_name: format!("Item {}", product_id),
            sales_data: vec![SalesEntry {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                inventory_level,
                orders: 5.0,
                lead_time_days: 3.0,
            }],
            total_daily_sales: 5.0,
            total_lead_time_days: 3.0,
            days_count: 1,
            avg_daily_sales: 5,
            avg_lead_time_days: 3,
            minimum_daily_sales: 5.0,
            maximum_daily_sales: 5.0,
            safety_stock: 0,
            thresholds: Thresholds {
                low: 15,
                medium: 15,
                high: 15,
            },
        }
    }

    #[test]
    fn test_render_sorted_by_product() {
        let text = render_text_in("en", &[result("B2", 20.0), result("A1", 10.0)]);

        let a = text.find("Product ID: A1").unwrap();
        let b = text.find("Product ID: B2").unwrap();
        assert!(a < b);
        assert!(text.contains("Low Threshold: 15"));
        assert!(text.contains("Latest Stock Zone: CRITICAL"));
        assert!(text.contains("Latest Stock Zone: HEALTHY"));
    }

    #[test]
    fn test_render_empty() {
        let text = render_text_in("en", &[]);
        assert!(text.starts_with("=== Inventory Threshold Results ==="));
        assert!(text.contains("No products found in file"));
    }

    #[test]
    fn test_render_chinese_labels() {
        let text = render_text_in("zh-CN", &[result("A1", 10.0)]);
        assert!(text.contains("安全库存: 0 件"));
    }
}
