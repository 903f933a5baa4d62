// ==========================================
// 库存阈值计算器 - 行校验器
// ==========================================
// 职责: 按字段约束表校验通用行，生成 SalesRecord
// 规则: 严格校验，不做类型转换；任一行失败则整批拒绝
// ==========================================

use crate::domain::{CellValue, RawRow, SalesRecord};
use crate::importer::error::{ImportError, ImportResult, SchemaViolation, ViolationKind};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, warn};

/// 日志中最多逐条输出的违规数
const MAX_LOGGED_VIOLATIONS: usize = 20;

// ==========================================
// 字段约束表
// ==========================================

/// 字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
        }
    }
}

/// 单字段约束
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub non_empty: bool,
}

/// SalesRecord 的字段约束（唯一事实来源）
pub const SALES_RECORD_SCHEMA: [FieldRule; 6] = [
    FieldRule { name: "product_id", kind: FieldKind::Text, non_empty: true },
    FieldRule { name: "product_name", kind: FieldKind::Text, non_empty: false },
    FieldRule { name: "date", kind: FieldKind::Date, non_empty: false },
    FieldRule { name: "inventory_level", kind: FieldKind::Number, non_empty: false },
    FieldRule { name: "orders", kind: FieldKind::Number, non_empty: false },
    FieldRule { name: "lead_time_days", kind: FieldKind::Number, non_empty: false },
];

/// 通过校验的字段值
#[derive(Debug, Clone, PartialEq)]
enum TypedValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl TypedValue {
    fn into_text(self) -> Option<String> {
        match self {
            TypedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    fn into_number(self) -> Option<f64> {
        match self {
            TypedValue::Number(n) => Some(n),
            _ => None,
        }
    }

    fn into_date(self) -> Option<NaiveDate> {
        match self {
            TypedValue::Date(d) => Some(d),
            _ => None,
        }
    }
}

impl FieldRule {
    /// 校验单元格，返回类型化的值
    fn check(&self, cell: Option<&CellValue>) -> Result<TypedValue, ViolationKind> {
        let cell = cell.ok_or(ViolationKind::Missing)?;
        match (self.kind, cell) {
            (FieldKind::Text, CellValue::Text(s)) => {
                if self.non_empty && s.trim().is_empty() {
                    Err(ViolationKind::Empty)
                } else {
                    Ok(TypedValue::Text(s.clone()))
                }
            }
            (FieldKind::Number, CellValue::Number(n)) if n.is_finite() => {
                Ok(TypedValue::Number(*n))
            }
            (FieldKind::Date, CellValue::Date(d)) => Ok(TypedValue::Date(*d)),
            (kind, other) => Err(ViolationKind::WrongType {
                expected: kind.name(),
                found: other.kind_name(),
            }),
        }
    }
}

// ==========================================
// RowValidator
// ==========================================
pub struct RowValidator {
    schema: &'static [FieldRule],
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowValidator {
    pub fn new() -> Self {
        Self {
            schema: &SALES_RECORD_SCHEMA,
        }
    }

    /// 校验单行
    ///
    /// # 返回
    /// - Ok(SalesRecord): 全部字段合规
    /// - Err(Vec<SchemaViolation>): 该行所有违规
    pub fn validate_row(&self, row: &RawRow) -> Result<SalesRecord, Vec<SchemaViolation>> {
        let mut violations = Vec::new();
        let mut fields: HashMap<&'static str, TypedValue> = HashMap::new();

        if row.stray_cells > 0 {
            violations.push(SchemaViolation {
                row_number: row.row_number,
                field: "*".to_string(),
                kind: ViolationKind::MalformedRow {
                    stray_cells: row.stray_cells,
                },
            });
        }

        for rule in self.schema {
            match rule.check(row.get(rule.name)) {
                Ok(value) => {
                    fields.insert(rule.name, value);
                }
                Err(kind) => violations.push(SchemaViolation {
                    row_number: row.row_number,
                    field: rule.name.to_string(),
                    kind,
                }),
            }
        }

        if !violations.is_empty() {
            return Err(violations);
        }

        build_record(fields).ok_or_else(|| {
            vec![SchemaViolation {
                row_number: row.row_number,
                field: "*".to_string(),
                kind: ViolationKind::Missing,
            }]
        })
    }

    /// 原子化校验整批行：任一行失败则整批拒绝
    pub fn validate_all(&self, rows: &[RawRow]) -> ImportResult<Vec<SalesRecord>> {
        let mut records = Vec::with_capacity(rows.len());
        let mut violations = Vec::new();

        for row in rows {
            match self.validate_row(row) {
                Ok(record) => records.push(record),
                Err(mut v) => violations.append(&mut v),
            }
        }

        if violations.is_empty() {
            debug!(rows = records.len(), "行校验通过");
            return Ok(records);
        }

        for v in violations.iter().take(MAX_LOGGED_VIOLATIONS) {
            warn!(row = v.row_number, field = %v.field, violation = %v, "数据格式违规");
        }
        warn!(total = violations.len(), "行校验失败，整批拒绝");

        Err(ImportError::SchemaViolation(violations))
    }
}

/// 由已校验字段组装 SalesRecord（字段齐全时必然成功）
fn build_record(mut fields: HashMap<&'static str, TypedValue>) -> Option<SalesRecord> {
    Some(SalesRecord {
        product_id: fields.remove("product_id")?.into_text()?,
        product_name: fields.remove("product_name")?.into_text()?,
        date: fields.remove("date")?.into_date()?,
        inventory_level: fields.remove("inventory_level")?.into_number()?,
        orders: fields.remove("orders")?.into_number()?,
        lead_time_days: fields.remove("lead_time_days")?.into_number()?,
    })
}
