// ==========================================
// 库存阈值计算器 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 上传约束错误 =====
    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件过大: {size} 字节（上限 {max} 字节）")]
    FileTooLarge { size: u64, max: u64 },

    // ===== 解析错误 =====
    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据校验错误 =====
    #[error("数据格式校验失败: {} 处违规", .0.len())]
    SchemaViolation(Vec<SchemaViolation>),
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

// ==========================================
// 行级校验违规
// ==========================================

/// 单条违规（定位到行 + 字段）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaViolation {
    pub row_number: usize,
    pub field: String,
    pub kind: ViolationKind,
}

/// 违规类型
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// 必填字段缺失
    Missing,
    /// 类型不符
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    /// 文本为空（非空约束）
    Empty,
    /// 存在无列名的非空单元格
    MalformedRow { stray_cells: usize },
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => {
                write!(f, "行 {} 字段 {}: 缺失", self.row_number, self.field)
            }
            ViolationKind::WrongType { expected, found } => write!(
                f,
                "行 {} 字段 {}: 期望 {}，实际 {}",
                self.row_number, self.field, expected, found
            ),
            ViolationKind::Empty => {
                write!(f, "行 {} 字段 {}: 不能为空", self.row_number, self.field)
            }
            ViolationKind::MalformedRow { stray_cells } => write!(
                f,
                "行 {}: 存在 {} 个无列名的单元格",
                self.row_number, stray_cells
            ),
        }
    }
}
