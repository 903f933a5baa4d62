// ==========================================
// 库存阈值计算器 - 导入层
// ==========================================
// 职责: 上传约束检查、表格解析、行校验
// 支持: Excel (.xlsx/.xls), CSV (.csv)
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod importer_trait;
pub mod row_validator;
pub mod upload;

// 重导出核心类型
pub use error::{ImportError, ImportResult, SchemaViolation, ViolationKind};
pub use file_parser::{CsvParser, ExcelParser, UniversalSheetParser};
pub use importer_trait::SheetParser;
pub use row_validator::{FieldKind, FieldRule, RowValidator, SALES_RECORD_SCHEMA};
pub use upload::{check_upload, FileFormat, UploadedFile};
