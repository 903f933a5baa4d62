// ==========================================
// 库存阈值计算器 - API层错误类型
// ==========================================
// 职责: 将导入/引擎错误收敛为四类用户可见错误
// 红线: 诊断细节只进日志，不进入用户提示
// ==========================================

use crate::engine::{EngineError, PipelineError};
use crate::i18n;
use crate::importer::{ImportError, SchemaViolation};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("文件格式不支持: {0}")]
    UnsupportedFormat(String),

    #[error("文件过大: {size} 字节（上限 {max} 字节）")]
    FileTooLarge { size: u64, max: u64 },

    #[error("数据格式校验失败: {} 处违规", .violations.len())]
    InvalidData { violations: Vec<SchemaViolation> },

    #[error("文件处理失败: {0}")]
    ProcessingError(String),
}

impl ApiError {
    /// 稳定的错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ApiError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            ApiError::InvalidData { .. } => "INVALID_DATA",
            ApiError::ProcessingError(_) => "PROCESSING_ERROR",
        }
    }

    /// 用户可见提示（当前语言）
    pub fn user_message(&self) -> String {
        let key = match self {
            ApiError::UnsupportedFormat(_) => "error.unsupported_format",
            ApiError::FileTooLarge { .. } => "error.file_too_large",
            ApiError::InvalidData { .. } => "error.invalid_data",
            ApiError::ProcessingError(_) => "error.processing",
        };
        i18n::t(key)
    }
}

// ==========================================
// 从下层错误转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::UnsupportedFormat(name) => ApiError::UnsupportedFormat(name),
            ImportError::FileTooLarge { size, max } => ApiError::FileTooLarge { size, max },
            ImportError::SchemaViolation(violations) => ApiError::InvalidData { violations },
            ImportError::ExcelParseError(msg) | ImportError::CsvParseError(msg) => {
                ApiError::ProcessingError(msg)
            }
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::ProcessingError(err.to_string())
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Import(e) => e.into(),
            PipelineError::Engine(e) => e.into(),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
