// ==========================================
// 库存阈值计算器 - API 层
// ==========================================
// 职责: 提供边界 API，供 CLI 或其他宿主调用
// ==========================================

pub mod error;
pub mod threshold_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use threshold_api::{CalculationResponse, ThresholdApi, ThresholdService};
