// ==========================================
// 库存阈值计算器 - 核心库
// ==========================================
// 职责: 从销售明细表计算每个产品的安全库存与三档补货阈值
// 数据流: 上传文件 → 解析 → 行校验 → 按产品累计 → 阈值计算
// 系统定位: 无状态计算服务，每次请求独立
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 上传校验、表格解析、行校验
pub mod importer;

// 引擎层 - 累计与阈值计算
pub mod engine;

// 配置层 - 上传策略与运行时配置
pub mod config;

// API 层 - 边界接口
pub mod api;

// 文本报告
pub mod report;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CellValue, ProductResult, RawRow, SalesEntry, SalesRecord, StockZone, Thresholds,
};

// 导入
pub use importer::{ImportError, UploadedFile};

// 引擎
pub use engine::{PipelineError, ThresholdPipeline};

// API
pub use api::{ApiError, CalculationResponse, ThresholdApi, ThresholdService};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "inventory-threshold";
