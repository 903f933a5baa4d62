// ==========================================
// 库存阈值计算器 - 配置层
// ==========================================
// 职责: 上传策略（固定常量）与运行时配置（语言/日志/输出格式）
// 加载顺序: 默认值 → 配置文件 → 环境变量
// ==========================================

pub mod config_manager;
pub mod upload_policy;

// 重导出核心配置
pub use config_manager::{config_keys, AppConfig, ConfigError, ConfigManager, OutputFormat};
pub use upload_policy::{UploadPolicy, ALLOWED_EXTENSIONS, MAX_FILE_SIZE_BYTES};
