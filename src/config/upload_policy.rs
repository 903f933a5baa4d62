// ==========================================
// 库存阈值计算器 - 上传约束
// ==========================================
// 职责: 固定的扩展名白名单与文件大小上限
// ==========================================

use serde::{Deserialize, Serialize};

/// 允许的扩展名（小写，不含点）
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

/// 文件大小上限（1 MiB，含边界）
pub const MAX_FILE_SIZE_BYTES: u64 = 1_048_576;

/// 上传约束
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPolicy {
    pub allowed_extensions: Vec<String>,
    pub max_file_size_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            max_file_size_bytes: MAX_FILE_SIZE_BYTES,
        }
    }
}

impl UploadPolicy {
    /// 扩展名是否在白名单内（大小写不敏感）
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }

    /// 大小是否在上限内
    pub fn allows_size(&self, size: u64) -> bool {
        size <= self.max_file_size_bytes
    }
}
