// ==========================================
// 库存阈值计算器 - 上传文件与格式识别
// ==========================================
// 职责: 扩展名检查 → 大小检查（按顺序短路）
// ==========================================

use crate::config::UploadPolicy;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};

/// 支持的文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Xlsx,
    Xls,
    Csv,
}

impl FileFormat {
    /// 根据扩展名识别（大小写不敏感）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "xlsx" => Some(FileFormat::Xlsx),
            "xls" => Some(FileFormat::Xls),
            "csv" => Some(FileFormat::Csv),
            _ => None,
        }
    }
}

/// 上传文件（名称 + 内容）
///
/// 大小一律按 bytes.len() 计算；宿主声明的文件大小不参与校验
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// 实际内容字节数
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// 文件名最后一个点之后的部分；无点时取整个文件名
    pub fn extension(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or("")
    }
}

/// 按上传约束检查文件，返回识别出的格式
pub fn check_upload(file: &UploadedFile, policy: &UploadPolicy) -> ImportResult<FileFormat> {
    let ext = file.extension();

    let format = FileFormat::from_extension(ext)
        .filter(|_| policy.allows_extension(ext))
        .ok_or_else(|| ImportError::UnsupportedFormat(file.name.clone()))?;

    let size = file.size_bytes();
    if !policy.allows_size(size) {
        return Err(ImportError::FileTooLarge {
            size,
            max: policy.max_file_size_bytes,
        });
    }

    Ok(format)
}
