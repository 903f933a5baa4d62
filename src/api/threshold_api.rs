// ==========================================
// 库存阈值计算 API
// ==========================================
// 职责: 对外唯一的边界操作 calculate_thresholds
// 规则: 结果与错误二选一；解析与计算放入阻塞线程池执行
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::UploadPolicy;
use crate::domain::ProductResult;
use crate::engine::ThresholdPipeline;
use crate::importer::UploadedFile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 计算响应：{ "results": [...] } 或 { "error": "..." }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculationResponse {
    Success { results: Vec<ProductResult> },
    Failure { error: String },
}

impl CalculationResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, CalculationResponse::Success { .. })
    }

    pub fn results(&self) -> Option<&[ProductResult]> {
        match self {
            CalculationResponse::Success { results } => Some(results),
            CalculationResponse::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CalculationResponse::Success { .. } => None,
            CalculationResponse::Failure { error } => Some(error),
        }
    }
}

// ==========================================
// ThresholdService Trait
// ==========================================
// 用途: 宿主（CLI / 桌面壳 / HTTP）依赖的边界接口
// 实现者: ThresholdApi
#[async_trait]
pub trait ThresholdService: Send + Sync {
    /// 上传文件 → 计算结果或用户提示
    async fn calculate_thresholds(&self, file: UploadedFile) -> CalculationResponse;
}

/// 阈值计算API
#[derive(Clone)]
pub struct ThresholdApi {
    pipeline: Arc<ThresholdPipeline>,
}

impl ThresholdApi {
    /// 创建新的ThresholdApi实例
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            pipeline: Arc::new(ThresholdPipeline::new(policy)),
        }
    }

    /// 执行计算，保留结构化错误
    ///
    /// # 返回
    /// - Ok(Vec<ProductResult>): 计算结果
    /// - Err(ApiError): 错误信息
    pub async fn try_calculate(&self, file: UploadedFile) -> ApiResult<Vec<ProductResult>> {
        let pipeline = Arc::clone(&self.pipeline);

        tokio::task::spawn_blocking(move || pipeline.run(&file))
            .await
            .map_err(|e| ApiError::ProcessingError(format!("任务执行失败: {}", e)))?
            .map_err(ApiError::from)
    }
}

impl Default for ThresholdApi {
    fn default() -> Self {
        Self::new(UploadPolicy::default())
    }
}

#[async_trait]
impl ThresholdService for ThresholdApi {
    async fn calculate_thresholds(&self, file: UploadedFile) -> CalculationResponse {
        let file_name = file.name.clone();

        match self.try_calculate(file).await {
            Ok(results) => {
                tracing::info!(
                    file_name = %file_name,
                    products = results.len(),
                    "[calculate_thresholds] 计算成功"
                );
                CalculationResponse::Success { results }
            }
            Err(e) => {
                tracing::error!(
                    file_name = %file_name,
                    code = e.code(),
                    error = %e,
                    "[calculate_thresholds] 计算失败"
                );
                CalculationResponse::Failure {
                    error: e.user_message(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization_shapes() {
        let ok = CalculationResponse::Success { results: vec![] };
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"results":[]}"#);

        let failed = CalculationResponse::Failure {
            error: "File size must be less than 1MB".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&failed).unwrap(),
            r#"{"error":"File size must be less than 1MB"}"#
        );
        assert!(failed.results().is_none());
        assert_eq!(failed.error(), Some("File size must be less than 1MB"));
    }

    #[tokio::test]
    async fn test_try_calculate_unsupported() {
        let api = ThresholdApi::default();
        let err = api
            .try_calculate(UploadedFile::new("report.pdf", vec![1, 2, 3]))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "UNSUPPORTED_FORMAT");
    }
}
