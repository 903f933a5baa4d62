// ==========================================
// 库存阈值计算器 - 引擎错误类型
// ==========================================

use crate::importer::ImportError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// 聚合中没有任何日明细（聚合器创建规则保证不会发生）
    #[error("产品 {product_id} 没有销售明细，无法计算最小/最大日销量")]
    EmptyGroup { product_id: String },

    /// 指标超出可表示范围（输入数值过大）
    #[error("产品 {product_id} 的 {metric} 超出可表示范围")]
    Overflow {
        product_id: String,
        metric: &'static str,
    },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

// ==========================================
// 流程错误（导入层 + 引擎层）
// ==========================================

/// 计算流程错误
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result 类型别名
pub type PipelineResult<T> = Result<T, PipelineError>;
