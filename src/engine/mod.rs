// ==========================================
// 库存阈值计算器 - 引擎层
// ==========================================
// 职责: 分组累计、阈值计算、流程编排
// 红线: 计算引擎不做文件解析，所有失败均可定位原因
// ==========================================

pub mod aggregator;
pub mod error;
pub mod orchestrator;
pub mod threshold_calculator;

// 重导出核心引擎
pub use aggregator::Aggregator;
pub use error::{EngineError, EngineResult, PipelineError, PipelineResult};
pub use orchestrator::ThresholdPipeline;
pub use threshold_calculator::{round_half_up, ThresholdCalculator};
