// ==========================================
// 库存阈值计算器 - 流程编排器
// ==========================================
// 流程: 扩展名 → 大小 → 解析 → 校验 → 聚合 → 阈值计算
// 规则: 任一步失败立即短路；不返回部分结果
// 并发: 每次调用的工作状态均为局部变量，不跨调用共享
// ==========================================

use crate::config::UploadPolicy;
use crate::domain::{ProductResult, RawRow};
use crate::engine::aggregator::Aggregator;
use crate::engine::error::PipelineResult;
use crate::engine::threshold_calculator::ThresholdCalculator;
use crate::importer::{check_upload, RowValidator, UniversalSheetParser, UploadedFile};
use crate::perf::PerfGuard;
use tracing::{debug, info, info_span};
use uuid::Uuid;

// ==========================================
// ThresholdPipeline - 阈值计算流程
// ==========================================
pub struct ThresholdPipeline {
    policy: UploadPolicy,
    parser: UniversalSheetParser,
    validator: RowValidator,
    aggregator: Aggregator,
    calculator: ThresholdCalculator,
}

impl ThresholdPipeline {
    /// 创建流程实例
    ///
    /// # 参数
    /// - policy: 上传约束
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            parser: UniversalSheetParser,
            validator: RowValidator::new(),
            aggregator: Aggregator::new(),
            calculator: ThresholdCalculator::new(),
        }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// 执行完整计算流程（同步，不可中断）
    ///
    /// # 参数
    /// - file: 上传文件
    ///
    /// # 返回
    /// - Ok(Vec<ProductResult>): 每个产品一条结果，顺序不保证；表头以外无数据时为空
    /// - Err(PipelineError): 第一个失败步骤的错误
    pub fn run(&self, file: &UploadedFile) -> PipelineResult<Vec<ProductResult>> {
        let run_id = Uuid::new_v4();
        let span = info_span!("threshold_pipeline", run_id = %run_id, file_name = %file.name);
        let _enter = span.enter();
        let _perf = PerfGuard::new("pipeline.run");

        info!(size_bytes = file.size_bytes(), "开始计算库存阈值");

        // === 步骤 1-2: 扩展名与大小检查 ===
        debug!("步骤 1-2: 上传约束检查");
        let format = check_upload(file, &self.policy)?;

        // === 步骤 3: 解析 ===
        debug!(format = ?format, "步骤 3: 解析文件");
        let rows = {
            let _perf = PerfGuard::new("pipeline.parse");
            self.parser.parse(format, &file.bytes)?
        };
        info!(rows = rows.len(), "文件解析完成");

        // === 步骤 4-5: 校验 + 聚合 + 计算 ===
        let results = self.process_rows(&rows)?;
        info!(products = results.len(), "库存阈值计算完成");

        Ok(results)
    }

    /// 从已解析的行开始执行（校验 → 聚合 → 计算）
    pub fn process_rows(&self, rows: &[RawRow]) -> PipelineResult<Vec<ProductResult>> {
        debug!("步骤 4: 行校验");
        let records = self.validator.validate_all(rows)?;

        debug!("步骤 5: 聚合与阈值计算");
        let groups = self.aggregator.aggregate(&records);

        let mut results = Vec::with_capacity(groups.len());
        for aggregate in groups.into_values() {
            results.push(self.calculator.calculate(aggregate)?);
        }

        Ok(results)
    }
}

impl Default for ThresholdPipeline {
    fn default() -> Self {
        Self::new(UploadPolicy::default())
    }
}
