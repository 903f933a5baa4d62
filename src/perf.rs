use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Once;
use std::time::Instant;

const SLOW_OP_THRESHOLD_UNSET: u64 = u64::MAX;

static SLOW_OP_THRESHOLD_MS: AtomicU64 = AtomicU64::new(SLOW_OP_THRESHOLD_UNSET);
static SLOW_OP_INIT: Once = Once::new();

/// 慢操作阈值（毫秒）
///
/// 开关：
/// - `INVENTORY_THRESHOLD_SLOW_MS=500` 配置阈值
/// - 未配置时 Debug 为 50ms，Release 为 200ms
pub fn slow_threshold_ms() -> u64 {
    SLOW_OP_INIT.call_once(|| {
        let ms = std::env::var("INVENTORY_THRESHOLD_SLOW_MS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(if cfg!(debug_assertions) { 50 } else { 200 });
        SLOW_OP_THRESHOLD_MS.store(ms, Ordering::Relaxed);
    });
    SLOW_OP_THRESHOLD_MS.load(Ordering::Relaxed)
}

/// 性能统计 Guard：drop 时记录 elapsed_ms，超过阈值时告警
///
/// 使用方式：
/// ```ignore
/// let _perf = inventory_threshold::perf::PerfGuard::new("pipeline.parse");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        let threshold = slow_threshold_ms();

        if threshold > 0 && elapsed_ms >= threshold {
            tracing::warn!(
                target: "perf",
                op = self.op,
                elapsed_ms,
                threshold_ms = threshold,
                "slow operation"
            );
        } else {
            tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");
        }
    }
}
