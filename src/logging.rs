// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=inventory_threshold=trace
///
/// # 示例
/// ```no_run
/// use inventory_threshold::logging;
/// logging::init();
/// ```
pub fn init() {
    init_with_filter("info");
}

/// 以指定过滤器初始化（RUST_LOG 优先）
///
/// 日志写入 stderr，stdout 留给计算结果
pub fn init_with_filter(default_filter: &str) {
    init_with(default_filter, false);
}

/// 完整初始化
///
/// # 参数
/// - default_filter: RUST_LOG 未设置时使用的过滤器
/// - json: 是否输出 JSON 行格式（便于日志采集）
pub fn init_with(default_filter: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
