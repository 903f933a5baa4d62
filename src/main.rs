// ==========================================
// 库存阈值计算器 - 命令行入口
// ==========================================
// 用法:
//   inventory-threshold <file> [--format json|text] [--locale en|zh-CN]
//
// 结果写入 stdout，日志写入 stderr
// ==========================================

use inventory_threshold::api::{CalculationResponse, ThresholdApi, ThresholdService};
use inventory_threshold::config::{ConfigManager, OutputFormat, UploadPolicy};
use inventory_threshold::i18n::{self, t};
use inventory_threshold::importer::UploadedFile;
use inventory_threshold::{logging, report};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// 命令行参数
struct CliArgs {
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    locale: Option<String>,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut cli = CliArgs {
        file: None,
        format: None,
        locale: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--format 需要参数 (json|text)"))?;
                let format = OutputFormat::parse(&value)
                    .ok_or_else(|| anyhow::anyhow!("不支持的输出格式: {}", value))?;
                cli.format = Some(format);
            }
            "--locale" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--locale 需要参数 (en|zh-CN)"))?;
                cli.locale = Some(value);
            }
            _ if arg.starts_with("--") => anyhow::bail!("未知参数: {}", arg),
            _ => {
                if cli.file.is_some() {
                    anyhow::bail!("只能指定一个文件");
                }
                cli.file = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(cli)
}

/// 读取本地文件为上传文件
fn read_upload(path: &Path) -> anyhow::Result<UploadedFile> {
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("无法读取文件 {}: {}", path.display(), e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(UploadedFile::new(name, bytes))
}

fn run() -> anyhow::Result<bool> {
    let cli = parse_args()?;

    let mut manager = ConfigManager::load()?;
    if let Some(locale) = cli.locale {
        manager.config_mut().locale = locale;
    }
    if let Some(format) = cli.format {
        manager.config_mut().output_format = format;
    }
    let config = manager.into_config();

    logging::init_with(&config.log_filter, config.log_json);
    i18n::set_locale(&config.locale);

    tracing::info!(
        version = inventory_threshold::VERSION,
        locale = %i18n::current_locale(),
        "{} 启动",
        inventory_threshold::APP_NAME
    );

    let Some(path) = cli.file else {
        eprintln!("{}", t("calculator.no_file"));
        return Ok(false);
    };

    let file = read_upload(&path)?;
    let api = ThresholdApi::new(UploadPolicy::default());

    let runtime = tokio::runtime::Runtime::new()?;
    let response = runtime.block_on(api.calculate_thresholds(file));

    match &response {
        CalculationResponse::Success { results } => {
            match config.output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
                OutputFormat::Text => print!("{}", report::render_text(results)),
            }
            eprintln!("{}", t("calculator.success"));
            Ok(true)
        }
        CalculationResponse::Failure { error } => {
            match config.output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
                OutputFormat::Text => eprintln!("{}", error),
            }
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::from(2)
        }
    }
}
