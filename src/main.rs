use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use statuspage_models::codec::read_limited;
use statuspage_models::config::CONFIG;
use statuspage_models::{Schema, SchemaError};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// 按 Statuspage API 的数据结构校验并规范化 JSON 载荷
#[derive(Debug, Parser)]
#[command(name = "statuspage-models", version)]
struct Cli {
    /// 载荷名称，例如 `component`、`post-incident`
    #[arg(required_unless_present = "list")]
    schema: Option<Schema>,

    /// 载荷文件，省略或为 `-` 时读取标准输入
    file: Option<PathBuf>,

    /// 载荷是列表接口返回的数组
    #[arg(long)]
    many: bool,

    /// 输出紧凑 JSON
    #[arg(long)]
    compact: bool,

    /// 列出所有载荷名称
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    // 日志写到 stderr，stdout 只输出 JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(CONFIG.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SchemaError> {
    let mut stdout = io::stdout().lock();

    if cli.list {
        for schema in Schema::ALL {
            writeln!(stdout, "{}", schema)?;
        }
        return Ok(());
    }

    let Some(schema) = cli.schema else {
        return Err(SchemaError::required("schema"));
    };

    let bytes = read_payload(cli.file.as_deref())?;
    let pretty = CONFIG.pretty_output && !cli.compact;
    let output = schema.normalize(&bytes, cli.many, pretty)?;

    stdout.write_all(&output)?;
    stdout.write_all(b"\n")?;
    info!("✅ 载荷符合 {}", schema);
    Ok(())
}

/// 读取载荷，文件与标准输入都按同一个上限读取
fn read_payload(path: Option<&Path>) -> Result<Vec<u8>, SchemaError> {
    let limit = CONFIG.max_payload_bytes;
    let result = match path {
        Some(path) if path != Path::new(CONFIG.stdin_marker) => {
            info!("📂 读取 {}", path.display());
            read_limited(File::open(path)?, limit)
        }
        _ => read_limited(io::stdin().lock(), limit),
    };
    if let Err(SchemaError::MalformedPayload(reason)) = &result {
        warn!("⚠️ {}", reason);
    }
    result
}
