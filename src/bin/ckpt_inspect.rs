//! 快照目录检查工具：加载一个训练导出目录，打印逐层摘要与每个epoch的预测
//!
//! ```text
//! ckpt_inspect <DIR> [--options FILE] [--order file-name|epoch-number] [--max-epochs N] [--show-output]
//! ```
//!
//! 日志级别由环境变量`RUST_LOG`控制，默认`info`。

use std::path::PathBuf;
use std::process::ExitCode;

use ckpt_catalog::catalog::{CatalogLoader, LoadedCatalog};
use ckpt_catalog::config::{EpochOrder, LoadOptions};
use ckpt_catalog::snapshot::DecodeError;
use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ckpt_inspect", version, about = "打印快照目录的逐层摘要与预测")]
struct Args {
    /// 快照目录
    dir: PathBuf,

    /// JSON 格式的加载配置文件，缺省字段取默认值
    #[arg(long)]
    options: Option<PathBuf>,

    /// 覆盖配置中的epoch排序键
    #[arg(long, value_enum)]
    order: Option<OrderArg>,

    /// 覆盖配置中的最大epoch数
    #[arg(long)]
    max_epochs: Option<usize>,

    /// 同时打印每个epoch输出层的激活值
    #[arg(long)]
    show_output: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    FileName,
    EpochNumber,
}

impl From<OrderArg> for EpochOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::FileName => EpochOrder::FileName,
            OrderArg::EpochNumber => EpochOrder::EpochNumber,
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok((options, loaded)) => {
            print_summary(&loaded);
            if args.show_output {
                print_output_activations(&loaded, &options.output_marker);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(LoadOptions, LoadedCatalog), DecodeError> {
    let mut options = match &args.options {
        Some(path) => LoadOptions::from_json_file(path)?,
        None => LoadOptions::default(),
    };
    if let Some(order) = args.order {
        options = options.order(order.into());
    }
    if let Some(max_epochs) = args.max_epochs {
        options = options.max_epochs(max_epochs);
    }
    let loader = CatalogLoader::new(options);
    let loaded = loader.load_dir(&args.dir)?;
    Ok((loader.options().clone(), loaded))
}

fn print_summary(loaded: &LoadedCatalog) {
    println!(
        "共 {} 层，{} 个epoch，{} 个类别",
        loaded.catalog.len(),
        loaded.epoch_count(),
        loaded.class_names.len()
    );
    for (epoch, path) in loaded.sources.iter().enumerate() {
        println!("  epoch {epoch}: {}", path.display());
    }

    println!("\n层:");
    for record in loaded.catalog.records() {
        println!(
            "  {:<24} {:<6} 权重{:?} 激活值{:?}",
            record.name(),
            record.layer_type().to_string(),
            record.weight_shape(),
            record.activation_shape()
        );
    }

    if loaded.predictions.is_empty() {
        println!("\n没有预测结果");
        return;
    }
    println!("\n预测:");
    for (epoch, label) in loaded.predictions.iter() {
        println!("  epoch {epoch}: {label}");
    }
}

fn print_output_activations(loaded: &LoadedCatalog, marker: &str) {
    let Some(output) = loaded.catalog.output_record(marker) else {
        return;
    };
    println!("\n输出层`{}`的激活值:", output.name());
    for (epoch, activation) in output.activation_tensors().iter().enumerate() {
        print!("epoch {epoch}:\n{activation}");
    }
}
