//! 程序入口：初始化日志、解析参数并执行命令

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use locale_fanyi::cli::commands::{self, STATUS_ERROR_PREFIX};
use locale_fanyi::cli::Cli;

fn init_tracing(cli: &Cli) {
    let level = if cli.quiet {
        tracing::Level::WARN
    } else {
        match cli.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };
    // RUST_LOG 优先于命令行参数
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = commands::run(&cli).with_context(|| format!("{} 执行失败", cli.command.name()));
    match result {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("错误详情: {:?}", e);
            eprintln!("{STATUS_ERROR_PREFIX}{e:#}");
            ExitCode::FAILURE
        }
    }
}
