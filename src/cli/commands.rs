//! 命令执行：解析路径、组装转换器并调用数据层，返回给用户的完成提示

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands, ConvertArgs, PairArgs};
use crate::model::audit::{check_file_for_todo, generate_placeholder_file, prune_redundant_file};
use crate::model::data_core::{locale_file, AppError, JobReport, LocaleJob};
use crate::transform::flip::FlipTransform;
use crate::transform::preserve::Preserver;
use crate::transform::script::{default_converter, ScriptConverter, ScriptTransform};
use crate::transform::StringTransformer;

// === 常量定义（消除魔法值） ===
pub const STATUS_CONVERTED: &str = "转换完成";
pub const STATUS_CHECK_PASSED: &str = "所有文件均不含 %TODO";
pub const STATUS_PLACEHOLDER_WRITTEN: &str = "占位文件已生成";
pub const STATUS_PRUNED: &str = "冗余键已清理";
pub const STATUS_ERROR_PREFIX: &str = "错误: ";

pub const ZH_HANS: &str = "zh-Hans";
pub const ZH_HANT: &str = "zh-Hant";
pub const EN: &str = "en";
pub const EN_UD: &str = "en-ud";

/// 应用深链接 scheme，倒置英文时原样保留
pub const APP_DEEP_LINK_PREFIX: &str = "sjmcl://";

/// 由项目根目录解析出的语言文件目录
#[derive(Debug, Clone)]
pub struct ToolPaths {
    pub locales_dir: PathBuf,
}

impl ToolPaths {
    pub fn new(root: &Path, locales_dir: &Path) -> Self {
        Self {
            locales_dir: root.join(locales_dir),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(&cli.root, &cli.locales_dir)
    }

    pub fn locale(&self, name: &str) -> PathBuf {
        locale_file(&self.locales_dir, name)
    }

    /// 组装转换任务，`--input` / `--output` 优先于默认文件名
    ///
    /// `builtin_prefixes` 为该命令固定保留的 scheme，`--preserve-prefix` 在其后追加。
    pub fn job(&self, args: &ConvertArgs, input: &str, output: &str, builtin_prefixes: &[&str]) -> LocaleJob {
        let input_path = args.input.clone().unwrap_or_else(|| self.locale(input));
        let output_path = args.output.clone().unwrap_or_else(|| self.locale(output));
        let prefixes = builtin_prefixes
            .iter()
            .map(|p| p.to_string())
            .chain(args.preserve_prefixes.iter().cloned());
        LocaleJob::new(input_path, output_path, args.merge_mode())
            .with_preserver(Preserver::with_extra_prefixes(prefixes))
    }
}

/// 执行命令，成功时返回完成提示
pub fn run(cli: &Cli) -> Result<String, AppError> {
    let paths = ToolPaths::from_cli(cli);
    tracing::debug!("语言文件目录: {}", paths.locales_dir.display());

    match &cli.command {
        Commands::ZhHant(args) => run_zh_hant(&paths, args, default_converter),
        Commands::UpsideDown(args) => run_upside_down(&paths, args),
        Commands::Check(args) => run_check(args),
        Commands::Placeholder(args) => run_placeholder(&paths, args),
        Commands::Prune(args) => run_prune(&paths, args),
    }
}

/// 确认输入存在后才创建转换引擎，缺少输入时报告文件缺失而不是引擎错误
pub fn run_zh_hant<C, F>(paths: &ToolPaths, args: &ConvertArgs, make_converter: F) -> Result<String, AppError>
where
    C: ScriptConverter,
    F: FnOnce() -> Result<C, AppError>,
{
    let job = paths.job(args, ZH_HANS, ZH_HANT, &[]);
    if !job.input_path.exists() {
        return Err(AppError::MissingInput(job.input_path));
    }
    run_conversion(&job, ScriptTransform::new(make_converter()?))
}

pub fn run_upside_down(paths: &ToolPaths, args: &ConvertArgs) -> Result<String, AppError> {
    let job = paths.job(args, EN, EN_UD, &[APP_DEEP_LINK_PREFIX]);
    run_conversion(&job, FlipTransform::new())
}

fn run_conversion<T: StringTransformer>(job: &LocaleJob, transformer: T) -> Result<String, AppError> {
    tracing::info!(
        "{}: {} → {}（{}）",
        transformer.name(),
        job.input_path.display(),
        job.output_path.display(),
        job.mode
    );
    tracing::debug!("保留前缀: {}", job.preserver.prefixes().join(", "));
    let report: JobReport = job.run(transformer)?;
    Ok(format!(
        "{STATUS_CONVERTED}: {} ({} 条转换, {} 条沿用)",
        report.output_path.display(),
        report.stats.transformed,
        report.stats.kept
    ))
}

pub fn run_check(args: &CheckArgs) -> Result<String, AppError> {
    let mut failed = 0usize;
    for file in &args.files {
        if let Err(e) = check_file_for_todo(file) {
            tracing::error!("{}", e);
            failed += 1;
        }
    }
    if failed > 0 {
        return Err(AppError::State(format!("{failed} 个文件未通过 %TODO 检查")));
    }
    Ok(STATUS_CHECK_PASSED.to_string())
}

pub fn run_placeholder(paths: &ToolPaths, args: &PairArgs) -> Result<String, AppError> {
    let source = paths.locale(&args.source);
    let target = paths.locale(&args.target);
    if !source.exists() {
        return Err(AppError::MissingInput(source));
    }
    generate_placeholder_file(&source, &target)?;
    Ok(format!("{STATUS_PLACEHOLDER_WRITTEN}: {}", target.display()))
}

pub fn run_prune(paths: &ToolPaths, args: &PairArgs) -> Result<String, AppError> {
    let source = paths.locale(&args.source);
    let target = paths.locale(&args.target);
    if !source.exists() {
        return Err(AppError::MissingInput(source));
    }
    let removed = prune_redundant_file(&source, &target)?;
    Ok(format!(
        "{STATUS_PRUNED}: {} 中删除了 {removed} 个 {} 不存在的条目",
        target.display(),
        args.source
    ))
}
