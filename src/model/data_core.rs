//! LocaleJob：一次批量转换的完整流程（读取输入 → 读取已有输出 → 遍历合并 → 写回）

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::model::tree_walker::{MergeMode, TreeWalker, WalkStats};
use crate::transform::preserve::Preserver;
use crate::transform::StringTransformer;
use crate::utils::fs::{read_json_file, read_optional_json_file, write_json_file};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("输入文件不存在: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("目标文件不存在: {}", .0.display())]
    MissingTarget(PathBuf),
    #[error("文本包含保留码位 U+{code_point:04X}: {text:?}")]
    ReservedCodePoint { code_point: u32, text: String },
    #[error("转换引擎错误: {0}")]
    Converter(String),
    #[error("文件 {} 包含 {count} 处 %TODO", .path.display())]
    TodoFound { path: PathBuf, count: usize },
    #[error("状态错误: {0}")]
    State(String),
}

/// 单次转换任务的路径与策略
#[derive(Debug, Clone)]
pub struct LocaleJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub mode: MergeMode,
    pub preserver: Preserver,
}

/// 转换结果摘要
#[derive(Debug, Clone)]
pub struct JobReport {
    pub output_path: PathBuf,
    pub mode: MergeMode,
    /// 运行前已存在输出文件
    pub had_existing: bool,
    pub stats: WalkStats,
}

impl LocaleJob {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>, mode: MergeMode) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            mode,
            preserver: Preserver::default(),
        }
    }

    pub fn with_preserver(mut self, preserver: Preserver) -> Self {
        self.preserver = preserver;
        self
    }

    /// 在内存中完成转换，不写文件
    pub fn convert<T: StringTransformer>(&self, transformer: T) -> Result<(Value, JobReport), AppError> {
        // 输入缺失时直接失败，不产生任何输出
        if !self.input_path.exists() {
            return Err(AppError::MissingInput(self.input_path.clone()));
        }

        let source = read_json_file(&self.input_path)?;
        tracing::debug!("已读取输入: {}", self.input_path.display());

        let existing = match self.mode {
            MergeMode::Overwrite => None,
            _ => read_optional_json_file(&self.output_path)?,
        };
        if existing.is_none() && self.mode != MergeMode::Overwrite {
            tracing::warn!("输出文件不存在，按空对象处理: {}", self.output_path.display());
        }

        let walker = TreeWalker::new(transformer, &self.preserver, self.mode);
        let (value, stats) = walker.run(&source, existing.as_ref())?;

        let report = JobReport {
            output_path: self.output_path.clone(),
            mode: self.mode,
            had_existing: existing.is_some(),
            stats,
        };
        Ok((value, report))
    }

    /// 转换并写入输出文件
    pub fn run<T: StringTransformer>(&self, transformer: T) -> Result<JobReport, AppError> {
        let name = transformer.name();
        let (value, report) = self.convert(transformer)?;
        write_json_file(&self.output_path, &value)?;
        tracing::info!(
            "{} 转换完成（{}）：共 {} 个叶子，转换 {}，沿用 {} → {}",
            name,
            report.mode,
            report.stats.total(),
            report.stats.transformed,
            report.stats.kept,
            self.output_path.display()
        );
        Ok(report)
    }
}

/// 按 `<dir>/<name>.json` 拼接语言文件路径
pub fn locale_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.json"))
}
