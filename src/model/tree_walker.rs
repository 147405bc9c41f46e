//! 树遍历与合并：对任意嵌套的 JSON 结构逐叶转换，并按合并策略参考已有输出
//!
//! 结果的形状（键集合 / 数组长度）始终与输入树一致，已有输出中多余的键被丢弃。

use std::fmt;

use serde_json::{Map, Value};

use crate::model::data_core::AppError;
use crate::transform::preserve::Preserver;
use crate::transform::StringTransformer;

/// 合并策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// 全量转换，不参考已有输出
    Overwrite,
    /// 全量转换，但已有输出中人工维护的链接优先
    #[default]
    PreserveLinks,
    /// 结构同步：已有的值原样保留，只转换新增路径
    Align,
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MergeMode::Overwrite => "overwrite",
            MergeMode::PreserveLinks => "preserve-links",
            MergeMode::Align => "align",
        };
        f.write_str(s)
    }
}

/// 单次遍历的叶子统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// 新转换的字符串
    pub transformed: usize,
    /// 原样保留的链接
    pub preserved: usize,
    /// 沿用已有输出的值
    pub kept: usize,
    /// 数字、布尔、null 等直接透传的标量
    pub passthrough: usize,
}

impl WalkStats {
    pub fn total(&self) -> usize {
        self.transformed + self.preserved + self.kept + self.passthrough
    }
}

pub struct TreeWalker<'a, T> {
    transformer: T,
    preserver: &'a Preserver,
    mode: MergeMode,
}

impl<'a, T: StringTransformer> TreeWalker<'a, T> {
    pub fn new(transformer: T, preserver: &'a Preserver, mode: MergeMode) -> Self {
        Self {
            transformer,
            preserver,
            mode,
        }
    }

    /// 遍历整棵树，返回转换结果与统计
    pub fn run(&self, node: &Value, existing: Option<&Value>) -> Result<(Value, WalkStats), AppError> {
        let mut stats = WalkStats::default();
        let existing = match self.mode {
            MergeMode::Overwrite => None,
            _ => existing,
        };
        let out = self.walk(node, existing, &mut stats)?;
        tracing::debug!(
            "遍历完成（{}，{}）：转换 {}，保留链接 {}，沿用 {}，透传 {}",
            self.transformer.name(),
            self.mode,
            stats.transformed,
            stats.preserved,
            stats.kept,
            stats.passthrough
        );
        Ok((out, stats))
    }

    /// 结构递归；`existing` 为已有输出中对应路径的节点
    pub fn walk(&self, node: &Value, existing: Option<&Value>, stats: &mut WalkStats) -> Result<Value, AppError> {
        match node {
            Value::Object(map) => {
                let existing_map = existing.and_then(Value::as_object);
                let mut out = Map::with_capacity(map.len());
                for (key, child) in map {
                    let prior = existing_map.and_then(|m| m.get(key));
                    out.insert(key.clone(), self.walk(child, prior, stats)?);
                }
                Ok(Value::Object(out))
            }
            Value::Array(items) => {
                let existing_items = existing.and_then(Value::as_array);
                let out = items
                    .iter()
                    .enumerate()
                    .map(|(idx, child)| {
                        let prior = existing_items.and_then(|a| a.get(idx));
                        self.walk(child, prior, stats)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Array(out))
            }
            Value::String(text) => self.leaf(text, existing, stats).map(Value::String),
            scalar => {
                stats.passthrough += 1;
                Ok(scalar.clone())
            }
        }
    }

    fn leaf(&self, text: &str, existing: Option<&Value>, stats: &mut WalkStats) -> Result<String, AppError> {
        let prior = existing.and_then(Value::as_str);

        if self.mode == MergeMode::Align {
            // 形状不匹配（如已有值是对象）视为无可用旧值
            if let Some(prior) = prior {
                stats.kept += 1;
                return Ok(prior.to_string());
            }
        }

        if self.preserver.is_preserved(text) {
            stats.preserved += 1;
            if self.mode == MergeMode::PreserveLinks {
                if let Some(prior) = prior.filter(|p| self.preserver.is_preserved(p)) {
                    return Ok(prior.to_string());
                }
            }
            return Ok(text.to_string());
        }

        stats.transformed += 1;
        self.transformer.transform(text)
    }
}
