//! 性能基准测试模块
//!
//! 用于测试大型语言文件的解析、转换遍历与合并耗时

use std::time::Instant;

use serde_json::{json, Map, Value};

use crate::model::tree_walker::{MergeMode, TreeWalker};
use crate::transform::preserve::Preserver;
use crate::transform::StringTransformer;

/// 性能测试结果
#[derive(Debug)]
pub struct PerformanceResult {
    pub operation: String,
    pub duration_ms: u128,
    pub success: bool,
    pub details: String,
}

impl PerformanceResult {
    pub fn new(operation: &str, duration_ms: u128, success: bool, details: &str) -> Self {
        Self {
            operation: operation.to_string(),
            duration_ms,
            success,
            details: details.to_string(),
        }
    }
}

/// 生成大型语言文件：`groups` 个分组，每组 `keys` 个条目
pub fn generate_large_locale(groups: usize, keys: usize) -> Value {
    let mut root = Map::new();
    for g in 0..groups {
        let mut group = Map::new();
        for k in 0..keys {
            let value = match k % 6 {
                0 => json!(format!("Item {k} of group {g}")),
                1 => json!(format!("Hello, {{{{user}}}}! You have {{{{count}}}} new item {k}")),
                2 => json!(format!("https://example.com/docs/{g}/{k}")),
                3 => json!([format!("first {k}"), format!("second {k}")]),
                4 => json!(k),
                _ => json!({"title": format!("Title {k}"), "desc": format!("Description for {g}.{k}")}),
            };
            group.insert(format!("key_{k}"), value);
        }
        root.insert(format!("group_{g}"), Value::Object(group));
    }
    Value::Object(root)
}

/// 测试一次完整遍历的耗时
pub fn benchmark_walk<T: StringTransformer>(
    transformer: T,
    source: &Value,
    existing: Option<&Value>,
    mode: MergeMode,
) -> PerformanceResult {
    let preserver = Preserver::default();
    let walker = TreeWalker::new(transformer, &preserver, mode);
    let start = Instant::now();
    let result = walker.run(source, existing);
    let duration = start.elapsed();

    match result {
        Ok((_, stats)) => PerformanceResult::new(
            &format!("遍历({mode})"),
            duration.as_millis(),
            true,
            &format!("处理了 {} 个叶子", stats.total()),
        ),
        Err(e) => PerformanceResult::new(
            &format!("遍历({mode})"),
            duration.as_millis(),
            false,
            &format!("遍历失败: {e}"),
        ),
    }
}

/// 测试JSON解析性能
pub fn benchmark_json_parsing(json_str: &str) -> PerformanceResult {
    let start = Instant::now();
    let parse_result = serde_json::from_str::<Value>(json_str);
    let duration = start.elapsed();

    match parse_result {
        Ok(_) => PerformanceResult::new(
            "JSON解析",
            duration.as_millis(),
            true,
            &format!("解析了 {} 字节的JSON", json_str.len()),
        ),
        Err(e) => PerformanceResult::new("JSON解析", duration.as_millis(), false, &format!("解析失败: {e}")),
    }
}
