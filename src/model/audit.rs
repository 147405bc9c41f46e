//! 语言文件维护：%TODO 检查、占位文件生成、冗余键清理

use std::path::Path;

use serde_json::{Map, Value};

use crate::model::data_core::AppError;
use crate::utils::fs::{read_json_file, write_json_file};

/// 未翻译标记
pub const TODO_MARKER: &str = "%TODO";

/// 收集所有包含 %TODO 的字符串叶子路径（JSONPath 形式）
pub fn find_todo_paths(value: &Value) -> Vec<String> {
    fn walk(v: &Value, path: &str, out: &mut Vec<String>) {
        match v {
            Value::String(s) if s.contains(TODO_MARKER) => out.push(path.to_string()),
            Value::Object(map) => {
                for (k, child) in map {
                    walk(child, &format!("{path}.{k}"), out);
                }
            }
            Value::Array(items) => {
                for (idx, child) in items.iter().enumerate() {
                    walk(child, &format!("{path}[{idx}]"), out);
                }
            }
            _ => {}
        }
    }

    let mut out = Vec::new();
    walk(value, "$", &mut out);
    out
}

/// 检查单个文件，存在 %TODO 时返回错误
pub fn check_file_for_todo(path: &Path) -> Result<(), AppError> {
    let value = read_json_file(path)?;
    let hits = find_todo_paths(&value);
    if hits.is_empty() {
        tracing::info!("文件 {} 检查通过", path.display());
        return Ok(());
    }
    for hit in &hits {
        tracing::warn!("{}: {}", path.display(), hit);
    }
    Err(AppError::TodoFound {
        path: path.to_path_buf(),
        count: hits.len(),
    })
}

/// 为所有字符串叶子添加 `%TODO ` 前缀（已有前缀的跳过）
pub fn add_todo_placeholder(value: &Value) -> Value {
    match value {
        Value::String(s) if s.starts_with(TODO_MARKER) => value.clone(),
        Value::String(s) => Value::String(format!("{TODO_MARKER} {s}")),
        Value::Array(items) => Value::Array(items.iter().map(add_todo_placeholder).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), add_todo_placeholder(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// 由源语言文件生成待翻译的占位文件
pub fn generate_placeholder_file(source: &Path, target: &Path) -> Result<(), AppError> {
    let value = read_json_file(source)?;
    write_json_file(target, &add_todo_placeholder(&value))?;
    tracing::info!("占位文件已生成: {}", target.display());
    Ok(())
}

/// 删除目标中源文件不存在的键
///
/// 只递归对象；数组与标量原样保留。源节点不是对象而目标是对象时，目标被清空。
pub fn remove_extra_keys(source: &Value, target: &Value) -> Value {
    let Value::Object(target_map) = target else {
        return target.clone();
    };
    let Value::Object(source_map) = source else {
        return Value::Object(Map::new());
    };

    let mut out = Map::with_capacity(target_map.len());
    for (key, value) in target_map {
        if let Some(source_value) = source_map.get(key) {
            let kept = match value {
                Value::Object(_) => remove_extra_keys(source_value, value),
                _ => value.clone(),
            };
            out.insert(key.clone(), kept);
        }
    }
    Value::Object(out)
}

/// 清理目标语言文件中的冗余键，原地回写；返回删除的叶子数
pub fn prune_redundant_file(source: &Path, target: &Path) -> Result<usize, AppError> {
    if !target.exists() {
        return Err(AppError::MissingTarget(target.to_path_buf()));
    }
    let source_value = read_json_file(source)?;
    let target_value = read_json_file(target)?;

    let cleaned = remove_extra_keys(&source_value, &target_value);
    let removed = count_leaves(&target_value).saturating_sub(count_leaves(&cleaned));
    write_json_file(target, &cleaned)?;
    tracing::info!("已清理 {} 个冗余条目: {}", removed, target.display());
    Ok(removed)
}

fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(count_leaves).sum(),
        Value::Array(items) => items.iter().map(count_leaves).sum(),
        _ => 1,
    }
}
