//! 端到端测试：在临时目录中运行完整的读取 → 转换 → 合并 → 写回流程

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::tempdir;

use locale_fanyi::transform::flip::FlipTransform;
use locale_fanyi::transform::script::{ScriptConverter, ScriptTransform};
use locale_fanyi::{AppError, LocaleJob, MergeMode, Preserver};

/// 只认识几个字的简繁转换器
struct TinyS2T;

impl ScriptConverter for TinyS2T {
    fn convert(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '设' => '設',
                '启' => '啟',
                '动' => '動',
                '载' => '載',
                other => other,
            })
            .collect()
    }
}

fn write(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn read(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn upside_down_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("en.json");
    let output = dir.path().join("en-ud.json");
    write(&input, &json!({"greeting": "Hello, {{user}}!", "docs": "https://docs.example", "n": 3}));

    LocaleJob::new(&input, &output, MergeMode::PreserveLinks)
        .run(FlipTransform::new())
        .unwrap();

    assert_eq!(
        read(&output),
        json!({"greeting": "¡{{user}} 'oꞁꞁǝH", "docs": "https://docs.example", "n": 3})
    );
}

#[test]
fn align_rerun_on_own_output_is_unchanged() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("zh-Hans.json");
    let output = dir.path().join("zh-Hant.json");
    write(&input, &json!({"launch": {"start": "启动", "list": ["设置", "载入"]}}));

    let job = LocaleJob::new(&input, &output, MergeMode::Align);
    job.run(ScriptTransform::new(TinyS2T)).unwrap();
    let first = fs::read_to_string(&output).unwrap();

    let report = job.run(ScriptTransform::new(TinyS2T)).unwrap();
    let second = fs::read_to_string(&output).unwrap();

    assert_eq!(first, second);
    assert!(report.had_existing);
    assert_eq!(report.stats.transformed, 0);
    assert_eq!(report.stats.kept, 3);
}

#[test]
fn align_keeps_manual_edits_and_follows_source_shape() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("zh-Hans.json");
    let output = dir.path().join("zh-Hant.json");
    write(&input, &json!({"a": "设置", "b": "启动", "group": {"c": "载入"}}));
    write(&output, &json!({"a": "偏好設定", "orphan": "舊", "group": {"c": "讀取", "d": "多餘"}}));

    LocaleJob::new(&input, &output, MergeMode::Align)
        .run(ScriptTransform::new(TinyS2T))
        .unwrap();

    let out = read(&output);
    assert_eq!(out, json!({"a": "偏好設定", "b": "啟動", "group": {"c": "讀取"}}));
    // 键顺序与源文件一致
    let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b", "group"]);
}

#[test]
fn full_conversion_retranslates_but_keeps_curated_links() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("zh-Hans.json");
    let output = dir.path().join("zh-Hant.json");
    write(&input, &json!({"a": "设置", "help": "https://example.com/zh-cn/help"}));
    write(&output, &json!({"a": "偏好設定", "help": "https://example.com/zh-tw/help"}));

    LocaleJob::new(&input, &output, MergeMode::PreserveLinks)
        .run(ScriptTransform::new(TinyS2T))
        .unwrap();

    assert_eq!(read(&output), json!({"a": "設置", "help": "https://example.com/zh-tw/help"}));
}

#[test]
fn custom_deep_link_scheme_is_preserved() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("en.json");
    let output = dir.path().join("en-ud.json");
    write(&input, &json!({"open": "myapp://settings", "label": "Settings"}));

    LocaleJob::new(&input, &output, MergeMode::Overwrite)
        .with_preserver(Preserver::with_extra_prefixes(["myapp://"]))
        .run(FlipTransform::new())
        .unwrap();

    let out = read(&output);
    assert_eq!(out["open"], json!("myapp://settings"));
    assert_eq!(out["label"], json!("sᵷuᴉʇʇǝS"));
}

#[test]
fn malformed_input_leaves_previous_output_untouched() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("en.json");
    let output = dir.path().join("en-ud.json");
    fs::write(&input, "{\"a\": ").unwrap();
    write(&output, &json!({"a": "ɐ"}));

    let err = LocaleJob::new(&input, &output, MergeMode::Overwrite)
        .run(FlipTransform::new())
        .unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
    assert_eq!(read(&output), json!({"a": "ɐ"}));
}
