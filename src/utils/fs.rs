//! IO helper: safe file read/write for JSON

use std::{
    fs::{self, File},
    io::{BufReader, Write},
    path::Path,
};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::model::data_core::AppError;

/// 从文件读取JSON数据
pub fn read_json_file(p: &Path) -> Result<Value, AppError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    let v: Value = serde_json::from_reader(rdr)?;
    Ok(v)
}

/// 读取可能不存在的JSON文件，不存在时返回 None
pub fn read_optional_json_file(p: &Path) -> Result<Option<Value>, AppError> {
    if !p.exists() {
        return Ok(None);
    }
    read_json_file(p).map(Some)
}

/// 将JSON数据保存到文件（两空格缩进，非ASCII字符原样输出）
///
/// 先写入同目录临时文件再重命名，失败时不会留下半截文件。
/// 目标已存在时沿用其权限，否则使用 0644（临时文件默认只有 0600）。
pub fn write_json_file(p: &Path, value: &Value) -> Result<(), AppError> {
    let dir = match p.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, value)?;
    tmp.flush()?;
    match fs::metadata(p) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => set_default_permissions(tmp.as_file())?,
        Err(e) => return Err(e.into()),
    }
    tmp.persist(p).map_err(|e| AppError::Io(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(f: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    f.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_f: &File) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_is_readable_and_unescaped() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("zh-Hant.json");
        let v = json!({"title": "設定", "nested": {"n": 1}});

        write_json_file(&p, &v).unwrap();
        let text = fs::read_to_string(&p).unwrap();
        assert!(text.contains("設定"), "非ASCII字符不应被转义");
        assert!(text.contains("\n  \"title\""), "应使用两空格缩进");
        assert_eq!(read_json_file(&p).unwrap(), v);
    }

    #[test]
    fn test_write_replaces_existing() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("out.json");
        fs::write(&p, "old content").unwrap();

        write_json_file(&p, &json!(["new"])).unwrap();
        assert_eq!(read_json_file(&p).unwrap(), json!(["new"]));
        // 临时文件已被重命名，目录中只剩目标文件
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let p = dir.path().join("en-ud.json");
        fs::write(&p, "{}").unwrap();
        fs::set_permissions(&p, fs::Permissions::from_mode(0o664)).unwrap();

        write_json_file(&p, &json!({"a": "ɐ"})).unwrap();
        let mode = fs::metadata(&p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o664, "回写后权限应保持不变");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_default_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let p = dir.path().join("zh-Hant.json");
        write_json_file(&p, &json!({})).unwrap();
        let mode = fs::metadata(&p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_optional_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_optional_json_file(&dir.path().join("none.json")).unwrap().is_none());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.json");
        fs::write(&p, "{\"a\": }").unwrap();
        assert!(matches!(read_json_file(&p), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_non_utf8_is_error() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("latin1.json");
        fs::write(&p, b"{\"a\": \"\xff\xfe\"}").unwrap();
        assert!(read_json_file(&p).is_err());
    }
}
