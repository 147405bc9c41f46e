//! 保留判定：URL、深链接、邮件链接等资源定位符不参与任何转换

/// 内置的保留前缀
pub const DEFAULT_PRESERVED_PREFIXES: &[&str] = &["http://", "https://", "ftp://", "//", "mailto:"];

/// 判断字符串是否为需要原样保留的资源定位符
#[derive(Debug, Clone)]
pub struct Preserver {
    prefixes: Vec<String>,
}

impl Default for Preserver {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PRESERVED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Preserver {
    /// 在内置前缀基础上追加应用自定义的 scheme（如深链接 `myapp://`）
    pub fn with_extra_prefixes<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut preserver = Self::default();
        for prefix in extra {
            let prefix = prefix.into();
            if !prefix.is_empty() && !preserver.prefixes.contains(&prefix) {
                preserver.prefixes.push(prefix);
            }
        }
        preserver
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// 以任一保留前缀开头即视为保留字符串
    pub fn is_preserved(&self, text: &str) -> bool {
        self.prefixes.iter().any(|p| text.starts_with(p.as_str()))
    }
}
