//! 简繁转换：外部转换引擎以 `ScriptConverter` 显式注入，不使用全局单例

use crate::model::data_core::AppError;
use crate::transform::StringTransformer;

/// 外部文字转换能力（黑盒）
pub trait ScriptConverter {
    fn convert(&self, text: &str) -> String;
}

/// 简体 → 繁体转换，只做字符级替换，不改变模板变量的位置
pub struct ScriptTransform<C> {
    converter: C,
}

impl<C: ScriptConverter> ScriptTransform<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }
}

impl<C: ScriptConverter> StringTransformer for ScriptTransform<C> {
    fn name(&self) -> &'static str {
        "zh-hant"
    }

    fn transform(&self, text: &str) -> Result<String, AppError> {
        Ok(self.converter.convert(text))
    }
}

/// 基于 OpenCC 的转换器，配置 s2twp（简体到台湾正体，含惯用词替换）
#[cfg(feature = "opencc")]
pub struct OpenCcConverter {
    inner: opencc_rust::OpenCC,
}

#[cfg(feature = "opencc")]
impl OpenCcConverter {
    pub fn s2twp() -> Result<Self, AppError> {
        let inner = opencc_rust::OpenCC::new(opencc_rust::DefaultConfig::S2TWP)
            .map_err(|e| AppError::Converter(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "opencc")]
impl ScriptConverter for OpenCcConverter {
    fn convert(&self, text: &str) -> String {
        self.inner.convert(text)
    }
}

/// 创建默认的简繁转换器
#[cfg(feature = "opencc")]
pub fn default_converter() -> Result<Box<dyn ScriptConverter>, AppError> {
    tracing::debug!("使用 OpenCC s2twp 转换引擎");
    Ok(Box::new(OpenCcConverter::s2twp()?))
}

/// 创建默认的简繁转换器
#[cfg(not(feature = "opencc"))]
pub fn default_converter() -> Result<Box<dyn ScriptConverter>, AppError> {
    Err(AppError::Converter(
        "当前构建未启用 opencc 特性，请使用 `--features opencc` 重新编译".into(),
    ))
}

impl ScriptConverter for Box<dyn ScriptConverter> {
    fn convert(&self, text: &str) -> String {
        (**self).convert(text)
    }
}
