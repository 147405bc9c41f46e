//! 字符串转换器：树遍历只依赖 `StringTransformer`，具体实现可插拔

pub mod flip;
pub mod placeholder;
pub mod preserve;
pub mod script;

use crate::model::data_core::AppError;

/// 单个字符串的转换能力
pub trait StringTransformer {
    /// 用于日志的转换名称
    fn name(&self) -> &'static str;

    fn transform(&self, text: &str) -> Result<String, AppError>;
}

impl<T: StringTransformer + ?Sized> StringTransformer for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn transform(&self, text: &str) -> Result<String, AppError> {
        (**self).transform(text)
    }
}

impl<T: StringTransformer + ?Sized> StringTransformer for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn transform(&self, text: &str) -> Result<String, AppError> {
        (**self).transform(text)
    }
}
