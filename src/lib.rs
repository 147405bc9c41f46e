//! 语言文件转换工具库
//!
//! 读取 JSON 语言文件，逐字符串转换（简繁转换 / 倒置英文），
//! 并按合并策略参考已有输出，保留人工维护的链接与既有翻译。

pub mod cli;
pub mod model;
pub mod transform;
pub mod utils;

// 重新导出主要类型
pub use model::data_core::{AppError, JobReport, LocaleJob};
pub use model::tree_walker::{MergeMode, TreeWalker, WalkStats};
pub use transform::preserve::Preserver;
pub use transform::StringTransformer;
