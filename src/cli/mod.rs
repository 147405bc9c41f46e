//! 命令行：参数定义与命令执行

pub mod args;
pub mod commands;

pub use args::*;
