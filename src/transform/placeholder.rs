//! 模板变量保护：转换前把 `{{name}}` 替换为私有区哨兵，转换后再还原
//!
//! 哨兵由两个码位组成：标记 U+E000 + 序号码位 U+E100+i。
//! 字符翻转会把哨兵整体反向，因此还原时需要知道转换是否反转了文本。

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::model::data_core::AppError;

/// 哨兵标记码位
pub const SENTINEL_MARKER: char = '\u{E000}';
/// 序号码位起点
pub const SENTINEL_INDEX_BASE: u32 = 0xE100;
/// 序号码位终点（私有使用区末尾）
pub const SENTINEL_INDEX_LAST: u32 = 0xF8FF;

static TEMPLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[^}]+\}\}").expect("template pattern is valid"));

/// 转换对文本方向的影响
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// 保持字符顺序（如简繁转换）
    Forward,
    /// 字符顺序整体反转（如倒置文本）
    Reversed,
}

/// 已替换哨兵的文本及其还原表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedText {
    pub text: String,
    tokens: Vec<String>,
}

/// 是否为保留码位（标记或序号区间）
pub fn is_reserved(ch: char) -> bool {
    let cp = ch as u32;
    ch == SENTINEL_MARKER || (SENTINEL_INDEX_BASE..=SENTINEL_INDEX_LAST).contains(&cp)
}

fn sentinel(index: usize, orientation: Orientation) -> Option<String> {
    let cp = SENTINEL_INDEX_BASE.checked_add(u32::try_from(index).ok()?)?;
    if cp > SENTINEL_INDEX_LAST {
        return None;
    }
    let index_char = char::from_u32(cp)?;
    Some(match orientation {
        Orientation::Forward => [SENTINEL_MARKER, index_char].iter().collect(),
        Orientation::Reversed => [index_char, SENTINEL_MARKER].iter().collect(),
    })
}

/// 按出现顺序把模板变量替换为哨兵
///
/// 文本中已经出现保留码位时拒绝处理，避免与真实内容冲突。
/// 序号码位用尽后，剩余的模板变量保持原样不受保护。
pub fn protect(text: &str) -> Result<ProtectedText, AppError> {
    if let Some(ch) = text.chars().find(|c| is_reserved(*c)) {
        return Err(AppError::ReservedCodePoint {
            code_point: ch as u32,
            text: text.to_string(),
        });
    }

    let mut tokens: Vec<String> = Vec::new();
    let replaced = TEMPLATE_RE.replace_all(text, |caps: &Captures| {
        let matched = caps[0].to_string();
        match sentinel(tokens.len(), Orientation::Forward) {
            Some(marker) => {
                tokens.push(matched);
                marker
            }
            None => matched,
        }
    });

    Ok(ProtectedText {
        text: replaced.into_owned(),
        tokens,
    })
}

impl ProtectedText {
    /// 已保护的模板变量（按出现顺序）
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// 在转换后的文本中找回哨兵并还原为原始模板变量
    pub fn restore(&self, transformed: &str, orientation: Orientation) -> String {
        let mut out = transformed.to_string();
        for (i, token) in self.tokens.iter().enumerate() {
            if let Some(marker) = sentinel(i, orientation) {
                out = out.replace(&marker, token);
            }
        }
        out
    }
}
