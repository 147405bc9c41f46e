//! 倒置英文：逐字符映射为"旋转 180°"的对应字符，再整体反转

use crate::model::data_core::AppError;
use crate::transform::placeholder::{protect, Orientation};
use crate::transform::StringTransformer;

/// 字符与其旋转后的对应字符，映射双向成立
const FLIP_PAIRS: &[(char, char)] = &[
    ('a', 'ɐ'), ('b', 'q'), ('c', 'ɔ'), ('d', 'p'), ('e', 'ǝ'), ('f', 'ɟ'), ('g', 'ᵷ'),
    ('h', 'ɥ'), ('i', 'ᴉ'), ('j', 'ɾ'), ('k', 'ʞ'), ('l', 'ꞁ'), ('m', 'ɯ'), ('n', 'u'),
    ('o', 'o'), ('r', 'ɹ'), ('s', 's'), ('t', 'ʇ'), ('v', 'ʌ'), ('w', 'ʍ'), ('x', 'x'),
    ('y', 'ʎ'), ('z', 'z'),
    ('A', 'Ɐ'), ('B', 'ᗺ'), ('C', 'Ɔ'), ('D', 'ᗡ'), ('E', 'Ǝ'), ('F', 'Ⅎ'), ('G', '⅁'),
    ('H', 'H'), ('I', 'I'), ('J', 'ſ'), ('K', 'ꓘ'), ('L', 'Ꞁ'), ('M', 'W'), ('N', 'N'),
    ('O', 'O'), ('P', 'Ԁ'), ('Q', 'Ὁ'), ('R', 'ᴚ'), ('S', 'S'), ('T', '⟘'), ('U', '∩'),
    ('V', 'Λ'), ('X', 'X'), ('Y', '⅄'), ('Z', 'Z'),
    ('0', '0'), ('1', 'Ɩ'), ('2', 'ᘔ'), ('3', 'Ɛ'), ('4', 'ㄣ'), ('5', 'ϛ'), ('6', '9'),
    ('7', 'ㄥ'), ('8', '8'),
    ('_', '‾'), (',', '\''), (';', '⸵'), ('.', '˙'), ('?', '¿'), ('!', '¡'), ('/', '\\'),
    ('(', ')'), ('[', ']'), ('{', '}'),
];

/// 查表翻转单个字符，未收录的字符原样返回
pub fn flip_char(ch: char) -> char {
    for &(plain, rotated) in FLIP_PAIRS {
        if ch == plain {
            return rotated;
        }
        if ch == rotated {
            return plain;
        }
    }
    ch
}

/// 倒置文本转换：保护模板变量 → 逐字符映射 → 反转 → 还原模板变量
#[derive(Debug, Default, Clone, Copy)]
pub struct FlipTransform;

impl FlipTransform {
    pub fn new() -> Self {
        Self
    }
}

impl StringTransformer for FlipTransform {
    fn name(&self) -> &'static str {
        "upside-down"
    }

    fn transform(&self, text: &str) -> Result<String, AppError> {
        if text.is_empty() {
            return Ok(String::new());
        }
        let protected = protect(text)?;
        let flipped: String = protected.text.chars().map(flip_char).rev().collect();
        Ok(protected.restore(&flipped, Orientation::Reversed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn flip(text: &str) -> String {
        FlipTransform::new().transform(text).unwrap()
    }

    #[test]
    fn test_table_is_bijective() {
        let mut seen = HashSet::new();
        for &(plain, rotated) in FLIP_PAIRS {
            assert!(seen.insert(plain), "重复的原字符: {plain}");
            if plain != rotated {
                assert!(seen.insert(rotated), "重复的目标字符: {rotated}");
            }
        }
        for &(plain, _) in FLIP_PAIRS {
            assert_eq!(flip_char(flip_char(plain)), plain);
        }
    }

    #[test]
    fn test_flip_round_trip() {
        let s = "Hello_World123!";
        assert_eq!(flip(&flip(s)), s);
    }

    #[test]
    fn test_flip_simple_word() {
        assert_eq!(flip("abc"), "ɔqɐ");
        assert_eq!(flip("Hi!"), "¡ᴉH");
    }

    #[test]
    fn test_template_survives() {
        let out = flip("Hi {{name}}!");
        assert!(out.contains("{{name}}"));
        assert_eq!(out, "¡{{name}} ᴉH");
    }

    #[test]
    fn test_greeting_example() {
        assert_eq!(flip("Hello, {{user}}!"), "¡{{user}} 'oꞁꞁǝH");
    }

    #[test]
    fn test_multiple_templates_swap_positions() {
        assert_eq!(flip("{{a}} to {{b}}"), "{{b}} oʇ {{a}}");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(flip("中文"), "文中");
        assert_eq!(flip(""), "");
    }

    #[test]
    fn test_reserved_code_point_is_error() {
        assert!(FlipTransform::new().transform("x\u{E000}").is_err());
    }
}
