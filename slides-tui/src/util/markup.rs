//! Slide 片段转终端文本
//!
//! 终端无法渲染 HTML，这里只做近似：块级标签断行、标题加粗、列表项加圆点，
//! 其余标签剥掉，常见实体解码。不是 HTML 解析器。

use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// `<script>`/`<style>`/`<noscript>`/`<template>`/`<svg>` 连同内容整体丢弃
#[allow(clippy::expect_used)]
static HIDDEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|noscript|template|svg)(?:\s[^>]*)?>.*?</(?:script|style|noscript|template|svg)\s*>")
        .expect("hidden pattern")
});

#[allow(clippy::expect_used)]
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern"));

/// 任意标签，捕获：1 = 闭合斜杠，2 = 标签名
#[allow(clippy::expect_used)]
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9-]*)[^>]*>").expect("tag pattern"));

#[allow(clippy::expect_used)]
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z]+);").expect("entity pattern")
});

/// 行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Item,
    Body,
}

/// 一行 slide 文本（尚未按宽度折行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideLine {
    pub kind: LineKind,
    pub text: String,
}

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "header", "footer", "nav", "main", "aside", "ul", "ol",
    "table", "tr", "blockquote", "pre", "figure", "figcaption", "dl", "dt", "dd", "br", "hr",
];

fn is_heading(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// 将片段转换为行
pub fn fragment_to_lines(fragment: &str) -> Vec<SlideLine> {
    let cleaned = HIDDEN_RE.replace_all(fragment, "");
    let cleaned = COMMENT_RE.replace_all(&cleaned, "");

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut kind = LineKind::Body;
    let mut last = 0;

    for caps in TAG_RE.captures_iter(&cleaned) {
        let Some(whole) = caps.get(0) else { continue };
        current.push_str(&cleaned[last..whole.start()]);
        last = whole.end();

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let tag = caps
            .get(2)
            .map(|m| m.as_str().to_ascii_lowercase())
            .unwrap_or_default();

        if is_heading(&tag) {
            flush(&mut lines, &mut current, kind);
            kind = if closing { LineKind::Body } else { LineKind::Heading };
        } else if tag == "li" {
            flush(&mut lines, &mut current, kind);
            kind = if closing { LineKind::Body } else { LineKind::Item };
        } else if BLOCK_TAGS.contains(&tag.as_str()) {
            flush(&mut lines, &mut current, kind);
        } else if matches!(tag.as_str(), "td" | "th") && closing {
            current.push(' ');
        }
    }
    current.push_str(&cleaned[last..]);
    flush(&mut lines, &mut current, kind);

    lines
}

/// 结束当前行：解码实体、压缩空白，空行丢弃
fn flush(lines: &mut Vec<SlideLine>, current: &mut String, kind: LineKind) {
    let decoded = decode_entities(current);
    let text = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    current.clear();
    if !text.is_empty() {
        lines.push(SlideLine { kind, text });
    }
}

/// 解码常见实体与数字实体，未知实体原样保留
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                "mdash" => Some('—'),
                "ndash" => Some('–'),
                "hellip" => Some('…'),
                "copy" => Some('©'),
                _ => name.strip_prefix('#').and_then(|num| {
                    let code = match num.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => num.parse().ok(),
                    };
                    code.and_then(char::from_u32)
                }),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

/// 按显示宽度折行（按词；超长词硬切）
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.width()
        } else {
            line.width() + 1 + word.width()
        };
        if needed <= width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            continue;
        }
        if !line.is_empty() {
            out.push(std::mem::take(&mut line));
        }
        if word.width() <= width {
            line.push_str(word);
        } else {
            for ch in word.chars() {
                if line.width() + unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0) > width {
                    out.push(std::mem::take(&mut line));
                }
                line.push(ch);
            }
        }
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}
