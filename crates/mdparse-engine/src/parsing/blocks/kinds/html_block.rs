use std::sync::LazyLock;

use regex::Regex;

use super::strip_nonindent_space;

static TAG_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^</?([a-z][a-z0-9]*)(?:\s|/?>|$)").expect("valid tag regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlOpen {
    /// A block-level tag such as `<div>` or `<table>`.
    Block,
    /// `<!-- ... -->`
    Comment,
    /// `<style>`, which may be filtered separately from other HTML.
    Style,
}

pub struct HtmlBlock;

impl HtmlBlock {
    pub const COMMENT_OPEN: &'static str = "<!--";
    pub const COMMENT_CLOSE: &'static str = "-->";
    pub const STYLE_CLOSE: &'static str = "</style>";

    pub const BLOCK_TAGS: &'static [&'static str] = &[
        "address", "blockquote", "center", "dd", "dir", "div", "dl", "dt", "fieldset", "form",
        "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "isindex", "li", "menu",
        "noframes", "noscript", "ol", "p", "pre", "script", "table", "tbody", "td", "tfoot",
        "th", "thead", "tr", "ul",
    ];

    pub fn opens(line: &str) -> Option<HtmlOpen> {
        let t = strip_nonindent_space(line)?;
        if t.starts_with(Self::COMMENT_OPEN) {
            return Some(HtmlOpen::Comment);
        }
        let caps = TAG_OPEN.captures(t)?;
        let name = caps[1].to_ascii_lowercase();
        if name == "style" {
            Some(HtmlOpen::Style)
        } else if Self::BLOCK_TAGS.contains(&name.as_str()) {
            Some(HtmlOpen::Block)
        } else {
            None
        }
    }
}
