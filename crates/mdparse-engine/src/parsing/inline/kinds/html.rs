use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([A-Za-z][A-Za-z0-9.+-]{1,31}://[^<>\s]+)>").expect("valid url regex")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<(?:mailto:)?([A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+)>")
        .expect("valid email regex")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)^(?:<!--.*?-->|</?[A-Za-z][A-Za-z0-9]*(?:\s+[A-Za-z_:][-A-Za-z0-9_.:]*(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*\s*/?>)"#,
    )
    .expect("valid tag regex")
});

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:#[xX][0-9A-Fa-f]+|#[0-9]+|[A-Za-z][A-Za-z0-9]*);").expect("valid entity regex")
});

/// `<http://…>` and `<user@host>` links.
pub struct Autolink;

impl Autolink {
    /// Returns the link target, the displayed text and the bytes consumed.
    pub fn parse(s: &str) -> Option<(String, &str, usize)> {
        if let Some(caps) = URL.captures(s) {
            let url = caps.get(1)?.as_str();
            return Some((url.to_string(), url, caps.get(0)?.end()));
        }
        let caps = EMAIL.captures(s)?;
        let addr = caps.get(1)?.as_str();
        Some((format!("mailto:{addr}"), addr, caps.get(0)?.end()))
    }
}

/// Raw inline HTML tags, comments and character entities.
pub struct InlineHtml;

impl InlineHtml {
    pub fn tag(s: &str) -> Option<&str> {
        TAG.find(s).map(|m| m.as_str())
    }

    pub fn entity(s: &str) -> Option<&str> {
        ENTITY.find(s).map(|m| m.as_str())
    }
}
