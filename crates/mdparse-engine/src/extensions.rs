//! Syntax extension flags.
//!
//! The core never inspects these bits itself; they are threaded unchanged to
//! the grammar and the renderer.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A set of enabled syntax extensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Extensions(u32);

impl Extensions {
    /// Smart punctuation: quotes, dashes, ellipses.
    pub const SMART: Extensions = Extensions(0x01);
    /// Footnotes: `[^label]` references, `[^label]:` definitions, `^[inline]`.
    pub const NOTES: Extensions = Extensions(0x02);
    /// Drop raw HTML blocks and inline HTML from output.
    pub const FILTER_HTML: Extensions = Extensions(0x04);
    /// Drop `<style>` blocks from output.
    pub const FILTER_STYLES: Extensions = Extensions(0x08);
    /// `~~strikethrough~~`.
    pub const STRIKE: Extensions = Extensions(0x10);
    /// Fenced code blocks delimited by ``` or ~~~.
    pub const FENCED_CODE: Extensions = Extensions(0x20);

    pub const fn empty() -> Self {
        Extensions(0)
    }

    pub const fn all() -> Self {
        Extensions(0x3f)
    }

    pub const fn from_bits_truncate(bits: u32) -> Self {
        Extensions(bits & Self::all().0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Extensions) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Extensions) {
        self.0 |= other.0;
    }
}

impl BitOr for Extensions {
    type Output = Extensions;

    fn bitor(self, rhs: Self) -> Self::Output {
        Extensions(self.0 | rhs.0)
    }
}

impl BitOrAssign for Extensions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl FromIterator<Extension> for Extensions {
    fn from_iter<I: IntoIterator<Item = Extension>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Extensions::empty(), |acc, ext| acc | ext.flag())
    }
}

/// A single named extension, as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Extension {
    Smart,
    Notes,
    FilterHtml,
    FilterStyles,
    Strike,
    FencedCode,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown extension: {0}")]
pub struct UnknownExtension(pub String);

impl Extension {
    pub const ALL: [Extension; 6] = [
        Extension::Smart,
        Extension::Notes,
        Extension::FilterHtml,
        Extension::FilterStyles,
        Extension::Strike,
        Extension::FencedCode,
    ];

    pub fn flag(self) -> Extensions {
        match self {
            Extension::Smart => Extensions::SMART,
            Extension::Notes => Extensions::NOTES,
            Extension::FilterHtml => Extensions::FILTER_HTML,
            Extension::FilterStyles => Extensions::FILTER_STYLES,
            Extension::Strike => Extensions::STRIKE,
            Extension::FencedCode => Extensions::FENCED_CODE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Extension::Smart => "smart",
            Extension::Notes => "notes",
            Extension::FilterHtml => "filter-html",
            Extension::FilterStyles => "filter-styles",
            Extension::Strike => "strike",
            Extension::FencedCode => "fenced-code",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Extension {
    type Err = UnknownExtension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Extension::ALL
            .into_iter()
            .find(|ext| ext.name() == wanted)
            .ok_or_else(|| UnknownExtension(s.to_string()))
    }
}
