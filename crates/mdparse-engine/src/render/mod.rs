//! # Rendering
//!
//! A [`Renderer`] turns a fully resolved tree into output text. [`Format`]
//! selects one; HTML is the only format the crate ships.

pub mod html;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;

pub use html::HtmlRenderer;

/// Output format selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown output format: {0}")]
pub struct UnknownFormat(pub String);

impl Format {
    pub const ALL: [Format; 1] = [Format::Html];

    pub fn name(self) -> &'static str {
        match self {
            Format::Html => "html",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Format::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Produces output text from a resolved tree.
pub trait Renderer {
    fn render(&self, root: &Element) -> String;
}

/// Renders `root` in the selected format.
///
/// # Panics
/// Panics if the tree still contains an unresolved raw block.
pub fn format_tree(root: &Element, format: Format) -> String {
    match format {
        Format::Html => HtmlRenderer.render(root),
    }
}
