//! # Document Tree Elements
//!
//! [`Element`] is the only node type in the tree. Each node carries a
//! [`Content`] payload, a tagged sum whose variant doubles as the node's kind,
//! and an ordered vector of owned children.
//!
//! ## Ownership
//!
//! A node owns its children outright. There are no sibling pointers: a run of
//! siblings is simply the parent's `children` vector, so every node has
//! exactly one owner and the tree is acyclic by construction.
//!
//! ## Raw placeholders
//!
//! [`Content::Raw`] marks text the block grammar could not classify on the
//! first pass (block quote bodies, list item bodies, note bodies). The raw
//! block resolver replaces every such node before the tree is handed out.
//!
//! ## Note references
//!
//! A `[^label]` reference is parsed as a [`Content::NoteRef`] without a body.
//! The resolver attaches the note's body once it has been resolved; every
//! reference to the same note shares that one body, so [`Element::children`]
//! of a reference is the shared body rather than owned children.

use std::sync::Arc;

use serde::Serialize;

/// Internal boundary between nested-list chunks packed into one raw payload.
pub const CHUNK_DELIMITER: char = '\u{1}';

/// Target, title and label shared by links, images and reference definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Destination URL.
    pub url: String,
    /// Optional title attribute (empty when absent).
    pub title: String,
    /// Label text as written in the source, used for reference matching.
    pub label: String,
}

impl Link {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            label: String::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A resolved note body, shared by every reference to the note.
pub type NoteBody = Arc<Vec<Element>>;

/// A `[^label]` note reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteRef {
    /// Label as written between `[^` and `]`.
    pub label: String,
    /// `None` until the raw block resolver attaches the body.
    pub body: Option<NoteBody>,
}

impl NoteRef {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: None,
        }
    }
}

/// Payload of a node. The active variant is the node's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Content {
    /// Generic sequence container; also the synthetic document root.
    List,
    /// Unresolved block text, chunks separated by [`CHUNK_DELIMITER`].
    Raw(String),
    Space,
    LineBreak,
    Ellipsis,
    EmDash,
    EnDash,
    Apostrophe,
    SingleQuoted,
    DoubleQuoted,
    Str(String),
    /// Link; children hold the link text.
    Link(Link),
    /// Image; children hold the alt text.
    Image(Link),
    Code(String),
    /// Inline HTML or an entity, passed through verbatim.
    Html(String),
    Emph,
    Strong,
    Strike,
    /// Inline run not followed by a blank line (tight list items).
    Plain,
    Para,
    ListItem,
    BulletList,
    OrderedList,
    /// ATX or setext heading, level 1-6.
    Heading(u8),
    BlockQuote,
    Verbatim(String),
    HtmlBlock(String),
    HorizontalRule,
    /// Link reference definition; renders nothing.
    Reference(Link),
    /// Note definition (`Some(label)`) or an inline `^[note]` (`None`).
    Note(Option<String>),
    /// Reference to a note definition. Its kind is [`ElementKind::Note`].
    NoteRef(NoteRef),
}

/// Fieldless tag for [`Content`], convenient for visitors and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    List,
    Raw,
    Space,
    LineBreak,
    Ellipsis,
    EmDash,
    EnDash,
    Apostrophe,
    SingleQuoted,
    DoubleQuoted,
    Str,
    Link,
    Image,
    Code,
    Html,
    Emph,
    Strong,
    Strike,
    Plain,
    Para,
    ListItem,
    BulletList,
    OrderedList,
    Heading,
    BlockQuote,
    Verbatim,
    HtmlBlock,
    HorizontalRule,
    Reference,
    Note,
}

impl Content {
    pub fn kind(&self) -> ElementKind {
        match self {
            Content::List => ElementKind::List,
            Content::Raw(_) => ElementKind::Raw,
            Content::Space => ElementKind::Space,
            Content::LineBreak => ElementKind::LineBreak,
            Content::Ellipsis => ElementKind::Ellipsis,
            Content::EmDash => ElementKind::EmDash,
            Content::EnDash => ElementKind::EnDash,
            Content::Apostrophe => ElementKind::Apostrophe,
            Content::SingleQuoted => ElementKind::SingleQuoted,
            Content::DoubleQuoted => ElementKind::DoubleQuoted,
            Content::Str(_) => ElementKind::Str,
            Content::Link(_) => ElementKind::Link,
            Content::Image(_) => ElementKind::Image,
            Content::Code(_) => ElementKind::Code,
            Content::Html(_) => ElementKind::Html,
            Content::Emph => ElementKind::Emph,
            Content::Strong => ElementKind::Strong,
            Content::Strike => ElementKind::Strike,
            Content::Plain => ElementKind::Plain,
            Content::Para => ElementKind::Para,
            Content::ListItem => ElementKind::ListItem,
            Content::BulletList => ElementKind::BulletList,
            Content::OrderedList => ElementKind::OrderedList,
            Content::Heading(_) => ElementKind::Heading,
            Content::BlockQuote => ElementKind::BlockQuote,
            Content::Verbatim(_) => ElementKind::Verbatim,
            Content::HtmlBlock(_) => ElementKind::HtmlBlock,
            Content::HorizontalRule => ElementKind::HorizontalRule,
            Content::Reference(_) => ElementKind::Reference,
            Content::Note(_) | Content::NoteRef(_) => ElementKind::Note,
        }
    }

    /// Literal text owned by this payload, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Raw(s)
            | Content::Str(s)
            | Content::Code(s)
            | Content::Html(s)
            | Content::Verbatim(s)
            | Content::HtmlBlock(s) => Some(s),
            _ => None,
        }
    }
}

/// A single node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub(crate) content: Content,
    pub(crate) children: Vec<Element>,
}

impl Element {
    pub fn new(content: Content) -> Self {
        Self {
            content,
            children: Vec::new(),
        }
    }

    pub fn with_children(content: Content, children: Vec<Element>) -> Self {
        Self { content, children }
    }

    pub fn str(text: impl Into<String>) -> Self {
        Self::new(Content::Str(text.into()))
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(Content::Raw(text.into()))
    }

    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Owned children, or the shared body of an attached note reference.
    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::NoteRef(NoteRef {
                body: Some(body), ..
            }) => body.as_slice(),
            _ => &self.children,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self.content, Content::Raw(_))
    }

    /// Swaps in a new payload and hands back the previous one.
    ///
    /// The kind changes together with the payload; there is no window in which
    /// the two disagree.
    pub fn replace_content(&mut self, content: Content) -> Content {
        std::mem::replace(&mut self.content, content)
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends a parsed sub-sequence after the current last child.
    pub fn append_children(&mut self, mut chain: Vec<Element>) {
        self.children.append(&mut chain);
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Element::node_count).sum::<usize>()
    }

    /// Concatenated `Str`/`Code` text of this subtree, spaces for breaks.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Str(s) | Content::Code(s) => out.push_str(s),
        Content::Space | Content::LineBreak => out.push(' '),
        _ => {}
    }
    for child in element.children() {
        collect_text(child, out);
    }
}
