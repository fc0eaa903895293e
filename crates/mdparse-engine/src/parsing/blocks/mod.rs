//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (indentation, quote marker, list marker, fence, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` walks the classified lines
//!    and emits `Element`s as blocks open and close
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote, CodeFence,
//!   Heading, ListMarker, HtmlBlock, definitions)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Container bodies are never parsed in place: block quotes, list items and
//!   note definitions carry their de-prefixed text as `Raw` children
//! - A list item whose text is directly followed by an indented continuation
//!   joins the two with the chunk delimiter so each parses on its own
//! - Verbatim and fenced code are raw zones: no inline parsing inside

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier, split_lines};
