pub mod code_span;
pub mod delimiter;
pub mod html;
pub mod link;

pub use code_span::CodeSpan;
pub use delimiter::Delim;
pub use html::{Autolink, InlineHtml};
pub use link::{LinkSource, matching_bracket, reference_label};
