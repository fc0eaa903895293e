use std::collections::HashMap;
use std::sync::Arc;

use crate::element::{Content, Element, Link, NoteRef};

use super::Renderer;

/// Classic markdown HTML output.
///
/// Block elements are separated by blank lines, list items and tight
/// paragraphs by single newlines. Note references become numbered links and
/// the note bodies are emitted as an ordered list after the document. All
/// references to one note share its number and its single endnote.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, root: &Element) -> String {
        let mut writer = HtmlWriter::new();
        writer.element(root);
        if !writer.notes.is_empty() {
            writer.pad(2);
            writer.endnotes();
        }
        writer.out
    }
}

struct HtmlWriter<'t> {
    out: String,
    /// Newlines already written since the last block; blocks ask for one or two.
    padded: usize,
    notes: Vec<&'t [Element]>,
    /// Endnote number of each shared note body already listed.
    numbered: HashMap<*const Vec<Element>, usize>,
}

impl<'t> HtmlWriter<'t> {
    fn new() -> Self {
        Self {
            out: String::new(),
            padded: 2,
            notes: Vec::new(),
            numbered: HashMap::new(),
        }
    }

    fn pad(&mut self, lines: usize) {
        for _ in self.padded..lines {
            self.out.push('\n');
        }
    }

    fn text(&mut self, text: &str) {
        html_escape::encode_double_quoted_attribute_to_string(text, &mut self.out);
    }

    fn children(&mut self, element: &'t Element) {
        self.sequence(element.children());
    }

    fn sequence(&mut self, elements: &'t [Element]) {
        for child in elements {
            self.element(child);
        }
    }

    fn wrap(&mut self, open: &str, element: &'t Element, close: &str) {
        self.out.push_str(open);
        self.children(element);
        self.out.push_str(close);
    }

    /// Writes a block element on its own line, after `pad` newlines.
    fn block(&mut self, pad: usize, open: &str, element: &'t Element, close: &str) {
        self.pad(pad);
        self.wrap(open, element, close);
        self.padded = 0;
    }

    fn element(&mut self, element: &'t Element) {
        match element.content() {
            Content::List => self.children(element),
            Content::Raw(_) => panic!("unresolved raw block reached the HTML renderer"),
            Content::Space => self.out.push(' '),
            Content::LineBreak => self.out.push_str("<br/>\n"),
            Content::Str(s) => self.text(s),
            Content::Ellipsis => self.out.push_str("&hellip;"),
            Content::EmDash => self.out.push_str("&mdash;"),
            Content::EnDash => self.out.push_str("&ndash;"),
            Content::Apostrophe => self.out.push_str("&rsquo;"),
            Content::SingleQuoted => self.wrap("&lsquo;", element, "&rsquo;"),
            Content::DoubleQuoted => self.wrap("&ldquo;", element, "&rdquo;"),
            Content::Code(code) => {
                self.out.push_str("<code>");
                self.text(code);
                self.out.push_str("</code>");
            }
            Content::Html(html) => self.out.push_str(html),
            Content::Link(link) => self.link(link, element),
            Content::Image(link) => self.image(link, element),
            Content::Emph => self.wrap("<em>", element, "</em>"),
            Content::Strong => self.wrap("<strong>", element, "</strong>"),
            Content::Strike => self.wrap("<del>", element, "</del>"),
            Content::Heading(level) => {
                self.block(2, &format!("<h{level}>"), element, &format!("</h{level}>"));
            }
            Content::Plain => self.block(1, "", element, ""),
            Content::Para => self.block(2, "<p>", element, "</p>"),
            Content::HorizontalRule => {
                self.pad(2);
                self.out.push_str("<hr />");
                self.padded = 0;
            }
            Content::HtmlBlock(html) => {
                self.pad(2);
                self.out.push_str(html);
                self.padded = 0;
            }
            Content::Verbatim(code) => {
                self.pad(2);
                self.out.push_str("<pre><code>");
                self.text(code);
                self.out.push_str("</code></pre>");
                self.padded = 0;
            }
            Content::BulletList => self.list("ul", element),
            Content::OrderedList => self.list("ol", element),
            Content::ListItem => {
                self.pad(1);
                self.out.push_str("<li>");
                self.padded = 2;
                self.children(element);
                self.out.push_str("</li>");
                self.padded = 0;
            }
            Content::BlockQuote => {
                self.pad(2);
                self.out.push_str("<blockquote>\n");
                self.padded = 2;
                self.children(element);
                self.pad(1);
                self.out.push_str("</blockquote>");
                self.padded = 0;
            }
            Content::Note(None) => {
                self.notes.push(element.children());
                self.note_link(self.notes.len(), true);
            }
            Content::NoteRef(NoteRef {
                body: Some(body), ..
            }) => {
                let key = Arc::as_ptr(body);
                if let Some(&n) = self.numbered.get(&key) {
                    self.note_link(n, false);
                } else {
                    self.notes.push(body.as_slice());
                    let n = self.notes.len();
                    self.numbered.insert(key, n);
                    self.note_link(n, true);
                }
            }
            Content::NoteRef(NoteRef { label, body: None }) => {
                self.out.push_str("[^");
                self.text(label);
                self.out.push(']');
            }
            // Definitions print nothing.
            Content::Note(Some(_)) | Content::Reference(_) => {}
        }
    }

    /// Only the first reference to a note carries the id its back link targets.
    fn note_link(&mut self, n: usize, first: bool) {
        self.out.push_str("<a class=\"noteref\"");
        if first {
            self.out.push_str(&format!(" id=\"fnref{n}\""));
        }
        self.out.push_str(&format!(
            " href=\"#fn{n}\" title=\"Jump to note {n}\">[{n}]</a>"
        ));
    }

    fn link(&mut self, link: &Link, element: &'t Element) {
        self.out.push_str("<a href=\"");
        self.text(&link.url);
        self.out.push('"');
        if !link.title.is_empty() {
            self.out.push_str(" title=\"");
            self.text(&link.title);
            self.out.push('"');
        }
        self.wrap(">", element, "</a>");
    }

    fn image(&mut self, link: &Link, element: &'t Element) {
        self.out.push_str("<img src=\"");
        self.text(&link.url);
        self.out.push_str("\" alt=\"");
        self.text(&element.plain_text());
        self.out.push('"');
        if !link.title.is_empty() {
            self.out.push_str(" title=\"");
            self.text(&link.title);
            self.out.push('"');
        }
        self.out.push_str(" />");
    }

    fn list(&mut self, tag: &str, element: &'t Element) {
        self.pad(2);
        self.out.push_str(&format!("<{tag}>"));
        self.padded = 0;
        self.children(element);
        self.pad(1);
        self.out.push_str(&format!("</{tag}>"));
        self.padded = 0;
    }

    fn endnotes(&mut self) {
        self.out.push_str("<hr/>\n<ol id=\"notes\">");
        // Notes may reference further notes, which extend the list as it is written.
        let mut index = 0;
        while let Some(note) = self.notes.get(index).copied() {
            index += 1;
            self.pad(1);
            self.out.push_str(&format!("<li id=\"fn{index}\">\n"));
            self.padded = 2;
            self.sequence(note);
            self.out.push_str(&format!(
                " <a href=\"#fnref{index}\" title=\"Jump back to reference\">[back]</a>"
            ));
            self.pad(1);
            self.out.push_str("</li>");
            self.padded = 0;
        }
        self.pad(1);
        self.out.push_str("</ol>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(children: Vec<Element>) -> String {
        HtmlRenderer.render(&Element::with_children(Content::List, children))
    }

    fn para(children: Vec<Element>) -> Element {
        Element::with_children(Content::Para, children)
    }

    #[test]
    fn paragraphs_are_separated_by_blank_lines() {
        let html = render(vec![
            para(vec![Element::str("a")]),
            para(vec![Element::str("b")]),
        ]);
        assert_eq!(html, "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn text_is_escaped() {
        let html = render(vec![para(vec![Element::str("<a & \"b\">")])]);
        assert_eq!(html, "<p>&lt;a &amp; &quot;b&quot;&gt;</p>");
    }

    #[test]
    fn tight_list() {
        let item = |t: &str| {
            Element::with_children(
                Content::ListItem,
                vec![Element::with_children(Content::Plain, vec![Element::str(t)])],
            )
        };
        let html = render(vec![Element::with_children(
            Content::BulletList,
            vec![item("a"), item("b")],
        )]);
        assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn links_and_images() {
        let link = Element::with_children(
            Content::Link(Link::new("/u?a&b", "T")),
            vec![Element::str("x")],
        );
        let image = Element::with_children(
            Content::Image(Link::new("/i.png", "")),
            vec![Element::str("alt")],
        );
        assert_eq!(
            render(vec![para(vec![link, image])]),
            "<p><a href=\"/u?a&amp;b\" title=\"T\">x</a><img src=\"/i.png\" alt=\"alt\" /></p>"
        );
    }

    #[test]
    fn definitions_render_nothing() {
        let html = render(vec![
            Element::new(Content::Reference(Link::new("/x", ""))),
            Element::new(Content::Note(Some("1".into()))),
        ]);
        assert_eq!(html, "");
    }

    #[test]
    fn note_references_become_endnotes() {
        let note = Element::with_children(
            Content::Note(None),
            vec![Element::with_children(
                Content::List,
                vec![para(vec![Element::str("n")])],
            )],
        );
        let html = render(vec![para(vec![Element::str("a"), note])]);
        assert_eq!(
            html,
            "<p>a<a class=\"noteref\" id=\"fnref1\" href=\"#fn1\" title=\"Jump to note 1\">[1]</a></p>\n\n\
             <hr/>\n<ol id=\"notes\">\n<li id=\"fn1\">\n<p>n</p> \
             <a href=\"#fnref1\" title=\"Jump back to reference\">[back]</a>\n</li>\n</ol>"
        );
    }

    #[test]
    fn references_to_one_note_share_an_endnote() {
        let mut note = NoteRef::new("n");
        note.body = Some(Arc::new(vec![para(vec![Element::str("n")])]));
        let first = Element::new(Content::NoteRef(note.clone()));
        let second = Element::new(Content::NoteRef(note));
        let html = render(vec![para(vec![first, second])]);
        assert_eq!(
            html,
            "<p><a class=\"noteref\" id=\"fnref1\" href=\"#fn1\" title=\"Jump to note 1\">[1]</a>\
             <a class=\"noteref\" href=\"#fn1\" title=\"Jump to note 1\">[1]</a></p>\n\n\
             <hr/>\n<ol id=\"notes\">\n<li id=\"fn1\">\n<p>n</p> \
             <a href=\"#fnref1\" title=\"Jump back to reference\">[back]</a>\n</li>\n</ol>"
        );
    }

    #[test]
    #[should_panic(expected = "unresolved raw block")]
    fn raw_blocks_are_rejected() {
        render(vec![Element::raw("x")]);
    }
}
