//! Scenario tests for the bundled grammar together with raw block resolution.
//!
//! Each scenario builds a full document and compares an indented outline of
//! the tree, one node per line.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::document::Document;
use crate::element::{Content, Element, ElementKind};
use crate::extensions::Extensions;
use crate::parsing::{Grammar, MarkdownGrammar};
use crate::render::Format;

fn build(markdown: &str, extensions: Extensions) -> Document {
    let doc = Document::build(markdown, extensions);
    invariants::check(&doc);
    doc
}

fn assert_outline(markdown: &str, extensions: Extensions, expected: &str) {
    let doc = build(markdown, extensions);
    assert_eq!(outline::outline(&doc), expected);
}

#[test]
fn nested_list_chunks_parse_independently() {
    assert_outline(
        "- a\n    - b\n    - c\n- d\n",
        Extensions::empty(),
        r#"BulletList
  ListItem
    List
      Plain
        Str "a"
      BulletList
        ListItem
          List
            Plain
              Str "b"
        ListItem
          List
            Plain
              Str "c"
  ListItem
    List
      Plain
        Str "d"
"#,
    );
}

#[test]
fn loose_list_items_hold_paragraphs() {
    assert_outline(
        "1. a\n\n2. b\n",
        Extensions::empty(),
        r#"OrderedList
  ListItem
    List
      Para
        Str "a"
  ListItem
    List
      Para
        Str "b"
"#,
    );
}

#[test]
fn list_item_with_continuation_paragraph() {
    assert_outline(
        "- a\n\n    b\n- c\n",
        Extensions::empty(),
        r#"BulletList
  ListItem
    List
      Para
        Str "a"
      Para
        Str "b"
  ListItem
    List
      Para
        Str "c"
"#,
    );
}

#[test]
fn block_quote_body_is_reparsed() {
    assert_outline(
        "> # T\n> text\n",
        Extensions::empty(),
        r#"BlockQuote
  List
    Heading 1
      Str "T"
    Para
      Str "text"
"#,
    );
}

#[test]
fn note_bodies_resolve_references() {
    assert_outline(
        "Text[^1].\n\n[^1]: See [x].\n\n[x]: /u\n",
        Extensions::NOTES,
        r#"Para
  Str "Text"
  Note
    List
      Para
        Str "See"
        Space
        Link "/u"
          Str "x"
        Str "."
  Str "."
Note "1"
  List
    Para
      Str "See"
      Space
      Link "/u"
        Str "x"
      Str "."
Reference
"#,
    );
}

#[test]
fn note_syntax_is_plain_text_without_extension() {
    let doc = build("Text[^1].\n", Extensions::empty());
    assert_eq!(doc.children()[0].plain_text(), "Text[^1].");
}

#[test]
fn delimiter_in_input_cannot_split_blocks() {
    let doc = build("- a\u{1}b\n", Extensions::empty());
    let item = &doc.children()[0].children()[0];
    assert_eq!(item.children()[0].children().len(), 1);
    assert_eq!(item.plain_text(), "a\u{fffd}b");
}

#[test]
fn references_are_top_level_only() {
    let refs = MarkdownGrammar.references("[a]: /a\n\n> [b]: /b\n\n", Extensions::empty());
    assert_eq!(refs.len(), 1);
    assert!(refs.get("A").is_some());
}

#[test]
fn notes_require_extension() {
    let text = "[^n]: body\n\n";
    let refs = MarkdownGrammar.references(text, Extensions::NOTES);
    assert_eq!(MarkdownGrammar.notes(text, Extensions::NOTES, &refs).len(), 1);
    assert!(MarkdownGrammar.notes(text, Extensions::empty(), &refs).is_empty());
}

#[test]
fn filtered_html_leaves_empty_lists() {
    let doc = build("<div>\nx\n</div>\n", Extensions::FILTER_HTML);
    assert_eq!(doc.children()[0].content(), &Content::List);
    assert!(doc.children()[0].children().is_empty());
}

#[rstest]
#[case("")]
#[case("\u{1}")]
#[case("- \u{1}\n  \u{1}")]
#[case("\t- a\n\t\t- b\n")]
#[case("* a\n\n    * b\n\n        * c\n")]
#[case("1. a\n    > q\n    > r\n2. b\n")]
#[case("> - a\n>     - b\n")]
#[case("[^x]: note\n\n    more\n\n[^x] and [^y]\n")]
#[case("^[inline *note*] text")]
#[case("*** a *** b ** c __ d _ e")]
#[case("`` ` `` [ ![ ^[ < & ~~ \\")]
#[case("[link](</a b> \"t\") <http://x.y> <a@b.cd>")]
#[case("```\nunterminated\n")]
#[case("<!-- open\n\nstill comment\n")]
#[case("Setext\n---\n\n- - -\n")]
#[case("a[^1]\n\n[^1]: see [^1]\n")]
#[case("[^a] [^b]\n\n[^a]: to [^b]\n\n[^b]: to [^a]\n")]
#[case("[^1]\n\n[^1]: [^2] [^2]\n\n[^2]: [^3] [^3]\n\n[^3]: end\n")]
#[case("- [^1]\n\n[^1]: > - [^1]\n")]
fn no_raw_blocks_survive(#[case] input: &str) {
    build(input, Extensions::all());
    build(input, Extensions::empty());
}

#[test]
fn self_referencing_note_expands_once() {
    let doc = build("Text[^1].\n\n[^1]: see [^1] again\n", Extensions::NOTES);
    assert_eq!(doc.children()[0].plain_text(), "Textsee [^1] again.");

    let html = doc.render(Format::Html);
    assert_eq!(html.matches("<li id=").count(), 1);
    assert!(html.contains("<p>see [^1] again</p>"));
}

#[test]
fn mutually_referencing_notes_terminate() {
    let doc = build(
        "[^a] and [^b]\n\n[^a]: to [^b]\n\n[^b]: to [^a]\n",
        Extensions::NOTES,
    );
    let html = doc.render(Format::Html);
    assert_eq!(html.matches("<li id=").count(), 2);
    assert!(html.contains("to [^a]"));
}

#[test]
fn repeated_references_down_a_note_chain_stay_linear() {
    let mut input = String::from("start[^n0]\n\n");
    for i in 0..40 {
        input.push_str(&format!("[^n{i}]: x [^n{j}] and [^n{j}]\n\n", j = i + 1));
    }
    input.push_str("[^n40]: end\n");

    // Fully expanded, this would hold 2^40 copies of the last note.
    let doc = build(&input, Extensions::NOTES);
    let html = doc.render(Format::Html);
    assert_eq!(html.matches("<li id=").count(), 41);
    assert!(html.contains("<p>end</p>"));
}

#[test]
fn deeply_nested_quotes_resolve() {
    let input = format!("{}deep\n", "> ".repeat(5000));
    let doc = build(&input, Extensions::empty());
    let mut max_depth = 0;
    let mut quotes = 0;
    doc.traverse(&mut |el: &Element, depth: usize| {
        max_depth = max_depth.max(depth);
        quotes += usize::from(el.kind() == ElementKind::BlockQuote);
        true
    });
    assert_eq!(quotes, 5000);
    assert!(max_depth >= 10_000);
}
