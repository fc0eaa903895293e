use mdparse_engine::{
    Extensions, Format, format_extended_markdown, format_markdown, format_tree, parse_markdown,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn html(markdown: &str, extensions: Extensions) -> String {
    init_logging();
    format_extended_markdown(markdown, extensions, Format::Html)
}

#[rstest]
#[case("", "")]
#[case("Hello *world*", "<p>Hello <em>world</em></p>")]
#[case("Title\n=====\n\n***\n", "<h1>Title</h1>\n\n<hr />")]
#[case("\tcode\n", "<pre><code>code\n</code></pre>")]
#[case("a  \nb\n", "<p>a<br/>\nb</p>")]
#[case("1 < 2 & \"3\"", "<p>1 &lt; 2 &amp; &quot;3&quot;</p>")]
#[case(
    "[x](/u \"t\") and <http://a.b>",
    "<p><a href=\"/u\" title=\"t\">x</a> and <a href=\"http://a.b\">http://a.b</a></p>"
)]
#[case("![alt *text*](/i.png)", "<p><img src=\"/i.png\" alt=\"alt text\" /></p>")]
fn basic_markup(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(html(markdown, Extensions::empty()), expected);
}

#[test]
fn nested_tight_list() {
    assert_eq!(
        html("- a\n    - b\n    - c\n- d\n", Extensions::empty()),
        "<ul>\n<li>a\n\n<ul>\n<li>b</li>\n<li>c</li>\n</ul></li>\n<li>d</li>\n</ul>"
    );
}

#[test]
fn loose_ordered_list() {
    assert_eq!(
        html("1. a\n\n2. b\n", Extensions::empty()),
        "<ol>\n<li><p>a</p></li>\n<li><p>b</p></li>\n</ol>"
    );
}

#[test]
fn block_quote_with_heading() {
    assert_eq!(
        html("> # T\n> text\n", Extensions::empty()),
        "<blockquote>\n<h1>T</h1>\n\n<p>text</p>\n</blockquote>"
    );
}

#[test]
fn code_blocks() {
    assert_eq!(
        html("    let x = 1;\n\n```\nfenced <b>\n```\n", Extensions::FENCED_CODE),
        "<pre><code>let x = 1;\n</code></pre>\n\n<pre><code>fenced &lt;b&gt;\n</code></pre>"
    );
}

#[test]
fn notes_render_as_endnotes() {
    let markdown =
        "Text[^1] and more.\n\n[^1]: The note with [a link][x].\n\n[x]: http://example.com\n";
    assert_eq!(
        html(markdown, Extensions::NOTES),
        "<p>Text<a class=\"noteref\" id=\"fnref1\" href=\"#fn1\" title=\"Jump to note 1\">[1]</a> and more.</p>\n\n\
         <hr/>\n<ol id=\"notes\">\n<li id=\"fn1\">\n\
         <p>The note with <a href=\"http://example.com\">a link</a>.</p> \
         <a href=\"#fnref1\" title=\"Jump back to reference\">[back]</a>\n</li>\n</ol>"
    );
}

#[test]
fn smart_punctuation_and_strike() {
    assert_eq!(
        html("\"Hi\" -- it's ~~gone~~...", Extensions::SMART | Extensions::STRIKE),
        "<p>&ldquo;Hi&rdquo; &mdash; it&rsquo;s <del>gone</del>&hellip;</p>"
    );
}

#[rstest]
#[case(
    Extensions::empty(),
    "<div>x</div>\n\n<style>p{}</style>\n\n<p>Text <b>b</b></p>"
)]
#[case(Extensions::FILTER_STYLES, "<div>x</div>\n\n<p>Text <b>b</b></p>")]
#[case(Extensions::FILTER_HTML | Extensions::FILTER_STYLES, "<p>Text b</p>")]
fn html_filters(#[case] extensions: Extensions, #[case] expected: &str) {
    let markdown = "<div>x</div>\n\n<style>p{}</style>\n\nText <b>b</b>\n";
    assert_eq!(html(markdown, extensions), expected);
}

#[test]
fn format_markdown_uses_no_extensions() {
    init_logging();
    assert_eq!(format_markdown("it's ~~x~~", Format::Html), "<p>it's ~~x~~</p>");
}

#[test]
fn rendering_a_parsed_document_matches_one_shot_formatting() {
    init_logging();
    let markdown = "# A\n\n> b\n\n- c\n";
    let doc = parse_markdown(markdown);
    assert_eq!(
        format_tree(doc.root(), Format::Html),
        format_markdown(markdown, Format::Html)
    );
    insta::assert_snapshot!(
        doc.render(Format::Html).replace('\n', "|"),
        @"<h1>A</h1>||<blockquote>|<p>b</p>|</blockquote>||<ul>|<li>c</li>|</ul>"
    );
}
