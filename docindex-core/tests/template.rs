use docindex_core::template::{escape_html, footer, header, index_close, index_open, title_heading};

const LICENSE: &str = "Copyright (c) 2015 The Goga Authors. All rights reserved.\n";
const TITLE: &str = "Goga &ndash; Documentation";

#[test]
fn header_and_footer_are_deterministic() {
    let first = header(TITLE) + &footer(LICENSE);
    let second = header(TITLE) + &footer(LICENSE);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn header_carries_title_and_assets() {
    let h = header(TITLE);
    assert!(h.starts_with("<html>\n<head>\n"));
    assert!(h.contains("<title>Goga &ndash; Documentation</title>"));
    assert!(h.contains(r#"<link type="text/css" rel="stylesheet" href="static/style.css">"#));
    assert!(h.contains(r#"<script type="text/javascript" src="static/godocs.js"></script>"#));
    assert!(h.contains(r#"<div id="page" class="wide">"#));
    assert!(h.ends_with("<div class=\"container\">\n\n"));
}

#[test]
fn title_heading_keeps_entities() {
    assert_eq!(
        title_heading(TITLE),
        "<h1>Goga &ndash; Documentation</h1>\n"
    );
}

#[test]
fn index_section_fragments_pair_up() {
    let open = index_open();
    let close = index_close();
    assert_eq!(
        open,
        "<h2 id=\"pkg-index\">Index</h2>\n<div id=\"manual-nav\">\n<dl>\n"
    );
    assert_eq!(close, "</dl>\n</div><!-- manual-nav -->\n");
}

#[test]
fn footer_wraps_license_in_copyright_block() {
    let f = footer(LICENSE);
    assert!(f.contains(
        "<pre class=\"copyright\">\nCopyright (c) 2015 The Goga Authors. All rights reserved.\n</pre><!-- copyright -->"
    ));
    assert!(f.ends_with("</body>\n</html>\n"));
}

#[test]
fn footer_escapes_markup_in_license() {
    let f = footer("Contact <dev@example.org> & friends\n");
    assert!(f.contains("Contact &lt;dev@example.org&gt; &amp; friends"));
    assert!(!f.contains("<dev@example.org>"));
}

#[test]
fn footer_keeps_shell_sensitive_characters_verbatim() {
    let f = footer("quote \" backtick ` dollar $HOME\n");
    assert!(f.contains("quote \" backtick ` dollar $HOME"));
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("plain text 123"), "plain text 123");
    assert_eq!(escape_html("a<b>&c"), "a&lt;b&gt;&amp;c");
}
