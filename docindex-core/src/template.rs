//! Fixed HTML fragments that surround the documentation tool's output.
//!
//! Every fragment ends with a newline so that appending them one after another
//! yields one markup block per line group. The stylesheet and script paths are
//! relative to the index page and match godoc's own static assets.

/// Opening markup up to and including the page container.
pub fn header(title: &str) -> String {
    format!(
        r#"<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
<title>{title}</title>
<link type="text/css" rel="stylesheet" href="static/style.css">
<script type="text/javascript" src="static/godocs.js"></script>
<style type="text/css"></style>
</head>
<body>
<div id="page" class="wide">
<div class="container">

"#
    )
}

pub fn title_heading(title: &str) -> String {
    format!("<h1>{title}</h1>\n")
}

/// Opens the index section that wraps godoc's package listing.
pub fn index_open() -> String {
    "<h2 id=\"pkg-index\">Index</h2>\n<div id=\"manual-nav\">\n<dl>\n".to_string()
}

pub fn index_close() -> String {
    "</dl>\n</div><!-- manual-nav -->\n".to_string()
}

/// Closing markup with the license text in a preformatted copyright block.
/// The license is escaped; it is plain text, not markup.
pub fn footer(license: &str) -> String {
    let license = escape_html(license);
    format!(
        r#"
<div id="footer">
<br /><br />
<hr>
<pre class="copyright">
{license}</pre><!-- copyright -->
</div><!-- footer -->

</div><!-- container -->
</div><!-- page -->
</body>
</html>
"#
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
