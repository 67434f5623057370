use std::fmt::Write;

use crate::data_models::{KeywordResults, NO_LINK};

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; text-align: center; margin: 50px; }
        input { padding: 10px; margin: 10px; width: 300px; }
        button { padding: 10px; background: blue; color: white; border: none; cursor: pointer; }
        #results { margin-top: 20px; text-align: left; }
        .error { color: #b00020; margin-top: 10px; }
        footer { margin-top: 30px; font-size: 0.9em; color: #555; }
        footer a { color: #007BFF; text-decoration: none; }
        footer a:hover { text-decoration: underline; }
"#;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Only http(s) links are emitted as-is; anything else (javascript:, data:, relative) becomes `#`.
pub fn safe_link(link: &str) -> String {
    match reqwest::Url::parse(link) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => escape_html(link),
        _ => NO_LINK.to_string(),
    }
}

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dual Search</title>
    <style>{STYLE}</style>
</head>
<body>
    <h1>Dual Search</h1>
{body}
    <footer>
        Results from <a href="https://serper.dev" target="_blank">Serper</a>
    </footer>
</body>
</html>
"#
    )
}

fn form(keywords: &[&str]) -> String {
    let value = |i: usize| escape_html(keywords.get(i).copied().unwrap_or(""));
    format!(
        r#"    <form method="get" action="/search">
        <input type="text" name="keyword1" placeholder="Enter first keyword" value="{}">
        <input type="text" name="keyword2" placeholder="Enter second keyword" value="{}">
        <button type="submit">Search</button>
    </form>
"#,
        value(0),
        value(1)
    )
}

/// The search form, optionally with an error banner and the previously entered keywords.
pub fn index_page(error: Option<&str>, keywords: &[&str]) -> String {
    let mut body = form(keywords);
    if let Some(error) = error {
        let _ = writeln!(body, r#"    <div class="error">{}</div>"#, escape_html(error));
    }
    page(&body)
}

/// Results for each searched keyword, under a form pre-filled with `entered` as the user typed it.
pub fn results_page(sections: &[KeywordResults], entered: &[&str]) -> String {
    let mut body = form(entered);

    body.push_str("    <div id=\"results\">\n        <h2>Results:</h2>\n");
    for section in sections {
        let _ = writeln!(
            body,
            "        <h3>{} Results:</h3>",
            escape_html(&section.keyword)
        );
        if section.results.is_empty() {
            body.push_str("        <p>No results found.</p>\n");
        }
        for result in &section.results {
            let _ = writeln!(
                body,
                r#"        <p><strong>{}</strong><br>{}<br><a href="{}" target="_blank" rel="noopener noreferrer">Read more</a></p>"#,
                escape_html(&result.title),
                escape_html(&result.snippet),
                safe_link(&result.link),
            );
        }
    }
    body.push_str("    </div>\n");
    page(&body)
}
