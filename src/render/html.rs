//! Full HTML page around rendered markup.

use crate::diagnostics::SummaryLanguage;

const STYLESHEET: &str = r#"        body {
            font-family: 'Times New Roman', serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background-color: #fff;
        }
        h1, h2, h3, h4, h5, h6 {
            color: #333;
            margin-top: 1.5em;
            margin-bottom: 0.5em;
        }
        p {
            margin-bottom: 1em;
        }
        .table-caption {
            font-style: italic;
            text-align: center;
            font-size: 0.9em;
            margin: 0.5em 0;
        }
        .other {
            background-color: #f9f9f9;
            padding: 10px;
            border-left: 3px solid #ccc;
            margin: 1em 0;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 1em 0;
        }
        table, th, td {
            border: 1px solid #ccc;
        }
        th, td {
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #f5f5f5;
        }"#;

/// Wrap a rendered fragment in a standalone HTML page titled with the filename.
pub fn complete_html(html_content: &str, filename: &str, language: SummaryLanguage) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{style}
    </style>
</head>
<body>
{body}
</body>
</html>"#,
        lang = language.html_lang(),
        title = escape_html(filename),
        style = STYLESHEET,
        body = html_content,
    )
}

/// Escape text for use inside HTML element content.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
