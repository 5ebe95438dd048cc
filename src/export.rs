//! HTML export adapter

use crate::document::RenderedDocument;
use crate::error::NibrasError;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Default save-dialog filename for a given search term.
pub fn suggest_filename(term: &str) -> String {
    format!("[Nibras] {}.html", term.trim())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize the document to a standalone UTF-8 HTML page: centered header
/// paragraph, bordered two-column table, date-only footer. HTML carries no
/// pagination, so the page-number placeholder is dropped here.
///
/// The table markup is assembled directly from the document tree rather
/// than rendered elsewhere and sliced back out, so there is no markup
/// boundary to miss.
pub fn to_html(doc: &RenderedDocument) -> String {
    let mut html = String::new();

    html.push_str(
        "<html>\n<head>\n\
         <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\" />\n\
         <title>[Nibras]</title>\n</head>\n<body>\n",
    );

    let _ = write!(
        html,
        "<div id=\"header\">\n<p align=\"center\">{}</p>\n<br />\n<br />\n</div>\n",
        escape(&doc.header.text)
    );

    html.push_str(
        "<table width=\"100%\" border=\"1\" cellspacing=\"0\" cellpadding=\"5\">\n",
    );
    let _ = write!(
        html,
        "<tr>\n<th width=\"50%\" align=\"center\">{}</th>\n\
         <th width=\"50%\" align=\"center\">{}</th>\n</tr>\n",
        escape(&doc.table.column_titles.0),
        escape(&doc.table.column_titles.1)
    );
    for row in &doc.table.rows {
        let _ = write!(
            html,
            "<tr>\n<td align=\"left\">{}</td>\n<td align=\"left\">{}</td>\n</tr>\n",
            escape(&row.french),
            escape(&row.arabic)
        );
    }
    html.push_str("</table>\n");

    let _ = write!(
        html,
        "<table width=\"100%\" border=\"0\" cellspacing=\"0\" cellpadding=\"0\">\n\
         <tr>\n<td><p align=\"left\">{}</p></td>\n</tr>\n</table>\n",
        escape(&doc.footer.date)
    );

    html.push_str("</body>\n</html>\n");
    html
}

/// Write the exported page to `path`. A failed write surfaces as a single
/// `Export` error; nothing is left behind on success paths only.
pub fn write_html(doc: &RenderedDocument, path: &Path) -> Result<(), NibrasError> {
    let html = to_html(doc);
    fs::write(path, html.as_bytes())
        .map_err(|e| NibrasError::Export(format!("{}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), "exported HTML");
    Ok(())
}
