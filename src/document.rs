//! Structured document tree shared by HTML export and print

use crate::table::{ResultRow, ResultTable};
use serde::{Deserialize, Serialize};

/// Placeholder the print adapter replaces with the physical page number.
pub const PAGE_PLACEHOLDER: &str = "&page;";

/// Centered paragraph above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub text: String,
}

/// Two equal-width columns, single solid border, uniform cell padding.
/// The bold centered title row is stored apart from the data rows, so the
/// rendered row count is always exactly `rows.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    pub column_titles: (String, String),
    pub rows: Vec<ResultRow>,
}

impl TableBlock {
    /// Title row plus one row per entry.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// Left-aligned date and right-aligned page-number placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterBlock {
    pub date: String,
    pub page_label: String,
}

/// The intermediate form both adapters consume: what to show, decoupled
/// from how to output it. Rebuilt from the current ResultTable on every
/// export or print request, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub header: HeaderBlock,
    pub table: TableBlock,
    pub footer: FooterBlock,
}

/// Footer date, Qt's "ddd MMMM d yy": abbreviated weekday, full month,
/// day without leading zero, two-digit year.
pub fn footer_date() -> String {
    chrono::Local::now().format("%a %B %-d %y").to_string()
}

/// Build the document for the current results. Row content is taken
/// verbatim, in table order; the only input not in the arguments is the
/// wall-clock date embedded in the footer.
pub fn render(
    table: &ResultTable,
    header_text: &str,
    page_label: &str,
    column_titles: (&str, &str),
) -> RenderedDocument {
    RenderedDocument {
        header: HeaderBlock {
            text: header_text.to_string(),
        },
        table: TableBlock {
            column_titles: (column_titles.0.to_string(), column_titles.1.to_string()),
            rows: table.rows().to_vec(),
        },
        footer: FooterBlock {
            date: footer_date(),
            page_label: format!("{} {}", page_label, PAGE_PLACEHOLDER),
        },
    }
}
