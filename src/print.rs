//! Paginated print adapter

use crate::document::{RenderedDocument, PAGE_PLACEHOLDER};
use crate::error::NibrasError;
use crate::table::ResultRow;
use serde::{Deserialize, Serialize};

/// Height of one table row on paper, in millimetres.
const ROW_HEIGHT_MM: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
}

impl PageSize {
    /// (width, height) in millimetres, portrait.
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            PageSize::A4 => (210, 297),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// Physical layout parameters, millimetre units. The defaults are the
/// application's print settings: A4, margins 3/2/7/5, a 20mm header band,
/// a 19mm footer band, and no spacing between bands and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_size: PageSize,
    pub margins: Margins,
    pub header_height: u32,
    pub footer_height: u32,
    pub spacing: u32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margins: Margins {
                left: 3,
                top: 2,
                right: 7,
                bottom: 5,
            },
            header_height: 20,
            footer_height: 19,
            spacing: 0,
        }
    }
}

impl PageGeometry {
    /// Vertical space left for the table once margins, bands, and spacing
    /// are taken out.
    fn body_height_mm(&self) -> u32 {
        let (_, page_height) = self.page_size.dimensions_mm();
        page_height.saturating_sub(
            self.margins.top
                + self.margins.bottom
                + self.header_height
                + self.footer_height
                + 2 * self.spacing,
        )
    }

    /// Data rows that fit on one page alongside the repeated title row.
    fn rows_per_page(&self) -> usize {
        let total_rows = (self.body_height_mm() / ROW_HEIGHT_MM) as usize;
        total_rows.saturating_sub(1).max(1)
    }
}

/// One physical page: the header band, the title row, this page's slice of
/// data rows, and the footer with the page number already substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintedPage {
    pub number: usize,
    pub total: usize,
    pub header_text: String,
    pub column_titles: (String, String),
    pub rows: Vec<ResultRow>,
    pub footer_date: String,
    pub footer_page_label: String,
}

/// Where printed pages go. The GUI shell implements this against the real
/// print device; tests implement it with a buffer.
pub trait PageSink {
    fn emit_page(&mut self, page: &PrintedPage) -> Result<(), NibrasError>;
}

/// Split the document into physical pages. Header, title row, and footer
/// repeat on every page; the placeholder in the footer label becomes the
/// 1-based page number. An empty table still produces one page.
pub fn paginate(doc: &RenderedDocument, geometry: &PageGeometry) -> Vec<PrintedPage> {
    let per_page = geometry.rows_per_page();
    let chunks: Vec<&[ResultRow]> = if doc.table.rows.is_empty() {
        vec![&[]]
    } else {
        doc.table.rows.chunks(per_page).collect()
    };
    let total = chunks.len();

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, rows)| PrintedPage {
            number: i + 1,
            total,
            header_text: doc.header.text.clone(),
            column_titles: doc.table.column_titles.clone(),
            rows: rows.to_vec(),
            footer_date: doc.footer.date.clone(),
            footer_page_label: doc
                .footer
                .page_label
                .replace(PAGE_PLACEHOLDER, &(i + 1).to_string()),
        })
        .collect()
}

/// Send the paginated document to the sink.
pub fn print(
    doc: &RenderedDocument,
    geometry: &PageGeometry,
    sink: &mut dyn PageSink,
) -> Result<(), NibrasError> {
    let pages = paginate(doc, geometry);
    tracing::info!(pages = pages.len(), "printing document");
    for page in &pages {
        sink.emit_page(page)?;
    }
    Ok(())
}

/// The exact pages `print` would emit. Preview and print share one layout
/// pass, so they cannot drift apart.
pub fn preview(doc: &RenderedDocument, geometry: &PageGeometry) -> Vec<PrintedPage> {
    paginate(doc, geometry)
}
