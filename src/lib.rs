//! Nibras - bilingual French/Arabic dictionary core
//!
//! Search normalization and query construction over a two-column word
//! list, plus generation of exportable/printable documents from the
//! results.

pub mod normalize;
pub mod search;
pub mod store;
pub mod table;
pub mod document;
pub mod export;
pub mod print;
pub mod error;

pub use error::NibrasError;
pub use normalize::strip_tashkeel;
pub use search::{run_query, MatchPredicate, ModeSwitch, SearchMode};
pub use store::{BilingualRecord, LexiconStore};
pub use table::{Column, ResultRow, ResultTable};
pub use document::{render, FooterBlock, HeaderBlock, RenderedDocument, TableBlock, PAGE_PLACEHOLDER};
pub use export::{suggest_filename, to_html, write_html};
pub use print::{paginate, preview, print, PageGeometry, PageSink, PageSize, PrintedPage};
