//! In-memory result table shared between search and rendering

use crate::store::BilingualRecord;
use serde::{Deserialize, Serialize};

/// One matched (french, arabic) pair, copied out of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub french: String,
    pub arabic: String,
}

impl From<BilingualRecord> for ResultRow {
    fn from(record: BilingualRecord) -> Self {
        Self {
            french: record.french,
            arabic: record.arabic,
        }
    }
}

/// Which column of a row to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    French,
    Arabic,
}

/// Ordered matched rows for the current query. Every search fully replaces
/// the contents; there is no append path. An empty table that has been
/// searched is distinct from one that never was.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
    searched: bool,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the previous contents and install `rows` atomically.
    pub fn replace(&mut self, rows: Vec<ResultRow>) {
        self.rows = rows;
        self.searched = true;
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// False until the first `replace`, even an empty one.
    pub fn is_searched(&self) -> bool {
        self.searched
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Clipboard text for one row: french, four spaces, arabic, CRLF.
    pub fn row_text(&self, index: usize) -> Option<String> {
        self.rows
            .get(index)
            .map(|row| format!("{}    {}\r\n", row.french, row.arabic))
    }

    /// Clipboard text for a single cell.
    pub fn cell_text(&self, index: usize, column: Column) -> Option<&str> {
        self.rows.get(index).map(|row| match column {
            Column::French => row.french.as_str(),
            Column::Arabic => row.arabic.as_str(),
        })
    }

    /// Clipboard text for the whole table: every row in table order.
    pub fn table_text(&self) -> String {
        let mut text = String::new();
        for row in &self.rows {
            text.push_str(&row.french);
            text.push_str("    ");
            text.push_str(&row.arabic);
            text.push_str("\r\n");
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(french: &str, arabic: &str) -> ResultRow {
        ResultRow {
            french: french.to_string(),
            arabic: arabic.to_string(),
        }
    }

    #[test]
    fn test_empty_replace_is_searched_but_empty() {
        let mut table = ResultTable::new();
        assert!(!table.is_searched());
        table.replace(vec![]);
        assert!(table.is_searched());
        assert!(table.rows().is_empty());
    }

    #[test]
    fn test_replace_discards_previous_rows() {
        let mut table = ResultTable::new();
        table.replace(vec![row("chat", "قط"), row("chien", "كلب")]);
        table.replace(vec![row("livre", "كتاب")]);
        assert_eq!(table.rows(), &[row("livre", "كتاب")]);
    }

    #[test]
    fn test_row_text_format() {
        let mut table = ResultTable::new();
        table.replace(vec![row("chat", "قط")]);
        assert_eq!(table.row_text(0).unwrap(), "chat    قط\r\n");
        assert!(table.row_text(1).is_none());
    }

    #[test]
    fn test_table_text_concatenates_in_order() {
        let mut table = ResultTable::new();
        table.replace(vec![row("chat", "قط"), row("chien", "كلب")]);
        assert_eq!(table.table_text(), "chat    قط\r\nchien    كلب\r\n");
    }

    #[test]
    fn test_cell_text() {
        let mut table = ResultTable::new();
        table.replace(vec![row("chat", "قط")]);
        assert_eq!(table.cell_text(0, Column::French), Some("chat"));
        assert_eq!(table.cell_text(0, Column::Arabic), Some("قط"));
    }
}
