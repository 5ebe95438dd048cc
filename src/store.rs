//! Read-only bilingual word list backed by SQLite

use crate::error::NibrasError;
use crate::search::MatchPredicate;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single dictionary entry. Immutable once loaded; owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualRecord {
    pub french: String,
    pub arabic: String,
}

/// The `univ` word list: two parallel text columns, fixed at process start.
///
/// Opening fails closed: a missing or unreadable database is
/// `StoreUnavailable`, which callers report once and survive — searches
/// against no store simply never run.
#[derive(Debug)]
pub struct LexiconStore {
    conn: Connection,
}

impl LexiconStore {
    pub fn open(path: &Path) -> Result<Self, NibrasError> {
        if !path.exists() {
            return Err(NibrasError::StoreUnavailable(format!(
                "no word list at {}",
                path.display()
            )));
        }
        let conn = Connection::open(path)
            .map_err(|e| NibrasError::StoreUnavailable(e.to_string()))?;
        tracing::info!(path = %path.display(), "opened word list");
        Ok(Self { conn })
    }

    /// In-memory store with the `univ` schema, for tests and seeding.
    pub fn open_in_memory() -> Result<Self, NibrasError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| NibrasError::StoreUnavailable(e.to_string()))?;
        conn.execute_batch("CREATE TABLE univ (FRENCH TEXT NOT NULL, ARABIC TEXT NOT NULL)")?;
        Ok(Self { conn })
    }

    #[doc(hidden)]
    pub fn insert(&self, french: &str, arabic: &str) -> Result<(), NibrasError> {
        self.conn.execute(
            "INSERT INTO univ (FRENCH, ARABIC) VALUES (?1, ?2)",
            rusqlite::params![french, arabic],
        )?;
        Ok(())
    }

    /// Scan the word list in rowid order and return every record the
    /// predicate accepts. Store order is authoritative; no re-sorting.
    pub fn search(&self, predicate: &MatchPredicate) -> Result<Vec<BilingualRecord>, NibrasError> {
        let mut stmt = self
            .conn
            .prepare("SELECT FRENCH, ARABIC FROM univ ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok(BilingualRecord {
                french: row.get(0)?,
                arabic: row.get(1)?,
            })
        })?;

        let mut matches = Vec::new();
        for record in rows {
            let record = record?;
            if predicate.matches(&record) {
                matches.push(record);
            }
        }
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchMode;

    fn seeded_store() -> LexiconStore {
        let store = LexiconStore::open_in_memory().unwrap();
        store.insert("chat", "قط").unwrap();
        store.insert("chien", "كلب").unwrap();
        store.insert("chaton", "قطيط").unwrap();
        store
    }

    #[test]
    fn test_open_missing_file_fails_closed() {
        let err = LexiconStore::open(Path::new("/nonexistent/univlexique.db")).unwrap_err();
        assert!(matches!(err, NibrasError::StoreUnavailable(_)));
    }

    #[test]
    fn test_search_preserves_store_order() {
        let store = seeded_store();
        let predicate = MatchPredicate::new("ch", SearchMode::Contains);
        let results = store.search(&predicate).unwrap();
        let french: Vec<&str> = results.iter().map(|r| r.french.as_str()).collect();
        assert_eq!(french, vec!["chat", "chien", "chaton"]);
    }

    #[test]
    fn test_search_matches_arabic_column() {
        let store = seeded_store();
        let predicate = MatchPredicate::new("كلب", SearchMode::Contains);
        let results = store.search(&predicate).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].french, "chien");
    }

    #[test]
    fn test_search_no_matches() {
        let store = seeded_store();
        let predicate = MatchPredicate::new("zebra", SearchMode::Contains);
        assert!(store.search(&predicate).unwrap().is_empty());
    }
}
