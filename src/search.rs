//! Query construction and the search pipeline

use crate::error::NibrasError;
use crate::normalize::strip_tashkeel;
use crate::store::{BilingualRecord, LexiconStore};
use crate::table::{ResultRow, ResultTable};
use serde::{Deserialize, Serialize};

/// How the normalized term is matched against each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// The term occurs anywhere within the field.
    #[default]
    Contains,
    /// The field begins with the term. Used by the alphabet keyboard,
    /// which searches for every word starting with the clicked letter.
    Prefix,
}

/// One-shot latch for the alphabet keyboard's prefix searches.
///
/// Arming applies to exactly the next query; `take` reverts to Contains so
/// a stale Prefix can never leak into an unrelated search.
#[derive(Debug, Default)]
pub struct ModeSwitch {
    armed: bool,
}

impl ModeSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `take` yields Prefix.
    pub fn arm_prefix(&mut self) {
        self.armed = true;
    }

    /// Consume the armed mode, reverting to Contains.
    pub fn take(&mut self) -> SearchMode {
        if std::mem::take(&mut self.armed) {
            SearchMode::Prefix
        } else {
            SearchMode::Contains
        }
    }
}

/// Case-insensitive contains/prefix test over both columns of a record.
///
/// The term must be non-empty; the pipeline guard in `run_query` is the
/// only path that constructs one from user input.
#[derive(Debug, Clone)]
pub struct MatchPredicate {
    term: String,
    mode: SearchMode,
}

impl MatchPredicate {
    pub fn new(term: &str, mode: SearchMode) -> Self {
        debug_assert!(!term.is_empty(), "predicate built from empty term");
        Self {
            term: term.to_lowercase(),
            mode,
        }
    }

    pub fn matches(&self, record: &BilingualRecord) -> bool {
        self.field_matches(&record.french) || self.field_matches(&record.arabic)
    }

    fn field_matches(&self, field: &str) -> bool {
        let field = field.to_lowercase();
        match self.mode {
            SearchMode::Contains => field.contains(&self.term),
            SearchMode::Prefix => field.starts_with(&self.term),
        }
    }
}

/// Run one full search: trim, strip tashkeel, guard the empty term, scan
/// the store, and return a freshly replaced table.
///
/// An input that normalizes to nothing never reaches the store; it yields
/// an empty table that still counts as searched, which is how the caller
/// clears stale results.
pub fn run_query(
    store: &LexiconStore,
    raw_input: &str,
    mode: SearchMode,
) -> Result<ResultTable, NibrasError> {
    let mut table = ResultTable::new();

    let term = strip_tashkeel(raw_input.trim());
    if term.is_empty() {
        table.replace(Vec::new());
        return Ok(table);
    }

    let predicate = MatchPredicate::new(&term, mode);
    let records = store.search(&predicate)?;
    tracing::info!(term = %term, ?mode, hits = records.len(), "search complete");

    table.replace(records.into_iter().map(ResultRow::from).collect());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(french: &str, arabic: &str) -> BilingualRecord {
        BilingualRecord {
            french: french.to_string(),
            arabic: arabic.to_string(),
        }
    }

    fn seeded_store() -> LexiconStore {
        let store = LexiconStore::open_in_memory().unwrap();
        store.insert("chat", "قط").unwrap();
        store.insert("chien", "كلب").unwrap();
        store.insert("chaton", "قطيط").unwrap();
        store
    }

    #[test]
    fn test_contains_matches_anywhere() {
        let entry = record("chat", "قط");
        assert!(MatchPredicate::new("cha", SearchMode::Contains).matches(&entry));
        assert!(MatchPredicate::new("hat", SearchMode::Contains).matches(&entry));
        assert!(MatchPredicate::new("قط", SearchMode::Contains).matches(&entry));
    }

    #[test]
    fn test_prefix_requires_field_start() {
        let entry = record("chat", "قط");
        assert!(MatchPredicate::new("cha", SearchMode::Prefix).matches(&entry));
        assert!(!MatchPredicate::new("hat", SearchMode::Prefix).matches(&entry));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let entry = record("Chat", "قط");
        assert!(MatchPredicate::new("CHAT", SearchMode::Contains).matches(&entry));
        assert!(MatchPredicate::new("ch", SearchMode::Prefix).matches(&entry));
    }

    #[test]
    fn test_mode_switch_resets_after_one_take() {
        let mut switch = ModeSwitch::new();
        switch.arm_prefix();
        assert_eq!(switch.take(), SearchMode::Prefix);
        assert_eq!(switch.take(), SearchMode::Contains);
    }

    #[test]
    fn test_prefix_applies_to_one_query_only() {
        let store = LexiconStore::open_in_memory().unwrap();
        store.insert("bon", "جيد").unwrap();
        store.insert("rab", "رب").unwrap();

        let mut switch = ModeSwitch::new();
        switch.arm_prefix();

        // First query is a prefix search: only "bon" starts with "b".
        let first = run_query(&store, "b", switch.take()).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first.rows()[0].french, "bon");

        // Same term again with the latch spent behaves as Contains.
        let second = run_query(&store, "b", switch.take()).unwrap();
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_empty_input_clears_without_store_scan() {
        let store = seeded_store();
        let table = run_query(&store, "   ", SearchMode::Contains).unwrap();
        assert!(table.is_searched());
        assert!(table.is_empty());
    }

    #[test]
    fn test_vowelled_input_matches_bare_entry() {
        let store = LexiconStore::open_in_memory().unwrap();
        store.insert("écrire", "كتب").unwrap();
        let table = run_query(&store, "كَتَبَ", SearchMode::Contains).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_end_to_end_contains_order_and_content() {
        let store = seeded_store();
        let table = run_query(&store, "cha", SearchMode::Contains).unwrap();
        let french: Vec<&str> = table.rows().iter().map(|r| r.french.as_str()).collect();
        assert_eq!(french, vec!["chat", "chaton"]);
    }

    #[test]
    fn test_end_to_end_no_matches() {
        let store = seeded_store();
        let table = run_query(&store, " char", SearchMode::Contains).unwrap();
        assert!(table.is_searched());
        assert!(table.is_empty());
    }
}
