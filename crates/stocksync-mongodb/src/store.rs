//! Collection operations for a sync run

use bson::{doc, Document as BsonDocument};
use mongodb::Collection;
use stocksync_common::Result;
use tracing::{debug, info};

use crate::connection::Connection;

/// Handle to the target product collection
///
/// Wraps the three operations a run performs. The collection is transiently
/// empty between `clear` and `insert_rows`; a single writer is assumed and
/// no guard is taken.
pub struct ProductStore {
    collection: Collection<BsonDocument>,
}

impl ProductStore {
    /// Bind to a collection inside a named database
    pub fn new(conn: &Connection, database: &str, collection: &str) -> Self {
        Self {
            collection: conn.collection(database, collection),
        }
    }

    /// Delete every document in the collection, returning the deleted count
    pub async fn clear(&self) -> Result<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        info!(deleted = result.deleted_count, "collection cleared");
        Ok(result.deleted_count)
    }

    /// Insert documents as a single ordered bulk operation
    ///
    /// Row order is preserved as insertion order. A partial failure aborts
    /// the remaining inserts and propagates; the prior clear is not undone.
    /// An empty batch is a no-op (the driver rejects an empty insert_many).
    pub async fn insert_rows(&self, docs: Vec<BsonDocument>) -> Result<usize> {
        if docs.is_empty() {
            debug!("no rows to insert");
            return Ok(0);
        }
        let result = self.collection.insert_many(docs).await?;
        let inserted = result.inserted_ids.len();
        info!(inserted, "bulk insert complete");
        Ok(inserted)
    }

    /// Delete documents whose `field` does NOT match `pattern`
    ///
    /// A missing or non-string field cannot satisfy the positive regex being
    /// negated, so such documents are deleted as well. Returns the deleted
    /// count.
    pub async fn prune_not_matching(&self, field: &str, pattern: &str) -> Result<u64> {
        let filter = not_matching_filter(field, pattern);
        let result = self.collection.delete_many(filter).await?;
        info!(
            deleted = result.deleted_count,
            field, pattern, "pruned non-matching documents"
        );
        Ok(result.deleted_count)
    }
}

/// Build the regex-not-match delete filter: `{field: {$not: {$regex: pattern}}}`
pub fn not_matching_filter(field: &str, pattern: &str) -> BsonDocument {
    doc! {
        field: {
            "$not": {
                "$regex": pattern
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;
    use regex::Regex;

    #[test]
    fn test_not_matching_filter_shape() {
        let filter = not_matching_filter("Item", "2024|2025");
        let inner = filter.get_document("Item").unwrap();
        let not = inner.get_document("$not").unwrap();
        assert_eq!(not.get_str("$regex").unwrap(), "2024|2025");
    }

    /// Evaluates the `$not`/`$regex` delete predicate the way the server
    /// does: a document is deleted unless the field is a string containing a
    /// match for the pattern.
    fn would_delete(doc: &BsonDocument, field: &str, pattern: &str) -> bool {
        let re = Regex::new(pattern).unwrap();
        match doc.get(field) {
            Some(Bson::String(s)) => !re.is_match(s),
            _ => true,
        }
    }

    #[test]
    fn test_year_pattern_retains_current_seasons() {
        let pattern = "2024|2025";
        let keep_2024 = doc! { "Item": "Widget 2024" };
        let keep_2025 = doc! { "Item": "Gadget 2025" };
        let drop_2023 = doc! { "Item": "Widget 2023" };
        assert!(!would_delete(&keep_2024, "Item", pattern));
        assert!(!would_delete(&keep_2025, "Item", pattern));
        assert!(would_delete(&drop_2023, "Item", pattern));
    }

    #[test]
    fn test_year_pattern_matches_anywhere_in_field() {
        let pattern = "2024|2025";
        let doc = doc! { "Item": "2024 Widget Pro" };
        assert!(!would_delete(&doc, "Item", pattern));
    }

    #[test]
    fn test_no_year_is_deleted() {
        let pattern = "2024|2025";
        let doc = doc! { "Item": "NoYearHere" };
        assert!(would_delete(&doc, "Item", pattern));
    }

    #[test]
    fn test_missing_field_is_deleted() {
        let pattern = "2024|2025";
        let doc = doc! { "Brand": "Acme" };
        assert!(would_delete(&doc, "Item", pattern));
    }

    #[test]
    fn test_non_string_field_is_deleted() {
        let pattern = "2024|2025";
        let doc = doc! { "Item": 2024_i64 };
        assert!(would_delete(&doc, "Item", pattern));
    }
}
