use std::collections::HashMap;

use serde_json::Value;

use crate::error::Result;

/// Document collections kept per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Profiles,
    Diets,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Profiles => "profile",
            Collection::Diets => "diet",
        }
    }
}

/// A per-user document store (profile and current diet).
pub trait DocumentStore {
    fn get(&self, collection: Collection, user_id: &str) -> Result<Option<Value>>;

    /// Write a document. With `merge`, top-level fields are merged into the
    /// existing document instead of replacing it.
    fn set(&mut self, collection: Collection, user_id: &str, document: Value, merge: bool)
    -> Result<()>;

    fn delete(&mut self, collection: Collection, user_id: &str) -> Result<()>;
}

/// Shallow merge of `update` into `existing`; non-objects replace outright.
pub fn merge_documents(existing: &mut Value, update: Value) {
    match update {
        Value::Object(fields) if existing.is_object() => {
            if let Some(target) = existing.as_object_mut() {
                for (key, value) in fields {
                    target.insert(key, value);
                }
            }
        }
        other => *existing = other,
    }
}

/// In-memory store, handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<(Collection, String), Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, collection: Collection, user_id: &str) -> Result<Option<Value>> {
        Ok(self
            .documents
            .get(&(collection, user_id.to_string()))
            .cloned())
    }

    fn set(
        &mut self,
        collection: Collection,
        user_id: &str,
        document: Value,
        merge: bool,
    ) -> Result<()> {
        let key = (collection, user_id.to_string());
        if merge {
            if let Some(existing) = self.documents.get_mut(&key) {
                merge_documents(existing, document);
                return Ok(());
            }
        }
        self.documents.insert(key, document);
        Ok(())
    }

    fn delete(&mut self, collection: Collection, user_id: &str) -> Result<()> {
        self.documents.remove(&(collection, user_id.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut store = MemoryStore::new();
        store
            .set(Collection::Profiles, "u1", json!({"poids": 70, "taille": 175}), false)
            .unwrap();
        store
            .set(Collection::Profiles, "u1", json!({"poids": 68}), true)
            .unwrap();

        let doc = store.get(Collection::Profiles, "u1").unwrap().unwrap();
        assert_eq!(doc, json!({"poids": 68, "taille": 175}));
    }

    #[test]
    fn test_set_without_merge_replaces() {
        let mut store = MemoryStore::new();
        store
            .set(Collection::Diets, "u1", json!({"a": 1, "b": 2}), false)
            .unwrap();
        store.set(Collection::Diets, "u1", json!({"c": 3}), false).unwrap();
        assert_eq!(
            store.get(Collection::Diets, "u1").unwrap(),
            Some(json!({"c": 3}))
        );
    }

    #[test]
    fn test_collections_are_separate() {
        let mut store = MemoryStore::new();
        store.set(Collection::Diets, "u1", json!({}), false).unwrap();
        assert!(store.get(Collection::Profiles, "u1").unwrap().is_none());

        store.delete(Collection::Diets, "u1").unwrap();
        assert!(store.is_empty());
    }
}
