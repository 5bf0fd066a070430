use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::state::store::{Collection, DocumentStore, merge_documents};

/// Stores each user's documents as `<root>/<user_id>/<collection>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, collection: Collection, user_id: &str) -> Result<PathBuf> {
        let valid = !user_id.is_empty()
            && user_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PlannerError::InvalidInput(format!(
                "invalid user id '{}'",
                user_id
            )));
        }
        Ok(self
            .root
            .join(user_id)
            .join(format!("{}.json", collection.name())))
    }
}

impl DocumentStore for JsonFileStore {
    fn get(&self, collection: Collection, user_id: &str) -> Result<Option<Value>> {
        let path = self.path_for(collection, user_id)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn set(
        &mut self,
        collection: Collection,
        user_id: &str,
        document: Value,
        merge: bool,
    ) -> Result<()> {
        let path = self.path_for(collection, user_id)?;
        let document = match self.get(collection, user_id)? {
            Some(mut existing) if merge => {
                merge_documents(&mut existing, document);
                existing
            }
            _ => document,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(&document)?)?;
        debug!(path = %path.display(), "document saved");
        Ok(())
    }

    fn delete(&mut self, collection: Collection, user_id: &str) -> Result<()> {
        let path = self.path_for(collection, user_id)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
