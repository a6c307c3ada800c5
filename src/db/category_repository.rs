use crate::error::{CategoryError, StoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["food", "transport", "entertainment", "utilities", "healthcare"];

#[derive(Debug, Serialize, Deserialize)]
struct CategoryDocument {
    categories: Vec<String>,
}

/// Result of reading the registry. `error` is set when the document could
/// not be read, in which case `categories` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CategoryStore {
    path: PathBuf,
}

impl CategoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Writes the default set unless a document already exists.
    pub fn initialize(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            tracing::debug!(path = %self.path.display(), "category file already present");
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let document = CategoryDocument {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        };
        let contents = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), "wrote default categories");
        Ok(())
    }

    pub fn read(&self) -> Result<Vec<String>, CategoryError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                CategoryError::Missing {
                    path: self.path.clone(),
                }
            } else {
                CategoryError::Unreadable {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let document: CategoryDocument =
            serde_json::from_str(&contents).map_err(|source| CategoryError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        Ok(document.categories)
    }

    pub fn list(&self) -> CategoryListing {
        match self.read() {
            Ok(categories) => CategoryListing {
                categories,
                error: None,
            },
            Err(err) => {
                tracing::warn!("{err}");
                CategoryListing {
                    categories: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let store = CategoryStore::new(dir.path().join("nested").join("categories.json"));

        store.initialize().unwrap();

        let listing = store.list();
        assert_eq!(listing.error, None);
        assert_eq!(listing.categories, DEFAULT_CATEGORIES.to_vec());
    }

    #[test]
    fn test_initialize_leaves_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        fs::write(&path, r#"{"categories": ["rent"]}"#).unwrap();

        let store = CategoryStore::new(&path);
        store.initialize().unwrap();

        assert_eq!(store.list().categories, vec!["rent".to_string()]);
    }

    #[test]
    fn test_list_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = CategoryStore::new(dir.path().join("absent.json"));

        let listing = store.list();
        assert!(listing.categories.is_empty());
        assert!(listing.error.unwrap().contains("not found"));
    }

    #[test]
    fn test_list_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        fs::write(&path, "not json at all").unwrap();

        let listing = CategoryStore::new(&path).list();
        assert!(listing.categories.is_empty());
        assert!(listing.error.unwrap().contains("malformed"));
    }

    #[test]
    fn test_list_wrong_key_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("categories.json");
        fs::write(&path, r#"{"labels": ["food"]}"#).unwrap();

        let listing = CategoryStore::new(&path).list();
        assert!(listing.categories.is_empty());
        assert!(listing.error.is_some());
    }

    #[test]
    fn test_listing_serialization() {
        let listing = CategoryListing {
            categories: Vec::new(),
            error: Some("boom".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&listing).unwrap(),
            serde_json::json!({"categories": [], "error": "boom"})
        );
    }
}
