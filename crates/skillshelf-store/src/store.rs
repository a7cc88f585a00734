//! Document store
//!
//! Owns the authoritative set of documents, keyed by name. Populated once
//! from a directory of markdown files; read-only afterwards.

use skillshelf_types::{Document, DocumentMetadata};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::document::parse_document;
use crate::error::{Result, StoreError};

/// A document that failed to load, with the reason it was skipped
#[derive(Debug, Clone)]
pub struct SkippedDocument {
    /// Source file
    pub path: PathBuf,
    /// Why it was rejected
    pub reason: String,
}

/// Outcome of a store load: how many documents made it in, which were skipped
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Number of documents loaded successfully
    pub loaded: usize,
    /// Malformed documents that were skipped with a warning
    pub skipped: Vec<SkippedDocument>,
}

/// The authoritative set of documents, keyed by name
#[derive(Debug)]
pub struct DocumentStore {
    documents: HashMap<String, Document>,
}

impl DocumentStore {
    /// Load all documents from a directory (one `.md` file per document).
    ///
    /// A malformed document is skipped with a warning and recorded on the
    /// report; the rest of the store still loads. Two documents sharing a
    /// name abort the whole load with `DuplicateName`.
    pub fn load_all(dir: &Path) -> Result<(Self, LoadReport)> {
        if !dir.is_dir() {
            return Err(StoreError::NotADirectory(dir.to_path_buf()));
        }

        let mut documents: HashMap<String, Document> = HashMap::new();
        let mut report = LoadReport::default();

        // Sort entries so load order (and any duplicate detection) is
        // reproducible across platforms.
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
            .collect();
        paths.sort();

        for path in paths {
            match parse_document(&path) {
                Ok(document) => {
                    let name = document.name().to_string();
                    if documents.contains_key(&name) {
                        return Err(StoreError::DuplicateName { name, path });
                    }
                    debug!("Loaded document: {} from {:?}", name, path);
                    documents.insert(name, document);
                    report.loaded += 1;
                }
                Err(e @ StoreError::MalformedDocument { .. }) => {
                    warn!("Skipping document {:?}: {}", path, e);
                    report.skipped.push(SkippedDocument {
                        path,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Document store loaded: {} documents, {} skipped",
            report.loaded,
            report.skipped.len()
        );

        Ok((Self { documents }, report))
    }

    /// Get a document by name
    pub fn get(&self, name: &str) -> Result<&Document> {
        self.documents
            .get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Whether a document with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    /// All document names
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.documents.keys()
    }

    /// Metadata for every document, for the trigger matcher
    pub fn metadata(&self) -> impl Iterator<Item = &DocumentMetadata> {
        self.documents.values().map(|d| &d.metadata)
    }

    /// Number of documents in the store
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
