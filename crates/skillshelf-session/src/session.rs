//! Per-session disclosure state

use chrono::{DateTime, Utc};
use skillshelf_store::DocumentStore;
use skillshelf_types::{Document, LoadLevel, ReferenceLink};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, SessionError};

/// One agent session over a shared, immutable document store.
///
/// The session owns its private load-level map; concurrent sessions never
/// share state. Levels move forward only: `Unloaded -> MetadataLoaded ->
/// BodyLoaded`, terminal at `BodyLoaded`. There is no deactivation.
pub struct DisclosureSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    store: Arc<DocumentStore>,
    levels: HashMap<String, LoadLevel>,
}

impl DisclosureSession {
    /// Open a session over a loaded store. Every document starts `Unloaded`.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        let id = Uuid::new_v4();
        let started_at = Utc::now();
        debug!(session = %id, started_at = %started_at, "Opened disclosure session");
        Self {
            id,
            started_at,
            store,
            levels: HashMap::new(),
        }
    }

    /// Session identifier, for log correlation
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When this session was opened
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Current load level for a document; absent entries read as `Unloaded`
    pub fn level(&self, name: &str) -> LoadLevel {
        self.levels.get(name).copied().unwrap_or_default()
    }

    /// Surface a document's metadata (first disclosure level).
    ///
    /// Idempotent: a second call neither reloads nor regresses. Calling it
    /// on a `BodyLoaded` document leaves the level untouched.
    pub fn activate(&mut self, name: &str) -> Result<()> {
        if !self.store.contains(name) {
            return Err(SessionError::NotFound(name.to_string()));
        }

        let level = self.levels.entry(name.to_string()).or_default();
        if *level < LoadLevel::MetadataLoaded {
            *level = LoadLevel::MetadataLoaded;
            debug!(session = %self.id, document = name, "Activated");
        }
        Ok(())
    }

    /// Load a document's body (second disclosure level).
    ///
    /// The caller must have been triggered by metadata first: expanding an
    /// `Unloaded` document is an `InvalidState` error, not an implicit
    /// activation.
    pub fn expand(&mut self, name: &str) -> Result<&str> {
        let actual = self.level(name);
        if actual < LoadLevel::MetadataLoaded {
            return Err(SessionError::InvalidState {
                name: name.to_string(),
                required: LoadLevel::MetadataLoaded,
                actual,
            });
        }

        let document = self
            .store
            .get(name)
            .map_err(|_| SessionError::NotFound(name.to_string()))?;

        if actual < LoadLevel::BodyLoaded {
            self.levels
                .insert(name.to_string(), LoadLevel::BodyLoaded);
            debug!(session = %self.id, document = name, "Expanded");
        }
        Ok(&document.body)
    }

    /// Resolve one of `name`'s reference links against the store.
    ///
    /// Requires `name` to be `BodyLoaded` (links come from the body). The
    /// target's own load level is never touched: the caller decides whether
    /// to activate or expand it.
    pub fn resolve_reference(&self, name: &str, link: &ReferenceLink) -> Result<&Document> {
        let actual = self.level(name);
        if actual < LoadLevel::BodyLoaded {
            return Err(SessionError::InvalidState {
                name: name.to_string(),
                required: LoadLevel::BodyLoaded,
                actual,
            });
        }

        let target = link.target_name();
        self.store
            .get(target)
            .map_err(|_| SessionError::NotFound(target.to_string()))
    }
}
