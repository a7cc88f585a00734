use crate::config::Config;
use anyhow::Result;
use skillshelf_matcher::TriggerMatcher;
use skillshelf_resolver::extract_links;
use skillshelf_session::{DisclosureSession, SessionError};
use skillshelf_store::DocumentStore;
use skillshelf_types::LoadLevel;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{info, warn};

/// Console service - interactive host over a document store
pub struct ConsoleService {
    config: Config,
}

impl ConsoleService {
    /// Create a new console service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the console service
    pub fn run(self) -> Result<()> {
        // Initialize logging
        skillshelf_logging::init_logging(&self.config.logging.level)?;
        info!("Starting Skillshelf console");

        // Load the document store (one-time batch load, read-only afterwards)
        let docs_dir = self.config.documents_dir();
        let (store, report) = DocumentStore::load_all(&docs_dir)?;
        info!(
            "Loaded {} documents from {} ({} skipped)",
            report.loaded,
            docs_dir.display(),
            report.skipped.len()
        );
        for skipped in &report.skipped {
            warn!("Skipped {}: {}", skipped.path.display(), skipped.reason);
        }

        let store = Arc::new(store);
        let matcher = TriggerMatcher::new(self.config.matcher.clone());
        let mut session = DisclosureSession::new(Arc::clone(&store));
        info!("Disclosure session {} opened", session.id());

        println!(
            "{} documents available. Type a query, or /list, /open <name>, /refs <name>, /level <name>, /quit.",
            store.len()
        );

        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("> ");
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.split_once(' ') {
                _ if line == "/quit" || line == "/exit" => break,
                _ if line == "/list" => Self::list(&store),
                Some(("/open", name)) => Self::open(&mut session, name.trim()),
                Some(("/refs", name)) => Self::refs(&session, &store, name.trim()),
                Some(("/level", name)) => {
                    println!("{name}: {:?}", session.level(name.trim()));
                }
                _ if line.starts_with('/') => {
                    println!("Unknown command: {line}");
                }
                _ => Self::query(&matcher, &store, &mut session, line),
            }
        }

        info!("Console session ended");
        Ok(())
    }

    /// List every document's metadata summary, sorted by name
    fn list(store: &DocumentStore) {
        let mut names: Vec<&String> = store.names().collect();
        names.sort();
        for name in names {
            if let Ok(doc) = store.get(name) {
                println!("{}", doc.to_summary());
            }
        }
    }

    /// Rank documents against a free-text query and activate the matches
    fn query(
        matcher: &TriggerMatcher,
        store: &DocumentStore,
        session: &mut DisclosureSession,
        query: &str,
    ) {
        let candidates = matcher.rank(query, store.metadata());
        if candidates.is_empty() {
            println!("No matching documents.");
            return;
        }

        for candidate in candidates {
            // A metadata match is the trigger that justifies activation.
            if let Err(e) = session.activate(&candidate.name) {
                warn!("Failed to activate '{}': {}", candidate.name, e);
                continue;
            }
            if let Ok(doc) = store.get(&candidate.name) {
                println!("{} (overlap {})", doc.to_summary(), candidate.overlap);
            }
        }
    }

    /// Activate and expand a document, printing its body
    fn open(session: &mut DisclosureSession, name: &str) {
        if let Err(e) = session.activate(name) {
            println!("{e}");
            return;
        }
        match session.expand(name) {
            Ok(body) => println!("{body}"),
            Err(e) => println!("{e}"),
        }
    }

    /// List the reference links of an already-opened document
    fn refs(session: &DisclosureSession, store: &DocumentStore, name: &str) {
        if session.level(name) < LoadLevel::BodyLoaded {
            println!("Open '{name}' first with /open {name}");
            return;
        }

        let Ok(doc) = store.get(name) else {
            println!("Document not found: '{name}'");
            return;
        };

        let mut found = false;
        for link in extract_links(&doc.body) {
            found = true;
            match session.resolve_reference(name, &link) {
                Ok(target) => println!("{} -> {}", link.target, target.name()),
                Err(SessionError::NotFound(target)) => {
                    println!("{} -> (dangling: '{target}' not in store)", link.target);
                }
                Err(e) => println!("{} -> {e}", link.target),
            }
        }
        if !found {
            println!("No reference links in '{name}'.");
        }
    }
}
