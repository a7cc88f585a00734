//! Document parsing
//!
//! Each document is a markdown file with YAML frontmatter carrying the
//! metadata (name, description); everything after the closing delimiter is
//! the body.

use regex::Regex;
use serde::Deserialize;
use skillshelf_types::{Document, DocumentMetadata};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::{Result, StoreError};

/// Maximum allowed name length
const MAX_NAME_LENGTH: usize = 64;
/// Maximum allowed description length
const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Frontmatter fields as they appear on disk; both optional so a missing
/// field is reported as `MalformedDocument` rather than a YAML type error.
#[derive(Debug, Deserialize)]
struct Frontmatter {
    name: Option<String>,
    description: Option<String>,
}

/// Read and parse one document file
pub fn parse_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)?;
    let (metadata, body) = parse_content(path, &content)?;

    validate_metadata(path, &metadata)?;

    Ok(Document {
        metadata,
        body,
        path: path.to_path_buf(),
    })
}

/// Split raw content into frontmatter metadata and body
fn parse_content(path: &Path, content: &str) -> Result<(DocumentMetadata, String)> {
    let frontmatter_re = Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n?([\s\S]*)$")
        .map_err(|e| StoreError::Internal(format!("failed to compile frontmatter regex: {e}")))?;

    let captures = frontmatter_re
        .captures(content)
        .ok_or_else(|| malformed(path, "no YAML frontmatter found"))?;

    let yaml_str = captures
        .get(1)
        .ok_or_else(|| malformed(path, "failed to extract frontmatter"))?
        .as_str();

    let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_str)
        .map_err(|e| malformed(path, &format!("invalid YAML frontmatter: {e}")))?;

    let name = frontmatter
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| malformed(path, "missing required field 'name'"))?;

    let description = frontmatter
        .description
        .filter(|d| !d.is_empty())
        .ok_or_else(|| malformed(path, "missing required field 'description'"))?;

    Ok((DocumentMetadata { name, description }, body.to_string()))
}

/// Validate parsed metadata; length overruns warn, bad names fail
fn validate_metadata(path: &Path, metadata: &DocumentMetadata) -> Result<()> {
    if metadata.name.len() > MAX_NAME_LENGTH {
        warn!(
            "Document name '{}' exceeds {} characters (was {})",
            metadata.name,
            MAX_NAME_LENGTH,
            metadata.name.len()
        );
    }

    let name_re = Regex::new(r"^[a-z0-9-]+$")
        .map_err(|e| StoreError::Internal(format!("failed to compile name regex: {e}")))?;

    if !name_re.is_match(&metadata.name) {
        return Err(malformed(
            path,
            &format!(
                "name '{}' must contain only lowercase letters, numbers, and hyphens",
                metadata.name
            ),
        ));
    }

    if metadata.description.len() > MAX_DESCRIPTION_LENGTH {
        warn!(
            "Document '{}' description exceeds {} characters (was {})",
            metadata.name,
            MAX_DESCRIPTION_LENGTH,
            metadata.description.len()
        );
    }

    Ok(())
}

fn malformed(path: &Path, reason: &str) -> StoreError {
    StoreError::MalformedDocument {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<(DocumentMetadata, String)> {
        parse_content(&PathBuf::from("test.md"), content)
    }

    #[test]
    fn test_parse_content() {
        let content = r#"---
name: widget-guide
description: Guide for assembling widgets. Use when working with widgets.
---

# Widget Guide

See [the reference](widget-reference.md) for part numbers.
"#;

        let (metadata, body) = parse(content).unwrap();
        assert_eq!(metadata.name, "widget-guide");
        assert_eq!(
            metadata.description,
            "Guide for assembling widgets. Use when working with widgets."
        );
        assert!(body.contains("# Widget Guide"));
    }

    #[test]
    fn test_missing_description_is_malformed() {
        let content = "---\nname: widget-guide\n---\nbody\n";
        let err = parse(content).unwrap_err();
        assert!(matches!(err, StoreError::MalformedDocument { .. }));
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_missing_frontmatter_is_malformed() {
        let err = parse("# Just a heading\n").unwrap_err();
        assert!(matches!(err, StoreError::MalformedDocument { .. }));
    }

    #[test]
    fn test_empty_name_is_malformed() {
        let content = "---\nname: \"\"\ndescription: something\n---\nbody\n";
        let err = parse(content).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_invalid_name_charset() {
        let metadata = DocumentMetadata {
            name: "Invalid_Name".to_string(),
            description: "something".to_string(),
        };
        assert!(validate_metadata(&PathBuf::from("test.md"), &metadata).is_err());
    }

    #[test]
    fn test_valid_name_charset() {
        let metadata = DocumentMetadata {
            name: "widget-guide-2".to_string(),
            description: "something".to_string(),
        };
        assert!(validate_metadata(&PathBuf::from("test.md"), &metadata).is_ok());
    }
}
