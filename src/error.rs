//! Content Errors
//!
//! Failures while loading the bundled JSON documents.

use std::fmt;

#[derive(Debug)]
pub enum ContentError {
    /// A bundled document failed to deserialize
    Parse {
        document: &'static str,
        source: serde_json::Error,
    },
    DuplicateProjectId(u32),
    DuplicateTaskCategory(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Parse { document, source } => {
                write!(f, "failed to parse {document}: {source}")
            }
            ContentError::DuplicateProjectId(id) => write!(f, "duplicate project id {id}"),
            ContentError::DuplicateTaskCategory(title) => {
                write!(f, "duplicate task category \"{title}\"")
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
