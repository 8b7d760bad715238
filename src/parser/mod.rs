//! Ship document discovery and parsing module

pub mod directory;
pub mod filter;

use crate::error::{ParseError, ParseResult, ShipfixError, ShipfixResult};
use serde_json::Value;
use std::path::PathBuf;

/// Source of a single ship document
#[derive(Debug, Clone)]
pub enum JsonSource {
    /// Raw JSON string input
    String(String),
    /// Ship document on disk
    File(PathBuf),
}

impl JsonSource {
    /// Parse JSON from this source
    pub fn parse(&self) -> ShipfixResult<Value> {
        let content = self.read_content()?;
        parse_from_str(&content).map_err(|source| ShipfixError::Parse {
            path: self.path(),
            source,
        })
    }

    /// Read content as string
    pub fn read_content(&self) -> ShipfixResult<String> {
        match self {
            JsonSource::String(content) => Ok(content.clone()),
            JsonSource::File(path) => {
                std::fs::read_to_string(path).map_err(|e| ShipfixError::read(path.clone(), e))
            }
        }
    }

    /// Path used when reporting on this source
    pub fn path(&self) -> PathBuf {
        match self {
            JsonSource::String(_) => PathBuf::from("<string>"),
            JsonSource::File(path) => path.clone(),
        }
    }
}

/// Parse a JSON document from text
pub fn parse_from_str(content: &str) -> ParseResult<Value> {
    serde_json::from_str(content).map_err(ParseError::from)
}
