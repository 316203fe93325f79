// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use crate::ast::{Table, Value};
use crate::export::read_source;
use crate::parser::Parser;
use crate::CdclError;

mod access;
mod conversion;
mod helpers;

/// A parsed CDCL document with typed, dot-path access.
pub struct CdclConfig {
    root: Table,
    raw_content: String, // Store for error reporting
}

impl CdclConfig {
    /// Load and parse a CDCL file.
    ///
    /// # Example
    /// ```ignore
    /// let config = CdclConfig::from_file("server.cdcl")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CdclError> {
        let content = read_source(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse a CDCL config from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, CdclError> {
        Self::with_parser(content, &Parser::new())
    }

    /// Parse in strict mode, see [`Parser::strict`].
    pub fn from_str_strict(content: &str) -> Result<Self, CdclError> {
        Self::with_parser(content, &Parser::new().strict(true))
    }

    pub fn with_parser(content: &str, parser: &Parser) -> Result<Self, CdclError> {
        Ok(Self {
            root: parser.parse(content)?,
            raw_content: content.to_string(),
        })
    }

    pub fn root(&self) -> &Table {
        &self.root
    }

    pub fn into_root(self) -> Table {
        self.root
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// The whole tree as a single table value.
    pub fn to_value(&self) -> Value {
        Value::Table(self.root.clone())
    }
}
