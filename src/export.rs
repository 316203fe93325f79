// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use serde::ser::{Serialize, Serializer};

use crate::ast::{Table, Value};
use crate::parser::Parser;
use crate::CdclError;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Table(t) => t.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

/// Export a parsed configuration tree to JSON.
///
/// Integers become JSON numbers, text becomes strings and tables become
/// objects with their keys in source order.
pub fn export_table_to_json(table: &Table) -> Result<String, CdclError> {
    serde_json::to_string_pretty(table).map_err(|e| CdclError::ExportError {
        message: e.to_string(),
        hint: None,
        code: Some(501),
    })
}

/// Export a parsed configuration tree to TOML.
///
/// Nested tables become `[section]` headers.
pub fn export_table_to_toml(table: &Table) -> Result<String, CdclError> {
    toml::to_string_pretty(table).map_err(|e| CdclError::ExportError {
        message: e.to_string(),
        hint: None,
        code: Some(502),
    })
}

pub fn export_table(table: &Table, format: OutputFormat) -> Result<String, CdclError> {
    match format {
        OutputFormat::Toml => export_table_to_toml(table),
        OutputFormat::Json => export_table_to_json(table),
    }
}

/// Read, parse, and export a CDCL file in one call.
///
/// # Errors
/// Returns `FileError` if the file can't be read, and any parse or export
/// error otherwise.
pub fn export_file<P: AsRef<Path>>(
    path: P,
    parser: &Parser,
    format: OutputFormat,
) -> Result<String, CdclError> {
    let input = read_source(path.as_ref())?;
    let table = parser.parse(&input)?;
    export_table(&table, format)
}

pub(crate) fn read_source(path: &Path) -> Result<String, CdclError> {
    fs::read_to_string(path).map_err(|e| CdclError::FileError {
        message: format!("Failed to read file: {}", e),
        kind: e.kind(),
        path: path.to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })
}
