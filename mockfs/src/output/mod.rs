//! Output formatting and writing for generated mock modules.
//!
//! Records are rendered into a text artifact by a [`RecordFormatter`] chosen
//! through [`OutputFormat`], then persisted with [`write_atomic`]. Every
//! rendered record carries two strings: `uri`, built from a fixed prefix and
//! the full path, and `uniquePath`.

mod formatters;
mod writer;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PathRecord, Result};

pub use formatters::{escape_single_quoted, JsonFormatter, OutputEntry, TypeScriptFormatter};
pub use writer::write_atomic;

/// Trait for rendering path records into an output artifact.
pub trait RecordFormatter {
    /// Render the records, in order, into the artifact's text.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be serialized.
    fn format(&self, records: &[PathRecord]) -> Result<String>;
}

/// Available artifact formats.
///
/// # Examples
///
/// ```
/// use mockfs::output::OutputFormat;
///
/// assert_eq!(OutputFormat::default(), OutputFormat::TypeScript);
/// assert_eq!(OutputFormat::parse("ts").unwrap().extension(), "ts");
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A TypeScript module exporting a constant array.
    #[default]
    TypeScript,
    /// A JSON array.
    Json,
}

impl OutputFormat {
    /// Parses a format name ("typescript", "ts" or "json", case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "typescript" | "ts" => Ok(Self::TypeScript),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }

    /// File extension used for the default output file name.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::Json => "json",
        }
    }

    /// Default output file name for a collection in this format.
    #[must_use]
    pub fn default_file_name(&self, collection_name: &str) -> String {
        format!("{collection_name}.{}", self.extension())
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(
        &self,
        collection_name: &str,
        uri_prefix: &str,
    ) -> Box<dyn RecordFormatter> {
        match self {
            Self::TypeScript => Box::new(TypeScriptFormatter::new(collection_name, uri_prefix)),
            Self::Json => Box::new(JsonFormatter::new(uri_prefix)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeScript => write!(f, "typescript"),
            Self::Json => write!(f, "json"),
        }
    }
}
