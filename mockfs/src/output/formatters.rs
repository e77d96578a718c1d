//! Output formatter implementations.

use serde::Serialize;

use crate::{Error, PathRecord, Result};

use super::RecordFormatter;

/// One rendered record, as it appears in the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputEntry {
    /// Prefix followed by the full relative path.
    pub uri: String,
    /// The resolved unique path.
    pub unique_path: String,
}

impl OutputEntry {
    fn from_record(record: &PathRecord, uri_prefix: &str) -> Self {
        Self {
            uri: format!("{uri_prefix}{}", record.full_path),
            unique_path: record.unique_path.to_string(),
        }
    }
}

/// Escapes a string for a single-quoted JavaScript/TypeScript literal.
///
/// # Examples
///
/// ```
/// use mockfs::output::escape_single_quoted;
///
/// assert_eq!(escape_single_quoted("it's"), "it\\'s");
/// assert_eq!(escape_single_quoted("a\\b"), "a\\\\b");
/// assert_eq!(escape_single_quoted("plain/path.ts"), "plain/path.ts");
/// ```
#[must_use]
pub fn escape_single_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a TypeScript module exporting the records as a constant array:
///
/// ```text
/// export const mockFileStructure = [
///   { uri: 'file:///workspace/a/x.txt', uniquePath: 'a/x.txt' },
///   { uri: 'file:///workspace/c/y.txt', uniquePath: 'y.txt' }
/// ];
/// ```
pub struct TypeScriptFormatter {
    collection_name: String,
    uri_prefix: String,
}

impl TypeScriptFormatter {
    /// Create a formatter exporting `collection_name`.
    #[must_use]
    pub fn new(collection_name: &str, uri_prefix: &str) -> Self {
        Self {
            collection_name: collection_name.to_string(),
            uri_prefix: uri_prefix.to_string(),
        }
    }
}

impl RecordFormatter for TypeScriptFormatter {
    fn format(&self, records: &[PathRecord]) -> Result<String> {
        let body = records
            .iter()
            .map(|record| {
                let entry = OutputEntry::from_record(record, &self.uri_prefix);
                format!(
                    "  {{ uri: '{}', uniquePath: '{}' }}",
                    escape_single_quoted(&entry.uri),
                    escape_single_quoted(&entry.unique_path)
                )
            })
            .collect::<Vec<_>>()
            .join(",\n");

        Ok(format!(
            "export const {} = [\n{body}\n];\n",
            self.collection_name
        ))
    }
}

/// Renders the records as a pretty-printed JSON array.
pub struct JsonFormatter {
    uri_prefix: String,
}

impl JsonFormatter {
    /// Create a JSON formatter.
    #[must_use]
    pub fn new(uri_prefix: &str) -> Self {
        Self {
            uri_prefix: uri_prefix.to_string(),
        }
    }
}

impl RecordFormatter for JsonFormatter {
    fn format(&self, records: &[PathRecord]) -> Result<String> {
        let entries: Vec<OutputEntry> = records
            .iter()
            .map(|record| OutputEntry::from_record(record, &self.uri_prefix))
            .collect();

        let mut json = serde_json::to_string_pretty(&entries).map_err(|e| Error::Serialization {
            format: "json".to_string(),
            message: e.to_string(),
        })?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(full: &str, unique: &str) -> PathRecord {
        PathRecord::new(full.parse().unwrap(), unique.parse().unwrap())
    }

    #[test]
    fn test_typescript_output_layout() {
        let formatter = TypeScriptFormatter::new("mockFileStructure", "file:///workspace/");
        let output = formatter
            .format(&[record("a/x.txt", "a/x.txt"), record("c/y.txt", "y.txt")])
            .unwrap();

        assert_eq!(
            output,
            "export const mockFileStructure = [\n\
             \x20 { uri: 'file:///workspace/a/x.txt', uniquePath: 'a/x.txt' },\n\
             \x20 { uri: 'file:///workspace/c/y.txt', uniquePath: 'y.txt' }\n\
             ];\n"
        );
    }

    #[test]
    fn test_typescript_empty_collection() {
        let formatter = TypeScriptFormatter::new("files", "file:///workspace/");
        assert_eq!(formatter.format(&[]).unwrap(), "export const files = [\n\n];\n");
    }

    #[test]
    fn test_typescript_escapes_quotes() {
        let formatter = TypeScriptFormatter::new("files", "file:///workspace/");
        let output = formatter
            .format(&[record("docs/it's.md", "it's.md")])
            .unwrap();
        assert!(output.contains("uri: 'file:///workspace/docs/it\\'s.md'"));
        assert!(output.contains("uniquePath: 'it\\'s.md'"));
    }

    #[test]
    fn test_escape_line_terminators() {
        assert_eq!(escape_single_quoted("a\nb\rc"), "a\\nb\\rc");
        assert_eq!(escape_single_quoted("\u{2028}\u{2029}"), "\\u2028\\u2029");
    }

    #[test]
    fn test_json_output() {
        let formatter = JsonFormatter::new("file:///workspace/");
        let output = formatter
            .format(&[record("a/b/x.txt", "b/x.txt")])
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["uri"], "file:///workspace/a/b/x.txt");
        assert_eq!(value[0]["uniquePath"], "b/x.txt");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_json_empty() {
        let output = JsonFormatter::new("file:///workspace/").format(&[]).unwrap();
        assert_eq!(output.trim(), "[]");
    }
}
