//! Configuration validation.
//!
//! Checks that a merged configuration can produce a well-formed artifact.

use crate::config::schema::{Config, OutputConfig};
use crate::error::{Error, Result};
use crate::path::SEPARATOR;

/// Words that cannot name an exported `const`.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use mockfs::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config {
///     exclude: Some(vec!["build/output".to_string()]),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref exclude) = config.exclude {
            for name in exclude {
                Self::validate_exclude_name(name)?;
            }
        }

        if let Some(ref prefix) = config.uri_prefix {
            if prefix.chars().any(char::is_control) {
                return Err(Error::Validation {
                    field: "uri_prefix".into(),
                    message: "Cannot contain control characters".into(),
                });
            }
        }

        if let Some(ref output) = config.output {
            Self::validate_output(output)?;
        }

        Ok(())
    }

    /// Exclusion entries are single names matched against one path segment.
    fn validate_exclude_name(name: &str) -> Result<()> {
        let message = if name.is_empty() {
            "Cannot be empty"
        } else if name.contains(SEPARATOR) {
            "Must be a single file or directory name, not a path"
        } else if name.contains('\0') {
            "Cannot contain null bytes"
        } else {
            return Ok(());
        };

        Err(Error::Validation {
            field: "exclude".into(),
            message: format!("{message}: '{name}'"),
        })
    }

    fn validate_output(output: &OutputConfig) -> Result<()> {
        if let Some(ref path) = output.path {
            if path.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "output.path".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        if let Some(ref name) = output.collection_name {
            Self::validate_identifier(name)?;
        }

        Ok(())
    }

    /// The collection name is emitted verbatim as a JavaScript identifier.
    fn validate_identifier(name: &str) -> Result<()> {
        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

        if !valid_start || !valid_rest {
            return Err(Error::Validation {
                field: "output.collection_name".into(),
                message: format!(
                    "'{name}' is not a valid identifier: use letters, digits, '_' or '$', not starting with a digit"
                ),
            });
        }

        if RESERVED_WORDS.contains(&name) {
            return Err(Error::Validation {
                field: "output.collection_name".into(),
                message: format!("'{name}' is a reserved word"),
            });
        }

        Ok(())
    }
}
