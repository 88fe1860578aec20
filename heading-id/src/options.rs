//! Options for heading id assignment, loadable from heading-id.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default name of the options file looked up by the CLI
pub const OPTIONS_FILE_NAME: &str = "heading-id.toml";

/// Heading id options
///
/// Keys are camelCase in TOML (`defaults`, `uniqueDefaults`, `defaultPrefix`).
/// Missing keys take their default value and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Generate an id from the heading text when no `{#id}` marker is present
    pub defaults: bool,

    /// Suffix repeated default ids with `-1`, `-2`, ... within one document
    pub unique_defaults: bool,

    /// Prefix prepended to every default id, separated by a hyphen
    pub default_prefix: String,
}

impl Options {
    /// Load options from a TOML file
    ///
    /// # Parameters
    /// * `path` - Path to the options file
    ///
    /// # Returns
    /// * `Ok(Options)` - Successfully loaded options
    /// * `Err(OptionsError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| OptionsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse options from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize options to TOML text
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply command-line overrides on top of these options
    ///
    /// Flags can only switch an option on; an unset flag keeps the current
    /// value. A given prefix replaces the current one.
    ///
    /// # Parameters
    /// * `defaults` - `--defaults` was passed
    /// * `unique_defaults` - `--unique-defaults` was passed
    /// * `prefix` - Value of `--prefix`, if passed
    pub fn with_overrides(
        mut self,
        defaults: bool,
        unique_defaults: bool,
        prefix: Option<String>,
    ) -> Self {
        self.defaults |= defaults;
        self.unique_defaults |= unique_defaults;
        if let Some(prefix) = prefix {
            self.default_prefix = prefix;
        }
        self
    }
}

/// Errors that can occur when loading options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read options file {path}: {source}", path = .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse options file {path}: {source}", path = .path.display())]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_all_off() {
        let options = Options::default();

        assert!(!options.defaults);
        assert!(!options.unique_defaults);
        assert!(options.default_prefix.is_empty());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let options = Options::from_toml("").unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_camel_case_keys() {
        let toml_str = r#"
defaults = true
uniqueDefaults = true
defaultPrefix = "somePrefix"
"#;

        let options = Options::from_toml(toml_str).unwrap();

        assert!(options.defaults);
        assert!(options.unique_defaults);
        assert_eq!(options.default_prefix, "somePrefix");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let toml_str = r#"
defaults = true
position = false
"#;

        let options = Options::from_toml(toml_str).unwrap();

        assert!(options.defaults);
        assert!(!options.unique_defaults);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(Options::from_toml("defaults = \"yes\"").is_err());
    }

    #[test]
    fn test_options_roundtrip() {
        let options = Options {
            defaults: true,
            unique_defaults: false,
            default_prefix: "doc".to_string(),
        };

        let serialized = options.to_toml().unwrap();
        assert!(serialized.contains("defaultPrefix = \"doc\""));
        assert_eq!(Options::from_toml(&serialized).unwrap(), options);
    }

    #[test]
    fn test_defaults_flag_switches_on_file_value() {
        // Arrange: file leaves defaults off but sets unique defaults
        let from_file = Options::from_toml("uniqueDefaults = true").unwrap();

        // Act
        let options = from_file.with_overrides(true, false, None);

        // Assert
        assert!(options.defaults);
        assert!(options.unique_defaults);
        assert!(options.default_prefix.is_empty());
    }

    #[test]
    fn test_prefix_flag_replaces_file_prefix() {
        let from_file = Options::from_toml("defaultPrefix = \"fromFile\"").unwrap();

        let options = from_file.with_overrides(false, false, Some("fromFlag".to_string()));

        assert_eq!(options.default_prefix, "fromFlag");
    }

    #[test]
    fn test_unset_flags_never_switch_options_off() {
        let toml_str = r#"
defaults = true
uniqueDefaults = true
defaultPrefix = "doc"
"#;
        let from_file = Options::from_toml(toml_str).unwrap();

        let options = from_file.clone().with_overrides(false, false, None);

        assert_eq!(options, from_file);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Options::load("/nonexistent/heading-id.toml").unwrap_err();

        assert!(matches!(err, OptionsError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/heading-id.toml"));
    }
}
