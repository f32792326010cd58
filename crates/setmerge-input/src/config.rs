use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InputResult;

/// How merged output is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options controlling a merge run.
///
/// Every field is optional in the TOML file; missing fields take the
/// [`Default`] values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Merge into an ordered (`BTreeSet`) container instead of a `HashSet`.
    pub ordered: bool,
    /// Emit overlap statistics alongside the merged elements.
    pub report: bool,
    /// Output rendering.
    pub output: OutputFormat,
}

impl MergeConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> InputResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> InputResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded merge config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;

    #[test]
    fn default_config() {
        let c = MergeConfig::default();
        assert!(!c.ordered);
        assert!(!c.report);
        assert_eq!(c.output, OutputFormat::Text);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(MergeConfig::from_toml_str("").unwrap(), MergeConfig::default());
    }

    #[test]
    fn partial_file() {
        let c = MergeConfig::from_toml_str("ordered = true\noutput = \"json\"").unwrap();
        assert!(c.ordered);
        assert!(!c.report);
        assert_eq!(c.output, OutputFormat::Json);
    }

    #[test]
    fn bad_output_value() {
        let err = MergeConfig::from_toml_str("output = \"yaml\"").unwrap_err();
        assert!(matches!(err, InputError::Toml(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setmerge.toml");
        std::fs::write(&path, "report = true").unwrap();
        let c = MergeConfig::load(&path).unwrap();
        assert!(c.report);
    }
}
