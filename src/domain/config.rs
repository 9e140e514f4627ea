use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Limits;

/// Configuration for the recognizers.
///
/// This struct holds the input-length limits applied before a recognizer runs.
/// Recognizers have no internal buffers, so any limit is a policy choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Maximum length, in characters, of a FEN descriptor.
    pub max_descriptor_length: usize,

    /// Maximum length, in characters, of an IPv4 literal.
    pub max_address_length: usize,

    /// Maximum length, in characters, of general input (scientific notation
    /// and email addresses).
    pub max_input_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_descriptor_length: default_descriptor_length(),
            max_address_length: default_address_length(),
            max_input_length: default_input_length(),
        }
    }
}

/// Errors reading or writing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    /// The file is not valid configuration TOML.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file could not be written.
    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    /// The length limits described by this configuration.
    #[must_use]
    pub const fn limits(&self) -> Limits {
        Limits {
            descriptor: self.max_descriptor_length,
            address: self.max_address_length,
            input: self.max_input_length,
        }
    }
}

const fn default_descriptor_length() -> usize {
    Limits::DEFAULT.descriptor
}

const fn default_address_length() -> usize {
    Limits::DEFAULT.address
}

const fn default_input_length() -> usize {
    Limits::DEFAULT.input
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_descriptor_length")]
        max_descriptor_length: usize,

        #[serde(default = "default_address_length")]
        max_address_length: usize,

        #[serde(default = "default_input_length")]
        max_input_length: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                max_descriptor_length,
                max_address_length,
                max_input_length,
            } => Self {
                max_descriptor_length,
                max_address_length,
                max_input_length,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            max_descriptor_length: config.max_descriptor_length,
            max_address_length: config.max_address_length,
            max_input_length: config.max_input_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nmax_descriptor_length = 90\nmax_address_length = 15\nmax_input_length = 64\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(
            config.limits(),
            Limits {
                descriptor: 90,
                address: 15,
                input: 64,
            }
        );
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read(_)));
        assert!(error.to_string().starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nmax_input_length = \"long\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(actual.limits(), Limits::default());
    }

    #[test]
    fn default_config_uses_default_limits() {
        assert_eq!(Config::default().limits(), Limits::DEFAULT);
        assert_eq!(Limits::default(), Limits::DEFAULT);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("recognizer.toml");
        let config = Config {
            max_input_length: 42,
            ..Config::default()
        };

        config.save(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("_version = \"1\""));
        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
