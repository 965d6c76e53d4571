//! Configuration validation
//!
//! The shell collects whatever the environment (or command line) provides into
//! [`RawInputs`]; [`Config::from_inputs`] turns that into a validated
//! [`Config`] or reports the first missing field.

use std::path::PathBuf;

/// Environment variable holding the bearer token.
pub const API_KEY_VAR: &str = "INPUT_API_KEY";
/// Environment variable holding the chat-completion endpoint URL.
pub const API_ENDPOINT_VAR: &str = "INPUT_API_ENDPOINT";
/// Environment variable holding the model identifier.
pub const MODEL_NAME_VAR: &str = "INPUT_MODEL_NAME";
/// Environment variable holding the directory to scan.
pub const SOURCE_DIR_VAR: &str = "INPUT_SOURCE_DIR";

/// Source directory used when none is given.
pub const DEFAULT_SOURCE_DIR: &str = ".";
/// Output is always written here, relative to the working directory.
pub const OUTPUT_DIR: &str = "./docs";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("'{0}' input is required.")]
    MissingInput(&'static str),
}

/// Unvalidated configuration values.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub api_key: Option<String>,
    pub api_endpoint: Option<String>,
    pub model_name: Option<String>,
    pub source_dir: Option<String>,
}

/// Validated, read-only configuration for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub model_name: String,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
}

// Keeps the API key out of `{:?}` output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_endpoint", &self.api_endpoint)
            .field("model_name", &self.model_name)
            .field("source_dir", &self.source_dir)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl Config {
    /// Validate raw inputs.
    ///
    /// Mandatory fields are checked in the order api key, api endpoint,
    /// model name. Empty strings count as missing, since pipeline runners
    /// export unset inputs as empty variables.
    pub fn from_inputs(inputs: RawInputs) -> Result<Self, ConfigError> {
        let api_key = required(inputs.api_key, "api_key")?;
        let api_endpoint = required(inputs.api_endpoint, "api_endpoint")?;
        let model_name = required(inputs.model_name, "model_name")?;

        let source_dir = non_empty(inputs.source_dir)
            .unwrap_or_else(|| DEFAULT_SOURCE_DIR.to_string());

        Ok(Self {
            api_key,
            api_endpoint,
            model_name,
            source_dir: PathBuf::from(source_dir),
            output_dir: PathBuf::from(OUTPUT_DIR),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    non_empty(value).ok_or(ConfigError::MissingInput(name))
}
