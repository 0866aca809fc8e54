// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,

    // Rendering
    pub format: Option<String>,
    pub placeholder: Option<String>,
    pub separator: Option<String>,

    // Tabulation
    pub orientation: Option<String>,
    pub include_consensus: Option<bool>,

    // Witness filtering
    pub include_witnesses: Option<String>,
    pub exclude_witnesses: Option<String>,
    pub include_witnesses_list: Option<String>,
    pub exclude_witnesses_list: Option<String>,
    pub min_tokens: Option<usize>,

    // Performance
    pub threads: Option<usize>,

    // Flags
    pub stats_only: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# seqtab.toml - Configuration file for seqtab
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Path to witness file (.tsv or .csv; one line per witness: id, then tokens)
input = "/path/to/witnesses.tsv"

# Output feature matrix file
output = "matrix.tsv"

# =============================================================================
# RENDERING
# =============================================================================

# Output format: tsv, csv, markdown, json, plain
format = "tsv"

# Placeholder rendered for absent cells
placeholder = "-"

# Cell separator for the plain output format
separator = "|"

# =============================================================================
# TABULATION
# =============================================================================

# Matrix orientation: rows (one row per witness), columns (transposed)
orientation = "rows"

# Include the consensus supersequence as a leading row
include_consensus = false

# =============================================================================
# WITNESS FILTERING
# =============================================================================

# Include only witnesses matching regex pattern
# include_witnesses = "ms-.*"

# Exclude witnesses matching regex pattern
# exclude_witnesses = "draft.*"

# Include only witnesses listed in a file (one id per line)
# include_witnesses_list = "witnesses.txt"

# Exclude witnesses listed in a file (one id per line)
# exclude_witnesses_list = "exclude.txt"

# Drop witnesses with fewer tokens than this
min_tokens = 0

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str(
            r#"
            input = "witnesses.tsv"
            format = "markdown"
            include_consensus = true
            "#,
        )
        .unwrap();

        assert_eq!(config.input.as_deref(), Some("witnesses.tsv"));
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.include_consensus, Some(true));
        assert!(config.output.is_none());
    }

    #[test]
    fn test_sample_config_is_valid_toml() {
        let sample = Config::generate_sample();
        let config: Config = toml::from_str(&sample).unwrap();

        assert!(config.input.is_some());
        assert_eq!(config.orientation.as_deref(), Some("rows"));
        assert_eq!(config.min_tokens, Some(0));
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            input: Some("in.tsv".to_string()),
            format: Some("json".to_string()),
            min_tokens: Some(3),
            ..Config::default()
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.input.as_deref(), Some("in.tsv"));
        assert_eq!(parsed.format.as_deref(), Some("json"));
        assert_eq!(parsed.min_tokens, Some(3));
    }
}
