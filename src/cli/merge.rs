// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input.is_none() {
            self.input = config.input;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Rendering (only override defaults, not explicit CLI values)
        if self.format == "tsv" && config.format.is_some() {
            self.format = config.format.unwrap();
        }
        if self.placeholder == "-" && config.placeholder.is_some() {
            self.placeholder = config.placeholder.unwrap();
        }
        if self.separator == "|" && config.separator.is_some() {
            self.separator = config.separator.unwrap();
        }

        // Tabulation
        if self.orientation == "rows" && config.orientation.is_some() {
            self.orientation = config.orientation.unwrap();
        }
        if !self.include_consensus && config.include_consensus.unwrap_or(false) {
            self.include_consensus = true;
        }

        // Witness filtering
        if self.include_witnesses.is_none() {
            self.include_witnesses = config.include_witnesses;
        }
        if self.exclude_witnesses.is_none() {
            self.exclude_witnesses = config.exclude_witnesses;
        }
        if self.include_witnesses_list.is_none() {
            self.include_witnesses_list = config.include_witnesses_list;
        }
        if self.exclude_witnesses_list.is_none() {
            self.exclude_witnesses_list = config.exclude_witnesses_list;
        }
        if self.min_tokens == 0 && config.min_tokens.is_some() {
            self.min_tokens = config.min_tokens.unwrap();
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.stats_only && config.stats_only.unwrap_or(false) {
            self.stats_only = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> Args {
        Args {
            input: None,
            output: None,
            format: "tsv".to_string(),
            placeholder: "-".to_string(),
            separator: "|".to_string(),
            orientation: "rows".to_string(),
            include_consensus: false,
            include_witnesses: None,
            exclude_witnesses: None,
            include_witnesses_list: None,
            exclude_witnesses_list: None,
            min_tokens: 0,
            threads: None,
            stats_only: false,
            dry_run: false,
            config: None,
            generate_config: false,
        }
    }

    #[test]
    fn test_config_fills_unset_values() {
        let config = Config {
            input: Some("in.tsv".to_string()),
            format: Some("markdown".to_string()),
            include_consensus: Some(true),
            ..Config::default()
        };

        let merged = default_args().merge_with_config(config);

        assert_eq!(merged.input.as_deref(), Some("in.tsv"));
        assert_eq!(merged.format, "markdown");
        assert!(merged.include_consensus);
    }

    #[test]
    fn test_cli_values_win() {
        let mut args = default_args();
        args.input = Some("cli.tsv".to_string());
        args.format = "json".to_string();

        let config = Config {
            input: Some("config.tsv".to_string()),
            format: Some("markdown".to_string()),
            ..Config::default()
        };

        let merged = args.merge_with_config(config);

        assert_eq!(merged.input.as_deref(), Some("cli.tsv"));
        assert_eq!(merged.format, "json");
    }
}
