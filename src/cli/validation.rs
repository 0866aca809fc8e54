// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::{TableOrientation, TabulateOptions};
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::str::FromStr;

const SUPPORTED_FORMATS: [&str; 6] = ["tsv", "csv", "markdown", "md", "json", "plain"];

#[derive(Debug)]
pub struct ValidationResult {
    pub options: TabulateOptions,
    pub witness_include_regex: Option<Regex>,
    pub witness_exclude_regex: Option<Regex>,
    pub witnesses_include_set: Option<HashSet<String>>,
    pub witnesses_exclude_set: Option<HashSet<String>>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate output format
    if !SUPPORTED_FORMATS.contains(&args.format.to_lowercase().as_str()) {
        return Err(format!(
            "Invalid output format '{}'. Available: {}",
            args.format,
            SUPPORTED_FORMATS.join(", ")
        ));
    }

    // Validate orientation and assemble tabulation options
    let orientation = TableOrientation::from_str(&args.orientation)?;
    let options = TabulateOptions {
        orientation,
        include_consensus: args.include_consensus,
    };

    if args.separator.is_empty() {
        return Err("Separator must not be empty".to_string());
    }

    // Compile regex patterns
    let witness_include_regex = if let Some(pattern) = &args.include_witnesses {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_witnesses regex: {}", e))?)
    } else {
        None
    };

    let witness_exclude_regex = if let Some(pattern) = &args.exclude_witnesses {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_witnesses regex: {}", e))?)
    } else {
        None
    };

    // Load filter sets from files
    let witnesses_include_set = if let Some(file_path) = &args.include_witnesses_list {
        Some(load_set_from_file(file_path)?)
    } else {
        None
    };

    let witnesses_exclude_set = if let Some(file_path) = &args.exclude_witnesses_list {
        Some(load_set_from_file(file_path)?)
    } else {
        None
    };

    Ok(ValidationResult {
        options,
        witness_include_regex,
        witness_exclude_regex,
        witnesses_include_set,
        witnesses_exclude_set,
    })
}

/// Load a set of strings from a file (one per line)
fn load_set_from_file(file_path: &str) -> Result<HashSet<String>, String> {
    let file = File::open(file_path)
        .map_err(|e| format!("Failed to open filter file '{}': {}", file_path, e))?;

    let reader = BufReader::new(file);
    let mut set = HashSet::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            format!(
                "Failed to read line {} from '{}': {}",
                line_num + 1,
                file_path,
                e
            )
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            set.insert(trimmed.to_string());
        }
    }

    println!("📋 Loaded {} items from filter file '{}'", set.len(), file_path);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            input: Some("witnesses.tsv".to_string()),
            output: Some("matrix.tsv".to_string()),
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
    fn test_valid_defaults() {
        let result = validate_args(&args()).unwrap();
        assert_eq!(result.options.orientation, TableOrientation::Rows);
        assert!(!result.options.include_consensus);
        assert!(result.witness_include_regex.is_none());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let mut bad = args();
        bad.format = "phylip".to_string();
        assert!(validate_args(&bad).is_err());
    }

    #[test]
    fn test_invalid_orientation_rejected() {
        let mut bad = args();
        bad.orientation = "diagonal".to_string();
        assert!(validate_args(&bad).is_err());
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let mut bad = args();
        bad.include_witnesses = Some("[unclosed".to_string());
        let err = validate_args(&bad).unwrap_err();
        assert!(err.contains("include_witnesses"), "{}", err);
    }

    #[test]
    fn test_empty_separator_rejected() {
        let mut bad = args();
        bad.separator = String::new();
        assert!(validate_args(&bad).is_err());
    }

    #[test]
    fn test_regex_compilation() {
        let mut ok = args();
        ok.exclude_witnesses = Some("draft.*".to_string());
        let result = validate_args(&ok).unwrap();
        assert!(result
            .witness_exclude_regex
            .unwrap()
            .is_match("draft-copy"));
    }
}
