// delimited.rs - TSV/CSV witness loaders

use crate::data::witness::{Witness, WitnessSet};
use std::collections::HashSet;
use std::path::Path;

/// Parse one witness line: the id field followed by the token fields.
///
/// Fields are trimmed (and unquoted for CSV input); empty trailing fields
/// are dropped so ragged editors' output loads cleanly. A line whose id
/// field is empty is an error.
fn parse_witness_line(line: &str, separator: char, line_num: usize) -> Result<Witness, String> {
    let mut fields = line.split(separator).map(|f| f.trim().trim_matches('"'));

    let witness_id = fields
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| format!("Line {} has an empty witness id", line_num))?
        .to_string();

    let tokens: Vec<String> = fields
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect();

    Ok(Witness { witness_id, tokens })
}

/// Parse a whole delimited document into a witness set.
///
/// One line per witness, blank lines skipped, rows may have unequal token
/// counts (sequences of unequal length are expected input, not an error).
/// Duplicate witness ids and documents with no witnesses are rejected.
fn parse_delimited(content: &str, separator: char) -> Result<WitnessSet, String> {
    let mut witnesses = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let witness = parse_witness_line(line, separator, line_num + 1)?;
        if !seen.insert(witness.witness_id.clone()) {
            return Err(format!(
                "Duplicate witness id '{}' at line {}",
                witness.witness_id,
                line_num + 1
            ));
        }
        witnesses.push(witness);
    }

    if witnesses.is_empty() {
        return Err("No witnesses found in input".to_string());
    }

    Ok(WitnessSet { witnesses })
}

impl WitnessSet {
    /// Load witnesses from a TSV file (id field, then one field per token)
    pub fn from_tsv(file_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(file_path)
            .map_err(|e| format!("Failed to read TSV file '{}': {}", file_path.display(), e))?;

        let set = parse_delimited(&content, '\t')?;
        println!("✅ TSV loaded: {} witnesses", set.witnesses.len());
        Ok(set)
    }

    /// Load witnesses from a CSV file
    pub fn from_csv(file_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(file_path)
            .map_err(|e| format!("Failed to read CSV file '{}': {}", file_path.display(), e))?;

        let set = parse_delimited(&content, ',')?;
        println!("✅ CSV loaded: {} witnesses", set.witnesses.len());
        Ok(set)
    }

    /// Load witnesses dispatching on the file extension (.csv, else TSV)
    pub fn from_file(file_path: &Path) -> Result<Self, String> {
        println!("📊 Loading witnesses: {}", file_path.display());

        let extension = file_path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("tsv");

        match extension {
            "csv" => Self::from_csv(file_path),
            _ => Self::from_tsv(file_path),
        }
    }
}
