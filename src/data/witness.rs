// witness.rs - Witness sequences and the sets they are tabulated from

use crate::core::{aligned_row, assemble, consensus_supersequence, FeatureMatrix, TabulateOptions, TableOrientation};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use regex::Regex;
use std::collections::HashSet;

/// One ordered token sequence with its identifier
#[derive(Debug, Clone, PartialEq)]
pub struct Witness {
    pub witness_id: String,
    pub tokens: Vec<String>,
}

/// An ordered collection of witnesses awaiting tabulation
#[derive(Debug, Default)]
pub struct WitnessSet {
    pub witnesses: Vec<Witness>,
}

/// A built feature matrix together with the labels describing its axes
#[derive(Debug)]
pub struct Tabulation {
    pub matrix: FeatureMatrix<String>,
    pub consensus: Vec<String>,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub report: TabulationReport,
}

/// Agreement metrics over a built matrix
#[derive(Debug, Clone)]
pub struct TabulationReport {
    pub consensus_length: usize,
    pub gap_fraction: f64,
    pub unanimous_columns: usize,
    pub agreement_index: f64,
    pub agreement_category: &'static str,
}

impl WitnessSet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self {
            witnesses: Vec::new(),
        }
    }

    /// Witness filtering by id: regex patterns and explicit id sets
    pub fn apply_witness_filtering(
        &mut self,
        include: Option<&Regex>,
        exclude: Option<&Regex>,
        include_set: Option<&HashSet<String>>,
        exclude_set: Option<&HashSet<String>>,
    ) -> Result<(), String> {
        let initial = self.witnesses.len();

        if include.is_some() || exclude.is_some() || include_set.is_some() || exclude_set.is_some()
        {
            self.witnesses.retain(|witness| {
                let id = &witness.witness_id;

                if let Some(regex) = include {
                    if !regex.is_match(id) {
                        return false;
                    }
                }
                if let Some(regex) = exclude {
                    if regex.is_match(id) {
                        return false;
                    }
                }
                if let Some(set) = include_set {
                    if !set.contains(id) {
                        return false;
                    }
                }
                if let Some(set) = exclude_set {
                    if set.contains(id) {
                        return false;
                    }
                }

                true
            });

            let kept = self.witnesses.len();
            if initial != kept {
                println!(
                    "Witness filters: kept {} witnesses (removed {})",
                    kept,
                    initial - kept
                );
            }
        }

        if self.witnesses.is_empty() {
            return Err("No witnesses remain after filtering".to_string());
        }

        Ok(())
    }

    /// Drop witnesses with fewer than `min_tokens` tokens
    pub fn apply_min_tokens(&mut self, min_tokens: usize) -> Result<(), String> {
        if min_tokens == 0 {
            return Ok(());
        }

        let initial = self.witnesses.len();
        self.witnesses
            .retain(|witness| witness.tokens.len() >= min_tokens);

        let removed = initial - self.witnesses.len();
        if removed > 0 {
            println!(
                "Token-count filter (minimum {}): removed {} witnesses",
                min_tokens, removed
            );
        }

        if self.witnesses.is_empty() {
            return Err(format!(
                "No witnesses remain with at least {} tokens",
                min_tokens
            ));
        }

        Ok(())
    }

    /// Print set statistics for a loading/filtering phase
    pub fn print_statistics(&self, phase: &str) {
        println!("\n📊 === WITNESS STATISTICS ({}) ===", phase);

        let token_counts: Vec<usize> = self
            .witnesses
            .iter()
            .map(|witness| witness.tokens.len())
            .collect();
        let total_tokens: usize = token_counts.iter().sum();
        let shortest = token_counts.iter().min().copied().unwrap_or(0);
        let longest = token_counts.iter().max().copied().unwrap_or(0);

        println!(
            "  📏 Dimensions: {} witnesses, {} tokens total",
            self.witnesses.len(),
            total_tokens
        );
        println!(
            "  📐 Token counts: shortest {}, longest {}, mean {:.1}",
            shortest,
            longest,
            if self.witnesses.is_empty() {
                0.0
            } else {
                total_tokens as f64 / self.witnesses.len() as f64
            }
        );

        let unique_tokens: HashSet<&str> = self
            .witnesses
            .iter()
            .flat_map(|witness| witness.tokens.iter().map(|t| t.as_str()))
            .collect();
        println!("  🔤 Vocabulary: {} distinct tokens", unique_tokens.len());
    }

    /// Tabulate the set against its consensus supersequence.
    ///
    /// The core engine stays I/O-free; this wrapper adds the progress bar
    /// over the per-witness alignments and attaches axis labels plus the
    /// agreement report to the result.
    pub fn tabulate(&self, options: &TabulateOptions) -> Result<Tabulation, String> {
        let sequences: Vec<Vec<String>> = self
            .witnesses
            .iter()
            .map(|witness| witness.tokens.clone())
            .collect();
        let consensus = consensus_supersequence(&sequences);

        let progress = ProgressBar::new(self.witnesses.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} witnesses ETA: {eta}")
                .unwrap()
                .progress_chars("#>-"),
        );

        let rows: Vec<Vec<Option<String>>> = sequences
            .par_iter()
            .map(|sequence| {
                let row = aligned_row(&consensus, sequence);
                progress.inc(1);
                row
            })
            .collect();
        progress.finish_and_clear();

        let report = TabulationReport::from_rows(&rows, consensus.len());

        let mut sequence_labels: Vec<String> = Vec::with_capacity(self.witnesses.len() + 1);
        if options.include_consensus {
            sequence_labels.push("consensus".to_string());
        }
        sequence_labels.extend(self.witnesses.iter().map(|w| w.witness_id.clone()));
        let position_labels: Vec<String> = (0..consensus.len()).map(|i| i.to_string()).collect();

        let matrix = assemble(&consensus, rows, options)?;
        let (row_labels, column_labels) = match options.orientation {
            TableOrientation::Rows => (sequence_labels, position_labels),
            TableOrientation::Columns => (position_labels, sequence_labels),
        };

        Ok(Tabulation {
            matrix,
            consensus,
            row_labels,
            column_labels,
            report,
        })
    }
}

impl TabulationReport {
    /// Compute agreement metrics from the raw witness rows (sequence-major,
    /// before any orientation change or consensus row is applied).
    pub fn from_rows(rows: &[Vec<Option<String>>], consensus_length: usize) -> Self {
        if rows.is_empty() || consensus_length == 0 {
            return Self {
                consensus_length,
                gap_fraction: 0.0,
                unanimous_columns: 0,
                agreement_index: 0.0,
                agreement_category: "Empty",
            };
        }

        let column_presence: Vec<usize> = (0..consensus_length)
            .into_par_iter()
            .map(|col| rows.iter().filter(|row| row[col].is_some()).count())
            .collect();

        let total_cells = rows.len() * consensus_length;
        let present_cells: usize = column_presence.iter().sum();
        let gap_fraction = 1.0 - present_cells as f64 / total_cells as f64;
        let unanimous_columns = column_presence
            .iter()
            .filter(|&&present| present == rows.len())
            .count();
        let agreement_index = present_cells as f64 / total_cells as f64;

        let agreement_category = if agreement_index >= 0.9 {
            "High"
        } else if agreement_index >= 0.6 {
            "Moderate"
        } else {
            "Low"
        };

        Self {
            consensus_length,
            gap_fraction,
            unanimous_columns,
            agreement_index,
            agreement_category,
        }
    }

    /// Print the report in the statistics register
    pub fn print(&self) {
        println!("\n📈 === TABULATION REPORT ===");
        println!("  🧬 Consensus length: {}", self.consensus_length);
        println!(
            "  📊 Gaps: {:.2}% of cells",
            self.gap_fraction * 100.0
        );
        println!(
            "  ✅ Unanimous columns: {} of {}",
            self.unanimous_columns, self.consensus_length
        );
        print!(
            "  📈 Agreement index: {:.3} ({})",
            self.agreement_index, self.agreement_category
        );
        if self.agreement_index >= 0.9 {
            println!("  🟢 Witnesses are nearly identical");
        } else if self.agreement_index >= 0.6 {
            println!("  🟡 Witnesses diverge at some positions");
        } else {
            println!("  🔴 Witnesses are highly divergent");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn witness(id: &str, tokens: &str) -> Witness {
        Witness {
            witness_id: id.to_string(),
            tokens: tokens
                .split(',')
                .filter(|t| !t.is_empty())
                .map(|t| t.to_string())
                .collect(),
        }
    }

    fn sample_set() -> WitnessSet {
        WitnessSet {
            witnesses: vec![
                witness("w1", "a,b,c,d,f,g"),
                witness("w2", "b,c,d,e"),
                witness("w3", "a,c,e,f,g"),
            ],
        }
    }

    #[test]
    fn test_include_regex_filtering() {
        let mut set = sample_set();
        let include = Regex::new("w[12]").unwrap();
        set.apply_witness_filtering(Some(&include), None, None, None)
            .unwrap();

        let ids: Vec<&str> = set
            .witnesses
            .iter()
            .map(|w| w.witness_id.as_str())
            .collect();
        assert_eq!(ids, vec!["w1", "w2"]);
    }

    #[test]
    fn test_exclude_set_filtering() {
        let mut set = sample_set();
        let exclude: HashSet<String> = ["w2".to_string()].into_iter().collect();
        set.apply_witness_filtering(None, None, None, Some(&exclude))
            .unwrap();

        assert_eq!(set.witnesses.len(), 2);
        assert!(set.witnesses.iter().all(|w| w.witness_id != "w2"));
    }

    #[test]
    fn test_filtering_everything_is_an_error() {
        let mut set = sample_set();
        let include = Regex::new("nomatch").unwrap();
        assert!(set
            .apply_witness_filtering(Some(&include), None, None, None)
            .is_err());
    }

    #[test]
    fn test_min_tokens_filter() {
        let mut set = sample_set();
        set.apply_min_tokens(5).unwrap();
        assert_eq!(set.witnesses.len(), 2); // w2 has 4 tokens

        let mut set = sample_set();
        assert!(set.apply_min_tokens(100).is_err());
    }

    #[test]
    fn test_tabulation_labels_follow_orientation() {
        let set = sample_set();

        let rows = set.tabulate(&TabulateOptions::default()).unwrap();
        assert_eq!(rows.row_labels, vec!["w1", "w2", "w3"]);
        assert_eq!(rows.column_labels.len(), 7);
        assert_eq!(rows.matrix.rows(), 3);

        let cols = set
            .tabulate(&TabulateOptions {
                orientation: TableOrientation::Columns,
                include_consensus: true,
            })
            .unwrap();
        assert_eq!(cols.column_labels[0], "consensus");
        assert_eq!(cols.column_labels[1..], ["w1", "w2", "w3"]);
        assert_eq!(cols.row_labels.len(), 7);
        assert_eq!(cols.matrix.rows(), 7);
        assert_eq!(cols.matrix.columns().unwrap(), 4);
    }

    #[test]
    fn test_report_counts_gaps_and_unanimity() {
        let set = sample_set();
        let tabulation = set.tabulate(&TabulateOptions::default()).unwrap();
        let report = &tabulation.report;

        assert_eq!(report.consensus_length, 7);
        // 15 tokens across 21 cells; only column "c" is present in all three
        assert_eq!(report.unanimous_columns, 1);
        assert!((report.gap_fraction - 6.0 / 21.0).abs() < 1e-9);
        assert!((report.agreement_index - 15.0 / 21.0).abs() < 1e-9);
        assert_eq!(report.agreement_category, "Moderate");
    }

    #[test]
    fn test_report_empty_set() {
        let report = TabulationReport::from_rows(&[], 0);
        assert_eq!(report.consensus_length, 0);
        assert_eq!(report.agreement_category, "Empty");
    }
}
