// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// seqtab - Sequence alignment and tabulation engine
pub struct Args {
    /// path to witness file (.tsv or .csv; one line per witness: id, then tokens)
    #[argh(option)]
    pub input: Option<String>,

    /// output feature matrix file
    #[argh(option)]
    pub output: Option<String>,

    /// output format: tsv, csv, markdown, json, plain (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// placeholder rendered for absent cells (default: -)
    #[argh(option, default = "String::from(\"-\")")]
    pub placeholder: String,

    /// cell separator for the plain output format (default: |)
    #[argh(option, default = "String::from(\"|\")")]
    pub separator: String,

    /// matrix orientation: rows, columns (default: rows)
    #[argh(option, default = "String::from(\"rows\")")]
    pub orientation: String,

    /// include the consensus supersequence as a leading row
    #[argh(switch)]
    pub include_consensus: bool,

    /// include only witnesses matching regex pattern
    #[argh(option)]
    pub include_witnesses: Option<String>,

    /// exclude witnesses matching regex pattern
    #[argh(option)]
    pub exclude_witnesses: Option<String>,

    /// include only witnesses listed in a file (one id per line)
    #[argh(option)]
    pub include_witnesses_list: Option<String>,

    /// exclude witnesses listed in a file (one id per line)
    #[argh(option)]
    pub exclude_witnesses_list: Option<String>,

    /// drop witnesses with fewer tokens than this (default: 0 = no filter)
    #[argh(option, default = "0")]
    pub min_tokens: usize,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// show witness and tabulation statistics only, then exit
    #[argh(switch)]
    pub stats_only: bool,

    /// validate inputs without tabulating (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
