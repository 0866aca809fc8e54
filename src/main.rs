// main.rs - CLI entry point

use seqtab::cli::Config;
use seqtab::prelude::*;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Validate required parameters
    let input = args.input.clone().ok_or("--input is required")?;
    let output = if args.stats_only || args.dry_run {
        None
    } else {
        Some(
            args.output
                .clone()
                .ok_or("--output is required (not needed for stats-only or dry-run mode)")?,
        )
    };

    println!("🚀 seqtab v{}", env!("CARGO_PKG_VERSION"));
    println!("⚡ Strategy: Fold consensus supersequence → Align witnesses → Assemble matrix");

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!(
            "🧵 Threads: {} (auto-detected)",
            rayon::current_num_threads()
        );
    }

    // Validate all arguments
    let validation = validate_args(&args)?;

    let total_start = Instant::now();

    // Load witnesses
    let mut witnesses = WitnessSet::from_file(std::path::Path::new(&input))?;
    witnesses.print_statistics("INITIAL");

    // Apply filtering
    let filters_active = validation.witness_include_regex.is_some()
        || validation.witness_exclude_regex.is_some()
        || validation.witnesses_include_set.is_some()
        || validation.witnesses_exclude_set.is_some()
        || args.min_tokens > 0;

    witnesses.apply_witness_filtering(
        validation.witness_include_regex.as_ref(),
        validation.witness_exclude_regex.as_ref(),
        validation.witnesses_include_set.as_ref(),
        validation.witnesses_exclude_set.as_ref(),
    )?;
    witnesses.apply_min_tokens(args.min_tokens)?;

    if filters_active {
        witnesses.print_statistics("AFTER FILTERING");
    }

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        println!(
            "📊 {} witnesses ready for tabulation",
            witnesses.witnesses.len()
        );
        return Ok(());
    }

    // Build the feature matrix
    println!(
        "\n⚙️ Tabulating {} witnesses ({})",
        witnesses.witnesses.len(),
        validation.options.orientation.description()
    );
    let tabulation = witnesses.tabulate(&validation.options)?;
    tabulation.report.print();
    println!(
        "📊 Matrix: {} rows × {} columns",
        tabulation.matrix.rows(),
        tabulation.matrix.columns().unwrap_or(0)
    );

    if args.stats_only {
        println!("\n⏱️ Total time: {:.2}s", total_start.elapsed().as_secs_f64());
        return Ok(());
    }

    // Write the matrix
    if let Some(output_path) = output {
        write_matrix(
            &output_path,
            &args.format,
            &tabulation.matrix,
            &tabulation.row_labels,
            &tabulation.column_labels,
            &args.placeholder,
            &args.separator,
            &command_line,
        )?;
    }

    println!("\n⏱️ Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}
