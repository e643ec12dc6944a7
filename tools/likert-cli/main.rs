use clap::{Parser, ValueEnum};
use likert_synth::export::{csv, table, template};
use likert_synth::prelude::*;
use std::fs;
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyCli {
    Reject,
    Repair,
}

/// Generate a synthetic Likert survey dataset and its summary tables
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the model JSON file; the built-in two-construct model is used when omitted
    model_path: Option<String>,

    /// Override the model's sample size
    #[arg(short = 'n', long)]
    sample_size: Option<usize>,

    /// Override the model's random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the dataset CSV (defaults to survey_data_n<N>.csv)
    #[arg(short, long)]
    output: Option<String>,

    /// What to do when the configured paths produce an invalid covariance matrix
    #[arg(long, value_enum, default_value_t = PolicyCli::Reject)]
    non_psd: PolicyCli,

    /// Also write the reproducibility code template to this path
    #[arg(long)]
    template: Option<String>,

    /// Also write the full summary report as JSON to this path
    #[arg(long)]
    report_json: Option<String>,

    /// Also save a binary run artifact to this path
    #[arg(long)]
    artifact: Option<String>,

    /// Number of dataset rows to preview
    #[arg(long, default_value_t = table::DEFAULT_PREVIEW_ROWS)]
    preview: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    run(cli);
}

fn run(cli: Cli) {
    let total_start = Instant::now();

    // --- 1. Model Loading ---
    let mut spec = match &cli.model_path {
        Some(path) => ModelSpec::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string())),
        None => {
            println!("No model file provided. Using the default PE → ATT model.");
            ModelSpec::default()
        }
    };
    if let Some(n) = cli.sample_size {
        spec.sample_size = n;
    }
    if let Some(seed) = cli.seed {
        spec.seed = seed;
    }

    let policy = match cli.non_psd {
        PolicyCli::Reject => NonPsdPolicy::Reject,
        PolicyCli::Repair => NonPsdPolicy::Repair,
    };

    // --- 2. Generation ---
    let generate_start = Instant::now();
    let output = Synthesizer::builder(spec)
        .with_non_psd_policy(policy)
        .build()
        .synthesize()
        .unwrap_or_else(|e| exit_with_error(&format!("Generation failed: {}", e)));
    let generate_duration = generate_start.elapsed();

    println!(
        "\nDataset generated with {} responses ({} columns)",
        output.dataset.len(),
        output.dataset.column_count()
    );

    // --- 3. Exports ---
    let csv_path = cli
        .output
        .clone()
        .unwrap_or_else(|| csv::default_file_name(output.dataset.len()));
    csv::write_dataset_csv(&output.dataset, &csv_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!("  -> Wrote dataset to '{}'", csv_path);

    if let Some(path) = &cli.template {
        let script = template::python_template(&output.spec)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        fs::write(path, script).unwrap_or_else(|e| {
            exit_with_error(&format!("Could not write template '{}': {}", path, e))
        });
        println!("  -> Wrote code template to '{}'", path);
    }

    if let Some(path) = &cli.report_json {
        let json = serde_json::to_string_pretty(&output.report)
            .unwrap_or_else(|e| exit_with_error(&format!("Could not serialize report: {}", e)));
        fs::write(path, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Could not write report '{}': {}", path, e))
        });
        println!("  -> Wrote report to '{}'", path);
    }

    if let Some(path) = &cli.artifact {
        RunArtifact::new(output.clone())
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        println!("  -> Saved run artifact to '{}'", path);
    }

    // --- 4. Results ---
    println!();
    print!("{}", table::render_report(&output.report));

    if cli.preview > 0 {
        println!(
            "\n--- Data Preview (First {} rows) ---",
            cli.preview.min(output.dataset.len())
        );
        print!(
            "{}",
            table::render_dataset_preview(&output.dataset, cli.preview)
        );
    }

    println!("\n--- Performance Summary ---");
    println!("Generation:           {:?}", generate_duration);
    println!("Total Execution:      {:?}", total_start.elapsed());
    println!();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
