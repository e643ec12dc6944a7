use clap::Parser;
use likert_synth::model::{Construct, ModelSpec, Path, Role};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;

const ROLES: [Role; 4] = [Role::IV, Role::DV, Role::Mediator, Role::Moderator];

/// A CLI tool to generate random example models for likert-synth
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_model.json")]
    output: String,

    /// Number of constructs to generate
    #[arg(short, long, default_value_t = 4)]
    constructs: usize,

    /// Number of paths to generate between distinct constructs
    #[arg(short, long, default_value_t = 3)]
    paths: usize,

    /// Sample size written into the model
    #[arg(long, default_value_t = 500)]
    sample_size: usize,

    /// Seed written into the model
    #[arg(long, default_value_t = 2025)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.constructs < 2 && cli.paths > 0 {
        eprintln!("Error: paths need at least two constructs");
        std::process::exit(1);
    }

    println!(
        "Generating a model with {} construct(s) and {} path(s)...",
        cli.constructs, cli.paths
    );

    let constructs = generate_constructs(&mut rng, cli.constructs);
    let paths = generate_paths(&mut rng, &constructs, cli.paths);

    let mut spec = ModelSpec::new(constructs, cli.sample_size, cli.seed);
    spec.paths = paths;
    spec.validate()?;

    fs::write(&cli.output, spec.to_json()?)?;
    println!("Successfully generated and saved model to '{}'", cli.output);

    Ok(())
}

/// Constructs with moderate means and SDs, named `C1`, `C2`, ...
fn generate_constructs<R: Rng>(rng: &mut R, count: usize) -> Vec<Construct> {
    (1..=count)
        .map(|i| {
            let role = *ROLES.choose(rng).unwrap_or(&Role::IV);
            let mean = (rng.random_range(2.5..4.0_f64) * 100.0).round() / 100.0;
            let sd = (rng.random_range(0.35..0.8_f64) * 100.0).round() / 100.0;
            Construct::new(&format!("C{}", i), rng.random_range(3..=6), mean, sd, role)
        })
        .collect()
}

/// Weak-to-moderate paths, which keep the damped correlation matrix comfortably valid.
fn generate_paths<R: Rng>(rng: &mut R, constructs: &[Construct], count: usize) -> Vec<Path> {
    (0..count)
        .map(|_| {
            let from = rng.random_range(0..constructs.len());
            let mut to = rng.random_range(0..constructs.len() - 1);
            if to >= from {
                to += 1;
            }
            let coefficient = (rng.random_range(-0.2..0.5_f64) * 100.0).round() / 100.0;
            let significant = rng.random_bool(0.7);
            println!(
                "-> {} → {} (β={}, significant={})",
                constructs[from].name, constructs[to].name, coefficient, significant
            );
            Path::new(&constructs[from].name, &constructs[to].name, coefficient, significant)
        })
        .collect()
}
