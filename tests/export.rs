//! Tests for CSV, table, template and artifact exports.
mod common;
use common::*;
use likert_synth::export::{csv, table, template};
use likert_synth::prelude::*;
use likert_synth::summary::SIMULATED_CAVEAT;

fn run(spec: ModelSpec) -> GenerationOutput {
    Synthesizer::new(spec).synthesize().expect("Failed to generate")
}

#[test]
fn test_dataset_csv_layout() {
    let output = run(pe_att_spec(100, 2025));
    let text = csv::dataset_to_csv(&output.dataset);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 101);
    assert_eq!(lines[0], "ID,PE1,PE2,PE3,PE4,ATT1,ATT2,ATT3,ATT4");
    assert!(lines[1].starts_with("1,"));
    assert!(lines[100].starts_with("100,"));
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 9);
        assert!(fields[1..].iter().all(|f| ["1", "2", "3", "4", "5"].contains(f)));
    }
}

#[test]
fn test_csv_quotes_awkward_names() {
    let spec = ModelSpec::new(
        vec![Construct::new("Ease, of use", 3, 3.0, 0.5, Role::IV)],
        50,
        1,
    );
    let output = run(spec);
    let header = csv::dataset_to_csv(&output.dataset)
        .lines()
        .next()
        .unwrap()
        .to_string();
    assert_eq!(header, "ID,\"Ease, of use1\",\"Ease, of use2\",\"Ease, of use3\"");
}

#[test]
fn test_default_file_names() {
    assert_eq!(csv::default_file_name(926), "survey_data_n926.csv");
    assert_eq!(template::TEMPLATE_FILE_NAME, "survey_generator.py");
}

#[test]
fn test_write_dataset_csv_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let path = path.to_str().unwrap();
    let output = run(pe_att_spec(60, 2));

    csv::write_dataset_csv(&output.dataset, path).unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, csv::dataset_to_csv(&output.dataset));
}

#[test]
fn test_write_to_missing_directory_fails() {
    let output = run(pe_att_spec(60, 2));
    let result = csv::write_dataset_csv(&output.dataset, "no/such/dir/data.csv");
    assert!(matches!(result, Err(ExportError::Io { .. })));
}

#[test]
fn test_summary_tables_as_csv() {
    let output = run(pe_att_path_spec(100, 2025));
    let descriptive = csv::descriptive_to_csv(&output.report);
    assert!(descriptive.starts_with("Construct,Mean,SD,Skewness,Kurtosis"));
    // Header, two constructs and the caveat row.
    assert_eq!(descriptive.lines().count(), 4);

    let paths = csv::paths_to_csv(&output.report);
    let row = paths.lines().nth(1).unwrap();
    assert!(row.starts_with("PE → ATT,"));
    assert!(row.ends_with(",< 0.001,Yes"));

    let fit = csv::fit_to_csv(&output.report);
    assert!(fit.starts_with("SRMR,NFI,CFI\n"));
    assert_eq!(fit.lines().count(), 3);
}

#[test]
fn test_summary_csv_states_values_are_simulated() {
    let output = run(pe_att_path_spec(100, 2025));
    let expected = format!("Note,\"{}\"", SIMULATED_CAVEAT);

    for table in [
        csv::descriptive_to_csv(&output.report),
        csv::paths_to_csv(&output.report),
        csv::fit_to_csv(&output.report),
    ] {
        assert_eq!(table.lines().last(), Some(expected.as_str()));
    }
}

#[test]
fn test_rendered_report() {
    let output = run(pe_att_path_spec(100, 2025));
    let text = table::render_report(&output.report);
    assert!(text.contains("--- Descriptive Statistics ---"));
    assert!(text.contains("--- Path Analysis Results ---"));
    assert!(text.contains("--- Model Fit Indices ---"));
    assert!(text.contains("PE → ATT"));
    assert!(text.contains(&output.report.caveat));

    let without_paths = run(pe_att_spec(100, 2025));
    let text = table::render_report(&without_paths.report);
    assert!(!text.contains("Path Analysis Results"));
}

#[test]
fn test_dataset_preview() {
    let output = run(pe_att_spec(100, 2025));
    let preview = table::render_dataset_preview(&output.dataset, table::DEFAULT_PREVIEW_ROWS);
    // Header, rule and ten rows.
    assert_eq!(preview.lines().count(), 12);
    assert!(preview.lines().next().unwrap().contains("ATT4"));
}

#[test]
fn test_render_table_alignment() {
    let headers = vec!["A".to_string(), "Long header".to_string()];
    let rows = vec![vec!["wide value".to_string(), "x".to_string()]];
    let text = table::render_table(&headers, &rows);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "| A          | Long header |");
    assert_eq!(lines[1], "| ---------- | ----------- |");
    assert_eq!(lines[2], "| wide value | x           |");
}

#[test]
fn test_python_template_restates_configuration() {
    let spec = ModelSpec::default();
    let script = template::python_template(&spec).unwrap();
    assert!(script.contains("np.random.seed(2025)"));
    assert!(script.contains("sample_size = 926"));
    assert!(script.contains("constructs = [\"PE\",\"ATT\"]"));
    assert!(script.contains("MODEL_SPEC = json.loads(\"{"));
}

/// Pulls the JSON literal back out of the `MODEL_SPEC = json.loads(...)` line.
fn embedded_model(script: &str) -> ModelSpec {
    let line = script
        .lines()
        .find(|l| l.starts_with("MODEL_SPEC = "))
        .expect("template has a MODEL_SPEC line");
    let literal = line
        .strip_prefix("MODEL_SPEC = json.loads(")
        .and_then(|rest| rest.strip_suffix(')'))
        .expect("MODEL_SPEC wraps a single literal");
    let json: String = serde_json::from_str(literal).expect("literal is a JSON string");
    ModelSpec::from_json(&json).expect("embedded model parses")
}

#[test]
fn test_python_template_survives_awkward_names() {
    let spec = ModelSpec::new(
        vec![
            Construct::new("Ease'''use", 3, 3.0, 0.5, Role::IV),
            Construct::new("Line\nBreak", 3, 3.0, 0.5, Role::DV),
        ],
        100,
        9,
    );
    assert!(spec.validate().is_ok());

    let script = template::python_template(&spec).unwrap();
    let plain = template::python_template(&ModelSpec::default()).unwrap();

    // No name may open a new source line or close a literal early.
    assert_eq!(script.lines().count(), plain.lines().count());
    assert!(script.contains("constructs = [\"Ease'''use\",\"Line\\nBreak\"]"));
    assert!(!script.contains("r'''"));

    let names_line = script
        .lines()
        .find(|l| l.starts_with("constructs = "))
        .unwrap();
    let names: Vec<String> =
        serde_json::from_str(names_line.trim_start_matches("constructs = ")).unwrap();
    assert_eq!(names, vec!["Ease'''use", "Line\nBreak"]);
    assert_eq!(embedded_model(&script), spec);
}

#[test]
fn test_run_artifact_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.bin");
    let path = path.to_str().unwrap();

    let output = run(three_construct_spec(150, 21));
    RunArtifact::new(output.clone()).save(path).unwrap();
    let loaded = RunArtifact::from_file(path).unwrap();

    assert_eq!(loaded.format_version, likert_synth::export::artifact::ARTIFACT_FORMAT_VERSION);
    assert_eq!(loaded.output, output);
}

#[test]
fn test_corrupt_artifact_is_rejected() {
    let result = RunArtifact::from_bytes(&[0xFF, 0x00, 0x13]);
    assert!(matches!(result, Err(ExportError::Serialization(_))));
}
