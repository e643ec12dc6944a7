//! Tests for the descriptive and simulated summary tables.
mod common;
use common::*;
use likert_synth::prelude::*;
use likert_synth::summary::*;

fn report_for(spec: &ModelSpec) -> SummaryReport {
    Synthesizer::new(spec.clone())
        .synthesize()
        .expect("generation should succeed")
        .report
}

#[test]
fn test_descriptive_rows_follow_constructs() {
    let report = report_for(&three_construct_spec(300, 5));
    let names: Vec<&str> = report
        .descriptive
        .iter()
        .map(|d| d.construct.as_str())
        .collect();
    assert_eq!(names, vec!["TRU", "SAT", "INT"]);
}

#[test]
fn test_descriptive_mean_tracks_configured_mean() {
    let report = report_for(&pe_att_spec(10_000, 2025));
    let pe = &report.descriptive[0];
    let att = &report.descriptive[1];
    assert!((pe.mean - 3.45).abs() < 0.3, "PE mean {}", pe.mean);
    assert!((att.mean - 3.2).abs() < 0.3, "ATT mean {}", att.mean);
    assert!(pe.sd > 0.0 && pe.sd < 2.0);
    assert!(pe.skewness.is_finite() && pe.kurtosis.is_finite());
}

#[test]
fn test_descriptive_moments_match_stacked_items() {
    let output = Synthesizer::new(pe_att_spec(200, 8)).synthesize().unwrap();
    let stacked: Vec<f64> = output
        .dataset
        .construct_items("ATT")
        .unwrap()
        .iter()
        .flat_map(|r| r.iter().map(|&v| v as f64))
        .collect();
    let moments = Moments::of(&stacked);
    let row = &output.report.descriptive[1];
    assert!((row.mean - moments.mean).abs() < 1e-12);
    assert!((row.sd - moments.sd).abs() < 1e-12);
    assert!((row.skewness - moments.skewness).abs() < 1e-12);
    assert!((row.kurtosis - moments.kurtosis).abs() < 1e-12);
}

#[test]
fn test_simulated_bands_hold_across_seeds() {
    for seed in 0..25 {
        let report = report_for(&three_construct_spec(60, seed));
        assert_eq!(report.mode, ReportingMode::Simulated);
        for d in &report.descriptive {
            assert!(within(d.reliability, 0.75, 0.95), "α {}", d.reliability);
            assert!(within(d.avg_loading, 0.72, 0.84), "loading {}", d.avg_loading);
        }
        let fit = report.fit;
        assert!(within(fit.srmr, 0.03, 0.05), "SRMR {}", fit.srmr);
        assert!(within(fit.nfi, 0.90, 0.98), "NFI {}", fit.nfi);
        assert!(within(fit.cfi, 0.92, 0.99), "CFI {}", fit.cfi);
        assert!(fit.meets_conventional_cutoffs());
    }
}

#[test]
fn test_significant_path_echoes_coefficient() {
    for seed in 0..25 {
        let report = report_for(&pe_att_path_spec(60, seed));
        let row = &report.paths[0];
        assert_eq!(row.path, "PE → ATT");
        assert!(within(row.beta, 0.25, 0.35), "β {}", row.beta);
        assert!(within(row.t_value, 2.5, 5.5), "t {}", row.t_value);
        assert_eq!(row.p_value, "< 0.001");
        assert_eq!(row.significance_label(), "Yes");
        assert!(row.resolved);
    }
}

#[test]
fn test_non_significant_path_stays_small() {
    for seed in 0..25 {
        let spec = pe_att_spec(60, seed).with_path(Path::new("PE", "ATT", -0.8, false));
        let row = &report_for(&spec).paths[0];
        assert!(within(row.beta, 0.0, 0.15), "β {}", row.beta);
        assert!(within(row.t_value, 0.5, 2.0), "t {}", row.t_value);
        assert_eq!(row.p_value, "> 0.05");
        assert_eq!(row.significance_label(), "No");
    }
}

#[test]
fn test_unresolved_path_is_still_reported() {
    let spec = pe_att_spec(60, 3).with_path(Path::new("PE", "GHOST", 0.4, true));
    let report = report_for(&spec);
    assert_eq!(report.paths.len(), 1);
    assert!(!report.paths[0].resolved);
    assert!(report.notes.iter().any(|n| n.contains("PE → GHOST")));
}

#[test]
fn test_report_carries_caveat() {
    let report = report_for(&pe_att_spec(60, 3));
    assert_eq!(report.caveat, SIMULATED_CAVEAT);
    assert!(report.caveat.contains("not"));
    assert!(report.notes.is_empty());
}

#[test]
fn test_band_draw_uses_half_open_unit_interval() {
    let band = Band::new(2.0, 4.0);
    let mut rng = seeded_rng(12);
    for _ in 0..1000 {
        let v = band.draw(&mut rng);
        assert!(v >= 2.0 && v < 4.0);
        assert!(band.contains(v));
    }
}

#[test]
fn test_fit_entries_carry_criteria() {
    let fit = FitIndices {
        srmr: 0.04,
        nfi: 0.95,
        cfi: 0.97,
    };
    let entries = fit.entries();
    assert_eq!(entries[0], ("SRMR", 0.04, "< 0.08 = Good"));
    assert_eq!(entries[1].0, "NFI");
    assert_eq!(entries[2].2, "> 0.90 = Good");
}
