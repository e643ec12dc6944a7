use crate::dataset::GeneratedDataset;
use crate::error::ExportError;
use crate::summary::SummaryReport;
use itertools::Itertools;
use std::fs;

/// The file name a dataset export uses by default, e.g. `survey_data_n926.csv`.
pub fn default_file_name(sample_size: usize) -> String {
    format!("survey_data_n{}.csv", sample_size)
}

/// Renders the dataset as comma-separated text: a header row, then one row per respondent.
pub fn dataset_to_csv(dataset: &GeneratedDataset) -> String {
    let mut out = String::with_capacity((dataset.len() + 1) * dataset.column_count() * 2);
    out.push_str(&dataset.columns.iter().map(|c| escape_field(c)).join(","));
    out.push('\n');
    for row in &dataset.rows {
        out.push_str(&row.id.to_string());
        for value in &row.values {
            out.push(',');
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }
    out
}

pub fn write_dataset_csv(dataset: &GeneratedDataset, path: &str) -> Result<(), ExportError> {
    write_text(path, &dataset_to_csv(dataset))
}

/// The descriptive table as CSV, with full precision.
pub fn descriptive_to_csv(report: &SummaryReport) -> String {
    let mut out = String::from("Construct,Mean,SD,Skewness,Kurtosis,Cronbach's α,Avg Loading\n");
    for row in &report.descriptive {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            escape_field(&row.construct),
            row.mean,
            row.sd,
            row.skewness,
            row.kurtosis,
            row.reliability,
            row.avg_loading
        ));
    }
    push_caveat(&mut out, report);
    out
}

/// The path table as CSV, with full precision.
pub fn paths_to_csv(report: &SummaryReport) -> String {
    let mut out = String::from("Path,β Coefficient,t-value,p-value,Significant\n");
    for row in &report.paths {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            escape_field(&row.path),
            row.beta,
            row.t_value,
            escape_field(&row.p_value),
            row.significance_label()
        ));
    }
    push_caveat(&mut out, report);
    out
}

pub fn fit_to_csv(report: &SummaryReport) -> String {
    let fit = &report.fit;
    let mut out = format!("SRMR,NFI,CFI\n{},{},{}\n", fit.srmr, fit.nfi, fit.cfi);
    push_caveat(&mut out, report);
    out
}

/// Every summary table ends with a `Note` row carrying the report's caveat.
fn push_caveat(out: &mut String, report: &SummaryReport) {
    out.push_str("Note,");
    out.push_str(&escape_field(&report.caveat));
    out.push('\n');
}

/// Quotes a field when it contains a delimiter, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub(crate) fn write_text(path: &str, content: &str) -> Result<(), ExportError> {
    fs::write(path, content).map_err(|source| ExportError::Io {
        path: path.to_string(),
        source,
    })
}
