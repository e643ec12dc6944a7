use crate::dataset::GeneratedDataset;
use crate::summary::SummaryReport;
use std::fmt::Write;

/// Rows shown by a dataset preview unless the caller asks for another count.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Formats a header and rows as a left-aligned, pipe-separated text table.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut output = String::new();
    push_row(&mut output, headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut output, &rule, &widths);
    for row in rows {
        push_row(&mut output, row, &widths);
    }
    output
}

fn push_row(output: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = w))
        .collect();
    writeln!(output, "| {} |", padded.join(" | ")).unwrap();
}

/// The first `rows` respondents of a dataset.
pub fn render_dataset_preview(dataset: &GeneratedDataset, rows: usize) -> String {
    let body: Vec<Vec<String>> = dataset
        .head(rows)
        .iter()
        .map(|r| {
            std::iter::once(r.id.to_string())
                .chain(r.values.iter().map(|v| v.to_string()))
                .collect()
        })
        .collect();
    render_table(&dataset.columns, &body)
}

pub fn render_descriptive(report: &SummaryReport) -> String {
    let headers = [
        "Construct",
        "Mean",
        "SD",
        "Skewness",
        "Kurtosis",
        "Cronbach's α",
        "Avg Loading",
    ]
    .map(String::from);
    let rows: Vec<Vec<String>> = report
        .descriptive
        .iter()
        .map(|d| {
            vec![
                d.construct.clone(),
                format!("{:.3}", d.mean),
                format!("{:.3}", d.sd),
                format!("{:.3}", d.skewness),
                format!("{:.3}", d.kurtosis),
                format!("{:.3}", d.reliability),
                format!("{:.3}", d.avg_loading),
            ]
        })
        .collect();
    render_table(&headers, &rows)
}

pub fn render_paths(report: &SummaryReport) -> String {
    let headers = ["Path", "β Coefficient", "t-value", "p-value", "Significant"].map(String::from);
    let rows: Vec<Vec<String>> = report
        .paths
        .iter()
        .map(|p| {
            vec![
                p.path.clone(),
                format!("{:.3}", p.beta),
                format!("{:.3}", p.t_value),
                p.p_value.clone(),
                p.significance_label().to_string(),
            ]
        })
        .collect();
    render_table(&headers, &rows)
}

pub fn render_fit(report: &SummaryReport) -> String {
    let headers = ["Index", "Value", "Criterion"].map(String::from);
    let rows: Vec<Vec<String>> = report
        .fit
        .entries()
        .iter()
        .map(|(name, value, criterion)| {
            vec![name.to_string(), format!("{:.3}", value), criterion.to_string()]
        })
        .collect();
    render_table(&headers, &rows)
}

/// All three tables with headings, followed by the caveat and any run notes.
pub fn render_report(report: &SummaryReport) -> String {
    let mut output = String::new();
    writeln!(output, "--- Descriptive Statistics ---").unwrap();
    output.push_str(&render_descriptive(report));

    if !report.paths.is_empty() {
        writeln!(output, "\n--- Path Analysis Results ---").unwrap();
        output.push_str(&render_paths(report));
    }

    writeln!(output, "\n--- Model Fit Indices ---").unwrap();
    output.push_str(&render_fit(report));

    writeln!(output, "\nNote: {}", report.caveat).unwrap();
    for note in &report.notes {
        writeln!(output, "  * {}", note).unwrap();
    }
    output
}
