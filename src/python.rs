use crate::export::{csv, template};
use crate::model::ModelSpec;
use crate::sampler::NonPsdPolicy;
use crate::synthesizer::{GenerationOutput, Synthesizer};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

fn value_error(message: String) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(message)
}

fn runtime_error(message: String) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(message)
}

/// Converts a finished run into a plain Python dictionary of tables.
fn output_to_dict<'py>(
    py: Python<'py>,
    output: &GenerationOutput,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("columns", output.dataset.columns.clone())?;

    let rows = PyList::empty(py);
    for row in &output.dataset.rows {
        let mut cells: Vec<usize> = Vec::with_capacity(row.values.len() + 1);
        cells.push(row.id);
        cells.extend(row.values.iter().map(|&v| v as usize));
        rows.append(cells)?;
    }
    dict.set_item("rows", rows)?;
    dict.set_item("csv", csv::dataset_to_csv(&output.dataset))?;

    let descriptive = PyList::empty(py);
    for d in &output.report.descriptive {
        let entry = PyDict::new(py);
        entry.set_item("Construct", d.construct.as_str())?;
        entry.set_item("Mean", d.mean)?;
        entry.set_item("SD", d.sd)?;
        entry.set_item("Skewness", d.skewness)?;
        entry.set_item("Kurtosis", d.kurtosis)?;
        entry.set_item("Cronbach's α", d.reliability)?;
        entry.set_item("Avg Loading", d.avg_loading)?;
        descriptive.append(entry)?;
    }
    dict.set_item("descriptive", descriptive)?;

    let paths = PyList::empty(py);
    for p in &output.report.paths {
        let entry = PyDict::new(py);
        entry.set_item("Path", p.path.as_str())?;
        entry.set_item("β Coefficient", p.beta)?;
        entry.set_item("t-value", p.t_value)?;
        entry.set_item("p-value", p.p_value.as_str())?;
        entry.set_item("Significant", p.significance_label())?;
        paths.append(entry)?;
    }
    dict.set_item("paths", paths)?;

    let fit = PyDict::new(py);
    fit.set_item("SRMR", output.report.fit.srmr)?;
    fit.set_item("NFI", output.report.fit.nfi)?;
    fit.set_item("CFI", output.report.fit.cfi)?;
    dict.set_item("fit", fit)?;

    dict.set_item("caveat", output.report.caveat.as_str())?;
    dict.set_item("notes", output.report.notes.clone())?;
    let script =
        template::python_template(&output.spec).map_err(|e| value_error(e.to_string()))?;
    dict.set_item("template", script)?;

    Ok(dict)
}

/// A seeded generator for synthetic Likert survey datasets.
///
/// The model is parsed and validated once on construction; `generate` can then be
/// called repeatedly and always returns the same tables for the same seed.
#[pyclass(name = "LikertSynth")]
struct LikertSynthPy {
    synthesizer: Synthesizer,
}

#[pymethods]
impl LikertSynthPy {
    /// Parses and validates a model definition.
    ///
    /// Args:
    ///     spec_json (str): JSON with `constructs`, `paths`, optional `moderations` /
    ///         `mediations`, `sample_size` and `seed`.
    ///     repair (bool): Substitute the nearest valid correlation matrix instead of
    ///         failing when the configured paths conflict. Defaults to False.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed or the model is invalid.
    #[new]
    #[pyo3(signature = (spec_json, repair = false))]
    fn new(spec_json: &str, repair: bool) -> PyResult<Self> {
        let spec = ModelSpec::from_json(spec_json).map_err(|e| value_error(e.to_string()))?;
        spec.validate().map_err(|e| value_error(e.to_string()))?;

        let policy = if repair {
            NonPsdPolicy::Repair
        } else {
            NonPsdPolicy::Reject
        };
        let synthesizer = Synthesizer::builder(spec).with_non_psd_policy(policy).build();
        Ok(LikertSynthPy { synthesizer })
    }

    /// Generates the dataset and its summary tables.
    ///
    /// Returns:
    ///     dict: `columns`, `rows`, `csv`, `descriptive`, `paths`, `fit`, `caveat`,
    ///         `notes` and a reproducibility `template` script.
    ///
    /// Raises:
    ///     RuntimeError: If the covariance matrix cannot be sampled from.
    fn generate<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let output = self
            .synthesizer
            .synthesize()
            .map_err(|e| runtime_error(e.to_string()))?;
        output_to_dict(py, &output)
    }
}

/// Synthetic Likert survey data generation.
///
/// Python bindings to the likert-synth Rust library. Reliability, path and fit statistics
/// in the returned tables are simulated placeholders, not estimates.
#[pymodule]
fn likert_synth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<LikertSynthPy>()?;
    Ok(())
}
