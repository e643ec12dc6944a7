use crate::error::ConfigError;
use crate::model::ModelSpec;
use std::fmt::Write;

pub const TEMPLATE_FILE_NAME: &str = "survey_generator.py";

/// Builds a Python script that restates a run's configuration.
///
/// The script pins the seed, sample size and construct names, and embeds the full model
/// as JSON so the exact run can be reproduced with this library.
///
/// Every string is written as a JSON string literal, which Python parses unchanged.
pub fn python_template(spec: &ModelSpec) -> Result<String, ConfigError> {
    let names = to_literal(&spec.construct_names())?;
    let spec_json = to_literal(&spec.to_json()?)?;

    let mut script = String::new();
    writeln!(script, "import json").unwrap();
    writeln!(script, "import numpy as np").unwrap();
    writeln!(script, "import pandas as pd").unwrap();
    writeln!(script, "from scipy.stats import multivariate_normal").unwrap();
    writeln!(script).unwrap();
    writeln!(script, "np.random.seed({})", spec.seed).unwrap();
    writeln!(script).unwrap();
    writeln!(script, "# Configuration").unwrap();
    writeln!(script, "sample_size = {}", spec.sample_size).unwrap();
    writeln!(script, "constructs = {}", names).unwrap();
    writeln!(script).unwrap();
    writeln!(script, "# Full model definition used for this dataset").unwrap();
    writeln!(script, "MODEL_SPEC = json.loads({})", spec_json).unwrap();
    writeln!(script).unwrap();
    writeln!(script, "# Add your correlation matrix and generation logic here").unwrap();
    writeln!(script, "# This is a template based on your configuration").unwrap();
    Ok(script)
}

fn to_literal<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, ConfigError> {
    serde_json::to_string(value).map_err(|e| ConfigError::Json(e.to_string()))
}
