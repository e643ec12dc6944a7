use super::spec::ModelSpec;
use crate::error::SpecConversionError;

/// A trait for form or UI state that can be turned into a `ModelSpec`.
///
/// This keeps the generator independent of how constructs and paths are collected.
/// Implement it on your own state structs and hand the result to the synthesizer.
///
/// # Example
///
/// ```rust,no_run
/// use likert_synth::prelude::*;
/// use likert_synth::error::SpecConversionError;
///
/// struct FormRow { label: String, item_count: u8 }
/// struct SurveyForm { rows: Vec<FormRow>, respondents: usize }
///
/// impl IntoModelSpec for SurveyForm {
///     fn into_model_spec(self) -> std::result::Result<ModelSpec, SpecConversionError> {
///         if self.rows.is_empty() {
///             return Err(SpecConversionError::ValidationError("form has no rows".into()));
///         }
///         let constructs = self
///             .rows
///             .into_iter()
///             .map(|r| Construct::new(&r.label, r.item_count, 3.0, 0.5, Role::IV))
///             .collect();
///         Ok(ModelSpec::new(constructs, self.respondents, 2025))
///     }
/// }
/// ```
pub trait IntoModelSpec {
    /// Consumes the object and converts it into a model the synthesizer can run.
    fn into_model_spec(self) -> Result<ModelSpec, SpecConversionError>;
}

impl IntoModelSpec for ModelSpec {
    fn into_model_spec(self) -> Result<ModelSpec, SpecConversionError> {
        Ok(self)
    }
}
