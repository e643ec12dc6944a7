use crate::model::ModelSpec;
use serde::{Deserialize, Serialize};

/// Name of the respondent identifier column.
pub const ID_COLUMN: &str = "ID";

/// One respondent: a 1-based identifier and one Likert value per item column.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub id: usize,
    pub values: Vec<u8>,
}

/// The item columns belonging to one construct, as a range into `Response::values`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpan {
    pub construct: String,
    pub start: usize,
    pub len: usize,
}

/// The tabular output of a run: an `ID` column followed by every item column.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDataset {
    pub columns: Vec<String>,
    pub spans: Vec<ColumnSpan>,
    pub rows: Vec<Response>,
}

impl GeneratedDataset {
    /// Creates an empty dataset whose columns follow the construct-then-item order of `spec`.
    pub fn with_layout(spec: &ModelSpec) -> Self {
        let mut columns = Vec::with_capacity(spec.total_items() + 1);
        columns.push(ID_COLUMN.to_string());

        let mut spans = Vec::with_capacity(spec.constructs.len());
        let mut start = 0;
        for construct in &spec.constructs {
            columns.extend(construct.item_columns());
            spans.push(ColumnSpan {
                construct: construct.name.clone(),
                start,
                len: construct.items as usize,
            });
            start += construct.items as usize;
        }

        Self {
            columns,
            spans,
            rows: Vec::with_capacity(spec.sample_size),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns including `ID`.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn span(&self, construct: &str) -> Option<&ColumnSpan> {
        self.spans.iter().find(|s| s.construct == construct)
    }

    /// The item values of one construct, one slice per respondent.
    pub fn construct_items(&self, construct: &str) -> Option<Vec<&[u8]>> {
        let span = self.span(construct)?;
        Some(
            self.rows
                .iter()
                .map(|r| &r.values[span.start..span.start + span.len])
                .collect(),
        )
    }

    /// Every value of a single column, looked up by name. `ID` is included.
    pub fn column(&self, name: &str) -> Option<Vec<usize>> {
        let position = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .map(|r| match position {
                    0 => r.id,
                    p => r.values[p - 1] as usize,
                })
                .collect(),
        )
    }

    /// The first `n` respondents, for previews.
    pub fn head(&self, n: usize) -> &[Response] {
        &self.rows[..n.min(self.rows.len())]
    }
}
