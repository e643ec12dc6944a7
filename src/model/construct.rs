use serde::{Deserialize, Serialize};
use std::fmt;

/// Fewest Likert items a construct may be measured with.
pub const MIN_ITEMS: u8 = 3;
/// Most Likert items a construct may be measured with.
pub const MAX_ITEMS: u8 = 10;
/// Bounds of a construct's latent mean, on the 1..=5 response scale.
pub const MEAN_RANGE: (f64, f64) = (1.0, 5.0);
/// Bounds of a construct's latent standard deviation.
pub const SD_RANGE: (f64, f64) = (0.1, 2.0);

/// The structural role a construct plays in the researcher's model.
///
/// Roles are descriptive only; the generator treats every construct the same way.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    IV,
    DV,
    Mediator,
    Moderator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::IV => write!(f, "IV"),
            Role::DV => write!(f, "DV"),
            Role::Mediator => write!(f, "Mediator"),
            Role::Moderator => write!(f, "Moderator"),
        }
    }
}

/// A latent variable measured by several observed Likert items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Construct {
    pub name: String,
    pub items: u8,
    pub mean: f64,
    pub sd: f64,
    #[serde(default)]
    pub role: Role,
}

impl Construct {
    pub fn new(name: &str, items: u8, mean: f64, sd: f64, role: Role) -> Self {
        Self {
            name: name.to_string(),
            items,
            mean,
            sd,
            role,
        }
    }

    /// The construct a form adds when the user asks for a new variable, numbered `n`.
    pub fn placeholder(n: usize) -> Self {
        Self::new(&format!("VAR{}", n), 4, 3.0, 0.5, Role::IV)
    }

    /// Names of the observed item columns, e.g. `PE1, PE2, PE3`.
    pub fn item_columns(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.items).map(move |k| format!("{}{}", self.name, k))
    }
}
