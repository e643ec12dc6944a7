use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed, coefficient-weighted effect of one construct on another.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Path {
    pub from: String,
    pub to: String,
    pub coefficient: f64,
    #[serde(default = "default_significant")]
    pub significant: bool,
}

fn default_significant() -> bool {
    true
}

impl Path {
    pub fn new(from: &str, to: &str, coefficient: f64, significant: bool) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            coefficient,
            significant,
        }
    }

    /// The path a form adds by default: a significant 0.3 effect.
    pub fn with_default_effect(from: &str, to: &str) -> Self {
        Self::new(from, to, 0.3, true)
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// A moderation effect recorded with the model.
///
/// Moderations are carried as metadata only. They are checked for dangling references
/// but never change the correlation structure, the sampled items or the summary tables.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Moderation {
    pub moderator: String,
    pub iv: String,
    pub dv: String,
    #[serde(default = "default_moderation_effect")]
    pub effect: f64,
}

fn default_moderation_effect() -> f64 {
    0.1
}

impl Moderation {
    pub fn new(moderator: &str, iv: &str, dv: &str) -> Self {
        Self {
            moderator: moderator.to_string(),
            iv: iv.to_string(),
            dv: dv.to_string(),
            effect: default_moderation_effect(),
        }
    }
}

impl fmt::Display for Moderation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} moderates {} → {} (β={})",
            self.moderator, self.iv, self.dv, self.effect
        )
    }
}

/// A mediation effect recorded with the model. Inert, like [`Moderation`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mediation {
    pub mediator: String,
    pub iv: String,
    pub dv: String,
    #[serde(default = "default_indirect_effect")]
    pub indirect: f64,
}

fn default_indirect_effect() -> f64 {
    0.15
}

impl Mediation {
    pub fn new(mediator: &str, iv: &str, dv: &str) -> Self {
        Self {
            mediator: mediator.to_string(),
            iv: iv.to_string(),
            dv: dv.to_string(),
            indirect: default_indirect_effect(),
        }
    }
}

impl fmt::Display for Mediation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} → {} (indirect={})",
            self.iv, self.mediator, self.dv, self.indirect
        )
    }
}
