use serde::{Deserialize, Serialize};

use super::ExpressionError;

/// Which snapshot of the fill values an expression reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    Old,
    Estimated,
    Default,
}

impl EvaluationMode {
    pub const OLD: u8 = 1;
    pub const ESTIMATED: u8 = 2;
    pub const DEFAULT: u8 = 3;

    /// Accessor prefix for field reads, `get{prefix}Value()`.
    pub fn field_prefix(self) -> &'static str {
        match self {
            EvaluationMode::Old => "Old",
            EvaluationMode::Estimated | EvaluationMode::Default => "",
        }
    }

    /// Accessor prefix for variable reads, `get{prefix}Value()`.
    pub fn variable_prefix(self) -> &'static str {
        match self {
            EvaluationMode::Old => "Old",
            EvaluationMode::Estimated => "Estimated",
            EvaluationMode::Default => "",
        }
    }

    /// Suffix of the generated `evaluate{suffix}(int id)` method.
    pub fn method_suffix(self) -> &'static str {
        self.variable_prefix()
    }
}

impl TryFrom<u8> for EvaluationMode {
    type Error = ExpressionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            EvaluationMode::OLD => Ok(EvaluationMode::Old),
            EvaluationMode::ESTIMATED => Ok(EvaluationMode::Estimated),
            EvaluationMode::DEFAULT => Ok(EvaluationMode::Default),
            other => Err(ExpressionError::UnknownEvaluationMode(other)),
        }
    }
}

impl From<EvaluationMode> for u8 {
    fn from(mode: EvaluationMode) -> u8 {
        match mode {
            EvaluationMode::Old => EvaluationMode::OLD,
            EvaluationMode::Estimated => EvaluationMode::ESTIMATED,
            EvaluationMode::Default => EvaluationMode::DEFAULT,
        }
    }
}
