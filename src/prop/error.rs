use std::error::Error;
use std::fmt::Display;

use super::Lit;

/// Errors from clause construction, CNF flattening and resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseError {
    Tautology,         // The clause contains a literal and its negation
    NotCnf,            // The formula being flattened is not in CNF shape
    MissingPivot(Lit), // The resolution pivot is absent from an operand
    MixedAntecedents,  // The antecedents of a horn clause disagree in polarity
}

impl Display for ClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClauseError::Tautology => {
                write!(f, "clause is always true")
            }
            ClauseError::NotCnf => {
                write!(f, "formula is not in conjunctive normal form")
            }
            ClauseError::MissingPivot(lit) => {
                write!(f, "literal {lit} does not occur in the clause")
            }
            ClauseError::MixedAntecedents => {
                write!(f, "antecedents of a horn clause must share one polarity")
            }
        }
    }
}

impl Error for ClauseError {}
