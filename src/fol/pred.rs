use std::fmt::Display;
use std::ops::Not;

use super::Term;

/// An atomic first-order sentence: a named predicate applied to a list of
/// terms, with an optional negation flag. The `!` operator flips the flag.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub struct Predicate {
    id: String,
    args: Vec<Term>,
    negated: bool,
}

impl Predicate {
    /// Creates a positive predicate.
    pub fn new(id: &str, args: Vec<Term>) -> Predicate {
        Predicate {
            id: id.to_owned(),
            args,
            negated: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn args(&self) -> &[Term] {
        &self.args
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether every argument is a constant.
    pub fn is_ground(&self) -> bool {
        self.args.iter().all(Term::is_const)
    }

    /// The same predicate with its arguments replaced.
    pub(crate) fn with_args(&self, args: Vec<Term>) -> Predicate {
        Predicate {
            id: self.id.clone(),
            args,
            negated: self.negated,
        }
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Self::Output {
        Predicate {
            negated: !self.negated,
            ..self
        }
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "!")?;
        }

        write!(f, "{}(", self.id)?;
        let mut first = true;

        for arg in &self.args {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }

            write!(f, "{arg}")?;
        }

        write!(f, ")")
    }
}
