use std::fmt::Display;
use std::mem::replace;
use std::ops::BitAnd;
use std::ops::BitAndAssign;
use std::ops::BitOr;
use std::ops::BitOrAssign;
use std::ops::Not;

/// A propositional literal: an identifier together with a polarity. Two
/// literals are equal if and only if both their identifier and their
/// polarity match. Negating a literal flips its polarity and nothing else.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub struct Lit {
    id: String,
    positive: bool,
}

impl Lit {
    pub fn new(id: &str, positive: bool) -> Lit {
        Lit {
            id: id.to_owned(),
            positive,
        }
    }

    /// Creates a positive literal.
    pub fn pos(id: &str) -> Lit {
        Lit::new(id, true)
    }

    /// Creates a negated literal.
    pub fn neg(id: &str) -> Lit {
        Lit::new(id, false)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }
}

impl Not for Lit {
    type Output = Lit;

    fn not(self) -> Self::Output {
        Lit {
            positive: !self.positive,
            ..self
        }
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.positive {
            write!(f, "!")?;
        }

        write!(f, "{}", self.id)
    }
}

/// A propositional formula, one of a literal leaf and four binary
/// connectives. There is no negation variant: negation is structural.
/// The `!` operator flips the polarity of a literal, and rewrites each
/// connective by De Morgan's laws and the implication laws, so a negated
/// formula is again built from the same five shapes.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub enum Formula {
    /// A literal. The leaves of a formula tree.
    Lit(Lit),

    /// A conjunction of two subformulas, true if and only if both of its
    /// subformulas are true. The subformulas are boxed to satisfy Rust's
    /// memory requirements.
    And(Box<Formula>, Box<Formula>),

    /// A disjunction of two subformulas, true if and only if at least one
    /// of its subformulas is true.
    Or(Box<Formula>, Box<Formula>),

    /// A material implication.
    Cond(Box<Formula>, Box<Formula>),

    /// A biconditional.
    Bicond(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// A positive literal formula.
    pub fn var(id: &str) -> Formula {
        Formula::Lit(Lit::pos(id))
    }

    pub fn lit(lit: Lit) -> Formula {
        Formula::Lit(lit)
    }

    pub fn and(lhs: Formula, rhs: Formula) -> Formula {
        lhs & rhs
    }

    pub fn or(lhs: Formula, rhs: Formula) -> Formula {
        lhs | rhs
    }

    pub fn cond(lhs: Formula, rhs: Formula) -> Formula {
        Formula::Cond(Box::new(lhs), Box::new(rhs))
    }

    pub fn bicond(lhs: Formula, rhs: Formula) -> Formula {
        Formula::Bicond(Box::new(lhs), Box::new(rhs))
    }
}

impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Self) -> Self::Output {
        Formula::And(Box::new(self), Box::new(rhs))
    }
}

impl BitAndAssign for Formula {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = replace(self, Formula::var("")) & rhs;
    }
}

impl BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Self) -> Self::Output {
        Formula::Or(Box::new(self), Box::new(rhs))
    }
}

impl BitOrAssign for Formula {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = replace(self, Formula::var("")) | rhs;
    }
}

impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Self::Output {
        match self {
            Formula::Lit(lit) => Formula::Lit(!lit),
            Formula::And(lhs, rhs) => !*lhs | !*rhs,
            Formula::Or(lhs, rhs) => !*lhs & !*rhs,
            Formula::Cond(lhs, rhs) => *lhs & !*rhs,
            Formula::Bicond(lhs, rhs) => {
                let (p, q) = (*lhs, *rhs);
                (p.clone() & !q.clone()) | (q & !p)
            }
        }
    }
}

impl From<Lit> for Formula {
    fn from(value: Lit) -> Self {
        Formula::Lit(value)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Lit(lit) => write!(f, "{lit}"),
            Formula::And(lhs, rhs) => write!(f, "({lhs} & {rhs})"),
            Formula::Or(lhs, rhs) => write!(f, "({lhs} | {rhs})"),
            Formula::Cond(lhs, rhs) => write!(f, "({lhs} -> {rhs})"),
            Formula::Bicond(lhs, rhs) => write!(f, "({lhs} <-> {rhs})"),
        }
    }
}
