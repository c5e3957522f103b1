use std::fmt::Display;

use super::{FolError, Predicate};

/// The conclusion of a first-order Horn clause.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub enum Consequent {
    /// The clause asserts its single antecedent (the ground-fact form).
    True,

    /// The clause has no positive conclusion.
    False,

    /// The clause concludes a predicate.
    Pred(Predicate),
}

impl From<bool> for Consequent {
    fn from(value: bool) -> Self {
        match value {
            true => Consequent::True,
            false => Consequent::False,
        }
    }
}

impl From<Predicate> for Consequent {
    fn from(value: Predicate) -> Self {
        Consequent::Pred(value)
    }
}

/// A first-order definite clause: a conjunction of antecedent predicates
/// implying a [Consequent]. Antecedents must not be negated; they are kept
/// sorted, so equality does not depend on the order they were given in.
///
/// A clause is stored in one of three shapes:
/// - `[..] -> Pred`: a rule, or with no antecedents a ground fact,
/// - `[p] -> True`: a ground fact asserting its antecedent,
/// - `[..] -> False`: a clause without a positive conclusion.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub struct HornClauseFol {
    antecedents: Vec<Predicate>,
    consequent: Consequent,
}

impl HornClauseFol {
    /// Builds a clause from antecedents and an optional consequent,
    /// normalising as follows:
    /// - a negated antecedent fails with [FolError::NegatedAntecedent];
    /// - one antecedent and no consequent is a ground fact: the consequent
    ///   becomes [Consequent::True] and the antecedent is the asserted
    ///   predicate;
    /// - a negated consequent becomes [Consequent::False] and its positive
    ///   form joins the antecedents;
    /// - no consequent (other than the fact case above) means
    ///   [Consequent::False];
    /// - anything else is stored as supplied.
    pub fn new(
        antecedents: Vec<Predicate>,
        consequent: Option<Consequent>,
    ) -> Result<Self, FolError> {
        if antecedents.iter().any(Predicate::is_negated) {
            return Err(FolError::NegatedAntecedent);
        }

        let mut antecedents = antecedents;

        let consequent = match consequent {
            None if antecedents.len() == 1 => Consequent::True,
            None => Consequent::False,
            Some(Consequent::Pred(pred)) if pred.is_negated() => {
                antecedents.push(!pred);
                Consequent::False
            }
            Some(consequent) => consequent,
        };

        antecedents.sort();

        Ok(Self {
            antecedents,
            consequent,
        })
    }

    /// A ground fact asserting `pred`.
    pub fn fact(pred: Predicate) -> Result<Self, FolError> {
        Self::new(Vec::new(), Some(pred.into()))
    }

    /// A rule concluding `consequent` from `antecedents`.
    pub fn rule(antecedents: Vec<Predicate>, consequent: Predicate) -> Result<Self, FolError> {
        Self::new(antecedents, Some(consequent.into()))
    }

    /// Rebuilds a clause from already-validated parts.
    pub(crate) fn from_parts(mut antecedents: Vec<Predicate>, consequent: Consequent) -> Self {
        antecedents.sort();

        Self {
            antecedents,
            consequent,
        }
    }

    pub fn antecedents(&self) -> &[Predicate] {
        &self.antecedents
    }

    pub fn consequent(&self) -> &Consequent {
        &self.consequent
    }

    /// The predicate this clause asserts or concludes, if any: the
    /// consequent predicate, or for the `[p] -> True` ground-fact form the
    /// asserted antecedent.
    pub fn head(&self) -> Option<&Predicate> {
        match &self.consequent {
            Consequent::Pred(pred) => Some(pred),
            Consequent::True => self.antecedents.first(),
            Consequent::False => None,
        }
    }

    /// The subgoals that must hold for the [head][HornClauseFol::head]:
    /// empty for ground facts.
    pub fn body(&self) -> &[Predicate] {
        match &self.consequent {
            Consequent::True => &[],
            _ => &self.antecedents,
        }
    }

    /// Whether the clause is a ground fact, in either stored form.
    pub fn is_fact(&self) -> bool {
        match &self.consequent {
            Consequent::True => true,
            Consequent::Pred(_) => self.antecedents.is_empty(),
            Consequent::False => false,
        }
    }
}

impl Display for HornClauseFol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(head) = self.head() {
            if self.body().is_empty() {
                return write!(f, "{head}");
            }
        }

        let mut first = true;

        for pred in &self.antecedents {
            if first {
                first = false;
            } else {
                write!(f, " ^ ")?;
            }

            write!(f, "{pred}")?;
        }

        if !first {
            write!(f, " ")?;
        }

        match &self.consequent {
            Consequent::True => write!(f, "-> true"),
            Consequent::False => write!(f, "-> false"),
            Consequent::Pred(pred) => write!(f, "-> {pred}"),
        }
    }
}
