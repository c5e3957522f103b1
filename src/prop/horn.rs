use std::collections::{BTreeSet, VecDeque};
use std::fmt::Display;

use crate::log::targets;

use super::{ClauseError, Lit};

/// A definite propositional clause: a conjunction of antecedent literals
/// implying a consequent literal. All antecedents must share one polarity;
/// mixed antecedents are rejected with [ClauseError::MixedAntecedents].
///
/// The antecedents are kept sorted, so equality and ordering do not depend
/// on the order they were given in.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub struct HornClause {
    antecedents: Vec<Lit>,
    consequent: Lit,
}

impl HornClause {
    pub fn new(antecedents: Vec<Lit>, consequent: Lit) -> Result<Self, ClauseError> {
        if let Some(first) = antecedents.first() {
            let polarity = first.is_positive();

            if antecedents.iter().any(|lit| lit.is_positive() != polarity) {
                return Err(ClauseError::MixedAntecedents);
            }
        }

        let mut antecedents = antecedents;
        antecedents.sort();

        Ok(Self {
            antecedents,
            consequent,
        })
    }

    /// A clause with no antecedents: an atomic fact.
    pub fn fact(consequent: Lit) -> Self {
        Self {
            antecedents: Vec::new(),
            consequent,
        }
    }

    pub fn antecedents(&self) -> &[Lit] {
        &self.antecedents
    }

    pub fn consequent(&self) -> &Lit {
        &self.consequent
    }

    pub fn is_fact(&self) -> bool {
        self.antecedents.is_empty()
    }
}

impl Display for HornClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;

        for lit in &self.antecedents {
            if first {
                first = false;
            } else {
                write!(f, " ^ ")?;
            }

            write!(f, "{lit}")?;
        }

        if !first {
            write!(f, " -> ")?;
        }

        write!(f, "{}", self.consequent)
    }
}

/// Decides whether a Horn knowledge base entails the literal `q` by
/// forward chaining: atomic facts seed an agenda, and a clause fires as
/// soon as all of its antecedents have been popped off the agenda. Runs in
/// time linear in the total size of the knowledge base.
pub fn pl_fc_entails(kb: &BTreeSet<HornClause>, q: &Lit) -> bool {
    let clauses: Vec<&HornClause> = kb.iter().collect();

    // How many antecedents of each clause are still unsatisfied.
    let mut count: Vec<usize> = clauses
        .iter()
        .map(|clause| clause.antecedents().len())
        .collect();

    let mut agenda: VecDeque<Lit> = clauses
        .iter()
        .filter(|clause| clause.is_fact())
        .map(|clause| clause.consequent().clone())
        .collect();

    let mut inferred = BTreeSet::new();

    while let Some(p) = agenda.pop_front() {
        if p == *q {
            return true;
        }

        if !inferred.insert(p.clone()) {
            continue;
        }

        for (i, clause) in clauses.iter().enumerate() {
            let occurrences = clause
                .antecedents()
                .iter()
                .filter(|lit| **lit == p)
                .count();

            if occurrences == 0 {
                continue;
            }

            count[i] = count[i].saturating_sub(occurrences);

            if count[i] == 0 {
                log::trace!(target: targets::FORWARD, "fired {clause}");
                agenda.push_back(clause.consequent().clone());
            }
        }
    }

    false
}
