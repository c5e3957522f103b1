use std::collections::BTreeSet;
use std::fmt::{Debug, Display};

use super::{ClauseError, Formula, Lit};

/// A disjunctive clause: a finite set of literals read as their
/// disjunction.
///
/// The clause is represented by two sets of identifiers, one for the
/// literals that occur positively and one for those that occur negated.
/// In a well-formed clause the two sets are disjoint; a clause whose sets
/// intersect contains `P | !P` and is a tautology, which is rejected at
/// construction with [ClauseError::Tautology]. Equality and hashing follow
/// set equality of the literals.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct CnfClause {
    pos: BTreeSet<String>,
    neg: BTreeSet<String>,
}

impl CnfClause {
    /// Builds a clause from literals. Duplicate literals collapse; a
    /// literal appearing in both polarities makes the clause a tautology.
    pub fn new(lits: impl IntoIterator<Item = Lit>) -> Result<Self, ClauseError> {
        let mut pos = BTreeSet::new();
        let mut neg = BTreeSet::new();

        for lit in lits {
            if lit.is_positive() {
                pos.insert(lit.id().to_owned());
            } else {
                neg.insert(lit.id().to_owned());
            }
        }

        if !pos.is_disjoint(&neg) {
            return Err(ClauseError::Tautology);
        }

        Ok(Self { pos, neg })
    }

    pub fn contains(&self, lit: &Lit) -> bool {
        if lit.is_positive() {
            self.pos.contains(lit.id())
        } else {
            self.neg.contains(lit.id())
        }
    }

    /// Iterates the literals of this clause, positive ones first.
    pub fn lits(&self) -> impl Iterator<Item = Lit> + '_ {
        self.pos
            .iter()
            .map(|id| Lit::pos(id))
            .chain(self.neg.iter().map(|id| Lit::neg(id)))
    }

    /// The number of literals of this clause.
    pub fn len(&self) -> usize {
        self.pos.len() + self.neg.len()
    }

    /// Tests whether this is the empty clause, i.e. a contradiction.
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty() && self.neg.is_empty()
    }

    /// Tests whether every literal of this clause occurs in `other`. A
    /// clause subsumes every superset of itself: the superset is then
    /// redundant.
    pub fn is_subset(&self, other: &CnfClause) -> bool {
        self.pos.is_subset(&other.pos) && self.neg.is_subset(&other.neg)
    }

    /// Resolves this clause with `other` over the literal `pivot`, which
    /// must occur in one clause while its negation occurs in the other.
    /// The resolvent is the union of both clauses minus the pivot pair.
    /// Neither input is mutated.
    ///
    /// Fails with [ClauseError::MissingPivot] when either clause contains
    /// the pivot in no polarity, and with [ClauseError::Tautology] when the
    /// resolvent is a tautology.
    pub fn resolve(&self, other: &CnfClause, pivot: &Lit) -> Result<CnfClause, ClauseError> {
        let negated = !pivot.clone();

        if !self.contains(pivot) && !self.contains(&negated) {
            return Err(ClauseError::MissingPivot(pivot.clone()));
        }

        if !other.contains(pivot) && !other.contains(&negated) {
            return Err(ClauseError::MissingPivot(pivot.clone()));
        }

        let with_pivot = if self.contains(pivot) { self } else { other };
        let with_negated = if self.contains(&negated) { self } else { other };

        let lits = with_pivot
            .lits()
            .filter(|lit| lit != pivot)
            .chain(with_negated.lits().filter(|lit| *lit != negated));

        CnfClause::new(lits)
    }

    /// Creates the clause list of a formula in CNF, walking the `&`-spine
    /// and linearising each `|`-subtree into its literal set. The list
    /// keeps the order in which the clauses occur in the formula, and may
    /// contain equal clauses more than once. Tautological clauses
    /// contribute nothing to a CNF and are dropped.
    pub fn try_from_cnf_list(phi: &Formula) -> Result<Vec<CnfClause>, ClauseError> {
        let mut subtrees = Vec::new();
        conjuncts(phi, &mut subtrees);

        let mut clauses = Vec::new();

        for subtree in subtrees {
            let mut lits = Vec::new();
            disjuncts(subtree, &mut lits)?;

            match CnfClause::new(lits) {
                Ok(clause) => clauses.push(clause),
                Err(ClauseError::Tautology) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(clauses)
    }

    /// Creates the clause set of a formula in CNF. See
    /// [CnfClause::try_from_cnf_list].
    pub fn try_from_cnf(phi: &Formula) -> Result<BTreeSet<CnfClause>, ClauseError> {
        Ok(Self::try_from_cnf_list(phi)?.into_iter().collect())
    }

    /// Creates the clause set of a formula in CNF. The method will panic
    /// if the formula is not in CNF, see [to_cnf](super::to_cnf).
    pub fn from_cnf(phi: &Formula) -> BTreeSet<CnfClause> {
        Self::try_from_cnf(phi).unwrap()
    }

    /// Creates the clause list of a formula in CNF. The method will panic
    /// if the formula is not in CNF, see [to_cnf](super::to_cnf).
    pub fn from_cnf_list(phi: &Formula) -> Vec<CnfClause> {
        Self::try_from_cnf_list(phi).unwrap()
    }
}

/// Collects the `|`-subtrees hanging off the top-level `&`-spine.
fn conjuncts<'f>(phi: &'f Formula, out: &mut Vec<&'f Formula>) {
    match phi {
        Formula::And(lhs, rhs) => {
            conjuncts(lhs, out);
            conjuncts(rhs, out);
        }
        subtree => out.push(subtree),
    }
}

/// Collects the literals of a `|`-subtree. Any other connective below the
/// `&`-spine means the formula was not in CNF.
fn disjuncts(phi: &Formula, out: &mut Vec<Lit>) -> Result<(), ClauseError> {
    match phi {
        Formula::Lit(lit) => {
            out.push(lit.clone());
            Ok(())
        }
        Formula::Or(lhs, rhs) => {
            disjuncts(lhs, out)?;
            disjuncts(rhs, out)
        }
        _ => Err(ClauseError::NotCnf),
    }
}

impl Display for CnfClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        let mut first = true;

        for lit in self.lits() {
            if first {
                first = false;
            } else {
                write!(f, " | ")?;
            }

            write!(f, "{lit}")?;
        }

        write!(f, ")")
    }
}

impl Debug for CnfClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}
