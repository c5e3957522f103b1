use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::log::targets;

use super::{CnfClause, Formula, Lit, to_cnf};

type RcClauses = BTreeSet<Rc<CnfClause>>;

/// A knowledge base for resolution: a deduplicated set of CNF clauses.
#[derive(Debug, Clone, Default)]
pub struct ResolutionKb {
    clauses: BTreeSet<CnfClause>,
}

impl ResolutionKb {
    /// Instantiates a new [ResolutionKb] with no clauses.
    pub fn new() -> Self {
        Self {
            clauses: BTreeSet::new(),
        }
    }

    /// Borrows the clause set of this knowledge base.
    pub fn clauses(&self) -> &BTreeSet<CnfClause> {
        &self.clauses
    }

    pub fn add(&mut self, clause: CnfClause) {
        self.clauses.insert(clause);
    }

    pub fn add_all(&mut self, clauses: impl IntoIterator<Item = CnfClause>) {
        self.clauses.extend(clauses);
    }

    /// Converts a formula to CNF and stores its clauses.
    pub fn add_formula(&mut self, phi: Formula) {
        self.add_all(CnfClause::from_cnf(&to_cnf(phi)));
    }

    /// Tests whether this knowledge base entails `alpha`, by
    /// [refutation][pl_resolution].
    pub fn query(&self, alpha: &Formula) -> bool {
        pl_resolution(self, alpha, 1000)
    }
}

// An index that stores clauses by the identifiers they use, split by
// polarity. E.g. the clause `P | Q | !R` is stored under `P` and `Q` in
// `by_pos` and under `R` in `by_neg`. Two clauses can only resolve when
// one is indexed under some identifier in `by_pos` and the other under the
// same identifier in `by_neg`, which cuts the candidate pairs down from
// all pairs of clauses.
//
// Counted references, so a clause can be referred to from several places
// in the index.
struct ClauseIndex {
    by_pos: BTreeMap<String, RcClauses>,
    by_neg: BTreeMap<String, RcClauses>,
}

impl ClauseIndex {
    fn new() -> Self {
        Self {
            by_pos: BTreeMap::new(),
            by_neg: BTreeMap::new(),
        }
    }

    fn learn(&mut self, clause: Rc<CnfClause>) {
        for lit in clause.lits() {
            let map = if lit.is_positive() {
                &mut self.by_pos
            } else {
                &mut self.by_neg
            };

            let entry = map.entry(lit.id().to_owned()).or_insert(RcClauses::new());

            entry.insert(clause.clone());
        }
    }

    /// The clauses containing the complement of `lit`.
    fn complements(&self, lit: &Lit) -> impl Iterator<Item = &Rc<CnfClause>> {
        let map = if lit.is_positive() {
            &self.by_neg
        } else {
            &self.by_pos
        };

        map.get(lit.id()).into_iter().flatten()
    }
}

/// Decides whether `kb` entails `alpha` by refutation: the clauses of
/// `!alpha` are resolved against the knowledge base until the empty clause
/// appears (entailed), until a pass derives nothing new (not entailed), or
/// until `maxit` passes have run (treated as not entailed).
///
/// Resolvents that are tautologies are discarded, and a resolvent that
/// some known clause subsumes is redundant and discarded as well. The
/// subsumption check is what keeps the clause set from growing without
/// bound on satisfiable queries.
pub fn pl_resolution(kb: &ResolutionKb, alpha: &Formula, maxit: usize) -> bool {
    let negated = to_cnf(!alpha.clone());

    let mut interesting: Vec<Rc<CnfClause>> = CnfClause::from_cnf(&negated)
        .into_iter()
        .map(Rc::new)
        .collect();

    let mut index = ClauseIndex::new();

    for clause in kb.clauses() {
        index.learn(Rc::new(clause.clone()));
    }

    for clause in &interesting {
        index.learn(clause.clone());
    }

    for it in 0..maxit {
        let mut fresh = BTreeSet::new();

        for ci in &interesting {
            for lit in ci.lits() {
                for cj in index.complements(&lit) {
                    let resolvent = match ci.resolve(cj, &lit) {
                        Ok(resolvent) => resolvent,
                        Err(_) => continue, // tautologies contribute nothing
                    };

                    if resolvent.is_empty() {
                        log::debug!(
                            target: targets::RESOLUTION,
                            "refutation: empty clause from {ci} and {cj}"
                        );
                        return true;
                    }

                    fresh.insert(resolvent);
                }
            }
        }

        let mut grew = false;

        for clause in fresh {
            // A clause that a known clause is a subset of is redundant.
            if interesting.iter().any(|known| known.is_subset(&clause)) {
                continue;
            }

            if kb.clauses().iter().any(|known| known.is_subset(&clause)) {
                continue;
            }

            log::trace!(target: targets::RESOLUTION, "keeping {clause}");

            let clause = Rc::new(clause);
            index.learn(clause.clone());
            interesting.push(clause);
            grew = true;
        }

        if !grew {
            log::debug!(target: targets::RESOLUTION, "closure reached after {it} passes");
            return false;
        }
    }

    // Negation as failure (exhausted!)
    false
}
