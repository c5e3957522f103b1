use std::collections::{BTreeMap, BTreeSet};

use crate::log::targets;

use super::{CnfClause, Formula, Lit, to_cnf};

/// A partial assignment of truth values to identifiers. An identifier
/// absent from the model is unassigned.
type Model = BTreeMap<String, bool>;

/// A knowledge base for the DPLL solver. Unlike the resolution knowledge
/// base this one keeps its clauses in insertion order, duplicates
/// included; the solver conjoins all members and its heuristics scan them
/// deterministically.
#[derive(Debug, Clone, Default)]
pub struct DpllKb {
    clauses: Vec<CnfClause>,
}

impl DpllKb {
    /// Instantiates a new [DpllKb] with no clauses.
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Borrows the clause list of this knowledge base.
    pub fn clauses(&self) -> &[CnfClause] {
        &self.clauses
    }

    pub fn add(&mut self, clause: CnfClause) {
        self.clauses.push(clause);
    }

    pub fn add_all(&mut self, clauses: impl IntoIterator<Item = CnfClause>) {
        self.clauses.extend(clauses);
    }

    /// Converts a formula to CNF and appends its clauses.
    pub fn add_formula(&mut self, phi: Formula) {
        self.add_all(CnfClause::from_cnf_list(&to_cnf(phi)));
    }

    /// Tests whether the knowledge base conjoined with `alpha` is
    /// satisfiable. Note that this asks for consistency, not entailment;
    /// see [DpllKb::entails].
    pub fn query(&self, alpha: &Formula) -> bool {
        let mut clauses = self.clauses.clone();
        clauses.extend(CnfClause::from_cnf_list(&to_cnf(alpha.clone())));

        let symbols = symbols_of(&clauses);
        dpll(&clauses, &symbols, &Model::new(), &BTreeSet::new())
    }

    /// Tests whether the knowledge base entails `alpha`, i.e. whether the
    /// knowledge base conjoined with `!alpha` is unsatisfiable.
    pub fn entails(&self, alpha: &Formula) -> bool {
        let mut clauses = self.clauses.clone();
        clauses.extend(CnfClause::from_cnf_list(&to_cnf(!alpha.clone())));

        let symbols = symbols_of(&clauses);
        !dpll(&clauses, &symbols, &Model::new(), &BTreeSet::new())
    }
}

/// Tests the satisfiability of an arbitrary formula with the DPLL
/// procedure: unit propagation, pure-literal elimination and splitting.
pub fn dpll_satisfiable(phi: Formula) -> bool {
    let cnf = to_cnf(phi);
    let clauses = CnfClause::from_cnf_list(&cnf);

    let symbols = symbols_of(&clauses);
    dpll(&clauses, &symbols, &Model::new(), &BTreeSet::new())
}

/// The distinct identifiers of a clause list, in first-occurrence order.
fn symbols_of(clauses: &[CnfClause]) -> Vec<String> {
    let mut symbols = Vec::new();

    for clause in clauses {
        for lit in clause.lits() {
            if !symbols.iter().any(|known| known == lit.id()) {
                symbols.push(lit.id().to_owned());
            }
        }
    }

    symbols
}

/// The truth of a clause under a partial model: true when some literal is
/// true, false when every literal is assigned and false, undetermined
/// otherwise.
fn eval_clause(clause: &CnfClause, model: &Model) -> Option<bool> {
    let mut undetermined = false;

    for lit in clause.lits() {
        match model.get(lit.id()) {
            Some(&value) => {
                if value == lit.is_positive() {
                    return Some(true);
                }
            }
            None => undetermined = true,
        }
    }

    if undetermined { None } else { Some(false) }
}

/// Finds a symbol that appears with only one polarity across all clauses,
/// together with the value that satisfies its occurrences.
fn find_pure_symbol(symbols: &[String], clauses: &[CnfClause]) -> Option<(String, bool)> {
    for symbol in symbols {
        let mut pos = false;
        let mut neg = false;

        for clause in clauses {
            if clause.contains(&Lit::pos(symbol)) {
                pos = true;
            }

            if clause.contains(&Lit::neg(symbol)) {
                neg = true;
            }
        }

        if pos != neg {
            return Some((symbol.clone(), pos));
        }
    }

    None
}

/// Finds a clause in which all but one literal are falsified, and returns
/// the remaining literal's symbol with the value it is forced to take.
/// Symbols in `seen` were already forced once and are not selected again.
fn find_unit_clause(
    clauses: &[CnfClause],
    model: &Model,
    seen: &BTreeSet<String>,
) -> Option<(String, bool)> {
    for clause in clauses {
        if eval_clause(clause, model).is_some() {
            continue;
        }

        let unassigned: Vec<Lit> = clause
            .lits()
            .filter(|lit| !model.contains_key(lit.id()))
            .collect();

        if let [lit] = unassigned.as_slice() {
            if !seen.contains(lit.id()) {
                return Some((lit.id().to_owned(), lit.is_positive()));
            }
        }
    }

    None
}

fn without(symbols: &[String], symbol: &str) -> Vec<String> {
    symbols.iter().filter(|s| *s != symbol).cloned().collect()
}

fn dpll(clauses: &[CnfClause], symbols: &[String], model: &Model, seen: &BTreeSet<String>) -> bool {
    let mut undetermined = false;

    for clause in clauses {
        match eval_clause(clause, model) {
            Some(false) => return false,
            Some(true) => {}
            None => undetermined = true,
        }
    }

    if !undetermined {
        // Every clause is true in the model.
        return true;
    }

    if let Some((symbol, value)) = find_pure_symbol(symbols, clauses) {
        log::trace!(target: targets::DPLL, "pure symbol {symbol} = {value}");

        let rest = without(symbols, &symbol);
        let mut model = model.clone();
        model.insert(symbol, value);

        return dpll(clauses, &rest, &model, seen);
    }

    if let Some((symbol, value)) = find_unit_clause(clauses, model, seen) {
        log::trace!(target: targets::DPLL, "unit clause forces {symbol} = {value}");

        let rest = without(symbols, &symbol);
        let mut model = model.clone();
        model.insert(symbol.clone(), value);
        let mut seen = seen.clone();
        seen.insert(symbol);

        return dpll(clauses, &rest, &model, &seen);
    }

    let Some(symbol) = symbols.first() else {
        return false;
    };

    log::trace!(target: targets::DPLL, "splitting on {symbol}");

    let rest = &symbols[1..];

    let mut with_true = model.clone();
    with_true.insert(symbol.clone(), true);

    let mut with_false = model.clone();
    with_false.insert(symbol.clone(), false);

    dpll(clauses, rest, &with_true, seen) || dpll(clauses, rest, &with_false, seen)
}
