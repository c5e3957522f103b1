/// Propositional formulas, conjunctive normal form and the propositional
/// decision procedures (resolution, DPLL, Horn forward chaining).
pub mod prop;

/// First-order terms, predicates, unification and Horn-clause inference.
pub mod fol;

/// Logging target names.
pub mod log;
