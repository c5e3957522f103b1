use std::collections::BTreeMap;

use super::{Consequent, HornClauseFol, Predicate, Term};

/// Renames every variable of a clause so that it shares no variable with
/// any other clause standardised from a different counter value.
///
/// Walking the antecedents and then the consequent, the first occurrence
/// of each variable takes the current counter as a suffix on its
/// identifier and advances the counter; later occurrences of the same
/// identifier reuse the suffix, so co-occurrence within the clause is
/// preserved. Constants pass through unchanged. Returns the rewritten
/// clause together with the advanced counter, which the caller threads
/// into the next standardisation.
pub fn standardize_variables(clause: &HornClauseFol, counter: usize) -> (HornClauseFol, usize) {
    let mut counter = counter;
    let mut renames = BTreeMap::new();

    let antecedents = clause
        .antecedents()
        .iter()
        .map(|pred| rename_pred(pred, &mut counter, &mut renames))
        .collect();

    let consequent = match clause.consequent() {
        Consequent::Pred(pred) => Consequent::Pred(rename_pred(pred, &mut counter, &mut renames)),
        other => other.clone(),
    };

    (HornClauseFol::from_parts(antecedents, consequent), counter)
}

fn rename_pred(
    pred: &Predicate,
    counter: &mut usize,
    renames: &mut BTreeMap<String, String>,
) -> Predicate {
    let args = pred
        .args()
        .iter()
        .map(|term| rename_term(term, counter, renames))
        .collect();

    pred.with_args(args)
}

fn rename_term(
    term: &Term,
    counter: &mut usize,
    renames: &mut BTreeMap<String, String>,
) -> Term {
    match term {
        Term::Const(_) => term.clone(),
        Term::Var(id) => {
            let fresh = renames.entry(id.clone()).or_insert_with(|| {
                let fresh = format!("{id}{counter}");
                *counter += 1;
                fresh
            });

            Term::Var(fresh.clone())
        }
    }
}
