use entail::prop::{DpllKb, Formula, dpll_satisfiable};

fn var(id: &str) -> Formula {
    Formula::var(id)
}

#[test]
fn wumpus_model_is_satisfiable() {
    let mut phi = Formula::bicond(var("B11"), var("P12") | var("P21"));
    phi &= !var("B11");
    phi &= !var("P12");

    assert!(dpll_satisfiable(phi));
}

#[test]
fn contradiction_is_unsatisfiable() {
    assert!(!dpll_satisfiable(var("P") & !var("P")));
}

#[test]
fn tautology_is_satisfiable() {
    assert!(dpll_satisfiable(var("P") | !var("P")));
}

#[test]
fn pure_literal_elimination() {
    // P only occurs positively; assigning it true satisfies everything.
    assert!(dpll_satisfiable((var("P") | var("Q")) & (var("P") | !var("Q"))));
}

#[test]
fn unit_propagation_chains() {
    let phi = var("P") & Formula::cond(var("P"), var("Q")) & Formula::cond(var("Q"), var("R"));

    assert!(dpll_satisfiable(phi.clone()));
    assert!(!dpll_satisfiable(phi & !var("R")));
}

#[test]
fn query_asks_for_consistency() {
    let mut kb = DpllKb::new();
    kb.add_formula(var("P"));

    // Q is consistent with the knowledge base, but not entailed by it.
    assert!(kb.query(&var("Q")));
    assert!(!kb.entails(&var("Q")));
}

#[test]
fn entails_is_classical_entailment() {
    let mut kb = DpllKb::new();
    kb.add_formula(Formula::cond(var("P"), var("Q")));
    kb.add_formula(var("P"));

    assert!(kb.entails(&var("Q")));
    assert!(kb.query(&var("Q")));

    assert!(!kb.query(&!var("Q")));
    assert!(!kb.entails(&!var("Q")));
}

#[test]
fn kb_keeps_duplicate_clauses() {
    let mut kb = DpllKb::new();
    kb.add_formula(var("P") | var("Q"));
    kb.add_formula(var("P") | var("Q"));

    assert_eq!(kb.clauses().len(), 2);
}
