use entail::prop::{ClauseError, CnfClause, Formula, Lit, ResolutionKb, pl_resolution};

fn var(id: &str) -> Formula {
    Formula::var(id)
}

fn clause<const P: usize, const N: usize>(pos: [&str; P], neg: [&str; N]) -> CnfClause {
    CnfClause::new(
        pos.into_iter()
            .map(Lit::pos)
            .chain(neg.into_iter().map(Lit::neg)),
    )
    .unwrap()
}

#[test]
fn resolve_cancels_the_pivot() {
    let c1 = clause(["P", "Q", "A"], []);
    let c2 = clause(["R"], ["Q"]);

    let resolvent = c1.resolve(&c2, &Lit::pos("Q")).unwrap();

    assert_eq!(resolvent, clause(["P", "R", "A"], []));
    assert_eq!(resolvent.len(), 3);
    assert!(!resolvent.is_empty());
}

#[test]
fn resolve_does_not_mutate_its_inputs() {
    let c1 = clause(["P", "Q"], []);
    let c2 = clause(["R"], ["Q"]);

    c1.resolve(&c2, &Lit::pos("Q")).unwrap();

    assert!(c1.contains(&Lit::pos("Q")));
    assert!(c2.contains(&Lit::neg("Q")));
}

#[test]
fn resolve_requires_the_pivot() {
    let c1 = clause(["P"], []);
    let c2 = clause(["R"], ["Q"]);

    assert_eq!(
        c1.resolve(&c2, &Lit::pos("Q")),
        Err(ClauseError::MissingPivot(Lit::pos("Q")))
    );
}

#[test]
fn resolve_rejects_tautological_resolvents() {
    let c1 = clause(["P", "Q"], []);
    let c2 = clause([], ["Q", "P"]);

    assert_eq!(
        c1.resolve(&c2, &Lit::pos("Q")),
        Err(ClauseError::Tautology)
    );
}

#[test]
fn kb_deduplicates() {
    let mut kb = ResolutionKb::new();

    kb.add(clause(["P", "Q", "A"], []));
    kb.add_all([clause(["P", "Q"], []), clause(["R"], []), clause(["P", "Q", "A"], [])]);

    assert_eq!(kb.clauses().len(), 3);
}

#[test]
fn wumpus_breeze() {
    // B11 <-> (P12 | P21), together with !B11, entails !P12.
    let mut kb = ResolutionKb::new();
    kb.add_formula(Formula::bicond(var("B11"), var("P12") | var("P21")));
    kb.add_formula(!var("B11"));

    assert!(kb.query(&!var("P12")));
    assert!(!kb.query(&var("P12")));
}

#[test]
fn modus_ponens() {
    let mut kb = ResolutionKb::new();
    kb.add_formula(Formula::cond(var("P"), var("Q")));
    kb.add_formula(var("P"));

    assert!(kb.query(&var("Q")));
    assert!(!kb.query(&var("R")));
}

#[test]
fn exhausting_the_iteration_bound_is_a_no() {
    let mut kb = ResolutionKb::new();
    kb.add_formula(var("P"));

    assert!(!pl_resolution(&kb, &var("P"), 0));
}
