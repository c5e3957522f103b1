use entail::fol::{
    HornClauseFol, Predicate, Substitution, Term, fol_bc_ask, fol_fc_ask,
};

fn var(id: &str) -> Term {
    Term::var(id)
}

fn con(id: &str) -> Term {
    Term::constant(id)
}

fn pred(id: &str, args: Vec<Term>) -> Predicate {
    Predicate::new(id, args)
}

/// The binding of the region or rule variable whose renamed identifier is
/// `prefix` followed by the counter suffix.
fn binding_of(theta: &Substitution, prefix: &str) -> Option<Term> {
    theta
        .iter()
        .find(|(from, _)| match from {
            Term::Var(id) => {
                id.starts_with(prefix) && id[prefix.len()..].chars().all(|c| c.is_ascii_digit())
            }
            Term::Const(_) => false,
        })
        .map(|(_, to)| to.clone())
}

/// The weapons-law knowledge base: West, an American, sells missiles to
/// Nono, an enemy of America, which makes West a criminal.
fn criminal_kb() -> Vec<HornClauseFol> {
    let crime = HornClauseFol::rule(
        vec![
            pred("American", vec![var("x")]),
            pred("Weapon", vec![var("y")]),
            pred("Sells", vec![var("x"), var("y"), var("z")]),
            pred("Hostile", vec![var("z")]),
        ],
        pred("Criminal", vec![var("x")]),
    )
    .unwrap();

    let sells = HornClauseFol::rule(
        vec![
            pred("Missile", vec![var("x")]),
            pred("Owns", vec![con("Nono"), var("x")]),
        ],
        pred("Sells", vec![con("West"), var("x"), con("Nono")]),
    )
    .unwrap();

    let weapon = HornClauseFol::rule(
        vec![pred("Missile", vec![var("x")])],
        pred("Weapon", vec![var("x")]),
    )
    .unwrap();

    let hostile = HornClauseFol::rule(
        vec![pred("Enemy", vec![var("x"), con("America")])],
        pred("Hostile", vec![var("x")]),
    )
    .unwrap();

    vec![
        crime,
        HornClauseFol::fact(pred("Owns", vec![con("Nono"), con("M1")])).unwrap(),
        HornClauseFol::fact(pred("Missile", vec![con("M1")])).unwrap(),
        sells,
        weapon,
        hostile,
        HornClauseFol::fact(pred("American", vec![con("West")])).unwrap(),
        HornClauseFol::fact(pred("Enemy", vec![con("Nono"), con("America")])).unwrap(),
    ]
}

/// The map-colouring knowledge base: nine inequality constraints over the
/// mainland regions, and the unequal pairs of three colours as facts.
fn colorable_kb() -> Vec<HornClauseFol> {
    let map = HornClauseFol::rule(
        vec![
            pred("Diff", vec![var("wa"), var("nt")]),
            pred("Diff", vec![var("wa"), var("sa")]),
            pred("Diff", vec![var("nt"), var("q")]),
            pred("Diff", vec![var("nt"), var("sa")]),
            pred("Diff", vec![var("q"), var("nsw")]),
            pred("Diff", vec![var("q"), var("sa")]),
            pred("Diff", vec![var("nsw"), var("v")]),
            pred("Diff", vec![var("nsw"), var("sa")]),
            pred("Diff", vec![var("v"), var("sa")]),
        ],
        pred("Colorable", vec![]),
    )
    .unwrap();

    let mut kb = vec![map];

    for (a, b) in [
        ("Red", "Blue"),
        ("Red", "Green"),
        ("Green", "Red"),
        ("Green", "Blue"),
        ("Blue", "Red"),
        ("Blue", "Green"),
    ] {
        kb.push(HornClauseFol::new(vec![pred("Diff", vec![con(a), con(b)])], None).unwrap());
    }

    kb
}

const REGION_PAIRS: [(&str, &str); 9] = [
    ("wa", "nt"),
    ("wa", "sa"),
    ("nt", "q"),
    ("nt", "sa"),
    ("q", "nsw"),
    ("q", "sa"),
    ("nsw", "v"),
    ("nsw", "sa"),
    ("v", "sa"),
];

fn assert_valid_colouring(theta: &Substitution) {
    for (left, right) in REGION_PAIRS {
        let left = binding_of(theta, left).unwrap();
        let right = binding_of(theta, right).unwrap();

        assert!(left.is_const());
        assert!(right.is_const());
        assert_ne!(left, right, "{left} and {right} may not share a colour");
    }
}

#[test]
fn west_is_a_criminal() {
    let kb = criminal_kb();
    let goal = pred("Criminal", vec![con("West")]);

    let answers = fol_bc_ask(&kb, &[goal], &Substitution::new());

    assert!(!answers.is_empty());

    // The rule variables resolve to West, the missile and Nono.
    let theta = &answers[0];
    assert_eq!(binding_of(theta, "x"), Some(con("West")));
    assert_eq!(binding_of(theta, "y"), Some(con("M1")));
    assert_eq!(binding_of(theta, "z"), Some(con("Nono")));
}

#[test]
fn nobody_else_is_a_criminal() {
    let kb = criminal_kb();
    let goal = pred("Criminal", vec![con("Nono")]);

    let answers = fol_bc_ask(&kb, &[goal], &Substitution::new());

    assert!(answers.is_empty());
}

#[test]
fn backward_chaining_colours_the_map() {
    let kb = colorable_kb();
    let goal = pred("Colorable", vec![]);

    let answers = fol_bc_ask(&kb, &[goal], &Substitution::new());

    assert!(!answers.is_empty());

    for theta in &answers {
        assert_valid_colouring(theta);
    }
}

#[test]
fn forward_chaining_colours_the_map() {
    let kb = colorable_kb();

    let theta = fol_fc_ask(&kb, &pred("Colorable", vec![])).unwrap();

    assert_valid_colouring(&theta);
}

#[test]
fn forward_chaining_binds_the_query_variable() {
    let kb = vec![
        HornClauseFol::fact(pred("Missile", vec![con("M1")])).unwrap(),
        HornClauseFol::rule(
            vec![pred("Missile", vec![var("x")])],
            pred("Weapon", vec![var("x")]),
        )
        .unwrap(),
    ];

    let theta = fol_fc_ask(&kb, &pred("Weapon", vec![var("w")])).unwrap();

    assert_eq!(theta.get(&var("w")), Some(&con("M1")));
}

#[test]
fn ground_rules_fire_without_bindings() {
    let kb = vec![
        HornClauseFol::fact(pred("P", vec![con("a")])).unwrap(),
        HornClauseFol::rule(vec![pred("P", vec![con("a")])], pred("Q", vec![con("b")])).unwrap(),
    ];

    let theta = fol_fc_ask(&kb, &pred("Q", vec![con("b")]));

    assert_eq!(theta, Some(Substitution::new()));
}

#[test]
fn underivable_queries_return_none() {
    let kb = vec![HornClauseFol::fact(pred("P", vec![con("a")])).unwrap()];

    assert_eq!(fol_fc_ask(&kb, &pred("Q", vec![con("a")])), None);
}

#[test]
fn the_empty_goal_list_is_proven_by_theta() {
    let theta = Substitution::new().bind(var("x"), con("West"));

    let answers = fol_bc_ask(&criminal_kb(), &[], &theta);

    assert_eq!(answers, vec![theta]);
}
