use super::Formula;

/// Rewrites a formula into an equivalent conjunctive normal form: an
/// `&`-tree whose leaves are `|`-trees whose leaves are literals.
///
/// Implications and biconditionals are eliminated first, then disjunctions
/// are pushed below conjunctions by [distribution][distribute]. De Morgan's
/// laws and double negation are realised by the `!` operator on each
/// formula variant, so no negation handling is needed here. Finding an
/// equivalent CNF takes `O(2^n)` time and space in the worst case.
pub fn to_cnf(phi: Formula) -> Formula {
    match phi {
        Formula::And(p, q) => to_cnf(*p) & to_cnf(*q),
        Formula::Or(p, q) => distribute(to_cnf(*p), to_cnf(*q)),
        Formula::Cond(p, q) => to_cnf(!*p | *q),
        Formula::Bicond(p, q) => {
            let (p, q) = (*p, *q);
            to_cnf((p.clone() & q.clone()) | (!p & !q))
        }
        lit => lit,
    }
}

/// Distributes a disjunction over conjunctions: `(a & b) | c` becomes
/// `(a | c) & (b | c)`, symmetrically on the right. Both inputs must
/// already be in CNF; anything without a top-level `&` is a plain
/// disjunction and is joined as-is.
fn distribute(p: Formula, q: Formula) -> Formula {
    match (p, q) {
        (Formula::And(a, b), q) => distribute(*a, q.clone()) & distribute(*b, q),
        (p, Formula::And(a, b)) => distribute(p.clone(), *a) & distribute(p, *b),
        (p, q) => p | q,
    }
}
