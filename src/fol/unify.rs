use super::{Substitution, Term};

/// Finds the most general unifier of two argument lists relative to a
/// starting substitution. `None` signals failure, and a `None` input
/// propagates it, so unification steps can be chained without inspecting
/// intermediate results.
///
/// Lists of different lengths never unify. Structurally equal lists unify
/// under the given substitution as-is; otherwise the head pair is unified
/// first and the tails are unified under the extended substitution.
pub fn unify(x: &[Term], y: &[Term], theta: Option<Substitution>) -> Option<Substitution> {
    let theta = theta?;

    if x.len() != y.len() {
        return None;
    }

    if x == y {
        return Some(theta);
    }

    let (x_head, x_tail) = x.split_first()?;
    let (y_head, y_tail) = y.split_first()?;

    unify(x_tail, y_tail, unify_term(x_head, y_head, Some(theta)))
}

/// Unifies a single pair of terms under `theta`. Identical terms unify
/// trivially; a variable on either side is bound through [unify_var]; two
/// distinct constants never unify.
pub fn unify_term(x: &Term, y: &Term, theta: Option<Substitution>) -> Option<Substitution> {
    let theta = theta?;

    if x == y {
        return Some(theta);
    }

    if x.is_var() {
        return unify_var(x, y, theta);
    }

    if y.is_var() {
        return unify_var(y, x, theta);
    }

    None
}

/// Binds the variable `v` to `t`, chasing bindings already present in
/// `theta` on either side first. There is no occurs check: the term
/// language has no function symbols, so a variable can never occur inside
/// the term it is bound to.
fn unify_var(v: &Term, t: &Term, theta: Substitution) -> Option<Substitution> {
    if let Some(u) = theta.get(v).cloned() {
        return unify_term(&u, t, Some(theta));
    }

    if t.is_var() {
        if let Some(u) = theta.get(t).cloned() {
            return unify_term(v, &u, Some(theta));
        }
    }

    Some(theta.bind(v.clone(), t.clone()))
}
