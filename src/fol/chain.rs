use crate::log::targets;

use super::{Consequent, HornClauseFol, Predicate, Substitution, standardize_variables, unify};

/// Backward chaining: enumerates every substitution under which all
/// `goals` follow from the knowledge base, starting from `theta`.
///
/// The empty goal list is proven by `theta` itself. Otherwise the first
/// goal, with `theta` applied, is matched against the head of every clause
/// whose predicate identifier agrees; each match standardises the clause
/// apart, unifies the head with the goal under a fresh substitution, and
/// recurses on the clause body followed by the remaining goals. Answers
/// from all matching clauses accumulate, so the result enumerates all
/// proofs, not only the first.
pub fn fol_bc_ask(
    kb: &[HornClauseFol],
    goals: &[Predicate],
    theta: &Substitution,
) -> Vec<Substitution> {
    let mut counter = 0;
    ask(kb, goals, theta, &mut counter)
}

fn ask(
    kb: &[HornClauseFol],
    goals: &[Predicate],
    theta: &Substitution,
    counter: &mut usize,
) -> Vec<Substitution> {
    let Some((first, rest)) = goals.split_first() else {
        return vec![theta.clone()];
    };

    let goal = theta.substitute(first);
    log::trace!(target: targets::BACKWARD, "proving {goal}");

    let mut answers = Vec::new();

    for clause in kb {
        let (clause, advanced) = standardize_variables(clause, *counter);
        *counter = advanced;

        let Some(head) = clause.head() else {
            continue;
        };

        if head.id() != goal.id() {
            continue;
        }

        let Some(binding) = unify(head.args(), goal.args(), Some(Substitution::new())) else {
            continue;
        };

        let mut subgoals = clause.body().to_vec();
        subgoals.extend(rest.iter().cloned());

        let composed = Substitution::compose(&binding, theta);
        answers.extend(ask(kb, &subgoals, &composed, counter));
    }

    answers
}

/// Forward chaining: derives new facts from the rules of the knowledge
/// base until one unifies with the query `alpha`, returning the
/// accumulated substitution, or until a whole pass derives nothing new,
/// returning `None`.
///
/// A rule fires under every substitution that satisfies all of its
/// antecedents against the known facts at once, found by backtracking over
/// alternative fact choices; a rule whose antecedents are ground needs no
/// bindings at all and still fires. A derived consequent only becomes a
/// fact when it is fully ground and not already known.
pub fn fol_fc_ask(kb: &[HornClauseFol], alpha: &Predicate) -> Option<Substitution> {
    let mut facts = Vec::new();
    let mut rules = Vec::new();

    for clause in kb {
        match (clause.is_fact(), clause.head()) {
            (true, Some(head)) => facts.push(head.clone()),
            _ => rules.push(clause),
        }
    }

    let mut counter = 0;

    loop {
        let mut grew = false;

        for rule in &rules {
            let (rule, advanced) = standardize_variables(rule, counter);
            counter = advanced;

            let Consequent::Pred(conclusion) = rule.consequent() else {
                continue;
            };

            for theta in satisfy(rule.antecedents(), &facts, &Substitution::new()) {
                let derived = theta.substitute(conclusion);

                if !derived.is_ground() {
                    continue;
                }

                if facts.contains(&derived) {
                    continue;
                }

                log::debug!(target: targets::FORWARD, "derived {derived}");
                facts.push(derived.clone());
                grew = true;

                if derived.id() == alpha.id() {
                    if let Some(answer) = unify(derived.args(), alpha.args(), Some(theta.clone())) {
                        return Some(answer);
                    }
                }
            }
        }

        if !grew {
            return None;
        }
    }
}

/// Enumerates the substitutions under which every antecedent matches some
/// known fact, backtracking over the alternative facts for each one.
fn satisfy(
    antecedents: &[Predicate],
    facts: &[Predicate],
    theta: &Substitution,
) -> Vec<Substitution> {
    let Some((first, rest)) = antecedents.split_first() else {
        return vec![theta.clone()];
    };

    let goal = theta.substitute(first);
    let mut out = Vec::new();

    for fact in facts {
        if fact.id() != goal.id() {
            continue;
        }

        let Some(binding) = unify(fact.args(), goal.args(), Some(Substitution::new())) else {
            continue;
        };

        out.extend(satisfy(rest, facts, &Substitution::compose(&binding, theta)));
    }

    out
}
