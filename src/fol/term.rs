use std::fmt::Display;

/// A first-order term: a constant or a variable, either fully described by
/// its identifier. The term language is function-free, which is what keeps
/// unification free of an occurs check.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub enum Term {
    /// A named constant, e.g. `John`.
    Const(String),

    /// A variable, implicitly universally quantified within its clause.
    Var(String),
}

impl Term {
    pub fn constant(id: &str) -> Term {
        Term::Const(id.to_owned())
    }

    pub fn var(id: &str) -> Term {
        Term::Var(id.to_owned())
    }

    pub fn id(&self) -> &str {
        match self {
            Term::Const(id) => id,
            Term::Var(id) => id,
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn is_const(&self) -> bool {
        matches!(self, Term::Const(_))
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
