use std::collections::BTreeMap;
use std::fmt::Display;

use super::{FolError, Predicate, Term};

/// A substitution: an ordered mapping from variables to terms. Applying a
/// substitution to a predicate replaces each variable argument by its
/// image, in a single pass (bindings are not chased transitively).
///
/// Substitutions are values: [bind][Substitution::bind] and
/// [compose][Substitution::compose] build new maps and leave their inputs
/// untouched. Only variables may be mapped; a map with a constant key is a
/// misuse that application reports as [FolError::ConstantBinding].
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Default)]
pub struct Substitution {
    map: BTreeMap<Term, Term>,
}

impl Substitution {
    /// Creates a new substitution with no bindings.
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// The image of `term`, if it is bound.
    pub fn get(&self, term: &Term) -> Option<&Term> {
        self.map.get(term)
    }

    pub fn contains(&self, term: &Term) -> bool {
        self.map.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over the borrowed binding pairs of this substitution.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, &Term)> {
        self.map.iter()
    }

    /// A new substitution extended with the binding `from := to`. On a key
    /// collision the new binding wins.
    pub fn bind(&self, from: Term, to: Term) -> Substitution {
        let mut map = self.map.clone();
        map.insert(from, to);

        Substitution { map }
    }

    /// The union of two substitutions; on a key collision the bindings of
    /// `second` win.
    pub fn compose(first: &Substitution, second: &Substitution) -> Substitution {
        let mut map = first.map.clone();

        for (from, to) in &second.map {
            map.insert(from.clone(), to.clone());
        }

        Substitution { map }
    }

    /// Attempts to apply this substitution to a predicate. Returns an
    /// error when the map binds a constant.
    pub fn try_substitute(&self, pred: &Predicate) -> Result<Predicate, FolError> {
        if let Some(term) = self.map.keys().find(|key| key.is_const()) {
            return Err(FolError::ConstantBinding(term.clone()));
        }

        let args = pred
            .args()
            .iter()
            .map(|arg| self.map.get(arg).cloned().unwrap_or_else(|| arg.clone()))
            .collect();

        Ok(pred.with_args(args))
    }

    /// Applies this substitution to a predicate. Panics when the map binds
    /// a constant, see [Substitution::try_substitute].
    pub fn substitute(&self, pred: &Predicate) -> Predicate {
        self.try_substitute(pred).unwrap()
    }
}

impl FromIterator<(Term, Term)> for Substitution {
    fn from_iter<T: IntoIterator<Item = (Term, Term)>>(iter: T) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut first = true;

        for (from, to) in &self.map {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }

            write!(f, "{from} = {to}")?;
        }

        write!(f, "}}")
    }
}
