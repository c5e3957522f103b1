mod error;
mod term;
mod pred;
mod subst;
mod unify;
mod horn;
mod standardize;
mod chain;

pub use error::*;
pub use term::*;
pub use pred::*;
pub use subst::*;
pub use unify::*;
pub use horn::*;
pub use standardize::*;
pub use chain::*;
