// The `instance` module contains the data model: literals, clauses, assignments and the
// instance that ties them together. Clauses are fixed once built; only the assignment moves.
mod variable;
pub use crate::instance::variable::Variable;

mod literal;
pub use crate::instance::literal::Literal;

mod clause;
pub use crate::instance::clause::Clause;

mod assignment;
pub use crate::instance::assignment::Assignment;

mod problem;
pub use crate::instance::problem::Instance;
