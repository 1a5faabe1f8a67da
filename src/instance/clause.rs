use core::fmt;

use itertools::Itertools;

use crate::error::Result;

use super::{Literal, Variable};

/// A disjunction of exactly three literals. Positions are kept as generated, since the
/// generator's repair loop addresses literals by position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: [Literal; 3],
}

impl Clause {
    pub fn new(literals: [Literal; 3]) -> Clause {
        Clause { literals }
    }

    pub fn from_dimacs(values: [i64; 3]) -> Result<Clause> {
        Ok(Clause::new([
            Literal::from_dimacs(values[0])?,
            Literal::from_dimacs(values[1])?,
            Literal::from_dimacs(values[2])?,
        ]))
    }

    pub fn literals(&self) -> &[Literal; 3] {
        &self.literals
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.literals.iter().map(|l| l.var())
    }

    /// Negates the literal at `position` in place.
    pub(crate) fn negate(&mut self, position: usize) {
        self.literals[position] = self.literals[position].invert();
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.literals.iter().format(", "))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.literals.iter().join(", "))
    }
}
