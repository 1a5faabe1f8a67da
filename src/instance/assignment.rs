use core::fmt;

use itertools::Itertools;

use super::{Literal, Variable};

/// A full truth assignment, one value per variable. Used for snapshots of an instance's
/// working assignment, for planted solutions and for the best assignment GRASP found.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    /// All variables false.
    pub fn new(num_variables: usize) -> Assignment {
        Assignment {
            values: vec![false; num_variables],
        }
    }

    pub fn get(&self, var: Variable) -> Option<bool> {
        var.0
            .checked_sub(1)
            .and_then(|ix| self.values.get(ix))
            .copied()
    }

    pub fn satisfies(&self, literal: Literal) -> Option<bool> {
        self.get(literal.var())
            .map(|value| literal.is_satisfied_by(value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.values
    }

    /// The assignment as literals that it makes true, in variable order.
    pub fn as_literals(&self) -> Vec<Literal> {
        self.values
            .iter()
            .enumerate()
            .map(|(ix, &value)| Literal::new(Variable(ix + 1), value))
            .collect()
    }
}

impl From<Vec<bool>> for Assignment {
    fn from(values: Vec<bool>) -> Self {
        Assignment { values }
    }
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries = self
            .values
            .iter()
            .enumerate()
            .map(|(ix, value)| format!("{:?}={:?}", Variable(ix + 1), value));
        write!(f, "{}", entries.format(", "))
    }
}
