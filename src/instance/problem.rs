use core::fmt;

use crate::error::{Precondition, Result, SatError};

use super::{Assignment, Clause, Literal};

/// A conjunction of 3-literal clauses over variables `1..=num_variables`, plus the working
/// assignment every solver reads and overwrites.
///
/// Clauses are range-checked on the way in, so the aggregate evaluators below never fail.
/// Solvers borrow the instance mutably for the duration of a call and leave the assignment
/// fully populated; use [`Instance::snapshot`] and [`Instance::restore`] to compare
/// strategies on the same instance.
#[derive(Clone)]
pub struct Instance {
    num_variables: usize,
    clauses: Vec<Clause>,
    assignment: Assignment,
    planted: Option<Assignment>,
}

impl Instance {
    pub fn new(num_variables: usize, clauses: Vec<Clause>) -> Result<Instance> {
        if num_variables == 0 {
            return Err(Precondition::NoVariables.into());
        }
        let mut instance = Instance {
            num_variables,
            clauses: Vec::with_capacity(clauses.len()),
            assignment: Assignment::new(num_variables),
            planted: None,
        };
        for clause in clauses {
            instance.push_clause(clause)?;
        }
        Ok(instance)
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// The assignment the satisfiable generator built this instance around, if any.
    pub fn planted_assignment(&self) -> Option<&Assignment> {
        self.planted.as_ref()
    }

    pub fn variable_value(&self, literal: Literal) -> Result<bool> {
        self.check_range(literal)?;
        Ok(self.value(literal))
    }

    /// Sets the variable underlying `literal`. The literal's sign plays no part in addressing.
    pub fn set_variable(&mut self, literal: Literal, value: bool) -> Result<()> {
        self.check_range(literal)?;
        self.set(literal, value);
        Ok(())
    }

    pub fn flip_variable(&mut self, literal: Literal) -> Result<()> {
        self.check_range(literal)?;
        self.flip(literal);
        Ok(())
    }

    /// Evaluates any clause, including ones not owned by this instance, against the
    /// current assignment.
    pub fn evaluate_clause(&self, clause: &Clause) -> Result<bool> {
        for &literal in clause.literals() {
            self.check_range(literal)?;
        }
        Ok(self.clause_value(clause))
    }

    /// Stops at the first false clause.
    pub fn is_satisfied(&self) -> bool {
        self.clauses.iter().all(|clause| self.clause_value(clause))
    }

    /// Evaluates every clause, with no short circuit.
    pub fn is_fully_satisfied(&self) -> bool {
        self.clauses
            .iter()
            .fold(true, |acc, clause| self.clause_value(clause) & acc)
    }

    pub fn unsatisfied_count(&self) -> usize {
        self.clauses
            .iter()
            .filter(|clause| !self.clause_value(clause))
            .count()
    }

    /// Fraction of clauses false under the current assignment, in `[0, 1]`.
    pub fn unsatisfied_ratio(&self) -> Result<f64> {
        self.require_clauses()?;
        Ok(self.ratio_of(self.unsatisfied_count()))
    }

    pub fn snapshot(&self) -> Assignment {
        self.assignment.clone()
    }

    pub fn restore(&mut self, assignment: Assignment) -> Result<()> {
        if assignment.len() != self.num_variables {
            return Err(Precondition::AssignmentLength {
                expected: self.num_variables,
                actual: assignment.len(),
            }
            .into());
        }
        self.assignment = assignment;
        Ok(())
    }

    pub(crate) fn require_clauses(&self) -> Result<()> {
        if self.clauses.is_empty() {
            return Err(Precondition::NoClauses.into());
        }
        Ok(())
    }

    /// Converts a count of unsatisfied clauses into a ratio. Callers check for clauses first.
    pub(crate) fn ratio_of(&self, unsatisfied: usize) -> f64 {
        unsatisfied as f64 / self.clauses.len() as f64
    }

    pub(crate) fn push_clause(&mut self, clause: Clause) -> Result<()> {
        for &literal in clause.literals() {
            self.check_range(literal)?;
        }
        self.clauses.push(clause);
        Ok(())
    }

    pub(crate) fn plant_current_assignment(&mut self) {
        self.planted = Some(self.assignment.clone());
    }

    /// Fails if the planted assignment leaves any clause false.
    pub(crate) fn check_planted(&self) -> Result<()> {
        match self.first_violated_by_planted() {
            Some(clause_index) => Err(SatError::GeneratorInvariant {
                clause_index,
                clause: self.clauses[clause_index],
            }),
            None => Ok(()),
        }
    }

    /// Index of the first clause the planted assignment leaves false.
    pub(crate) fn first_violated_by_planted(&self) -> Option<usize> {
        let planted = self.planted.as_ref()?;
        self.clauses.iter().position(|clause| {
            !clause
                .literals()
                .iter()
                .any(|&literal| planted.satisfies(literal).unwrap_or(false))
        })
    }

    pub(crate) fn values_mut(&mut self) -> &mut [bool] {
        self.assignment.as_mut_slice()
    }

    // The accessors below skip the range check: they are only reached with literals that
    // were validated on entry or built from `1..=num_variables`.

    pub(crate) fn value(&self, literal: Literal) -> bool {
        self.assignment.as_slice()[literal.var().index()]
    }

    pub(crate) fn set(&mut self, literal: Literal, value: bool) {
        self.values_mut()[literal.var().index()] = value;
    }

    pub(crate) fn flip(&mut self, literal: Literal) {
        let slot = &mut self.values_mut()[literal.var().index()];
        *slot = !*slot;
    }

    pub(crate) fn clause_value(&self, clause: &Clause) -> bool {
        clause
            .literals()
            .iter()
            .any(|&literal| literal.is_satisfied_by(self.value(literal)))
    }

    fn check_range(&self, literal: Literal) -> Result<()> {
        if literal.var().0 > self.num_variables {
            return Err(SatError::OutOfRange {
                literal,
                num_variables: self.num_variables,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Instance")
            .field("num_variables", &self.num_variables)
            .field("clauses", &self.clauses)
            .field("assignment", &self.assignment)
            .finish()
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "SAT instance with {} variables and {} clauses:",
            self.num_variables,
            self.clauses.len()
        )?;
        for clause in &self.clauses {
            writeln!(f, "{}", clause)?;
        }
        Ok(())
    }
}
