use thiserror::Error;

use crate::instance::{Clause, Literal};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SatError {
    #[error("precondition violated: {0}")]
    Precondition(#[from] Precondition),
    #[error("literal {literal:?} is out of range for {num_variables} variables")]
    OutOfRange {
        literal: Literal,
        num_variables: usize,
    },
    /// The satisfiable generator produced a clause its own planted assignment violates.
    #[error("planted assignment violates clause {clause_index}: {clause}")]
    GeneratorInvariant { clause_index: usize, clause: Clause },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    #[error("a 3-literal clause needs at least 3 variables, got {0}")]
    TooFewVariables(usize),
    #[error("an instance needs at least one variable")]
    NoVariables,
    #[error("the unsatisfied ratio of an instance without clauses is undefined")]
    NoClauses,
    #[error("assignment has {actual} values but the instance has {expected} variables")]
    AssignmentLength { expected: usize, actual: usize },
    #[error("block size must be at least 1")]
    ZeroBlockSize,
    #[error("no block sizes to choose from")]
    NoBlockSizes,
    #[error("0 is not a literal")]
    ZeroLiteral,
    #[error("literal {0} cannot be negated")]
    UnrepresentableLiteral(i64),
}

pub type Result<T> = std::result::Result<T, SatError>;
