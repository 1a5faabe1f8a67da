// Loader and writer for `p cnf` files of 3-literal clauses, for feeding instances in from
// outside. The instance semantics do not depend on it.
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    num,
};

use crate::{error::SatError, instance::*};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DimacsError {
    #[error("malformed header")]
    MalformedHeader,
    #[error("clause {0} has {1} literals, expected 3")]
    ClauseWidth(usize, usize),
    #[error("header declares {declared} clauses, found {found}")]
    ClauseCount { declared: usize, found: usize },
    #[error("io error")]
    IO(#[from] io::Error),
    #[error("not a valid value")]
    ParseError(#[from] num::ParseIntError),
    #[error("invalid instance: {0}")]
    Instance(#[from] SatError),
}

type Result<T> = std::result::Result<T, DimacsError>;

pub fn parse(filename: &str) -> Result<Instance> {
    let file = File::open(filename)?;
    read(BufReader::new(file))
}

/// Reads a `p cnf` file in which every clause has exactly three literals.
pub fn read<B: BufRead>(buffer: B) -> Result<Instance> {
    let mut words = buffer
        .lines()
        // Filter out lines starting with c - these are comments
        .filter(|l| match l {
            Ok(line) => !line.trim_start().starts_with('c'),
            // Keep errors! We need to terminate ASAP
            _ => true,
        })
        .flat_map(|line| match line {
            Ok(iter) => iter
                .split_ascii_whitespace()
                .map(|w| Ok(w.to_string()))
                .collect::<Vec<Result<String>>>(),
            Err(err) => vec![Err(err.into())],
        });

    let header = DimacsHeader::parse(&mut words)?;

    let mut clauses: Vec<Clause> = Vec::with_capacity(header.clause_count);
    let mut current_clause: Vec<i64> = vec![];

    for mb_word in words {
        match mb_word?.parse::<i64>()? {
            0 => {
                match current_clause[..] {
                    [a, b, c] => clauses.push(Clause::from_dimacs([a, b, c])?),
                    _ => {
                        return Err(DimacsError::ClauseWidth(
                            clauses.len(),
                            current_clause.len(),
                        ))
                    }
                }
                current_clause.clear();
            }
            encoded_value => current_clause.push(encoded_value),
        }
    }
    if !current_clause.is_empty() {
        return Err(DimacsError::ClauseWidth(clauses.len(), current_clause.len()));
    }
    if clauses.len() != header.clause_count {
        return Err(DimacsError::ClauseCount {
            declared: header.clause_count,
            found: clauses.len(),
        });
    }

    Ok(Instance::new(header.var_count, clauses)?)
}

/// Writes the instance's clauses in the format [`read`] accepts.
pub fn write<W: Write>(instance: &Instance, mut out: W) -> io::Result<()> {
    writeln!(
        out,
        "p cnf {} {}",
        instance.num_variables(),
        instance.num_clauses()
    )?;
    for clause in instance.clauses() {
        let [a, b, c] = clause.literals();
        writeln!(out, "{} {} {} 0", a, b, c)?;
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct DimacsHeader {
    var_count: usize,
    clause_count: usize,
}

impl DimacsHeader {
    fn parse<I>(words: &mut I) -> Result<Self>
    where
        I: Iterator<Item = Result<String>>,
    {
        let mut next = || match words.next() {
            Some(x) => x,
            None => Err(DimacsError::MalformedHeader),
        };

        let p = next()?;
        let cnf = next()?;
        if p != "p" || cnf != "cnf" {
            return Err(DimacsError::MalformedHeader);
        }
        let var_count = next()?;
        let clause_count = next()?;
        Ok(Self {
            var_count: var_count.parse::<usize>()?,
            clause_count: clause_count.parse::<usize>()?,
        })
    }
}
