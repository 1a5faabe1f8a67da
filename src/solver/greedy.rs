use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{Precondition, Result},
    instance::{Instance, Literal, Variable},
};

/// How often each signed literal occurs across an instance's clauses. Entries are laid out
/// as `-n..=-1` followed by `1..=n`; that layout fixes the order of ties after sorting.
#[derive(Debug, Clone)]
pub(crate) struct OccurrenceTable {
    num_variables: usize,
    entries: Vec<(Literal, usize)>,
}

impl OccurrenceTable {
    /// There is no entry for a literal 0, so the table holds exactly `2n` entries and shuffle
    /// blocks start on the first real literal.
    pub(crate) fn new(instance: &Instance) -> OccurrenceTable {
        let n = instance.num_variables();
        let negative = (1..=n).rev().map(|v| Literal::new(Variable(v), false));
        let positive = (1..=n).map(|v| Literal::new(Variable(v), true));
        let mut table = OccurrenceTable {
            num_variables: n,
            entries: negative.chain(positive).map(|lit| (lit, 0)).collect(),
        };
        for clause in instance.clauses() {
            for &literal in clause.literals() {
                let slot = table.slot(literal);
                table.entries[slot].1 += 1;
            }
        }
        table
    }

    fn slot(&self, literal: Literal) -> usize {
        let var = literal.var().0;
        if literal.polarity() {
            self.num_variables + var - 1
        } else {
            self.num_variables - var
        }
    }

    #[cfg(test)]
    pub(crate) fn count(&self, literal: Literal) -> usize {
        self.entries[self.slot(literal)].1
    }

    /// The literals in ascending order of occurrence. The sort is stable.
    pub(crate) fn ascending(mut self) -> Vec<Literal> {
        self.entries.sort_by_key(|&(_, count)| count);
        self.entries.into_iter().map(|(lit, _)| lit).collect()
    }
}

/// Makes each literal in `order` true in turn. Later literals overwrite earlier ones on the
/// same variable, so a variable ends up satisfying whichever of its literals comes last.
fn apply(instance: &mut Instance, order: &[Literal]) {
    for &literal in order {
        instance.set(literal, literal.polarity());
    }
}

/// Assigns every variable the polarity that occurs more often (ties go to the positive
/// literal) and returns the resulting unsatisfied ratio.
pub fn greedy_assign(instance: &mut Instance) -> Result<f64> {
    instance.require_clauses()?;
    let order = OccurrenceTable::new(instance).ascending();
    apply(instance, &order);
    let ratio = instance.unsatisfied_ratio()?;
    trace!("greedy ratio: {}", ratio);
    Ok(ratio)
}

/// Like [`greedy_assign`], but the sorted literals are cut into blocks of `block_size` and each
/// block is shuffled before the assignment is applied. A block size of 1 is plain greedy;
/// larger blocks let less frequent polarities win more often.
pub fn randomized_greedy_assign<R: Rng + ?Sized>(
    instance: &mut Instance,
    block_size: usize,
    rng: &mut R,
) -> Result<f64> {
    if block_size == 0 {
        return Err(Precondition::ZeroBlockSize.into());
    }
    instance.require_clauses()?;
    let mut order = OccurrenceTable::new(instance).ascending();
    for block in order.chunks_mut(block_size) {
        block.shuffle(rng);
    }
    apply(instance, &order);
    let ratio = instance.unsatisfied_ratio()?;
    trace!("randomized greedy ratio (block size {}): {}", block_size, ratio);
    Ok(ratio)
}
