use log::{debug, trace};
use rand::{seq::index, Rng};

use crate::{
    error::{Precondition, Result},
    instance::{Clause, Instance, Literal, Variable},
};

/// Builds random 3-SAT instances from an injected random source.
#[derive(Debug, Clone)]
pub struct Generator<R> {
    rng: R,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Generator<R> {
        Generator { rng }
    }

    /// The underlying random source, for callers that want one seeded stream shared between
    /// generation and the randomized solvers.
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Three distinct variables from `1..=num_variables`, each with a fair random sign.
    pub fn random_clause(&mut self, num_variables: usize) -> Result<Clause> {
        if num_variables < 3 {
            return Err(Precondition::TooFewVariables(num_variables).into());
        }
        let picked = index::sample(&mut self.rng, num_variables, 3);
        let mut literals = [Literal::new(Variable(1), true); 3];
        for (slot, ix) in literals.iter_mut().zip(picked.iter()) {
            *slot = Literal::new(Variable(ix + 1), self.rng.gen_bool(0.5));
        }
        Ok(Clause::new(literals))
    }

    /// An instance with independently drawn clauses and an all-false assignment. No
    /// satisfiability guarantee.
    pub fn random_instance(
        &mut self,
        num_variables: usize,
        num_clauses: usize,
    ) -> Result<Instance> {
        if num_variables < 3 {
            return Err(Precondition::TooFewVariables(num_variables).into());
        }
        let clauses = (0..num_clauses)
            .map(|_| self.random_clause(num_variables))
            .collect::<Result<Vec<_>>>()?;
        Instance::new(num_variables, clauses)
    }

    /// Overwrites the instance's assignment with fair coin flips.
    pub fn random_assignment(&mut self, instance: &mut Instance) {
        for value in instance.values_mut() {
            *value = self.rng.gen_bool(0.5);
        }
    }

    /// An instance built around a random planted assignment. Each clause is drawn at random and,
    /// while the planted assignment leaves it false, a randomly chosen position is negated.
    /// The planted assignment stays installed and is recorded on the instance.
    pub fn random_satisfiable_instance(
        &mut self,
        num_variables: usize,
        num_clauses: usize,
    ) -> Result<Instance> {
        if num_variables < 3 {
            return Err(Precondition::TooFewVariables(num_variables).into());
        }
        let mut instance = Instance::new(num_variables, vec![])?;
        self.random_assignment(&mut instance);
        instance.plant_current_assignment();
        trace!("planted: {:?}", instance.assignment());

        let mut repairs = 0usize;
        for _ in 0..num_clauses {
            let mut clause = self.random_clause(num_variables)?;
            while !instance.clause_value(&clause) {
                clause.negate(self.rng.gen_range(0..3));
                repairs += 1;
            }
            instance.push_clause(clause)?;
        }

        instance.check_planted()?;
        debug!(
            "generated satisfiable instance: {} variables, {} clauses, {} repairs",
            num_variables, num_clauses, repairs
        );
        Ok(instance)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{error::*, instance::*};

    use super::Generator;

    fn generator(seed: u64) -> Generator<StdRng> {
        Generator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_random_clause_distinct_variables() {
        let mut gen = generator(7);
        for _ in 0..500 {
            let clause = gen.random_clause(5).unwrap();
            let vars = clause.variables().collect_vec();
            assert!(vars.iter().all_unique(), "{:?}", clause);
            assert!(vars.iter().all(|v| (1..=5).contains(&v.0)), "{:?}", clause);
        }
    }

    #[test]
    fn test_random_clause_uses_both_signs() {
        let mut gen = generator(11);
        let literals = (0..200)
            .flat_map(|_| *gen.random_clause(3).unwrap().literals())
            .collect_vec();
        assert!(literals.iter().any(|l| l.polarity()));
        assert!(literals.iter().any(|l| !l.polarity()));
        // with exactly three variables every clause mentions each of them
        assert!(literals.iter().map(|l| l.var()).unique().count() == 3);
    }

    #[test]
    fn test_too_few_variables() {
        let mut gen = generator(0);
        let expected = SatError::Precondition(Precondition::TooFewVariables(2));
        assert_eq!(gen.random_clause(2).unwrap_err(), expected);
        assert_eq!(gen.random_instance(2, 4).unwrap_err(), expected);
        assert_eq!(gen.random_satisfiable_instance(2, 4).unwrap_err(), expected);
    }

    #[test]
    fn test_random_instance_shape() {
        let mut gen = generator(3);
        let instance = gen.random_instance(10, 42).unwrap();
        assert_eq!(instance.num_variables(), 10);
        assert_eq!(instance.num_clauses(), 42);
        assert_eq!(instance.assignment().as_slice(), &[false; 10]);
        assert!(instance.planted_assignment().is_none());
    }

    #[test]
    fn test_random_instance_is_reproducible() {
        let a = generator(99).random_instance(8, 20).unwrap();
        let b = generator(99).random_instance(8, 20).unwrap();
        assert_eq!(a.clauses(), b.clauses());
    }

    #[test]
    fn test_random_assignment_covers_both_values() {
        let mut gen = generator(5);
        let mut instance = gen.random_instance(64, 1).unwrap();
        gen.random_assignment(&mut instance);
        let values = instance.assignment().as_slice();
        assert_eq!(values.len(), 64);
        assert!(values.iter().any(|&v| v));
        assert!(values.iter().any(|&v| !v));
    }

    #[test]
    fn test_satisfiable_instance_keeps_planted_assignment() {
        let mut gen = generator(21);
        let instance = gen.random_satisfiable_instance(12, 60).unwrap();
        assert_eq!(instance.num_clauses(), 60);
        assert_eq!(instance.planted_assignment(), Some(instance.assignment()));
        assert!(instance.is_satisfied());
        assert_eq!(instance.unsatisfied_ratio(), Ok(0.0));
    }

    #[quickcheck]
    fn planted_assignment_satisfies_every_clause(
        seed: u64,
        num_variables: u8,
        num_clauses: u8,
    ) -> TestResult {
        let num_variables = num_variables as usize;
        if num_variables < 3 {
            return TestResult::discard();
        }
        let mut instance = generator(seed)
            .random_satisfiable_instance(num_variables, num_clauses as usize)
            .unwrap();
        let planted = instance.planted_assignment().unwrap().clone();
        instance.restore(planted).unwrap();
        TestResult::from_bool(instance.is_satisfied() && instance.is_fully_satisfied())
    }
}
